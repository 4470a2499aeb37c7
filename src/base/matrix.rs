use std::fmt;
use std::str::FromStr;

use super::Base;
use crate::errors::MatrixError;

/// An individuals-by-sites grid of site symbols.
///
/// Rows are individuals, columns are sites. Storage is a single row-major
/// `Vec<Base>`, so a row is a contiguous slice while a column is an
/// iterator. The matrix is immutable once constructed; filtering
/// operations build a new matrix rather than editing cells in place.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SequenceMatrix {
    rows: usize,
    cols: usize,
    data: Vec<Base>,
}

impl SequenceMatrix {
    /// Create a matrix from row-major data.
    ///
    /// Returns `MatrixError::ShapeMismatch` if `data.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<Base>) -> Result<Self, MatrixError> {
        if data.len() != rows * cols {
            return Err(MatrixError::ShapeMismatch {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Create a matrix from per-individual rows.
    ///
    /// All rows must have equal length; the first offending row produces
    /// `MatrixError::RaggedRow`.
    pub fn from_rows(rows: Vec<Vec<Base>>) -> Result<Self, MatrixError> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);

        let mut data = Vec::with_capacity(n_rows * n_cols);
        for (row, cells) in rows.into_iter().enumerate() {
            if cells.len() != n_cols {
                return Err(MatrixError::RaggedRow {
                    row,
                    expected: n_cols,
                    found: cells.len(),
                });
            }
            data.extend(cells);
        }

        Ok(Self {
            rows: n_rows,
            cols: n_cols,
            data,
        })
    }

    /// Internal constructor for data whose shape is correct by construction.
    #[inline]
    pub(crate) fn from_raw(rows: usize, cols: usize, data: Vec<Base>) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self { rows, cols, data }
    }

    /// Number of individuals (rows).
    #[inline(always)]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of sites (columns).
    #[inline(always)]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Return `true` if the matrix holds no cells.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Return the symbol at (`row`, `col`), or `None` if out of range.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<Base> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// Borrow one individual's sequence as a slice.
    ///
    /// Panics if `row` is out of bounds (matching slice indexing).
    #[inline]
    pub fn row(&self, row: usize) -> &[Base] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// Iterate over one site's symbols, in individual order.
    ///
    /// Panics if `col` is out of bounds.
    #[inline]
    pub fn column(&self, col: usize) -> impl Iterator<Item = Base> + '_ {
        assert!(col < self.cols, "column {col} out of bounds ({})", self.cols);
        (0..self.rows).map(move |row| self.data[row * self.cols + col])
    }

    /// Borrow the underlying row-major cell slice.
    #[inline]
    pub fn as_slice(&self) -> &[Base] {
        &self.data
    }

    /// Build a new matrix keeping only the columns where `keep` is true.
    ///
    /// Kept columns preserve their original order and the row count is
    /// unchanged. Keeping no columns yields a valid zero-column matrix.
    pub fn keep_columns(&self, keep: &[bool]) -> SequenceMatrix {
        debug_assert_eq!(keep.len(), self.cols);

        let kept: Vec<usize> = keep
            .iter()
            .enumerate()
            .filter_map(|(col, &k)| k.then_some(col))
            .collect();

        let mut data = Vec::with_capacity(self.rows * kept.len());
        for row in 0..self.rows {
            let offset = row * self.cols;
            data.extend(kept.iter().map(|&col| self.data[offset + col]));
        }

        SequenceMatrix::from_raw(self.rows, kept.len(), data)
    }
}

impl fmt::Display for SequenceMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for &base in self.row(row) {
                write!(f, "{}", base.to_char())?;
            }
            if row + 1 < self.rows {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl FromStr for SequenceMatrix {
    type Err = MatrixError;

    /// Parse a newline-separated block of rows (e.g. `"ACGT\nACNT"`).
    ///
    /// Case-insensitive for ASCII letters. Characters outside the
    /// {A,C,G,T,N} alphabet produce `MatrixError::InvalidChar`; rows of
    /// unequal length produce `MatrixError::RaggedRow`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Result<Vec<Vec<Base>>, MatrixError> = s
            .lines()
            .map(|line| {
                line.chars()
                    .map(|c| Base::from_ascii(c as u8).ok_or(MatrixError::InvalidChar(c)))
                    .collect()
            })
            .collect();

        Self::from_rows(rows?)
    }
}
