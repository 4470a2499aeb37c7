//! Minor allele frequency and missingness analysis.

use rayon::prelude::*;

use crate::base::SequenceMatrix;
use crate::errors::AnalysisError;

/// Compute the minor allele frequency of every site.
///
/// The reference base of a site is the first non-missing call in
/// individual order, not necessarily individual 0, which may be missing.
/// The frequency is the fraction of non-missing calls that differ from
/// the reference, folded to `1 - f` when above 0.5, so every entry lies
/// in [0, 0.5]. Missing calls are excluded from both numerator and
/// denominator.
///
/// Sites are independent, so they are computed in parallel.
///
/// # Errors
/// Returns `AnalysisError::NoReferenceBase` for a site whose calls are
/// all missing.
pub fn minor_allele_frequencies(matrix: &SequenceMatrix) -> Result<Vec<f64>, AnalysisError> {
    (0..matrix.cols())
        .into_par_iter()
        .map(|site| site_maf(matrix, site))
        .collect()
}

/// Minor allele frequency of a single site.
fn site_maf(matrix: &SequenceMatrix, site: usize) -> Result<f64, AnalysisError> {
    let mut reference = None;
    let mut called = 0usize;
    let mut differing = 0usize;

    for base in matrix.column(site) {
        if base.is_missing() {
            continue;
        }
        let first = *reference.get_or_insert(base);
        called += 1;
        if base != first {
            differing += 1;
        }
    }

    if reference.is_none() {
        return Err(AnalysisError::NoReferenceBase { site });
    }

    let freq = differing as f64 / called as f64;
    Ok(if freq > 0.5 { 1.0 - freq } else { freq })
}

/// Per-site fraction of missing calls.
pub fn missingness_frequencies(matrix: &SequenceMatrix) -> Vec<f64> {
    let rows = matrix.rows();
    (0..matrix.cols())
        .map(|site| {
            if rows == 0 {
                return 0.0;
            }
            let missing = matrix.column(site).filter(|b| b.is_missing()).count();
            missing as f64 / rows as f64
        })
        .collect()
}
