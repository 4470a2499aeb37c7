use std::error;
use std::fmt;

/// Error returned when attempting to convert an invalid byte/character into
/// a `Base`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidBase(pub u8);

impl fmt::Display for InvalidBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid base byte: {} ('{}')", self.0, self.0 as char)
    }
}

impl error::Error for InvalidBase {}

/// Error type for failures when constructing a `SequenceMatrix`.
#[derive(Debug, Clone, PartialEq)]
pub enum MatrixError {
    /// A character was not recognized as a valid site symbol.
    InvalidChar(char),

    /// A row's length disagrees with the first row's length.
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Row-major data length disagrees with the requested shape.
    ShapeMismatch {
        rows: usize,
        cols: usize,
        len: usize,
    },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidChar(c) => write!(f, "Invalid character in matrix: '{c}'"),
            Self::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "Row {row} has {found} sites, expected {expected}"
            ),
            Self::ShapeMismatch { rows, cols, len } => write!(
                f,
                "Data length {len} does not match shape {rows} x {cols}"
            ),
        }
    }
}

impl error::Error for MatrixError {}

/// Errors that can occur when configuring or running a simulation.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// A dimension that must be positive was zero
    InvalidDimension(&'static str, usize),
    /// A rate outside [0.0, 1.0]
    InvalidRate(&'static str, f64),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension(name, value) => {
                write!(f, "Invalid {name}: {value} (must be positive)")
            }
            Self::InvalidRate(name, rate) => {
                write!(
                    f,
                    "Invalid {name}: {rate} (must be between 0.0 and 1.0)"
                )
            }
        }
    }
}

impl error::Error for SimulationError {}

/// Errors that can occur during frequency analysis and filtering.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// A site contains only missing calls, so no reference base exists
    NoReferenceBase { site: usize },
    /// A filter threshold outside [0.0, 1.0]
    InvalidThreshold(&'static str, f64),
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoReferenceBase { site } => {
                write!(f, "Site {site} has no non-missing base to use as reference")
            }
            Self::InvalidThreshold(name, value) => {
                write!(
                    f,
                    "Invalid {name}: {value} (must be between 0.0 and 1.0)"
                )
            }
        }
    }
}

impl error::Error for AnalysisError {}

/// Errors that can occur while constructing or deriving a `SequenceSet`.
#[derive(Debug, Clone, PartialEq)]
pub enum SetError {
    /// Invalid matrix shape or content
    Matrix(MatrixError),
    /// Invalid simulation dimensions or rates
    Simulation(SimulationError),
    /// Frequency analysis failure
    Analysis(AnalysisError),
}

impl fmt::Display for SetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Matrix(e) => write!(f, "Matrix error: {e}"),
            Self::Simulation(e) => write!(f, "Simulation error: {e}"),
            Self::Analysis(e) => write!(f, "Analysis error: {e}"),
        }
    }
}

impl error::Error for SetError {}

impl From<MatrixError> for SetError {
    fn from(e: MatrixError) -> Self {
        Self::Matrix(e)
    }
}

impl From<SimulationError> for SetError {
    fn from(e: SimulationError) -> Self {
        Self::Simulation(e)
    }
}

impl From<AnalysisError> for SetError {
    fn from(e: AnalysisError) -> Self {
        Self::Analysis(e)
    }
}
