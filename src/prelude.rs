//! Commonly used imports for convenience.
//!
//! # Example
//!
//! ```
//! use seqsim::prelude::*;
//!
//! let set = SequenceSet::with_params(10, 50, SimulationParams::default(), Some(42)).unwrap();
//! let summary = set.summarize();
//! assert_eq!(summary.invariant_sites + summary.variable_sites, set.sites());
//! ```

pub use crate::analysis::{summarize, SiteSummary};
pub use crate::base::{Base, SequenceMatrix};
pub use crate::errors;
pub use crate::simulation::{simulate, SequenceSet, SimulationParams};
