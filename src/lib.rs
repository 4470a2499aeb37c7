//! # seqsim
//!
//! Simulation of population genetic sequence data and per-site summary
//! statistics. The crate generates a matrix of DNA bases across individuals
//! and sites, injects mutations and missing data, computes per-site minor
//! allele frequencies, and derives filtered datasets from missingness and
//! frequency thresholds.

pub mod analysis;
pub mod base;
pub mod errors;
pub mod prelude;
pub mod simulation;

pub use base::{Base, SequenceMatrix};
pub use simulation::{SequenceSet, SimulationParams};
