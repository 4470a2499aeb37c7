//! Simulation parameters.

use serde::{Deserialize, Serialize};

use crate::errors::SimulationError;

/// Per-site mutation and per-cell missingness probabilities.
///
/// Both rates are probabilities and validated to lie in [0.0, 1.0] at
/// construction; the simulator relies on that invariant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationParams {
    mutation_rate: f64,
    missing_rate: f64,
}

impl SimulationParams {
    /// Create a new parameter set.
    ///
    /// # Errors
    /// Returns `SimulationError::InvalidRate` if either rate lies outside
    /// [0.0, 1.0].
    pub fn new(mutation_rate: f64, missing_rate: f64) -> Result<Self, SimulationError> {
        if !(0.0..=1.0).contains(&mutation_rate) {
            return Err(SimulationError::InvalidRate("mutation rate", mutation_rate));
        }
        if !(0.0..=1.0).contains(&missing_rate) {
            return Err(SimulationError::InvalidRate("missing rate", missing_rate));
        }
        Ok(Self {
            mutation_rate,
            missing_rate,
        })
    }

    /// Probability that an individual carries the substituted base at a site.
    #[inline(always)]
    pub fn mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    /// Probability that any single cell is overwritten with the missing marker.
    #[inline(always)]
    pub fn missing_rate(&self) -> f64 {
        self.missing_rate
    }
}

impl Default for SimulationParams {
    /// Standard rates: 10% mutation, 10% missingness.
    fn default() -> Self {
        Self {
            mutation_rate: 0.1,
            missing_rate: 0.1,
        }
    }
}
