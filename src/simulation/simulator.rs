//! Base-matrix simulation.
//!
//! The simulator draws one ancestral sequence, replicates it across all
//! individuals, injects a single substituted base per site into a random
//! subset of individuals, and finally overwrites random cells with the
//! missing marker. All randomness flows through the caller's generator, so
//! a seeded generator reproduces the dataset exactly.

use rand::Rng;
use rand_distr::{Bernoulli, Distribution};

use super::SimulationParams;
use crate::base::{Base, SequenceMatrix};

/// Simulate an `individuals` x `sites` base matrix.
///
/// For each site, every individual starts from the same ancestral base.
/// One substituted base per site is drawn from the three bases distinct
/// from the ancestral one, and each individual independently carries it
/// with probability `mutation_rate`, so all mutated individuals at a
/// site share the same substituted base. Missingness is applied last,
/// per cell, with probability `missing_rate`, and may overwrite either
/// an ancestral or a mutated base.
///
/// Dimensions are not validated here; `SequenceSet` rejects zero
/// dimensions before calling in. A zero-sized request simply yields an
/// empty matrix.
pub fn simulate<R: Rng + ?Sized>(
    individuals: usize,
    sites: usize,
    params: &SimulationParams,
    rng: &mut R,
) -> SequenceMatrix {
    let ancestral: Vec<Base> = (0..sites)
        .map(|_| Base::NUCLEOTIDES[rng.random_range(0..4)])
        .collect();

    // Seed every row with the ancestral sequence.
    let mut data = Vec::with_capacity(individuals * sites);
    for _ in 0..individuals {
        data.extend_from_slice(&ancestral);
    }

    // Rates are validated in SimulationParams::new, so these cannot fail.
    let mutation = Bernoulli::new(params.mutation_rate()).unwrap();
    let missing = Bernoulli::new(params.missing_rate()).unwrap();

    // One substituted base per site, shared by every mutated individual.
    for site in 0..sites {
        let substituted = match ancestral[site].substitutes() {
            Some(options) => options[rng.random_range(0..3)],
            None => continue, // ancestral bases are never missing
        };
        for individual in 0..individuals {
            if mutation.sample(rng) {
                data[individual * sites + site] = substituted;
            }
        }
    }

    // Missingness is independent per cell and applied after mutation.
    for cell in data.iter_mut() {
        if missing.sample(rng) {
            *cell = Base::N;
        }
    }

    SequenceMatrix::from_raw(individuals, sites, data)
}
