//! Whole-matrix summary statistics.
//!
//! All four statistics measure sites against individual 0's call and,
//! unlike minor allele frequency analysis, do NOT exclude missing calls:
//! an `N` that differs from the reference counts as a difference. The two
//! conventions coexist deliberately; this one treats the matrix as raw
//! symbols, the frequency analyzer treats it as genotype calls.

use serde::{Deserialize, Serialize};

use super::utils::mean;
use crate::base::SequenceMatrix;

/// Summary statistics of a base matrix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SiteSummary {
    /// Mean over sites of the population variance (divide-by-N) of the
    /// matches-individual-0 indicator
    pub mean_nucleotide_diversity: f64,
    /// Mean over sites of the fraction of cells differing from
    /// individual 0, unfolded
    pub mean_minor_allele_frequency: f64,
    /// Sites where every cell equals individual 0's call
    pub invariant_sites: usize,
    /// Sites with at least one cell differing from individual 0's call
    pub variable_sites: usize,
}

/// Compute summary statistics over every site of `matrix`.
///
/// A site is invariant when all of its cells equal the cell of
/// individual 0, including the degenerate all-`N` site, whose row-0 cell
/// is also `N`. Nucleotide diversity of a site is the population variance
/// `p * (1 - p)` of the matches-individual-0 indicator, where `p` is the
/// matching fraction. An empty matrix summarizes to all zeros.
pub fn summarize(matrix: &SequenceMatrix) -> SiteSummary {
    let individuals = matrix.rows();
    let sites = matrix.cols();

    if individuals == 0 || sites == 0 {
        return SiteSummary {
            mean_nucleotide_diversity: 0.0,
            mean_minor_allele_frequency: 0.0,
            invariant_sites: 0,
            variable_sites: 0,
        };
    }

    let mut invariant_sites = 0usize;
    let mut diversities = Vec::with_capacity(sites);
    let mut difference_fractions = Vec::with_capacity(sites);

    for site in 0..sites {
        let reference = matrix.row(0)[site];
        let matches = matrix.column(site).filter(|&b| b == reference).count();

        if matches == individuals {
            invariant_sites += 1;
        }

        let p = matches as f64 / individuals as f64;
        diversities.push(p * (1.0 - p));
        difference_fractions.push(1.0 - p);
    }

    SiteSummary {
        mean_nucleotide_diversity: mean(&diversities),
        mean_minor_allele_frequency: mean(&difference_fractions),
        invariant_sites,
        variable_sites: sites - invariant_sites,
    }
}
