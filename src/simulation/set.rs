//! The `SequenceSet` aggregate.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use super::{simulate, SimulationParams};
use crate::analysis::{
    maf_mask, minor_allele_frequencies, missingness_mask, summarize, SiteSummary,
};
use crate::base::SequenceMatrix;
use crate::errors::{AnalysisError, SetError, SimulationError};

/// A simulated population genetic dataset.
///
/// A `SequenceSet` owns an individuals-by-sites base matrix together with
/// the per-site minor allele frequencies derived from it. Both are
/// computed atomically at construction: either the constructor returns a
/// fully analyzed set or it fails, never something half-built. Filtering
/// derives new sets with their own independent matrices; the source set
/// is never modified.
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceSet {
    individuals: usize,
    sites: usize,
    matrix: SequenceMatrix,
    maf: Vec<f64>,
}

impl SequenceSet {
    /// Simulate a new dataset with default parameters and an
    /// entropy-seeded generator.
    ///
    /// # Errors
    /// Fails with `SimulationError::InvalidDimension` when either
    /// dimension is zero, and with `AnalysisError::NoReferenceBase` when
    /// missingness wiped out every call at some site.
    pub fn new(individuals: usize, sites: usize) -> Result<Self, SetError> {
        Self::with_params(individuals, sites, SimulationParams::default(), None)
    }

    /// Simulate a new dataset with explicit parameters.
    ///
    /// `Some(seed)` yields a reproducible dataset; `None` seeds the
    /// generator from process entropy.
    pub fn with_params(
        individuals: usize,
        sites: usize,
        params: SimulationParams,
        seed: Option<u64>,
    ) -> Result<Self, SetError> {
        let mut rng = match seed {
            Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
            None => Xoshiro256PlusPlus::from_seed(rand::rng().random()),
        };
        Self::from_rng(individuals, sites, &params, &mut rng)
    }

    /// Simulate a new dataset drawing all randomness from `rng`.
    pub fn from_rng<R: Rng + ?Sized>(
        individuals: usize,
        sites: usize,
        params: &SimulationParams,
        rng: &mut R,
    ) -> Result<Self, SetError> {
        if individuals == 0 {
            return Err(SimulationError::InvalidDimension("individual count", individuals).into());
        }
        if sites == 0 {
            return Err(SimulationError::InvalidDimension("site count", sites).into());
        }

        let matrix = simulate(individuals, sites, params, rng);
        Self::from_matrix(matrix)
    }

    /// Construct a set around an existing matrix, deriving minor allele
    /// frequencies fresh.
    ///
    /// This is the non-simulating path used by [`derive_filtered`]; the
    /// matrix is taken as-is. Zero-column matrices are accepted (their
    /// frequency vector is empty) so an empty filter result is still a
    /// valid set.
    ///
    /// [`derive_filtered`]: SequenceSet::derive_filtered
    pub fn from_matrix(matrix: SequenceMatrix) -> Result<Self, SetError> {
        let maf = minor_allele_frequencies(&matrix)?;
        Ok(Self {
            individuals: matrix.rows(),
            sites: matrix.cols(),
            matrix,
            maf,
        })
    }

    /// Number of individuals (matrix rows).
    #[inline(always)]
    pub fn individuals(&self) -> usize {
        self.individuals
    }

    /// Number of sites (matrix columns).
    #[inline(always)]
    pub fn sites(&self) -> usize {
        self.sites
    }

    /// Borrow the base matrix.
    #[inline]
    pub fn matrix(&self) -> &SequenceMatrix {
        &self.matrix
    }

    /// Per-site minor allele frequencies, each in [0, 0.5], computed over
    /// non-missing calls only.
    #[inline]
    pub fn minor_allele_frequencies(&self) -> &[f64] {
        &self.maf
    }

    /// Reduce the matrix to the sites that pass both thresholds.
    ///
    /// A site is dropped when its missingness exceeds `max_missing` OR its
    /// minor allele frequency falls below `min_maf`; surviving sites keep
    /// their original order. Dropping every site is not an error; the
    /// result is then a valid zero-column matrix.
    ///
    /// # Errors
    /// Fails with `AnalysisError::InvalidThreshold` when either threshold
    /// lies outside [0.0, 1.0].
    pub fn filter(&self, max_missing: f64, min_maf: f64) -> Result<SequenceMatrix, AnalysisError> {
        let too_missing = missingness_mask(&self.matrix, max_missing)?;
        let too_rare = maf_mask(&self.maf, min_maf)?;

        let keep: Vec<bool> = too_missing
            .iter()
            .zip(&too_rare)
            .map(|(&missing, &rare)| !(missing || rare))
            .collect();

        Ok(self.matrix.keep_columns(&keep))
    }

    /// Reduce the matrix to the sites whose missingness does not exceed
    /// `max_missing`.
    pub fn filter_missing(&self, max_missing: f64) -> Result<SequenceMatrix, AnalysisError> {
        let excluded = missingness_mask(&self.matrix, max_missing)?;
        let keep: Vec<bool> = excluded.iter().map(|&e| !e).collect();
        Ok(self.matrix.keep_columns(&keep))
    }

    /// Reduce the matrix to the sites whose minor allele frequency is at
    /// least `min_maf`.
    pub fn filter_maf(&self, min_maf: f64) -> Result<SequenceMatrix, AnalysisError> {
        let excluded = maf_mask(&self.maf, min_maf)?;
        let keep: Vec<bool> = excluded.iter().map(|&e| !e).collect();
        Ok(self.matrix.keep_columns(&keep))
    }

    /// Derive a new, independent set containing only the sites that pass
    /// both thresholds.
    ///
    /// The derived set's matrix is exactly the filtered matrix (nothing is
    /// re-simulated) and its minor allele frequencies are recomputed from
    /// the surviving sites. It shares no state with `self`.
    pub fn derive_filtered(&self, max_missing: f64, min_maf: f64) -> Result<SequenceSet, SetError> {
        let reduced = self.filter(max_missing, min_maf)?;
        Self::from_matrix(reduced)
    }

    /// Summary statistics over the current matrix.
    pub fn summarize(&self) -> SiteSummary {
        summarize(&self.matrix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::Base;

    fn seeded(individuals: usize, sites: usize, seed: u64) -> SequenceSet {
        SequenceSet::with_params(individuals, sites, SimulationParams::default(), Some(seed))
            .unwrap()
    }

    #[test]
    fn test_new_rejects_zero_dimensions() {
        let err = SequenceSet::new(0, 10).unwrap_err();
        assert!(matches!(
            err,
            SetError::Simulation(SimulationError::InvalidDimension("individual count", 0))
        ));

        let err = SequenceSet::new(10, 0).unwrap_err();
        assert!(matches!(
            err,
            SetError::Simulation(SimulationError::InvalidDimension("site count", 0))
        ));
    }

    #[test]
    fn test_construction_shape_and_maf_length() {
        let set = seeded(12, 30, 42);
        assert_eq!(set.individuals(), 12);
        assert_eq!(set.sites(), 30);
        assert_eq!(set.matrix().rows(), 12);
        assert_eq!(set.matrix().cols(), 30);
        assert_eq!(set.minor_allele_frequencies().len(), 30);
    }

    #[test]
    fn test_maf_always_folded() {
        let set = seeded(20, 100, 7);
        for &maf in set.minor_allele_frequencies() {
            assert!((0.0..=0.5).contains(&maf), "unfolded maf {maf}");
        }
    }

    #[test]
    fn test_seeded_construction_deterministic() {
        let a = seeded(10, 25, 123);
        let b = seeded(10, 25, 123);
        assert_eq!(a, b);
    }

    #[test]
    fn test_construction_fails_on_all_missing_site() {
        // Certain missingness wipes out every call at every site.
        let params = SimulationParams::new(0.1, 1.0).unwrap();
        let err = SequenceSet::with_params(5, 5, params, Some(42)).unwrap_err();
        assert!(matches!(
            err,
            SetError::Analysis(AnalysisError::NoReferenceBase { .. })
        ));
    }

    #[test]
    fn test_from_matrix_uses_matrix_as_is() {
        let matrix: SequenceMatrix = "ACGT\nACGT\nACGA".parse().unwrap();
        let set = SequenceSet::from_matrix(matrix.clone()).unwrap();
        assert_eq!(set.matrix(), &matrix);
        assert_eq!(set.individuals(), 3);
        assert_eq!(set.sites(), 4);
        assert_eq!(set.minor_allele_frequencies(), &[0.0, 0.0, 0.0, 1.0 / 3.0]);
    }

    #[test]
    fn test_from_matrix_accepts_zero_columns() {
        let matrix = SequenceMatrix::from_rows(vec![vec![], vec![]]).unwrap();
        let set = SequenceSet::from_matrix(matrix).unwrap();
        assert_eq!(set.sites(), 0);
        assert!(set.minor_allele_frequencies().is_empty());
    }

    #[test]
    fn test_filter_excludes_by_either_criterion() {
        // Site 0: invariant (maf 0), fully called.
        // Site 1: maf 0.4, fully called.
        // Site 2: 3/5 missing.
        let matrix: SequenceMatrix = "AAN\nAAN\nACN\nACC\nACA".parse().unwrap();
        let set = SequenceSet::from_matrix(matrix).unwrap();

        let reduced = set.filter(0.5, 0.1).unwrap();
        assert_eq!(reduced.cols(), 1);
        assert_eq!(reduced.to_string(), "A\nA\nC\nC\nC");
    }

    #[test]
    fn test_filter_keeps_all_when_thresholds_permissive() {
        let set = seeded(10, 20, 5);
        let reduced = set.filter(1.0, 0.0).unwrap();
        assert_eq!(reduced, *set.matrix());
    }

    #[test]
    fn test_filter_invalid_thresholds() {
        let set = seeded(5, 5, 1);
        assert!(matches!(
            set.filter(1.5, 0.1),
            Err(AnalysisError::InvalidThreshold("max missing", _))
        ));
        assert!(matches!(
            set.filter(0.5, -0.1),
            Err(AnalysisError::InvalidThreshold("min maf", _))
        ));
    }

    #[test]
    fn test_filter_missing_single_criterion() {
        let matrix: SequenceMatrix = "AN\nAN\nAN\nAC\nAA".parse().unwrap();
        let set = SequenceSet::from_matrix(matrix).unwrap();

        // Site 1 is 60% missing.
        let reduced = set.filter_missing(0.5).unwrap();
        assert_eq!(reduced.cols(), 1);
        assert!(reduced.column(0).all(|b| b == Base::A));
    }

    #[test]
    fn test_filter_maf_single_criterion() {
        let matrix: SequenceMatrix = "AC\nAC\nAC\nAG\nAC".parse().unwrap();
        let set = SequenceSet::from_matrix(matrix).unwrap();

        // Site 0 is invariant (maf 0), site 1 has maf 0.2.
        let reduced = set.filter_maf(0.1).unwrap();
        assert_eq!(reduced.cols(), 1);
        assert_eq!(reduced.get(3, 0), Some(Base::G));
    }

    #[test]
    fn test_derive_filtered_independent_and_recomputed() {
        let matrix: SequenceMatrix = "ACN\nACN\nAGN\nAGA\nAGA".parse().unwrap();
        let set = SequenceSet::from_matrix(matrix).unwrap();

        let derived = set.derive_filtered(0.5, 0.1).unwrap();
        assert_eq!(derived.individuals(), set.individuals());
        assert_eq!(derived.sites(), 1);
        assert_eq!(derived.minor_allele_frequencies(), &[0.4]);

        // Source set is untouched.
        assert_eq!(set.sites(), 3);
    }

    #[test]
    fn test_derive_filtered_idempotent() {
        let set = seeded(15, 60, 21);
        let once = set.derive_filtered(0.3, 0.05).unwrap();
        let twice = once.derive_filtered(0.3, 0.05).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_derive_filtered_empty_result() {
        // Site 0: maf 0.2, below the 0.3 cutoff. Site 1: 4/5 missing.
        let matrix: SequenceMatrix = "AN\nAN\nAN\nAN\nCA".parse().unwrap();
        let set = SequenceSet::from_matrix(matrix).unwrap();

        let derived = set.derive_filtered(0.5, 0.3).unwrap();
        assert_eq!(derived.sites(), 0);
        assert_eq!(derived.individuals(), 5);
        assert!(derived.minor_allele_frequencies().is_empty());
    }

    #[test]
    fn test_summarize_matches_matrix_summary() {
        let set = seeded(10, 30, 3);
        let summary = set.summarize();
        assert_eq!(
            summary.invariant_sites + summary.variable_sites,
            set.sites()
        );
    }
}
