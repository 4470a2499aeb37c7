//! Site exclusion masks.
//!
//! Masks mark sites to *exclude*: an entry is true where the site fails
//! the criterion. `SequenceSet::filter` combines the two masks with a
//! logical OR and keeps the complement.

use super::frequency::missingness_frequencies;
use crate::base::SequenceMatrix;
use crate::errors::AnalysisError;

/// Mark sites whose fraction of missing calls exceeds `max_missing`.
///
/// # Errors
/// Returns `AnalysisError::InvalidThreshold` if `max_missing` lies
/// outside [0.0, 1.0]; out-of-range thresholds are rejected, not clamped.
pub fn missingness_mask(
    matrix: &SequenceMatrix,
    max_missing: f64,
) -> Result<Vec<bool>, AnalysisError> {
    check_threshold("max missing", max_missing)?;

    Ok(missingness_frequencies(matrix)
        .into_iter()
        .map(|freq| freq > max_missing)
        .collect())
}

/// Mark sites whose minor allele frequency falls below `min_maf`.
///
/// # Errors
/// Returns `AnalysisError::InvalidThreshold` if `min_maf` lies outside
/// [0.0, 1.0].
pub fn maf_mask(maf: &[f64], min_maf: f64) -> Result<Vec<bool>, AnalysisError> {
    check_threshold("min maf", min_maf)?;

    Ok(maf.iter().map(|&freq| freq < min_maf).collect())
}

fn check_threshold(name: &'static str, value: f64) -> Result<(), AnalysisError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(AnalysisError::InvalidThreshold(name, value));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missingness_mask() {
        // Site 0: 0/5 missing, site 1: 2/5 missing, site 2: 4/5 missing.
        let m: SequenceMatrix = "AAN\nANN\nAAN\nANN\nAAA".parse().unwrap();
        let mask = missingness_mask(&m, 0.2).unwrap();
        assert_eq!(mask, vec![false, true, true]);
    }

    #[test]
    fn test_missingness_mask_threshold_is_exclusive() {
        // Exactly 40% missing is not above a 0.4 threshold.
        let m: SequenceMatrix = "N\nN\nA\nA\nA".parse().unwrap();
        assert_eq!(missingness_mask(&m, 0.4).unwrap(), vec![false]);
        assert_eq!(missingness_mask(&m, 0.39).unwrap(), vec![true]);
    }

    #[test]
    fn test_missingness_mask_invalid_threshold() {
        let m: SequenceMatrix = "A\nC".parse().unwrap();
        assert!(matches!(
            missingness_mask(&m, -0.1),
            Err(AnalysisError::InvalidThreshold("max missing", _))
        ));
        assert!(missingness_mask(&m, 1.1).is_err());
    }

    #[test]
    fn test_maf_mask() {
        let maf = [0.0, 0.05, 0.1, 0.4];
        assert_eq!(maf_mask(&maf, 0.1).unwrap(), vec![true, true, false, false]);
    }

    #[test]
    fn test_maf_mask_threshold_is_strict() {
        // A site exactly at the cutoff is kept.
        let maf = [0.1];
        assert_eq!(maf_mask(&maf, 0.1).unwrap(), vec![false]);
    }

    #[test]
    fn test_maf_mask_zero_threshold_keeps_everything() {
        let maf = [0.0, 0.25, 0.5];
        assert_eq!(maf_mask(&maf, 0.0).unwrap(), vec![false; 3]);
    }

    #[test]
    fn test_maf_mask_invalid_threshold() {
        assert!(matches!(
            maf_mask(&[0.1], 1.5),
            Err(AnalysisError::InvalidThreshold("min maf", _))
        ));
    }
}
