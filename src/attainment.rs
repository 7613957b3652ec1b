//! Attainment bands and score rollups.
//!
//! Bands are always derived fresh from the percent they describe -
//! never stored alongside it - so a re-scored rubric can never leave a
//! stale classification behind.

use serde::{Deserialize, Serialize};

// ==================== BANDS ====================

/// Lower bound of the Excellent band (inclusive)
const EXCELLENT_MIN: f64 = 85.0;

/// Lower bound of the Satisfactory band (inclusive)
const SATISFACTORY_MIN: f64 = 70.0;

/// Lower bound of the Developing band (inclusive)
const DEVELOPING_MIN: f64 = 50.0;

/// Qualitative attainment band for a percent score.
///
/// Variants are in ascending order so `Ord` agrees with attainment:
/// NotYet < Developing < Satisfactory < Excellent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttainmentBand {
    NotYet,
    Developing,
    Satisfactory,
    Excellent,
}

impl AttainmentBand {
    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            AttainmentBand::Excellent => "Excellent",
            AttainmentBand::Satisfactory => "Satisfactory",
            AttainmentBand::Developing => "Developing",
            AttainmentBand::NotYet => "Not Yet",
        }
    }
}

/// Classify a percent score into its attainment band.
/// Boundary values belong to the higher band.
pub fn classify(percent: f64) -> AttainmentBand {
    if percent >= EXCELLENT_MIN {
        AttainmentBand::Excellent
    } else if percent >= SATISFACTORY_MIN {
        AttainmentBand::Satisfactory
    } else if percent >= DEVELOPING_MIN {
        AttainmentBand::Developing
    } else {
        AttainmentBand::NotYet
    }
}

// ==================== ROLLUPS ====================

/// One scored entity in a rollup: a rubric criterion, an assignment,
/// a course outcome. Weight is caller-defined.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredItem {
    /// Percent score in [0, 100]
    pub percent: f64,

    /// Relative weight (>= 0)
    pub weight: f64,
}

/// Weighted mean of the items, rounded to 2 decimal places.
///
/// None when the item set is empty or the total weight is zero: there
/// is nothing to average over, and callers must not read that as a
/// zero score.
pub fn weighted_average(items: &[ScoredItem]) -> Option<f64> {
    if items.is_empty() {
        return None;
    }
    let total_weight: f64 = items.iter().map(|i| i.weight).sum();
    if total_weight == 0.0 {
        return None;
    }
    let weighted_sum: f64 = items.iter().map(|i| i.percent * i.weight).sum();
    Some((weighted_sum / total_weight * 100.0).round() / 100.0)
}

/// Plain arithmetic mean, unrounded. None for an empty set.
///
/// The rounding asymmetry with `weighted_average` is inherited product
/// behavior, kept as-is.
pub fn simple_average(scores: &[f64]) -> Option<f64> {
    if scores.is_empty() {
        return None;
    }
    Some(scores.iter().sum::<f64>() / scores.len() as f64)
}

/// Per-band counts over a set of percent scores, for dashboard
/// summaries. Recomputed from the scores on every call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BandDistribution {
    pub excellent: u32,
    pub satisfactory: u32,
    pub developing: u32,
    pub not_yet: u32,
}

/// Count how many scores fall in each band.
pub fn band_distribution(percents: &[f64]) -> BandDistribution {
    let mut dist = BandDistribution::default();
    for &percent in percents {
        match classify(percent) {
            AttainmentBand::Excellent => dist.excellent += 1,
            AttainmentBand::Satisfactory => dist.satisfactory += 1,
            AttainmentBand::Developing => dist.developing += 1,
            AttainmentBand::NotYet => dist.not_yet += 1,
        }
    }
    dist
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_belong_to_the_higher_band() {
        // (percent, expected band)
        let cases = vec![
            (100.0, AttainmentBand::Excellent),
            (85.0, AttainmentBand::Excellent),
            (84.99, AttainmentBand::Satisfactory),
            (70.0, AttainmentBand::Satisfactory),
            (69.99, AttainmentBand::Developing),
            (50.0, AttainmentBand::Developing),
            (49.99, AttainmentBand::NotYet),
            (0.0, AttainmentBand::NotYet),
        ];
        for (percent, expected) in cases {
            assert_eq!(classify(percent), expected, "percent {}", percent);
        }
    }

    #[test]
    fn classification_is_idempotent() {
        for percent in [49.99, 50.0, 69.99, 70.0, 84.99, 85.0] {
            assert_eq!(classify(percent), classify(percent));
        }
    }

    #[test]
    fn band_ordering_matches_attainment() {
        assert!(AttainmentBand::NotYet < AttainmentBand::Developing);
        assert!(AttainmentBand::Developing < AttainmentBand::Satisfactory);
        assert!(AttainmentBand::Satisfactory < AttainmentBand::Excellent);
    }

    #[test]
    fn weighted_average_rounds_to_two_decimals() {
        let items = [
            ScoredItem { percent: 80.0, weight: 0.6 },
            ScoredItem { percent: 90.0, weight: 0.4 },
        ];
        assert_eq!(weighted_average(&items), Some(84.0));

        let uneven = [
            ScoredItem { percent: 70.0, weight: 1.0 },
            ScoredItem { percent: 80.0, weight: 2.0 },
        ];
        assert_eq!(weighted_average(&uneven), Some(76.67)); // 230/3 rounded
    }

    #[test]
    fn no_weight_means_no_average() {
        assert_eq!(weighted_average(&[]), None);
        assert_eq!(
            weighted_average(&[ScoredItem { percent: 80.0, weight: 0.0 }]),
            None
        );
    }

    #[test]
    fn simple_average_is_unrounded() {
        assert_eq!(simple_average(&[]), None);
        assert_eq!(simple_average(&[90.0]), Some(90.0));
        // 70 + 80 + 95 = 245; mean keeps full precision
        assert_eq!(simple_average(&[70.0, 80.0, 95.0]), Some(245.0 / 3.0));
    }

    #[test]
    fn distribution_counts_every_band() {
        let dist = band_distribution(&[92.0, 85.0, 72.5, 55.0, 31.0, 49.99]);
        assert_eq!(dist.excellent, 2);
        assert_eq!(dist.satisfactory, 1);
        assert_eq!(dist.developing, 1);
        assert_eq!(dist.not_yet, 2);
    }
}
