//! Climate Classification
//!
//! Buckets the cumulative rainfall of the three months starting at the
//! planting month into a Low/Medium/High climate class.
//!
//! The window wraps circularly: planting in November sums November,
//! December and January. Every climate row for the region whose month falls
//! in the window contributes, duplicates included. No rows sum to zero,
//! which classifies as Low.

use crate::config::RainfallThresholds;
use crate::types::{ClimateClass, ClimateRecord, Month};

/// Length of the rainfall lookahead window (months)
pub const WINDOW_MONTHS: usize = 3;

/// Planting month followed by its two successors
pub fn month_window(start: Month) -> [Month; WINDOW_MONTHS] {
    std::array::from_fn(|i| start.offset(i))
}

/// Total rainfall (mm) for `region` over the window starting at `start`
pub fn window_rainfall(records: &[ClimateRecord], region: &str, start: Month) -> f64 {
    let window = month_window(start);

    records
        .iter()
        .filter(|r| r.region == region && window.contains(&r.month))
        .map(|r| r.avg_rainfall_mm)
        .sum()
}

/// Classify the planting window using the default thresholds (100 mm / 200 mm)
pub fn classify(records: &[ClimateRecord], region: &str, planting_month: Month) -> ClimateClass {
    classify_with(records, region, planting_month, &RainfallThresholds::default())
}

/// Classify the planting window using explicit thresholds
pub fn classify_with(
    records: &[ClimateRecord],
    region: &str,
    planting_month: Month,
    thresholds: &RainfallThresholds,
) -> ClimateClass {
    thresholds.class_for(window_rainfall(records, region, planting_month))
}
