//! Variety selection
//!
//! Filters the variety catalog with composable predicates (zone, drought
//! tolerance, low-nitrogen tolerance) and ranks the survivors by yield.
//!
//! Tolerance filtering follows the derived risk:
//! - High risk: only High tolerance passes
//! - Medium risk: Medium or High tolerance passes
//! - Low or Unknown risk: no filtering

use crate::config::MAX_VARIETIES;
use crate::types::{RiskLevel, Tolerance, VarietyRecord};

/// Minimum tolerance a variety needs to cope with `risk`
pub fn required_tolerance(risk: RiskLevel) -> Option<Tolerance> {
    match risk {
        RiskLevel::High => Some(Tolerance::High),
        RiskLevel::Medium => Some(Tolerance::Medium),
        RiskLevel::Low | RiskLevel::Unknown => None,
    }
}

fn tolerates(actual: Tolerance, risk: RiskLevel) -> bool {
    required_tolerance(risk).map_or(true, |minimum| actual >= minimum)
}

/// Variety is adapted to exactly this agro-ecological zone
pub fn in_zone(zone: &str) -> impl Fn(&VarietyRecord) -> bool + '_ {
    move |v| v.adaptation_zone == zone
}

/// Drought tolerance is sufficient for `drought_risk`
pub fn meets_drought_need(drought_risk: RiskLevel) -> impl Fn(&VarietyRecord) -> bool {
    move |v| tolerates(v.drought_tolerance, drought_risk)
}

/// Low-nitrogen tolerance is sufficient for `soil_risk`
pub fn meets_low_n_need(soil_risk: RiskLevel) -> impl Fn(&VarietyRecord) -> bool {
    move |v| tolerates(v.low_n_tolerance, soil_risk)
}

/// Sort by yield potential, highest first. Ties keep catalog order and
/// NaN yields rank last.
pub fn rank_by_yield(candidates: &mut [&VarietyRecord]) {
    candidates.sort_by(|a, b| {
        a.yield_potential
            .is_nan()
            .cmp(&b.yield_potential.is_nan())
            .then_with(|| b.yield_potential.total_cmp(&a.yield_potential))
    });
}

/// Top 3 varieties for the zone and risks; empty when nothing qualifies
pub fn select<'a>(
    catalog: &'a [VarietyRecord],
    zone: &str,
    drought_risk: RiskLevel,
    soil_risk: RiskLevel,
) -> Vec<&'a VarietyRecord> {
    select_top(catalog, zone, drought_risk, soil_risk, MAX_VARIETIES)
}

/// Top `limit` varieties for the zone and risks
pub fn select_top<'a>(
    catalog: &'a [VarietyRecord],
    zone: &str,
    drought_risk: RiskLevel,
    soil_risk: RiskLevel,
    limit: usize,
) -> Vec<&'a VarietyRecord> {
    let zone_ok = in_zone(zone);
    let drought_ok = meets_drought_need(drought_risk);
    let low_n_ok = meets_low_n_need(soil_risk);

    let mut candidates: Vec<&VarietyRecord> = catalog
        .iter()
        .filter(|&v| zone_ok(v) && drought_ok(v) && low_n_ok(v))
        .collect();

    rank_by_yield(&mut candidates);
    candidates.truncate(limit);
    candidates
}
