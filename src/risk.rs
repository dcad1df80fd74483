//! Risk mapping rules
//!
//! Pure lookups from climate class and soil fertility to risk levels, and the
//! combined pest/disease pressure. Unrecognised labels map to
//! `RiskLevel::Unknown` rather than failing.

use crate::types::{ClimateClass, RiskLevel, SoilLevel};

/// Irrigation note paired with an unrecognised climate class
pub const UNKNOWN_IRRIGATION_NOTE: &str = "Unknown";

/// Drought risk with its irrigation advice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DroughtAssessment {
    pub risk: RiskLevel,
    pub irrigation_note: &'static str,
}

/// Drought risk is the inverse of window rainfall.
pub fn drought_risk(climate_class: ClimateClass) -> DroughtAssessment {
    let (risk, irrigation_note) = match climate_class {
        ClimateClass::Low => (RiskLevel::High, "Frequent irrigation required"),
        ClimateClass::Medium => (RiskLevel::Medium, "Moderate irrigation recommended"),
        ClimateClass::High => (RiskLevel::Low, "Irrigation usually not required"),
    };

    DroughtAssessment {
        risk,
        irrigation_note,
    }
}

/// Drought risk from a climate class label (case-insensitive)
pub fn drought_risk_from_label(label: &str) -> DroughtAssessment {
    ClimateClass::from_label(label)
        .map(drought_risk)
        .unwrap_or(DroughtAssessment {
            risk: RiskLevel::Unknown,
            irrigation_note: UNKNOWN_IRRIGATION_NOTE,
        })
}

/// Soil risk is the inverse of fertility: low fertility means high risk.
pub fn soil_risk(soil_level: &str) -> RiskLevel {
    match SoilLevel::from_label(soil_level) {
        Some(SoilLevel::Low) => RiskLevel::High,
        Some(SoilLevel::Medium) => RiskLevel::Medium,
        Some(SoilLevel::High) => RiskLevel::Low,
        None => RiskLevel::Unknown,
    }
}

/// Combined pest/disease pressure.
///
/// High if either input is High, otherwise Medium if either is Medium,
/// otherwise Low. The High check runs first, so `(High, Unknown)` is High,
/// `(Medium, Unknown)` is Medium and `(Unknown, Unknown)` is Low.
pub fn pest_disease_risk(drought_risk: RiskLevel, soil_risk: RiskLevel) -> RiskLevel {
    if drought_risk == RiskLevel::High || soil_risk == RiskLevel::High {
        RiskLevel::High
    } else if drought_risk == RiskLevel::Medium || soil_risk == RiskLevel::Medium {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}
