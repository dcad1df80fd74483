//! Fertilizer and pest management recommendations.

use crate::types::{FertilizerPlan, RiskLevel, SoilLevel};

pub const NO_RECOMMENDATION: &str = "No recommendation";

pub const PEST_ADVICE_HIGH: &str =
    "Intensive monitoring and timely pesticide application recommended.";
pub const PEST_ADVICE_MEDIUM: &str = "Regular monitoring with targeted interventions if needed.";
pub const PEST_ADVICE_ROUTINE: &str = "Routine monitoring sufficient.";

/// Fertilizer plan (kg/ha) for a soil fertility level (case-insensitive).
///
/// | Level | N   | P2O5 | K2O |
/// |-------|-----|------|-----|
/// | Low   | 120 | 60   | 60  |
/// | Medium| 60  | 30   | 30  |
/// | High  | 30  | 0    | 0   |
///
/// Unrecognised levels get an all-zero plan noted "No recommendation".
pub fn fertilizer_plan(soil_level: &str) -> FertilizerPlan {
    let (n, p2o5, k2o, notes) = match SoilLevel::from_label(soil_level) {
        Some(SoilLevel::Low) => (
            120.0,
            60.0,
            60.0,
            "Basal NPK 15-15-15 at 400 kg/ha + Urea top-dress at 125 kg/ha and MOP 100 kg/ha recommended.\n\
             Split N: half at planting, half 4-6 weeks later.",
        ),
        Some(SoilLevel::Medium) => (
            60.0,
            30.0,
            30.0,
            "NPK 15-15-15 at moderate levels required + Split Urea fertilizer application",
        ),
        Some(SoilLevel::High) => (30.0, 0.0, 0.0, "Minimal fertilizer (only urea) input required."),
        None => (0.0, 0.0, 0.0, NO_RECOMMENDATION),
    };

    FertilizerPlan {
        n,
        p2o5,
        k2o,
        notes: notes.to_string(),
    }
}

/// Pest/disease management advice.
///
/// Only High and Medium get specific advice; Low and Unknown both fall
/// through to routine monitoring.
pub fn pest_advice(risk: RiskLevel) -> &'static str {
    match risk {
        RiskLevel::High => PEST_ADVICE_HIGH,
        RiskLevel::Medium => PEST_ADVICE_MEDIUM,
        _ => PEST_ADVICE_ROUTINE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_low_soil_needs_most_fertilizer() {
        let plan = fertilizer_plan("Low");
        assert_relative_eq!(plan.n, 120.0);
        assert_relative_eq!(plan.p2o5, 60.0);
        assert_relative_eq!(plan.k2o, 60.0);
        assert!(plan.notes.contains("Split N"));
    }

    #[test]
    fn test_fertilizer_table() {
        let medium = fertilizer_plan("MEDIUM");
        assert_eq!((medium.n, medium.p2o5, medium.k2o), (60.0, 30.0, 30.0));
        assert_eq!(
            medium.notes,
            "NPK 15-15-15 at moderate levels required + Split Urea fertilizer application"
        );

        let high = fertilizer_plan("high");
        assert_eq!((high.n, high.p2o5, high.k2o), (30.0, 0.0, 0.0));
        assert!(high.notes.contains("only urea"));
    }

    #[test]
    fn test_unrecognised_level_gets_zero_plan() {
        let plan = fertilizer_plan("Very High");
        assert_eq!((plan.n, plan.p2o5, plan.k2o), (0.0, 0.0, 0.0));
        assert_eq!(plan.notes, NO_RECOMMENDATION);
    }

    #[test]
    fn test_pest_advice() {
        assert_eq!(pest_advice(RiskLevel::High), PEST_ADVICE_HIGH);
        assert!(pest_advice(RiskLevel::Medium).contains("Regular monitoring"));
    }

    #[test]
    fn test_low_and_unknown_share_routine_advice() {
        assert_eq!(pest_advice(RiskLevel::Low), PEST_ADVICE_ROUTINE);
        assert_eq!(pest_advice(RiskLevel::Unknown), PEST_ADVICE_ROUTINE);
    }
}
