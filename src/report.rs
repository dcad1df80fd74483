//! Advisory report output
//!
//! The single record produced per (region, planting month, soil level)
//! query. Rendering is left to the presentation layer.

use serde::{Deserialize, Serialize};

use crate::types::{ClimateClass, FertilizerPlan, Month, RiskLevel, VarietyRecord};

/// Shown in place of the variety list when nothing qualifies
pub const NO_SUITABLE_VARIETIES: &str = "No suitable varieties found for the selected conditions.";

/// Complete advisory for one query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisoryReport {
    pub region: String,

    /// Agro-ecological zone of the region
    pub agro_zone: String,

    pub planting_month: Month,

    /// Soil level as supplied by the caller
    pub soil_level: String,

    pub climate_class: ClimateClass,

    /// Rainfall summed over the planting window (mm)
    pub window_rainfall_mm: f64,

    pub drought_risk: RiskLevel,
    pub soil_risk: RiskLevel,
    pub pest_risk: RiskLevel,

    pub fertilizer: FertilizerPlan,
    pub irrigation_note: String,
    pub pest_note: String,

    /// Ranked by yield potential, at most the configured limit
    pub varieties: Vec<VarietyRecord>,
}

impl AdvisoryReport {
    pub fn has_varieties(&self) -> bool {
        !self.varieties.is_empty()
    }

    /// Highest-yielding recommended variety
    pub fn top_variety(&self) -> Option<&VarietyRecord> {
        self.varieties.first()
    }

    /// Recommended variety names in rank order
    pub fn variety_names(&self) -> Vec<&str> {
        self.varieties.iter().map(|v| v.name.as_str()).collect()
    }

    /// One line per recommended variety, or the "no suitable varieties" notice
    pub fn variety_summary(&self) -> Vec<String> {
        if !self.has_varieties() {
            return vec![NO_SUITABLE_VARIETIES.to_string()];
        }

        self.varieties
            .iter()
            .enumerate()
            .map(|(i, v)| {
                format!(
                    "{}. {} ({} maturity, {} grain): {:.1} t/ha, drought tolerance {}, low-N tolerance {}",
                    i + 1,
                    v.name,
                    v.maturity_group,
                    v.grain_type,
                    v.yield_potential,
                    v.drought_tolerance,
                    v.low_n_tolerance
                )
            })
            .collect()
    }
}
