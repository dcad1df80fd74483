//! Advisory Orchestrator
//!
//! Validates a query against the reference tables, then runs the fixed
//! pipeline:
//!
//! 1. Climate class from the 3-month rainfall window
//! 2. Drought, soil and pest/disease risk
//! 3. Fertilizer, irrigation and pest recommendations
//! 4. Variety shortlist for the region's agro-ecological zone
//!
//! The only hard validation is the soil level check (plus the month name and
//! region lookups, which fail with explicit errors instead of panicking).
//! All stages are pure functions over the read-only tables, so independent
//! queries can run in parallel.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::climate;
use crate::config::AdvisoryConfig;
use crate::data::ReferenceTables;
use crate::error::{AdvisoryError, Result};
use crate::recommendations;
use crate::report::AdvisoryReport;
use crate::risk;
use crate::types::Month;
use crate::varieties;

/// One advisory request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvisoryQuery {
    pub region: String,
    pub planting_month: String,
    pub soil_level: String,
}

impl AdvisoryQuery {
    pub fn new(
        region: impl Into<String>,
        planting_month: impl Into<String>,
        soil_level: impl Into<String>,
    ) -> Self {
        Self {
            region: region.into(),
            planting_month: planting_month.into(),
            soil_level: soil_level.into(),
        }
    }
}

/// Maize advisory generator over a set of reference tables
#[derive(Debug, Clone)]
pub struct Advisor {
    tables: ReferenceTables,
    config: AdvisoryConfig,
}

impl Advisor {
    /// Advisor with default thresholds and a top-3 shortlist
    pub fn new(tables: ReferenceTables) -> Self {
        Self {
            tables,
            config: AdvisoryConfig::default(),
        }
    }

    pub fn with_config(tables: ReferenceTables, config: AdvisoryConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { tables, config })
    }

    pub fn tables(&self) -> &ReferenceTables {
        &self.tables
    }

    pub fn config(&self) -> &AdvisoryConfig {
        &self.config
    }

    /// Ensure the soil level (case-insensitive) is listed for the region
    pub fn validate_soil_level(&self, region: &str, soil_level: &str) -> Result<()> {
        let available = self.tables.soil_levels(region);
        let requested = soil_level.to_lowercase();

        if available.iter().any(|level| *level == requested) {
            return Ok(());
        }

        tracing::warn!(
            "Rejected soil level '{}' for region '{}' (available: {:?})",
            soil_level,
            region,
            available
        );

        Err(AdvisoryError::InvalidSoilLevel {
            soil_level: soil_level.to_string(),
            region: region.to_string(),
            available: available.to_vec(),
        })
    }

    /// Agro-ecological zone for the region (first matching row)
    pub fn agro_zone(&self, region: &str) -> Result<&str> {
        self.tables.agro_zone(region).ok_or_else(|| {
            tracing::warn!("Region '{}' missing from region table", region);
            AdvisoryError::NotFound {
                table: "region",
                region: region.to_string(),
            }
        })
    }

    /// Generate the full advisory for one query
    pub fn generate_report(
        &self,
        region: &str,
        planting_month: &str,
        soil_level: &str,
    ) -> Result<AdvisoryReport> {
        self.validate_soil_level(region, soil_level)?;
        let month: Month = planting_month.parse()?;
        let agro_zone = self.agro_zone(region)?;

        // Step 1: Climate class
        let window_rainfall_mm = climate::window_rainfall(self.tables.climate(), region, month);
        let climate_class =
            climate::classify_with(self.tables.climate(), region, month, &self.config.rainfall);
        tracing::debug!(
            "{} from {}: {:.1} mm over window → {} climate",
            region,
            month,
            window_rainfall_mm,
            climate_class
        );

        // Step 2: Risks
        let drought = risk::drought_risk(climate_class);
        let soil_risk = risk::soil_risk(soil_level);
        let pest_risk = risk::pest_disease_risk(drought.risk, soil_risk);
        tracing::debug!(
            "Risks for {}: drought={}, soil={}, pest={}",
            region,
            drought.risk,
            soil_risk,
            pest_risk
        );

        // Step 3: Recommendations
        let fertilizer = recommendations::fertilizer_plan(soil_level);
        let pest_note = recommendations::pest_advice(pest_risk);

        // Step 4: Varieties
        let recommended: Vec<_> = varieties::select_top(
            self.tables.varieties(),
            agro_zone,
            drought.risk,
            soil_risk,
            self.config.max_varieties,
        )
        .into_iter()
        .cloned()
        .collect();
        tracing::debug!("{} varieties recommended for {}", recommended.len(), agro_zone);

        Ok(AdvisoryReport {
            region: region.to_string(),
            agro_zone: agro_zone.to_string(),
            planting_month: month,
            soil_level: soil_level.to_string(),
            climate_class,
            window_rainfall_mm,
            drought_risk: drought.risk,
            soil_risk,
            pest_risk,
            fertilizer,
            irrigation_note: drought.irrigation_note.to_string(),
            pest_note: pest_note.to_string(),
            varieties: recommended,
        })
    }

    /// Generate reports for independent queries in parallel.
    ///
    /// Results are returned in query order.
    pub fn generate_reports(&self, queries: &[AdvisoryQuery]) -> Vec<Result<AdvisoryReport>> {
        tracing::info!("Generating {} advisory reports", queries.len());

        queries
            .par_iter()
            .map(|q| self.generate_report(&q.region, &q.planting_month, &q.soil_level))
            .collect()
    }
}
