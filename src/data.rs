//! Reference Data Management
//!
//! Holds the four read-only reference tables (climate, soil, region, variety)
//! and adapts Polars DataFrames supplied by the data provider into typed rows.
//!
//! Expected DataFrame columns (names follow the advisory data files):
//! - climate: `state`, `month`, `avg_rainfall_mm`
//! - soil: `state`, `soil_level`
//! - region: `state`, `agro_zone`
//! - varieties: `variety_name`, `adaptation_zone`, `drought_tolerance`,
//!   `low_n_tolerance`, `yield_potential`, `maturity_group`, `grain_type`

use anyhow::{anyhow, bail, Context, Result};
use polars::prelude::*;
use rustc_hash::FxHashMap;
use std::collections::HashSet;

use crate::types::{ClimateRecord, Month, RegionProfile, SoilProfile, Tolerance, VarietyRecord};

/// Column holding the region name in every regional table
pub const REGION_COLUMN: &str = "state";

const CLIMATE_COLUMNS: [&str; 3] = [REGION_COLUMN, "month", "avg_rainfall_mm"];
const SOIL_COLUMNS: [&str; 2] = [REGION_COLUMN, "soil_level"];
const REGION_COLUMNS: [&str; 2] = [REGION_COLUMN, "agro_zone"];
const VARIETY_COLUMNS: [&str; 7] = [
    "variety_name",
    "adaptation_zone",
    "drought_tolerance",
    "low_n_tolerance",
    "yield_potential",
    "maturity_group",
    "grain_type",
];

/// Read-only reference tables for one advisory session
#[derive(Debug, Clone, Default)]
pub struct ReferenceTables {
    climate: Vec<ClimateRecord>,
    soils: Vec<SoilProfile>,
    regions: Vec<RegionProfile>,
    varieties: Vec<VarietyRecord>,

    /// Region → index of its first row in `regions`
    zone_index: FxHashMap<String, usize>,

    /// Region → lowercased soil levels, in table order
    soil_index: FxHashMap<String, Vec<String>>,
}

impl ReferenceTables {
    pub fn new(
        climate: Vec<ClimateRecord>,
        soils: Vec<SoilProfile>,
        regions: Vec<RegionProfile>,
        varieties: Vec<VarietyRecord>,
    ) -> Self {
        let mut zone_index = FxHashMap::default();
        for (idx, profile) in regions.iter().enumerate() {
            // First row wins for duplicated regions
            zone_index.entry(profile.region.clone()).or_insert(idx);
        }

        let mut soil_index: FxHashMap<String, Vec<String>> = FxHashMap::default();
        for profile in &soils {
            soil_index
                .entry(profile.region.clone())
                .or_default()
                .push(profile.soil_level.to_lowercase());
        }

        ReferenceTables {
            climate,
            soils,
            regions,
            varieties,
            zone_index,
            soil_index,
        }
    }

    /// Build tables from provider DataFrames
    pub fn from_frames(
        climate: &DataFrame,
        soils: &DataFrame,
        regions: &DataFrame,
        varieties: &DataFrame,
    ) -> Result<Self> {
        let tables = Self::new(
            climate_from_frame(climate)?,
            soils_from_frame(soils)?,
            regions_from_frame(regions)?,
            varieties_from_frame(varieties)?,
        );

        tracing::debug!(
            "Loaded reference tables: {} climate rows, {} soil rows, {} regions, {} varieties",
            tables.climate.len(),
            tables.soils.len(),
            tables.regions.len(),
            tables.varieties.len()
        );

        Ok(tables)
    }

    pub fn climate(&self) -> &[ClimateRecord] {
        &self.climate
    }

    pub fn soils(&self) -> &[SoilProfile] {
        &self.soils
    }

    pub fn regions(&self) -> &[RegionProfile] {
        &self.regions
    }

    pub fn varieties(&self) -> &[VarietyRecord] {
        &self.varieties
    }

    /// Agro-ecological zone of the region's first row
    pub fn agro_zone(&self, region: &str) -> Option<&str> {
        self.zone_index
            .get(region)
            .map(|&idx| self.regions[idx].agro_zone.as_str())
    }

    /// Lowercased soil levels available in a region (empty if none)
    pub fn soil_levels(&self, region: &str) -> &[String] {
        self.soil_index
            .get(region)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

// ============================================================================
// DataFrame adaptation
// ============================================================================

/// Check that every required column is present before extraction
fn require_columns(df: &DataFrame, columns: &[&str], table: &str) -> Result<()> {
    let actual: HashSet<String> = df
        .get_column_names()
        .into_iter()
        .map(|s| s.to_string())
        .collect();

    for &expected in columns {
        if !actual.contains(expected) {
            bail!(
                "{}: Missing expected column '{}'. Available columns: {:?}",
                table,
                expected,
                actual
            );
        }
    }

    Ok(())
}

fn string_values(df: &DataFrame, name: &str, table: &str) -> Result<Vec<String>> {
    let values = df
        .column(name)
        .with_context(|| format!("{}: Column '{}' not found", table, name))?
        .str()
        .with_context(|| format!("{}: Column '{}' is not string type", table, name))?;

    values
        .into_iter()
        .enumerate()
        .map(|(row, value)| {
            value
                .map(|s| s.trim().to_string())
                .ok_or_else(|| anyhow!("{}: Null in column '{}' at row {}", table, name, row))
        })
        .collect()
}

/// Numeric column as f64 (integer columns are cast). NaN and infinities are rejected.
fn float_values(df: &DataFrame, name: &str, table: &str) -> Result<Vec<f64>> {
    let column = df
        .column(name)
        .with_context(|| format!("{}: Column '{}' not found", table, name))?
        .cast(&DataType::Float64)
        .with_context(|| format!("{}: Column '{}' is not numeric", table, name))?;

    let values = column
        .f64()
        .with_context(|| format!("{}: Column '{}' is not numeric", table, name))?;

    values
        .into_iter()
        .enumerate()
        .map(|(row, value)| match value {
            Some(v) if v.is_finite() => Ok(v),
            Some(v) => bail!("{}: Non-finite value {} in column '{}' at row {}", table, v, name, row),
            None => bail!("{}: Missing or non-numeric value in column '{}' at row {}", table, name, row),
        })
        .collect()
}

fn tolerance_value(label: &str, column: &str, row: usize) -> Result<Tolerance> {
    Tolerance::from_label(label).ok_or_else(|| {
        anyhow!(
            "varieties: Unrecognised {} '{}' at row {} (expected Low, Medium or High)",
            column,
            label,
            row
        )
    })
}

pub fn climate_from_frame(df: &DataFrame) -> Result<Vec<ClimateRecord>> {
    require_columns(df, &CLIMATE_COLUMNS, "climate")?;

    let regions = string_values(df, REGION_COLUMN, "climate")?;
    let months = string_values(df, "month", "climate")?;
    let rainfall = float_values(df, "avg_rainfall_mm", "climate")?;

    regions
        .into_iter()
        .zip(months)
        .zip(rainfall)
        .enumerate()
        .map(|(row, ((region, month), avg_rainfall_mm))| {
            let month = Month::from_name(&month).ok_or_else(|| {
                anyhow!("climate: Unrecognised month '{}' at row {}", month, row)
            })?;
            Ok(ClimateRecord {
                region,
                month,
                avg_rainfall_mm,
            })
        })
        .collect()
}

pub fn soils_from_frame(df: &DataFrame) -> Result<Vec<SoilProfile>> {
    require_columns(df, &SOIL_COLUMNS, "soil")?;

    let regions = string_values(df, REGION_COLUMN, "soil")?;
    let levels = string_values(df, "soil_level", "soil")?;

    Ok(regions
        .into_iter()
        .zip(levels)
        .map(|(region, soil_level)| SoilProfile { region, soil_level })
        .collect())
}

pub fn regions_from_frame(df: &DataFrame) -> Result<Vec<RegionProfile>> {
    require_columns(df, &REGION_COLUMNS, "region")?;

    let regions = string_values(df, REGION_COLUMN, "region")?;
    let zones = string_values(df, "agro_zone", "region")?;

    Ok(regions
        .into_iter()
        .zip(zones)
        .map(|(region, agro_zone)| RegionProfile { region, agro_zone })
        .collect())
}

pub fn varieties_from_frame(df: &DataFrame) -> Result<Vec<VarietyRecord>> {
    require_columns(df, &VARIETY_COLUMNS, "varieties")?;

    let names = string_values(df, "variety_name", "varieties")?;
    let zones = string_values(df, "adaptation_zone", "varieties")?;
    let drought = string_values(df, "drought_tolerance", "varieties")?;
    let low_n = string_values(df, "low_n_tolerance", "varieties")?;
    let yields = float_values(df, "yield_potential", "varieties")?;
    let maturity = string_values(df, "maturity_group", "varieties")?;
    let grain = string_values(df, "grain_type", "varieties")?;

    let mut records = Vec::with_capacity(df.height());
    for row in 0..df.height() {
        records.push(VarietyRecord {
            name: names[row].clone(),
            adaptation_zone: zones[row].clone(),
            drought_tolerance: tolerance_value(&drought[row], "drought_tolerance", row)?,
            low_n_tolerance: tolerance_value(&low_n[row], "low_n_tolerance", row)?,
            yield_potential: yields[row],
            maturity_group: maturity[row].clone(),
            grain_type: grain[row].clone(),
        });
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use approx::assert_relative_eq;

    fn variety_frame(drought: &[&str]) -> DataFrame {
        df![
            "variety_name" => &["V1", "V2"],
            "adaptation_zone" => &["Northern Guinea Savanna", "Sudan Savanna"],
            "drought_tolerance" => drought,
            "low_n_tolerance" => &["high", "Medium"],
            "yield_potential" => &[6.0, 5.0],
            "maturity_group" => &["Early", "Medium"],
            "grain_type" => &["White", "Yellow"],
        ]
        .unwrap()
    }

    #[test]
    fn test_first_region_row_wins() {
        let mut regions = fixtures::kaduna_regions();
        regions.push(RegionProfile {
            region: "Kaduna".to_string(),
            agro_zone: "Derived Savanna".to_string(),
        });
        let tables = ReferenceTables::new(vec![], vec![], regions, vec![]);

        assert_eq!(tables.agro_zone("Kaduna"), Some("Northern Guinea Savanna"));
        assert_eq!(tables.agro_zone("Atlantis"), None);
    }

    #[test]
    fn test_soil_levels_lowercased() {
        let tables = fixtures::kaduna_tables();
        assert_eq!(tables.soil_levels("Kaduna"), &["low", "medium", "high"]);
        assert!(tables.soil_levels("Atlantis").is_empty());
    }

    #[test]
    fn test_climate_from_frame_casts_integers() {
        let df = df![
            "state" => &["Kaduna", "Kaduna"],
            "month" => &["July", "August"],
            "avg_rainfall_mm" => &[40i64, 50i64],
        ]
        .unwrap();

        let records = climate_from_frame(&df).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].month, Month::July);
        assert_relative_eq!(records[1].avg_rainfall_mm, 50.0);
    }

    #[test]
    fn test_climate_from_frame_rejects_unknown_month() {
        let df = df![
            "state" => &["Kaduna"],
            "month" => &["Jul"],
            "avg_rainfall_mm" => &[40.0],
        ]
        .unwrap();

        let err_msg = climate_from_frame(&df).unwrap_err().to_string();
        assert!(err_msg.contains("Unrecognised month 'Jul'"));
    }

    #[test]
    fn test_missing_column() {
        let df = df![
            "region" => &["Kaduna"],
            "agro_zone" => &["Northern Guinea Savanna"],
        ]
        .unwrap();

        let err_msg = regions_from_frame(&df).unwrap_err().to_string();
        assert!(err_msg.contains("'state'"));
    }

    #[test]
    fn test_varieties_from_frame() {
        let records = varieties_from_frame(&variety_frame(&["High", "low"])).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].drought_tolerance, Tolerance::High);
        assert_eq!(records[0].low_n_tolerance, Tolerance::High);
        assert_eq!(records[1].drought_tolerance, Tolerance::Low);
        assert_eq!(records[1].adaptation_zone, "Sudan Savanna");
    }

    #[test]
    fn test_varieties_from_frame_rejects_unknown_tolerance() {
        let err_msg = varieties_from_frame(&variety_frame(&["High", "Extreme"]))
            .unwrap_err()
            .to_string();
        assert!(err_msg.contains("drought_tolerance 'Extreme' at row 1"));
    }

    #[test]
    fn test_varieties_from_frame_rejects_nan_yield() {
        let df = df![
            "variety_name" => &["V1", "V2"],
            "adaptation_zone" => &["Northern Guinea Savanna", "Northern Guinea Savanna"],
            "drought_tolerance" => &["High", "Low"],
            "low_n_tolerance" => &["High", "Low"],
            "yield_potential" => &[6.0, f64::NAN],
            "maturity_group" => &["Early", "Medium"],
            "grain_type" => &["White", "Yellow"],
        ]
        .unwrap();

        let err_msg = varieties_from_frame(&df).unwrap_err().to_string();
        assert!(err_msg.contains("Non-finite value NaN in column 'yield_potential' at row 1"));
    }

    #[test]
    fn test_from_frames() {
        let climate = df![
            "state" => &["Kaduna", "Kaduna", "Kaduna"],
            "month" => &["July", "August", "September"],
            "avg_rainfall_mm" => &[40.0, 50.0, 60.0],
        ]
        .unwrap();
        let soils = df![
            "state" => &["Kaduna", "Kaduna"],
            "soil_level" => &["Low", "High"],
        ]
        .unwrap();
        let regions = df![
            "state" => &["Kaduna"],
            "agro_zone" => &["Northern Guinea Savanna"],
        ]
        .unwrap();

        let tables = ReferenceTables::from_frames(
            &climate,
            &soils,
            &regions,
            &variety_frame(&["High", "Medium"]),
        )
        .unwrap();

        assert_eq!(tables.climate().len(), 3);
        assert_eq!(tables.soil_levels("Kaduna"), &["low", "high"]);
        assert_eq!(tables.agro_zone("Kaduna"), Some("Northern Guinea Savanna"));
        assert_eq!(tables.varieties().len(), 2);
    }
}
