//! Reference data fixtures
//!
//! Small hardcoded tables for tests, benchmarks and prototype validation.
//! Kaduna follows the published worked example (150 mm July window, four
//! Northern Guinea Savanna varieties). Kano adds a dry Sudan Savanna region
//! without a High soil level.

use crate::data::ReferenceTables;
use crate::types::{ClimateRecord, Month, RegionProfile, SoilProfile, Tolerance, VarietyRecord};

fn climate(region: &str, month: Month, mm: f64) -> ClimateRecord {
    ClimateRecord {
        region: region.to_string(),
        month,
        avg_rainfall_mm: mm,
    }
}

fn soil(region: &str, level: &str) -> SoilProfile {
    SoilProfile {
        region: region.to_string(),
        soil_level: level.to_string(),
    }
}

fn variety(
    name: &str,
    zone: &str,
    drought: Tolerance,
    low_n: Tolerance,
    yield_potential: f64,
    maturity_group: &str,
    grain_type: &str,
) -> VarietyRecord {
    VarietyRecord {
        name: name.to_string(),
        adaptation_zone: zone.to_string(),
        drought_tolerance: drought,
        low_n_tolerance: low_n,
        yield_potential,
        maturity_group: maturity_group.to_string(),
        grain_type: grain_type.to_string(),
    }
}

// ============================================================================
// Kaduna (Northern Guinea Savanna)
// ============================================================================

/// July-September window summing to 150 mm (Medium)
pub fn kaduna_climate() -> Vec<ClimateRecord> {
    vec![
        climate("Kaduna", Month::July, 40.0),
        climate("Kaduna", Month::August, 50.0),
        climate("Kaduna", Month::September, 60.0),
    ]
}

pub fn kaduna_soils() -> Vec<SoilProfile> {
    vec![
        soil("Kaduna", "Low"),
        soil("Kaduna", "Medium"),
        soil("Kaduna", "High"),
    ]
}

pub fn kaduna_regions() -> Vec<RegionProfile> {
    vec![RegionProfile {
        region: "Kaduna".to_string(),
        agro_zone: "Northern Guinea Savanna".to_string(),
    }]
}

/// V1-V4 with yields [6.0, 5.0, 7.0, 4.0]
pub fn kaduna_varieties() -> Vec<VarietyRecord> {
    let ngs = "Northern Guinea Savanna";
    vec![
        variety("V1", ngs, Tolerance::High, Tolerance::High, 6.0, "Early", "White"),
        variety("V2", ngs, Tolerance::Medium, Tolerance::Medium, 5.0, "Medium", "Yellow"),
        variety("V3", ngs, Tolerance::High, Tolerance::High, 7.0, "Late", "White"),
        variety("V4", ngs, Tolerance::Low, Tolerance::High, 4.0, "Early", "Yellow"),
    ]
}

pub fn kaduna_tables() -> ReferenceTables {
    ReferenceTables::new(
        kaduna_climate(),
        kaduna_soils(),
        kaduna_regions(),
        kaduna_varieties(),
    )
}

// ============================================================================
// Kaduna + Kano
// ============================================================================

/// Kaduna plus Kano (Sudan Savanna, 60 mm July window, Low/Medium soils only)
pub fn savanna_tables() -> ReferenceTables {
    let mut climate_rows = kaduna_climate();
    climate_rows.extend([
        climate("Kano", Month::July, 20.0),
        climate("Kano", Month::August, 25.0),
        climate("Kano", Month::September, 15.0),
        climate("Kano", Month::December, 0.0),
    ]);

    let mut soils = kaduna_soils();
    soils.extend([soil("Kano", "Low"), soil("Kano", "Medium")]);

    let mut regions = kaduna_regions();
    regions.push(RegionProfile {
        region: "Kano".to_string(),
        agro_zone: "Sudan Savanna".to_string(),
    });

    let ss = "Sudan Savanna";
    let mut varieties = kaduna_varieties();
    varieties.extend([
        variety("SAMMAZ 17", ss, Tolerance::High, Tolerance::Medium, 4.5, "Extra-early", "White"),
        variety("SAMMAZ 29", ss, Tolerance::High, Tolerance::High, 5.2, "Early", "Yellow"),
        variety("Oba 98", ss, Tolerance::Low, Tolerance::Low, 6.8, "Late", "White"),
    ]);

    ReferenceTables::new(climate_rows, soils, regions, varieties)
}
