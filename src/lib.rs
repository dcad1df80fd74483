//! Maize Advisory
//!
//! Rule-based agronomic advice for a region, planting month and soil
//! fertility level.
//!
//! Module layout follows the advisory pipeline:
//! - `climate`: 3-month rainfall window classification
//! - `risk`: drought, soil and pest/disease risk mapping
//! - `recommendations`: fertilizer plans and pest advice
//! - `varieties`: zone/tolerance filtering and yield ranking
//! - `advisor`: query validation and report assembly
//! - `data`: reference tables and DataFrame adaptation (Polars)
//!
//! All classification is deterministic threshold/lookup logic over read-only
//! reference tables.

pub mod types;
pub mod error;
pub mod config;
pub mod data;
pub mod climate;
pub mod risk;
pub mod recommendations;
pub mod varieties;
pub mod report;
pub mod advisor;
pub mod formatters;
pub mod fixtures;

// Re-export commonly used types
pub use types::{
    ClimateClass, ClimateRecord, FertilizerPlan, Month, RegionProfile, RiskLevel, SoilLevel,
    SoilProfile, Tolerance, VarietyRecord,
};
pub use error::{AdvisoryError, Result};
pub use config::{AdvisoryConfig, RainfallThresholds};
pub use data::ReferenceTables;
pub use report::AdvisoryReport;
pub use advisor::{Advisor, AdvisoryQuery};
pub use formatters::JsonFormatter;
