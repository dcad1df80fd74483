//! Advisory configuration
//!
//! Rainfall thresholds and the variety shortlist length. Defaults reproduce
//! the published advisory rules; a JSON file may override individual fields.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::AdvisoryError;
use crate::types::ClimateClass;

/// Window rainfall below this is a Low climate class (mm)
pub const LOW_RAINFALL_MM: f64 = 100.0;

/// Window rainfall at or above this is a High climate class (mm)
pub const HIGH_RAINFALL_MM: f64 = 200.0;

/// Number of varieties recommended per report
pub const MAX_VARIETIES: usize = 3;

/// Rainfall bucket boundaries, lower bound inclusive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RainfallThresholds {
    pub low_mm: f64,
    pub high_mm: f64,
}

impl Default for RainfallThresholds {
    fn default() -> Self {
        Self {
            low_mm: LOW_RAINFALL_MM,
            high_mm: HIGH_RAINFALL_MM,
        }
    }
}

impl RainfallThresholds {
    /// Bucket a window rainfall total
    ///
    /// - `sum < low_mm` → Low
    /// - `low_mm <= sum < high_mm` → Medium
    /// - `sum >= high_mm` → High
    pub fn class_for(&self, rainfall_mm: f64) -> ClimateClass {
        if rainfall_mm < self.low_mm {
            ClimateClass::Low
        } else if rainfall_mm < self.high_mm {
            ClimateClass::Medium
        } else {
            ClimateClass::High
        }
    }
}

/// Top-level configuration for an `Advisor`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisoryConfig {
    pub rainfall: RainfallThresholds,
    pub max_varieties: usize,
}

impl Default for AdvisoryConfig {
    fn default() -> Self {
        Self {
            rainfall: RainfallThresholds::default(),
            max_varieties: MAX_VARIETIES,
        }
    }
}

impl AdvisoryConfig {
    /// Load configuration from JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read advisory config: {:?}", path))?;

        Self::from_json(&contents)
            .with_context(|| format!("Invalid advisory config: {:?}", path))
    }

    /// Parse and validate configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let config: AdvisoryConfig =
            serde_json::from_str(json).with_context(|| "Failed to parse advisory config JSON")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> crate::Result<()> {
        let (low_mm, high_mm) = (self.rainfall.low_mm, self.rainfall.high_mm);
        // Written to also reject NaN
        if !(low_mm >= 0.0 && low_mm < high_mm) {
            return Err(AdvisoryError::Config(format!(
                "rainfall thresholds must satisfy 0 <= low_mm < high_mm (got {} and {})",
                low_mm, high_mm
            )));
        }
        if self.max_varieties == 0 {
            return Err(AdvisoryError::Config(
                "max_varieties must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
