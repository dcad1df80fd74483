//! Shared data types for maize advisory generation.
//!
//! Reference rows (climate, soil, region, variety) mirror the columns of the
//! advisory data files. Classification enums are the currency passed between
//! the climate, risk, recommendation and variety stages.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AdvisoryError;

// ============================================================================
// Calendar
// ============================================================================

/// Calendar month, matched case-sensitively by full English name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    /// All months in calendar order
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }

    /// Exact (case-sensitive) lookup by full month name
    pub fn from_name(name: &str) -> Option<Month> {
        Month::ALL.iter().copied().find(|m| m.name() == name)
    }

    /// Zero-based position in the calendar (January = 0)
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Month `n` steps later, wrapping December -> January
    pub fn offset(&self, n: usize) -> Month {
        Month::ALL[(self.index() + n) % 12]
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Month {
    type Err = AdvisoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Month::from_name(s).ok_or_else(|| AdvisoryError::InvalidMonth(s.to_string()))
    }
}

// ============================================================================
// Classification scales
// ============================================================================

/// Four-valued severity scale used for drought, soil and pest outcomes.
///
/// `Unknown` is the soft fallback for unrecognised input and is never raised
/// as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Unknown,
}

impl RiskLevel {
    /// Case-insensitive parse; anything unrecognised becomes `Unknown`
    pub fn from_label(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "low" => RiskLevel::Low,
            "medium" => RiskLevel::Medium,
            "high" => RiskLevel::High,
            _ => RiskLevel::Unknown,
        }
    }

    pub fn display_text(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
            RiskLevel::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_text())
    }
}

/// Rainfall class of the planting window
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ClimateClass {
    Low,
    Medium,
    High,
}

impl ClimateClass {
    /// Case-insensitive parse
    pub fn from_label(label: &str) -> Option<Self> {
        match label.to_lowercase().as_str() {
            "low" => Some(ClimateClass::Low),
            "medium" => Some(ClimateClass::Medium),
            "high" => Some(ClimateClass::High),
            _ => None,
        }
    }

    pub fn display_text(&self) -> &'static str {
        match self {
            ClimateClass::Low => "Low",
            ClimateClass::Medium => "Medium",
            ClimateClass::High => "High",
        }
    }
}

impl fmt::Display for ClimateClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_text())
    }
}

/// Soil fertility level as supplied by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoilLevel {
    Low,
    Medium,
    High,
}

impl SoilLevel {
    /// Case-insensitive parse
    pub fn from_label(label: &str) -> Option<Self> {
        match label.to_lowercase().as_str() {
            "low" => Some(SoilLevel::Low),
            "medium" => Some(SoilLevel::Medium),
            "high" => Some(SoilLevel::High),
            _ => None,
        }
    }
}

/// Varietal tolerance rating. Ordered `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tolerance {
    Low,
    Medium,
    High,
}

impl Tolerance {
    /// Case-insensitive parse
    pub fn from_label(label: &str) -> Option<Self> {
        match label.to_lowercase().as_str() {
            "low" => Some(Tolerance::Low),
            "medium" => Some(Tolerance::Medium),
            "high" => Some(Tolerance::High),
            _ => None,
        }
    }

    pub fn display_text(&self) -> &'static str {
        match self {
            Tolerance::Low => "Low",
            Tolerance::Medium => "Medium",
            Tolerance::High => "High",
        }
    }
}

impl fmt::Display for Tolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_text())
    }
}

// ============================================================================
// Reference rows
// ============================================================================

/// Long-term average rainfall for one region and month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClimateRecord {
    pub region: String,
    pub month: Month,
    pub avg_rainfall_mm: f64,
}

/// One soil fertility level available in a region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoilProfile {
    pub region: String,
    pub soil_level: String,
}

/// Region -> agro-ecological zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionProfile {
    pub region: String,
    pub agro_zone: String,
}

/// Catalog entry for a maize variety.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VarietyRecord {
    pub name: String,
    pub adaptation_zone: String,
    pub drought_tolerance: Tolerance,
    pub low_n_tolerance: Tolerance,
    /// Expected yield (t/ha), the ranking key
    pub yield_potential: f64,
    pub maturity_group: String,
    pub grain_type: String,
}

/// Fertilizer recommendation (kg/ha).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FertilizerPlan {
    #[serde(rename = "N")]
    pub n: f64,
    #[serde(rename = "P2O5")]
    pub p2o5: f64,
    #[serde(rename = "K2O")]
    pub k2o: f64,
    pub notes: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_wraps_after_december() {
        assert_eq!(Month::November.offset(1), Month::December);
        assert_eq!(Month::November.offset(2), Month::January);
        assert_eq!(Month::January.offset(12), Month::January);
    }

    #[test]
    fn test_month_names_are_case_sensitive() {
        assert_eq!(Month::from_name("July"), Some(Month::July));
        assert_eq!(Month::from_name("july"), None);
        assert!("Julember".parse::<Month>().is_err());
    }

    #[test]
    fn test_labels_are_case_insensitive() {
        assert_eq!(RiskLevel::from_label("HIGH"), RiskLevel::High);
        assert_eq!(RiskLevel::from_label("severe"), RiskLevel::Unknown);
        assert_eq!(ClimateClass::from_label("medium"), Some(ClimateClass::Medium));
        assert_eq!(SoilLevel::from_label("LOW"), Some(SoilLevel::Low));
        assert_eq!(SoilLevel::from_label(" Low "), None);
        assert_eq!(Tolerance::from_label("Very High"), None);
    }

    #[test]
    fn test_tolerance_ordering() {
        assert!(Tolerance::Low < Tolerance::Medium);
        assert!(Tolerance::Medium < Tolerance::High);
        assert_eq!(Tolerance::Medium.to_string(), "Medium");
    }
}
