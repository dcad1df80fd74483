//! Error types for advisory generation

use thiserror::Error;

/// Result type for advisory operations
pub type Result<T> = std::result::Result<T, AdvisoryError>;

/// Advisory error types
///
/// Only query validation and configuration fail; every mapping and
/// recommendation stage degrades to `Unknown`/zero defaults instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AdvisoryError {
    /// Soil level not available for the requested region
    #[error("Soil fertility level '{soil_level}' not valid for region '{region}'. Available levels: {available:?}")]
    InvalidSoilLevel {
        soil_level: String,
        region: String,
        available: Vec<String>,
    },

    /// Planting month is not one of the 12 calendar month names
    #[error("Unrecognised planting month '{0}' (expected a full month name such as 'July')")]
    InvalidMonth(String),

    /// Region missing from a reference table
    #[error("Region '{region}' not found in {table} table")]
    NotFound { table: &'static str, region: String },

    /// Configuration values are inconsistent
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AdvisoryError {
    /// True for errors caused by the caller's query parameters
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            AdvisoryError::InvalidSoilLevel { .. } | AdvisoryError::InvalidMonth(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_soil_level_message_lists_available() {
        let err = AdvisoryError::InvalidSoilLevel {
            soil_level: "Very High".to_string(),
            region: "Kaduna".to_string(),
            available: vec!["low".to_string(), "medium".to_string(), "high".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("'Very High'"));
        assert!(msg.contains("Kaduna"));
        assert!(msg.contains("[\"low\", \"medium\", \"high\"]"));
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_not_found_is_not_invalid_input() {
        let err = AdvisoryError::NotFound {
            table: "region",
            region: "Atlantis".to_string(),
        };
        assert!(!err.is_invalid_input());
        assert_eq!(err.to_string(), "Region 'Atlantis' not found in region table");
    }
}
