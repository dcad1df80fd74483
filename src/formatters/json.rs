use crate::report::AdvisoryReport;

/// JSON formatter for advisory reports
pub struct JsonFormatter;

impl JsonFormatter {
    /// Format report as pretty-printed JSON
    pub fn format(report: &AdvisoryReport) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(report)
    }

    /// Format report as compact JSON (no whitespace)
    pub fn format_compact(report: &AdvisoryReport) -> Result<String, serde_json::Error> {
        serde_json::to_string(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::Advisor;
    use crate::fixtures;

    fn kaduna_report() -> AdvisoryReport {
        Advisor::new(fixtures::kaduna_tables())
            .generate_report("Kaduna", "July", "Low")
            .unwrap()
    }

    #[test]
    fn test_format_json() {
        let json = JsonFormatter::format(&kaduna_report()).unwrap();

        assert!(json.contains("\"region\": \"Kaduna\""));
        assert!(json.contains("\"planting_month\": \"July\""));
        assert!(json.contains("\"climate_class\": \"Medium\""));
        assert!(json.contains("\"pest_risk\": \"High\""));
        assert!(json.contains("\"N\": 120.0"));
        assert!(json.contains("\"P2O5\": 60.0"));
    }

    #[test]
    fn test_format_compact() {
        let json = JsonFormatter::format_compact(&kaduna_report()).unwrap();

        assert!(!json.contains('\n'));
        assert!(json.contains("\"drought_risk\":\"Medium\""));
        assert!(json.contains("\"name\":\"V3\""));
    }

    #[test]
    fn test_round_trip() {
        let report = kaduna_report();
        let json = JsonFormatter::format_compact(&report).unwrap();
        let parsed: AdvisoryReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }
}
