//! Typed model of the backend analysis response.
//!
//! Every section is defaulted or optional. The dashboard keeps rendering when
//! the backend omits a section, so absence decodes to an empty value instead
//! of failing the payload. Map-shaped sections use `BTreeMap` so iteration
//! order is deterministic: ISO month keys and year keys sort chronologically.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Status string the backend sets on successful analyses.
pub const STATUS_SUCCESS: &str = "success";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisReport {
    #[serde(default)]
    pub status: String,
    /// Backend-provided message when `status` is not success.
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub mpa_name: String,
    #[serde(default)]
    pub wdpa_code: Option<String>,
    #[serde(default)]
    pub date_range: Option<ReportDateRange>,
    #[serde(default)]
    pub protected_features: Vec<String>,
    #[serde(default)]
    pub summary: Summary,
    /// Present only when the span covered more than one calendar year.
    #[serde(default)]
    pub multi_year: Option<MultiYear>,
    #[serde(default)]
    pub temporal: Temporal,
    /// Raw gear label to its aggregate stats.
    #[serde(default)]
    pub gear_types: BTreeMap<String, GearTypeStats>,
    #[serde(default)]
    pub vessels: VesselsSection,
}

impl AnalysisReport {
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportDateRange {
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub end: String,
}

/// Headline metrics for the analyzed span.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    #[serde(default)]
    pub total_fishing_hours: f64,
    #[serde(default)]
    pub unique_vessels: u32,
    #[serde(default)]
    pub harmful_fishing_hours: f64,
    #[serde(default)]
    pub harmful_fishing_percentage: f64,
    #[serde(default)]
    pub trawling_hours: f64,
    #[serde(default)]
    pub dredging_hours: f64,
}

/// Month-bucketed series keyed by ISO date strings ("2024-03-01").
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Temporal {
    #[serde(default)]
    pub monthly_hours: BTreeMap<String, f64>,
    #[serde(default)]
    pub monthly_trawling: BTreeMap<String, f64>,
    #[serde(default)]
    pub monthly_dredging: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MultiYear {
    #[serde(default)]
    pub total_years: f64,
    #[serde(default)]
    pub trend_analysis: Option<TrendAnalysis>,
    #[serde(default)]
    pub seasonal_patterns: Option<SeasonalPatterns>,
    /// Year label ("2023") to that year's totals.
    #[serde(default)]
    pub yearly_summary: BTreeMap<String, YearlyStats>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrendAnalysis {
    #[serde(default)]
    pub trend_direction: String,
    #[serde(default)]
    pub trend_strength: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeasonalPatterns {
    /// Calendar month (1-12) with the highest average activity.
    #[serde(default)]
    pub peak_month: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct YearlyStats {
    #[serde(default)]
    pub total_hours: Option<f64>,
    #[serde(default)]
    pub unique_vessels: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GearTypeStats {
    #[serde(default)]
    pub total_hours: f64,
    #[serde(default)]
    pub vessel_count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VesselsSection {
    /// Vessels ranked by fishing hours, most active first.
    #[serde(default)]
    pub most_active: Vec<VesselActivity>,
    /// Flag state code to vessel count.
    #[serde(default)]
    pub flag_states: BTreeMap<String, u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VesselActivity {
    #[serde(default)]
    pub ship_name: Option<String>,
    #[serde(default)]
    pub flag: Option<String>,
    #[serde(default)]
    pub fishing_hours: f64,
    #[serde(default)]
    pub primary_gear_type: Option<String>,
    #[serde(default)]
    pub mmsi: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_full_payload() {
        let raw = r#"{
            "status": "success",
            "mpa_name": "Dogger Bank",
            "wdpa_code": "555534295",
            "date_range": {"start": "2024-01-01", "end": "2024-03-31"},
            "protected_features": ["Sandbanks", "Harbour porpoise"],
            "summary": {
                "total_fishing_hours": 1234.5,
                "unique_vessels": 42,
                "harmful_fishing_hours": 500.25,
                "harmful_fishing_percentage": 40.51,
                "trawling_hours": 480.0,
                "dredging_hours": 20.25
            },
            "temporal": {
                "monthly_hours": {"2024-01-01": 400.0, "2024-02-01": 300.0, "2024-03-01": 534.5},
                "monthly_trawling": {"2024-01-01": 150.0},
                "monthly_dredging": {}
            },
            "gear_types": {
                "trawlers": {"total_hours": 480.0, "vessel_count": 12},
                "set_gillnets": {"total_hours": 700.0, "vessel_count": 25}
            },
            "vessels": {
                "most_active": [
                    {"ship_name": "NORDZEE", "flag": "NLD", "fishing_hours": 120.5,
                     "primary_gear_type": "trawlers", "mmsi": "244123456"}
                ],
                "flag_states": {"NLD": 20, "GBR": 15, "FRA": 7}
            }
        }"#;
        let report: AnalysisReport = serde_json::from_str(raw).unwrap();
        assert!(report.is_success());
        assert_eq!(report.mpa_name, "Dogger Bank");
        assert_eq!(report.summary.unique_vessels, 42);
        assert_eq!(report.temporal.monthly_hours.len(), 3);
        assert_eq!(report.gear_types["trawlers"].vessel_count, 12);
        assert_eq!(report.vessels.most_active.len(), 1);
        assert_eq!(report.vessels.flag_states["NLD"], 20);
        assert!(report.multi_year.is_none());
    }

    #[test]
    fn test_decode_empty_object() {
        let report: AnalysisReport = serde_json::from_str("{}").unwrap();
        assert!(!report.is_success());
        assert_eq!(report.summary.total_fishing_hours, 0.0);
        assert!(report.temporal.monthly_hours.is_empty());
        assert!(report.gear_types.is_empty());
        assert!(report.vessels.most_active.is_empty());
    }

    #[test]
    fn test_decode_error_payload() {
        let raw = r#"{"status": "error", "error": "No fishing activity data found"}"#;
        let report: AnalysisReport = serde_json::from_str(raw).unwrap();
        assert!(!report.is_success());
        assert_eq!(
            report.error.as_deref(),
            Some("No fishing activity data found")
        );
    }

    #[test]
    fn test_decode_ignores_unknown_fields() {
        // backends attach extra keys (messages, vessel registry fields); they
        // must not break decoding
        let raw = r#"{
            "status": "success",
            "summary": {"total_fishing_hours": 1.0, "message": "partial data"},
            "vessels": {
                "most_active": [
                    {"ship_name": "A", "fishing_hours": 2.0, "length": 24.5,
                     "tonnage": 90.0, "imo": "9123456", "built_year": 1999}
                ]
            }
        }"#;
        let report: AnalysisReport = serde_json::from_str(raw).unwrap();
        assert_eq!(report.summary.total_fishing_hours, 1.0);
        assert_eq!(report.vessels.most_active[0].fishing_hours, 2.0);
    }

    #[test]
    fn test_decode_null_multi_year() {
        let raw = r#"{"status": "success", "multi_year": null}"#;
        let report: AnalysisReport = serde_json::from_str(raw).unwrap();
        assert!(report.multi_year.is_none());
    }

    #[test]
    fn test_month_keys_iterate_chronologically() {
        let raw = r#"{
            "temporal": {"monthly_hours": {"2024-03-01": 3.0, "2023-11-01": 1.0, "2024-01-01": 2.0}}
        }"#;
        let report: AnalysisReport = serde_json::from_str(raw).unwrap();
        let keys: Vec<&String> = report.temporal.monthly_hours.keys().collect();
        assert_eq!(keys, vec!["2023-11-01", "2024-01-01", "2024-03-01"]);
    }
}
