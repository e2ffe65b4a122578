//! Render-free projections from an [`AnalysisReport`] onto display data.
//!
//! Components and the chart bridge consume these structs. Nothing here
//! touches the DOM, so every display rule (one-decimal hours, zero-filled
//! series, flag ordering, multi-year gating) is testable natively.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::analysis::{GearTypeStats, MultiYear, Summary, Temporal};
use crate::gear::GearClass;

/// Color of the total-hours series on the monthly chart.
pub const TOTAL_SERIES_COLOR: &str = "#0066cc";

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Short month name for a calendar month number (1-12).
pub fn month_short_name(month: u32) -> Option<&'static str> {
    MONTH_NAMES.get(month.checked_sub(1)? as usize).copied()
}

/// Formatted headline metrics for the summary cards.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryCards {
    /// Total fishing hours to one decimal, e.g. "123.5"
    pub total_hours: String,
    pub unique_vessels: String,
    /// Harmful (trawling + dredging) hours to one decimal
    pub harmful_hours: String,
    /// Harmful share of total, e.g. "40.5%"
    pub harmful_percentage: String,
}

pub fn summary_cards(summary: &Summary) -> SummaryCards {
    SummaryCards {
        total_hours: format!("{:.1}", summary.total_fishing_hours),
        unique_vessels: summary.unique_vessels.to_string(),
        harmful_hours: format!("{:.1}", summary.harmful_fishing_hours),
        harmful_percentage: format!("{:.1}%", summary.harmful_fishing_percentage),
    }
}

/// One plotted series on the monthly activity chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub name: String,
    pub color: String,
    pub values: Vec<f64>,
}

/// Payload for the monthly fishing-hours line chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyChartData {
    /// Axis labels in chronological order, e.g. "Mar 2024"
    pub labels: Vec<String>,
    pub series: Vec<ChartSeries>,
}

/// Axis label for a month bucket key: "2024-03-01" -> "Mar 2024".
///
/// Falls back to the raw key when it is not an ISO date.
fn month_label(key: &str) -> String {
    if let Ok(date) = NaiveDate::parse_from_str(key, "%Y-%m-%d") {
        return date.format("%b %Y").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(&format!("{key}-01"), "%Y-%m-%d") {
        return date.format("%b %Y").to_string();
    }
    key.to_string()
}

/// Build the monthly chart from the temporal section.
///
/// The total series drives the axis; trawling and dredging overlays appear
/// only when the backend sent them, with months they are missing from filled
/// as zero.
pub fn monthly_chart_data(temporal: &Temporal) -> Option<MonthlyChartData> {
    if temporal.monthly_hours.is_empty() {
        return None;
    }
    let months: Vec<&String> = temporal.monthly_hours.keys().collect();
    let labels = months.iter().map(|m| month_label(m)).collect();

    let mut series = vec![ChartSeries {
        name: "Total Fishing Hours".to_string(),
        color: TOTAL_SERIES_COLOR.to_string(),
        values: temporal.monthly_hours.values().copied().collect(),
    }];
    if !temporal.monthly_trawling.is_empty() {
        series.push(ChartSeries {
            name: "Trawling Hours".to_string(),
            color: GearClass::Trawling.color().to_string(),
            values: months
                .iter()
                .map(|m| temporal.monthly_trawling.get(*m).copied().unwrap_or(0.0))
                .collect(),
        });
    }
    if !temporal.monthly_dredging.is_empty() {
        series.push(ChartSeries {
            name: "Dredging Hours".to_string(),
            color: GearClass::Dredging.color().to_string(),
            values: months
                .iter()
                .map(|m| temporal.monthly_dredging.get(*m).copied().unwrap_or(0.0))
                .collect(),
        });
    }

    Some(MonthlyChartData { labels, series })
}

/// One slice of the gear-type distribution chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GearSlice {
    /// Raw gear label as the backend reports it
    pub label: String,
    pub hours: f64,
    pub vessels: u32,
    /// Slice color from the gear's severity class
    pub color: String,
}

/// Build the gear distribution chart, one slice per reported gear type.
pub fn gear_chart_data(gear_types: &BTreeMap<String, GearTypeStats>) -> Option<Vec<GearSlice>> {
    if gear_types.is_empty() {
        return None;
    }
    Some(
        gear_types
            .iter()
            .map(|(label, stats)| GearSlice {
                label: label.clone(),
                hours: stats.total_hours,
                vessels: stats.vessel_count,
                color: GearClass::classify(label).color().to_string(),
            })
            .collect(),
    )
}

/// Direction of the multi-year activity trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendDirection {
    Increasing,
    Decreasing,
    Stable,
}

impl TrendDirection {
    fn parse(raw: &str) -> TrendDirection {
        match raw {
            "increasing" => TrendDirection::Increasing,
            "decreasing" => TrendDirection::Decreasing,
            _ => TrendDirection::Stable,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            TrendDirection::Increasing => "\u{2197}",
            TrendDirection::Decreasing => "\u{2198}",
            TrendDirection::Stable => "\u{2192}",
        }
    }

    /// More fishing inside a protected area reads as the bad direction.
    pub fn color(self) -> &'static str {
        match self {
            TrendDirection::Increasing => "#dc3545",
            TrendDirection::Decreasing => "#28a745",
            TrendDirection::Stable => "#6c757d",
        }
    }
}

/// Trend line of the multi-year panel.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendView {
    pub direction: TrendDirection,
    /// Raw direction text from the backend
    pub label: String,
    pub strength: Option<String>,
}

/// One row of the year-by-year breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct YearlyRow {
    pub year: String,
    /// "1234.5 hours"
    pub hours_label: String,
    /// "42 vessels"
    pub vessels_label: String,
}

/// Everything the multi-year panel renders.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiYearView {
    /// "2.0 years"
    pub total_years_label: String,
    /// `None` renders as "Insufficient data"
    pub trend: Option<TrendView>,
    /// Short month name; `None` renders as "N/A"
    pub peak_month: Option<&'static str>,
    /// Ascending by year; years missing totals are left out
    pub yearly: Vec<YearlyRow>,
}

/// Project the multi-year section, or `None` when the panel stays hidden.
///
/// The panel only appears when the backend reports more than one year of
/// coverage.
pub fn multi_year_view(multi_year: Option<&MultiYear>) -> Option<MultiYearView> {
    let section = multi_year?;
    if !(section.total_years > 1.0) {
        return None;
    }

    let total_years_label = format!("{:.1} years", section.total_years);

    let trend = section
        .trend_analysis
        .as_ref()
        .filter(|t| !t.trend_direction.is_empty())
        .map(|t| TrendView {
            direction: TrendDirection::parse(&t.trend_direction),
            label: t.trend_direction.clone(),
            strength: t.trend_strength.clone().filter(|s| !s.is_empty()),
        });

    let peak_month = section
        .seasonal_patterns
        .as_ref()
        .and_then(|s| s.peak_month)
        .and_then(month_short_name);

    let yearly = section
        .yearly_summary
        .iter()
        .filter_map(|(year, stats)| {
            let hours = stats.total_hours?;
            let vessels = stats.unique_vessels?;
            Some(YearlyRow {
                year: year.clone(),
                hours_label: format!("{hours:.1} hours"),
                vessels_label: format!("{vessels} vessels"),
            })
        })
        .collect();

    Some(MultiYearView {
        total_years_label,
        trend,
        peak_month,
        yearly,
    })
}

/// One row of the flag-state table.
#[derive(Debug, Clone, PartialEq)]
pub struct FlagRow {
    pub flag: String,
    pub count: u32,
}

/// Flag states ordered by vessel count descending, code ascending on ties.
pub fn flag_rows(flag_states: &BTreeMap<String, u32>) -> Vec<FlagRow> {
    let mut rows: Vec<FlagRow> = flag_states
        .iter()
        .map(|(flag, count)| FlagRow {
            flag: flag.clone(),
            count: *count,
        })
        .collect();
    rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.flag.cmp(&b.flag)));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{SeasonalPatterns, TrendAnalysis, YearlyStats};

    #[test]
    fn test_summary_cards_one_decimal() {
        let cards = summary_cards(&Summary {
            total_fishing_hours: 123.45,
            unique_vessels: 42,
            harmful_fishing_hours: 50.0,
            harmful_fishing_percentage: 40.5,
            trawling_hours: 45.0,
            dredging_hours: 5.0,
        });
        assert_eq!(cards.total_hours, "123.5");
        assert_eq!(cards.unique_vessels, "42");
        assert_eq!(cards.harmful_hours, "50.0");
        assert_eq!(cards.harmful_percentage, "40.5%");
    }

    #[test]
    fn test_summary_cards_zero_activity() {
        let cards = summary_cards(&Summary::default());
        assert_eq!(cards.total_hours, "0.0");
        assert_eq!(cards.harmful_percentage, "0.0%");
    }

    fn temporal_fixture() -> Temporal {
        let mut temporal = Temporal::default();
        temporal.monthly_hours.insert("2024-01-01".into(), 100.0);
        temporal.monthly_hours.insert("2024-02-01".into(), 200.0);
        temporal.monthly_hours.insert("2024-03-01".into(), 150.0);
        temporal.monthly_trawling.insert("2024-02-01".into(), 80.0);
        temporal
    }

    #[test]
    fn test_monthly_chart_labels_chronological() {
        let data = monthly_chart_data(&temporal_fixture()).unwrap();
        assert_eq!(data.labels, vec!["Jan 2024", "Feb 2024", "Mar 2024"]);
    }

    #[test]
    fn test_monthly_chart_zero_fills_overlay() {
        let data = monthly_chart_data(&temporal_fixture()).unwrap();
        assert_eq!(data.series.len(), 2);
        assert_eq!(data.series[0].name, "Total Fishing Hours");
        assert_eq!(data.series[0].values, vec![100.0, 200.0, 150.0]);
        assert_eq!(data.series[1].name, "Trawling Hours");
        assert_eq!(data.series[1].values, vec![0.0, 80.0, 0.0]);
    }

    #[test]
    fn test_monthly_chart_all_three_series() {
        let mut temporal = temporal_fixture();
        temporal.monthly_dredging.insert("2024-01-01".into(), 5.0);
        let data = monthly_chart_data(&temporal).unwrap();
        assert_eq!(data.series.len(), 3);
        assert_eq!(data.series[2].name, "Dredging Hours");
        assert_eq!(data.series[2].color, "#ff6b35");
    }

    #[test]
    fn test_monthly_chart_none_without_data() {
        assert!(monthly_chart_data(&Temporal::default()).is_none());
    }

    #[test]
    fn test_monthly_chart_keeps_unparseable_keys() {
        let mut temporal = Temporal::default();
        temporal.monthly_hours.insert("2024-05".into(), 1.0);
        temporal.monthly_hours.insert("bucket-9".into(), 2.0);
        let data = monthly_chart_data(&temporal).unwrap();
        assert_eq!(data.labels, vec!["May 2024", "bucket-9"]);
    }

    #[test]
    fn test_gear_chart_colors_by_class() {
        let mut gear_types = BTreeMap::new();
        gear_types.insert(
            "trawlers".to_string(),
            GearTypeStats {
                total_hours: 480.0,
                vessel_count: 12,
            },
        );
        gear_types.insert(
            "dredge_fishing".to_string(),
            GearTypeStats {
                total_hours: 20.0,
                vessel_count: 2,
            },
        );
        gear_types.insert(
            "set_gillnets".to_string(),
            GearTypeStats {
                total_hours: 700.0,
                vessel_count: 25,
            },
        );
        let slices = gear_chart_data(&gear_types).unwrap();
        assert_eq!(slices.len(), 3);
        let by_label = |l: &str| slices.iter().find(|s| s.label == l).unwrap();
        assert_eq!(by_label("trawlers").color, "#dc3545");
        assert_eq!(by_label("dredge_fishing").color, "#ff6b35");
        assert_eq!(by_label("set_gillnets").color, "#0066cc");
        assert_eq!(by_label("set_gillnets").vessels, 25);
    }

    #[test]
    fn test_gear_chart_none_without_data() {
        assert!(gear_chart_data(&BTreeMap::new()).is_none());
    }

    fn multi_year_fixture() -> MultiYear {
        let mut section = MultiYear {
            total_years: 2.0,
            trend_analysis: Some(TrendAnalysis {
                trend_direction: "increasing".to_string(),
                trend_strength: Some("strong".to_string()),
            }),
            seasonal_patterns: Some(SeasonalPatterns {
                peak_month: Some(7),
            }),
            yearly_summary: BTreeMap::new(),
        };
        section.yearly_summary.insert(
            "2023".to_string(),
            YearlyStats {
                total_hours: Some(1000.0),
                unique_vessels: Some(30),
            },
        );
        section.yearly_summary.insert(
            "2022".to_string(),
            YearlyStats {
                total_hours: Some(800.5),
                unique_vessels: Some(25),
            },
        );
        section
    }

    #[test]
    fn test_multi_year_hidden_for_single_year() {
        assert!(multi_year_view(None).is_none());
        let single = MultiYear {
            total_years: 1.0,
            ..MultiYear::default()
        };
        assert!(multi_year_view(Some(&single)).is_none());
    }

    #[test]
    fn test_multi_year_view_projects() {
        let view = multi_year_view(Some(&multi_year_fixture())).unwrap();
        assert_eq!(view.total_years_label, "2.0 years");
        let trend = view.trend.unwrap();
        assert_eq!(trend.direction, TrendDirection::Increasing);
        assert_eq!(trend.label, "increasing");
        assert_eq!(trend.strength.as_deref(), Some("strong"));
        assert_eq!(view.peak_month, Some("Jul"));
    }

    #[test]
    fn test_yearly_rows_ascending_and_complete() {
        let mut section = multi_year_fixture();
        section
            .yearly_summary
            .insert("2021".to_string(), YearlyStats::default());
        let view = multi_year_view(Some(&section)).unwrap();
        let years: Vec<&str> = view.yearly.iter().map(|r| r.year.as_str()).collect();
        assert_eq!(years, vec!["2022", "2023"]);
        assert_eq!(view.yearly[0].hours_label, "800.5 hours");
        assert_eq!(view.yearly[0].vessels_label, "25 vessels");
    }

    #[test]
    fn test_trend_missing_or_blank() {
        let mut section = multi_year_fixture();
        section.trend_analysis = None;
        assert!(multi_year_view(Some(&section)).unwrap().trend.is_none());

        section.trend_analysis = Some(TrendAnalysis::default());
        assert!(multi_year_view(Some(&section)).unwrap().trend.is_none());
    }

    #[test]
    fn test_unknown_trend_text_renders_stable() {
        let mut section = multi_year_fixture();
        section.trend_analysis = Some(TrendAnalysis {
            trend_direction: "flat".to_string(),
            trend_strength: None,
        });
        let trend = multi_year_view(Some(&section)).unwrap().trend.unwrap();
        assert_eq!(trend.direction, TrendDirection::Stable);
        assert_eq!(trend.label, "flat");
        assert_eq!(trend.direction.arrow(), "\u{2192}");
    }

    #[test]
    fn test_fractional_years_label() {
        let mut section = multi_year_fixture();
        section.total_years = 2.3;
        let view = multi_year_view(Some(&section)).unwrap();
        assert_eq!(view.total_years_label, "2.3 years");
    }

    #[test]
    fn test_flag_rows_ordering() {
        let mut flags = BTreeMap::new();
        flags.insert("GBR".to_string(), 15);
        flags.insert("NLD".to_string(), 20);
        flags.insert("FRA".to_string(), 15);
        flags.insert("ESP".to_string(), 2);
        let rows = flag_rows(&flags);
        let order: Vec<(&str, u32)> = rows.iter().map(|r| (r.flag.as_str(), r.count)).collect();
        assert_eq!(
            order,
            vec![("NLD", 20), ("FRA", 15), ("GBR", 15), ("ESP", 2)]
        );
    }

    #[test]
    fn test_month_short_name_bounds() {
        assert_eq!(month_short_name(1), Some("Jan"));
        assert_eq!(month_short_name(12), Some("Dec"));
        assert_eq!(month_short_name(0), None);
        assert_eq!(month_short_name(13), None);
    }
}
