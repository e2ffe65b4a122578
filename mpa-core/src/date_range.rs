use std::fmt;

use chrono::{NaiveDate, TimeDelta};

use crate::error::MpaError;

/// Wire format for dates exchanged with the backend.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Display format for range labels, e.g. "26 Mar 2025".
const LABEL_FORMAT: &str = "%-d %b %Y";

/// Days per backend call; spans past this are chained year by year.
const DAYS_PER_BACKEND_CALL: i64 = 365;

/// Quick-select offsets for the date range picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangePreset {
    LastWeek,
    LastMonth,
    LastQuarter,
    LastYear,
}

impl RangePreset {
    pub const ALL: [RangePreset; 4] = [
        RangePreset::LastWeek,
        RangePreset::LastMonth,
        RangePreset::LastQuarter,
        RangePreset::LastYear,
    ];

    /// Days subtracted from today to form the preset start date.
    pub fn days(self) -> i64 {
        match self {
            RangePreset::LastWeek => 7,
            RangePreset::LastMonth => 30,
            RangePreset::LastQuarter => 90,
            RangePreset::LastYear => 365,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RangePreset::LastWeek => "Last 7 days",
            RangePreset::LastMonth => "Last 30 days",
            RangePreset::LastQuarter => "Last 90 days",
            RangePreset::LastYear => "Last year",
        }
    }
}

/// An inclusive start and end calendar date pair.
#[derive(Clone, Eq, PartialEq, Copy, Debug)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Range ending today with the preset's day offset.
    pub fn from_preset(preset: RangePreset, today: NaiveDate) -> DateRange {
        DateRange {
            start: today - TimeDelta::try_days(preset.days()).unwrap_or_default(),
            end: today,
        }
    }

    /// Parse a pair of `YYYY-MM-DD` field values.
    pub fn parse(start: &str, end: &str) -> Result<DateRange, MpaError> {
        let parse_one = |raw: &str| {
            NaiveDate::parse_from_str(raw, DATE_FORMAT)
                .map_err(|e| MpaError::DateParse(format!("{raw}: {e}")))
        };
        Ok(DateRange {
            start: parse_one(start)?,
            end: parse_one(end)?,
        })
    }

    /// Signed day count from start to end.
    pub fn span_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// A range is analyzable only when the end falls strictly after the start.
    pub fn is_valid(&self) -> bool {
        self.span_days() > 0
    }

    pub fn start_str(&self) -> String {
        self.start.format(DATE_FORMAT).to_string()
    }

    pub fn end_str(&self) -> String {
        self.end.format(DATE_FORMAT).to_string()
    }
}

/// User-facing guess at how long the backend call will take for a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeEstimate {
    UpToMonth,
    UpToQuarter,
    UpToYear,
    MultiYear { years: i64 },
}

impl TimeEstimate {
    pub fn for_span(days: i64) -> TimeEstimate {
        if days <= 30 {
            TimeEstimate::UpToMonth
        } else if days <= 90 {
            TimeEstimate::UpToQuarter
        } else if days <= DAYS_PER_BACKEND_CALL {
            TimeEstimate::UpToYear
        } else {
            TimeEstimate::MultiYear {
                years: (days + DAYS_PER_BACKEND_CALL - 1) / DAYS_PER_BACKEND_CALL,
            }
        }
    }

    pub fn is_multi_year(&self) -> bool {
        matches!(self, TimeEstimate::MultiYear { .. })
    }
}

impl fmt::Display for TimeEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeEstimate::UpToMonth => write!(f, "~5-10 seconds"),
            TimeEstimate::UpToQuarter => write!(f, "~8-15 seconds"),
            TimeEstimate::UpToYear => write!(f, "~10-20 seconds"),
            TimeEstimate::MultiYear { years } => write!(
                f,
                "~{}-{} seconds ({} backend calls)",
                years * 10,
                years * 20,
                years
            ),
        }
    }
}

/// Derived description of the currently selected range.
#[derive(Debug, Clone, PartialEq)]
pub enum RangeInfo {
    /// End date missing, unparseable, or not after the start date.
    Invalid,
    Valid {
        /// "26 Mar 2025 - 25 Apr 2025 (30 days)"
        label: String,
        days: i64,
        estimate: TimeEstimate,
        multi_year_warning: bool,
    },
}

impl RangeInfo {
    pub fn is_valid(&self) -> bool {
        matches!(self, RangeInfo::Valid { .. })
    }

    /// Text for the picker's selected-span line.
    pub fn span_text(&self) -> &str {
        match self {
            RangeInfo::Invalid => "Invalid date range",
            RangeInfo::Valid { label, .. } => label,
        }
    }
}

/// Describe a range for the picker's info line.
pub fn describe(range: &DateRange) -> RangeInfo {
    let days = range.span_days();
    if days <= 0 {
        return RangeInfo::Invalid;
    }
    let estimate = TimeEstimate::for_span(days);
    RangeInfo::Valid {
        label: format!(
            "{} - {} ({} days)",
            range.start.format(LABEL_FORMAT),
            range.end.format(LABEL_FORMAT),
            days
        ),
        days,
        multi_year_warning: estimate.is_multi_year(),
        estimate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_presets_end_today() {
        let today = ymd(2025, 6, 15);
        for preset in RangePreset::ALL {
            let range = DateRange::from_preset(preset, today);
            assert_eq!(range.end, today);
            assert_eq!(range.span_days(), preset.days());
            assert!(range.is_valid());
        }
    }

    #[test]
    fn test_month_preset_start() {
        let range = DateRange::from_preset(RangePreset::LastMonth, ymd(2025, 3, 31));
        assert_eq!(range.start, ymd(2025, 3, 1));
    }

    #[test]
    fn test_parse_round_trip() {
        let range = DateRange::parse("2024-01-15", "2024-02-15").unwrap();
        assert_eq!(range.start_str(), "2024-01-15");
        assert_eq!(range.end_str(), "2024-02-15");
        assert_eq!(range.span_days(), 31);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(DateRange::parse("2024-13-01", "2024-01-02").is_err());
        assert!(DateRange::parse("", "2024-01-02").is_err());
        assert!(DateRange::parse("15/01/2024", "2024-01-02").is_err());
    }

    #[test]
    fn test_reversed_and_equal_ranges_invalid() {
        let reversed = DateRange {
            start: ymd(2024, 5, 10),
            end: ymd(2024, 5, 1),
        };
        assert!(!reversed.is_valid());
        assert_eq!(describe(&reversed), RangeInfo::Invalid);

        let same_day = DateRange {
            start: ymd(2024, 5, 10),
            end: ymd(2024, 5, 10),
        };
        assert!(!same_day.is_valid());
        assert_eq!(describe(&same_day), RangeInfo::Invalid);
    }

    #[test]
    fn test_estimate_buckets() {
        assert_eq!(TimeEstimate::for_span(1), TimeEstimate::UpToMonth);
        assert_eq!(TimeEstimate::for_span(30), TimeEstimate::UpToMonth);
        assert_eq!(TimeEstimate::for_span(31), TimeEstimate::UpToQuarter);
        assert_eq!(TimeEstimate::for_span(90), TimeEstimate::UpToQuarter);
        assert_eq!(TimeEstimate::for_span(91), TimeEstimate::UpToYear);
        assert_eq!(TimeEstimate::for_span(365), TimeEstimate::UpToYear);
        assert_eq!(
            TimeEstimate::for_span(366),
            TimeEstimate::MultiYear { years: 2 }
        );
        assert_eq!(
            TimeEstimate::for_span(365 * 3),
            TimeEstimate::MultiYear { years: 3 }
        );
    }

    #[test]
    fn test_estimate_display() {
        assert_eq!(TimeEstimate::for_span(14).to_string(), "~5-10 seconds");
        assert_eq!(TimeEstimate::for_span(60).to_string(), "~8-15 seconds");
        assert_eq!(TimeEstimate::for_span(200).to_string(), "~10-20 seconds");
        assert_eq!(
            TimeEstimate::for_span(800).to_string(),
            "~30-60 seconds (3 backend calls)"
        );
    }

    #[test]
    fn test_describe_label() {
        let range = DateRange {
            start: ymd(2025, 3, 26),
            end: ymd(2025, 4, 25),
        };
        match describe(&range) {
            RangeInfo::Valid {
                label,
                days,
                estimate,
                multi_year_warning,
            } => {
                assert_eq!(label, "26 Mar 2025 - 25 Apr 2025 (30 days)");
                assert_eq!(days, 30);
                assert_eq!(estimate, TimeEstimate::UpToMonth);
                assert!(!multi_year_warning);
            }
            RangeInfo::Invalid => panic!("expected a valid range"),
        }
    }

    #[test]
    fn test_span_text() {
        let reversed = DateRange {
            start: ymd(2024, 5, 10),
            end: ymd(2024, 5, 1),
        };
        assert_eq!(describe(&reversed).span_text(), "Invalid date range");

        let range = DateRange {
            start: ymd(2025, 3, 26),
            end: ymd(2025, 4, 25),
        };
        assert_eq!(
            describe(&range).span_text(),
            "26 Mar 2025 - 25 Apr 2025 (30 days)"
        );
    }

    #[test]
    fn test_describe_multi_year_warning() {
        let range = DateRange {
            start: ymd(2022, 1, 1),
            end: ymd(2024, 6, 1),
        };
        match describe(&range) {
            RangeInfo::Valid {
                multi_year_warning,
                estimate,
                ..
            } => {
                assert!(multi_year_warning);
                assert!(estimate.is_multi_year());
            }
            RangeInfo::Invalid => panic!("expected a valid range"),
        }
    }
}
