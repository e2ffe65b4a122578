//! Multi-year trend panel, shown only for ranges spanning multiple years.

use dioxus::prelude::*;
use mpa_core::analysis::MultiYear;
use mpa_core::projection::{multi_year_view, TrendView};

const STAT_STYLE: &str = "flex: 1; min-width: 180px; background: #fff; border: 1px solid #e0e0e0; border-radius: 6px; padding: 12px 14px;";

#[derive(Props, Clone, PartialEq)]
pub struct MultiYearPanelProps {
    pub multi_year: Option<MultiYear>,
}

/// Trend direction, peak month and a per-year breakdown.
///
/// Hidden entirely unless the backend reported more than one year of
/// coverage.
#[component]
pub fn MultiYearPanel(props: MultiYearPanelProps) -> Element {
    let Some(view) = multi_year_view(props.multi_year.as_ref()) else {
        return rsx! {};
    };

    rsx! {
        div {
            style: "margin: 16px 0; padding: 14px 16px; background: #f4f8fb; border: 1px solid #d4e4f0; border-radius: 6px;",
            h3 {
                style: "margin: 0 0 10px 0; font-size: 16px;",
                "\u{1f4c5} Multi-Year Analysis ({view.total_years_label})"
            }
            div {
                style: "display: flex; gap: 12px; flex-wrap: wrap;",
                div {
                    style: STAT_STYLE,
                    div {
                        style: "font-size: 12px; color: #666;",
                        "Activity trend"
                    }
                    TrendLine { trend: view.trend.clone() }
                }
                div {
                    style: STAT_STYLE,
                    div {
                        style: "font-size: 12px; color: #666;",
                        "Peak activity month"
                    }
                    div {
                        style: "font-size: 18px; font-weight: bold; margin-top: 4px;",
                        if let Some(month) = view.peak_month {
                            "{month}"
                        } else {
                            "N/A"
                        }
                    }
                }
            }
            if !view.yearly.is_empty() {
                div {
                    style: "margin-top: 12px;",
                    div {
                        style: "font-size: 12px; color: #666; margin-bottom: 4px;",
                        "Year by year"
                    }
                    div {
                        style: "display: flex; gap: 10px; flex-wrap: wrap;",
                        for row in view.yearly.iter() {
                            div {
                                style: "background: #fff; border: 1px solid #e0e0e0; border-radius: 6px; padding: 8px 12px; text-align: center;",
                                div {
                                    style: "font-weight: bold;",
                                    "{row.year}"
                                }
                                div {
                                    style: "font-size: 12px; color: #444;",
                                    "{row.hours_label}"
                                }
                                div {
                                    style: "font-size: 12px; color: #888;",
                                    "{row.vessels_label}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct TrendLineProps {
    trend: Option<TrendView>,
}

#[component]
fn TrendLine(props: TrendLineProps) -> Element {
    match &props.trend {
        Some(trend) => {
            let style = format!(
                "font-size: 18px; font-weight: bold; margin-top: 4px; color: {};",
                trend.direction.color()
            );
            rsx! {
                div {
                    style: "{style}",
                    "{trend.direction.arrow()} {trend.label}"
                    if let Some(strength) = trend.strength.as_ref() {
                        span {
                            style: "font-size: 12px; color: #888; font-weight: normal;",
                            " ({strength})"
                        }
                    }
                }
            }
        }
        None => rsx! {
            div {
                style: "font-size: 14px; color: #888; margin-top: 4px; font-style: italic;",
                "Insufficient data"
            }
        },
    }
}
