//! Most-active vessels table with incremental reveal.

use crate::state::AppState;
use dioxus::prelude::*;
use mpa_core::analysis::VesselActivity;
use mpa_core::vessels::{vessel_rows, VesselRow};

const TH_STYLE: &str = "text-align: left; padding: 8px 10px; border-bottom: 2px solid #dee2e6; font-size: 12px; text-transform: uppercase; color: #666;";
const TD_STYLE: &str = "padding: 8px 10px; border-bottom: 1px solid #eef0f2; font-size: 13px;";

#[derive(Props, Clone, PartialEq)]
pub struct VesselsTableProps {
    pub vessels: Vec<VesselActivity>,
}

/// Ranked vessel table. Shows ten rows at a time; the load-more control
/// reveals ten more until the list is exhausted.
#[component]
pub fn VesselsTable(props: VesselsTableProps) -> Element {
    let mut state = use_context::<AppState>();
    let window = (state.vessel_window)();
    let total = props.vessels.len();
    let rows = vessel_rows(&props.vessels, window);

    let load_more = move |_| {
        let mut next = (state.vessel_window)();
        next.advance(total);
        state.vessel_window.set(next);
    };

    rsx! {
        div {
            style: "margin: 16px 0;",
            h3 {
                style: "margin: 0 0 8px 0; font-size: 16px;",
                "\u{1f6a2} Most Active Vessels"
            }
            table {
                style: "width: 100%; border-collapse: collapse; background: #fff;",
                thead {
                    tr {
                        th { style: TH_STYLE, "#" }
                        th { style: TH_STYLE, "Vessel" }
                        th { style: TH_STYLE, "Flag" }
                        th { style: TH_STYLE, "Fishing Hours" }
                        th { style: TH_STYLE, "Gear Type" }
                        th { style: TH_STYLE, "MMSI" }
                    }
                }
                tbody {
                    if rows.is_empty() {
                        tr {
                            td {
                                colspan: 6,
                                style: "padding: 16px; text-align: center; color: #888; font-style: italic;",
                                "No vessel data available"
                            }
                        }
                    }
                    for row in rows.iter() {
                        VesselRowView { row: row.clone() }
                    }
                }
            }
            if total > 0 {
                div {
                    style: "display: flex; align-items: center; gap: 12px; margin-top: 8px;",
                    span {
                        style: "font-size: 12px; color: #666;",
                        "{window.caption(total)}"
                    }
                    if !window.exhausted(total) {
                        button {
                            style: "padding: 6px 12px; border: 1px solid #0066cc; background: #fff; color: #0066cc; border-radius: 4px; cursor: pointer; font-size: 12px;",
                            onclick: load_more,
                            "Load More Vessels"
                        }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct VesselRowViewProps {
    row: VesselRow,
}

#[component]
fn VesselRowView(props: VesselRowViewProps) -> Element {
    let row = &props.row;
    let gear_style = if row.gear_class.is_harmful() {
        format!(
            "display: inline-block; padding: 2px 8px; border-radius: 10px; font-size: 12px; background: {}; color: #fff;",
            row.gear_class.color()
        )
    } else {
        "display: inline-block; padding: 2px 8px; border-radius: 10px; font-size: 12px; background: #eef2f5; color: #333;".to_string()
    };

    rsx! {
        tr {
            td { style: TD_STYLE, "{row.rank}" }
            td {
                style: TD_STYLE,
                strong { "{row.name}" }
            }
            td { style: TD_STYLE, "{row.flag}" }
            td { style: TD_STYLE, "{row.hours}" }
            td {
                style: TD_STYLE,
                span {
                    style: "{gear_style}",
                    "{row.gear}"
                }
            }
            td { style: TD_STYLE, "{row.mmsi}" }
        }
    }
}
