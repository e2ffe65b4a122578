//! Flag state breakdown table.

use dioxus::prelude::*;
use mpa_core::projection::flag_rows;
use std::collections::BTreeMap;

const TH_STYLE: &str = "text-align: left; padding: 8px 10px; border-bottom: 2px solid #dee2e6; font-size: 12px; text-transform: uppercase; color: #666;";
const TD_STYLE: &str = "padding: 8px 10px; border-bottom: 1px solid #eef0f2; font-size: 13px;";

#[derive(Props, Clone, PartialEq)]
pub struct FlagsTableProps {
    pub flag_states: BTreeMap<String, u32>,
}

/// Vessel counts per flag state, busiest first.
#[component]
pub fn FlagsTable(props: FlagsTableProps) -> Element {
    let rows = flag_rows(&props.flag_states);

    rsx! {
        div {
            style: "margin: 16px 0;",
            h3 {
                style: "margin: 0 0 8px 0; font-size: 16px;",
                "\u{1f6a9} Flag States"
            }
            table {
                style: "width: 100%; max-width: 420px; border-collapse: collapse; background: #fff;",
                thead {
                    tr {
                        th { style: TH_STYLE, "Flag State" }
                        th { style: TH_STYLE, "Vessels" }
                    }
                }
                tbody {
                    if rows.is_empty() {
                        tr {
                            td {
                                colspan: 2,
                                style: "padding: 16px; text-align: center; color: #888; font-style: italic;",
                                "No flag data available"
                            }
                        }
                    }
                    for row in rows.iter() {
                        tr {
                            td { style: TD_STYLE, "{row.flag}" }
                            td { style: TD_STYLE, "{row.count}" }
                        }
                    }
                }
            }
        }
    }
}
