//! Headline metric cards for the analyzed period.

use dioxus::prelude::*;
use mpa_core::analysis::Summary;
use mpa_core::projection;

const CARD_STYLE: &str = "flex: 1; min-width: 160px; background: #f8f9fa; border: 1px solid #e0e0e0; border-radius: 6px; padding: 14px 16px; text-align: center;";
const VALUE_STYLE: &str = "font-size: 26px; font-weight: bold; margin: 4px 0;";
const CAPTION_STYLE: &str = "font-size: 12px; color: #666; text-transform: uppercase; letter-spacing: 0.04em;";

#[derive(Props, Clone, PartialEq)]
pub struct SummaryCardsProps {
    pub summary: Summary,
}

/// Total hours, unique vessels, and the harmful share of activity.
#[component]
pub fn SummaryCards(props: SummaryCardsProps) -> Element {
    let cards = projection::summary_cards(&props.summary);

    rsx! {
        div {
            style: "display: flex; gap: 12px; flex-wrap: wrap; margin: 12px 0;",
            div {
                style: CARD_STYLE,
                div { style: CAPTION_STYLE, "Total Fishing Hours" }
                div { style: VALUE_STYLE, "{cards.total_hours}" }
            }
            div {
                style: CARD_STYLE,
                div { style: CAPTION_STYLE, "Unique Vessels" }
                div { style: VALUE_STYLE, "{cards.unique_vessels}" }
            }
            div {
                style: CARD_STYLE,
                div { style: CAPTION_STYLE, "Harmful Fishing Hours" }
                div {
                    style: "{VALUE_STYLE} color: #dc3545;",
                    "{cards.harmful_hours} "
                    span {
                        style: "font-size: 14px; color: #888;",
                        "({cards.harmful_percentage})"
                    }
                }
            }
        }
    }
}
