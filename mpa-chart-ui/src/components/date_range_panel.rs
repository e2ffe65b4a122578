//! Date range picker with preset chips and a live span description.

use crate::state::AppState;
use dioxus::prelude::*;
use mpa_core::date_range::{describe, DateRange, RangeInfo, RangePreset};

/// Date inputs, quick-select presets and the estimate line.
///
/// Presets rewrite both bounds relative to today and mark their chip active;
/// editing either field by hand deactivates every chip.
#[component]
pub fn DateRangePanel() -> Element {
    let mut state = use_context::<AppState>();
    let start = (state.start_date)();
    let end = (state.end_date)();
    let active = (state.active_preset)();

    let on_start_change = move |evt: Event<FormData>| {
        state.start_date.set(evt.value());
        state.active_preset.set(None);
    };

    let on_end_change = move |evt: Event<FormData>| {
        state.end_date.set(evt.value());
        state.active_preset.set(None);
    };

    let info = DateRange::parse(&start, &end)
        .map(|range| describe(&range))
        .unwrap_or(RangeInfo::Invalid);

    rsx! {
        div {
            style: "margin: 8px 0;",
            div {
                style: "display: flex; gap: 12px; align-items: center; flex-wrap: wrap;",
                label {
                    style: "font-weight: bold;",
                    "From: "
                    input {
                        r#type: "date",
                        value: "{start}",
                        onchange: on_start_change,
                    }
                }
                label {
                    style: "font-weight: bold;",
                    "To: "
                    input {
                        r#type: "date",
                        value: "{end}",
                        onchange: on_end_change,
                    }
                }
                div {
                    style: "display: flex; gap: 6px;",
                    for preset in RangePreset::ALL {
                        PresetChip { preset, active: active == Some(preset) }
                    }
                }
            }
            RangeInfoLine { info }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct PresetChipProps {
    preset: RangePreset,
    active: bool,
}

#[component]
fn PresetChip(props: PresetChipProps) -> Element {
    let mut state = use_context::<AppState>();
    let preset = props.preset;

    let on_click = move |_| {
        let today = chrono::Local::now().date_naive();
        let range = DateRange::from_preset(preset, today);
        state.start_date.set(range.start_str());
        state.end_date.set(range.end_str());
        state.active_preset.set(Some(preset));
    };

    let style = if props.active {
        "padding: 4px 10px; font-size: 12px; border-radius: 12px; cursor: pointer; border: 1px solid #0066cc; background: #0066cc; color: #fff;"
    } else {
        "padding: 4px 10px; font-size: 12px; border-radius: 12px; cursor: pointer; border: 1px solid #ccc; background: #fff; color: #333;"
    };

    rsx! {
        button {
            style: style,
            onclick: on_click,
            "{preset.label()}"
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct RangeInfoLineProps {
    info: RangeInfo,
}

/// Selected span, estimated analysis time, and the multi-year warning.
#[component]
fn RangeInfoLine(props: RangeInfoLineProps) -> Element {
    match &props.info {
        RangeInfo::Invalid => rsx! {
            p {
                style: "margin: 6px 0 0 0; font-size: 12px; color: #dc3545;",
                "{props.info.span_text()}"
            }
        },
        RangeInfo::Valid {
            estimate,
            multi_year_warning,
            ..
        } => rsx! {
            p {
                style: "margin: 6px 0 0 0; font-size: 12px; color: #666;",
                "{props.info.span_text()} \u{2022} Estimated analysis time: {estimate}"
            }
            if *multi_year_warning {
                p {
                    style: "margin: 2px 0 0 0; font-size: 12px; color: #b36b00;",
                    "\u{26a0} Multi-year range: the analysis runs one backend call per year and can take a while"
                }
            }
        },
    }
}
