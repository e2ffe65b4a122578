//! UK Marine Protected Areas fishing activity dashboard.
//!
//! Single-page app: pick an MPA from the embedded catalog, choose a date
//! range, and run a fishing-effort analysis against the backend. Results
//! render as summary cards, two D3 charts, vessel and flag tables, and
//! CSV/PDF export of the exact payload the backend returned.

use anyhow::Context;
use chrono::Local;
use dioxus::prelude::*;
use mpa_chart_ui::api::{self, AnalyzeRequest};
use mpa_chart_ui::components::{
    ChartContainer, ChartHeader, DateRangePanel, ErrorDisplay, ExportButtons, FeatureTags,
    FlagsTable, LoadingSpinner, MpaSelector, MultiYearPanel, SummaryCards, VesselsTable,
};
use mpa_chart_ui::js_bridge;
use mpa_chart_ui::state::AppState;
use mpa_core::catalog::SiteIndex;
use mpa_core::date_range::{DateRange, RangePreset};
use mpa_core::projection;
use mpa_core::site::{CSV_OBJECT, MpaSite};
use mpa_core::vessels::VesselWindow;

const MONTHLY_CHART_ID: &str = "monthly-activity-chart";
const GEAR_CHART_ID: &str = "gear-distribution-chart";
const RESULTS_SECTION_ID: &str = "analysis-results";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("mpa-dashboard-root"))
        .launch(App);
}

fn load_catalog() -> anyhow::Result<SiteIndex> {
    let sites =
        MpaSite::parse_site_csv(CSV_OBJECT).context("failed to parse the embedded MPA catalog")?;
    Ok(SiteIndex::new(sites))
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Bootstrap once on mount: catalog, default 30-day range, chart scripts.
    use_effect(move || {
        match load_catalog() {
            Ok(index) => state.catalog.set(Some(index)),
            Err(err) => {
                log::error!("catalog load failed: {err:#}");
                state.error_msg.set(Some(format!("{err:#}")));
            }
        }

        let today = Local::now().date_naive();
        let range = DateRange::from_preset(RangePreset::LastMonth, today);
        state.start_date.set(range.start_str());
        state.end_date.set(range.end_str());
        state.active_preset.set(Some(RangePreset::LastMonth));
        state.loading.set(false);

        js_bridge::init_charts();
    });

    // Re-project chart payloads whenever a new report lands.
    use_effect(move || {
        let report = state.report.read();
        let Some(report) = report.as_ref() else {
            return;
        };

        if let Some(data) = projection::monthly_chart_data(&report.temporal) {
            let payload = serde_json::to_string(&data).unwrap_or_default();
            js_bridge::render_monthly_chart(
                MONTHLY_CHART_ID,
                &payload,
                r#"{"yLabel":"Fishing Hours"}"#,
            );
        } else {
            js_bridge::destroy_chart(MONTHLY_CHART_ID);
        }

        if let Some(slices) = projection::gear_chart_data(&report.gear_types) {
            let payload = serde_json::to_string(&slices).unwrap_or_default();
            js_bridge::render_gear_chart(GEAR_CHART_ID, &payload, "{}");
        } else {
            js_bridge::destroy_chart(GEAR_CHART_ID);
        }
    });

    let analyze = move |_| {
        if (state.analyzing)() {
            return;
        }
        let Some(site) = (state.selected_site)() else {
            state
                .error_msg
                .set(Some("Please select an MPA first".to_string()));
            return;
        };
        let range = match DateRange::parse(&(state.start_date)(), &(state.end_date)()) {
            Ok(range) => range,
            Err(_) => {
                state
                    .error_msg
                    .set(Some("Please select both start and end dates".to_string()));
                return;
            }
        };
        if !range.is_valid() {
            state
                .error_msg
                .set(Some("End date must be after start date".to_string()));
            return;
        }

        state.analyzing.set(true);
        state.error_msg.set(None);

        let request = AnalyzeRequest {
            mpa_name: site.name.clone(),
            wdpa_code: site.wdpa_code.clone(),
            start_date: range.start_str(),
            end_date: range.end_str(),
        };
        spawn(async move {
            match api::analyze_mpa(&request).await {
                Ok(outcome) if outcome.report.is_success() => {
                    state.vessel_window.set(VesselWindow::new());
                    state.raw_report.set(Some(outcome.raw));
                    state.report.set(Some(outcome.report));
                    js_bridge::scroll_into_view(RESULTS_SECTION_ID);
                }
                Ok(outcome) => {
                    let msg = outcome
                        .report
                        .error
                        .unwrap_or_else(|| "Unknown error occurred".to_string());
                    log::warn!("backend rejected analysis: {msg}");
                    state.error_msg.set(Some(msg));
                }
                Err(err) => {
                    log::warn!("analysis request failed: {err}");
                    state
                        .error_msg
                        .set(Some(format!("Error analyzing MPA: {err}")));
                }
            }
            state.analyzing.set(false);
        });
    };

    let analyzing = (state.analyzing)();
    let show_intro =
        state.report.read().is_none() && !analyzing && state.error_msg.read().is_none();
    // Hide rather than unmount while a new analysis runs, so the D3 charts
    // painted into the containers survive a failed attempt.
    let results_display = if analyzing { "display: none;" } else { "" };

    rsx! {
        div {
            style: "min-height: 100vh;",
            // Clicking anywhere outside the selector closes its dropdown. The
            // handler sits on this full-viewport wrapper rather than the
            // content column, so clicks in the side margins count as outside.
            onclick: move |_| {
                if (state.dropdown_open)() {
                    state.dropdown_open.set(false);
                    state.browse_mode.set(false);
                }
            },

            div {
                style: "max-width: 1100px; margin: 0 auto; padding: 16px; font-family: system-ui, -apple-system, sans-serif; color: #212529;",

                header {
                    style: "margin-bottom: 16px;",
                    h1 {
                        style: "margin: 0 0 4px 0; font-size: 1.6em; color: #003087;",
                        "\u{1f30a} UK Marine Protected Areas"
                    }
                    p {
                        style: "margin: 0; color: #6c757d;",
                        "Fishing activity analysis from Global Fishing Watch AIS data"
                    }
                }

                if let Some(message) = state.error_msg.read().as_ref() {
                    ErrorDisplay { message: message.clone() }
                }

                if (state.loading)() {
                    LoadingSpinner { message: "Loading MPA catalog...".to_string() }
                } else {
                    div {
                        style: "background: #ffffff; border: 1px solid #dee2e6; border-radius: 8px; padding: 16px; margin-bottom: 16px;",
                        MpaSelector {}
                        DateRangePanel {}
                        button {
                            style: "margin-top: 12px; padding: 10px 24px; background: #0066cc; color: #ffffff; border: none; border-radius: 6px; font-size: 1em; cursor: pointer;",
                            disabled: analyzing,
                            onclick: analyze,
                            if analyzing {
                                "\u{23f3} Analyzing..."
                            } else {
                                "\u{1f50d} Analyze Fishing Activity"
                            }
                        }
                    }
                }

                if analyzing {
                    LoadingSpinner {}
                }

                if show_intro {
                    IntroPanel {}
                }

                if let Some(report) = state.report.read().as_ref() {
                    section {
                        id: RESULTS_SECTION_ID,
                        style: "margin-top: 8px; {results_display}",
                        h2 {
                            style: "margin: 0 0 4px 0; font-size: 1.3em;",
                            "\u{1f4ca} Fishing Activity Analysis: {report.mpa_name}"
                        }
                        if let Some(range) = report.date_range.as_ref() {
                            p {
                                style: "margin: 0 0 12px 0; color: #6c757d;",
                                "{range.start} to {range.end}"
                            }
                        }
                        SummaryCards { summary: report.summary.clone() }
                        FeatureTags { features: report.protected_features.clone() }
                        MultiYearPanel { multi_year: report.multi_year.clone() }
                        div {
                            style: "display: flex; gap: 16px; flex-wrap: wrap; margin-bottom: 16px;",
                            div {
                                style: "flex: 2; min-width: 420px;",
                                ChartHeader {
                                    title: "Monthly Fishing Activity".to_string(),
                                    subtitle: "Hours of apparent fishing effort per month".to_string(),
                                }
                                ChartContainer {
                                    id: MONTHLY_CHART_ID.to_string(),
                                    has_data: !report.temporal.monthly_hours.is_empty(),
                                    empty_message: "No temporal data available".to_string(),
                                }
                            }
                            div {
                                style: "flex: 1; min-width: 320px;",
                                ChartHeader {
                                    title: "Gear Type Distribution".to_string(),
                                    subtitle: "Fishing hours by gear type".to_string(),
                                }
                                ChartContainer {
                                    id: GEAR_CHART_ID.to_string(),
                                    has_data: !report.gear_types.is_empty(),
                                    empty_message: "No gear type data available".to_string(),
                                    min_height: 300,
                                }
                            }
                        }
                        VesselsTable { vessels: report.vessels.most_active.clone() }
                        FlagsTable { flag_states: report.vessels.flag_states.clone() }
                        ExportButtons {}
                    }
                }
            }
        }
    }
}

#[component]
fn IntroPanel() -> Element {
    rsx! {
        div {
            style: "background: #f0f7ff; border: 1px solid #b8d4f0; border-radius: 8px; padding: 16px;",
            h2 {
                style: "margin: 0 0 8px 0; font-size: 1.1em; color: #003087;",
                "How it works"
            }
            p {
                style: "margin: 0 0 8px 0;",
                "Search for one of the UK's Marine Protected Areas, pick a date range, and run the analysis. The dashboard queries Global Fishing Watch for apparent fishing effort inside the site boundary."
            }
            p {
                style: "margin: 0; color: #6c757d;",
                "Results include monthly activity, gear type breakdown, the most active vessels and their flag states, plus CSV and PDF export. Longer ranges are analysed year by year and take proportionally longer."
            }
        }
    }
}
