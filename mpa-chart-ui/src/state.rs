//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use mpa_core::analysis::AnalysisReport;
use mpa_core::catalog::SiteIndex;
use mpa_core::date_range::RangePreset;
use mpa_core::export::ExportKind;
use mpa_core::site::MpaSite;
use mpa_core::vessels::VesselWindow;

/// Shared application state for the MPA dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Site catalog index (None until loaded)
    pub catalog: Signal<Option<SiteIndex>>,
    /// Whether the app is still bootstrapping
    pub loading: Signal<bool>,
    /// Whether an analysis request is in flight
    pub analyzing: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Current text in the MPA search box
    pub search_term: Signal<String>,
    /// Currently selected MPA
    pub selected_site: Signal<Option<MpaSite>>,
    /// Whether the selector dropdown is open
    pub dropdown_open: Signal<bool>,
    /// Whether the dropdown shows the alphabetical browse list
    pub browse_mode: Signal<bool>,
    /// Zero-based page count revealed in browse mode
    pub browse_pages: Signal<usize>,
    /// Start date for the analysis range (YYYY-MM-DD)
    pub start_date: Signal<String>,
    /// End date for the analysis range (YYYY-MM-DD)
    pub end_date: Signal<String>,
    /// Preset that produced the current range, until a manual edit
    pub active_preset: Signal<Option<RangePreset>>,
    /// Decoded analysis result driving the dashboard
    pub report: Signal<Option<AnalysisReport>>,
    /// Verbatim analysis payload for exports
    pub raw_report: Signal<Option<serde_json::Value>>,
    /// How much of the ranked vessel list is revealed
    pub vessel_window: Signal<VesselWindow>,
    /// Export currently being generated, if any
    pub export_busy: Signal<Option<ExportKind>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            catalog: Signal::new(None),
            loading: Signal::new(true),
            analyzing: Signal::new(false),
            error_msg: Signal::new(None),
            search_term: Signal::new(String::new()),
            selected_site: Signal::new(None),
            dropdown_open: Signal::new(false),
            browse_mode: Signal::new(false),
            browse_pages: Signal::new(0),
            start_date: Signal::new(String::new()),
            end_date: Signal::new(String::new()),
            active_preset: Signal::new(None),
            report: Signal::new(None),
            raw_report: Signal::new(None),
            vessel_window: Signal::new(VesselWindow::new()),
            export_busy: Signal::new(None),
        }
    }
}
