//! Reusable Dioxus RSX components for the MPA dashboard.

mod chart_container;
mod chart_header;
mod date_range_panel;
mod error_display;
mod export_buttons;
mod feature_tags;
mod flags_table;
mod loading_spinner;
mod mpa_selector;
mod multi_year_panel;
mod summary_cards;
mod vessels_table;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use date_range_panel::DateRangePanel;
pub use error_display::ErrorDisplay;
pub use export_buttons::ExportButtons;
pub use feature_tags::FeatureTags;
pub use flags_table::FlagsTable;
pub use loading_spinner::LoadingSpinner;
pub use mpa_selector::MpaSelector;
pub use multi_year_panel::MultiYearPanel;
pub use summary_cards::SummaryCards;
pub use vessels_table::VesselsTable;
