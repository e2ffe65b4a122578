//! Ranked vessel table rows and the incremental display window.

use crate::analysis::VesselActivity;
use crate::gear::{format_gear_label, GearClass};

/// Rows visible when a fresh result arrives.
pub const INITIAL_WINDOW: usize = 10;
/// Rows revealed per press of the load-more control.
pub const WINDOW_STEP: usize = 10;

/// Cursor over the ranked vessel list.
///
/// The cursor only ever grows; a new analysis replaces it with a fresh one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VesselWindow {
    shown: usize,
}

impl VesselWindow {
    pub fn new() -> VesselWindow {
        VesselWindow {
            shown: INITIAL_WINDOW,
        }
    }

    /// How many of `total` ranked vessels are currently visible.
    pub fn visible(&self, total: usize) -> usize {
        self.shown.min(total)
    }

    /// Reveal the next batch of rows.
    pub fn advance(&mut self, total: usize) {
        let next = (self.shown + WINDOW_STEP).min(total);
        if next > self.shown {
            self.shown = next;
        }
    }

    /// Whether every ranked vessel is already visible.
    pub fn exhausted(&self, total: usize) -> bool {
        self.shown >= total
    }

    /// Table caption, e.g. "Showing 10 of 45 vessels".
    pub fn caption(&self, total: usize) -> String {
        let visible = self.visible(total);
        if visible < total {
            format!("Showing {visible} of {total} vessels")
        } else {
            format!("Showing all {total} vessels")
        }
    }
}

impl Default for VesselWindow {
    fn default() -> VesselWindow {
        VesselWindow::new()
    }
}

/// One rendered row of the most-active vessels table.
#[derive(Debug, Clone, PartialEq)]
pub struct VesselRow {
    /// 1-based rank by fishing hours
    pub rank: usize,
    pub name: String,
    pub flag: String,
    /// Fishing hours to one decimal
    pub hours: String,
    /// Formatted gear label
    pub gear: String,
    /// Severity class driving the gear badge color
    pub gear_class: GearClass,
    pub mmsi: String,
}

fn field_or<'a>(value: Option<&'a str>, fallback: &'a str) -> &'a str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => fallback,
    }
}

/// Project the visible slice of the ranked vessel list into table rows.
///
/// Missing registry fields fall back to placeholders so a sparse vessel
/// record still renders.
pub fn vessel_rows(vessels: &[VesselActivity], window: VesselWindow) -> Vec<VesselRow> {
    vessels
        .iter()
        .take(window.visible(vessels.len()))
        .enumerate()
        .map(|(i, vessel)| {
            let raw_gear = field_or(vessel.primary_gear_type.as_deref(), "UNKNOWN");
            VesselRow {
                rank: i + 1,
                name: field_or(vessel.ship_name.as_deref(), "Unknown Vessel").to_string(),
                flag: field_or(vessel.flag.as_deref(), "UNK").to_string(),
                hours: format!("{:.1}", vessel.fishing_hours),
                gear: format_gear_label(raw_gear),
                gear_class: GearClass::classify(raw_gear),
                mmsi: field_or(vessel.mmsi.as_deref(), "-").to_string(),
            }
        })
        .collect()
}
