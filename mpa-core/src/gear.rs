//! Gear-type classification shared by the charts, metrics and tables.

/// Lowercase substring patterns identifying trawling gear.
const TRAWLING_PATTERNS: [&str; 4] = ["trawlers", "bottom_trawl", "beam_trawl", "trawl"];

/// Lowercase substring patterns identifying dredging gear.
const DREDGING_PATTERNS: [&str; 2] = ["dredge_fishing", "dredge"];

/// Severity class of a gear-type label.
///
/// Trawling and dredging together make up the "harmful fishing" category on
/// the dashboard; everything else renders in the neutral style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GearClass {
    Trawling,
    Dredging,
    Other,
}

impl GearClass {
    /// Classify a raw gear-type label.
    ///
    /// Matching is case-insensitive on substrings. Trawling patterns are
    /// checked before dredging ones, so a label containing both counts as
    /// trawling.
    pub fn classify(label: &str) -> GearClass {
        let lowered = label.to_lowercase();
        if TRAWLING_PATTERNS.iter().any(|p| lowered.contains(p)) {
            GearClass::Trawling
        } else if DREDGING_PATTERNS.iter().any(|p| lowered.contains(p)) {
            GearClass::Dredging
        } else {
            GearClass::Other
        }
    }

    pub fn is_harmful(self) -> bool {
        !matches!(self, GearClass::Other)
    }

    /// Hex color used for this class across charts and badges.
    pub fn color(self) -> &'static str {
        match self {
            GearClass::Trawling => "#dc3545",
            GearClass::Dredging => "#ff6b35",
            GearClass::Other => "#0066cc",
        }
    }
}

/// Human-readable form of a raw gear label: underscores become spaces and
/// each word gets a capital first letter ("bottom_trawl" -> "Bottom Trawl").
pub fn format_gear_label(raw: &str) -> String {
    raw.replace('_', " ")
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
