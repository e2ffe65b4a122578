//! In-memory search and browse over the MPA catalog.
//!
//! The dropdown has two modes. Typing searches the catalog in its original
//! order; the browse toggle walks an alphabetical view page by page. Both are
//! plain functions over the loaded sites so the rules stay testable off the
//! DOM.

use log::info;

use crate::site::MpaSite;

/// Minimum number of characters before a search term produces results.
pub const MIN_SEARCH_LEN: usize = 2;
/// Maximum number of hits returned by [`SiteIndex::search`].
pub const SEARCH_LIMIT: usize = 10;
/// Number of sites added per page in browse mode.
pub const BROWSE_PAGE_SIZE: usize = 15;
/// Maximum number of hits returned by [`SiteIndex::browse_filter`].
pub const BROWSE_FILTER_LIMIT: usize = 20;

/// Catalog index holding the original site order plus an alphabetical
/// permutation for browse mode.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteIndex {
    sites: Vec<MpaSite>,
    alphabetical: Vec<usize>,
}

/// One window into the alphabetical browse view.
#[derive(Debug, Clone, PartialEq)]
pub struct BrowseWindow {
    /// Sites visible so far, alphabetical by name.
    pub items: Vec<MpaSite>,
    /// Whether another page exists past this window.
    pub has_more: bool,
    /// Total number of sites in the catalog.
    pub total: usize,
}

impl SiteIndex {
    pub fn new(sites: Vec<MpaSite>) -> Self {
        let mut alphabetical: Vec<usize> = (0..sites.len()).collect();
        alphabetical.sort_by(|&a, &b| {
            sites[a]
                .name
                .to_lowercase()
                .cmp(&sites[b].name.to_lowercase())
        });
        info!("catalog indexed: {} sites", sites.len());
        SiteIndex {
            sites,
            alphabetical,
        }
    }

    /// Build the index from the embedded catalog.
    pub fn from_embedded() -> Self {
        SiteIndex::new(MpaSite::get_site_vector())
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    /// Case-insensitive substring search in catalog order.
    ///
    /// Terms shorter than [`MIN_SEARCH_LEN`] characters return nothing; hits
    /// are capped at [`SEARCH_LIMIT`].
    pub fn search(&self, term: &str) -> Vec<MpaSite> {
        if term.chars().count() < MIN_SEARCH_LEN {
            return Vec::new();
        }
        let needle = term.to_lowercase();
        self.sites
            .iter()
            .filter(|site| site.name.to_lowercase().contains(&needle))
            .take(SEARCH_LIMIT)
            .cloned()
            .collect()
    }

    /// Alphabetical browse window covering pages `0..=pages`.
    ///
    /// Each page adds [`BROWSE_PAGE_SIZE`] sites, so the window only ever
    /// grows as the caller advances.
    pub fn browse(&self, pages: usize) -> BrowseWindow {
        let end = (pages + 1) * BROWSE_PAGE_SIZE;
        let items: Vec<MpaSite> = self
            .alphabetical
            .iter()
            .take(end)
            .map(|&i| self.sites[i].clone())
            .collect();
        BrowseWindow {
            has_more: end < self.sites.len(),
            total: self.sites.len(),
            items,
        }
    }

    /// Filter the full catalog while browse mode is open.
    ///
    /// Unlike paging this searches every site, capped at
    /// [`BROWSE_FILTER_LIMIT`]; an empty term returns nothing so the caller
    /// can fall back to the paged window.
    pub fn browse_filter(&self, term: &str) -> Vec<MpaSite> {
        if term.is_empty() {
            return Vec::new();
        }
        let needle = term.to_lowercase();
        self.sites
            .iter()
            .filter(|site| site.name.to_lowercase().contains(&needle))
            .take(BROWSE_FILTER_LIMIT)
            .cloned()
            .collect()
    }
}
