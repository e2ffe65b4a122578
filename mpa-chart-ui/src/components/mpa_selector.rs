//! Search-or-browse dropdown selector for choosing an MPA.
//!
//! Two modes share one input. Typing two or more characters searches the
//! whole catalog in its original order; the browse button switches to an
//! alphabetical paged list where typing filters within the full catalog
//! instead. A root-level click handler (wired in the app) closes the
//! dropdown; this component stops propagation so clicks inside it survive.

use crate::state::AppState;
use dioxus::prelude::*;
use mpa_core::catalog::{SiteIndex, MIN_SEARCH_LEN};
use mpa_core::site::MpaSite;

const ITEM_STYLE: &str = "padding: 8px 12px; cursor: pointer; border-bottom: 1px solid #f0f0f0;";
const PLACEHOLDER_STYLE: &str = "padding: 8px 12px; color: #888; font-style: italic;";

/// MPA dropdown selector with search and browse-all modes.
#[component]
pub fn MpaSelector() -> Element {
    let mut state = use_context::<AppState>();
    let term = (state.search_term)();
    let browse = (state.browse_mode)();
    let open = (state.dropdown_open)();
    let pages = (state.browse_pages)();

    let on_input = move |evt: Event<FormData>| {
        state.search_term.set(evt.value());
        state.dropdown_open.set(true);
    };

    let on_focus = move |_| {
        state.dropdown_open.set(true);
    };

    let toggle_browse = move |_| {
        let entering = !(state.browse_mode)();
        state.browse_mode.set(entering);
        if entering {
            state.search_term.set(String::new());
            state.browse_pages.set(0);
            state.dropdown_open.set(true);
        } else {
            state.dropdown_open.set(false);
        }
    };

    let placeholder = if browse {
        "Search within results..."
    } else {
        "Type an MPA name, e.g. Dogger Bank"
    };

    rsx! {
        div {
            style: "position: relative; flex: 1; min-width: 280px;",
            // keep the app-level close handler from firing for inner clicks
            onclick: move |evt| evt.stop_propagation(),

            label {
                r#for: "mpa-search",
                style: "font-weight: bold; display: block; margin-bottom: 4px;",
                "Marine Protected Area"
            }
            div {
                style: "display: flex; gap: 8px;",
                input {
                    id: "mpa-search",
                    r#type: "text",
                    autocomplete: "off",
                    placeholder: "{placeholder}",
                    value: "{term}",
                    style: "flex: 1; padding: 8px 10px; border: 1px solid #ccc; border-radius: 4px; font-size: 14px;",
                    oninput: on_input,
                    onfocusin: on_focus,
                }
                button {
                    style: "padding: 8px 12px; border: 1px solid #0066cc; background: #fff; color: #0066cc; border-radius: 4px; cursor: pointer; white-space: nowrap;",
                    onclick: toggle_browse,
                    if browse { "Close list" } else { "Browse all" }
                }
            }

            if open {
                if let Some(index) = state.catalog.read().as_ref() {
                    if browse {
                        BrowseList { index: index.clone(), term: term.clone(), pages }
                    } else if term.chars().count() >= MIN_SEARCH_LEN {
                        SearchResults { index: index.clone(), term: term.clone() }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct ResultsProps {
    index: SiteIndex,
    term: String,
}

/// Plain search hits in catalog order.
#[component]
fn SearchResults(props: ResultsProps) -> Element {
    let hits = props.index.search(&props.term);
    if hits.is_empty() {
        // no matches hides the dropdown rather than showing a stub
        return rsx! {};
    }
    rsx! {
        div {
            style: "position: absolute; top: 100%; left: 0; right: 0; background: #fff; border: 1px solid #ccc; border-radius: 0 0 4px 4px; max-height: 320px; overflow-y: auto; z-index: 100; box-shadow: 0 4px 8px rgba(0,0,0,0.08);",
            for site in hits {
                SiteItem { site }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct BrowseListProps {
    index: SiteIndex,
    term: String,
    pages: usize,
}

/// Alphabetical browse window, or a capped filter over the full catalog
/// while the user types.
#[component]
fn BrowseList(props: BrowseListProps) -> Element {
    let mut state = use_context::<AppState>();

    let filtering = !props.term.is_empty();
    let (items, has_more, total) = if filtering {
        (props.index.browse_filter(&props.term), false, props.index.len())
    } else {
        let window = props.index.browse(props.pages);
        (window.items, window.has_more, window.total)
    };

    let load_more = move |_| {
        let pages = (state.browse_pages)();
        state.browse_pages.set(pages + 1);
    };

    rsx! {
        div {
            style: "position: absolute; top: 100%; left: 0; right: 0; background: #fff; border: 1px solid #ccc; border-radius: 0 0 4px 4px; max-height: 320px; overflow-y: auto; z-index: 100; box-shadow: 0 4px 8px rgba(0,0,0,0.08);",
            if items.is_empty() {
                div {
                    style: PLACEHOLDER_STYLE,
                    "No MPAs found"
                }
            }
            for site in items {
                SiteItem { site }
            }
            if has_more {
                div {
                    style: "padding: 8px 12px; cursor: pointer; text-align: center; color: #0066cc; font-weight: bold; border-top: 1px solid #e0e0e0;",
                    onclick: load_more,
                    "\u{1f4c4} Load More MPAs..."
                }
            }
            div {
                style: "padding: 6px 12px; font-size: 11px; color: #888; text-align: center; border-top: 1px solid #e0e0e0; background: #fafafa;",
                "{total} total MPAs"
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct SiteItemProps {
    site: MpaSite,
}

/// One selectable row: site name plus registry details.
#[component]
fn SiteItem(props: SiteItemProps) -> Element {
    let mut state = use_context::<AppState>();
    let site = props.site.clone();

    let on_select = move |_| {
        state.search_term.set(site.name.clone());
        state.selected_site.set(Some(site.clone()));
        state.dropdown_open.set(false);
        state.browse_mode.set(false);
    };

    rsx! {
        div {
            style: ITEM_STYLE,
            onclick: on_select,
            div {
                style: "font-weight: bold; font-size: 14px;",
                "{props.site.name}"
            }
            small {
                style: "color: #666;",
                "WDPA: {props.site.wdpa_code} | Area: {props.site.area_ha:.0} ha"
            }
        }
    }
}
