//! Shared Dioxus components, API client and D3.js bridge for the MPA dashboard.
//!
//! This crate provides:
//! - `api`: fetch-based client for the analysis and export endpoints
//! - `js_bridge`: Rust wrappers for D3.js chart functions via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `export`: blob download plumbing for generated reports
//! - `components`: Reusable RSX components (selector, pickers, tables, etc.)

pub mod api;
pub mod components;
pub mod export;
pub mod js_bridge;
pub mod state;
