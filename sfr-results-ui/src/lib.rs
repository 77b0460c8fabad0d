//! Shared Dioxus components and Plotly bridge for the results dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for Plotly calls via `js_sys::eval()`
//! - `state`: `AppState`, the controller signal plus the actions that drive it
//! - `components`: RSX components that draw a `PanelView`

pub mod js_bridge;
pub mod state;
pub mod components;
