//! tabview
//!
//! TUI for browsing paged remote tables (users and products) with
//! pagination, per-field filters, category tabs and client-side search.
//!
//! Laid out as a pure core (`model`, `state`) driven by an impure shell
//! (`source` for HTTP and worker threads, `view` for the terminal).

pub mod config;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod view;
