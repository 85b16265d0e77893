//! Terminal UI layer for jobmon.
//!
//! Provides themes, the plain-text report renderer, the summary panels and
//! filterable job table, and the dashboard event loop built on top of
//! [`ratatui`].

pub mod app;
pub mod dashboard;
pub mod report;
pub mod table_view;
pub mod themes;

pub use jobmon_core as core;
