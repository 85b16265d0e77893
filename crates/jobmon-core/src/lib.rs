//! Core domain layer for jobmon.
//!
//! Holds the event and job models shared by every other crate, the error
//! types, pure formatting helpers, and CLI settings with last-used
//! persistence.

pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;
