//! Data layer for jobmon.
//!
//! Responsible for reading and decoding CSV job event logs, pairing
//! START/END events into jobs, deriving summary statistics and running
//! the top-level analysis pipeline.

pub mod analysis;
pub mod reader;
pub mod statistics;
pub mod tracker;

pub use jobmon_core as core;
