//! Core data types and structures
//!
//! This module contains the report value types produced by the analysis
//! core, separated from the scanning logic that derives them.

pub mod types;

pub use types::*;
