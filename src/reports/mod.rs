//! Report generation modules for different output formats
//!
//! This module contains report generators for the supported formats:
//! - human: Human-readable console output
//! - json: JSON format for programmatic use
//!
//! Each generator renders one view of the analysis report: the full
//! profile, the condensed summary, the formula listing, or the sheet
//! dependency graph.

pub mod human;
pub mod json;

use crate::core::AnalysisReport;
use crate::error::SheetScoutError;

/// Which slice of the analysis report a generator renders
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ReportView {
    Full,
    Summary,
    Formulas,
    Dependencies,
}

/// Common trait for all report generators
pub trait ReportGenerator {
    /// Generate a report from an analysis run
    fn generate_report(&self, report: &AnalysisReport) -> Result<String, SheetScoutError>;
}

// Re-export for convenience
pub use human::HumanReportGenerator;
pub use json::JsonReportGenerator;
