//! # Sheet Scout - Profile Spreadsheet-Based Engineering Calculators
//!
//! Sheet Scout is a read-only analyzer for Excel workbooks that were built
//! as engineering calculators. It classifies each sheet's structural role,
//! mines labeled cells for input and output parameters, scores formula
//! complexity, detects physical units and design-standard citations, and
//! maps cross-sheet references into a dependency graph. The workbook is
//! never modified.
//!
//! ## Main Components
//!
//! - **Snapshot**: Loads a workbook into an immutable in-memory view with
//!   both formula text and cached values per cell
//! - **Analysis**: Independent heuristic passes over the snapshot (sheets,
//!   parameters, formulas, units, dependencies, standards, documentation)
//! - **Reports**: Renders an analysis report as human-readable console
//!   output or JSON
//!
//! ## Usage
//!
//! ### Analyzing a workbook from disk
//!
//! ```no_run
//! use std::path::Path;
//!
//! use sheet_scout::analysis::analyze_file;
//! use sheet_scout::reports::{HumanReportGenerator, ReportGenerator, ReportView};
//!
//! # fn main() -> Result<(), sheet_scout::error::SheetScoutError> {
//! let report = analyze_file(Path::new("blast_calculator.xlsx"))?;
//!
//! println!(
//!     "{} ({}), {} inputs, {} outputs, {} formulas",
//!     report.calculator.calculator_type,
//!     report.calculator.engineering_domain,
//!     report.summary.total_inputs,
//!     report.summary.total_outputs,
//!     report.summary.total_formulas,
//! );
//!
//! if report.dependencies.has_circular_references() {
//!     eprintln!("warning: sheets reference each other circularly");
//! }
//!
//! let generator = HumanReportGenerator::new(ReportView::Full, Some(10));
//! print!("{}", generator.generate_report(&report)?);
//! # Ok(())
//! # }
//! ```
//!
//! ### Analyzing an in-memory snapshot
//!
//! ```
//! use sheet_scout::analysis::analyze;
//! use sheet_scout::snapshot::{SheetSnapshot, WorkbookSnapshot};
//!
//! let workbook = WorkbookSnapshot::builder()
//!     .with_file_name("beam_check.xlsx")
//!     .with_sheet(
//!         SheetSnapshot::builder("Beam Inputs")
//!             .with_text(2, 1, "Input: Span Length (ft)")
//!             .with_number(2, 2, 24.0)
//!             .build(),
//!     )
//!     .with_sheet(
//!         SheetSnapshot::builder("Calculations")
//!             .with_formula_value(2, 2, "='Beam Inputs'!B2*12", 288.0)
//!             .build(),
//!     )
//!     .build();
//!
//! let report = analyze(&workbook);
//! assert_eq!(report.calculator.engineering_domain, "Structural Engineering");
//! assert_eq!(report.summary.total_inputs, 1);
//! ```

// Private modules
mod constants;
mod progress;
mod utils;

// Public modules
pub mod analysis;
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod core;
pub mod error;
pub mod executors;
pub mod reports;
pub mod snapshot;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();
    execute_command(cli.command)
}
