//! # Configuration Module
//!
//! Configuration structures for all sheet-scout commands. Each command has
//! its own config module with a builder for construction and validation.
//!
//! ## Command Configurations
//!
//! - **ProfileConfig**: Configuration for the `profile` command producing the
//!   full analysis report
//! - **SummaryConfig**: Configuration for the `summary` command, including
//!   the reduced-depth fast path
//! - **FormulasConfig**: Configuration for the `formulas` command with sheet
//!   and complexity filters
//! - **DepsConfig**: Configuration for the `deps` command mapping sheet
//!   references
//!
//! ## Example
//!
//! ```
//! use sheet_scout::cli::OutputFormat;
//! use sheet_scout::config::{FormulasConfig, ProfileConfig};
//!
//! // Each configuration struct provides a builder with with_* methods
//! let builder = ProfileConfig::builder()
//!     .with_workbook("calc.xlsx".into())
//!     .with_format(OutputFormat::Human)
//!     .with_max_parameters(Some(10));
//!
//! let formulas_builder = FormulasConfig::builder()
//!     .with_workbook("calc.xlsx".into())
//!     .with_format(OutputFormat::Json)
//!     .with_sheet(Some("Calculations".to_string()))
//!     .with_min_complexity(None);
//! ```

pub mod deps;
pub mod formulas;
pub mod profile;
pub mod summary;

pub use deps::DepsConfig;
pub use formulas::FormulasConfig;
pub use profile::ProfileConfig;
pub use summary::SummaryConfig;
