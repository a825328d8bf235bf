//! Read-only workbook snapshot boundary
//!
//! A [`WorkbookSnapshot`] is one immutable, fully-loaded view of a
//! spreadsheet's cell contents, carrying both the formula-text and the
//! evaluated-value representation of every non-empty cell. All analyzers
//! consume this boundary; nothing in the analysis core touches the file
//! format directly.

pub mod cell;
pub mod loader;
pub mod workbook;

pub use cell::{CellContent, CellRef, CellScalar, CellSnapshot, column_letter};
pub use loader::load_snapshot;
pub use workbook::{SheetSnapshot, SheetSnapshotBuilder, WorkbookSnapshot, WorkbookSnapshotBuilder};
