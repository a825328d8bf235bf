//! Workbook loading via calamine
//!
//! Spreadsheet files cache each formula cell's last-computed value next to
//! the formula text, so one pass over `worksheet_range` (values) and one
//! over `worksheet_formula` (formula text) yields both representations the
//! analysis core needs. Nothing is ever recalculated.

use std::path::Path;

use calamine::{Data, Range, Reader, open_workbook_auto};

use super::cell::{CellContent, CellScalar};
use super::workbook::{SheetSnapshot, WorkbookSnapshot};
use crate::error::SheetScoutError;

/// Load a fully-materialized snapshot of the workbook at `path`.
///
/// This is the only fallible step of an analysis run: a file that cannot be
/// opened or parsed aborts with [`SheetScoutError::WorkbookOpen`]; everything
/// downstream is a pure function of the returned snapshot.
pub fn load_snapshot(path: &Path) -> Result<WorkbookSnapshot, SheetScoutError> {
    let open_error = |source| SheetScoutError::WorkbookOpen {
        path: path.to_path_buf(),
        source,
    };

    let mut workbook = open_workbook_auto(path).map_err(open_error)?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let mut builder = WorkbookSnapshot::builder().with_file_name(file_name);

    for sheet_name in workbook.sheet_names() {
        let values = workbook.worksheet_range(&sheet_name).map_err(open_error)?;
        let formulas = workbook.worksheet_formula(&sheet_name).map_err(open_error)?;
        builder = builder.with_sheet(merge_views(&sheet_name, &values, &formulas));
    }

    Ok(builder.build())
}

/// Combine the evaluated-value range and the formula-text range of one sheet
/// into cell snapshots keyed by 1-based coordinates.
fn merge_views(name: &str, values: &Range<Data>, formulas: &Range<String>) -> SheetSnapshot {
    let mut sheet = SheetSnapshot::builder(name);

    let value_start = values.start().unwrap_or((0, 0));
    for (rel_row, rel_col, data) in values.used_cells() {
        let abs = (value_start.0 + rel_row as u32, value_start.1 + rel_col as u32);
        let (row, column) = (abs.0 + 1, abs.1 + 1);

        let formula = formulas
            .get_value(abs)
            .filter(|f| !f.is_empty())
            .map(|f| format!("={f}"));
        let value = scalar_from(data);

        sheet = match (formula, value) {
            (Some(f), value) => sheet.with_cell(row, column, CellContent::Formula(f), value),
            (None, Some(CellScalar::Number(n))) => sheet.with_number(row, column, n),
            (None, Some(CellScalar::Text(t))) => sheet.with_text(row, column, t),
            (None, Some(CellScalar::Bool(b))) => sheet.with_bool(row, column, b),
            // Cached error values without formula text carry no content.
            (None, None) => sheet,
        };
    }

    // Formula cells with no cached value never show up in the value range.
    let formula_start = formulas.start().unwrap_or((0, 0));
    for (rel_row, rel_col, formula) in formulas.used_cells() {
        let row = formula_start.0 + rel_row as u32 + 1;
        let column = formula_start.1 + rel_col as u32 + 1;
        if !sheet.contains(row, column) {
            sheet = sheet.with_formula(row, column, format!("={formula}"));
        }
    }

    sheet.build()
}

fn scalar_from(data: &Data) -> Option<CellScalar> {
    match data {
        Data::Float(f) => Some(CellScalar::Number(*f)),
        Data::Int(i) => Some(CellScalar::Number(*i as f64)),
        Data::String(s) => Some(CellScalar::Text(s.clone())),
        Data::Bool(b) => Some(CellScalar::Bool(*b)),
        Data::DateTime(dt) => Some(CellScalar::Number(dt.as_f64())),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Some(CellScalar::Text(s.clone())),
        Data::Error(_) | Data::Empty => None,
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_load_missing_file_is_workbook_open_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing.xlsx");

        let err = load_snapshot(&path).unwrap_err();
        match err {
            SheetScoutError::WorkbookOpen { path: p, .. } => assert_eq!(p, path),
            other => panic!("expected WorkbookOpen, got {other:?}"),
        }
    }

    #[test]
    fn test_load_corrupt_file_is_workbook_open_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("garbage.xlsx");
        fs::write(&path, b"this is not a spreadsheet").unwrap();

        let err = load_snapshot(&path).unwrap_err();
        assert!(matches!(err, SheetScoutError::WorkbookOpen { .. }));
    }

    #[test]
    fn test_scalar_conversion() {
        assert_eq!(
            scalar_from(&Data::Float(45.2)),
            Some(CellScalar::Number(45.2))
        );
        assert_eq!(scalar_from(&Data::Int(7)), Some(CellScalar::Number(7.0)));
        assert_eq!(
            scalar_from(&Data::String("psi".to_string())),
            Some(CellScalar::Text("psi".to_string()))
        );
        assert_eq!(scalar_from(&Data::Empty), None);
    }
}
