//! Workbook and sheet snapshot containers

use std::collections::BTreeMap;

use super::cell::{CellContent, CellScalar, CellSnapshot};

/// All non-empty cells of one sheet, in row-major order.
#[derive(Debug, Clone)]
pub struct SheetSnapshot {
    name: String,
    cells: BTreeMap<(u32, u32), CellSnapshot>,
    max_row: u32,
    max_column: u32,
}

impl SheetSnapshot {
    pub fn builder(name: impl Into<String>) -> SheetSnapshotBuilder {
        SheetSnapshotBuilder {
            name: name.into(),
            cells: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn max_row(&self) -> u32 {
        self.max_row
    }

    pub fn max_column(&self) -> u32 {
        self.max_column
    }

    /// Non-empty cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &CellSnapshot> {
        self.cells.values()
    }

    pub fn cell(&self, row: u32, column: u32) -> Option<&CellSnapshot> {
        self.cells.get(&(row, column))
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn formula_count(&self) -> usize {
        self.cells.values().filter(|c| c.is_formula()).count()
    }
}

pub struct SheetSnapshotBuilder {
    name: String,
    cells: BTreeMap<(u32, u32), CellSnapshot>,
}

impl SheetSnapshotBuilder {
    pub fn contains(&self, row: u32, column: u32) -> bool {
        self.cells.contains_key(&(row, column))
    }

    pub fn with_cell(
        self,
        row: u32,
        column: u32,
        content: CellContent,
        value: Option<CellScalar>,
    ) -> Self {
        self.insert(row, column, content, value)
    }

    fn insert(mut self, row: u32, column: u32, content: CellContent, value: Option<CellScalar>) -> Self {
        self.cells.insert(
            (row, column),
            CellSnapshot {
                row,
                column,
                content,
                value,
            },
        );
        self
    }

    pub fn with_text(self, row: u32, column: u32, text: impl Into<String>) -> Self {
        let text = text.into();
        let value = Some(CellScalar::Text(text.clone()));
        self.insert(row, column, CellContent::Text(text), value)
    }

    pub fn with_number(self, row: u32, column: u32, number: f64) -> Self {
        self.insert(
            row,
            column,
            CellContent::Number(number),
            Some(CellScalar::Number(number)),
        )
    }

    pub fn with_bool(self, row: u32, column: u32, value: bool) -> Self {
        self.insert(
            row,
            column,
            CellContent::Bool(value),
            Some(CellScalar::Bool(value)),
        )
    }

    /// A formula cell with no cached result.
    pub fn with_formula(self, row: u32, column: u32, formula: impl Into<String>) -> Self {
        self.insert(row, column, CellContent::Formula(formula.into()), None)
    }

    /// A formula cell whose last-computed value is known.
    pub fn with_formula_value(
        self,
        row: u32,
        column: u32,
        formula: impl Into<String>,
        value: impl Into<CellScalar>,
    ) -> Self {
        self.insert(
            row,
            column,
            CellContent::Formula(formula.into()),
            Some(value.into()),
        )
    }

    pub fn build(self) -> SheetSnapshot {
        let max_row = self.cells.keys().map(|&(r, _)| r).max().unwrap_or(0);
        let max_column = self.cells.keys().map(|&(_, c)| c).max().unwrap_or(0);
        SheetSnapshot {
            name: self.name,
            cells: self.cells,
            max_row,
            max_column,
        }
    }
}

/// One immutable, fully-loaded view of a workbook. Sheet order is the
/// workbook's own sheet order.
#[derive(Debug, Clone)]
pub struct WorkbookSnapshot {
    file_name: String,
    sheets: Vec<SheetSnapshot>,
}

impl WorkbookSnapshot {
    pub fn builder() -> WorkbookSnapshotBuilder {
        WorkbookSnapshotBuilder::default()
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn sheets(&self) -> &[SheetSnapshot] {
        &self.sheets
    }

    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(SheetSnapshot::name).collect()
    }

    pub fn sheet(&self, name: &str) -> Option<&SheetSnapshot> {
        self.sheets.iter().find(|s| s.name() == name)
    }
}

#[derive(Default)]
pub struct WorkbookSnapshotBuilder {
    file_name: Option<String>,
    sheets: Vec<SheetSnapshot>,
}

impl WorkbookSnapshotBuilder {
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    pub fn with_sheet(mut self, sheet: SheetSnapshot) -> Self {
        self.sheets.push(sheet);
        self
    }

    pub fn build(self) -> WorkbookSnapshot {
        WorkbookSnapshot {
            file_name: self.file_name.unwrap_or_else(|| "workbook".to_string()),
            sheets: self.sheets,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sheet_builder_extent_and_counts() {
        let sheet = SheetSnapshot::builder("Calcs")
            .with_text(1, 1, "Input pressure")
            .with_number(1, 2, 45.2)
            .with_formula_value(3, 4, "=B1*2", CellScalar::Number(90.4))
            .build();

        assert_eq!(sheet.name(), "Calcs");
        assert_eq!(sheet.max_row(), 3);
        assert_eq!(sheet.max_column(), 4);
        assert_eq!(sheet.cell_count(), 3);
        assert_eq!(sheet.formula_count(), 1);
    }

    #[test]
    fn test_cells_iterate_row_major() {
        let sheet = SheetSnapshot::builder("S")
            .with_number(2, 1, 3.0)
            .with_number(1, 2, 2.0)
            .with_number(1, 1, 1.0)
            .build();

        let order: Vec<(u32, u32)> = sheet.cells().map(|c| (c.row, c.column)).collect();
        assert_eq!(order, vec![(1, 1), (1, 2), (2, 1)]);
    }

    #[test]
    fn test_workbook_lookup_preserves_sheet_order() {
        let wb = WorkbookSnapshot::builder()
            .with_file_name("demo.xlsx")
            .with_sheet(SheetSnapshot::builder("Input Data").build())
            .with_sheet(SheetSnapshot::builder("Results").build())
            .build();

        assert_eq!(wb.file_name(), "demo.xlsx");
        assert_eq!(wb.sheet_names(), vec!["Input Data", "Results"]);
        assert!(wb.sheet("Results").is_some());
        assert!(wb.sheet("Missing").is_none());
    }
}
