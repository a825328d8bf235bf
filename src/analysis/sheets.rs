//! Sheet survey and structural classification

use crate::constants::classify::{
    DATA_HEAVY_THRESHOLD, FORMULA_HEAVY_THRESHOLD, SPARSE_FORMULA_LIMIT,
};
use crate::core::{SheetInfo, SheetType};
use crate::snapshot::WorkbookSnapshot;

/// One entry of the classification chain. Rules are evaluated top to
/// bottom; the first match wins, so precedence is the order of
/// [`SHEET_RULES`] itself.
pub struct SheetRule {
    pub sheet_type: SheetType,
    pub matches: fn(name_lower: &str, formula_count: usize, data_cell_count: usize) -> bool,
}

pub const SHEET_RULES: &[SheetRule] = &[
    SheetRule {
        sheet_type: SheetType::InputConfiguration,
        matches: |name, _, _| name.contains("setup") || name.contains("input"),
    },
    SheetRule {
        sheet_type: SheetType::OutputResults,
        matches: |name, _, _| name.contains("output") || name.contains("result"),
    },
    SheetRule {
        sheet_type: SheetType::Calculation,
        matches: |name, _, _| name.contains("calc") || name.contains("computation"),
    },
    SheetRule {
        sheet_type: SheetType::Calculation,
        matches: |_, formulas, _| formulas > FORMULA_HEAVY_THRESHOLD,
    },
    SheetRule {
        sheet_type: SheetType::LookupTable,
        matches: |name, _, _| name.contains("lookup") || name.contains("table"),
    },
    SheetRule {
        sheet_type: SheetType::DataConstants,
        matches: |_, formulas, cells| cells > DATA_HEAVY_THRESHOLD && formulas < SPARSE_FORMULA_LIMIT,
    },
];

/// Classify one sheet from its name and cell counts. Pure function; no
/// matching rule yields [`SheetType::Unknown`].
pub fn classify_sheet(name: &str, formula_count: usize, data_cell_count: usize) -> SheetType {
    let name_lower = name.to_lowercase();
    SHEET_RULES
        .iter()
        .find(|rule| (rule.matches)(&name_lower, formula_count, data_cell_count))
        .map(|rule| rule.sheet_type)
        .unwrap_or(SheetType::Unknown)
}

/// Survey every sheet of the snapshot: extent, counts, and classification,
/// in workbook sheet order.
pub fn survey_sheets(snapshot: &WorkbookSnapshot) -> Vec<SheetInfo> {
    snapshot
        .sheets()
        .iter()
        .map(|sheet| {
            let formula_count = sheet.formula_count();
            let data_cell_count = sheet.cell_count();
            SheetInfo {
                name: sheet.name().to_string(),
                max_row: sheet.max_row(),
                max_column: sheet.max_column(),
                formula_count,
                data_cell_count,
                sheet_type: classify_sheet(sheet.name(), formula_count, data_cell_count),
            }
        })
        .collect()
}
