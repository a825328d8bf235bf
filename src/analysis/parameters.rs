//! Parameter extraction
//!
//! Finds candidate input and output parameters by scanning literal text
//! cells for role keywords, then resolving each label's value from a fixed
//! neighborhood around it. The input and output passes are independent: a
//! label whose text matches both keyword sets is reported once per role.

use rayon::prelude::*;

use super::tables::{INPUT_KEYWORDS, NEIGHBOR_OFFSETS, OUTPUT_KEYWORDS, contains_keyword, extract_unit};
use crate::core::{Parameter, ParameterRole};
use crate::snapshot::{CellRef, CellScalar, CellSnapshot, SheetSnapshot, WorkbookSnapshot};

/// Value resolved from a label's neighborhood: either a formula cell (with
/// whatever evaluated value the workbook cached for it) or a direct number.
struct ResolvedValue {
    value: Option<CellScalar>,
    formula: Option<String>,
}

/// Extract all parameters of one role across the workbook, in sheet order
/// and row-major order within each sheet.
pub fn extract_parameters(snapshot: &WorkbookSnapshot, role: ParameterRole) -> Vec<Parameter> {
    let keywords = match role {
        ParameterRole::Input => INPUT_KEYWORDS,
        ParameterRole::Output => OUTPUT_KEYWORDS,
    };

    snapshot
        .sheets()
        .par_iter()
        .map(|sheet| scan_sheet(sheet, role, keywords))
        .collect::<Vec<_>>()
        .into_iter()
        .flatten()
        .collect()
}

fn scan_sheet(sheet: &SheetSnapshot, role: ParameterRole, keywords: &[&str]) -> Vec<Parameter> {
    sheet
        .cells()
        .filter_map(|cell| {
            let label = cell.text()?;
            if !contains_keyword(&label.to_lowercase(), keywords) {
                return None;
            }
            let resolved = resolve_neighbor(sheet, cell)?;
            Some(Parameter {
                name: label.to_string(),
                location: CellRef::new(sheet.name(), cell.row, cell.column),
                value: resolved.value,
                unit: extract_unit(label),
                formula: resolved.formula,
                role,
            })
        })
        .collect()
}

/// Probe the label's neighbors in the fixed offset order and return the
/// first that resolves. Offsets falling outside valid coordinates are
/// skipped; a label with no resolvable neighbor yields `None` and emits no
/// parameter.
fn resolve_neighbor(sheet: &SheetSnapshot, label: &CellSnapshot) -> Option<ResolvedValue> {
    for &(dr, dc) in NEIGHBOR_OFFSETS {
        let row = label.row as i64 + dr;
        let column = label.column as i64 + dc;
        if row < 1 || column < 1 {
            continue;
        }
        let Some(neighbor) = sheet.cell(row as u32, column as u32) else {
            continue;
        };
        if let Some(formula) = neighbor.formula() {
            return Some(ResolvedValue {
                value: neighbor.value.clone(),
                formula: Some(formula.to_string()),
            });
        }
        if let Some(number) = neighbor.numeric_value() {
            return Some(ResolvedValue {
                value: Some(CellScalar::Number(number)),
                formula: None,
            });
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::snapshot::SheetSnapshot;

    fn workbook_with(sheet: SheetSnapshot) -> WorkbookSnapshot {
        WorkbookSnapshot::builder().with_sheet(sheet).build()
    }

    #[test]
    fn test_label_with_right_neighbor_number() {
        let snapshot = workbook_with(
            SheetSnapshot::builder("Inputs")
                .with_text(2, 1, "Input: Applied Pressure (psi)")
                .with_number(2, 2, 45.2)
                .build(),
        );

        let params = extract_parameters(&snapshot, ParameterRole::Input);
        assert_eq!(params.len(), 1);
        let param = &params[0];
        assert_eq!(param.name, "Input: Applied Pressure (psi)");
        assert_eq!(param.location.address(), "A2");
        assert_eq!(param.value, Some(CellScalar::Number(45.2)));
        assert_eq!(param.unit.as_deref(), Some("psi"));
        assert_eq!(param.formula, None);
        assert_eq!(param.role, ParameterRole::Input);
    }

    #[test]
    fn test_right_neighbor_wins_over_left_formula() {
        // Probe order is right1, right2, down, left, up; the direct number
        // one cell right must win before the formula one cell left is seen.
        let snapshot = workbook_with(
            SheetSnapshot::builder("Inputs")
                .with_formula_value(2, 1, "=Z1*2", CellScalar::Number(99.0))
                .with_text(2, 2, "input span")
                .with_number(2, 3, 12.5)
                .build(),
        );

        let params = extract_parameters(&snapshot, ParameterRole::Input);
        assert_eq!(params.len(), 1);
        assert_eq!(params[0].value, Some(CellScalar::Number(12.5)));
        assert_eq!(params[0].formula, None);
    }

    #[test]
    fn test_formula_neighbor_records_formula_and_cached_value() {
        let snapshot = workbook_with(
            SheetSnapshot::builder("Outputs")
                .with_text(3, 1, "Calculated moment")
                .with_formula_value(3, 2, "=B2*L/8", CellScalar::Number(210.0))
                .build(),
        );

        let params = extract_parameters(&snapshot, ParameterRole::Output);
        assert_eq!(params.len(), 1);
        assert_eq!(params[0].formula.as_deref(), Some("=B2*L/8"));
        assert_eq!(params[0].value, Some(CellScalar::Number(210.0)));
        assert_eq!(params[0].role, ParameterRole::Output);
    }

    #[test]
    fn test_formula_neighbor_without_cached_value_still_emits() {
        let snapshot = workbook_with(
            SheetSnapshot::builder("Outputs")
                .with_text(1, 1, "Result shear")
                .with_formula(1, 2, "=SUM(A1:A9)")
                .build(),
        );

        let params = extract_parameters(&snapshot, ParameterRole::Output);
        assert_eq!(params.len(), 1);
        assert_eq!(params[0].formula.as_deref(), Some("=SUM(A1:A9)"));
        assert_eq!(params[0].value, None);
    }

    #[test]
    fn test_label_without_resolvable_neighbor_is_discarded() {
        let snapshot = workbook_with(
            SheetSnapshot::builder("Inputs")
                .with_text(1, 1, "input factor")
                .with_text(1, 2, "see note")
                .build(),
        );

        assert!(extract_parameters(&snapshot, ParameterRole::Input).is_empty());
    }

    #[test]
    fn test_edge_of_sheet_offsets_are_skipped() {
        // Label at A1: the left and up probes fall outside the sheet and
        // must be skipped without effect.
        let snapshot = workbook_with(
            SheetSnapshot::builder("Inputs")
                .with_text(1, 1, "given load")
                .with_number(2, 1, 7.0)
                .build(),
        );

        let params = extract_parameters(&snapshot, ParameterRole::Input);
        assert_eq!(params.len(), 1);
        assert_eq!(params[0].value, Some(CellScalar::Number(7.0)));
    }

    #[test]
    fn test_label_matching_both_roles_emits_twice() {
        let snapshot = workbook_with(
            SheetSnapshot::builder("Calcs")
                .with_text(1, 1, "input data for result")
                .with_number(1, 2, 3.0)
                .build(),
        );

        let inputs = extract_parameters(&snapshot, ParameterRole::Input);
        let outputs = extract_parameters(&snapshot, ParameterRole::Output);
        assert_eq!(inputs.len(), 1);
        assert_eq!(outputs.len(), 1);
        assert_eq!(inputs[0].location, outputs[0].location);
    }

    #[test]
    fn test_formula_text_is_not_a_label() {
        // A formula whose text mentions a keyword is not a text label.
        let snapshot = workbook_with(
            SheetSnapshot::builder("Calcs")
                .with_formula_value(1, 1, "=INPUT_TABLE!A1", CellScalar::Number(1.0))
                .with_number(1, 2, 5.0)
                .build(),
        );

        assert!(extract_parameters(&snapshot, ParameterRole::Input).is_empty());
    }

    #[test]
    fn test_parameters_ordered_by_sheet_then_position() {
        let snapshot = WorkbookSnapshot::builder()
            .with_sheet(
                SheetSnapshot::builder("B Sheet")
                    .with_text(1, 1, "input a")
                    .with_number(1, 2, 1.0)
                    .build(),
            )
            .with_sheet(
                SheetSnapshot::builder("A Sheet")
                    .with_text(5, 1, "input b")
                    .with_number(5, 2, 2.0)
                    .with_text(2, 1, "input c")
                    .with_number(2, 2, 3.0)
                    .build(),
            )
            .build();

        let params = extract_parameters(&snapshot, ParameterRole::Input);
        let order: Vec<(&str, u32)> = params
            .iter()
            .map(|p| (p.location.sheet.as_str(), p.location.row))
            .collect();
        // Workbook sheet order first, then row-major within a sheet.
        assert_eq!(order, vec![("B Sheet", 1), ("A Sheet", 2), ("A Sheet", 5)]);
    }
}
