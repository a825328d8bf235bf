//! Formula enumeration and complexity scoring

use std::collections::{BTreeMap, BTreeSet};

use rayon::prelude::*;

use super::tables::{COMPLEXITY_WEIGHTS, cell_reference_pattern, function_call_pattern};
use crate::core::{ComplexityTier, FormulaRecord};
use crate::snapshot::{CellRef, SheetSnapshot, WorkbookSnapshot};

/// Build a [`FormulaRecord`] for every formula cell, grouped by sheet.
/// Sheets without formulas still get an (empty) entry.
pub fn analyze_formulas(snapshot: &WorkbookSnapshot) -> BTreeMap<String, Vec<FormulaRecord>> {
    snapshot
        .sheets()
        .par_iter()
        .map(|sheet| (sheet.name().to_string(), scan_sheet(sheet)))
        .collect::<Vec<_>>()
        .into_iter()
        .collect()
}

fn scan_sheet(sheet: &SheetSnapshot) -> Vec<FormulaRecord> {
    sheet
        .cells()
        .filter_map(|cell| {
            let formula = cell.formula()?;
            Some(FormulaRecord {
                location: CellRef::new(sheet.name(), cell.row, cell.column),
                formula: formula.to_string(),
                complexity: complexity_tier(formula),
                functions: extract_functions(formula),
                references: extract_references(formula),
            })
        })
        .collect()
}

/// Weighted complexity score: case-insensitive substring occurrences of
/// each weighted function name times its weight, summed. `VLOOKUP` thereby
/// also counts one `LOOKUP` occurrence.
pub fn complexity_score(formula: &str) -> u32 {
    let upper = formula.to_uppercase();
    COMPLEXITY_WEIGHTS
        .iter()
        .map(|(name, weight)| upper.matches(name).count() as u32 * weight)
        .sum()
}

/// Map a score to its tier. A formula using none of the weighted functions
/// is always simple.
pub fn complexity_tier(formula: &str) -> ComplexityTier {
    match complexity_score(formula) {
        score if score > 10 => ComplexityTier::VeryComplex,
        score if score > 5 => ComplexityTier::Complex,
        score if score > 2 => ComplexityTier::Moderate,
        _ => ComplexityTier::Simple,
    }
}

/// Every identifier immediately followed by `(`, uppercased and
/// deduplicated.
pub fn extract_functions(formula: &str) -> BTreeSet<String> {
    let upper = formula.to_uppercase();
    function_call_pattern()
        .captures_iter(&upper)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Every cell coordinate token (with optional quoted sheet prefix and
/// absolute markers), uppercased and deduplicated.
pub fn extract_references(formula: &str) -> BTreeSet<String> {
    let upper = formula.to_uppercase();
    cell_reference_pattern()
        .find_iter(&upper)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::snapshot::{CellScalar, SheetSnapshot};

    #[test]
    fn test_plain_arithmetic_is_simple() {
        assert_eq!(complexity_score("=A1+B2*3"), 0);
        assert_eq!(complexity_tier("=A1+B2*3"), ComplexityTier::Simple);
    }

    #[test]
    fn test_if_with_vlookup_is_complex() {
        // IF(2) + VLOOKUP(2) + the LOOKUP(3) substring inside VLOOKUP.
        let formula = "=IF(A1>10,VLOOKUP(A1,B:C,2),0)";
        assert_eq!(complexity_score(formula), 7);
        assert_eq!(complexity_tier(formula), ComplexityTier::Complex);
    }

    #[test]
    fn test_single_if_is_moderate() {
        // IF alone scores 2; two IFs score 4.
        assert_eq!(complexity_tier("=IF(A1,1,0)"), ComplexityTier::Simple);
        assert_eq!(
            complexity_tier("=IF(A1,IF(B1,1,2),0)"),
            ComplexityTier::Moderate
        );
    }

    #[test]
    fn test_score_is_monotonic_in_function_count() {
        let one = complexity_score("=INDEX(A:A,1)");
        let two = complexity_score("=INDEX(A:A,1)+INDEX(B:B,2)");
        let three = complexity_score("=INDEX(A:A,1)+INDEX(B:B,2)+INDEX(C:C,3)");
        assert!(one < two && two < three);
    }

    #[test]
    fn test_heavily_nested_lookups_are_very_complex() {
        let formula = "=SUMPRODUCT(A:A)+LOOKUP(1,B:B)+INDEX(C:C,2)+IF(D1,1,0)";
        assert!(complexity_score(formula) > 10);
        assert_eq!(complexity_tier(formula), ComplexityTier::VeryComplex);
    }

    #[test]
    fn test_case_insensitive_counting() {
        assert_eq!(
            complexity_score("=if(a1,vlookup(a1,b:c,2),0)"),
            complexity_score("=IF(A1,VLOOKUP(A1,B:C,2),0)")
        );
    }

    #[test]
    fn test_extract_functions_dedup_and_uppercase() {
        let functions = extract_functions("=sum(A1:A3)+SUM(B1:B3)+if(C1,1,0)");
        let expected: BTreeSet<String> =
            ["IF", "SUM"].iter().map(|s| s.to_string()).collect();
        assert_eq!(functions, expected);
    }

    #[test]
    fn test_extract_references() {
        let refs = extract_references("=IF(A1>10,'Input Data'!B2+$C$3,A1)");
        let expected: BTreeSet<String> = ["A1", "'INPUT DATA'!B2", "$C$3"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(refs, expected);
    }

    #[test]
    fn test_analyze_formulas_groups_by_sheet() {
        let snapshot = WorkbookSnapshot::builder()
            .with_sheet(
                SheetSnapshot::builder("Calcs")
                    .with_formula_value(1, 1, "=B1*2", CellScalar::Number(4.0))
                    .with_formula(2, 1, "=IF(A1>10,VLOOKUP(A1,B:C,2),0)")
                    .with_number(3, 1, 2.0)
                    .build(),
            )
            .with_sheet(SheetSnapshot::builder("Notes").with_text(1, 1, "hello").build())
            .build();

        let formulas = analyze_formulas(&snapshot);
        assert_eq!(formulas.len(), 2);
        assert_eq!(formulas["Calcs"].len(), 2);
        assert!(formulas["Notes"].is_empty());

        let nested = &formulas["Calcs"][1];
        assert_eq!(nested.location.address(), "A2");
        assert_eq!(nested.complexity, ComplexityTier::Complex);
        assert!(nested.functions.contains("IF"));
        assert!(nested.functions.contains("VLOOKUP"));
        assert!(nested.references.contains("A1"));
    }
}
