//! Engineering design-standard citation detection

use std::collections::BTreeSet;

use rayon::prelude::*;

use super::tables::standard_patterns;
use crate::snapshot::{SheetSnapshot, WorkbookSnapshot};

/// Scan every literal text cell for design-standard citations (UFC, ACI,
/// AISC, ASCE, ASTM, AWS, IBC, ASME, API, NFPA, EN with a designator) and
/// return the distinct matches sorted lexicographically.
pub fn detect_standards(snapshot: &WorkbookSnapshot) -> Vec<String> {
    let found: BTreeSet<String> = snapshot
        .sheets()
        .par_iter()
        .map(scan_sheet)
        .reduce(BTreeSet::new, |mut merged, part| {
            merged.extend(part);
            merged
        });

    found.into_iter().collect()
}

fn scan_sheet(sheet: &SheetSnapshot) -> BTreeSet<String> {
    let mut found = BTreeSet::new();
    for cell in sheet.cells() {
        let Some(text) = cell.text() else { continue };
        for pattern in standard_patterns() {
            for hit in pattern.find_iter(text) {
                found.insert(hit.as_str().to_string());
            }
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::snapshot::SheetSnapshot;

    fn workbook_with_texts(texts: &[&str]) -> WorkbookSnapshot {
        let mut sheet = SheetSnapshot::builder("Docs");
        for (i, text) in texts.iter().enumerate() {
            sheet = sheet.with_text(i as u32 + 1, 1, *text);
        }
        WorkbookSnapshot::builder().with_sheet(sheet.build()).build()
    }

    #[test]
    fn test_ufc_citation_with_hyphenated_designator() {
        let standards =
            detect_standards(&workbook_with_texts(&["Per UFC 3-340-02 Table 2-1"]));
        assert_eq!(standards, vec!["UFC 3-340-02"]);
    }

    #[test]
    fn test_bare_body_name_is_not_a_citation() {
        let standards = detect_standards(&workbook_with_texts(&[
            "reviewed by the ASTM committee",
            "an engineer from AISC",
        ]));
        assert!(standards.is_empty());
    }

    #[test]
    fn test_distinct_sorted_across_sheets() {
        let workbook = WorkbookSnapshot::builder()
            .with_sheet(
                SheetSnapshot::builder("One")
                    .with_text(1, 1, "ACI 318-19 governs")
                    .with_text(2, 1, "see also ASCE 7-22")
                    .build(),
            )
            .with_sheet(
                SheetSnapshot::builder("Two")
                    .with_text(1, 1, "ACI 318-19 again")
                    .build(),
            )
            .build();

        let standards = detect_standards(&workbook);
        assert_eq!(standards, vec!["ACI 318-19", "ASCE 7-22"]);
    }

    #[test]
    fn test_formula_text_is_not_scanned() {
        let workbook = WorkbookSnapshot::builder()
            .with_sheet(
                SheetSnapshot::builder("Calc")
                    .with_formula_value(1, 1, "=1+1", 2.0)
                    .build(),
            )
            .build();
        assert!(detect_standards(&workbook).is_empty());
    }

    #[test]
    fn test_astm_material_grade() {
        let standards = detect_standards(&workbook_with_texts(&["plate per ASTM A572-50"]));
        assert_eq!(standards, vec!["ASTM A572-50"]);
    }
}
