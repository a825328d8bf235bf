//! Unit detection and measurement-system inference

use std::collections::{BTreeMap, BTreeSet};

use rayon::prelude::*;

use super::tables::{IMPERIAL_UNITS, METRIC_UNITS, unit_patterns};
use crate::core::{UnitCatalog, UnitCategory, UnitSystem, UnitSystemBreakdown};
use crate::snapshot::{SheetSnapshot, WorkbookSnapshot};

/// Scan every literal text cell against the category token patterns and
/// collect the distinct tokens observed, sorted lexicographically. All ten
/// categories are always present in the catalog, possibly empty.
pub fn catalog_units(snapshot: &WorkbookSnapshot) -> UnitCatalog {
    let per_sheet: Vec<BTreeMap<UnitCategory, BTreeSet<String>>> = snapshot
        .sheets()
        .par_iter()
        .map(scan_sheet)
        .collect();

    let mut by_category: BTreeMap<UnitCategory, BTreeSet<String>> = UnitCategory::ALL
        .iter()
        .map(|&category| (category, BTreeSet::new()))
        .collect();

    for sheet_catalog in per_sheet {
        for (category, tokens) in sheet_catalog {
            by_category
                .get_mut(&category)
                .expect("catalog is seeded with every category")
                .extend(tokens);
        }
    }

    UnitCatalog { by_category }
}

fn scan_sheet(sheet: &SheetSnapshot) -> BTreeMap<UnitCategory, BTreeSet<String>> {
    let mut found: BTreeMap<UnitCategory, BTreeSet<String>> = BTreeMap::new();
    for cell in sheet.cells() {
        let Some(text) = cell.text() else { continue };
        for (category, pattern) in unit_patterns() {
            for token in pattern.find_iter(text) {
                found
                    .entry(*category)
                    .or_default()
                    .insert(token.as_str().to_string());
            }
        }
    }
    found
}

/// Classify the flattened distinct tokens against the metric and imperial
/// reference lists (case-insensitively) and name the dominant system;
/// equal counts, including zero/zero, are Mixed.
pub fn classify_unit_system(catalog: &UnitCatalog) -> UnitSystemBreakdown {
    let all = catalog.all_units();

    let count_against = |reference: &[&str]| {
        all.iter()
            .filter(|token| reference.iter().any(|r| r.eq_ignore_ascii_case(token)))
            .count()
    };

    let metric_count = count_against(METRIC_UNITS);
    let imperial_count = count_against(IMPERIAL_UNITS);

    let dominant = match imperial_count.cmp(&metric_count) {
        std::cmp::Ordering::Greater => UnitSystem::Imperial,
        std::cmp::Ordering::Less => UnitSystem::Metric,
        std::cmp::Ordering::Equal => UnitSystem::Mixed,
    };

    UnitSystemBreakdown {
        metric_count,
        imperial_count,
        dominant,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::snapshot::SheetSnapshot;

    fn workbook_with_texts(texts: &[&str]) -> WorkbookSnapshot {
        let mut sheet = SheetSnapshot::builder("S");
        for (i, text) in texts.iter().enumerate() {
            sheet = sheet.with_text(i as u32 + 1, 1, *text);
        }
        WorkbookSnapshot::builder().with_sheet(sheet.build()).build()
    }

    #[test]
    fn test_catalog_has_all_categories() {
        let catalog = catalog_units(&workbook_with_texts(&[]));
        assert_eq!(catalog.by_category.len(), 10);
        assert!(catalog.by_category.values().all(BTreeSet::is_empty));
    }

    #[test]
    fn test_tokens_deduplicated_and_sorted() {
        let catalog = catalog_units(&workbook_with_texts(&[
            "pressure in psi",
            "more psi and kPa here",
            "also MPa",
        ]));

        let pressure: Vec<&String> = catalog.by_category[&UnitCategory::Pressure]
            .iter()
            .collect();
        assert_eq!(pressure, vec!["MPa", "kPa", "psi"]);
    }

    #[test]
    fn test_case_of_observed_token_is_preserved() {
        let catalog = catalog_units(&workbook_with_texts(&["limit PSI", "limit psi"]));
        let pressure = &catalog.by_category[&UnitCategory::Pressure];
        assert!(pressure.contains("PSI"));
        assert!(pressure.contains("psi"));
    }

    #[test]
    fn test_imperial_dominant() {
        let catalog = catalog_units(&workbook_with_texts(&["load in psi", "span ft", "depth in"]));
        let breakdown = classify_unit_system(&catalog);
        assert!(breakdown.imperial_count > breakdown.metric_count);
        assert_eq!(breakdown.dominant, UnitSystem::Imperial);
    }

    #[test]
    fn test_metric_dominant() {
        let catalog = catalog_units(&workbook_with_texts(&["span mm", "load kPa", "mass kg"]));
        let breakdown = classify_unit_system(&catalog);
        assert_eq!(breakdown.dominant, UnitSystem::Metric);
    }

    #[test]
    fn test_no_units_is_mixed() {
        let catalog = catalog_units(&workbook_with_texts(&["no words that are tokens?"]));
        let breakdown = classify_unit_system(&catalog);
        assert_eq!(breakdown.metric_count, 0);
        assert_eq!(breakdown.imperial_count, 0);
        assert_eq!(breakdown.dominant, UnitSystem::Mixed);
    }

    #[test]
    fn test_uppercase_tokens_count_toward_system() {
        let catalog = catalog_units(&workbook_with_texts(&["limit PSI"]));
        let breakdown = classify_unit_system(&catalog);
        assert_eq!(breakdown.imperial_count, 1);
    }
}
