//! Documentation buckets and validation-rule harvesting

use rayon::prelude::*;

use super::tables::{DOCUMENTATION_KEYWORDS, VALIDATION_KEYWORDS, contains_keyword};
use crate::constants::documentation::MIN_DOC_LENGTH;
use crate::core::{DocumentationBundle, ValidationRule};
use crate::snapshot::{CellRef, SheetSnapshot, WorkbookSnapshot};

/// Classify long free-text cells into the four documentation buckets.
/// A cell qualifies when its text exceeds the minimum length and mentions a
/// documentation keyword; it lands in exactly one bucket, chosen by keyword
/// priority. Bucket contents keep scan order (sheet order, row-major).
pub fn extract_documentation(snapshot: &WorkbookSnapshot) -> DocumentationBundle {
    let per_sheet: Vec<DocumentationBundle> = snapshot
        .sheets()
        .par_iter()
        .map(scan_sheet_documentation)
        .collect();

    let mut bundle = DocumentationBundle::default();
    for part in per_sheet {
        bundle.descriptions.extend(part.descriptions);
        bundle.notes.extend(part.notes);
        bundle.references.extend(part.references);
        bundle.standards.extend(part.standards);
    }
    bundle
}

fn scan_sheet_documentation(sheet: &SheetSnapshot) -> DocumentationBundle {
    let mut bundle = DocumentationBundle::default();
    for cell in sheet.cells() {
        let Some(text) = cell.text() else { continue };
        if text.chars().count() <= MIN_DOC_LENGTH {
            continue;
        }
        let lower = text.to_lowercase();
        if !contains_keyword(&lower, DOCUMENTATION_KEYWORDS) {
            continue;
        }
        let bucket = if lower.contains("ref") {
            &mut bundle.references
        } else if lower.contains("note") {
            &mut bundle.notes
        } else if lower.contains("standard") || lower.contains("code") {
            &mut bundle.standards
        } else {
            &mut bundle.descriptions
        };
        bucket.push(text.to_string());
    }
    bundle
}

/// Collect every text cell mentioning a validation or constraint keyword,
/// with its location and raw text, in scan order.
pub fn find_validation_rules(snapshot: &WorkbookSnapshot) -> Vec<ValidationRule> {
    let per_sheet: Vec<Vec<ValidationRule>> = snapshot
        .sheets()
        .par_iter()
        .map(scan_sheet_rules)
        .collect();

    per_sheet.into_iter().flatten().collect()
}

fn scan_sheet_rules(sheet: &SheetSnapshot) -> Vec<ValidationRule> {
    sheet
        .cells()
        .filter_map(|cell| {
            let text = cell.text()?;
            let lower = text.to_lowercase();
            if !contains_keyword(&lower, VALIDATION_KEYWORDS) {
                return None;
            }
            Some(ValidationRule {
                location: CellRef::new(sheet.name(), cell.row, cell.column),
                rule_text: text.to_string(),
            })
        })
        .collect()
}
