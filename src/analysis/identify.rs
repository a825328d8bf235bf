//! Calculator domain and type identification from sheet names

use super::tables::DOMAIN_RULES;
use crate::core::CalculatorProfile;
use crate::snapshot::WorkbookSnapshot;

/// Guess the calculator's engineering domain from its sheet names alone.
/// The lowercased names are joined into one blob and tested against the
/// domain keyword groups in priority order; only the first matching group
/// applies. Fields left unset by the matching rule stay "Unknown".
pub fn identify_calculator(snapshot: &WorkbookSnapshot) -> CalculatorProfile {
    let sheet_names: Vec<String> = snapshot
        .sheet_names()
        .into_iter()
        .map(str::to_string)
        .collect();
    let blob = sheet_names.join(" ").to_lowercase();

    let mut profile = CalculatorProfile {
        file_name: snapshot.file_name().to_string(),
        total_sheets: sheet_names.len(),
        sheet_names,
        calculator_type: "Unknown".to_string(),
        engineering_domain: "Unknown".to_string(),
        purpose: "Unknown".to_string(),
    };

    if let Some(rule) = DOMAIN_RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|k| blob.contains(k)))
    {
        profile.engineering_domain = rule.domain.to_string();
        if let Some(calculator_type) = rule.calculator_type {
            profile.calculator_type = calculator_type.to_string();
        }
        if let Some(purpose) = rule.purpose {
            profile.purpose = purpose.to_string();
        }
    }

    profile
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::snapshot::SheetSnapshot;

    fn workbook_named(file_name: &str, sheet_names: &[&str]) -> WorkbookSnapshot {
        let mut builder = WorkbookSnapshot::builder().with_file_name(file_name);
        for name in sheet_names {
            builder = builder.with_sheet(SheetSnapshot::builder(*name).build());
        }
        builder.build()
    }

    #[test]
    fn test_blast_rule_sets_type_and_purpose() {
        let profile =
            identify_calculator(&workbook_named("blast.xlsx", &["Blast Setup", "UFC Calcs"]));
        assert_eq!(profile.engineering_domain, "Blast/Explosive Engineering");
        assert_eq!(profile.calculator_type, "Blast Load Calculator");
        assert_eq!(
            profile.purpose,
            "Calculate blast pressures and structural loads"
        );
    }

    #[test]
    fn test_structural_rule_leaves_type_unknown() {
        let profile = identify_calculator(&workbook_named("beam.xlsx", &["Beam Design"]));
        assert_eq!(profile.engineering_domain, "Structural Engineering");
        assert_eq!(profile.calculator_type, "Unknown");
        assert_eq!(profile.purpose, "Unknown");
    }

    #[test]
    fn test_first_matching_group_wins() {
        // "pressure" (blast group) outranks "pipe" (fluid group).
        let profile =
            identify_calculator(&workbook_named("pipe.xlsx", &["Pipe Pressure Ratings"]));
        assert_eq!(profile.engineering_domain, "Blast/Explosive Engineering");
    }

    #[test]
    fn test_no_match_is_unknown() {
        let profile = identify_calculator(&workbook_named("misc.xlsx", &["Sheet1", "Sheet2"]));
        assert_eq!(profile.engineering_domain, "Unknown");
        assert_eq!(profile.calculator_type, "Unknown");
        assert_eq!(profile.purpose, "Unknown");
        assert_eq!(profile.total_sheets, 2);
        assert_eq!(profile.file_name, "misc.xlsx");
    }

    #[test]
    fn test_keyword_match_is_case_insensitive() {
        let profile = identify_calculator(&workbook_named("t.xlsx", &["THERMAL MODEL"]));
        assert_eq!(profile.engineering_domain, "Thermal Engineering");
    }
}
