//! Heuristic configuration tables
//!
//! Every keyword set, regex family, and weight table the analyzers match
//! against lives here as named, independently testable data rather than as
//! literals scattered through the scanning code.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::UnitCategory;

/// Label keywords marking a cell as an input parameter.
pub const INPUT_KEYWORDS: &[&str] = &["input", "parameter", "given", "data", "enter", "specify"];

/// Label keywords marking a cell as an output parameter.
pub const OUTPUT_KEYWORDS: &[&str] = &["output", "result", "calculated", "answer", "solution"];

/// Keywords marking a cell as a validation rule or constraint.
pub const VALIDATION_KEYWORDS: &[&str] =
    &["check", "verify", "validate", "limit", "maximum", "minimum"];

/// Keywords qualifying a long text cell as documentation.
pub const DOCUMENTATION_KEYWORDS: &[&str] =
    &["description", "notes", "reference", "source", "standard", "code"];

/// Function-name weights for formula complexity scoring. Occurrences are
/// counted as case-insensitive substrings, so VLOOKUP also counts one
/// LOOKUP occurrence.
pub const COMPLEXITY_WEIGHTS: &[(&str, u32)] = &[
    ("IF", 2),
    ("VLOOKUP", 2),
    ("HLOOKUP", 2),
    ("LOOKUP", 3),
    ("INDEX", 3),
    ("SUMPRODUCT", 3),
];

/// Neighbor offsets probed when resolving a parameter label's value, as
/// (row delta, column delta): one right, two right, one down, one left,
/// one up. The first neighbor that resolves wins.
pub const NEIGHBOR_OFFSETS: &[(i64, i64)] = &[(0, 1), (0, 2), (1, 0), (0, -1), (-1, 0)];

/// Reference token lists for inferring the dominant measurement system.
/// Tokens are compared case-insensitively.
pub const METRIC_UNITS: &[&str] = &["mm", "cm", "m", "km", "kg", "N", "Pa", "kPa", "MPa"];
pub const IMPERIAL_UNITS: &[&str] = &["in", "ft", "yd", "lb", "lbf", "psi", "psf"];

/// Unit token patterns per category, in fixed detection priority order.
/// The whole match is the token; superscripted forms sit outside the `\b`
/// assertions because `²`/`³` are not word characters.
static UNIT_PATTERNS: LazyLock<Vec<(UnitCategory, Regex)>> = LazyLock::new(|| {
    [
        (
            UnitCategory::Length,
            r"(?i)\b(?:mm|cm|m|km|in|ft|yd|mil)\b",
        ),
        (
            UnitCategory::Area,
            r"(?i)\b(?:sqft|sqin)\b|\b(?:mm|cm|m|km|in|ft|yd)²",
        ),
        (
            UnitCategory::Volume,
            r"(?i)\b(?:L|gal|cuft|cuin)\b|\b(?:mm|cm|m|ft|in)³",
        ),
        (
            UnitCategory::Mass,
            r"(?i)\b(?:g|kg|lb|lbs|ton|tonnes|oz)\b",
        ),
        (
            UnitCategory::Force,
            r"(?i)\b(?:N|kN|MN|lbf|kip|kips)\b",
        ),
        (
            UnitCategory::Pressure,
            r"(?i)\b(?:Pa|kPa|MPa|GPa|psi|psf|bar|atm)\b",
        ),
        (
            UnitCategory::Time,
            r"(?i)\b(?:s|sec|min|hr|hour|ms|msec|μs)\b",
        ),
        (
            UnitCategory::Temperature,
            r"(?i)°C|°F|\bK\b|°R",
        ),
        (
            UnitCategory::Angle,
            r"(?i)\b(?:deg|rad|degrees|radians)\b|°",
        ),
        (
            UnitCategory::Frequency,
            r"(?i)\b(?:Hz|kHz|MHz|GHz|rpm)\b",
        ),
    ]
    .into_iter()
    .map(|(category, pattern)| {
        (
            category,
            Regex::new(pattern).expect("unit pattern should be valid"),
        )
    })
    .collect()
});

pub fn unit_patterns() -> &'static [(UnitCategory, Regex)] {
    &UNIT_PATTERNS
}

/// Engineering code/standard designator patterns. Designators are required
/// (a bare prefix like "EN" would flag ordinary prose) and hyphenated
/// continuations are captured so "UFC 3-340-02" matches in full.
static STANDARD_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)\bUFC\s*\d+(?:-\d+)*",
        r"(?i)\bAISC\s*\d+(?:-\d+)*",
        r"(?i)\bASCE\s*\d+(?:-\d+)*",
        r"(?i)\bACI\s*\d+(?:-\d+)*",
        r"(?i)\bIBC\s*\d+(?:-\d+)*",
        r"(?i)\bAPI\s*\d+(?:-\d+)*",
        r"(?i)\bASTM\s*[A-Z]\d+(?:-\d+)*",
        r"(?i)\bISO\s*\d+(?:-\d+)*",
        r"(?i)\bEN\s*\d+(?:-\d+)*",
        r"(?i)\bBS\s*\d+(?:-\d+)*",
        r"(?i)\bAWS\s*[A-Z]\d+(?:\.\d+)*(?:-\d+)*",
    ]
    .into_iter()
    .map(|pattern| Regex::new(pattern).expect("standard pattern should be valid"))
    .collect()
});

pub fn standard_patterns() -> &'static [Regex] {
    &STANDARD_PATTERNS
}

/// Identifier immediately followed by an opening parenthesis, applied to
/// the uppercased formula text.
static FUNCTION_CALL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([A-Z]+)\s*\(").expect("function pattern should be valid"));

pub fn function_call_pattern() -> &'static Regex {
    &FUNCTION_CALL
}

/// Cell coordinate with optional quoted sheet prefix and optional
/// absolute-reference markers, applied to the uppercased formula text.
static CELL_REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:'[^']+'!)?\$?[A-Z]+\$?\d+").expect("reference pattern should be valid")
});

pub fn cell_reference_pattern() -> &'static Regex {
    &CELL_REFERENCE
}

/// Quoted sheet name immediately followed by `!` — the cross-sheet
/// reference syntax the dependency analyzer keys on.
static CROSS_SHEET_REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"'([^']+)'!").expect("cross-sheet pattern should be valid"));

pub fn cross_sheet_pattern() -> &'static Regex {
    &CROSS_SHEET_REFERENCE
}

/// One entry of the calculator-domain classification chain.
pub struct DomainRule {
    pub keywords: &'static [&'static str],
    pub domain: &'static str,
    pub calculator_type: Option<&'static str>,
    pub purpose: Option<&'static str>,
}

/// Domain keyword groups tested against the concatenated sheet names, in
/// fixed priority order; only the first matching group is applied.
pub const DOMAIN_RULES: &[DomainRule] = &[
    DomainRule {
        keywords: &["blast", "explosion", "pressure", "ufc"],
        domain: "Blast/Explosive Engineering",
        calculator_type: Some("Blast Load Calculator"),
        purpose: Some("Calculate blast pressures and structural loads"),
    },
    DomainRule {
        keywords: &["beam", "column", "structural", "load"],
        domain: "Structural Engineering",
        calculator_type: None,
        purpose: None,
    },
    DomainRule {
        keywords: &["thermal", "heat", "temp"],
        domain: "Thermal Engineering",
        calculator_type: None,
        purpose: None,
    },
    DomainRule {
        keywords: &["fluid", "flow", "pipe"],
        domain: "Fluid Mechanics",
        calculator_type: None,
        purpose: None,
    },
    DomainRule {
        keywords: &["electrical", "voltage", "current"],
        domain: "Electrical Engineering",
        calculator_type: None,
        purpose: None,
    },
];

/// First unit token found in `text`, probing categories in priority order.
pub fn extract_unit(text: &str) -> Option<String> {
    for (_, pattern) in unit_patterns() {
        if let Some(m) = pattern.find(text) {
            return Some(m.as_str().to_string());
        }
    }
    None
}

/// True when the lowercased `text` contains any of `keywords`.
pub fn contains_keyword(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_keyword_sets_are_disjoint() {
        for keyword in INPUT_KEYWORDS {
            assert!(!OUTPUT_KEYWORDS.contains(keyword));
        }
    }

    #[test]
    fn test_complexity_weights() {
        let weight = |name: &str| {
            COMPLEXITY_WEIGHTS
                .iter()
                .find(|(n, _)| *n == name)
                .map(|(_, w)| *w)
        };
        assert_eq!(weight("IF"), Some(2));
        assert_eq!(weight("VLOOKUP"), Some(2));
        assert_eq!(weight("HLOOKUP"), Some(2));
        assert_eq!(weight("LOOKUP"), Some(3));
        assert_eq!(weight("INDEX"), Some(3));
        assert_eq!(weight("SUMPRODUCT"), Some(3));
    }

    #[test]
    fn test_neighbor_offset_order() {
        assert_eq!(
            NEIGHBOR_OFFSETS,
            &[(0, 1), (0, 2), (1, 0), (0, -1), (-1, 0)]
        );
    }

    #[test]
    fn test_unit_pattern_priority_order_matches_categories() {
        let order: Vec<UnitCategory> = unit_patterns().iter().map(|(c, _)| *c).collect();
        assert_eq!(order, crate::core::UnitCategory::ALL.to_vec());
    }

    #[test]
    fn test_pressure_tokens_match() {
        let (_, pattern) = &unit_patterns()[5];
        assert_eq!(
            pattern.find("Applied Pressure (psi)").map(|m| m.as_str()),
            Some("psi")
        );
        assert_eq!(pattern.find("limit in MPa").map(|m| m.as_str()), Some("MPa"));
    }

    #[test]
    fn test_extract_unit_prefers_earlier_category() {
        // "m" (length) appears before any pressure token can win.
        assert_eq!(extract_unit("span m at 3 psi"), Some("m".to_string()));
        assert_eq!(extract_unit("Applied Pressure (psi)"), Some("psi".to_string()));
        assert_eq!(extract_unit("no units here!"), None);
    }

    #[test]
    fn test_extract_unit_superscript_forms() {
        assert_eq!(extract_unit("area ft²"), Some("ft".to_string()));
        let (_, area) = &unit_patterns()[1];
        assert_eq!(area.find("area ft²").map(|m| m.as_str()), Some("ft²"));
    }

    #[test]
    fn test_standard_patterns_full_designators() {
        let matched: Vec<String> = standard_patterns()
            .iter()
            .flat_map(|p| p.find_iter("Per UFC 3-340-02 and ASTM A992"))
            .map(|m| m.as_str().to_string())
            .collect();
        assert!(matched.contains(&"UFC 3-340-02".to_string()));
        assert!(matched.contains(&"ASTM A992".to_string()));
    }

    #[test]
    fn test_standard_patterns_require_designator() {
        let any_match = standard_patterns()
            .iter()
            .any(|p| p.is_match("written in plain English"));
        assert!(!any_match);
    }

    #[test]
    fn test_function_call_pattern() {
        let functions: Vec<&str> = function_call_pattern()
            .captures_iter("=IF(A1>10,VLOOKUP(A1,B:C,2),0)")
            .map(|c| c.get(1).unwrap().as_str())
            .collect();
        assert_eq!(functions, vec!["IF", "VLOOKUP"]);
    }

    #[test]
    fn test_cell_reference_pattern() {
        let refs: Vec<&str> = cell_reference_pattern()
            .find_iter("='INPUT DATA'!B2+$C$3-A10")
            .map(|m| m.as_str())
            .collect();
        assert_eq!(refs, vec!["'INPUT DATA'!B2", "$C$3", "A10"]);
    }

    #[test]
    fn test_cross_sheet_pattern_captures_name() {
        let sheets: Vec<&str> = cross_sheet_pattern()
            .captures_iter("='Input Data'!B2+'Lookup'!C3+A1")
            .map(|c| c.get(1).unwrap().as_str())
            .collect();
        assert_eq!(sheets, vec!["Input Data", "Lookup"]);
    }

    #[test]
    fn test_domain_rules_priority() {
        assert_eq!(DOMAIN_RULES[0].domain, "Blast/Explosive Engineering");
        assert!(DOMAIN_RULES[0].calculator_type.is_some());
        assert!(DOMAIN_RULES.iter().skip(1).all(|r| r.calculator_type.is_none()));
    }
}
