//! Heuristic analysis passes over a workbook snapshot.
//!
//! Each analyzer reads the same immutable [`WorkbookSnapshot`] and produces
//! one slice of the final [`AnalysisReport`]; none depends on another's
//! output. [`analyze`] runs them all and derives the cross-cutting summary.

pub mod dependencies;
pub mod documentation;
pub mod formulas;
pub mod identify;
pub mod parameters;
pub mod sheets;
pub mod standards;
pub mod tables;
pub mod units;

use std::path::Path;

use crate::core::{AnalysisReport, AnalysisSummary, ParameterRole};
use crate::error::SheetScoutError;
use crate::snapshot::{WorkbookSnapshot, load_snapshot};

/// Run every analyzer over the snapshot and aggregate the results.
pub fn analyze(snapshot: &WorkbookSnapshot) -> AnalysisReport {
    let calculator = identify::identify_calculator(snapshot);
    let sheets = sheets::survey_sheets(snapshot);
    let input_parameters = parameters::extract_parameters(snapshot, ParameterRole::Input);
    let output_parameters = parameters::extract_parameters(snapshot, ParameterRole::Output);
    let formulas = formulas::analyze_formulas(snapshot);
    let units = units::catalog_units(snapshot);
    let unit_systems = units::classify_unit_system(&units);
    let validation_rules = documentation::find_validation_rules(snapshot);
    let documentation = documentation::extract_documentation(snapshot);
    let dependencies = dependencies::sheet_dependencies(snapshot);
    let standards = standards::detect_standards(snapshot);

    let summary = AnalysisSummary {
        calculator_type: calculator.calculator_type.clone(),
        engineering_domain: calculator.engineering_domain.clone(),
        total_inputs: input_parameters.len(),
        total_outputs: output_parameters.len(),
        total_formulas: formulas.values().map(Vec::len).sum(),
        units_used: units.all_units().into_iter().collect(),
        standards_referenced: standards.clone(),
        sheet_types: sheets
            .iter()
            .map(|info| (info.name.clone(), info.sheet_type))
            .collect(),
    };

    AnalysisReport {
        calculator,
        sheets,
        input_parameters,
        output_parameters,
        formulas,
        units,
        unit_systems,
        validation_rules,
        documentation,
        dependencies,
        standards,
        summary,
    }
}

/// Load a workbook from disk and analyze it in one call.
pub fn analyze_file(path: &Path) -> Result<AnalysisReport, SheetScoutError> {
    let snapshot = load_snapshot(path)?;
    Ok(analyze(&snapshot))
}
