//! Summary command executor

use std::collections::BTreeMap;
use std::fmt::Write;

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};
use serde_json::json;

use crate::analysis::{analyze, identify, sheets};
use crate::cli::OutputFormat;
use crate::config::SummaryConfig;
use crate::core::{CalculatorProfile, SheetInfo, SheetType};
use crate::executors::CommandExecutor;
use crate::progress::ProgressReporter;
use crate::reports::{HumanReportGenerator, JsonReportGenerator, ReportGenerator, ReportView};
use crate::snapshot::load_snapshot;

pub struct SummaryExecutor;

impl CommandExecutor for SummaryExecutor {
    type Config = SummaryConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let mut progress = if console::Term::stderr().is_term() {
            Some(ProgressReporter::new())
        } else {
            None
        };

        if let Some(p) = progress.as_mut() {
            p.start_load(&config.workbook.display().to_string());
        }

        let snapshot = load_snapshot(&config.workbook)
            .into_diagnostic()
            .wrap_err("Failed to load workbook snapshot")?;

        if let Some(p) = progress.as_mut() {
            p.finish_load(snapshot.sheets().len());
        }

        if config.fast {
            // Reduced-depth path: sheet survey and identification only.
            let profile = identify::identify_calculator(&snapshot);
            let survey = sheets::survey_sheets(&snapshot);
            let rendered = match config.format {
                OutputFormat::Human => render_fast_summary(&profile, &survey),
                OutputFormat::Json => render_fast_summary_json(&profile, &survey),
            }
            .into_diagnostic()
            .wrap_err("Failed to generate fast summary")?;
            print!("{rendered}");
            return Ok(());
        }

        if let Some(p) = progress.as_mut() {
            p.start_analysis();
        }

        let report = analyze(&snapshot);

        if let Some(p) = progress.as_mut() {
            p.finish_analysis(report.total_formulas());
        }

        let report_result = match config.format {
            OutputFormat::Human => {
                let generator = HumanReportGenerator::new(ReportView::Summary, None);
                generator.generate_report(&report)
            }
            OutputFormat::Json => {
                let generator = JsonReportGenerator::new(ReportView::Summary);
                generator.generate_report(&report)
            }
        };

        match report_result {
            Ok(rendered) => print!("{rendered}"),
            Err(e) => {
                return Err(e)
                    .into_diagnostic()
                    .wrap_err("Failed to generate report");
            }
        }

        Ok(())
    }
}

fn render_fast_summary(
    profile: &CalculatorProfile,
    survey: &[SheetInfo],
) -> Result<String, crate::error::SheetScoutError> {
    let mut output = String::new();
    let total_formulas: usize = survey.iter().map(|s| s.formula_count).sum();

    writeln!(
        output,
        "\n{} Calculator Summary (fast)\n",
        style("📋").cyan()
    )?;
    writeln!(output, "  Type: {}", style(&profile.calculator_type).bold())?;
    writeln!(
        output,
        "  Domain: {}",
        style(&profile.engineering_domain).bold()
    )?;
    writeln!(output, "  File: {}", profile.file_name)?;
    writeln!(output, "  Sheets: {}", profile.total_sheets)?;
    writeln!(output, "  Formulas: {total_formulas}")?;
    writeln!(output, "\n  Sheet roles:")?;
    for sheet in survey {
        writeln!(
            output,
            "    {} {}: {} ({} cells, {} formulas)",
            style("•").dim(),
            style(&sheet.name).bold(),
            sheet.sheet_type,
            sheet.data_cell_count,
            sheet.formula_count
        )?;
    }
    Ok(output)
}

fn render_fast_summary_json(
    profile: &CalculatorProfile,
    survey: &[SheetInfo],
) -> Result<String, crate::error::SheetScoutError> {
    let sheet_types: BTreeMap<&str, SheetType> = survey
        .iter()
        .map(|s| (s.name.as_str(), s.sheet_type))
        .collect();
    let total_formulas: usize = survey.iter().map(|s| s.formula_count).sum();

    let value = json!({
        "file_name": profile.file_name,
        "sheet_names": profile.sheet_names,
        "total_sheets": profile.total_sheets,
        "calculator_type": profile.calculator_type,
        "engineering_domain": profile.engineering_domain,
        "purpose": profile.purpose,
        "total_formulas": total_formulas,
        "sheet_types": sheet_types,
    });

    let mut output = serde_json::to_string_pretty(&value)?;
    output.push('\n');
    Ok(output)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::snapshot::{SheetSnapshot, WorkbookSnapshot};

    fn survey_and_profile() -> (CalculatorProfile, Vec<SheetInfo>) {
        let workbook = WorkbookSnapshot::builder()
            .with_file_name("blast.xlsx")
            .with_sheet(
                SheetSnapshot::builder("Blast Inputs")
                    .with_number(1, 1, 10.0)
                    .build(),
            )
            .with_sheet(
                SheetSnapshot::builder("Calcs")
                    .with_formula(1, 1, "=A2*2")
                    .build(),
            )
            .build();
        (
            identify::identify_calculator(&workbook),
            sheets::survey_sheets(&workbook),
        )
    }

    #[test]
    fn test_fast_summary_human() {
        let (profile, survey) = survey_and_profile();
        let output = render_fast_summary(&profile, &survey).unwrap();
        assert!(output.contains("Calculator Summary (fast)"));
        assert!(output.contains("Domain: Blast/Explosive Engineering"));
        assert!(output.contains("Formulas: 1"));
    }

    #[test]
    fn test_fast_summary_json() {
        let (profile, survey) = survey_and_profile();
        let output = render_fast_summary_json(&profile, &survey).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["file_name"], "blast.xlsx");
        assert_eq!(value["total_formulas"], 1);
        assert_eq!(value["sheet_types"]["Blast Inputs"], "Input/Configuration");
    }
}
