//! Formulas command executor

use std::collections::BTreeMap;

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::analysis::analyze;
use crate::cli::OutputFormat;
use crate::config::FormulasConfig;
use crate::core::{ComplexityTier, FormulaRecord};
use crate::error::SheetScoutError;
use crate::executors::CommandExecutor;
use crate::progress::ProgressReporter;
use crate::reports::{HumanReportGenerator, JsonReportGenerator, ReportGenerator, ReportView};
use crate::snapshot::load_snapshot;

pub struct FormulasExecutor;

impl CommandExecutor for FormulasExecutor {
    type Config = FormulasConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!("{} Analyzing formulas...\n", style("🧮").cyan());

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

        if let Some(sheet) = &config.sheet {
            if !snapshot.sheet_names().contains(&sheet.as_str()) {
                return Err(SheetScoutError::SheetNotFound {
                    name: sheet.clone(),
                })
                .into_diagnostic();
            }
        }

        if let Some(p) = progress.as_mut() {
            p.finish_load(snapshot.sheets().len());
            p.start_analysis();
        }

        let mut report = analyze(&snapshot);

        if let Some(p) = progress.as_mut() {
            p.finish_analysis(report.total_formulas());
        }

        report.formulas = filter_formulas(
            report.formulas,
            config.sheet.as_deref(),
            config.min_complexity,
        );

        let report_result = match config.format {
            OutputFormat::Human => {
                let generator = HumanReportGenerator::new(ReportView::Formulas, None);
                generator.generate_report(&report)
            }
            OutputFormat::Json => {
                let generator = JsonReportGenerator::new(ReportView::Formulas);
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

/// Apply the sheet and minimum-tier filters to the per-sheet formula map.
/// Sheets dropped by the sheet filter disappear entirely; the tier filter
/// keeps sheet entries but thins their records.
fn filter_formulas(
    formulas: BTreeMap<String, Vec<FormulaRecord>>,
    sheet: Option<&str>,
    min_complexity: Option<ComplexityTier>,
) -> BTreeMap<String, Vec<FormulaRecord>> {
    formulas
        .into_iter()
        .filter(|(name, _)| sheet.is_none_or(|wanted| name == wanted))
        .map(|(name, records)| {
            let kept: Vec<FormulaRecord> = records
                .into_iter()
                .filter(|record| {
                    min_complexity.is_none_or(|floor| record.complexity >= floor)
                })
                .collect();
            (name, kept)
        })
        .collect()
}
