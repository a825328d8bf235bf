//! Deps command executor

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::analysis::analyze;
use crate::cli::OutputFormat;
use crate::config::DepsConfig;
use crate::executors::CommandExecutor;
use crate::progress::ProgressReporter;
use crate::reports::{HumanReportGenerator, JsonReportGenerator, ReportGenerator, ReportView};
use crate::snapshot::load_snapshot;

pub struct DepsExecutor;

impl CommandExecutor for DepsExecutor {
    type Config = DepsConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!("{} Mapping sheet references...\n", style("🔗").cyan());

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
            p.start_analysis();
        }

        let report = analyze(&snapshot);

        if let Some(p) = progress.as_mut() {
            p.finish_analysis(report.total_formulas());
        }

        if report.dependencies.has_circular_references() {
            let count = report.dependencies.circular.len();
            eprintln!(
                "{} Found {} circular reference {}",
                style("⚠").yellow().bold(),
                style(count).red().bold(),
                crate::utils::string::pluralize("group", count)
            );
        }

        let report_result = match config.format {
            OutputFormat::Human => {
                let generator = HumanReportGenerator::new(ReportView::Dependencies, None);
                generator.generate_report(&report)
            }
            OutputFormat::Json => {
                let generator = JsonReportGenerator::new(ReportView::Dependencies);
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
