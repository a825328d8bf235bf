//! Profile command executor

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::analysis::analyze;
use crate::cli::OutputFormat;
use crate::config::ProfileConfig;
use crate::executors::CommandExecutor;
use crate::progress::ProgressReporter;
use crate::reports::{HumanReportGenerator, JsonReportGenerator, ReportGenerator, ReportView};
use crate::snapshot::load_snapshot;

pub struct ProfileExecutor;

impl CommandExecutor for ProfileExecutor {
    type Config = ProfileConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Profiling calculator workbook...\n",
            style("🔎").cyan()
        );

        // Progress reporting only in an interactive terminal
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

        let report_result = match config.format {
            OutputFormat::Human => {
                let generator =
                    HumanReportGenerator::new(ReportView::Full, config.max_parameters);
                generator.generate_report(&report)
            }
            OutputFormat::Json => {
                let generator = JsonReportGenerator::new(ReportView::Full);
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
