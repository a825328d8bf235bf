use console::{Term, style};
use indicatif::{ProgressBar, ProgressStyle};

use crate::constants::progress::{SPINNER_FRAMES, TICK_INTERVAL};
use crate::utils::string::pluralize;

const SPINNER_TEMPLATE: &str = "{spinner:.cyan} {msg}";

/// Spinner-based progress reporting on stderr for interactive runs.
pub struct ProgressReporter {
    term: Term,
    current_spinner: Option<ProgressBar>,
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
            current_spinner: None,
        }
    }

    fn create_spinner(&mut self, message: &str) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template(SPINNER_TEMPLATE)
                .expect("Spinner template should be valid")
                .tick_strings(SPINNER_FRAMES),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(TICK_INTERVAL);
        pb
    }

    pub fn start_load(&mut self, file_name: &str) {
        let _ = self.term.clear_line();
        eprintln!("{} Opening workbook...", style("📂").cyan());
        let spinner = self.create_spinner(format!("Reading {file_name}...").as_str());
        self.current_spinner = Some(spinner);
    }

    pub fn finish_load(&mut self, sheet_count: usize) {
        if let Some(pb) = self.current_spinner.take() {
            pb.finish_and_clear();
        }
        let _ = self.term.clear_line();
        eprintln!(
            "\r{} Loaded {} {}",
            style("✓").green(),
            style(sheet_count).yellow().bold(),
            pluralize("sheet", sheet_count)
        );
    }

    pub fn start_analysis(&mut self) {
        eprintln!("{} Analyzing calculator structure...", style("🔍").yellow());
        let spinner = self.create_spinner("Running analyzers...");
        self.current_spinner = Some(spinner);
    }

    pub fn finish_analysis(&mut self, formula_count: usize) {
        if let Some(pb) = self.current_spinner.take() {
            pb.finish_and_clear();
        }
        let _ = self.term.clear_line();
        eprintln!(
            "\r{} Analysis complete: {} {} examined",
            style("✓").green(),
            style(formula_count).yellow().bold(),
            pluralize("formula", formula_count)
        );
    }
}
