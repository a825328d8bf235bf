//! Human-readable console report generation

use std::collections::BTreeMap;
use std::fmt::Write;

use console::style;

use super::{ReportGenerator, ReportView};
use crate::core::{AnalysisReport, Parameter};
use crate::error::SheetScoutError;
use crate::utils::string::{ellipsize, pluralize};

const FORMULA_PREVIEW_LENGTH: usize = 60;
const SAMPLE_FORMULAS_PER_SHEET: usize = 3;

pub struct HumanReportGenerator {
    view: ReportView,
    max_parameters: Option<usize>,
}

impl HumanReportGenerator {
    pub fn new(view: ReportView, max_parameters: Option<usize>) -> Self {
        Self {
            view,
            max_parameters,
        }
    }

    fn write_profile(&self, output: &mut String, report: &AnalysisReport) -> std::fmt::Result {
        writeln!(
            output,
            "\n{} Engineering Calculator Analysis\n",
            style("🔧").cyan()
        )?;
        writeln!(
            output,
            "  Calculator Type: {}",
            style(&report.calculator.calculator_type).bold()
        )?;
        writeln!(
            output,
            "  Engineering Domain: {}",
            style(&report.calculator.engineering_domain).bold()
        )?;
        writeln!(output, "  Purpose: {}", report.calculator.purpose)?;
        writeln!(output, "  File: {}", report.calculator.file_name)?;
        writeln!(
            output,
            "  Total Sheets: {}",
            style(report.calculator.total_sheets).yellow()
        )
    }

    fn write_sheets(&self, output: &mut String, report: &AnalysisReport) -> std::fmt::Result {
        writeln!(output, "\n{} Sheet Analysis:", style("📄").blue())?;
        for sheet in &report.sheets {
            writeln!(
                output,
                "  {} {}: {} ({} cells, {} {})",
                style("•").dim(),
                style(&sheet.name).bold(),
                sheet.sheet_type,
                sheet.data_cell_count,
                sheet.formula_count,
                pluralize("formula", sheet.formula_count)
            )?;
        }
        Ok(())
    }

    fn write_parameters(
        &self,
        output: &mut String,
        label: &str,
        parameters: &[Parameter],
    ) -> std::fmt::Result {
        if parameters.is_empty() {
            writeln!(
                output,
                "\n{} No {} parameters found with standard naming patterns.",
                style("📊").blue(),
                label
            )?;
            return Ok(());
        }

        writeln!(
            output,
            "\n{} {} Parameters ({}):",
            style("📊").blue(),
            capitalize(label),
            style(parameters.len()).yellow()
        )?;

        let shown = self.max_parameters.unwrap_or(parameters.len());
        for (i, param) in parameters.iter().take(shown).enumerate() {
            writeln!(output, "  {}. {}", i + 1, style(&param.name).bold())?;
            writeln!(output, "     Location: {}", param.location)?;
            if let Some(value) = &param.value {
                writeln!(output, "     Value: {value}")?;
            }
            if let Some(unit) = &param.unit {
                writeln!(output, "     Unit: {unit}")?;
            }
            if let Some(formula) = &param.formula {
                writeln!(
                    output,
                    "     Formula: {}",
                    style(ellipsize(formula, FORMULA_PREVIEW_LENGTH)).dim()
                )?;
            }
        }
        if parameters.len() > shown {
            writeln!(
                output,
                "  ... and {} more {}",
                parameters.len() - shown,
                pluralize("parameter", parameters.len() - shown)
            )?;
        }
        Ok(())
    }

    fn write_formulas(&self, output: &mut String, report: &AnalysisReport) -> std::fmt::Result {
        let total = report.total_formulas();
        writeln!(output, "\n{} Formula Analysis", style("🧮").cyan())?;
        writeln!(
            output,
            "  Total Formulas: {}",
            style(total).yellow().bold()
        )?;

        for (sheet_name, records) in &report.formulas {
            if records.is_empty() {
                continue;
            }
            writeln!(
                output,
                "\n  {} {} ({} {}):",
                style("📋").blue(),
                style(sheet_name).bold(),
                records.len(),
                pluralize("formula", records.len())
            )?;

            let mut tier_counts: BTreeMap<String, usize> = BTreeMap::new();
            for record in records {
                *tier_counts.entry(record.complexity.to_string()).or_default() += 1;
            }
            for (tier, count) in tier_counts {
                writeln!(output, "    {} {tier}: {count}", style("•").dim())?;
            }

            for record in records.iter().take(SAMPLE_FORMULAS_PER_SHEET) {
                writeln!(
                    output,
                    "    {} {}",
                    style(record.location.address()).yellow(),
                    style(ellipsize(&record.formula, FORMULA_PREVIEW_LENGTH)).dim()
                )?;
            }
        }
        Ok(())
    }

    fn write_units(&self, output: &mut String, report: &AnalysisReport) -> std::fmt::Result {
        writeln!(output, "\n{} Units Analysis:", style("📏").blue())?;
        for (category, tokens) in &report.units.by_category {
            if tokens.is_empty() {
                continue;
            }
            let joined: Vec<&str> = tokens.iter().map(String::as_str).collect();
            writeln!(
                output,
                "  {} {}: {}",
                style("•").dim(),
                category,
                joined.join(", ")
            )?;
        }
        writeln!(
            output,
            "  Metric units: {}, imperial units: {}",
            report.unit_systems.metric_count, report.unit_systems.imperial_count
        )?;
        writeln!(
            output,
            "  Primary system: {}",
            style(report.unit_systems.dominant).bold()
        )
    }

    fn write_dependencies(
        &self,
        output: &mut String,
        report: &AnalysisReport,
    ) -> std::fmt::Result {
        writeln!(output, "\n{} Sheet Dependencies:", style("🔗").cyan())?;
        for (sheet, targets) in &report.dependencies.references {
            if targets.is_empty() {
                writeln!(
                    output,
                    "  {} {}: {}",
                    style("•").dim(),
                    style(sheet).bold(),
                    style("no cross-sheet references").dim()
                )?;
            } else {
                let joined: Vec<&str> = targets.iter().map(String::as_str).collect();
                writeln!(
                    output,
                    "  {} {} → {}",
                    style("•").dim(),
                    style(sheet).bold(),
                    joined.join(", ")
                )?;
            }
        }

        if report.dependencies.has_circular_references() {
            writeln!(
                output,
                "\n  {} Circular references between sheets:",
                style("⚠").yellow().bold()
            )?;
            for cycle in &report.dependencies.circular {
                writeln!(output, "    {} {}", style("•").dim(), cycle.join(" ↔ "))?;
            }
        } else {
            writeln!(
                output,
                "\n  {} No circular sheet references",
                style("✓").green()
            )?;
        }
        Ok(())
    }

    fn write_standards(&self, output: &mut String, report: &AnalysisReport) -> std::fmt::Result {
        if report.standards.is_empty() {
            return Ok(());
        }
        writeln!(
            output,
            "\n{} Engineering Standards: {}",
            style("📚").blue(),
            report.standards.join(", ")
        )
    }

    fn write_documentation(
        &self,
        output: &mut String,
        report: &AnalysisReport,
    ) -> std::fmt::Result {
        let docs = &report.documentation;
        if docs.is_empty() {
            return Ok(());
        }
        writeln!(output, "\n{} Documentation:", style("📝").blue())?;
        for (label, entries) in [
            ("Descriptions", &docs.descriptions),
            ("References", &docs.references),
            ("Standards", &docs.standards),
            ("Notes", &docs.notes),
        ] {
            if entries.is_empty() {
                continue;
            }
            writeln!(output, "  {} ({}):", label, entries.len())?;
            for entry in entries {
                writeln!(
                    output,
                    "    {} {}",
                    style("•").dim(),
                    ellipsize(entry, 100)
                )?;
            }
        }
        Ok(())
    }

    fn write_validation(&self, output: &mut String, report: &AnalysisReport) -> std::fmt::Result {
        if report.validation_rules.is_empty() {
            return Ok(());
        }
        writeln!(
            output,
            "\n{} Validation Rules ({}):",
            style("🔍").cyan(),
            report.validation_rules.len()
        )?;
        for rule in &report.validation_rules {
            writeln!(
                output,
                "  {} {} {}",
                style("•").dim(),
                style(&rule.location).yellow(),
                rule.rule_text
            )?;
        }
        Ok(())
    }

    fn write_summary(&self, output: &mut String, report: &AnalysisReport) -> std::fmt::Result {
        let summary = &report.summary;
        writeln!(output, "\n{} Calculator Summary\n", style("📋").cyan())?;
        writeln!(
            output,
            "  Type: {}",
            style(&summary.calculator_type).bold()
        )?;
        writeln!(
            output,
            "  Domain: {}",
            style(&summary.engineering_domain).bold()
        )?;
        writeln!(output, "  Inputs: {}", summary.total_inputs)?;
        writeln!(output, "  Outputs: {}", summary.total_outputs)?;
        writeln!(output, "  Formulas: {}", summary.total_formulas)?;
        let units: Vec<&str> = summary.units_used.iter().map(String::as_str).collect();
        writeln!(output, "  Units: {}", units.join(", "))?;
        if !summary.standards_referenced.is_empty() {
            writeln!(
                output,
                "  Standards: {}",
                summary.standards_referenced.join(", ")
            )?;
        }
        writeln!(output, "\n  Sheet roles:")?;
        for (name, sheet_type) in &summary.sheet_types {
            writeln!(
                output,
                "    {} {}: {}",
                style("•").dim(),
                style(name).bold(),
                sheet_type
            )?;
        }
        Ok(())
    }
}

impl ReportGenerator for HumanReportGenerator {
    fn generate_report(&self, report: &AnalysisReport) -> Result<String, SheetScoutError> {
        let mut output = String::new();

        match self.view {
            ReportView::Full => {
                self.write_profile(&mut output, report)?;
                self.write_sheets(&mut output, report)?;
                self.write_parameters(&mut output, "input", &report.input_parameters)?;
                self.write_parameters(&mut output, "output", &report.output_parameters)?;
                self.write_formulas(&mut output, report)?;
                self.write_units(&mut output, report)?;
                self.write_dependencies(&mut output, report)?;
                self.write_standards(&mut output, report)?;
                self.write_documentation(&mut output, report)?;
                self.write_validation(&mut output, report)?;
            }
            ReportView::Summary => self.write_summary(&mut output, report)?,
            ReportView::Formulas => self.write_formulas(&mut output, report)?,
            ReportView::Dependencies => self.write_dependencies(&mut output, report)?,
        }

        Ok(output)
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
