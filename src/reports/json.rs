//! JSON format report generation

use serde_json::json;

use super::{ReportGenerator, ReportView};
use crate::core::AnalysisReport;
use crate::error::SheetScoutError;

pub struct JsonReportGenerator {
    view: ReportView,
}

impl JsonReportGenerator {
    pub fn new(view: ReportView) -> Self {
        Self { view }
    }
}

impl ReportGenerator for JsonReportGenerator {
    fn generate_report(&self, report: &AnalysisReport) -> Result<String, SheetScoutError> {
        let value = match self.view {
            ReportView::Full => serde_json::to_value(report)?,
            ReportView::Summary => serde_json::to_value(&report.summary)?,
            ReportView::Formulas => json!({
                "total_formulas": report.total_formulas(),
                "formulas": report.formulas,
            }),
            ReportView::Dependencies => serde_json::to_value(&report.dependencies)?,
        };

        let mut output = serde_json::to_string_pretty(&value)?;
        output.push('\n');
        Ok(output)
    }
}
