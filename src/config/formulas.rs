//! Formulas command configuration

use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::core::ComplexityTier;

/// Configuration for the formulas command
#[derive(Debug, Clone)]
pub struct FormulasConfig {
    /// Path to the workbook to analyze
    pub workbook: PathBuf,
    /// Output format for the report
    pub format: OutputFormat,
    /// Restrict the listing to this sheet (None = all sheets)
    pub sheet: Option<String>,
    /// Hide formulas below this tier (None = show all)
    pub min_complexity: Option<ComplexityTier>,
}

impl FormulasConfig {
    pub fn builder() -> FormulasConfigBuilder {
        FormulasConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct FormulasConfigBuilder {
    workbook: Option<PathBuf>,
    format: Option<OutputFormat>,
    sheet: Option<Option<String>>,
    min_complexity: Option<Option<ComplexityTier>>,
}

impl FormulasConfigBuilder {
    pub fn new() -> Self {
        Self {
            workbook: None,
            format: None,
            sheet: None,
            min_complexity: None,
        }
    }

    pub fn with_workbook(mut self, workbook: PathBuf) -> Self {
        self.workbook = Some(workbook);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_sheet(mut self, sheet: Option<String>) -> Self {
        self.sheet = Some(sheet);
        self
    }

    pub fn with_min_complexity(mut self, min_complexity: Option<ComplexityTier>) -> Self {
        self.min_complexity = Some(min_complexity);
        self
    }
}

impl crate::common::ConfigBuilder for FormulasConfigBuilder {
    type Config = FormulasConfig;

    fn build(self) -> Result<Self::Config, crate::error::SheetScoutError> {
        Ok(FormulasConfig {
            workbook: self.workbook.ok_or_else(|| {
                crate::error::SheetScoutError::ConfigurationError {
                    message: "Missing required field: workbook".to_string(),
                }
            })?,
            format: self.format.ok_or_else(|| {
                crate::error::SheetScoutError::ConfigurationError {
                    message: "Missing required field: format".to_string(),
                }
            })?,
            sheet: self.sheet.ok_or_else(|| {
                crate::error::SheetScoutError::ConfigurationError {
                    message: "Missing required field: sheet".to_string(),
                }
            })?,
            min_complexity: self.min_complexity.ok_or_else(|| {
                crate::error::SheetScoutError::ConfigurationError {
                    message: "Missing required field: min_complexity".to_string(),
                }
            })?,
        })
    }
}
