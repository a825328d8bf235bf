//! Deps command configuration

use std::path::PathBuf;

use crate::cli::OutputFormat;

/// Configuration for the deps command
#[derive(Debug, Clone)]
pub struct DepsConfig {
    /// Path to the workbook to analyze
    pub workbook: PathBuf,
    /// Output format for the report
    pub format: OutputFormat,
}

impl DepsConfig {
    pub fn builder() -> DepsConfigBuilder {
        DepsConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct DepsConfigBuilder {
    workbook: Option<PathBuf>,
    format: Option<OutputFormat>,
}

impl DepsConfigBuilder {
    pub fn new() -> Self {
        Self {
            workbook: None,
            format: None,
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
}

impl crate::common::ConfigBuilder for DepsConfigBuilder {
    type Config = DepsConfig;

    fn build(self) -> Result<Self::Config, crate::error::SheetScoutError> {
        Ok(DepsConfig {
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
        })
    }
}
