//! Summary command configuration

use std::path::PathBuf;

use crate::cli::OutputFormat;

/// Configuration for the summary command
#[derive(Debug, Clone)]
pub struct SummaryConfig {
    /// Path to the workbook to analyze
    pub workbook: PathBuf,
    /// Output format for the report
    pub format: OutputFormat,
    /// Run only the sheet survey and calculator identification passes
    pub fast: bool,
}

impl SummaryConfig {
    pub fn builder() -> SummaryConfigBuilder {
        SummaryConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct SummaryConfigBuilder {
    workbook: Option<PathBuf>,
    format: Option<OutputFormat>,
    fast: Option<bool>,
}

impl SummaryConfigBuilder {
    pub fn new() -> Self {
        Self {
            workbook: None,
            format: None,
            fast: None,
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

    pub fn with_fast(mut self, fast: bool) -> Self {
        self.fast = Some(fast);
        self
    }
}

impl crate::common::ConfigBuilder for SummaryConfigBuilder {
    type Config = SummaryConfig;

    fn build(self) -> Result<Self::Config, crate::error::SheetScoutError> {
        Ok(SummaryConfig {
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
            fast: self.fast.ok_or_else(|| {
                crate::error::SheetScoutError::ConfigurationError {
                    message: "Missing required field: fast".to_string(),
                }
            })?,
        })
    }
}
