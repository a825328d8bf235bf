//! Profile command configuration

use std::path::PathBuf;

use crate::cli::OutputFormat;

/// Configuration for the profile command
///
/// This struct contains all options for producing the full structural
/// profile of a calculator workbook.
#[derive(Debug, Clone)]
pub struct ProfileConfig {
    /// Path to the workbook to analyze
    pub workbook: PathBuf,
    /// Output format for the report
    pub format: OutputFormat,
    /// Maximum parameters listed per role in human output (None = all)
    pub max_parameters: Option<usize>,
}

impl ProfileConfig {
    pub fn builder() -> ProfileConfigBuilder {
        ProfileConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct ProfileConfigBuilder {
    workbook: Option<PathBuf>,
    format: Option<OutputFormat>,
    max_parameters: Option<Option<usize>>,
}

impl ProfileConfigBuilder {
    pub fn new() -> Self {
        Self {
            workbook: None,
            format: None,
            max_parameters: None,
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

    pub fn with_max_parameters(mut self, max_parameters: Option<usize>) -> Self {
        self.max_parameters = Some(max_parameters);
        self
    }
}

impl crate::common::ConfigBuilder for ProfileConfigBuilder {
    type Config = ProfileConfig;

    fn build(self) -> Result<Self::Config, crate::error::SheetScoutError> {
        Ok(ProfileConfig {
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
            max_parameters: self.max_parameters.ok_or_else(|| {
                crate::error::SheetScoutError::ConfigurationError {
                    message: "Missing required field: max_parameters".to_string(),
                }
            })?,
        })
    }
}
