//! Summary command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::SummaryConfig;
use crate::error::SheetScoutError;

impl FromCommand for SummaryConfig {
    fn from_command(command: Commands) -> Result<Self, SheetScoutError> {
        match command {
            Commands::Summary {
                workbook,
                format,
                fast,
            } => SummaryConfig::builder()
                .with_workbook(workbook.workbook)
                .with_format(format.format)
                .with_fast(fast)
                .build(),
            _ => Err(SheetScoutError::ConfigurationError {
                message: "Invalid command type for SummaryConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(SummaryConfig);

/// Execute the summary command for the condensed calculator overview
pub fn execute_summary_command(command: Commands) -> Result<()> {
    let config = SummaryConfig::from_command(command)
        .wrap_err("Failed to parse summary command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::summary::SummaryExecutor;
    SummaryExecutor::execute(config)
}
