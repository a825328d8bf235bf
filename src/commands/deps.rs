//! Deps command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::DepsConfig;
use crate::error::SheetScoutError;

impl FromCommand for DepsConfig {
    fn from_command(command: Commands) -> Result<Self, SheetScoutError> {
        match command {
            Commands::Deps { workbook, format } => DepsConfig::builder()
                .with_workbook(workbook.workbook)
                .with_format(format.format)
                .build(),
            _ => Err(SheetScoutError::ConfigurationError {
                message: "Invalid command type for DepsConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(DepsConfig);

/// Execute the deps command for the sheet dependency view
pub fn execute_deps_command(command: Commands) -> Result<()> {
    let config = DepsConfig::from_command(command)
        .wrap_err("Failed to parse deps command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::deps::DepsExecutor;
    DepsExecutor::execute(config)
}
