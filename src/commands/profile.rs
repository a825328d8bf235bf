//! Profile command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::ProfileConfig;
use crate::error::SheetScoutError;

impl FromCommand for ProfileConfig {
    fn from_command(command: Commands) -> Result<Self, SheetScoutError> {
        match command {
            Commands::Profile {
                workbook,
                format,
                max_parameters,
            } => ProfileConfig::builder()
                .with_workbook(workbook.workbook)
                .with_format(format.format)
                .with_max_parameters(max_parameters)
                .build(),
            _ => Err(SheetScoutError::ConfigurationError {
                message: "Invalid command type for ProfileConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(ProfileConfig);

/// Execute the profile command producing the full analysis report
pub fn execute_profile_command(command: Commands) -> Result<()> {
    let config = ProfileConfig::from_command(command)
        .wrap_err("Failed to parse profile command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::profile::ProfileExecutor;
    ProfileExecutor::execute(config)
}
