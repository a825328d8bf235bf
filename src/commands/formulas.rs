//! Formulas command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::FormulasConfig;
use crate::error::SheetScoutError;

impl FromCommand for FormulasConfig {
    fn from_command(command: Commands) -> Result<Self, SheetScoutError> {
        match command {
            Commands::Formulas {
                workbook,
                format,
                sheet,
                min_complexity,
            } => FormulasConfig::builder()
                .with_workbook(workbook.workbook)
                .with_format(format.format)
                .with_sheet(sheet)
                .with_min_complexity(min_complexity)
                .build(),
            _ => Err(SheetScoutError::ConfigurationError {
                message: "Invalid command type for FormulasConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(FormulasConfig);

/// Execute the formulas command for the formula analysis view
pub fn execute_formulas_command(command: Commands) -> Result<()> {
    let config = FormulasConfig::from_command(command)
        .wrap_err("Failed to parse formulas command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::formulas::FormulasExecutor;
    FormulasExecutor::execute(config)
}
