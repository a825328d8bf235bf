//! Command implementations for the sheet-scout CLI
//!
//! This module contains the implementations for each CLI command:
//! - profile: Produce the full structural profile of a calculator workbook
//! - summary: Show a condensed summary of what the calculator is and does
//! - formulas: List and score the formulas in a workbook
//! - deps: Map how sheets reference each other

pub mod deps;
pub mod formulas;
pub mod profile;
pub mod summary;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Profile { .. } => profile::execute_profile_command(command),
        Commands::Summary { .. } => summary::execute_summary_command(command),
        Commands::Formulas { .. } => formulas::execute_formulas_command(command),
        Commands::Deps { .. } => deps::execute_deps_command(command),
    }
}
