use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum SheetScoutError {
    /// The designated workbook cannot be opened or parsed at all. Fatal for
    /// the whole analysis call; everything past loading is infallible.
    #[error("Failed to open workbook '{path}'")]
    #[diagnostic(
        code(sheet_scout::workbook_open),
        help("Check that the file exists, is readable, and is a valid .xlsx/.xls workbook")
    )]
    WorkbookOpen {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    #[error("Sheet '{name}' not found in workbook")]
    #[diagnostic(
        code(sheet_scout::sheet_not_found),
        help("Run `sheet-scout summary` to list the workbook's sheet names")
    )]
    SheetNotFound { name: String },

    #[error("JSON serialization error")]
    #[diagnostic(
        code(sheet_scout::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(sheet_scout::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error")]
    #[diagnostic(
        code(sheet_scout::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(sheet_scout::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },
}
