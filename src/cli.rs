use clap::{Parser, Subcommand};

use crate::common::{FormatArgs, WorkbookArgs};
use crate::core::ComplexityTier;

#[derive(Parser)]
#[command(
    name = "sheet-scout",
    about = "🔎 Profile spreadsheet-based engineering calculators",
    long_about = "sheet-scout reads an Excel workbook and heuristically maps out its structure \
                  as an engineering calculator: which sheets hold inputs and results, where the \
                  formulas live and how tangled they are, which physical units and design \
                  standards appear, and how the sheets reference each other. The workbook is \
                  never modified.",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Produce the full structural profile of a calculator workbook
    ///
    /// Runs every analyzer over the workbook and reports sheet roles,
    /// input and output parameters, formula complexity, units, sheet
    /// dependencies, standards citations, and embedded documentation.
    #[command(
        long_about = "Run the complete analysis pass. Every sheet is classified by structural \
                      role, labeled cells are mined for input and output parameters, each formula \
                      is scored and decomposed, and workbook-level facts (units, standards, \
                      cross-sheet references, documentation) are collected into one report."
    )]
    Profile {
        #[command(flatten)]
        workbook: WorkbookArgs,

        #[command(flatten)]
        format: FormatArgs,

        /// Maximum parameters listed per role in human output (shows all if
        /// not specified)
        #[arg(long, env = "SHEET_SCOUT_MAX_PARAMETERS")]
        max_parameters: Option<usize>,
    },

    /// Show a condensed summary of what the calculator is and does
    ///
    /// Reports the inferred engineering domain and calculator type together
    /// with headline counts: inputs, outputs, formulas, units, standards,
    /// and the role of each sheet.
    #[command(
        long_about = "Print the cross-cutting summary derived from the full analysis. With \
                      --fast, only the cheap passes run (sheet survey and calculator \
                      identification), trading parameter, formula, and unit detail for speed on \
                      large workbooks."
    )]
    Summary {
        #[command(flatten)]
        workbook: WorkbookArgs,

        #[command(flatten)]
        format: FormatArgs,

        /// Skip the deep analyzers and report sheet survey + identification
        /// only
        #[arg(long, env = "SHEET_SCOUT_FAST")]
        fast: bool,
    },

    /// List and score the formulas in a workbook
    ///
    /// Shows every formula cell with its complexity tier, the functions it
    /// invokes, and the cell references it reads.
    #[command(
        long_about = "Enumerate formula cells per sheet with complexity scoring. Use --sheet to \
                      restrict the listing to one sheet (an unknown name is an error) and \
                      --min-complexity to hide formulas below a tier."
    )]
    Formulas {
        #[command(flatten)]
        workbook: WorkbookArgs,

        #[command(flatten)]
        format: FormatArgs,

        /// Only show formulas from this sheet
        #[arg(long, value_name = "SHEET_NAME", env = "SHEET_SCOUT_SHEET")]
        sheet: Option<String>,

        /// Hide formulas below this complexity tier
        #[arg(long, value_enum, env = "SHEET_SCOUT_MIN_COMPLEXITY")]
        min_complexity: Option<ComplexityTier>,
    },

    /// Map how sheets reference each other
    ///
    /// Shows, per sheet, the other sheets its formulas read from, and warns
    /// when sheets reference each other circularly.
    #[command(
        long_about = "Derive the directed sheet-to-sheet reference graph from quoted cross-sheet \
                      formula references and report it per source sheet. Mutually referencing \
                      groups of sheets are flagged as circular."
    )]
    Deps {
        #[command(flatten)]
        workbook: WorkbookArgs,

        #[command(flatten)]
        format: FormatArgs,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}
