use miette::Result;

/// Main entry point for the sheet-scout CLI tool
fn main() -> Result<()> {
    // Install miette's panic and error handler for beautiful error reporting
    miette::set_panic_hook();

    // Run the library's main function
    sheet_scout::run()
}
