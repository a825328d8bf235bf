//! Configuration constants for sheet-scout
//!
//! This module contains the tunable constants used throughout the
//! application, hoisted out of the scanning logic so they can be audited
//! and tested independently.

use std::time::Duration;

/// Progress bar configuration
pub mod progress {
    use super::*;

    /// Duration between progress bar updates
    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

    /// Spinner frames shown while a workbook is being scanned
    pub const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];
}

/// Output formatting configuration
pub mod output {
    /// Default output format when not specified
    pub const DEFAULT_FORMAT: &str = "human";

    /// Parameters listed per role in human reports before truncation
    pub const DEFAULT_MAX_PARAMETERS: usize = 20;
}

/// Sheet classification thresholds (rules 4 and 6 of the classifier)
pub mod classify {
    /// A sheet with more formulas than this is a calculation sheet even
    /// when its name carries no signal.
    pub const FORMULA_HEAVY_THRESHOLD: usize = 20;

    /// Minimum non-empty cells for a sheet to count as data/constants.
    pub const DATA_HEAVY_THRESHOLD: usize = 50;

    /// A data/constants sheet must have fewer formulas than this.
    pub const SPARSE_FORMULA_LIMIT: usize = 5;
}

/// Documentation extraction configuration
pub mod documentation {
    /// Only text cells longer than this many characters are eligible as
    /// documentation.
    pub const MIN_DOC_LENGTH: usize = 20;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_constants() {
        assert_eq!(progress::TICK_INTERVAL, Duration::from_millis(100));
        assert!(!progress::SPINNER_FRAMES.is_empty());
    }

    #[test]
    fn test_output_constants() {
        assert_eq!(output::DEFAULT_FORMAT, "human");
        assert_eq!(output::DEFAULT_MAX_PARAMETERS, 20);
    }

    #[test]
    fn test_classifier_thresholds() {
        assert_eq!(classify::FORMULA_HEAVY_THRESHOLD, 20);
        assert_eq!(classify::DATA_HEAVY_THRESHOLD, 50);
        assert_eq!(classify::SPARSE_FORMULA_LIMIT, 5);
        assert!(classify::SPARSE_FORMULA_LIMIT < classify::FORMULA_HEAVY_THRESHOLD);
    }

    #[test]
    fn test_documentation_constants() {
        assert_eq!(documentation::MIN_DOC_LENGTH, 20);
    }
}
