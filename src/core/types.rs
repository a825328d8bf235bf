//! Report type definitions
//!
//! The value types assembled into an [`AnalysisReport`], with minimal
//! logic — focusing on data representation. All derived collections use
//! sorted containers so two analyses of an unchanged snapshot serialize
//! byte-identically.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::Serialize;

use crate::snapshot::CellRef;

/// Structural role of a sheet, decided by the ordered classification rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SheetType {
    #[serde(rename = "Input/Configuration")]
    InputConfiguration,
    #[serde(rename = "Output/Results")]
    OutputResults,
    #[serde(rename = "Calculation")]
    Calculation,
    #[serde(rename = "Lookup Table")]
    LookupTable,
    #[serde(rename = "Data/Constants")]
    DataConstants,
    #[serde(rename = "Unknown")]
    Unknown,
}

impl fmt::Display for SheetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SheetType::InputConfiguration => "Input/Configuration",
            SheetType::OutputResults => "Output/Results",
            SheetType::Calculation => "Calculation",
            SheetType::LookupTable => "Lookup Table",
            SheetType::DataConstants => "Data/Constants",
            SheetType::Unknown => "Unknown",
        };
        write!(f, "{label}")
    }
}

/// Per-sheet survey: extent, cell counts, and classified role. Created once
/// per analysis run.
#[derive(Debug, Clone, Serialize)]
pub struct SheetInfo {
    pub name: String,
    pub max_row: u32,
    pub max_column: u32,
    pub formula_count: usize,
    pub data_cell_count: usize,
    pub sheet_type: SheetType,
}

/// Whether a parameter was matched by the input or the output keyword set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterRole {
    Input,
    Output,
}

impl fmt::Display for ParameterRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterRole::Input => write!(f, "input"),
            ParameterRole::Output => write!(f, "output"),
        }
    }
}

/// A cell identified by heuristic keyword match as an engineering quantity.
///
/// The same cell may appear once per role when its label text matches both
/// keyword sets; the two extraction passes are independent by design.
#[derive(Debug, Clone, Serialize)]
pub struct Parameter {
    /// The matched label text.
    pub name: String,
    pub location: CellRef,
    pub value: Option<crate::snapshot::CellScalar>,
    pub unit: Option<String>,
    pub formula: Option<String>,
    pub role: ParameterRole,
}

/// Complexity tier of a formula, derived from weighted function usage.
/// Ordered so tiers compare monotonically.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum ComplexityTier {
    Simple,
    Moderate,
    Complex,
    VeryComplex,
}

impl fmt::Display for ComplexityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ComplexityTier::Simple => "simple",
            ComplexityTier::Moderate => "moderate",
            ComplexityTier::Complex => "complex",
            ComplexityTier::VeryComplex => "very_complex",
        };
        write!(f, "{label}")
    }
}

/// One formula cell: full text, complexity, functions invoked, and the
/// cell/sheet references it reads.
#[derive(Debug, Clone, Serialize)]
pub struct FormulaRecord {
    pub location: CellRef,
    pub formula: String,
    pub complexity: ComplexityTier,
    pub functions: BTreeSet<String>,
    pub references: BTreeSet<String>,
}

/// Physical-unit category, in detection priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitCategory {
    Length,
    Area,
    Volume,
    Mass,
    Force,
    Pressure,
    Time,
    Temperature,
    Angle,
    Frequency,
}

impl UnitCategory {
    pub const ALL: [UnitCategory; 10] = [
        UnitCategory::Length,
        UnitCategory::Area,
        UnitCategory::Volume,
        UnitCategory::Mass,
        UnitCategory::Force,
        UnitCategory::Pressure,
        UnitCategory::Time,
        UnitCategory::Temperature,
        UnitCategory::Angle,
        UnitCategory::Frequency,
    ];
}

impl fmt::Display for UnitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            UnitCategory::Length => "length",
            UnitCategory::Area => "area",
            UnitCategory::Volume => "volume",
            UnitCategory::Mass => "mass",
            UnitCategory::Force => "force",
            UnitCategory::Pressure => "pressure",
            UnitCategory::Time => "time",
            UnitCategory::Temperature => "temperature",
            UnitCategory::Angle => "angle",
            UnitCategory::Frequency => "frequency",
        };
        write!(f, "{label}")
    }
}

/// Distinct unit tokens observed per category, each set sorted
/// lexicographically. Every category is present, possibly empty.
#[derive(Debug, Clone, Serialize)]
pub struct UnitCatalog {
    #[serde(flatten)]
    pub by_category: BTreeMap<UnitCategory, BTreeSet<String>>,
}

impl UnitCatalog {
    /// All detected tokens across categories, deduplicated and sorted.
    pub fn all_units(&self) -> BTreeSet<String> {
        self.by_category.values().flatten().cloned().collect()
    }
}

/// Dominant measurement system inferred from detected unit tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UnitSystem {
    #[serde(rename = "Metric/SI")]
    Metric,
    #[serde(rename = "Imperial/US Customary")]
    Imperial,
    #[serde(rename = "Mixed")]
    Mixed,
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            UnitSystem::Metric => "Metric/SI",
            UnitSystem::Imperial => "Imperial/US Customary",
            UnitSystem::Mixed => "Mixed",
        };
        write!(f, "{label}")
    }
}

/// Counts of distinct metric and imperial tokens plus the dominant system.
#[derive(Debug, Clone, Serialize)]
pub struct UnitSystemBreakdown {
    pub metric_count: usize,
    pub imperial_count: usize,
    pub dominant: UnitSystem,
}

/// A cell whose text matched a validation/constraint keyword.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationRule {
    pub location: CellRef,
    pub rule_text: String,
}

/// Long free-text cells classified into documentation buckets. Bucket
/// contents keep workbook scan order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DocumentationBundle {
    pub descriptions: Vec<String>,
    pub notes: Vec<String>,
    pub references: Vec<String>,
    pub standards: Vec<String>,
}

impl DocumentationBundle {
    pub fn is_empty(&self) -> bool {
        self.descriptions.is_empty()
            && self.notes.is_empty()
            && self.references.is_empty()
            && self.standards.is_empty()
    }
}

/// Directed sheet-to-sheet reference graph derived from quoted cross-sheet
/// formula references.
#[derive(Debug, Clone, Serialize)]
pub struct SheetDependencies {
    /// Source sheet → sheets its formulas reference by quoted name. Sheets
    /// without cross-sheet references map to an empty set.
    pub references: BTreeMap<String, BTreeSet<String>>,
    /// Groups of sheets that reference each other in a cycle, sorted.
    pub circular: Vec<Vec<String>>,
}

impl SheetDependencies {
    pub fn has_circular_references(&self) -> bool {
        !self.circular.is_empty()
    }
}

/// Coarse engineering-discipline profile inferred from sheet-name
/// vocabulary.
#[derive(Debug, Clone, Serialize)]
pub struct CalculatorProfile {
    pub file_name: String,
    pub sheet_names: Vec<String>,
    pub total_sheets: usize,
    pub calculator_type: String,
    pub engineering_domain: String,
    pub purpose: String,
}

/// Condensed cross-cutting view derived by the aggregator.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisSummary {
    pub calculator_type: String,
    pub engineering_domain: String,
    pub total_inputs: usize,
    pub total_outputs: usize,
    pub total_formulas: usize,
    pub units_used: Vec<String>,
    pub standards_referenced: Vec<String>,
    pub sheet_types: BTreeMap<String, SheetType>,
}

/// The immutable aggregate of all sub-analyses for one analysis run. Has no
/// lifecycle beyond the call that produced it.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub calculator: CalculatorProfile,
    pub sheets: Vec<SheetInfo>,
    pub input_parameters: Vec<Parameter>,
    pub output_parameters: Vec<Parameter>,
    pub formulas: BTreeMap<String, Vec<FormulaRecord>>,
    pub units: UnitCatalog,
    pub unit_systems: UnitSystemBreakdown,
    pub validation_rules: Vec<ValidationRule>,
    pub documentation: DocumentationBundle,
    pub dependencies: SheetDependencies,
    pub standards: Vec<String>,
    pub summary: AnalysisSummary,
}

impl AnalysisReport {
    pub fn total_formulas(&self) -> usize {
        self.formulas.values().map(Vec::len).sum()
    }
}
