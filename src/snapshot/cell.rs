//! Cell-level snapshot types

use std::fmt;

use serde::Serialize;

/// Render a 1-based column number as its spreadsheet letter form (1 → A,
/// 27 → AA).
pub fn column_letter(column: u32) -> String {
    debug_assert!(column >= 1, "columns are 1-based");
    let mut letters = Vec::new();
    let mut n = column;
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push((b'A' + rem as u8) as char);
        n = (n - 1) / 26;
    }
    letters.iter().rev().collect()
}

/// Immutable identity of a cell: sheet name plus 1-based row and column.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CellRef {
    pub sheet: String,
    pub row: u32,
    pub column: u32,
}

impl CellRef {
    pub fn new(sheet: impl Into<String>, row: u32, column: u32) -> Self {
        Self {
            sheet: sheet.into(),
            row,
            column,
        }
    }

    /// Column-letter + row address without the sheet name, e.g. `B4`.
    pub fn address(&self) -> String {
        format!("{}{}", column_letter(self.column), self.row)
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}!{}", self.sheet, self.address())
    }
}

/// Raw cell content as authored: a literal or the full formula text
/// (including the leading `=` marker).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellContent {
    Text(String),
    Number(f64),
    Bool(bool),
    Formula(String),
}

/// A cell's last-computed value, as cached by the producing application.
/// The analysis core never computes these itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellScalar {
    Number(f64),
    Text(String),
    Bool(bool),
}

impl CellScalar {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellScalar::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<f64> for CellScalar {
    fn from(value: f64) -> Self {
        CellScalar::Number(value)
    }
}

impl fmt::Display for CellScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellScalar::Number(n) => write!(f, "{n}"),
            CellScalar::Text(s) => write!(f, "{s}"),
            CellScalar::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// One non-empty cell: position, raw content, and (separately) the
/// evaluated value. Owned by the snapshot; analyzers only read it.
#[derive(Debug, Clone, PartialEq)]
pub struct CellSnapshot {
    pub row: u32,
    pub column: u32,
    pub content: CellContent,
    pub value: Option<CellScalar>,
}

impl CellSnapshot {
    pub fn is_formula(&self) -> bool {
        matches!(self.content, CellContent::Formula(_))
    }

    /// Formula text including the `=` marker, if this cell holds one.
    pub fn formula(&self) -> Option<&str> {
        match &self.content {
            CellContent::Formula(f) => Some(f),
            _ => None,
        }
    }

    /// Literal text content. Formula cells return `None`; their text lives
    /// behind [`CellSnapshot::formula`].
    pub fn text(&self) -> Option<&str> {
        match &self.content {
            CellContent::Text(t) => Some(t),
            _ => None,
        }
    }

    /// The evaluated value, if numeric.
    pub fn numeric_value(&self) -> Option<f64> {
        self.value.as_ref().and_then(CellScalar::as_number)
    }

    pub fn address(&self) -> String {
        format!("{}{}", column_letter(self.column), self.row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_letter_single() {
        assert_eq!(column_letter(1), "A");
        assert_eq!(column_letter(2), "B");
        assert_eq!(column_letter(26), "Z");
    }

    #[test]
    fn test_column_letter_multi() {
        assert_eq!(column_letter(27), "AA");
        assert_eq!(column_letter(52), "AZ");
        assert_eq!(column_letter(53), "BA");
        assert_eq!(column_letter(702), "ZZ");
        assert_eq!(column_letter(703), "AAA");
    }

    #[test]
    fn test_cell_ref_address() {
        let cell = CellRef::new("Inputs", 4, 2);
        assert_eq!(cell.address(), "B4");
        assert_eq!(cell.to_string(), "Inputs!B4");
    }

    #[test]
    fn test_cell_snapshot_formula_accessors() {
        let cell = CellSnapshot {
            row: 3,
            column: 2,
            content: CellContent::Formula("=B2*2".to_string()),
            value: Some(CellScalar::Number(90.4)),
        };
        assert!(cell.is_formula());
        assert_eq!(cell.formula(), Some("=B2*2"));
        assert_eq!(cell.text(), None);
        assert_eq!(cell.numeric_value(), Some(90.4));
    }

    #[test]
    fn test_cell_snapshot_text_accessors() {
        let cell = CellSnapshot {
            row: 1,
            column: 1,
            content: CellContent::Text("Applied Pressure (psi)".to_string()),
            value: Some(CellScalar::Text("Applied Pressure (psi)".to_string())),
        };
        assert!(!cell.is_formula());
        assert_eq!(cell.text(), Some("Applied Pressure (psi)"));
        assert_eq!(cell.formula(), None);
        assert_eq!(cell.numeric_value(), None);
    }
}
