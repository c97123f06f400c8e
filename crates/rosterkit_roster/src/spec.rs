//! Roster specification models and top-level error types.

use std::borrow::Borrow;
use std::fmt;
use std::path::PathBuf;

use polars::prelude::PolarsError;
use thiserror::Error;

use crate::conf::{C_PATTERN_CLASS_COLUMN, C_PATTERN_NAME_COLUMN, TUP_CLASS_SLOT_HEADERS};

////////////////////////////////////////////////////////////////////////////////
// #region CellValues

/// Raw cell value read from a questionnaire table.
#[derive(Debug, Clone, PartialEq)]
pub enum EnumCellValue {
    /// Missing/blank value.
    None,
    /// Text value.
    String(String),
    /// Numeric value (may be NaN).
    Number(f64),
}

impl EnumCellValue {
    /// True for blank cells, whitespace-only text and numeric NaN.
    pub fn is_missing(&self) -> bool {
        match self {
            EnumCellValue::None => true,
            EnumCellValue::Number(n) => n.is_nan(),
            EnumCellValue::String(s) => s.trim().is_empty(),
        }
    }
}

impl From<&str> for EnumCellValue {
    fn from(value: &str) -> Self {
        EnumCellValue::String(value.to_string())
    }
}

impl From<Option<&str>> for EnumCellValue {
    fn from(value: Option<&str>) -> Self {
        value.map_or(EnumCellValue::None, EnumCellValue::from)
    }
}

impl From<f64> for EnumCellValue {
    fn from(value: f64) -> Self {
        EnumCellValue::Number(value)
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region RosterModels

/// Normalized class code: uppercase alphabetic prefix, one space, suffix.
///
/// Only produced by [`crate::util::parse_class_code`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassCode(pub(crate) String);

impl ClassCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ClassCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for ClassCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ClassCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// One questionnaire row: respondent identifier plus raw class slots.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecRespondent {
    /// Respondent identifier.
    pub name: String,
    /// Raw class slot cells in slot order.
    pub classes: Vec<EnumCellValue>,
}

impl SpecRespondent {
    pub fn new<I, V>(name: impl Into<String>, classes: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<EnumCellValue>,
    {
        Self {
            name: name.into(),
            classes: classes.into_iter().map(Into::into).collect(),
        }
    }
}

/// Rectangular class table: one row per class, one column per member slot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpecClassTable {
    /// Row labels (normalized class codes), in roster order.
    pub class_codes: Vec<ClassCode>,
    /// Member cells per row, padded with `None` to [`Self::width`].
    pub rows: Vec<Vec<Option<String>>>,
}

impl SpecClassTable {
    /// Number of class rows.
    pub fn height(&self) -> usize {
        self.class_codes.len()
    }

    /// Number of member columns (longest member list).
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Options

/// Column lookup options for questionnaire extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecRosterOptions {
    /// Substring matched (case-insensitive) against headers to find the name column.
    pub pattern_name_column: String,
    /// Substring matched (case-insensitive) against headers to find class columns.
    pub pattern_class_column: String,
    /// Exact headers of the class slot columns, in slot order.
    pub class_slot_headers: Vec<String>,
}

impl Default for SpecRosterOptions {
    fn default() -> Self {
        Self {
            pattern_name_column: C_PATTERN_NAME_COLUMN.to_string(),
            pattern_class_column: C_PATTERN_CLASS_COLUMN.to_string(),
            class_slot_headers: TUP_CLASS_SLOT_HEADERS
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Errors

/// Top-level error for questionnaire extraction.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("no column header contains {pattern:?}; ensure the questionnaire has a name column")]
    MissingNameColumn { pattern: String },

    #[error("name column {column:?} is empty")]
    EmptyNameColumn { column: String },

    #[error("class slot column not found: {0:?}")]
    MissingClassColumn(String),

    #[error("failed to read questionnaire {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: PolarsError,
    },

    #[error("polars error: {0}")]
    Polars(#[from] PolarsError),
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
