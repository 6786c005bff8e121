//! Typed cell values

use chrono::DateTime;
use chrono::NaiveDate;
use chrono::NaiveDateTime;
use chrono::Utc;
use serde::Serialize;

/// A single cell's typed value.
///
/// Rows surface their fields as `CellValue` so that sorting and rendering
/// stay data-driven instead of running caller-supplied closures per cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum CellValue {
    /// Absent or null field.
    Null,
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    /// A parsed timestamp. Sorting compares these chronologically.
    Date(DateTime<Utc>),
}

impl CellValue {
    /// Returns `true` for [`CellValue::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Builds a text value, or `Null` when absent.
    pub fn text_or_null(value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => Self::Text(value.into()),
            None => Self::Null,
        }
    }

    /// Parses a wire date string, keeping the raw text when it does not
    /// look like a date, and `Null` when absent.
    pub fn date_or_text(value: Option<String>) -> Self {
        match value {
            Some(raw) => match parse_wire_date(&raw) {
                Some(parsed) => Self::Date(parsed),
                None => Self::Text(raw),
            },
            None => Self::Null,
        }
    }

    /// The value as a number, when it is one.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Int(value) => Some(*value as f64),
            Self::Float(value) => Some(*value),
            _ => None,
        }
    }

    /// The cell's display text. `Null` renders as `"-"`.
    pub fn display(&self) -> String {
        match self {
            Self::Null => "-".to_string(),
            Self::Text(value) => value.clone(),
            Self::Int(value) => value.to_string(),
            Self::Float(value) => value.to_string(),
            Self::Bool(value) => if *value { "Yes" } else { "No" }.to_string(),
            Self::Date(value) => value.format("%d/%m/%Y").to_string(),
        }
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Option<String>> for CellValue {
    fn from(value: Option<String>) -> Self {
        Self::text_or_null(value)
    }
}

impl From<Option<i64>> for CellValue {
    fn from(value: Option<i64>) -> Self {
        value.map(Self::Int).unwrap_or(Self::Null)
    }
}

impl From<Option<f64>> for CellValue {
    fn from(value: Option<f64>) -> Self {
        value.map(Self::Float).unwrap_or(Self::Null)
    }
}

/// Parses the date spellings the backend uses: RFC 3339 timestamps,
/// `YYYY-MM-DD HH:MM:SS`, and bare `YYYY-MM-DD`.
pub fn parse_wire_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(parsed.and_utc());
    }
    if let Ok(parsed) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return parsed.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }
    None
}
