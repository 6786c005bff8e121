//! Row access trait

use crate::value::CellValue;

/// Read-only access the grid needs over one row.
///
/// Implemented on the application side, usually by a thin adapter over the
/// entity model. The grid never mutates rows; it reads fields through
/// [`GridRow::value`] and keys selection and actions by [`GridRow::id`].
///
/// # Example
///
/// ```ignore
/// impl GridRow for InstituteRow {
///     fn id(&self) -> i64 {
///         self.0.id
///     }
///
///     fn value(&self, field: &str) -> CellValue {
///         match field {
///             "institute_name" => self.0.institute_name.clone().into(),
///             "location" => self.0.location.clone().into(),
///             _ => CellValue::Null,
///         }
///     }
/// }
/// ```
pub trait GridRow: Clone + Send + Sync + 'static {
    /// Stable identifier for selection and action dispatch.
    fn id(&self) -> i64;

    /// The value behind a column's field key.
    ///
    /// Unknown fields return [`CellValue::Null`].
    fn value(&self, field: &str) -> CellValue;
}
