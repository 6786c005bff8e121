//! Column descriptors

use serde::Serialize;

/// Horizontal alignment for column content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// How a column's cells are produced.
///
/// Every column declares one of a fixed set of kinds; there are no render
/// closures, so column sets stay plain data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum CellKind {
    /// The field's value as text.
    Text,
    /// The value rendered as a labeled tag (roles, audit actions).
    Badge,
    /// The value parsed and formatted as a date.
    Date,
    /// Date plus a second time line, used by audit trails.
    DateTime,
    /// 1-based ordinal computed from the pagination offset.
    RowNumber,
    /// "First Last" built from name fields, falling back to the email and
    /// then to a fixed unknown-user label.
    FullName,
    /// Per-row action buttons, reported to the caller by name.
    Actions(Vec<String>),
}

/// Column configuration.
///
/// Columns define the structure of the grid: the field key looked up on
/// each row, header text, width, alignment, sortability, and cell kind.
///
/// # Examples
///
/// ```ignore
/// let columns = vec![
///     Column::row_number("Sr. No"),
///     Column::new("institute_name", "Institute Name", 28),
///     Column::new("created_at", "Joined Date", 14).kind(CellKind::Date),
///     Column::actions("Actions", &["edit", "delete"]),
/// ];
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Column {
    /// Field key looked up on each row.
    pub field: String,
    /// Column header text.
    pub header: String,
    /// Column width hint in characters.
    pub width: u16,
    /// Horizontal alignment.
    pub align: Alignment,
    /// Whether header clicks sort this column.
    pub sortable: bool,
    /// How cells in this column are produced.
    pub kind: CellKind,
}

impl Column {
    /// Create a new sortable text column with explicit width.
    pub fn new(field: impl Into<String>, header: impl Into<String>, width: u16) -> Self {
        Self {
            field: field.into(),
            header: header.into(),
            width,
            align: Alignment::Left,
            sortable: true,
            kind: CellKind::Text,
        }
    }

    /// An ordinal column, numbered across pages. Not sortable.
    pub fn row_number(header: impl Into<String>) -> Self {
        let mut column = Self::new("id", header, 7);
        column.sortable = false;
        column.kind = CellKind::RowNumber;
        column
    }

    /// A per-row action column. Not sortable.
    pub fn actions(header: impl Into<String>, names: &[&str]) -> Self {
        let mut column = Self::new("actions", header, 12);
        column.sortable = false;
        column.align = Alignment::Center;
        column.kind = CellKind::Actions(names.iter().map(|name| name.to_string()).collect());
        column
    }

    /// Set the column alignment.
    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Exclude the column from header-click sorting.
    pub fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    /// Set the cell kind.
    pub fn kind(mut self, kind: CellKind) -> Self {
        self.kind = kind;
        self
    }
}
