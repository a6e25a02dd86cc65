//! Column descriptors and sort state
//!
//! Columns are built once from the entry shape and afterwards only their
//! sort state changes, always through [`apply_sort`].

use super::entry::Entry;

/// Sort direction of the active sort column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> SortDirection {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn indicator(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

/// Per-column sort state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortState {
    #[default]
    Unsorted,
    Sorted(SortDirection),
}

/// Metadata describing how one field is displayed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDescriptor {
    pub key: String,
    pub name: String,
    pub field_name: String,
    pub min_width: u16,
    pub max_width: u16,
    pub sort: SortState,
}

impl ColumnDescriptor {
    pub fn new(key: &str, name: &str, field_name: &str, min_width: u16, max_width: u16) -> Self {
        Self {
            key: key.to_string(),
            name: name.to_string(),
            field_name: field_name.to_string(),
            min_width,
            max_width,
            sort: SortState::Unsorted,
        }
    }

    pub fn is_sorted(&self) -> bool {
        matches!(self.sort, SortState::Sorted(_))
    }

    /// Direction the column sorts in when activated: flip if it is already
    /// the sorted column, otherwise start ascending.
    pub fn next_direction(&self) -> SortDirection {
        match self.sort {
            SortState::Sorted(direction) => direction.flipped(),
            SortState::Unsorted => SortDirection::Ascending,
        }
    }

    /// Header text including the sort indicator
    pub fn header_label(&self) -> String {
        match self.sort {
            SortState::Sorted(direction) => format!("{} {}", self.name, direction.indicator()),
            SortState::Unsorted => self.name.clone(),
        }
    }
}

const INFERRED_MIN_WIDTH: u16 = 8;
const INFERRED_MAX_WIDTH: u16 = 20;

/// Derive one descriptor per field present on the first record.
pub fn infer_columns(items: &[Entry]) -> Vec<ColumnDescriptor> {
    let Some(first) = items.first() else {
        return Vec::new();
    };

    Entry::FIELD_NAMES
        .iter()
        .filter(|name| first.field(name).is_some())
        .map(|name| {
            ColumnDescriptor::new(name, name, name, INFERRED_MIN_WIDTH, INFERRED_MAX_WIDTH)
        })
        .collect()
}

/// Hand-authored display columns
pub fn display_columns() -> Vec<ColumnDescriptor> {
    vec![
        ColumnDescriptor::new("name", "Asset", "asset", 14, 24),
        ColumnDescriptor::new("country", "Country", "country", 7, 7),
        ColumnDescriptor::new("ta", "TA", "TA", 10, 16),
        ColumnDescriptor::new("indication", "Indication", "indication", 14, 24),
        ColumnDescriptor::new("subclassification", "Sub Classification", "subclassification", 10, 20),
        ColumnDescriptor::new("status", "Status", "status", 6, 8),
        ColumnDescriptor::new("modifiedBy", "Modified By", "modifiedBy", 10, 16),
        ColumnDescriptor::new("lastModified", "Last Modified", "lastModified", 10, 15),
    ]
}

/// Build the columns shown by the list view.
///
/// Inference runs first so that display columns pointing at a field the
/// records do not carry are reported; the display list then replaces the
/// inferred set.
pub fn build_columns(items: &[Entry]) -> Vec<ColumnDescriptor> {
    let inferred = infer_columns(items);
    let columns = display_columns();

    if !inferred.is_empty() {
        for column in &columns {
            if !inferred.iter().any(|c| c.field_name == column.field_name) {
                tracing::warn!(
                    "Display column {} refers to unknown field {}",
                    column.key,
                    column.field_name
                );
            }
        }
    }

    columns
}

/// Return a new column list where only `key` is sorted, in `direction`.
pub fn apply_sort(
    columns: &[ColumnDescriptor],
    key: &str,
    direction: SortDirection,
) -> Vec<ColumnDescriptor> {
    columns
        .iter()
        .map(|column| {
            let sort = if column.key == key {
                SortState::Sorted(direction)
            } else {
                SortState::Unsorted
            };
            ColumnDescriptor {
                sort,
                ..column.clone()
            }
        })
        .collect()
}
