use crate::models::column::{ColumnKey, ColumnSet};
use crate::utils::sort_utils::{build_sort_options, decode_sort_option, encode_sort_option};
use serde::{Deserialize, Serialize};

/// Sort direction, serialized in the `asc`/`desc` form the backend query
/// parameters use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn is_ascending(&self) -> bool {
        matches!(self, SortDirection::Asc)
    }

    pub fn toggled(&self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// The (column, direction) pair currently applied to a table's display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSelection {
    pub column: usize,
    pub direction: SortDirection,
}

impl SortSelection {
    pub fn new(column: usize, direction: SortDirection) -> Self {
        Self { column, direction }
    }

    pub fn ascending(column: usize) -> Self {
        Self::new(column, SortDirection::Asc)
    }
}

/// Sort state of a result table, as held by the view that renders it.
///
/// The dropdown widget driving the table is a single-select list of display
/// strings, so this wraps the option codec in both directions and keeps the
/// structured selection as the source of truth.
#[derive(Debug, Clone)]
pub struct TableSort {
    columns: ColumnSet,
    selection: SortSelection,
}

impl TableSort {
    /// Creates the sort state for a view, starting on the given default
    /// column. An unknown default falls back to the first column, ascending.
    pub fn new(columns: ColumnSet, default_column: ColumnKey, direction: SortDirection) -> Self {
        let selection = match columns.position(default_column) {
            Some(position) => SortSelection::new(position, direction),
            None => {
                tracing::warn!(
                    "Default sort column {} is not part of the column set",
                    default_column.as_str()
                );
                SortSelection::ascending(0)
            }
        };

        Self { columns, selection }
    }

    pub fn columns(&self) -> &ColumnSet {
        &self.columns
    }

    pub fn selection(&self) -> SortSelection {
        self.selection
    }

    /// The dropdown entries for this table.
    pub fn options(&self) -> Vec<String> {
        build_sort_options(&self.columns)
    }

    /// Display label of the current selection. `None` only when the column
    /// set is empty.
    pub fn selected_label(&self) -> Option<String> {
        encode_sort_option(self.selection, &self.columns)
    }

    /// Applies a dropdown pick. Returns false and keeps the current
    /// selection when the label is not one of this table's options.
    pub fn select_option(&mut self, label: &str) -> bool {
        match decode_sort_option(label, &self.columns) {
            Some(selection) => {
                self.selection = selection;
                true
            }
            None => {
                tracing::warn!("Unknown sort option selected: {label}");
                false
            }
        }
    }

    /// Applies a column header click: the same column toggles direction,
    /// a different column is selected ascending. Out of range is a no-op.
    pub fn sort_by_column(&mut self, column: usize) {
        if column >= self.columns.len() {
            return;
        }

        if column == self.selection.column {
            self.selection.direction = self.selection.direction.toggled();
        } else {
            self.selection = SortSelection::ascending(column);
        }
    }

    /// Sort parameters in the form the data-fetch layer sends to the
    /// backend.
    pub fn sort_params(&self) -> Option<(&'static str, &'static str)> {
        self.columns
            .get(self.selection.column)
            .map(|c| (c.key.as_str(), self.selection.direction.as_str()))
    }
}
