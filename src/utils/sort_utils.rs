use crate::models::column::ColumnSet;
use crate::models::sort::{SortDirection, SortSelection};

/// Suffix of an ascending sort option label.
pub const SORT_ASC_SUFFIX: &str = ": low to high";
/// Suffix of a descending sort option label.
pub const SORT_DESC_SUFFIX: &str = ": high to low";

/// Returns the flat dropdown option list for the given columns: two entries
/// per column in column order, ascending first.
pub fn build_sort_options(columns: &ColumnSet) -> Vec<String> {
    let mut options = Vec::with_capacity(columns.len() * 2);

    for column in columns.iter() {
        options.push(format!("{}{}", column.label, SORT_ASC_SUFFIX));
        options.push(format!("{}{}", column.label, SORT_DESC_SUFFIX));
    }

    options
}

/// Maps a dropdown option label back to the selection it encodes.
/// Returns `None` when the label is not one of the generated options.
pub fn decode_sort_option(label: &str, columns: &ColumnSet) -> Option<SortSelection> {
    let position = build_sort_options(columns)
        .iter()
        .position(|option| option.as_str() == label)?;

    let direction = if position % 2 == 0 {
        SortDirection::Asc
    } else {
        SortDirection::Desc
    };

    Some(SortSelection::new(position / 2, direction))
}

/// Inverse of [`decode_sort_option`]: the display label of a selection.
/// Returns `None` when the column index is out of range.
pub fn encode_sort_option(selection: SortSelection, columns: &ColumnSet) -> Option<String> {
    let column = columns.get(selection.column)?;
    let suffix = if selection.direction.is_ascending() {
        SORT_ASC_SUFFIX
    } else {
        SORT_DESC_SUFFIX
    };

    Some(format!("{}{}", column.label, suffix))
}
