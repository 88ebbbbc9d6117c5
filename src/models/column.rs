use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifier of a sortable field exposed by a result table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ColumnKey {
    LastSalePrice,
    LastAppraisal,
    ListPrice,
    AppraisalDifference,
    ListedDate,
    FloorPrice,
    Volume,
    SaleCount,
}

impl ColumnKey {
    /// Wire form of the key, as the backend sort parameter expects it.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnKey::LastSalePrice => "LAST_SALE_PRICE",
            ColumnKey::LastAppraisal => "LAST_APPRAISAL",
            ColumnKey::ListPrice => "LIST_PRICE",
            ColumnKey::AppraisalDifference => "APPRAISAL_DIFFERENCE",
            ColumnKey::ListedDate => "LISTED_DATE",
            ColumnKey::FloorPrice => "FLOOR_PRICE",
            ColumnKey::Volume => "VOLUME",
            ColumnKey::SaleCount => "SALE_COUNT",
        }
    }
}

/// A sortable column: stable key plus the heading shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortColumn {
    pub key: ColumnKey,
    pub label: String,
}

impl SortColumn {
    pub fn new(key: ColumnKey, label: &str) -> Self {
        Self {
            key,
            label: label.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ColumnSetError {
    #[error("Duplicate column key: {0}")]
    DuplicateKey(String),
}

/// Ordered set of the sortable columns a result table exposes.
///
/// Insertion order is canonical: it defines the column indices used by the
/// sort option codec and everything downstream of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSet {
    columns: Vec<SortColumn>,
}

impl ColumnSet {
    pub fn new(columns: Vec<SortColumn>) -> Result<Self, ColumnSetError> {
        for (i, column) in columns.iter().enumerate() {
            if columns[..i].iter().any(|c| c.key == column.key) {
                return Err(ColumnSetError::DuplicateKey(column.key.as_str().to_string()));
            }
        }

        Ok(Self { columns })
    }

    /// Columns of the asset market table: sale and appraisal history, the
    /// current listing, and how far the listing sits from the appraisal.
    pub fn asset_market() -> Self {
        Self {
            columns: vec![
                SortColumn::new(ColumnKey::LastSalePrice, "Last sale price"),
                SortColumn::new(ColumnKey::LastAppraisal, "Last appraisal"),
                SortColumn::new(ColumnKey::ListPrice, "List price"),
                SortColumn::new(ColumnKey::AppraisalDifference, "% Difference"),
            ],
        }
    }

    /// Columns of the collection overview table.
    pub fn collection_overview() -> Self {
        Self {
            columns: vec![
                SortColumn::new(ColumnKey::FloorPrice, "Floor price"),
                SortColumn::new(ColumnKey::Volume, "Volume"),
                SortColumn::new(ColumnKey::SaleCount, "Sales"),
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SortColumn> {
        self.columns.get(index)
    }

    /// Position of the given key in column order.
    pub fn position(&self, key: ColumnKey) -> Option<usize> {
        self.columns.iter().position(|c| c.key == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SortColumn> {
        self.columns.iter()
    }
}
