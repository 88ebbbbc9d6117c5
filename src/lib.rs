pub mod models;
pub mod utils;

pub use models::asset::{AssetMarketData, AssetMarketRow};
pub use models::column::{ColumnKey, ColumnSet, ColumnSetError, SortColumn};
pub use models::sort::{SortDirection, SortSelection, TableSort};
pub use utils::app_config::ViewConfig;
