use crate::models::column::ColumnKey;
use crate::models::sort::SortDirection;
use config::{Config, File, FileFormat};
use serde::Deserialize;

/// Sort applied to a table before any user interaction.
#[derive(Debug, Deserialize)]
pub struct DefaultSort {
    pub column: ColumnKey,
    pub direction: SortDirection,
}

/// Per-view tuning knobs, loaded from a YAML file at startup.
#[derive(Debug, Deserialize)]
pub struct ViewConfig {
    pub items_per_page: i64,
    pub display_decimals: i64,
    pub default_sort: DefaultSort,
}

impl ViewConfig {
    pub fn load_from_file(config_path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let builder = Config::builder();
        let settings = builder
            .add_source(File::new(config_path, FileFormat::Yaml))
            .build()?;
        let config: ViewConfig = settings.try_deserialize()?;

        Ok(config)
    }
}
