use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::chart::{DualAxisChartConfig, PieChartConfig};
use crate::data::data_view::ViewConfig;
use crate::data::datatable::DataTable;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data: DataConfig,
    pub views: ViewsConfig,
    pub export: ExportConfig,
    pub charts: ChartsConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Registered foreign residents by district
    pub registered_path: PathBuf,

    /// Generated customer/product records
    pub synthetic_path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewsConfig {
    pub registered: ViewDefaults,
    pub synthetic: ViewDefaults,
}

/// Initial column selection and order for a dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewDefaults {
    /// Preselect only the first N columns; unset selects all
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_column_count: Option<usize>,

    pub sort_ascending: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Download file name; empty means a timestamped name
    pub file_name: String,
    pub mime: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartsConfig {
    pub nationality: PieChartConfig,
    pub visa: DualAxisChartConfig,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            registered_path: PathBuf::from("foreigner_ingu_merged2.csv"),
            synthetic_path: PathBuf::from("preprocessed_data.csv"),
        }
    }
}

impl Default for ViewsConfig {
    fn default() -> Self {
        Self {
            registered: ViewDefaults {
                default_column_count: Some(8),
                sort_ascending: true,
            },
            synthetic: ViewDefaults::default(),
        }
    }
}

impl Default for ViewDefaults {
    fn default() -> Self {
        Self {
            default_column_count: None,
            sort_ascending: true,
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            file_name: "foreigner_ingu_merged2.csv".to_string(),
            mime: crate::data::data_exporter::CSV_MIME.to_string(),
        }
    }
}

impl ViewDefaults {
    /// Initial view config for `table`: the leading columns, sorted on the first
    pub fn view_config(&self, table: &DataTable) -> ViewConfig {
        let names = table.column_names();
        let take = self.default_column_count.unwrap_or(names.len());
        let selected: Vec<String> = names.into_iter().take(take).collect();
        let sort_column = selected.first().cloned();

        ViewConfig {
            selected_columns: selected,
            sort_column,
            sort_ascending: self.sort_ascending,
        }
    }
}

impl Config {
    /// Load config from the default location, creating it on first run
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save()?;
            return Ok(default_config);
        }

        Self::load_from(&config_path)
    }

    /// Load config from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        Ok(config)
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;

        Ok(())
    }

    /// Get the default config file path
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(config_dir.join("finrec-dash").join("config.toml"))
    }

    /// Create a default config file with comments
    pub fn create_default_with_comments() -> Result<String> {
        let body = toml::to_string_pretty(&Self::default())?;
        Ok(format!(
            r#"# finrec-dash configuration
# Location: ~/.config/finrec-dash/config.toml (Linux)
#           ~/Library/Application Support/finrec-dash/config.toml (macOS)
#           %APPDATA%\finrec-dash\config.toml (Windows)
#
# [data]            CSV files for the registered-resident and synthetic datasets
# [views.*]         default_column_count preselects the leading N columns
# [export]          download file name and MIME type
# [charts.*]        record tables and styling for the two charts;
#                   charts.visa.secondary_max fixes the percentage axis range

{}"#,
            body
        ))
    }
}
