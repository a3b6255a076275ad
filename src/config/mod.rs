// ==========================================
// Cross Check - configuration layer
// ==========================================
// Where the store lives and where the three source files come from.
// Stored as a small JSON file; every field has a default matching
// the legacy deployment, so a missing config is not an error.
// ==========================================

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// SQLite database file
    pub db_path: String,
    /// Customers source sheet
    pub customers_file: PathBuf,
    /// Orders source sheet
    pub orders_file: PathBuf,
    /// Financials source sheet
    pub financials_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_path: "data.db".to_string(),
            customers_file: PathBuf::from("excel1.xls"),
            orders_file: PathBuf::from("excel2.xls"),
            financials_file: PathBuf::from("excel3.xls"),
        }
    }
}

impl AppConfig {
    /// Load from a JSON file.
    pub fn load(path: &Path) -> std::io::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }

    /// Load from the default location, falling back to defaults when
    /// no config file exists yet.
    pub fn load_or_default() -> Self {
        match Self::default_config_path() {
            Some(path) if path.exists() => Self::load(&path).unwrap_or_default(),
            _ => Self::default(),
        }
    }

    /// Per-user config location (~/.config/cross-check/config.json on
    /// Linux); None when the platform reports no config directory.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("cross-check").join("config.json"))
    }
}
