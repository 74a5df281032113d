//! Application settings configuration
//!
//! Defines where the contracts table lives and which external grade
//! columns get filled.

use crate::utils::ConfigError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Report settings
#[derive(Debug, Clone, Deserialize)]
pub struct ReportSettings {
    #[serde(default)]
    pub ignore_mozilla: bool,
    #[serde(default)]
    pub ignore_imirhil: bool,
    #[serde(default = "default_contracts")]
    pub contracts: PathBuf,
    #[serde(default)]
    pub grades: Option<PathBuf>,
}

fn default_contracts() -> PathBuf {
    PathBuf::from("sites-list.csv")
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            ignore_mozilla: false,
            ignore_imirhil: false,
            contracts: default_contracts(),
            grades: None,
        }
    }
}

/// Application settings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub report: ReportSettings,
}

impl Settings {
    /// Load settings from the default config file
    pub fn load_default() -> Result<Self, ConfigError> {
        let config_path = Path::new("config/checktls.toml");
        if config_path.exists() {
            Self::load_from_file(config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })
    }

    /// Flags that gate external grade enrichment, frozen for one run
    pub fn report_config(&self) -> ReportConfig {
        ReportConfig {
            ignore_mozilla: self.report.ignore_mozilla,
            ignore_imirhil: self.report.ignore_imirhil,
        }
    }
}

/// Read-only switches handed to the report builder
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportConfig {
    pub ignore_mozilla: bool,
    pub ignore_imirhil: bool,
}
