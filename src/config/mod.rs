//! Configuration module for checktls
//!
//! Settings from TOML, plus the contracts table.

pub mod contracts;
pub mod settings;

pub use contracts::Contracts;
pub use settings::{ReportConfig, ReportSettings, Settings};

use crate::cli::Cli;
use crate::utils::ConfigError;

/// Load settings from `--config` or the default location, then let the
/// command line override them
pub fn load_settings(cli: &Cli) -> Result<Settings, ConfigError> {
    let mut settings = match &cli.config {
        Some(path) => Settings::load_from_file(path)?,
        None => Settings::load_default()?,
    };

    if cli.ignore_mozilla {
        settings.report.ignore_mozilla = true;
    }
    if cli.ignore_imirhil {
        settings.report.ignore_imirhil = true;
    }
    if let Some(path) = &cli.contracts {
        settings.report.contracts = path.clone();
    }
    if let Some(path) = &cli.grades {
        settings.report.grades = Some(path.clone());
    }
    Ok(settings)
}
