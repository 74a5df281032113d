//! Custom error types for checktls
//!
//! This module defines domain-specific error types using `thiserror` for
//! the failure modes of parsing scan results, building reports and writing
//! them out. The classifiers themselves never fail.

use thiserror::Error;

/// Top-level error type for checktls
#[derive(Error, Debug)]
pub enum CheckTlsError {
    #[error("Scan results error: {0}")]
    Parse(#[from] ParseError),

    #[error("Report error: {0}")]
    Report(#[from] ReportError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors while reading the scanner output
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("can not read {path}: {message}")]
    Read { path: String, message: String },
}

/// Report construction errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ReportError {
    #[error("empty list")]
    EmptyInput,

    #[error("incomplete record for {host}: no assessed endpoint")]
    IncompleteRecord { host: String },

    #[error("nothing to write: report is missing or has no site")]
    EmptyReport,
}

/// Output stage failures
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Template rendering failed: {message}")]
    Template { message: String },

    #[error("CSV output failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to write {stage}: {message}")]
    Write { stage: String, message: String },
}

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },
}

impl From<minijinja::Error> for RenderError {
    fn from(err: minijinja::Error) -> Self {
        RenderError::Template {
            message: err.to_string(),
        }
    }
}

/// Result type alias using CheckTlsError
pub type Result<T> = std::result::Result<T, CheckTlsError>;
