//! Utility modules for checktls
//!
//! This module contains the error types shared by every stage.

pub mod error;

pub use error::{CheckTlsError, ConfigError, ParseError, RenderError, ReportError, Result};
