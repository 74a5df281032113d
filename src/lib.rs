//! checktls library
//!
//! Turns SSL Labs scan results for a set of sites into:
//! - a flattened per-site report, exported as CSV, HTML or a terminal table
//! - TLS category counts (grades, chain issues, HSTS, PFS, OCSP, Sweet32)
//! - external grade counts (Mozilla Observatory)
//!
//! # Usage
//!
//! ```rust,ignore
//! use checktls::config::ReportConfig;
//! use checktls::models::parse_results;
//! use checktls::report::new_tls_report;
//! use checktls::stats::{category_counts, http_counts};
//!
//! let hosts = parse_results(&raw)?;
//! let report = new_tls_report(&hosts, ReportConfig::default())?;
//! let tls = category_counts(Some(&hosts));
//! let http = http_counts(Some(&report));
//! ```

pub mod checks;
pub mod cli;
pub mod config;
pub mod models;
pub mod report;
pub mod stats;
pub mod utils;

// Re-export commonly used types
pub use cli::Cli;
pub use config::{ReportConfig, Settings};
pub use models::{Host, TlsReport, TlsSite};
pub use utils::{CheckTlsError, Result};
