//! Report covering a whole batch of sites

use super::TlsSite;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Everything needed for display and export
#[derive(Debug, Clone, Serialize)]
pub struct TlsReport {
    /// When the report was generated
    pub date: DateTime<Utc>,
    /// `engine/criteria` version of the scanner, taken from the first host
    pub ssllabs: String,
    pub sites: Vec<TlsSite>,
}

impl TlsReport {
    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }
}
