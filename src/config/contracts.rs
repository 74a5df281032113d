//! Site to contract mapping
//!
//! A headerless two-column CSV: `host,contract`.

use crate::utils::ConfigError;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

/// Contract labels keyed by host name
#[derive(Debug, Clone, Default)]
pub struct Contracts {
    sites: HashMap<String, String>,
}

impl Contracts {
    /// Load from a file on disk
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let fh = std::fs::File::open(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        Self::from_reader(fh)
    }

    pub fn from_reader<R: Read>(rdr: R) -> Result<Self, ConfigError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(rdr);

        let mut sites = HashMap::new();
        for record in reader.records() {
            let record = record.map_err(|e| ConfigError::ParseError {
                message: e.to_string(),
            })?;
            if let (Some(site), Some(contract)) = (record.get(0), record.get(1)) {
                sites.insert(site.trim().to_string(), contract.trim().to_string());
            }
        }
        tracing::debug!("loaded {} contracts", sites.len());
        Ok(Self { sites })
    }

    /// Contract for a host, empty when unknown
    pub fn get(&self, site: &str) -> &str {
        self.sites.get(site).map(String::as_str).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }
}

impl FromIterator<(String, String)> for Contracts {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            sites: iter.into_iter().collect(),
        }
    }
}
