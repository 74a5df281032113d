//! Scanner result types
//!
//! Mirrors the JSON emitted by `ssllabs-scan` (API v3 field names). Every
//! field defaults when absent so partial records still deserialize; callers
//! decide what an incomplete record means.

use crate::utils::ParseError;
use serde::{Deserialize, Serialize};

/// Forward secrecy bit set when modern browsers negotiate a FS suite
pub const FS_MODERN: u32 = 2;
/// Forward secrecy bit set when every simulated client negotiates FS
pub const FS_ROBUST: u32 = 4;

/// One assessed site
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Host {
    pub host: String,
    pub port: u16,
    pub protocol: String,
    pub status: String,
    pub status_message: String,
    pub engine_version: String,
    pub criteria_version: String,
    pub endpoints: Vec<Endpoint>,
}

impl Host {
    /// First assessed endpoint together with its details, if the scan got
    /// that far
    pub fn first_assessed(&self) -> Option<(&Endpoint, &EndpointDetails)> {
        let endpoint = self.endpoints.first()?;
        let details = endpoint.details.as_ref()?;
        Some((endpoint, details))
    }

    /// `engine/criteria` label of the scanner that produced this record
    pub fn scanner_version(&self) -> String {
        format!("{}/{}", self.engine_version, self.criteria_version)
    }
}

/// One IP address behind a host
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Endpoint {
    pub ip_address: String,
    pub server_name: String,
    pub status_message: String,
    pub grade: String,
    pub grade_trust_ignored: String,
    pub has_warnings: bool,
    pub is_exceptional: bool,
    pub details: Option<EndpointDetails>,
}

/// Detailed assessment of an endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EndpointDetails {
    pub key: Key,
    pub cert: Cert,
    pub chain: Chain,
    pub protocols: Vec<Protocol>,
    pub suites: Suites,
    pub supports_rc4: bool,
    pub ocsp_stapling: bool,
    pub hsts_policy: HstsPolicy,
    pub hsts_preloads: Vec<HstsPreload>,
    pub supports_alpn: bool,
    pub drown_vulnerable: bool,
    pub forward_secrecy: u32,
}

impl EndpointDetails {
    pub fn has_pfs(&self) -> bool {
        self.forward_secrecy & (FS_MODERN | FS_ROBUST) != 0
    }

    pub fn has_hsts(&self) -> bool {
        self.hsts_policy.status == "present"
    }

    /// Listed in at least one browser HSTS preload list
    pub fn is_preloaded(&self) -> bool {
        self.hsts_preloads.iter().any(|p| p.status == "present")
    }

    /// Any accepted suite runs a 64-bit block cipher (Sweet32)
    pub fn has_weak_block_cipher(&self) -> bool {
        self.suites.list.iter().any(Suite::is_64bit_block)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Key {
    pub alg: String,
    pub size: u32,
}

/// Leaf certificate
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Cert {
    pub subject: String,
    pub common_names: Vec<String>,
    pub alt_names: Vec<String>,
    pub sig_alg: String,
    pub issuer_label: String,
    /// Milliseconds since the Unix epoch
    pub not_before: i64,
    /// Milliseconds since the Unix epoch
    pub not_after: i64,
    pub issues: u32,
}

/// Certificate chain as served
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Chain {
    pub certs: Vec<ChainCert>,
    /// Bitmask of chain problems, 0 when clean
    pub issues: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChainCert {
    pub subject: String,
    pub label: String,
    pub issuer_label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Protocol {
    pub id: u32,
    pub name: String,
    pub version: String,
}

impl std::fmt::Display for Protocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}v{}", self.name, self.version)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Suites {
    pub list: Vec<Suite>,
    pub preference: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Suite {
    pub id: u32,
    pub name: String,
    pub cipher_strength: u32,
}

impl Suite {
    /// 3DES, single DES and IDEA all use 64-bit blocks
    pub fn is_64bit_block(&self) -> bool {
        let name = self.name.as_str();
        name.contains("3DES") || name.contains("_DES_") || name.contains("IDEA")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HstsPolicy {
    pub status: String,
    pub max_age: i64,
    pub include_sub_domains: bool,
    pub preload: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HstsPreload {
    pub source: String,
    pub status: String,
}

/// Parse the JSON array written by the scanner
pub fn parse_results(raw: &[u8]) -> Result<Vec<Host>, ParseError> {
    let hosts: Vec<Host> = serde_json::from_slice(raw)?;
    tracing::debug!("parsed {} hosts", hosts.len());
    Ok(hosts)
}

/// Read and parse a results file
pub fn read_results<P: AsRef<std::path::Path>>(path: P) -> Result<Vec<Host>, ParseError> {
    let path = path.as_ref();
    let raw = std::fs::read(path).map_err(|e| ParseError::Read {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    parse_results(&raw)
}
