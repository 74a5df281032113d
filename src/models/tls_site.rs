//! Flattened per-site report row

use super::scan::Host;
use crate::utils::ReportError;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Best grade an external grader hands out
pub const TOP_GRADE: &str = "A+";

/// Tabular exports expect literal YES/NO rather than booleans
pub fn yes_no(flag: bool) -> &'static str {
    if flag {
        "YES"
    } else {
        "NO"
    }
}

/// One row of the report. Field order is the column order of the CSV
/// export; serde names are the header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TlsSite {
    #[serde(rename = "Site")]
    pub name: String,
    #[serde(rename = "Contract")]
    pub contract: String,
    #[serde(rename = "Grade")]
    pub grade: String,
    /// Imirhil (cryptcheck) grade, empty when not fetched
    #[serde(rename = "CryptCheck")]
    pub cryptcheck: String,
    /// Mozilla Observatory grade, empty when not fetched
    #[serde(rename = "Mozilla")]
    pub mozilla: String,
    #[serde(rename = "DefKey")]
    pub key: String,
    #[serde(rename = "DefSig")]
    pub signature: String,
    #[serde(rename = "DefCA")]
    pub issuer: String,
    #[serde(rename = "DefValidity")]
    pub validity: String,
    #[serde(rename = "DefPath")]
    pub path: String,
    #[serde(rename = "DefIssues")]
    pub issues: String,
    #[serde(rename = "Protocols")]
    pub protocols: String,
    #[serde(rename = "RC4")]
    pub rc4: String,
    #[serde(rename = "PFS")]
    pub pfs: String,
    #[serde(rename = "OCSP")]
    pub ocsp: String,
    #[serde(rename = "Preload")]
    pub preload: String,
    #[serde(rename = "HSTS")]
    pub hsts: String,
    #[serde(rename = "ALPN")]
    pub alpn: String,
    #[serde(rename = "Drown")]
    pub drown: String,
}

impl TlsSite {
    /// Flatten a host from its first endpoint. Further endpoints are not
    /// looked at.
    pub fn from_host(host: &Host) -> Result<Self, ReportError> {
        let (endpoint, det) = host
            .first_assessed()
            .ok_or_else(|| ReportError::IncompleteRecord {
                host: host.host.clone(),
            })?;

        let protocols: Vec<String> = det.protocols.iter().map(|p| p.to_string()).collect();

        Ok(Self {
            name: host.host.clone(),
            contract: String::new(),
            grade: endpoint.grade.clone(),
            cryptcheck: String::new(),
            mozilla: String::new(),
            key: format!("{} {} bits", det.key.alg, det.key.size),
            signature: det.cert.sig_alg.clone(),
            issuer: det.cert.issuer_label.clone(),
            validity: format_epoch_millis(det.cert.not_after),
            path: det.chain.certs.len().to_string(),
            issues: det.chain.issues.to_string(),
            protocols: protocols.join(","),
            rc4: yes_no(det.supports_rc4).to_string(),
            pfs: yes_no(det.has_pfs()).to_string(),
            ocsp: yes_no(det.ocsp_stapling).to_string(),
            preload: yes_no(det.is_preloaded()).to_string(),
            hsts: yes_no(det.has_hsts()).to_string(),
            alpn: yes_no(det.supports_alpn).to_string(),
            drown: yes_no(det.drown_vulnerable).to_string(),
        })
    }
}

/// Render an epoch timestamp in milliseconds. Out-of-range values fall back
/// to the raw number.
pub fn format_epoch_millis(millis: i64) -> String {
    match DateTime::<Utc>::from_timestamp_millis(millis) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        None => millis.to_string(),
    }
}
