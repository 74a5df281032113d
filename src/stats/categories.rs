//! TLS category counts
//!
//! Buckets every host of a scan into the categories of the "TLS Summary"
//! table. Works on the raw scanner output, so the external grade switches
//! have no say here.

use super::{bump, Counts};
use crate::models::Host;

pub const TOTAL: &str = "Total";
/// Host with no assessed endpoint
pub const UNASSESSED: &str = "X";
/// Endpoint graded without a trust-independent grade
pub const NO_TRUST_GRADE: &str = "Z";
pub const ISSUES: &str = "Issues";
pub const HSTS: &str = "HSTS";
pub const PFS: &str = "PFS";
pub const OCSP: &str = "OCSP";
pub const SWEET32: &str = "Sweet32";

/// Count categories over a host list.
///
/// `None` yields an empty map. Any list, even an empty one, yields at least
/// `Total`, `X` and `Z`.
pub fn category_counts(hosts: Option<&[Host]>) -> Counts {
    let Some(hosts) = hosts else {
        return Counts::new();
    };

    let mut counts: Counts = [TOTAL, UNASSESSED, NO_TRUST_GRADE]
        .into_iter()
        .map(|k| (k.to_string(), 0))
        .collect();

    for host in hosts {
        let Some((endpoint, det)) = host.first_assessed() else {
            tracing::debug!("{}: no assessed endpoint", host.host);
            bump(&mut counts, UNASSESSED);
            continue;
        };

        bump(&mut counts, TOTAL);
        // "" belongs to the missing trust grade below, once per host
        if !endpoint.grade.is_empty() {
            bump(&mut counts, &endpoint.grade);
        }

        if endpoint.grade_trust_ignored.is_empty() {
            bump(&mut counts, "");
            bump(&mut counts, NO_TRUST_GRADE);
        }
        if det.chain.issues != 0 {
            bump(&mut counts, ISSUES);
        }
        if det.has_hsts() {
            bump(&mut counts, HSTS);
        }
        if det.has_pfs() {
            bump(&mut counts, PFS);
        }
        if det.ocsp_stapling {
            bump(&mut counts, OCSP);
        }
        if det.has_weak_block_cipher() {
            bump(&mut counts, SWEET32);
        }
    }
    counts
}
