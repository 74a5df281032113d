//! Population statistics
//!
//! Counters summarizing a whole batch, computed either from the raw scanner
//! output (TLS categories) or from the built report (external grades).

pub mod categories;
pub mod http;
pub mod wildcards;

pub use categories::category_counts;
pub use http::http_counts;
pub use wildcards::{display_wildcards, wildcard_sites};

use std::collections::HashMap;

/// Occurrences per label. Iteration order carries no meaning; renderers
/// impose their own.
pub type Counts = HashMap<String, usize>;

pub(crate) fn bump(counts: &mut Counts, key: &str) {
    *counts.entry(key.to_string()).or_insert(0) += 1;
}
