//! Summary blocks
//!
//! Counts maps come without a meaningful order; the key lists below fix the
//! order of the "TLS Summary" and "HTTP Summary" tables. Keys missing from a
//! list are not shown.

use crate::stats::Counts;
use std::io::Write;

/// Row order of the TLS summary
pub const TLS_KEYS: &[&str] = &[
    "Total", "A+", "A", "A-", "B", "C", "D", "E", "F", "T", "M", "X", "Z", "Issues", "HSTS",
    "PFS", "OCSP", "Sweet32",
];

/// Row order of the HTTP summary
pub const HTTP_KEYS: &[&str] = &[
    "Total", "A+", "A", "A-", "B+", "B", "B-", "C+", "C", "C-", "D+", "D", "D-", "E", "F", "G",
    "H", "Broken",
];

/// `(key, count)` pairs in key-list order, skipping keys not counted
pub fn ordered<'a>(keys: &[&'a str], counts: &Counts) -> Vec<(&'a str, usize)> {
    keys.iter()
        .filter_map(|k| counts.get(*k).map(|v| (*k, *v)))
        .collect()
}

/// Write `key: count` lines in key-list order
pub fn write_summary<W: Write>(w: &mut W, keys: &[&str], counts: &Counts) -> std::io::Result<()> {
    for (key, count) in ordered(keys, counts) {
        writeln!(w, "{}: {}", key, count)?;
    }
    Ok(())
}

/// Every key of a counts map, sorted
pub fn display_categories(counts: &Counts) -> String {
    let mut keys: Vec<&String> = counts.keys().collect();
    keys.sort();
    keys.into_iter()
        .map(|k| format!("{}: {}\n", k, counts[k]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts_of(pairs: &[(&str, usize)]) -> Counts {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_write_summary_order() {
        let counts = counts_of(&[("PFS", 3), ("A+", 2), ("Total", 5), ("Bogus", 9)]);
        let mut out = Vec::new();
        write_summary(&mut out, TLS_KEYS, &counts).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Total: 5\nA+: 2\nPFS: 3\n");
    }

    #[test]
    fn test_http_keys_order() {
        let counts = counts_of(&[("Broken", 1), ("H", 1), ("Total", 0)]);
        assert_eq!(
            ordered(HTTP_KEYS, &counts),
            vec![("Total", 0), ("H", 1), ("Broken", 1)]
        );
    }

    #[test]
    fn test_display_categories() {
        let counts = counts_of(&[("G", 1), ("A", 666), ("B", 0)]);
        assert_eq!(display_categories(&counts), "A: 666\nB: 0\nG: 1\n");
    }
}
