//! External grade counts for the "HTTP Summary" table

use super::{bump, Counts};
use crate::models::{TlsReport, TOP_GRADE};

pub const TOTAL: &str = "Total";
pub const BROKEN: &str = "Broken";

/// Count Mozilla grades over a report.
///
/// `None` yields an empty map, a report yields at least `Total` and
/// `Broken`. `Total` counts top-graded sites only.
// FIXME: `Broken` goes up for every graded site, top grade included. Kept
// until the owners of the HTTP summary say what it should mean.
pub fn http_counts(report: Option<&TlsReport>) -> Counts {
    let Some(report) = report else {
        return Counts::new();
    };

    let mut counts: Counts = [(TOTAL.to_string(), 0), (BROKEN.to_string(), 0)]
        .into_iter()
        .collect();

    for site in report.sites.iter().filter(|s| !s.mozilla.is_empty()) {
        bump(&mut counts, &site.mozilla);
        bump(&mut counts, BROKEN);
        if site.mozilla == TOP_GRADE {
            bump(&mut counts, TOTAL);
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TlsSite;
    use chrono::Utc;

    fn report(grades: &[&str]) -> TlsReport {
        TlsReport {
            date: Utc::now(),
            ssllabs: "2.1.0/2009q".to_string(),
            sites: grades
                .iter()
                .map(|g| TlsSite {
                    name: "www.example.net".to_string(),
                    mozilla: g.to_string(),
                    ..Default::default()
                })
                .collect(),
        }
    }

    fn counts_of(pairs: &[(&str, usize)]) -> Counts {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_nil() {
        assert!(http_counts(None).is_empty());
    }

    #[test]
    fn test_empty_report() {
        assert_eq!(
            http_counts(Some(&report(&[]))),
            counts_of(&[("Total", 0), ("Broken", 0)])
        );
    }

    #[test]
    fn test_top_grade() {
        assert_eq!(
            http_counts(Some(&report(&["A+"]))),
            counts_of(&[("A+", 1), ("Total", 1), ("Broken", 1)])
        );
    }

    #[test]
    fn test_failing_grade() {
        assert_eq!(
            http_counts(Some(&report(&["H"]))),
            counts_of(&[("H", 1), ("Total", 0), ("Broken", 1)])
        );
    }

    #[test]
    fn test_second_best_and_ungraded() {
        assert_eq!(
            http_counts(Some(&report(&["A", "", "A+", "A"]))),
            counts_of(&[("A", 2), ("A+", 1), ("Total", 1), ("Broken", 3)])
        );
    }

    #[test]
    fn test_idempotent() {
        let report = report(&["A+", "B", "", "A+"]);
        let first = http_counts(Some(&report));
        assert_eq!(first, http_counts(Some(&report)));
        assert_eq!(first["Total"], 2);
    }
}
