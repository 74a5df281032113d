//! CSV export
//!
//! Header comes from the `TlsSite` field names, then one record per site,
//! then both summary blocks.

use super::summary::{write_summary, HTTP_KEYS, TLS_KEYS};
use crate::models::TlsReport;
use crate::stats::Counts;
use crate::utils::{RenderError, ReportError, Result};
use std::io::Write;

/// Write the site rows only
pub fn write_sites<W: Write>(w: &mut W, report: &TlsReport) -> std::result::Result<(), RenderError> {
    let mut wtr = csv::Writer::from_writer(&mut *w);
    for site in &report.sites {
        wtr.serialize(site)?;
    }
    wtr.flush().map_err(|e| RenderError::Write {
        stage: "csv rows".to_string(),
        message: e.to_string(),
    })?;
    Ok(())
}

/// Full CSV output: rows, TLS summary, HTTP summary
pub fn write_csv<W: Write>(
    w: &mut W,
    report: Option<&TlsReport>,
    tls: &Counts,
    http: &Counts,
) -> Result<()> {
    let report = match report {
        Some(r) if !r.is_empty() => r,
        _ => return Err(ReportError::EmptyReport.into()),
    };
    tracing::debug!("writing {} sites as CSV", report.len());

    write_sites(w, report)?;
    write_block(w, "TLS Summary", TLS_KEYS, tls)?;
    write_block(w, "HTTP Summary", HTTP_KEYS, http)?;
    Ok(())
}

fn write_block<W: Write>(
    w: &mut W,
    title: &str,
    keys: &[&str],
    counts: &Counts,
) -> std::result::Result<(), RenderError> {
    let to_render_error = |e: std::io::Error| RenderError::Write {
        stage: title.to_string(),
        message: e.to_string(),
    };
    writeln!(w, "\n{}", title).map_err(to_render_error)?;
    write_summary(w, keys, counts).map_err(to_render_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TlsSite;
    use crate::utils::CheckTlsError;
    use chrono::Utc;

    fn report() -> TlsReport {
        TlsReport {
            date: Utc::now(),
            ssllabs: "2.1.0/2009q".to_string(),
            sites: vec![TlsSite {
                name: "www.example.net".to_string(),
                grade: "A".to_string(),
                protocols: "TLSv1.2,TLSv1.3".to_string(),
                ..Default::default()
            }],
        }
    }

    #[test]
    fn test_write_sites_header() {
        let mut out = Vec::new();
        write_sites(&mut out, &report()).unwrap();
        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Site,Contract,Grade,CryptCheck,Mozilla,DefKey,DefSig,DefCA,DefValidity,DefPath,DefIssues,Protocols,RC4,PFS,OCSP,Preload,HSTS,ALPN,Drown"
        );
        assert!(lines.next().unwrap().starts_with("www.example.net,,A,"));
        assert!(text.contains("\"TLSv1.2,TLSv1.3\""));
    }

    #[test]
    fn test_write_csv_refuses_nothing() {
        let counts = Counts::new();
        let mut out = Vec::new();
        let err = write_csv(&mut out, None, &counts, &counts).unwrap_err();
        assert!(matches!(err, CheckTlsError::Report(ReportError::EmptyReport)));

        let mut empty = report();
        empty.sites.clear();
        assert!(write_csv(&mut out, Some(&empty), &counts, &counts).is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn test_write_csv_with_summaries() {
        let tls: Counts = [("Total".to_string(), 1), ("A".to_string(), 1)].into_iter().collect();
        let http: Counts = [("Total".to_string(), 0), ("Broken".to_string(), 0)]
            .into_iter()
            .collect();
        let mut out = Vec::new();
        write_csv(&mut out, Some(&report()), &tls, &http).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\nTLS Summary\nTotal: 1\nA: 1\n"));
        assert!(text.ends_with("\nHTTP Summary\nTotal: 0\nBroken: 0\n"));
    }
}
