//! Terminal output using comfy-table

use super::summary::{ordered, HTTP_KEYS, TLS_KEYS};
use crate::models::{TlsReport, TlsSite};
use crate::stats::Counts;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, ContentArrangement, Table};

fn new_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let header_cells: Vec<Cell> = headers
        .iter()
        .map(|h| Cell::new(h).add_attribute(Attribute::Bold).fg(Color::Cyan))
        .collect();
    table.set_header(header_cells);
    table
}

fn flag_cell(value: &str, good: bool) -> Cell {
    let cell = Cell::new(value);
    match (value, good) {
        ("YES", true) | ("NO", false) => cell.fg(Color::Green),
        _ => cell.fg(Color::Red),
    }
}

fn site_row(site: &TlsSite) -> Vec<Cell> {
    vec![
        Cell::new(&site.name),
        Cell::new(&site.contract),
        Cell::new(&site.grade).add_attribute(Attribute::Bold),
        Cell::new(&site.mozilla),
        Cell::new(&site.key),
        Cell::new(&site.issuer),
        Cell::new(&site.validity),
        Cell::new(&site.protocols),
        flag_cell(&site.rc4, false),
        flag_cell(&site.pfs, true),
        flag_cell(&site.ocsp, true),
        flag_cell(&site.hsts, true),
        flag_cell(&site.drown, false),
    ]
}

/// Site table, indented like the rest of the terminal output
pub fn format_sites(report: &TlsReport) -> String {
    let mut table = new_table(&[
        "Site", "Contract", "Grade", "Mozilla", "Key", "Issuer", "Validity", "Protocols", "RC4",
        "PFS", "OCSP", "HSTS", "Drown",
    ]);
    for site in &report.sites {
        table.add_row(site_row(site));
    }
    indent(&table)
}

/// One two-column table per summary
pub fn format_summary(title: &str, keys: &[&str], counts: &Counts) -> String {
    let mut table = new_table(&[title, "Sites"]);
    for (key, count) in ordered(keys, counts) {
        table.add_row(vec![Cell::new(key), Cell::new(count)]);
    }
    indent(&table)
}

/// Whole report for the terminal: header line, sites, both summaries
pub fn format_report(report: &TlsReport, tls: &Counts, http: &Counts) -> String {
    let mut out = format!(
        "  {} sites, SSL Labs {}, generated {}\n\n",
        report.len(),
        report.ssllabs,
        report.date.format("%Y-%m-%d %H:%M:%S UTC")
    );
    out.push_str(&format_sites(report));
    out.push_str("\n  TLS Summary\n");
    out.push_str(&format_summary("Category", TLS_KEYS, tls));
    out.push_str("\n  HTTP Summary\n");
    out.push_str(&format_summary("Grade", HTTP_KEYS, http));
    out
}

fn indent(table: &Table) -> String {
    let mut out = String::new();
    for line in table.to_string().lines() {
        out.push_str(&format!("    {}\n", line));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_format_summary_order() {
        let counts: Counts = [("Broken".to_string(), 2), ("Total".to_string(), 1)]
            .into_iter()
            .collect();
        let out = format_summary("Grade", HTTP_KEYS, &counts);
        let total = out.find("Total").unwrap();
        let broken = out.find("Broken").unwrap();
        assert!(total < broken);
    }

    #[test]
    fn test_format_report() {
        let report = TlsReport {
            date: Utc::now(),
            ssllabs: "2.1.0/2009q".to_string(),
            sites: vec![TlsSite {
                name: "www.example.net".to_string(),
                ..Default::default()
            }],
        };
        let out = format_report(&report, &Counts::new(), &Counts::new());
        assert!(out.contains("1 sites, SSL Labs 2.1.0/2009q"));
        assert!(out.contains("www.example.net"));
        assert!(out.contains("HTTP Summary"));
    }
}
