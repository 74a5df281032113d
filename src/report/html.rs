//! HTML report generation
//!
//! Site table and summary page, rendered from templates embedded in the
//! binary.

use super::summary::{ordered, HTTP_KEYS, TLS_KEYS};
use crate::models::TlsReport;
use crate::stats::Counts;
use crate::utils::{RenderError, ReportError, Result};
use chrono::{DateTime, Utc};
use minijinja::{context, Environment};
use std::io::Write;

const REPORT_TEMPLATE: &str = include_str!("templates/report.html");
const SUMMARY_TEMPLATE: &str = include_str!("templates/summary.html");

/// HTML renderer holding the compiled templates
pub struct HtmlReport {
    env: Environment<'static>,
}

impl HtmlReport {
    pub fn new() -> std::result::Result<Self, RenderError> {
        let mut env = Environment::new();
        env.add_template("report.html", REPORT_TEMPLATE)?;
        env.add_template("summary.html", SUMMARY_TEMPLATE)?;
        Ok(Self { env })
    }

    /// Render the site table
    pub fn render_report(&self, report: &TlsReport) -> std::result::Result<String, RenderError> {
        let template = self.env.get_template("report.html")?;
        let html = template.render(context! {
            date => report.date.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            ssllabs => &report.ssllabs,
            sites => &report.sites,
        })?;
        Ok(html)
    }

    /// Render both summary tables
    pub fn render_summary(
        &self,
        tls: &Counts,
        http: &Counts,
    ) -> std::result::Result<String, RenderError> {
        let template = self.env.get_template("summary.html")?;
        let html = template.render(context! {
            tls => summary_rows(TLS_KEYS, tls),
            http => summary_rows(HTTP_KEYS, http),
        })?;
        Ok(html)
    }
}

fn summary_rows(keys: &[&str], counts: &Counts) -> Vec<minijinja::Value> {
    ordered(keys, counts)
        .into_iter()
        .map(|(key, count)| context! { key => key, count => count })
        .collect()
}

/// Write the HTML site table
pub fn write_html<W: Write>(w: &mut W, report: Option<&TlsReport>) -> Result<()> {
    let report = match report {
        Some(r) if !r.is_empty() => r,
        _ => return Err(ReportError::EmptyReport.into()),
    };

    let html = HtmlReport::new()?.render_report(report)?;
    w.write_all(html.as_bytes())
        .map_err(|e| RenderError::Write {
            stage: "html report".to_string(),
            message: e.to_string(),
        })?;
    Ok(())
}

/// Write the HTML summary page
pub fn write_html_summary<W: Write>(w: &mut W, tls: &Counts, http: &Counts) -> Result<()> {
    let html = HtmlReport::new()?.render_summary(tls, http)?;
    w.write_all(html.as_bytes())
        .map_err(|e| RenderError::Write {
            stage: "html summary".to_string(),
            message: e.to_string(),
        })?;
    Ok(())
}

/// `<prefix>-<YYYYMMDD>.html`
pub fn summary_file_name(prefix: &str, date: DateTime<Utc>) -> String {
    format!("{}-{}.html", prefix, date.format("%Y%m%d"))
}
