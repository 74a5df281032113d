//! Report generation module
//!
//! Builds the per-site report and writes it out as CSV, HTML or a terminal
//! table, together with the TLS and HTTP summaries.

pub mod builder;
pub mod csv_export;
pub mod html;
pub mod summary;
pub mod text;

pub use builder::{new_tls_report, ReportBuilder};
pub use csv_export::write_csv;
pub use html::{summary_file_name, write_html, write_html_summary, HtmlReport};
pub use summary::{display_categories, write_summary, HTTP_KEYS, TLS_KEYS};
