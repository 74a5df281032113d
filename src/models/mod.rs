//! Data models for checktls
//!
//! Scanner input on one side, flattened report rows on the other.

pub mod scan;
pub mod tls_report;
pub mod tls_site;

pub use scan::{parse_results, read_results, Endpoint, EndpointDetails, Host};
pub use tls_report::TlsReport;
pub use tls_site::{yes_no, TlsSite, TOP_GRADE};
