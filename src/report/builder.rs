//! Report construction
//!
//! Turns the parsed scanner output into a `TlsReport`: one flattened row per
//! host, the contract label from the contracts table and, unless told to
//! ignore them, the external grades.

use crate::checks::grades::{GradeSource, Grader};
use crate::config::{Contracts, ReportConfig};
use crate::models::{Host, TlsReport, TlsSite};
use crate::utils::ReportError;
use chrono::Utc;
use tracing::{debug, info, warn};

/// Builds a `TlsReport` out of a host list
pub struct ReportBuilder<'a> {
    config: ReportConfig,
    contracts: Option<&'a Contracts>,
    grades: Option<&'a dyn GradeSource>,
}

impl<'a> ReportBuilder<'a> {
    pub fn new(config: ReportConfig) -> Self {
        Self {
            config,
            contracts: None,
            grades: None,
        }
    }

    pub fn with_contracts(mut self, contracts: &'a Contracts) -> Self {
        self.contracts = Some(contracts);
        self
    }

    pub fn with_grades(mut self, grades: &'a dyn GradeSource) -> Self {
        self.grades = Some(grades);
        self
    }

    /// Build the report. Fails on an empty list and on any host that has no
    /// assessed endpoint; rows are never dropped silently.
    pub fn build(&self, hosts: &[Host]) -> Result<TlsReport, ReportError> {
        let first = hosts.first().ok_or(ReportError::EmptyInput)?;
        let ssllabs = first.scanner_version();
        debug!("scanner version {} (from {})", ssllabs, first.host);

        info!("{} sites found", hosts.len());

        let sites = hosts
            .iter()
            .map(|host| self.site(host))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(TlsReport {
            date: Utc::now(),
            ssllabs,
            sites,
        })
    }

    fn site(&self, host: &Host) -> Result<TlsSite, ReportError> {
        let mut site = TlsSite::from_host(host).inspect_err(|e| {
            warn!("{}, aborting: rescan the host or remove it from the input", e)
        })?;

        if let Some(contracts) = self.contracts {
            site.contract = contracts.get(&site.name).to_string();
        }
        if !self.config.ignore_mozilla {
            site.mozilla = self.external_grade(Grader::Mozilla, &site.name);
        }
        if !self.config.ignore_imirhil {
            site.cryptcheck = self.external_grade(Grader::Imirhil, &site.name);
        }
        Ok(site)
    }

    fn external_grade(&self, grader: Grader, site: &str) -> String {
        let Some(source) = self.grades else {
            return String::new();
        };
        match source.grade(grader, site) {
            Ok(grade) => grade,
            Err(e) => {
                warn!("{}", e);
                String::new()
            }
        }
    }
}

/// Build a report with no contracts and no external grades
pub fn new_tls_report(hosts: &[Host], config: ReportConfig) -> Result<TlsReport, ReportError> {
    ReportBuilder::new(config).build(hosts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::grades::GradeTable;
    use crate::models::{Endpoint, EndpointDetails};

    fn host(name: &str) -> Host {
        Host {
            host: name.to_string(),
            engine_version: "2.1.0".to_string(),
            criteria_version: "2009q".to_string(),
            endpoints: vec![Endpoint {
                grade: "A".to_string(),
                details: Some(EndpointDetails::default()),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_list() {
        let err = new_tls_report(&[], ReportConfig::default()).unwrap_err();
        assert_eq!(err, ReportError::EmptyInput);
        assert_eq!(err.to_string(), "empty list");
    }

    #[test]
    fn test_rows_in_input_order() {
        let hosts = vec![host("b.example.net"), host("a.example.net"), host("c.example.net")];
        let report = new_tls_report(&hosts, ReportConfig::default()).unwrap();
        assert_eq!(report.len(), 3);
        let names: Vec<&str> = report.sites.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["b.example.net", "a.example.net", "c.example.net"]);
        assert_eq!(report.ssllabs, "2.1.0/2009q");
    }

    #[test]
    fn test_version_from_first_host_only() {
        let mut other = host("b.example.net");
        other.engine_version = "9.9.9".to_string();
        let report = new_tls_report(&[host("a.example.net"), other], ReportConfig::default())
            .unwrap();
        assert_eq!(report.ssllabs, "2.1.0/2009q");
    }

    #[test]
    fn test_incomplete_host_fails() {
        let broken = Host {
            host: "down.example.net".to_string(),
            ..Default::default()
        };
        let err = new_tls_report(&[host("a.example.net"), broken], ReportConfig::default())
            .unwrap_err();
        assert_eq!(
            err,
            ReportError::IncompleteRecord {
                host: "down.example.net".to_string()
            }
        );
    }

    #[test]
    fn test_contracts_and_grades() {
        let contracts: Contracts = [("a.example.net".to_string(), "C-42".to_string())]
            .into_iter()
            .collect();
        let mut grades = GradeTable::new();
        grades.insert(Grader::Mozilla, "a.example.net", "B+");
        grades.insert(Grader::Imirhil, "a.example.net", "C");

        let report = ReportBuilder::new(ReportConfig::default())
            .with_contracts(&contracts)
            .with_grades(&grades)
            .build(&[host("a.example.net"), host("b.example.net")])
            .unwrap();

        assert_eq!(report.sites[0].contract, "C-42");
        assert_eq!(report.sites[0].mozilla, "B+");
        assert_eq!(report.sites[0].cryptcheck, "C");
        assert_eq!(report.sites[1].contract, "");
        assert_eq!(report.sites[1].mozilla, "");
    }

    #[test]
    fn test_ignore_flags() {
        let mut grades = GradeTable::new();
        grades.insert(Grader::Mozilla, "a.example.net", "B+");
        grades.insert(Grader::Imirhil, "a.example.net", "C");

        let config = ReportConfig {
            ignore_mozilla: true,
            ignore_imirhil: false,
        };
        let report = ReportBuilder::new(config)
            .with_grades(&grades)
            .build(&[host("a.example.net")])
            .unwrap();
        assert_eq!(report.sites[0].mozilla, "");
        assert_eq!(report.sites[0].cryptcheck, "C");
    }
}
