//! Wildcard certificate listing

use crate::models::Host;

/// `(host, common name)` for every host whose leaf certificate is a
/// wildcard one
pub fn wildcard_sites(hosts: &[Host]) -> Vec<(&str, &str)> {
    hosts
        .iter()
        .filter_map(|host| {
            let (_, det) = host.first_assessed()?;
            det.cert
                .common_names
                .iter()
                .find(|cn| cn.starts_with("*."))
                .map(|cn| (host.host.as_str(), cn.as_str()))
        })
        .collect()
}

/// One `host: cn` line per wildcard site
pub fn display_wildcards(hosts: &[Host]) -> String {
    wildcard_sites(hosts)
        .into_iter()
        .map(|(host, cn)| format!("{}: {}\n", host, cn))
        .collect()
}
