use crate::error::Error;
use crate::Result;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read the host list once, preserving file order.
///
/// Lines are trimmed of surrounding whitespace; blank lines are skipped.
pub fn read_hosts(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).map_err(Error::HostListError)?;
    let reader = BufReader::new(file);

    let mut hosts = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(Error::HostListError)?;
        let host = line.trim();
        if host.is_empty() {
            continue;
        }
        hosts.push(host.to_string());
    }

    Ok(hosts)
}
