use crate::config::Config;
use crate::error::Error;
use crate::outcome::Outcome;
use crate::Result;
use async_trait::async_trait;
use log::{debug, info};
use remotessh::client::Client;
use remotessh::ssh::SSHConfig;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::time::Duration;

/// One login attempt against one host. The seam exists so the batch loop can
/// be driven by a scripted prober in tests.
#[async_trait]
pub trait Prober: Send + Sync {
    async fn probe(&self, host: &str) -> Outcome;
}

pub struct SshProber {
    username: String,
    password: String,
    port: u16,
    timeout: Duration,
}

impl SshProber {
    pub fn new(config: &Config) -> Self {
        Self {
            username: config.username.clone(),
            password: config.password.clone(),
            port: config.port,
            timeout: config.timeout,
        }
    }
}

#[async_trait]
impl Prober for SshProber {
    async fn probe(&self, host: &str) -> Outcome {
        let config = match SSHConfig::password(
            self.username.as_str(),
            (host, self.port),
            self.password.as_str(),
            self.timeout,
        )
        .await
        {
            Ok(config) => config,
            Err(e) => return Outcome::from_error(&e),
        };

        match Client::connect(config).await {
            Ok(mut client) => {
                // The credentials were accepted; a failed teardown does not
                // change the verdict.
                if let Err(e) = client.disconnect().await {
                    debug!("disconnect from {} failed: {}", host, e);
                }
                Outcome::Success
            }
            Err(e) => Outcome::from_error(&e),
        }
    }
}

/// Append-only record of hosts that accepted the credentials. Opened in
/// create+append mode so repeated runs never truncate earlier records.
pub struct SuccessLog {
    file: File,
}

impl SuccessLog {
    pub fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(Error::SuccessLogError)?;
        Ok(Self { file })
    }

    pub fn record(&mut self, host: &str) -> Result<()> {
        writeln!(self.file, "Success: SSH to {} was successful.", host)
            .map_err(Error::SuccessLogError)
    }
}

#[derive(Debug, Default)]
pub struct RunReport {
    pub attempted: usize,
    pub succeeded: usize,
    pub failed: usize,
}

pub struct Runner<P: Prober> {
    prober: P,
    delay: Duration,
}

fn result_line(outcome: &Outcome, host: &str) -> String {
    format!("{}: {}", outcome, host)
}

impl<P: Prober> Runner<P> {
    pub fn new(prober: P, delay: Duration) -> Self {
        Self { prober, delay }
    }

    /// Walk the host list in order: one attempt per host, one printed line
    /// per host, successes appended to the log, a fixed sleep between
    /// consecutive attempts. Per-host failures never abort the batch.
    pub async fn run(&self, hosts: &[String], log: &mut SuccessLog) -> Result<RunReport> {
        let mut report = RunReport::default();

        for (index, host) in hosts.iter().enumerate() {
            let outcome = self.prober.probe(host).await;
            println!("{}", result_line(&outcome, host));

            report.attempted += 1;
            if outcome.is_success() {
                log.record(host)?;
                report.succeeded += 1;
            } else {
                report.failed += 1;
            }

            if index + 1 < hosts.len() {
                tokio::time::sleep(self.delay).await;
            }
        }

        info!(
            "Swept {} hosts: {} accepted, {} refused",
            report.attempted, report.succeeded, report.failed
        );
        Ok(report)
    }
}
