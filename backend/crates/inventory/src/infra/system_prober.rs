//! System Prober
//!
//! Ping shells out to the platform ping tool; TCP probes open a socket
//! directly. Both are bounded by [`ProbeConfig::timeout`]. A ping that
//! overruns its deadline is killed.

use std::io;
use std::net::SocketAddr;
use std::process::Stdio;
use std::sync::Arc;
use std::time::Instant;

use tokio::net::TcpStream;
use tokio::process::Command;
use tokio::time::timeout;

use crate::application::config::ProbeConfig;
use crate::domain::probe::{ProbeOutcome, ProbeReport, Prober};
use crate::domain::value_objects::{Ipv4Address, Port};

/// Echo count flag of the platform ping tool
const PING_COUNT_FLAG: &str = if cfg!(windows) { "-n" } else { "-c" };

/// Prober backed by the operating system
#[derive(Debug, Clone)]
pub struct SystemProber {
    config: Arc<ProbeConfig>,
}

impl SystemProber {
    pub fn new(config: Arc<ProbeConfig>) -> Self {
        Self { config }
    }

    async fn run_ping(&self, ip: &Ipv4Address) -> ProbeOutcome {
        let mut command = Command::new(&self.config.ping_program);
        command
            .arg(PING_COUNT_FLAG)
            .arg(self.config.ping_count.to_string())
            .arg(ip.as_str())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let child = match command.spawn() {
            Ok(child) => child,
            Err(e) => {
                tracing::warn!(program = %self.config.ping_program, error = %e, "Failed to start ping");
                return ProbeOutcome::Failed {
                    message: e.to_string(),
                };
            }
        };

        // Dropping the child on timeout kills it
        match timeout(self.config.timeout, child.wait_with_output()).await {
            Err(_) => ProbeOutcome::TimedOut,
            Ok(Err(e)) => ProbeOutcome::Failed {
                message: e.to_string(),
            },
            Ok(Ok(output)) => {
                let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
                if output.status.success() {
                    ProbeOutcome::Reachable { output: stdout }
                } else {
                    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
                    ProbeOutcome::Unreachable {
                        output: if stderr.trim().is_empty() { stdout } else { stderr },
                    }
                }
            }
        }
    }

    async fn run_tcp_connect(&self, addr: SocketAddr) -> ProbeOutcome {
        match timeout(self.config.timeout, TcpStream::connect(addr)).await {
            Err(_) => ProbeOutcome::TimedOut,
            Ok(Ok(stream)) => {
                drop(stream);
                ProbeOutcome::Reachable {
                    output: String::new(),
                }
            }
            Ok(Err(e)) if e.kind() == io::ErrorKind::ConnectionRefused => ProbeOutcome::Refused,
            Ok(Err(e)) => ProbeOutcome::Failed {
                message: e.to_string(),
            },
        }
    }
}

impl Prober for SystemProber {
    async fn ping(&self, ip: &Ipv4Address) -> ProbeReport {
        let started = Instant::now();
        let outcome = self.run_ping(ip).await;
        ProbeReport {
            target: ip.to_string(),
            outcome,
            elapsed: started.elapsed(),
        }
    }

    async fn tcp_connect(&self, ip: &Ipv4Address, port: Port) -> ProbeReport {
        let started = Instant::now();
        let outcome = self
            .run_tcp_connect(SocketAddr::from((ip.to_std(), port.get())))
            .await;
        ProbeReport {
            target: format!("{ip}:{port}"),
            outcome,
            elapsed: started.elapsed(),
        }
    }
}
