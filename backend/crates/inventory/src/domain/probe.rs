//! Reachability Probes
//!
//! Outcome types and the [`Prober`] seam. The system implementation lives
//! in `infra::system_prober`; tests substitute their own.

use std::time::Duration;

use crate::domain::value_objects::{Ipv4Address, Port};

/// How a single probe ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// Host answered. `output` is the tool's stdout (empty for TCP).
    Reachable { output: String },
    /// Probe ran to completion and the host did not answer
    Unreachable { output: String },
    /// Deadline elapsed before the probe finished
    TimedOut,
    /// Host actively refused the TCP connection
    Refused,
    /// Probe could not be carried out (missing tool, socket error, ...)
    Failed { message: String },
}

/// Result of a probe against one target
#[derive(Debug, Clone)]
pub struct ProbeReport {
    /// `ip` for ping, `ip:port` for TCP
    pub target: String,
    pub outcome: ProbeOutcome,
    pub elapsed: Duration,
}

impl ProbeReport {
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, ProbeOutcome::Reachable { .. })
    }

    pub fn outcome_label(&self) -> &'static str {
        match self.outcome {
            ProbeOutcome::Reachable { .. } => "reachable",
            ProbeOutcome::Unreachable { .. } => "unreachable",
            ProbeOutcome::TimedOut => "timed_out",
            ProbeOutcome::Refused => "refused",
            ProbeOutcome::Failed { .. } => "failed",
        }
    }
}

/// Probe implementation
///
/// Implementations never error: every failure mode is a [`ProbeOutcome`].
#[trait_variant::make(Prober: Send)]
pub trait LocalProber {
    /// ICMP echo via the system ping tool
    async fn ping(&self, ip: &Ipv4Address) -> ProbeReport;

    /// Open and immediately close a TCP connection
    async fn tcp_connect(&self, ip: &Ipv4Address, port: Port) -> ProbeReport;
}
