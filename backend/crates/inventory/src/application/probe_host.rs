//! Probe Host Use Case
//!
//! Validates probe targets and runs them through a [`Prober`]. Probes are
//! public and do not consult the server store: any valid address can be
//! probed, tracked or not.

use std::sync::Arc;

use crate::domain::probe::{ProbeReport, Prober};
use crate::domain::value_objects::{Ipv4Address, Port, RawPort};
use crate::error::InventoryResult;

/// Probe Host Use Case
pub struct ProbeHostUseCase<P>
where
    P: Prober,
{
    prober: Arc<P>,
}

impl<P> ProbeHostUseCase<P>
where
    P: Prober,
{
    pub fn new(prober: Arc<P>) -> Self {
        Self { prober }
    }

    /// ICMP reachability of `ip`
    pub async fn ping(&self, ip: &str) -> InventoryResult<ProbeReport> {
        let ip = Ipv4Address::parse(ip)?;

        let report = self.prober.ping(&ip).await;
        log_report("ping", &report);
        Ok(report)
    }

    /// TCP reachability of `ip:port`
    pub async fn tcp_connect(&self, ip: &str, port: &str) -> InventoryResult<ProbeReport> {
        let ip = Ipv4Address::parse(ip)?;
        let port = Port::parse(&RawPort::Text(port.to_string()))?;

        let report = self.prober.tcp_connect(&ip, port).await;
        log_report("tcp", &report);
        Ok(report)
    }
}

fn log_report(kind: &'static str, report: &ProbeReport) {
    tracing::info!(
        probe = kind,
        target = %report.target,
        outcome = report.outcome_label(),
        elapsed_ms = report.elapsed.as_millis() as u64,
        "Probe finished"
    );
}
