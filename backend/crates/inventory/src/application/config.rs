//! Application Configuration
//!
//! Settings for reachability probes.

use std::time::Duration;

/// Probe configuration
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    /// Deadline for a whole probe (ping run or TCP connect)
    pub timeout: Duration,
    /// Echo requests sent per ping
    pub ping_count: u32,
    /// Executable used for ping
    pub ping_program: String,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(5),
            ping_count: 4,
            ping_program: "ping".to_string(),
        }
    }
}

impl ProbeConfig {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_ping_program(mut self, program: impl Into<String>) -> Self {
        self.ping_program = program.into();
        self
    }
}
