//! Process configuration
//!
//! Everything is read from environment variables (after `.env` is loaded).
//! Parsing goes through a lookup function so it can be exercised without
//! touching the real environment.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, bail};
use auth::AuthConfig;
use auth::BootstrapAdmin;
use auth::application::bootstrap::{DEFAULT_ADMIN_PASSWORD, DEFAULT_ADMIN_USERNAME};
use inventory::ProbeConfig;

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:5000";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// PostgreSQL URL. `None` runs on in-memory stores.
    pub database_url: Option<String>,
    pub listen_addr: SocketAddr,
    pub auth: AuthConfig,
    pub bootstrap: BootstrapAdmin,
    pub probe: ProbeConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Blank values count as unset
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let listen_addr = get("LISTEN_ADDR")
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string())
            .parse()
            .context("LISTEN_ADDR must be a socket address such as 0.0.0.0:5000")?;

        let mut auth = match get("SESSION_SECRET") {
            Some(secret_b64) => AuthConfig {
                session_secret: decode_secret(&secret_b64)?,
                ..AuthConfig::default()
            },
            None if cfg!(debug_assertions) => AuthConfig::with_random_secret(),
            None => bail!("SESSION_SECRET must be set in production"),
        };
        auth.cookie_secure = match get("COOKIE_SECURE") {
            Some(v) => parse_bool(&v).context("COOKIE_SECURE must be true or false")?,
            None => !cfg!(debug_assertions),
        };
        auth.password_pepper = get("PASSWORD_PEPPER").map(String::into_bytes);

        let bootstrap = BootstrapAdmin {
            username: get("ADMIN_USERNAME").unwrap_or_else(|| DEFAULT_ADMIN_USERNAME.to_string()),
            password: get("ADMIN_PASSWORD").unwrap_or_else(|| DEFAULT_ADMIN_PASSWORD.to_string()),
        };

        let mut probe = ProbeConfig::default();
        if let Some(secs) = get("PROBE_TIMEOUT_SECS") {
            let secs: u64 = secs
                .trim()
                .parse()
                .context("PROBE_TIMEOUT_SECS must be a whole number of seconds")?;
            if secs == 0 {
                bail!("PROBE_TIMEOUT_SECS must be at least 1");
            }
            probe.timeout = Duration::from_secs(secs);
        }
        if let Some(program) = get("PING_PROGRAM") {
            probe.ping_program = program;
        }

        Ok(Self {
            database_url: get("DATABASE_URL"),
            listen_addr,
            auth,
            bootstrap,
            probe,
        })
    }
}

fn decode_secret(secret_b64: &str) -> anyhow::Result<[u8; 32]> {
    let bytes = platform::crypto::from_base64(secret_b64)
        .context("SESSION_SECRET must be base64")?;
    bytes
        .try_into()
        .map_err(|b: Vec<u8>| anyhow::anyhow!("SESSION_SECRET must decode to 32 bytes, got {}", b.len()))
}

fn parse_bool(v: &str) -> Option<bool> {
    match v.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
