use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Default DNS lookup timeout in seconds. Lookups against unreachable
/// resolvers must not hang a worker indefinitely.
const DEFAULT_DNS_TIMEOUT_SECS: u64 = 3;

/// Process configuration, read once at startup from the environment
/// (with `.env` support via dotenv, loaded by `main`).
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub dns_timeout: Duration,
    pub disposable_domains_file: Option<PathBuf>,
    pub role_prefixes_file: Option<PathBuf>,
}

impl Config {
    /// Reads configuration from environment variables, falling back to
    /// defaults for anything unset or unparseable:
    ///
    /// - `HOST` (default `127.0.0.1`)
    /// - `PORT` (default `8080`)
    /// - `DNS_TIMEOUT_SECS` (default `3`)
    /// - `DISPOSABLE_DOMAINS_FILE` (default: embedded list)
    /// - `ROLE_PREFIXES_FILE` (default: embedded list)
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parse_port(env::var("PORT").ok()),
            dns_timeout: parse_dns_timeout(env::var("DNS_TIMEOUT_SECS").ok()),
            disposable_domains_file: env::var("DISPOSABLE_DOMAINS_FILE").ok().map(PathBuf::from),
            role_prefixes_file: env::var("ROLE_PREFIXES_FILE").ok().map(PathBuf::from),
        }
    }
}

fn parse_port(raw: Option<String>) -> u16 {
    raw.and_then(|p| p.parse().ok()).unwrap_or(8080)
}

fn parse_dns_timeout(raw: Option<String>) -> Duration {
    let secs = raw
        .and_then(|t| t.parse().ok())
        .filter(|&t| t > 0)
        .unwrap_or(DEFAULT_DNS_TIMEOUT_SECS);
    Duration::from_secs(secs)
}
