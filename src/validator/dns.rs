use std::time::Duration;
use thiserror::Error;
use trust_dns_resolver::{
    Resolver,
    config::{ResolverConfig, ResolverOpts},
    error::ResolveError,
    proto::rr::RecordType,
};

/// Internal error type for DNS lookups.
///
/// The verifier collapses every variant to a negative check result, but
/// the distinction is kept here so it can be logged before collapsing.
#[derive(Debug, Error)]
pub enum ResolutionError {
    #[error("failed to construct DNS resolver: {0}")]
    Init(String),
    #[error("DNS lookup failed: {0}")]
    Lookup(#[from] ResolveError),
}

/// The verifier's seam for DNS: answers whether a domain resolves and
/// whether it publishes mail-exchange records.
///
/// Implementations are blocking; callers dispatch them off the async
/// executor (see `routes::verify`).
#[cfg_attr(test, mockall::automock)]
pub trait DomainResolver: Send + Sync {
    /// Whether the domain resolves via an address-record lookup.
    fn domain_exists(&self, domain: &str) -> Result<bool, ResolutionError>;

    /// Whether at least one MX record is published for the domain.
    fn has_mx_records(&self, domain: &str) -> Result<bool, ResolutionError>;
}

/// Live DNS checker backed by a blocking trust-dns `Resolver`.
pub struct DnsChecker {
    timeout: Duration,
}

impl DnsChecker {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Builds a resolver with the configured per-request timeout and
    /// 2 retry attempts over the default upstream configuration.
    fn resolver(&self) -> Result<Resolver, ResolutionError> {
        let mut opts = ResolverOpts::default();
        opts.timeout = self.timeout;
        opts.attempts = 2;

        Resolver::new(ResolverConfig::default(), opts)
            .map_err(|e| ResolutionError::Init(e.to_string()))
    }
}

impl DomainResolver for DnsChecker {
    /// Checks A records first, falling back to AAAA for IPv6-only hosts.
    fn domain_exists(&self, domain: &str) -> Result<bool, ResolutionError> {
        let resolver = self.resolver()?;

        if let Ok(records) = resolver.lookup(domain, RecordType::A) {
            if records.iter().next().is_some() {
                return Ok(true);
            }
        }

        let records = resolver.lookup(domain, RecordType::AAAA)?;
        Ok(records.iter().next().is_some())
    }

    fn has_mx_records(&self, domain: &str) -> Result<bool, ResolutionError> {
        let resolver = self.resolver()?;
        let records = resolver.mx_lookup(domain)?;
        Ok(records.iter().next().is_some())
    }
}
