/// Live DNS lookups behind the `DomainResolver` seam.
pub mod dns;

/// Startup-loaded disposable-domain and role-prefix reference lists.
pub mod reference;

/// The permissive email shape check.
pub mod syntax;

use crate::models::report::{CheckResults, ValidationReport};
use crate::validator::dns::{DomainResolver, ResolutionError};
use crate::validator::reference::ReferenceLists;
use tracing::debug;

/// # Email Verifier
///
/// Turns a raw email string into a [`ValidationReport`] by running five
/// short-circuiting checks and scoring their outcomes:
///
/// 1. syntax shape check
/// 2. domain existence (address records; only when syntax passed)
/// 3. MX record presence (only when the domain exists)
/// 4. disposable-domain membership
/// 5. role-based local-part prefix
///
/// Stateless across calls; the only held state is the injected resolver
/// and the immutable reference lists, so one instance serves unlimited
/// concurrent callers. DNS lookups block, so callers on an async
/// executor dispatch [`EmailVerifier::verify`] to a blocking pool.
pub struct EmailVerifier {
    resolver: Box<dyn DomainResolver>,
    lists: ReferenceLists,
}

impl EmailVerifier {
    pub fn new(resolver: Box<dyn DomainResolver>, lists: ReferenceLists) -> Self {
        Self { resolver, lists }
    }

    /// Verifies one email address.
    ///
    /// The input is normalized (trimmed, lower-cased) exactly once, here;
    /// the report echoes the normalized form. Never fails: resolution
    /// errors collapse to negative check results.
    pub fn verify(&self, raw: &str) -> ValidationReport {
        let email = raw.trim().to_lowercase();
        let (local_part, domain) = split_parts(&email);

        let syntax = syntax::is_plausible_syntax(&email);
        let domain_exists = syntax && collapse("address", self.resolver.domain_exists(domain));
        let mx_records = domain_exists && collapse("mx", self.resolver.has_mx_records(domain));
        let is_disposable = self.lists.is_disposable(domain);
        let is_role_based = self.lists.is_role_based(local_part);

        let validations = CheckResults {
            syntax,
            domain_exists,
            mx_records,
            is_disposable,
            is_role_based,
        };

        ValidationReport::new(email, validations)
    }
}

/// Splits at the first `@` into (local part, domain). Both parts are
/// empty when no `@` is present; extraction never fails.
fn split_parts(email: &str) -> (&str, &str) {
    email.split_once('@').unwrap_or(("", ""))
}

/// Collapses a lookup outcome to a boolean, logging the distinguishing
/// error before it disappears. NXDOMAIN, timeouts and network failures
/// all land on `false`.
fn collapse(lookup: &str, outcome: Result<bool, ResolutionError>) -> bool {
    match outcome {
        Ok(found) => found,
        Err(error) => {
            debug!(%lookup, %error, "lookup failed, treating as negative");
            false
        }
    }
}
