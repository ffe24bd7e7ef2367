use regex::Regex;
use std::sync::LazyLock;

/// Anchored shape pattern: local part of word characters, dots and
/// hyphens, an `@`, a domain of the same character class, then a final
/// dot-separated label of word characters.
static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w.-]+@[\w.-]+\.\w+$").expect("email shape pattern compiles"));

/// Checks whether an email address has a plausible shape.
///
/// This is deliberately a shape check, not full RFC 5322 validation:
/// quoted local parts, `+` tags and domain literals all fail it. Pure,
/// total and deterministic; no I/O.
///
/// # Examples
/// ```
/// use email_verifier::validator::syntax::is_plausible_syntax;
///
/// assert!(is_plausible_syntax("john.doe@example.com"));
/// assert!(!is_plausible_syntax("not-an-email"));
/// ```
pub fn is_plausible_syntax(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}
