use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;

const DEFAULT_DISPOSABLE_DOMAINS: &str = include_str!("../../data/disposable_domains.txt");
const DEFAULT_ROLE_PREFIXES: &str = include_str!("../../data/role_prefixes.txt");

/// Read-only reference data consulted during verification: the set of
/// known disposable-email domains and the list of role-style local-part
/// prefixes.
///
/// Built once at startup and shared across workers; never mutated
/// afterwards. Ships with embedded default lists; either list can be
/// replaced with a file of the same format (one entry per line, blank
/// lines and `#` comments skipped).
pub struct ReferenceLists {
    disposable_domains: HashSet<String>,
    role_prefixes: Vec<String>,
}

impl ReferenceLists {
    pub fn new(disposable_domains: HashSet<String>, role_prefixes: Vec<String>) -> Self {
        Self {
            disposable_domains,
            role_prefixes,
        }
    }

    /// The embedded default lists.
    pub fn builtin() -> Self {
        Self {
            disposable_domains: parse_entries(DEFAULT_DISPOSABLE_DOMAINS).collect(),
            role_prefixes: parse_entries(DEFAULT_ROLE_PREFIXES).collect(),
        }
    }

    /// Builds the lists from optional per-list file overrides, falling
    /// back to the embedded defaults for any list without an override.
    pub fn load(disposable: Option<&Path>, roles: Option<&Path>) -> io::Result<Self> {
        let disposable_domains = match disposable {
            Some(path) => parse_entries(&fs::read_to_string(path)?).collect(),
            None => parse_entries(DEFAULT_DISPOSABLE_DOMAINS).collect(),
        };
        let role_prefixes = match roles {
            Some(path) => parse_entries(&fs::read_to_string(path)?).collect(),
            None => parse_entries(DEFAULT_ROLE_PREFIXES).collect(),
        };

        Ok(Self {
            disposable_domains,
            role_prefixes,
        })
    }

    /// Exact membership of the lower-cased domain in the disposable set.
    /// An empty domain (address without `@`) is never a member.
    pub fn is_disposable(&self, domain: &str) -> bool {
        self.disposable_domains.contains(&domain.to_lowercase())
    }

    /// Starts-with match of the lower-cased local part against the role
    /// prefixes, so `admin+promo` and `support1` are caught alongside
    /// `admin`. An empty local part is never a match.
    pub fn is_role_based(&self, local_part: &str) -> bool {
        let local = local_part.to_lowercase();
        !local.is_empty()
            && self
                .role_prefixes
                .iter()
                .any(|prefix| local.starts_with(prefix.as_str()))
    }
}

/// Parses one entry per line, trimming whitespace, lower-casing, and
/// skipping blank lines and `#` comments.
fn parse_entries(text: &str) -> impl Iterator<Item = String> + '_ {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_lists_are_populated() {
        let lists = ReferenceLists::builtin();
        assert!(lists.is_disposable("mailinator.com"));
        assert!(lists.is_role_based("admin"));
    }

    #[test]
    fn disposable_match_is_exact() {
        let lists = ReferenceLists::builtin();
        assert!(lists.is_disposable("10minutemail.com"));
        // Subdomains and near-misses are not members.
        assert!(!lists.is_disposable("sub.mailinator.com"));
        assert!(!lists.is_disposable("mailinator.com.evil.org"));
        assert!(!lists.is_disposable("gmail.com"));
    }

    #[test]
    fn disposable_match_is_case_insensitive() {
        let lists = ReferenceLists::builtin();
        assert!(lists.is_disposable("Mailinator.COM"));
    }

    #[test]
    fn role_match_is_prefix_based() {
        let lists = ReferenceLists::builtin();
        assert!(lists.is_role_based("admin"));
        assert!(lists.is_role_based("administrator"));
        assert!(lists.is_role_based("admin+promo"));
        assert!(lists.is_role_based("support1"));
        assert!(lists.is_role_based("Support"));
        assert!(!lists.is_role_based("john.doe"));
    }

    #[test]
    fn empty_parts_are_never_members() {
        let lists = ReferenceLists::builtin();
        assert!(!lists.is_disposable(""));
        assert!(!lists.is_role_based(""));
    }

    #[test]
    fn parse_skips_blanks_and_comments() {
        let entries: Vec<String> =
            parse_entries("# comment\n\n  MailDrop.cc  \nadmin\n   \n# another\n").collect();
        assert_eq!(entries, vec!["maildrop.cc", "admin"]);
    }

    #[test]
    fn custom_lists_are_injectable() {
        let lists = ReferenceLists::new(
            HashSet::from(["trash.example".to_string()]),
            vec!["frontdesk".to_string()],
        );
        assert!(lists.is_disposable("trash.example"));
        assert!(!lists.is_disposable("mailinator.com"));
        assert!(lists.is_role_based("frontdesk+hotel"));
        assert!(!lists.is_role_based("admin"));
    }

    #[test]
    fn load_reads_override_files() {
        let dir = std::env::temp_dir().join("email-verifier-reference-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("disposable.txt");
        std::fs::write(&path, "# override\nburner.example\n").unwrap();

        let lists = ReferenceLists::load(Some(&path), None).unwrap();
        assert!(lists.is_disposable("burner.example"));
        assert!(!lists.is_disposable("mailinator.com"));
        // Role list falls back to the embedded default.
        assert!(lists.is_role_based("admin"));

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn load_reports_missing_files() {
        let missing = Path::new("/nonexistent/email-verifier/disposable.txt");
        assert!(ReferenceLists::load(Some(missing), None).is_err());
    }
}
