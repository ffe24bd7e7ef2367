use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Outcome of the five individual plausibility checks.
///
/// Each flag is computed independently; a check that is skipped because
/// an upstream check failed (no domain lookup without valid syntax, no
/// MX lookup without a resolving domain) is reported as `false`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
pub struct CheckResults {
    pub syntax: bool,
    pub domain_exists: bool,
    pub mx_records: bool,
    pub is_disposable: bool,
    pub is_role_based: bool,
}

impl CheckResults {
    /// Number of checks counting toward the score. Disposable and
    /// role-based are negative signals, so they count when absent.
    pub fn passing(&self) -> u8 {
        [
            self.syntax,
            self.domain_exists,
            self.mx_records,
            !self.is_disposable,
            !self.is_role_based,
        ]
        .iter()
        .filter(|&&passed| passed)
        .count() as u8
    }
}

/// Coarse plausibility label, a pure function of the score.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum VerificationStatus {
    Valid,
    Risky,
    Invalid,
}

impl VerificationStatus {
    /// Maps a score from the fixed set {0, 50, 80, 100} to its label.
    pub fn from_score(score: u8) -> Self {
        match score {
            100 | 80 => Self::Valid,
            50 => Self::Risky,
            _ => Self::Invalid,
        }
    }
}

/// Maps the count of passing checks to a score.
///
/// Symmetric in the five checks: only the count matters, not which
/// specific checks passed.
pub fn score_for(checks: &CheckResults) -> u8 {
    match checks.passing() {
        5 => 100,
        4 => 80,
        3 => 50,
        _ => 0,
    }
}

/// # Validation Report
///
/// The complete outcome of verifying one email address.
///
/// ## Example JSON
/// ```json
/// {
///   "email": "john.doe@example.com",
///   "validations": {
///     "syntax": true,
///     "domain_exists": true,
///     "mx_records": true,
///     "is_disposable": false,
///     "is_role_based": false
///   },
///   "score": 100,
///   "status": "VALID"
/// }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ValidationReport {
    /// The normalized (trimmed, lower-cased) address that was checked.
    pub email: String,
    pub validations: CheckResults,
    pub score: u8,
    pub status: VerificationStatus,
}

impl ValidationReport {
    pub fn new(email: String, validations: CheckResults) -> Self {
        let score = score_for(&validations);
        Self {
            email,
            validations,
            score,
            status: VerificationStatus::from_score(score),
        }
    }
}
