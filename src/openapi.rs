use utoipa::OpenApi;

/// OpenAPI Specification Documentation
///
/// Defines the API contract using OpenAPI 3.0 format with utoipa
/// procedural macros.
///
/// # Endpoints
/// - Liveness: `GET /`
/// - Health Check: `GET /health`
/// - Email Verification: `GET /verify-email`
///
/// # Schemas
/// - `HealthResponse`: Service status payload
/// - `ValidationReport`: Scored verification outcome
/// - `CheckResults`: Per-check boolean results
/// - `VerificationStatus`: VALID / RISKY / INVALID label
///
/// # Note
/// The OpenAPI spec is generated at compile time from these annotations.
/// Any changes to the API surface should be reflected here first to
/// maintain documentation accuracy.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health::index,
        crate::routes::health::health,
        crate::routes::verify::verify_email,
    ),
    components(
        schemas(
            crate::models::health::HealthResponse,
            crate::models::report::ValidationReport,
            crate::models::report::CheckResults,
            crate::models::report::VerificationStatus
        )
    ),
    tags(
        (name = "Health Check", description = "Service health monitoring endpoints"),
        (name = "Email Verification", description = "Email address plausibility endpoints")
    ),
    info(
        description = "API for scoring the plausibility of email addresses",
        title = "Email Verifier API",
        version = "0.1.0",
    )
)]
pub struct ApiDoc;
