use crate::models::report::ValidationReport;
use crate::validator::EmailVerifier;
use actix_web::error::ErrorInternalServerError;
use actix_web::{HttpResponse, Responder, get, web};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info};
use utoipa::IntoParams;
use uuid::Uuid;

#[derive(Deserialize, IntoParams)]
pub struct VerifyEmailQuery {
    /// The email address to verify.
    email: Option<String>,
}

/// # Email Verification Endpoint
///
/// Runs the plausibility pipeline against the supplied address:
/// 1. Syntax shape check
/// 2. Domain existence (DNS address records)
/// 3. MX record presence
/// 4. Disposable-domain membership
/// 5. Role-based local-part detection
///
/// ## Request
/// - Method: GET
/// - Query Parameters:
///   - `email` (required): the address to verify
///
/// ## Responses
/// - **200 OK**: Validation report with per-check results, score and status
/// - **400 Bad Request**: `email` query parameter missing or empty
///
/// ## Example
/// ```text
/// GET /verify-email?email=John.Doe@Example.com
/// ```
#[utoipa::path(
    get,
    path = "/verify-email",
    params(VerifyEmailQuery),
    responses(
        (status = 200, description = "Validation report", body = ValidationReport),
        (status = 400, description = "Missing or empty email query parameter")
    ),
    tag = "Email Verification"
)]
#[get("/verify-email")]
pub async fn verify_email(
    query: web::Query<VerifyEmailQuery>,
    verifier: web::Data<EmailVerifier>,
) -> Result<impl Responder, actix_web::Error> {
    let Some(email) = query.into_inner().email.filter(|e| !e.is_empty()) else {
        return Ok(HttpResponse::BadRequest().json(json!({
            "error": "Email query parameter is required"
        })));
    };

    let request_id = Uuid::new_v4();
    info!(%request_id, email = %email, "verifying email address");

    // DNS lookups block, so the whole pipeline runs on the blocking pool.
    let verifier = verifier.into_inner();
    let report = web::block(move || verifier.verify(&email))
        .await
        .map_err(|e| ErrorInternalServerError(format!("verification task failed: {e}")))?;

    debug!(%request_id, score = report.score, status = ?report.status, "verification complete");

    Ok(HttpResponse::Ok().json(report))
}

/// Configures the verification route at the server root.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(verify_email);
}
