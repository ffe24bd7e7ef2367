use actix_web::web;

/// # Liveness & Health Endpoints
///
/// `GET /` answers with a plain-text liveness body; `GET /health`
/// returns the JSON status document with a timestamp.
pub mod health;

/// # Email Verification Endpoint
///
/// `GET /verify-email?email=<address>` runs the plausibility checks and
/// returns the scored validation report.
pub mod verify;

/// # API Route Configuration
///
/// Registers every endpoint at the server root:
///
/// ```text
/// GET /                     - Liveness probe (plain text)
/// GET /health               - Health status (JSON)
/// GET /verify-email?email=  - Email verification report
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes)
        .configure(verify::configure_routes);
}
