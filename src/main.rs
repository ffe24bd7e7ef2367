use actix_web::{App, HttpServer, web::Data};
use email_verifier::config::Config;
use email_verifier::openapi::ApiDoc;
use email_verifier::validator::EmailVerifier;
use email_verifier::validator::dns::DnsChecker;
use email_verifier::validator::reference::ReferenceLists;
use tracing::info;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Email Verifier Service Entry Point
///
/// Configures and launches the Actix-web HTTP server with:
/// - Email plausibility endpoint at `/verify-email`
/// - Liveness probe at `/` and health status at `/health`
/// - Swagger UI for API documentation
/// - Environment configuration via `.env` file
///
/// # Endpoints
/// - Verification: `GET /verify-email?email=<address>`
/// - Liveness: `GET /`
/// - Health: `GET /health`
/// - Swagger UI: `/swagger-ui/`
/// - OpenAPI spec: `/api-docs/openapi.json`
///
/// # Configuration
/// - Server binds to `127.0.0.1:8080` by default (`HOST`/`PORT`)
/// - DNS lookup timeout via `DNS_TIMEOUT_SECS`
/// - Reference lists overridable via `DISPOSABLE_DOMAINS_FILE` and
///   `ROLE_PREFIXES_FILE`
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();

    let lists = ReferenceLists::load(
        config.disposable_domains_file.as_deref(),
        config.role_prefixes_file.as_deref(),
    )?;
    let resolver = DnsChecker::new(config.dns_timeout);
    let verifier = Data::new(EmailVerifier::new(Box::new(resolver), lists));

    info!(
        host = %config.host,
        port = config.port,
        dns_timeout_secs = config.dns_timeout.as_secs(),
        "starting email verifier"
    );

    let bind_addr = (config.host.clone(), config.port);

    HttpServer::new(move || {
        let openapi = ApiDoc::openapi();

        App::new()
            .app_data(verifier.clone())
            .configure(email_verifier::routes::configure)
            .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi))
    })
    .bind(bind_addr)?
    .run()
    .await
}
