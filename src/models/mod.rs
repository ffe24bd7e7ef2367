/// # Health Status Response
///
/// Represents the operational status of the service with a timestamp.
/// Used as the response format for the health check endpoint.
pub mod health;

/// # Validation Report
///
/// The outcome of one email verification: the normalized address, the
/// five individual check results, the derived score and the status label.
pub mod report;
