use serde::{Deserialize, Serialize};

/// Sentry error tracking configuration.
///
/// When present, the API reports server errors and panics to the configured
/// project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentryConfig {
    /// Sentry DSN (Data Source Name) for error reporting.
    pub dsn: String,
}
