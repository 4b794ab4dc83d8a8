use argo_config::Config;
use argo_config::shared::{KubernetesConfig, SentryConfig, ServerConfig};
use serde::Deserialize;

/// Complete configuration for the Argo API service.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// HTTP server settings.
    pub application: ServerConfig,
    /// Where to find cluster credentials when not running in-cluster.
    #[serde(default)]
    pub kubernetes: KubernetesConfig,
    /// Optional Sentry configuration for error tracking.
    pub sentry: Option<SentryConfig>,
}

impl Config for ApiConfig {
    const LIST_PARSE_KEYS: &'static [&'static str] = &[];
}
