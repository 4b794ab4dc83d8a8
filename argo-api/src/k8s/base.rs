use async_trait::async_trait;
use thiserror::Error;

use crate::k8s::application::Application;

/// Errors emitted by the Kubernetes integration.
///
/// Every variant displays the underlying error text unchanged so callers can
/// relay it as-is.
#[derive(Debug, Error)]
pub enum K8sError {
    /// An error returned by the [`kube`] client when talking to the API server.
    #[error(transparent)]
    Kube(#[from] kube::Error),

    /// The kubeconfig file could not be read or turned into a client config.
    #[error(transparent)]
    Kubeconfig(#[from] kube::config::KubeconfigError),

    /// In-cluster service-account credentials are unavailable.
    #[error(transparent)]
    InCluster(#[from] kube::config::InClusterError),
}

/// Client interface describing the ArgoCD operations used by the API.
///
/// Every method maps to exactly one call against the cluster. Implementations
/// must not retry.
#[async_trait]
pub trait K8sClient: Send + Sync {
    /// Lists at most `limit` applications from the ArgoCD namespace.
    async fn list_applications(&self, limit: u32) -> Result<Vec<Application>, K8sError>;

    /// Creates `application` and returns the object stored by the cluster.
    async fn create_application(&self, application: &Application)
    -> Result<Application, K8sError>;

    /// Deletes the application called `name`.
    ///
    /// No existence check is made, a missing application surfaces as the
    /// cluster's own error.
    async fn delete_application(&self, name: &str) -> Result<(), K8sError>;
}
