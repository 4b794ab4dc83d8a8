use async_trait::async_trait;
use argo_config::shared::ClusterCredentials;
use kube::api::{DeleteParams, ListParams, PostParams};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Api, Client, Config};
use tracing::{debug, info};

use crate::k8s::application::{APPLICATION_NAMESPACE, Application};
use crate::k8s::{K8sClient, K8sError};

/// [`K8sClient`] backed by the [`kube`] crate.
pub struct HttpK8sClient {
    applications: Api<Application>,
}

impl HttpK8sClient {
    /// Builds a client for the ArgoCD namespace from the given credentials.
    pub async fn new(credentials: &ClusterCredentials) -> Result<HttpK8sClient, K8sError> {
        // kube and reqwest may both enable a rustls backend, so one has to be
        // installed explicitly before the first TLS handshake.
        let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

        let config = match credentials {
            ClusterCredentials::InCluster => {
                info!("using in-cluster service account credentials");
                Config::incluster()?
            }
            ClusterCredentials::Kubeconfig(path) => {
                info!(path = %path.display(), "using kubeconfig credentials");
                let kubeconfig = Kubeconfig::read_from(path)?;
                Config::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default()).await?
            }
        };

        let client = Client::try_from(config)?;
        let applications = Api::namespaced(client, APPLICATION_NAMESPACE);

        Ok(HttpK8sClient { applications })
    }
}

#[async_trait]
impl K8sClient for HttpK8sClient {
    async fn list_applications(&self, limit: u32) -> Result<Vec<Application>, K8sError> {
        debug!(limit, "listing applications");

        let list_params = ListParams::default().limit(limit);
        let applications = self.applications.list(&list_params).await?;

        Ok(applications.items)
    }

    async fn create_application(
        &self,
        application: &Application,
    ) -> Result<Application, K8sError> {
        debug!("creating application");

        let created = self
            .applications
            .create(&PostParams::default(), application)
            .await?;

        Ok(created)
    }

    async fn delete_application(&self, name: &str) -> Result<(), K8sError> {
        debug!(name, "deleting application");

        self.applications
            .delete(name, &DeleteParams::default())
            .await?;

        Ok(())
    }
}
