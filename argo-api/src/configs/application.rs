use crate::k8s::application::{
    APPLICATION_NAMESPACE, Application, ApplicationDestination, ApplicationSource,
    ApplicationSpec, SyncPolicy, SyncPolicyAutomated,
};
use crate::routes::applications::CreateApplicationRequest;

/// ArgoCD project every application is created in.
pub const APPLICATION_PROJECT: &str = "default";

/// Git revision applications track.
pub const TARGET_REVISION: &str = "HEAD";

/// API server of the cluster ArgoCD itself runs in.
pub const DESTINATION_SERVER: &str = "https://kubernetes.default.svc";

/// Namespace applications deploy their manifests into.
pub const DESTINATION_NAMESPACE: &str = "default";

impl From<CreateApplicationRequest> for Application {
    /// Builds the resource for an already validated request.
    ///
    /// Only the name, repository url, and path come from the request. The
    /// cluster url is not used: the destination is always the local cluster.
    fn from(request: CreateApplicationRequest) -> Self {
        let spec = ApplicationSpec {
            project: APPLICATION_PROJECT.to_string(),
            source: Some(ApplicationSource {
                repo_url: request.repository_url,
                path: Some(request.path),
                target_revision: Some(TARGET_REVISION.to_string()),
            }),
            destination: ApplicationDestination {
                server: Some(DESTINATION_SERVER.to_string()),
                namespace: Some(DESTINATION_NAMESPACE.to_string()),
                name: None,
            },
            sync_policy: Some(SyncPolicy {
                automated: Some(SyncPolicyAutomated {
                    prune: true,
                    self_heal: true,
                }),
            }),
        };

        let mut application = Application::new(&request.application_name, spec);
        application.metadata.namespace = Some(APPLICATION_NAMESPACE.to_string());

        application
    }
}
