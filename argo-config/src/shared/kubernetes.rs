use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable that selects in-cluster service-account credentials.
const IN_CLUSTER_ENV_NAME: &str = "IN_CLUSTER";

/// Kubeconfig location relative to the user's home directory.
const DEFAULT_KUBECONFIG_PATH: [&str; 2] = [".kube", "config"];

/// Settings describing how to reach the Kubernetes API server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KubernetesConfig {
    /// Path to a kubeconfig file.
    ///
    /// When unset, `$HOME/.kube/config` is used, or in-cluster credentials
    /// when `HOME` is not set either. Ignored when running with in-cluster
    /// credentials.
    #[serde(default)]
    pub kubeconfig: Option<PathBuf>,
}

/// The credential source chosen once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClusterCredentials {
    /// Service-account credentials mounted into the pod.
    InCluster,
    /// A kubeconfig file on the local filesystem.
    Kubeconfig(PathBuf),
}

impl ClusterCredentials {
    /// Resolves the credential source from the `IN_CLUSTER` environment
    /// variable and the configured kubeconfig path.
    pub fn resolve(config: &KubernetesConfig) -> Self {
        let in_cluster = std::env::var(IN_CLUSTER_ENV_NAME).ok();
        let home = std::env::var_os("HOME").map(PathBuf::from);

        Self::from_parts(in_cluster.as_deref(), config.kubeconfig.clone(), home)
    }

    fn from_parts(
        in_cluster: Option<&str>,
        kubeconfig: Option<PathBuf>,
        home: Option<PathBuf>,
    ) -> Self {
        if in_cluster == Some("true") {
            return Self::InCluster;
        }

        let path = kubeconfig.or_else(|| {
            home.map(|home| {
                DEFAULT_KUBECONFIG_PATH
                    .iter()
                    .fold(home, |path, segment| path.join(segment))
            })
        });

        match path {
            Some(path) => Self::Kubeconfig(path),
            None => Self::InCluster,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_cluster_flag_wins_over_kubeconfig() {
        let credentials = ClusterCredentials::from_parts(
            Some("true"),
            Some(PathBuf::from("/etc/kubeconfig")),
            Some(PathBuf::from("/home/argo")),
        );

        assert_eq!(credentials, ClusterCredentials::InCluster);
    }

    #[test]
    fn only_the_literal_true_selects_in_cluster() {
        let credentials =
            ClusterCredentials::from_parts(Some("TRUE"), None, Some(PathBuf::from("/home/argo")));

        assert_eq!(
            credentials,
            ClusterCredentials::Kubeconfig(PathBuf::from("/home/argo/.kube/config"))
        );
    }

    #[test]
    fn configured_kubeconfig_is_preferred_over_home() {
        let credentials = ClusterCredentials::from_parts(
            None,
            Some(PathBuf::from("/etc/kubeconfig")),
            Some(PathBuf::from("/home/argo")),
        );

        assert_eq!(
            credentials,
            ClusterCredentials::Kubeconfig(PathBuf::from("/etc/kubeconfig"))
        );
    }

    #[test]
    fn missing_home_falls_back_to_in_cluster() {
        let credentials = ClusterCredentials::from_parts(None, None, None);

        assert_eq!(credentials, ClusterCredentials::InCluster);
    }

    #[test]
    fn configured_kubeconfig_is_used_without_home() {
        let credentials =
            ClusterCredentials::from_parts(None, Some(PathBuf::from("/etc/kubeconfig")), None);

        assert_eq!(
            credentials,
            ClusterCredentials::Kubeconfig(PathBuf::from("/etc/kubeconfig"))
        );
    }
}
