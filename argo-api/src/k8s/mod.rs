//! Kubernetes integration for the Argo API.
//!
//! Handlers depend on the [`K8sClient`] trait only. The default
//! implementation, [`http::HttpK8sClient`], talks to the cluster with the
//! [`kube`] crate using either in-cluster service-account credentials or a
//! kubeconfig file, chosen once at startup.
//!
//! See [`application`] for the ArgoCD `Application` custom resource.

pub mod application;
mod base;
pub mod http;

pub use base::*;
