//! HTTP control surface for ArgoCD `Application` resources.
//!
//! Exposes list, create, and delete endpoints that translate JSON requests
//! into `argoproj.io/v1alpha1` custom resources and forward them to the
//! Kubernetes API server with a single call each.

pub mod config;
pub mod configs;
pub mod k8s;
pub mod routes;
pub mod span_builder;
pub mod startup;
