#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::Mutex;

use argo_api::k8s::application::Application;
use argo_api::k8s::{K8sClient, K8sError};
use async_trait::async_trait;
use kube::ResourceExt;
use kube::core::ErrorResponse;

/// In-memory stand-in for the ArgoCD namespace of a cluster.
///
/// Mirrors the API server's answers for the cases the API relays: list
/// honors the limit, duplicate creates conflict, and deleting an unknown name
/// is not found.
pub struct MockK8sClient {
    applications: Mutex<BTreeMap<String, Application>>,
    failure: Option<String>,
}

impl MockK8sClient {
    pub fn new() -> Self {
        Self {
            applications: Mutex::new(BTreeMap::new()),
            failure: None,
        }
    }

    /// A client whose every call fails with an internal error carrying `message`.
    pub fn failing(message: &str) -> Self {
        Self {
            applications: Mutex::new(BTreeMap::new()),
            failure: Some(message.to_string()),
        }
    }

    pub fn application(&self, name: &str) -> Option<Application> {
        self.applications.lock().unwrap().get(name).cloned()
    }

    pub fn application_count(&self) -> usize {
        self.applications.lock().unwrap().len()
    }

    fn check_failure(&self) -> Result<(), K8sError> {
        match &self.failure {
            Some(message) => Err(api_error(500, "InternalError", message.clone())),
            None => Ok(()),
        }
    }
}

fn api_error(code: u16, reason: &str, message: String) -> K8sError {
    K8sError::Kube(kube::Error::Api(ErrorResponse {
        status: "Failure".to_string(),
        message,
        reason: reason.to_string(),
        code,
    }))
}

#[async_trait]
impl K8sClient for MockK8sClient {
    async fn list_applications(&self, limit: u32) -> Result<Vec<Application>, K8sError> {
        self.check_failure()?;

        let applications = self.applications.lock().unwrap();
        Ok(applications.values().take(limit as usize).cloned().collect())
    }

    async fn create_application(
        &self,
        application: &Application,
    ) -> Result<Application, K8sError> {
        self.check_failure()?;

        let name = application.name_any();
        let mut applications = self.applications.lock().unwrap();
        if applications.contains_key(&name) {
            return Err(api_error(
                409,
                "AlreadyExists",
                format!("applications.argoproj.io \"{name}\" already exists"),
            ));
        }

        applications.insert(name, application.clone());

        Ok(application.clone())
    }

    async fn delete_application(&self, name: &str) -> Result<(), K8sError> {
        self.check_failure()?;

        match self.applications.lock().unwrap().remove(name) {
            Some(_) => Ok(()),
            None => Err(api_error(
                404,
                "NotFound",
                format!("applications.argoproj.io \"{name}\" not found"),
            )),
        }
    }
}
