#![allow(dead_code)]

use argo_api::routes::applications::CreateApplicationRequest;

use crate::support::test_app::TestApp;

/// Returns a complete create request for `name`.
pub fn new_application_request(name: &str) -> CreateApplicationRequest {
    CreateApplicationRequest {
        application_name: name.to_string(),
        repository_url: "https://git/repo".to_string(),
        cluster_url: "https://cluster".to_string(),
        path: "k8s/".to_string(),
    }
}

/// Creates an application called `name` and asserts it succeeded.
pub async fn create_application(app: &TestApp, name: &str) {
    let response = app.create_application(&new_application_request(name)).await;
    assert!(
        response.status().is_success(),
        "failed to create application {name}"
    );
}
