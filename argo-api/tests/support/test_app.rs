#![allow(dead_code)]

use argo_api::routes::applications::CreateApplicationRequest;
use argo_api::startup::run;
use std::io;
use std::net::TcpListener;
use std::sync::Arc;

use crate::support::k8s_client::MockK8sClient;

pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub k8s_client: Arc<MockK8sClient>,
    server_handle: tokio::task::JoinHandle<io::Result<()>>,
}

impl TestApp {
    pub async fn list_applications(&self) -> reqwest::Response {
        self.api_client
            .get(format!("{}/argo/list", &self.address))
            .send()
            .await
            .expect("failed to execute request")
    }

    pub async fn create_application(
        &self,
        request: &CreateApplicationRequest,
    ) -> reqwest::Response {
        self.api_client
            .post(format!("{}/argo/create", &self.address))
            .json(request)
            .send()
            .await
            .expect("failed to execute request")
    }

    pub async fn create_application_raw(&self, body: &'static str) -> reqwest::Response {
        self.api_client
            .post(format!("{}/argo/create", &self.address))
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .expect("failed to execute request")
    }

    pub async fn delete_application(&self, name: &str) -> reqwest::Response {
        self.api_client
            .delete(format!("{}/argo/delete/{name}", &self.address))
            .send()
            .await
            .expect("failed to execute request")
    }

    /// Lists applications and decodes the returned names.
    pub async fn application_names(&self) -> Vec<String> {
        let response = self.list_applications().await;
        assert!(response.status().is_success());
        response
            .json()
            .await
            .expect("failed to deserialize response")
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        self.server_handle.abort();
    }
}

pub async fn spawn_test_app() -> TestApp {
    spawn_test_app_with(MockK8sClient::new()).await
}

pub async fn spawn_test_app_with(k8s_client: MockK8sClient) -> TestApp {
    let base_address = "127.0.0.1";
    let listener =
        TcpListener::bind(format!("{base_address}:0")).expect("failed to bind random port");
    let port = listener.local_addr().unwrap().port();

    let k8s_client = Arc::new(k8s_client);

    let server = run(listener, k8s_client.clone()).expect("failed to start server");
    let server_handle = tokio::spawn(server);

    TestApp {
        address: format!("http://{base_address}:{port}"),
        api_client: reqwest::Client::new(),
        k8s_client,
        server_handle,
    }
}
