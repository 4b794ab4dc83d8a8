use argo_telemetry::init_test_tracing;

use crate::support::test_app::spawn_test_app;

mod support;

#[tokio::test(flavor = "multi_thread")]
async fn health_check_returns_200() {
    init_test_tracing();
    // Arrange
    let app = spawn_test_app().await;

    // Act
    let response = app
        .api_client
        .get(format!("{}/health_check", app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    // Assert
    assert!(response.status().is_success());
    assert_eq!(Some(2), response.content_length());
}

#[tokio::test(flavor = "multi_thread")]
async fn openapi_document_lists_application_routes() {
    init_test_tracing();
    // Arrange
    let app = spawn_test_app().await;

    // Act
    let response = app
        .api_client
        .get(format!("{}/api-docs/openapi.json", app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    // Assert
    assert!(response.status().is_success());
    let document: serde_json::Value = response
        .json()
        .await
        .expect("failed to deserialize response");
    let paths = &document["paths"];
    assert!(paths.get("/argo/list").is_some());
    assert!(paths.get("/argo/create").is_some());
    assert!(paths.get("/argo/delete/{applicationName}").is_some());
}

#[tokio::test(flavor = "multi_thread")]
async fn swagger_ui_is_served() {
    init_test_tracing();
    // Arrange
    let app = spawn_test_app().await;

    // Act
    let response = app
        .api_client
        .get(format!("{}/swagger-ui/", app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    // Assert
    assert!(response.status().is_success());
    let body = response.text().await.unwrap();
    assert!(body.contains("swagger-ui"));
}
