use std::{net::TcpListener, sync::Arc};

use actix_web::{App, HttpServer, dev::Server, web};
use argo_config::shared::ClusterCredentials;
use tracing::info;
use tracing_actix_web::TracingLogger;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    config::ApiConfig,
    k8s::{K8sClient, http::HttpK8sClient},
    routes::{
        api_docs::ApiDoc,
        applications::{create_application, delete_application, list_applications},
        health_check::health_check,
    },
    span_builder::ApiRootSpanBuilder,
};

/// A bound, not yet running, API server.
pub struct ApiServer {
    port: u16,
    server: Server,
}

impl ApiServer {
    /// Binds the listener and connects to the cluster.
    ///
    /// Credentials are resolved once here; failing to build the cluster
    /// client aborts startup.
    pub async fn build(config: ApiConfig) -> Result<Self, anyhow::Error> {
        let listener = TcpListener::bind(config.application.address())?;
        let port = listener.local_addr()?.port();

        let credentials = ClusterCredentials::resolve(&config.kubernetes);
        let k8s_client = HttpK8sClient::new(&credentials).await?;

        let server = run(listener, Arc::new(k8s_client))?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        info!(port = self.port, "listening for requests");

        self.server.await
    }
}

/// Starts serving the API on `listener` using `k8s_client` for every cluster call.
pub fn run(
    listener: TcpListener,
    k8s_client: Arc<dyn K8sClient>,
) -> Result<Server, anyhow::Error> {
    let k8s_client: web::Data<dyn K8sClient> = web::Data::from(k8s_client);
    let openapi = ApiDoc::openapi();

    let server = HttpServer::new(move || {
        App::new()
            .wrap(
                sentry::integrations::actix::Sentry::builder()
                    .capture_server_errors(true)
                    .start_transaction(true)
                    .finish(),
            )
            .wrap(TracingLogger::<ApiRootSpanBuilder>::new())
            .service(health_check)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
            .service(list_applications)
            .service(create_application)
            .service(delete_application)
            .app_data(k8s_client.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
