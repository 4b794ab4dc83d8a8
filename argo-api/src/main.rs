use argo_api::{config::ApiConfig, startup::ApiServer};
use argo_config::{Environment, load_config, shared::SentryConfig};
use argo_telemetry::init_tracing;
use std::sync::Arc;
use tracing::{error, info};

fn main() -> anyhow::Result<()> {
    let _log_flusher = init_tracing(env!("CARGO_BIN_NAME"))?;

    let config = load_config::<ApiConfig>().inspect_err(|err| {
        error!(error = %err, "failed to load the api configuration");
    })?;

    // Sentry must be initialized before the async runtime starts.
    let _sentry_guard = init_sentry(config.sentry.as_ref())?;

    actix_web::rt::System::new().block_on(async_main(config))?;

    Ok(())
}

async fn async_main(config: ApiConfig) -> anyhow::Result<()> {
    info!(
        host = config.application.host,
        port = config.application.port,
        "api server options",
    );

    let server = ApiServer::build(config).await.inspect_err(|err| {
        error!(error = %err, "failed to start the api");
    })?;
    server.run_until_stopped().await?;

    Ok(())
}

fn init_sentry(
    sentry_config: Option<&SentryConfig>,
) -> anyhow::Result<Option<sentry::ClientInitGuard>> {
    let Some(sentry_config) = sentry_config else {
        info!("sentry not configured, skipping initialization");

        return Ok(None);
    };

    info!("initializing sentry with supplied dsn");

    let environment = Environment::load()?;
    let guard = sentry::init(sentry::ClientOptions {
        dsn: Some(sentry_config.dsn.parse()?),
        environment: Some(environment.to_string().into()),
        traces_sample_rate: 1.0,
        max_request_body_size: sentry::MaxRequestBodySize::Always,
        integrations: vec![Arc::new(
            sentry::integrations::panic::PanicIntegration::new(),
        )],
        ..Default::default()
    });

    sentry::configure_scope(|scope| {
        scope.set_tag("service", "argo-api");
    });

    Ok(Some(guard))
}
