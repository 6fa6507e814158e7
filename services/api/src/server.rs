use crate::cli::ServeArgs;
use crate::infra::{build_gateway, AppState};
use crate::routes::with_lending_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use lendcore::config::AppConfig;
use lendcore::error::AppError;
use lendcore::telemetry;
use lendcore::workflows::lending::SimulatedLatency;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(latency_ms) = args.latency_ms.take() {
        config.simulation.latency_ms = Some(latency_ms);
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let latency = SimulatedLatency::from_millis(config.simulation.latency_ms);
    let gateway = build_gateway(latency);

    let app = with_lending_routes(gateway)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "investment lending mock api ready");

    axum::serve(listener, app).await?;
    Ok(())
}
