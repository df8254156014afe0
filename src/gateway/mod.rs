//! HTTP Gateway
//!
//! ```text
//! POST /api/schedules    schedule a transfer (201)
//! GET  /api/schedules    list scheduled transfers
//! GET  /api/health       liveness + build revision
//! GET  /docs             Swagger UI
//! ```

pub mod handlers;
pub mod openapi;
pub mod state;
pub mod types;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::GatewayConfig;
use crate::scheduling::SchedulingService;
use state::AppState;

/// Build the complete router around a scheduling service
pub fn build_router(scheduling: SchedulingService) -> Router {
    let state = Arc::new(AppState::new(scheduling));

    Router::new()
        .route(
            "/api/schedules",
            post(handlers::create_schedule).get(handlers::list_schedules),
        )
        .route("/api/health", get(handlers::health_check))
        .with_state(state)
        // Stateless, added after with_state
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()))
}

/// Serve on an already bound listener until the process stops
pub async fn serve(listener: TcpListener, scheduling: SchedulingService) -> std::io::Result<()> {
    axum::serve(listener, build_router(scheduling)).await
}

/// Bind `host:port` and serve
pub async fn run_server(
    config: &GatewayConfig,
    scheduling: SchedulingService,
) -> std::io::Result<()> {
    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr).await.inspect_err(|e| {
        tracing::error!(
            "Failed to bind to {}: {} (port {} may already be in use)",
            addr,
            e,
            config.port
        );
    })?;

    tracing::info!("Gateway listening on http://{}", addr);
    tracing::info!("API Docs: http://{}/docs", addr);

    serve(listener, scheduling).await
}
