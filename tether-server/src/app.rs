use crate::config::ServerConfig;
use crate::hub::{HealthReport, Hub, HubHandle};
use crate::signaling::{SignalingService, ws_handler};
use anyhow::{Context, Result};
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::{info, warn};

/// Shared by every WebSocket task.
#[derive(Clone)]
pub struct AppState {
    pub hub: HubHandle,
    pub signaling: SignalingService,
}

impl AppState {
    /// Create the outbound route table and spawn the hub that owns all room
    /// state. Must be called inside a tokio runtime.
    pub fn new(config: &ServerConfig) -> Self {
        let signaling = SignalingService::new();
        let hub = Hub::spawn(Arc::new(signaling.clone()), config.command_buffer);

        Self { hub, signaling }
    }
}

pub fn router(state: AppState, config: &ServerConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut router = Router::new()
        .route("/ws", get(ws_handler))
        .route("/health", get(health));

    if let Some(dir) = &config.static_dir {
        info!("Serving static assets from {}", dir.display());
        router = router.fallback_service(ServeDir::new(dir));
    }

    router.layer(cors).with_state(state)
}

async fn health(State(state): State<AppState>) -> Result<Json<HealthReport>, StatusCode> {
    match state.hub.snapshot().await {
        Ok(snapshot) => Ok(Json(snapshot.report())),
        Err(e) => {
            warn!("Health check failed: {}", e);
            Err(StatusCode::SERVICE_UNAVAILABLE)
        }
    }
}

/// Serve on an already bound listener until `shutdown` resolves.
pub async fn serve_on<F>(listener: TcpListener, config: &ServerConfig, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let state = AppState::new(config);
    let app = router(state, config);

    let addr = listener.local_addr().context("listener has no local address")?;
    info!("Signaling server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .context("signaling server failed")
}

/// Bind `config.addr` and serve until Ctrl-C.
pub async fn serve(config: ServerConfig) -> Result<()> {
    let listener = TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;

    serve_on(listener, &config, async {
        let _ = tokio::signal::ctrl_c().await;
        info!("Shutdown signal received");
    })
    .await
}
