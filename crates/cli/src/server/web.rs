use axum::Router;
use extman_api::{create_api_routes, middleware::cors_layer, AppState};
use extman_domain::config::CorsConfig;
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub async fn start_web_server(
    bind_addr: SocketAddr,
    state: AppState,
    cors: &CorsConfig,
    extension_count: usize,
) -> anyhow::Result<()> {
    let app = create_app(state, cors);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    info!(
        bind_address = %bind_addr,
        api_url = format!("http://{}/api", bind_addr),
        extensions = extension_count,
        "Server running on port {}",
        bind_addr.port()
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn create_app(state: AppState, cors: &CorsConfig) -> Router {
    Router::new()
        .nest("/api", create_api_routes(state))
        .layer(cors_layer(cors))
        .layer(TraceLayer::new_for_http())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
