pub mod api;

pub use api::AppState;

use axum::{Router, routing::post};
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Build the API router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/scenarios", post(api::list_scenarios))
        .route("/api/scenarios/interface", post(api::get_interface))
        .route("/api/openapi", post(api::generate_openapi))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Start the web server
pub async fn start_server(addr: SocketAddr, state: AppState) -> crate::Result<()> {
    let app = router(state);

    tracing::info!("Starting server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
