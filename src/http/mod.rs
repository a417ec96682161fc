//! HTTP Module
//!
//! The server shell: binds the CRUD handlers to routes, mounts the API
//! documentation and serves the static listing page.
//!
//! ## Routes
//! - `GET  /cadastros/`     — list, filtered by `?id=&name=&level=`
//! - `POST /cadastros/`     — create
//! - `GET  /cadastros/:id`  — fetch one (trailing slash accepted)
//! - `PUT  /cadastros/:id`  — shallow-merge update
//! - `DELETE /cadastros/:id` — remove
//! - `GET  /api-docs`       — OpenAPI document
//! - anything else          — static files from the public directory

mod docs;
mod error;
mod handlers;

pub use docs::{openapi_document, RouteDoc, ROUTES};

use std::path::PathBuf;
use std::sync::Arc;

use axum::routing::{get, MethodRouter};
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::error::Result;
use crate::registry::Registry;

/// Build the application router
///
/// `public_dir` is mounted as the fallback static file service when given.
pub fn router(registry: Arc<Registry>, public_dir: Option<PathBuf>) -> Router {
    let app = Router::new()
        .route(
            "/cadastros",
            get(handlers::list_records).post(handlers::create_record),
        )
        .route(
            "/cadastros/",
            get(handlers::list_records).post(handlers::create_record),
        )
        .route("/cadastros/:id", record_routes())
        .route("/cadastros/:id/", record_routes())
        .route("/api-docs", get(docs::api_docs))
        .with_state(registry);

    let app = match public_dir {
        Some(dir) => app.fallback_service(ServeDir::new(dir)),
        None => app,
    };

    app.layer(TraceLayer::new_for_http())
}

fn record_routes() -> MethodRouter<Arc<Registry>> {
    get(handlers::get_record)
        .put(handlers::update_record)
        .delete(handlers::delete_record)
}

/// Serve the registry over HTTP until Ctrl+C
pub async fn serve(config: &Config, registry: Arc<Registry>) -> Result<()> {
    let app = router(registry, Some(config.public_dir.clone()));

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Received Ctrl+C, initiating shutdown..."),
        Err(e) => tracing::error!("Failed to listen for Ctrl+C: {}", e),
    }
}
