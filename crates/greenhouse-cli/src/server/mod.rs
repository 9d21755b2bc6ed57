//! HTTP server for Greenhouse
//!
//! This module exposes the tracker as a JSON REST API for the browser UI and
//! serves uploaded photos. All routes share one [`Tracker`]; each request
//! re-reads the data file, so the server holds no state of its own.

use std::{net::SocketAddr, sync::Arc};

use anyhow::{Context, Result};
use axum::{
    extract::{DefaultBodyLimit, Request},
    http::{header, HeaderValue, Method, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Router,
};
use greenhouse_core::Tracker;
use log::{debug, error, info};
use tokio::{
    net::TcpListener,
    signal::unix::{signal, SignalKind},
};

pub mod errors;
pub mod handlers;

#[cfg(test)]
mod tests;

/// Largest accepted request body; the UI posts whole documents with inline
/// photo data.
const BODY_LIMIT_BYTES: usize = 50 * 1024 * 1024;

/// Shared state handed to every route handler.
#[derive(Clone)]
pub struct AppState {
    pub tracker: Arc<Tracker>,
}

/// Builds the API router.
pub fn router(tracker: Tracker) -> Router {
    let state = AppState {
        tracker: Arc::new(tracker),
    };

    Router::new()
        .route("/api/data", get(handlers::get_data).post(handlers::post_data))
        .route(
            "/api/plants",
            get(handlers::list_plants).post(handlers::create_plant),
        )
        .route(
            "/api/plants/{id}",
            get(handlers::get_plant).delete(handlers::delete_plant),
        )
        .route("/api/plants/{id}/activities", post(handlers::log_activity))
        .route(
            "/api/plants/{id}/recommendations",
            get(handlers::recommendations),
        )
        .route(
            "/api/profiles",
            get(handlers::list_profiles).post(handlers::create_profile),
        )
        .route(
            "/api/categories",
            get(handlers::list_categories)
                .post(handlers::create_category)
                .put(handlers::replace_categories),
        )
        .route(
            "/api/categories/{id}",
            put(handlers::update_category).delete(handlers::delete_category),
        )
        .route(
            "/api/task-assignments",
            get(handlers::get_task_assignments).put(handlers::put_task_assignments),
        )
        .route("/api/schedule", get(handlers::schedule))
        .route("/api/upload", post(handlers::upload))
        .route("/uploads/{filename}", get(handlers::serve_upload))
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(middleware::from_fn(cors))
        .with_state(state)
}

/// Permissive CORS: any origin may call the API. Preflight requests are
/// answered directly.
async fn cors(request: Request, next: Next) -> Response {
    let mut response = if request.method() == Method::OPTIONS {
        StatusCode::NO_CONTENT.into_response()
    } else {
        debug!("{} {}", request.method(), request.uri());
        next.run(request).await
    };

    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, PUT, DELETE, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
    response
}

/// Runs the HTTP server until SIGINT or SIGTERM.
pub async fn run_http_server(tracker: Tracker, addr: SocketAddr) -> Result<()> {
    info!(
        "Serving data from {} and uploads from {}",
        tracker.data_path().display(),
        tracker.upload_dir().display()
    );

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Greenhouse server listening on http://{addr}");

    axum::serve(listener, router(tracker))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("HTTP server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let (Ok(mut sigint), Ok(mut sigterm)) = (
        signal(SignalKind::interrupt()),
        signal(SignalKind::terminate()),
    ) else {
        error!("Failed to install signal handlers; running until killed");
        std::future::pending::<()>().await;
        return;
    };

    tokio::select! {
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }
}
