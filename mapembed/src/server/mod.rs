//! HTTP front end for the dispatcher (feature `serve`).
//!
//! # Routes
//!
//! - `GET /map?lat=<f64>&lng=<f64>[&provider=<token>]` returns the HTML
//!   fragment. Without `provider`, or with an empty one, the configured
//!   default is used. Malformed
//!   numbers are rejected with `400 Bad Request` by the query extractor.
//! - `GET /providers` returns the provider listing as JSON.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::dispatcher::{list_providers, MapRenderer};
use crate::provider::{ProviderId, ProviderInfo};

/// Errors that can occur while running the server.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Could not bind the listening socket.
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },

    /// The server stopped with an I/O error.
    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shared handler state.
#[derive(Clone)]
pub struct ServerState {
    renderer: MapRenderer,
    default_provider: ProviderId,
}

impl ServerState {
    pub fn new(renderer: MapRenderer, default_provider: ProviderId) -> Self {
        Self {
            renderer,
            default_provider,
        }
    }
}

/// Query string of `GET /map`.
#[derive(Debug, Deserialize)]
pub struct MapQuery {
    pub lat: f64,
    pub lng: f64,
    pub provider: Option<String>,
}

/// Builds the router.
pub fn router(state: ServerState) -> Router {
    Router::new()
        .route("/map", get(map_fragment))
        .route("/providers", get(providers))
        .with_state(Arc::new(state))
}

/// Binds `addr` and serves until the server fails.
pub async fn serve(addr: SocketAddr, state: ServerState) -> Result<(), ServerError> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    info!(%addr, "Map server listening");

    axum::serve(listener, router(state)).await?;
    Ok(())
}

async fn map_fragment(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<MapQuery>,
) -> Html<String> {
    let provider = query
        .provider
        .filter(|p| !p.is_empty())
        .unwrap_or_else(|| state.default_provider.token().to_string());
    debug!(lat = query.lat, lng = query.lng, %provider, "GET /map");

    Html(state.renderer.render(query.lat, query.lng, &provider))
}

async fn providers() -> Json<Vec<ProviderInfo>> {
    Json(list_providers())
}
