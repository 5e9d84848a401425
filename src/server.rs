//! HTTP endpoint serving aggregated price lookups.

use crate::aggregate::collect_prices;
use crate::cache::PriceCache;
use crate::gog::client::GogFetch;
use crate::gog::urls::GameUrl;
use anyhow::{Context, Result};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

const INVALID_URL_MESSAGE: &str = "Invalid GOG game URL. Expected format: \
    https://www.gog.com/game/game_name or https://www.gog.com/en/game/game_name";

/// Shared application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<dyn GogFetch>,
    pub cache: Arc<PriceCache>,
}

#[derive(Deserialize)]
struct PriceQuery {
    url: Option<String>,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(ErrorBody { error: message.to_string() })).into_response()
}

/// GET /price?url=<game-url>
async fn price_handler(
    State(state): State<AppState>,
    Query(query): Query<PriceQuery>,
) -> Response {
    let Some(game) = query.url.as_deref().and_then(GameUrl::parse) else {
        return error_response(StatusCode::BAD_REQUEST, INVALID_URL_MESSAGE);
    };

    let key = game.cache_key();
    if let Some(observations) = state.cache.get(&key) {
        return Json(observations).into_response();
    }

    match collect_prices(state.client.as_ref(), &game.request_path()).await {
        Ok(observations) => {
            state.cache.put(key, observations.clone());
            Json(observations).into_response()
        }
        // An empty aggregate is never cached, so the next request retries fresh.
        Err(e) => error_response(StatusCode::NOT_FOUND, &e.to_string()),
    }
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/price", get(price_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Binds `addr` and serves the API until the process exits.
pub async fn serve(addr: SocketAddr, state: AppState) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Listening on http://{}", addr);
    axum::serve(listener, router(state)).await.context("Server error")
}
