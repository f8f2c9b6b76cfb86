use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::{SecondsFormat, Utc};
use tracing::{debug, error};

use crate::models::{EdgeHello, ErrorResponse, PostResponse, PostsResponse};
use crate::packages;
use crate::state::AppState;

const EDGE_CACHE_CONTROL: &str = "public, s-maxage=10, stale-while-revalidate=59";

async fn simulate_latency(state: &AppState) {
    if !state.api_delay.is_zero() {
        tokio::time::sleep(state.api_delay).await;
    }
}

pub async fn list_posts(State(state): State<Arc<AppState>>) -> Response {
    simulate_latency(&state).await;
    Json(PostsResponse {
        posts: state.catalog.list_all(),
    })
    .into_response()
}

pub async fn get_post(
    Path(slug): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Response {
    let Some(post) = state.catalog.find_by_slug(&slug) else {
        debug!(%slug, "api: post not found");
        return (StatusCode::NOT_FOUND, Json(ErrorResponse::POST_NOT_FOUND)).into_response();
    };

    simulate_latency(&state).await;
    Json(PostResponse { post }).into_response()
}

pub async fn edge_hello() -> impl IntoResponse {
    let body = EdgeHello {
        message: "Hello from the API!",
        runtime: "Edge Runtime",
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    };
    ([(header::CACHE_CONTROL, EDGE_CACHE_CONTROL)], Json(body))
}

pub async fn packages() -> Response {
    match packages::package_data() {
        Ok(data) => Json(data).into_response(),
        Err(e) => {
            error!("Failed to read package manifest: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, Json(packages::empty())).into_response()
        }
    }
}
