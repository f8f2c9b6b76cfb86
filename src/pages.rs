use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::state::AppState;

pub async fn homepage(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(state.renderer.home(state.catalog.list_all()))
}

pub async fn blog_index(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(state.renderer.blog_index(state.catalog.list_all()))
}

pub async fn render_post(
    Path(slug): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Response {
    match state.catalog.find_by_slug(&slug) {
        Some(post) => Html(state.renderer.post(post)).into_response(),
        None => not_found_page(&state),
    }
}

pub async fn about(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(state.renderer.about())
}

pub async fn not_found(State(state): State<Arc<AppState>>) -> Response {
    not_found_page(&state)
}

fn not_found_page(state: &AppState) -> Response {
    (StatusCode::NOT_FOUND, Html(state.renderer.not_found())).into_response()
}
