use std::{path::Path, sync::Arc};

use axum::{
    extract::Request,
    http::{header, HeaderValue},
    middleware::{self, Next},
    response::Response,
    routing::{get, get_service},
    Router,
};
use tower_http::{
    services::{ServeDir, ServeFile},
    set_header::SetResponseHeaderLayer,
};
use tracing::info;

use crate::{api, pages, state::AppState};

pub fn router(state: Arc<AppState>, static_dir: &Path) -> Router {
    let static_files = get_service(ServeDir::new(static_dir));
    let favicon = get_service(ServeFile::new(static_dir.join("favicon.ico")));

    Router::new()
        .route("/", get(pages::homepage))
        .route("/blog", get(pages::blog_index))
        .route("/blog/{slug}", get(pages::render_post))
        .route("/about", get(pages::about))
        .route("/api/posts", get(api::list_posts))
        .route("/api/post/{slug}", get(api::get_post))
        .route("/api/edge-hello", get(api::edge_hello))
        .route("/api/packages", get(api::packages))
        .nest_service("/static", static_files)
        .route_service("/favicon.ico", favicon)
        .fallback(pages::not_found)
        .layer(middleware::from_fn(log_page_requests))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_XSS_PROTECTION,
            HeaderValue::from_static("1; mode=block"),
        ))
        .with_state(state)
}

async fn log_page_requests(request: Request, next: Next) -> Response {
    let path = request.uri().path();
    if is_page_path(path) {
        info!(path, "page request");
    }
    next.run(request).await
}

fn is_page_path(path: &str) -> bool {
    let first_segment = path.trim_start_matches('/').split('/').next().unwrap_or("");
    !matches!(first_segment, "api" | "static" | "favicon.ico")
}
