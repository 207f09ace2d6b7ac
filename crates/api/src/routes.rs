use crate::{handlers::*, middleware::apply_middleware, AppState};
use axum::{
    routing::{get, post},
    Router,
};

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/translate", post(translate_text))
        .route("/video/:filename", get(serve_video))
        .route("/static/*path", get(serve_static))
        // Health and metrics
        .route("/healthz", get(health_check))
        .route("/metrics", get(metrics))
}

pub fn build_router(state: AppState) -> Router {
    let max_body_bytes = state.config.max_content_length_bytes();
    apply_middleware(create_router().with_state(state), max_body_bytes)
}
