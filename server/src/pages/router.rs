//! Router configuration for the portal pages.

use axum::routing::get;
use axum::Router;

use super::handlers;
use crate::api::AppState;

/// Router for the portal (mounted at the application root).
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::index).post(handlers::submit_key))
        .route("/characters", get(handlers::character_list))
        .route(
            "/characters/{character_id}",
            get(handlers::character_detail),
        )
        .route("/clear", get(handlers::clear_session))
}
