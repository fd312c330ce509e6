use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;

use crate::handlers::items;
use crate::state::AppState;
use crate::upload::MAX_BODY_SIZE;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/items", get(items::list_items).post(items::create_item))
        .layer(DefaultBodyLimit::max(MAX_BODY_SIZE))
}
