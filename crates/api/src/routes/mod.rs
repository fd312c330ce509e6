pub mod health;
pub mod items;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /items    list, search (GET); create (POST, multipart)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(items::router())
}
