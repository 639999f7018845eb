pub mod entities;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /entities                          list entity kinds
/// /entities/{kind}/fields            field table of one kind
/// /entities/{kind}/validate          validate a payload (POST)
/// /entities/{kind}/export            export a payload as JSON (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/entities", entities::router())
}
