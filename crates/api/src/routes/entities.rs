//! Route definitions for the `/entities` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::entities;
use crate::state::AppState;

/// Routes mounted at `/entities`.
///
/// ```text
/// GET    /                  -> list_entities
/// GET    /{kind}/fields     -> get_fields
/// POST   /{kind}/validate   -> validate
/// POST   /{kind}/export     -> export
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(entities::list_entities))
        .route("/{kind}/fields", get(entities::get_fields))
        .route("/{kind}/validate", post(entities::validate))
        .route("/{kind}/export", post(entities::export))
}
