use axum::{routing::get, Router};

use crate::handlers::supplier::{create_supplier, get_supplier, list_suppliers};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/suppliers", get(list_suppliers).post(create_supplier))
        // No update or delete route: suppliers are immutable through the API.
        .route("/suppliers/{id}", get(get_supplier))
}
