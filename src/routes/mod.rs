pub mod analytics;
pub mod products;
pub mod suppliers;

use axum::Router;

use crate::state::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(suppliers::routes())
        .merge(products::routes())
        .merge(analytics::routes())
}
