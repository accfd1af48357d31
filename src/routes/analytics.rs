use axum::{routing::get, Router};

use crate::handlers::analytics::get_summary;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/analytics/summary", get(get_summary))
}
