use axum::{
    routing::{get, put},
    Router,
};

use crate::handlers::product::{create_product, delete_product, list_products, update_product};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route("/products/{id}", put(update_product).delete(delete_product))
}
