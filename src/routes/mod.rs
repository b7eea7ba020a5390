mod health;
mod listings;
mod messages;
mod products;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route(
            "/products",
            get(products::get_products).post(products::create_product),
        )
        .route(
            "/listings",
            get(listings::get_listings).post(listings::create_listing),
        )
        .route(
            "/listings/:listing_id",
            patch(listings::update_listing_status),
        )
        .route("/messages/:chat_id", get(messages::get_chat))
        .route("/messages", post(messages::send_message))
}
