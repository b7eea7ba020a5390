use axum::{
    Json,
    extract::{Query, State},
};

use crate::{
    AppState,
    error::Result,
    models::{Product, ProductQuery},
    utils::extractors::ValidJson,
};

pub async fn get_products(
    State(state): State<AppState>,
    Query(params): Query<ProductQuery>,
) -> Result<Json<Vec<Product>>> {
    // Empty query values behave like absent ones.
    let brand = params.brand.as_deref().filter(|s| !s.is_empty());
    let q = params.q.as_deref().filter(|s| !s.is_empty());
    let products = state.store()?.list_products(brand, q);

    Ok(Json(products))
}

pub async fn create_product(
    State(state): State<AppState>,
    ValidJson(product): ValidJson<Product>,
) -> Result<Json<Product>> {
    let created = state.store()?.create_product(product)?;

    Ok(Json(created))
}
