use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::{
    AppState,
    error::Result,
    models::{Listing, ListingQuery, ListingStatusQuery},
    utils::extractors::ValidJson,
};

pub async fn get_listings(
    State(state): State<AppState>,
    Query(params): Query<ListingQuery>,
) -> Result<Json<Vec<Listing>>> {
    let status = params.status.as_deref().filter(|s| !s.is_empty());
    let listings = state.store()?.list_listings(status);

    Ok(Json(listings))
}

pub async fn create_listing(
    State(state): State<AppState>,
    ValidJson(listing): ValidJson<Listing>,
) -> Result<Json<Listing>> {
    let created = state.store()?.create_listing(listing)?;

    Ok(Json(created))
}

pub async fn update_listing_status(
    State(state): State<AppState>,
    Path(listing_id): Path<i32>,
    Query(params): Query<ListingStatusQuery>,
) -> Result<Json<Listing>> {
    let updated = state
        .store()?
        .update_listing_status(listing_id, params.status)?;

    Ok(Json(updated))
}
