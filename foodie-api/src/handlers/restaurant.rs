use axum::{
    Router,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
    response::Json,
    routing::get,
};
use foodie_store::{models::RestaurantFilter, queries};
use tracing::instrument;

use crate::error::{ApiError, non_empty};
use crate::models::*;

use super::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/restaurants", get(list_restaurants))
        .route("/restaurants/details/{id}", get(get_restaurant))
        .route(
            "/restaurants/cuisine/{cuisine}",
            get(list_restaurants_by_cuisine),
        )
        .route("/restaurants/filter", get(list_restaurants_by_filter))
        .route(
            "/restaurants/sort-by-rating",
            get(list_restaurants_sorted_by_rating),
        )
}

#[utoipa::path(
    get,
    path = "/restaurants",
    responses(
        (status = 200, description = "All restaurants", body = ListRestaurantsResponse),
        (status = 404, description = "No restaurants stored", body = ApiErrorResponse),
        (status = 500, description = "Store failure", body = ApiErrorResponse),
    ),
    tag = "restaurants"
)]
#[instrument(skip(state))]
pub async fn list_restaurants(
    State(state): State<AppState>,
) -> Result<Json<ListRestaurantsResponse>, ApiError> {
    let rows = state.store.run(queries::list_restaurants).await?;
    let rows = non_empty(rows, || "No Restaurants Found.".to_string())?;

    Ok(Json(rows.into()))
}

#[utoipa::path(
    get,
    path = "/restaurants/details/{id}",
    responses(
        (status = 200, description = "Restaurant details", body = RestaurantDetailsResponse),
        (status = 400, description = "Non-numeric id", body = ApiErrorResponse),
        (status = 404, description = "Restaurant not found", body = ApiErrorResponse),
        (status = 500, description = "Store failure", body = ApiErrorResponse),
    ),
    params(
        ("id" = i32, Path, description = "Restaurant ID")
    ),
    tag = "restaurants"
)]
#[instrument(skip(state))]
pub async fn get_restaurant(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<RestaurantDetailsResponse>, ApiError> {
    let Path(id) = path?;
    let id = parse_id("restaurant", &id)?;

    let restaurant = state
        .store
        .run(move |conn| queries::get_restaurant(conn, id))
        .await?
        .ok_or_else(|| ApiError::NotFound("No Restaurants Found.".to_string()))?;

    Ok(Json(RestaurantDetailsResponse {
        restaurants: restaurant.into(),
    }))
}

#[utoipa::path(
    get,
    path = "/restaurants/cuisine/{cuisine}",
    responses(
        (status = 200, description = "Restaurants serving the cuisine", body = ListRestaurantsResponse),
        (status = 404, description = "No restaurant serves the cuisine", body = ApiErrorResponse),
        (status = 500, description = "Store failure", body = ApiErrorResponse),
    ),
    params(
        ("cuisine" = String, Path, description = "Cuisine name, matched case-sensitively")
    ),
    tag = "restaurants"
)]
#[instrument(skip(state))]
pub async fn list_restaurants_by_cuisine(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<ListRestaurantsResponse>, ApiError> {
    let Path(cuisine) = path?;
    let needle = cuisine.clone();
    let rows = state
        .store
        .run(move |conn| queries::list_restaurants_by_cuisine(conn, &needle))
        .await?;
    let rows = non_empty(rows, || format!("No Restaurants Found by {cuisine}"))?;

    Ok(Json(rows.into()))
}

#[utoipa::path(
    get,
    path = "/restaurants/filter",
    responses(
        (status = 200, description = "Restaurants matching all three flags", body = ListRestaurantsResponse),
        (status = 400, description = "Missing or malformed flag", body = ApiErrorResponse),
        (status = 404, description = "No restaurant matches", body = ApiErrorResponse),
        (status = 500, description = "Store failure", body = ApiErrorResponse),
    ),
    params(
        ("isVeg" = bool, Query, description = "true or false"),
        ("hasOutdoorSeating" = bool, Query, description = "true or false"),
        ("isLuxury" = bool, Query, description = "true or false")
    ),
    tag = "restaurants"
)]
#[instrument(skip(state))]
pub async fn list_restaurants_by_filter(
    State(state): State<AppState>,
    query: Result<Query<RestaurantFilterQuery>, QueryRejection>,
) -> Result<Json<ListRestaurantsResponse>, ApiError> {
    let Query(query) = query?;
    let filter = RestaurantFilter::try_from(query)?;

    let rows = state
        .store
        .run(move |conn| queries::list_restaurants_by_filter(conn, filter))
        .await?;
    let rows = non_empty(rows, || "No restaurants found".to_string())?;

    Ok(Json(rows.into()))
}

#[utoipa::path(
    get,
    path = "/restaurants/sort-by-rating",
    responses(
        (status = 200, description = "Restaurants, highest rating first", body = ListRestaurantsResponse),
        (status = 404, description = "No restaurants stored", body = ApiErrorResponse),
        (status = 500, description = "Store failure", body = ApiErrorResponse),
    ),
    tag = "restaurants"
)]
#[instrument(skip(state))]
pub async fn list_restaurants_sorted_by_rating(
    State(state): State<AppState>,
) -> Result<Json<ListRestaurantsResponse>, ApiError> {
    let rows = state
        .store
        .run(queries::list_restaurants_sorted_by_rating)
        .await?;
    let rows = non_empty(rows, || "No Restaurants found".to_string())?;

    Ok(Json(rows.into()))
}
