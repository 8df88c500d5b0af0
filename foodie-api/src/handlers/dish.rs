use axum::{
    Router,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
    response::Json,
    routing::get,
};
use foodie_store::{models::DishFilter, queries};
use tracing::instrument;

use crate::error::{ApiError, non_empty};
use crate::models::*;

use super::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/dishes", get(list_dishes))
        .route("/dishes/details/{id}", get(get_dish))
        .route("/dishes/filter", get(list_dishes_by_filter))
        .route("/dishes/sort-by-price", get(list_dishes_sorted_by_price))
}

#[utoipa::path(
    get,
    path = "/dishes",
    responses(
        (status = 200, description = "All dishes", body = ListDishesResponse),
        (status = 404, description = "No dishes stored", body = ApiErrorResponse),
        (status = 500, description = "Store failure", body = ApiErrorResponse),
    ),
    tag = "dishes"
)]
#[instrument(skip(state))]
pub async fn list_dishes(
    State(state): State<AppState>,
) -> Result<Json<ListDishesResponse>, ApiError> {
    let rows = state.store.run(queries::list_dishes).await?;
    let rows = non_empty(rows, || "No dishes Found.".to_string())?;

    Ok(Json(rows.into()))
}

#[utoipa::path(
    get,
    path = "/dishes/details/{id}",
    responses(
        (status = 200, description = "Dishes with the given id", body = ListDishesResponse),
        (status = 400, description = "Non-numeric id", body = ApiErrorResponse),
        (status = 404, description = "Dish not found", body = ApiErrorResponse),
        (status = 500, description = "Store failure", body = ApiErrorResponse),
    ),
    params(
        ("id" = i32, Path, description = "Dish ID")
    ),
    tag = "dishes"
)]
#[instrument(skip(state))]
pub async fn get_dish(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<ListDishesResponse>, ApiError> {
    let Path(id) = path?;
    let id = parse_id("dish", &id)?;

    let rows = state
        .store
        .run(move |conn| queries::get_dish(conn, id))
        .await?;
    let rows = non_empty(rows, || format!("No dish Found by ID : {id}"))?;

    Ok(Json(rows.into()))
}

#[utoipa::path(
    get,
    path = "/dishes/filter",
    responses(
        (status = 200, description = "Dishes matching the flag", body = ListDishesResponse),
        (status = 400, description = "Missing or malformed flag", body = ApiErrorResponse),
        (status = 404, description = "No dish matches", body = ApiErrorResponse),
        (status = 500, description = "Store failure", body = ApiErrorResponse),
    ),
    params(
        ("isVeg" = bool, Query, description = "true or false")
    ),
    tag = "dishes"
)]
#[instrument(skip(state))]
pub async fn list_dishes_by_filter(
    State(state): State<AppState>,
    query: Result<Query<DishFilterQuery>, QueryRejection>,
) -> Result<Json<ListDishesResponse>, ApiError> {
    let Query(query) = query?;
    let filter = DishFilter::try_from(query)?;

    let rows = state
        .store
        .run(move |conn| queries::list_dishes_by_filter(conn, filter))
        .await?;
    let rows = non_empty(rows, || "No dishes found.".to_string())?;

    Ok(Json(rows.into()))
}

#[utoipa::path(
    get,
    path = "/dishes/sort-by-price",
    responses(
        (status = 200, description = "Dishes, cheapest first", body = ListDishesResponse),
        (status = 404, description = "No dishes stored", body = ApiErrorResponse),
        (status = 500, description = "Store failure", body = ApiErrorResponse),
    ),
    tag = "dishes"
)]
#[instrument(skip(state))]
pub async fn list_dishes_sorted_by_price(
    State(state): State<AppState>,
) -> Result<Json<ListDishesResponse>, ApiError> {
    let rows = state.store.run(queries::list_dishes_sorted_by_price).await?;
    let rows = non_empty(rows, || "No dishes found".to_string())?;

    Ok(Json(rows.into()))
}
