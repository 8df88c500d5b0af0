use foodie_store::models;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::ApiError;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: i32,
    pub name: String,
    pub cuisine: String,
    pub rating: f64,
    pub is_veg: bool,
    pub has_outdoor_seating: bool,
    pub is_luxury: bool,
}

impl From<models::Restaurant> for Restaurant {
    fn from(r: models::Restaurant) -> Self {
        Self {
            id: r.id,
            name: r.name,
            cuisine: r.cuisine,
            rating: r.rating,
            is_veg: r.is_veg,
            has_outdoor_seating: r.has_outdoor_seating,
            is_luxury: r.is_luxury,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Dish {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub is_veg: bool,
}

impl From<models::Dish> for Dish {
    fn from(d: models::Dish) -> Self {
        Self {
            id: d.id,
            name: d.name,
            price: d.price,
            is_veg: d.is_veg,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ListRestaurantsResponse {
    pub restaurants: Vec<Restaurant>,
}

impl From<Vec<models::Restaurant>> for ListRestaurantsResponse {
    fn from(rows: Vec<models::Restaurant>) -> Self {
        Self {
            restaurants: rows.into_iter().map(Restaurant::from).collect(),
        }
    }
}

/// Single-restaurant lookup; the key stays plural to match the list endpoints.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RestaurantDetailsResponse {
    pub restaurants: Restaurant,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ListDishesResponse {
    pub dishes: Vec<Dish>,
}

impl From<Vec<models::Dish>> for ListDishesResponse {
    fn from(rows: Vec<models::Dish>) -> Self {
        Self {
            dishes: rows.into_iter().map(Dish::from).collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantFilterQuery {
    pub is_veg: Option<String>,
    pub has_outdoor_seating: Option<String>,
    pub is_luxury: Option<String>,
}

impl TryFrom<RestaurantFilterQuery> for models::RestaurantFilter {
    type Error = ApiError;

    fn try_from(query: RestaurantFilterQuery) -> Result<Self, Self::Error> {
        Ok(Self {
            is_veg: parse_flag("isVeg", query.is_veg.as_deref())?,
            has_outdoor_seating: parse_flag(
                "hasOutdoorSeating",
                query.has_outdoor_seating.as_deref(),
            )?,
            is_luxury: parse_flag("isLuxury", query.is_luxury.as_deref())?,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DishFilterQuery {
    pub is_veg: Option<String>,
}

impl TryFrom<DishFilterQuery> for models::DishFilter {
    type Error = ApiError;

    fn try_from(query: DishFilterQuery) -> Result<Self, Self::Error> {
        Ok(Self {
            is_veg: parse_flag("isVeg", query.is_veg.as_deref())?,
        })
    }
}

/// Boolean query parameters accept exactly `true` or `false`.
fn parse_flag(name: &str, value: Option<&str>) -> Result<bool, ApiError> {
    match value {
        Some("true") => Ok(true),
        Some("false") => Ok(false),
        Some(other) => Err(ApiError::BadRequest(format!(
            "Invalid value for {name}: expected true or false, got {other:?}"
        ))),
        None => Err(ApiError::BadRequest(format!(
            "Missing query parameter: {name}"
        ))),
    }
}

pub fn parse_id(kind: &str, raw: &str) -> Result<i32, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::BadRequest(format!("Invalid {kind} id: {raw}")))
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiErrorResponse {
    /// Error message
    pub error: String,
}
