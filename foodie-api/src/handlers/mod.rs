pub mod dish;
pub mod restaurant;

pub use dish::router as dish_router;
pub use restaurant::router as restaurant_router;

use axum::{Router, http::Uri};
use foodie_store::Store;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::error::ApiError;

#[derive(Clone)]
pub struct AppState {
    pub store: Store,
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(restaurant_router())
        .merge(dish_router())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback(unknown_route)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

async fn unknown_route(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("No route for {}", uri.path()))
}

#[derive(OpenApi)]
#[openapi(
    paths(
        restaurant::list_restaurants,
        restaurant::get_restaurant,
        restaurant::list_restaurants_by_cuisine,
        restaurant::list_restaurants_by_filter,
        restaurant::list_restaurants_sorted_by_rating,
        dish::list_dishes,
        dish::get_dish,
        dish::list_dishes_by_filter,
        dish::list_dishes_sorted_by_price,
    ),
    components(
        schemas(
            crate::models::Restaurant,
            crate::models::Dish,
            crate::models::ListRestaurantsResponse,
            crate::models::RestaurantDetailsResponse,
            crate::models::ListDishesResponse,
            crate::models::ApiErrorResponse
        )
    ),
    tags(
        (name = "restaurants", description = "Restaurant lookup endpoints"),
        (name = "dishes", description = "Dish lookup endpoints")
    ),
    info(
        title = "Foodie API",
        description = "Read-only restaurant and dish queries",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;
