mod handlers;
mod response;

use homeval_kernel::server::ApiState;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

/// Location listing and price prediction endpoints.
pub fn router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::get_location_names))
        .routes(routes!(handlers::predict_home_price))
}
