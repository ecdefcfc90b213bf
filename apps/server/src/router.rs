use axum::Router;
use homeval::kernel::prelude::ApiState;
use homeval::kernel::server::cors_layer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};

#[derive(OpenApi)]
#[openapi(info(title = "Home Valuation API", description = "Location listing and price estimation"))]
struct ApiDoc;

#[allow(unreachable_pub)]
pub fn init(state: ApiState) -> Router {
    let api = ApiDoc::openapi();
    let cors = cors_layer(&state.config.server.cors);

    // Separate the OpenAPI routes and the API documentation object
    let (openapi_routes, api_doc) = OpenApiRouter::with_openapi(api)
        .merge(homeval::server::router::system_router())
        .merge(homeval::server::router::valuation_router())
        .with_state(state)
        .split_for_parts();

    let scalar_routes = Scalar::with_url("/api", api_doc);

    Router::new()
        .merge(openapi_routes)
        .merge(scalar_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
