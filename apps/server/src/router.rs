use axum::Router;
use dumps_kernel::domain::constants::IMAGES_ROUTE;
use dumps_kernel::server::{AppState, system_router};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};

#[derive(OpenApi)]
#[openapi(info(title = "dumps.io", description = "Game engine and game dump catalog"))]
struct ApiDoc;

#[allow(unreachable_pub)]
pub fn init(state: AppState) -> Router {
    let images = ServeDir::new(&state.config.content.images_dir);

    // Separate the OpenAPI routes and the API documentation object
    let (openapi_routes, api_doc) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(system_router())
        .merge(dumps_catalog::router())
        .split_for_parts();

    let scalar_routes = Scalar::with_url("/api", api_doc);

    Router::new()
        .merge(openapi_routes)
        .merge(scalar_routes)
        .nest_service(IMAGES_ROUTE, images)
        .fallback(dumps_catalog::not_found_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
