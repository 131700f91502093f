use crate::error::{CatalogError, log_failure};
use crate::{html, loader, view};
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use dumps_derive::api_handler;
use dumps_domain::config::SiteConfig;
use dumps_domain::constants::CATALOG_TAG;
use dumps_domain::models::{Engine, Game};
use dumps_kernel::server::AppState;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

/// A [`CatalogError`] answered with an HTML page instead of JSON.
#[derive(Debug)]
pub struct PageError {
    site: SiteConfig,
    error: CatalogError,
}

impl PageError {
    fn new(state: &AppState, error: CatalogError) -> Self {
        Self { site: state.config.site.clone(), error }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        log_failure(&self.error);

        let status = self.error.status();
        let body = if status == StatusCode::NOT_FOUND {
            html::not_found_page(&self.site)
        } else {
            html::error_page(&self.site)
        };
        (status, Html(body)).into_response()
    }
}

#[api_handler(
    get,
    path = "/",
    responses(
        (status = OK, description = "Engine listing page", body = String, content_type = "text/html"),
        (status = NOT_FOUND, description = "Listing document is missing"),
        (status = INTERNAL_SERVER_ERROR, description = "Listing document is malformed or unreadable"),
    ),
    tag = CATALOG_TAG,
)]
pub(crate) async fn listing_handler(
    State(state): State<AppState>,
) -> Result<Html<String>, PageError> {
    let engines =
        loader::load_engines(&state.content).await.map_err(|e| PageError::new(&state, e))?;

    Ok(Html(html::listing_page(&state.config.site, &view::render_listing(&engines))))
}

#[api_handler(
    get,
    path = "/{engine_id}/{game_id}",
    params(
        ("engine_id" = String, Path, description = "Engine id"),
        ("game_id" = String, Path, description = "Game id within the engine"),
    ),
    responses(
        (status = OK, description = "Game detail page", body = String, content_type = "text/html"),
        (status = NOT_FOUND, description = "No such game"),
        (status = INTERNAL_SERVER_ERROR, description = "Game document is malformed"),
    ),
    tag = CATALOG_TAG,
)]
pub(crate) async fn detail_handler(
    State(state): State<AppState>,
    Path((engine_id, game_id)): Path<(String, String)>,
) -> Result<Html<String>, PageError> {
    let game = loader::load_game(&state.content, &engine_id, &game_id)
        .await
        .map_err(|e| PageError::new(&state, e))?;

    Ok(Html(html::detail_page(&state.config.site, &view::render_detail(&game))))
}

#[api_handler(
    get,
    path = "/api/engines",
    responses(
        (status = OK, description = "Every engine with its games, in presentation order", body = [Engine]),
        (status = NOT_FOUND, description = "Listing document is missing"),
        (status = INTERNAL_SERVER_ERROR, description = "Listing document is malformed or unreadable"),
    ),
    tag = CATALOG_TAG,
)]
pub(crate) async fn engines_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Engine>>, CatalogError> {
    Ok(Json(loader::load_engines(&state.content).await?))
}

#[api_handler(
    get,
    path = "/api/engines/{engine_id}/games/{game_id}",
    params(
        ("engine_id" = String, Path, description = "Engine id"),
        ("game_id" = String, Path, description = "Game id within the engine"),
    ),
    responses(
        (status = OK, description = "A single game document", body = Game),
        (status = NOT_FOUND, description = "No such game"),
        (status = INTERNAL_SERVER_ERROR, description = "Game document is malformed"),
    ),
    tag = CATALOG_TAG,
)]
pub(crate) async fn game_handler(
    State(state): State<AppState>,
    Path((engine_id, game_id)): Path<(String, String)>,
) -> Result<Json<Game>, CatalogError> {
    Ok(Json(loader::load_game(&state.content, &engine_id, &game_id).await?))
}

/// Fallback for every route the router does not know.
pub async fn not_found_handler(State(state): State<AppState>) -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Html(html::not_found_page(&state.config.site)))
}

/// Catalog pages and their JSON mirrors, documented for `OpenAPI`.
pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(listing_handler))
        .routes(routes!(detail_handler))
        .routes(routes!(engines_handler))
        .routes(routes!(game_handler))
}
