//! HTTP route definitions

use crate::api::handlers;
use crate::api::models::*;
use crate::store::Monster;
use axum::{routing::get, Router};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Monsters API",
        description = "CRUD operations over the monsters table.",
        license(name = "MIT"),
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        handlers::list_monsters,
        handlers::get_monster,
        handlers::create_monster,
        handlers::update_monster,
        handlers::delete_monster,
        handlers::health_check,
    ),
    components(schemas(
        Monster,
        MonsterInput,
        CreateMonsterRequest,
        UpdateMonsterRequest,
        MonsterListResponse,
        MonsterResponse,
        HealthResponse,
        ErrorResponse,
        ErrorDetail,
    )),
    tags(
        (name = "Monsters", description = "Monster CRUD endpoints"),
        (name = "Health", description = "Health and monitoring endpoints"),
    )
)]
pub struct ApiDoc;

/// Create the main application router
pub fn create_router(state: Arc<crate::AppState>) -> Router {
    let (cors_enabled, request_timeout) = (
        state.settings.server.cors_enabled,
        Duration::from_secs(state.settings.server.request_timeout_secs),
    );

    let monster_routes = Router::new()
        .route(
            "/monsters",
            get(handlers::list_monsters)
                .post(handlers::create_monster)
                .fallback(handlers::method_not_allowed),
        )
        .route(
            "/monsters/:id",
            get(handlers::get_monster)
                .put(handlers::update_monster)
                .delete(handlers::delete_monster)
                .fallback(handlers::method_not_allowed),
        );

    let router = Router::new()
        // Health check endpoint
        .route(
            "/health",
            get(handlers::health_check).fallback(handlers::method_not_allowed),
        )
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Monster routes under /api/v1
        .nest("/api/v1", monster_routes)
        // Unknown paths get the JSON error body too
        .fallback(handlers::route_not_found)
        .with_state(state)
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http());

    if cors_enabled {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}
