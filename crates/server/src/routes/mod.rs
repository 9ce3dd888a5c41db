use axum::{
    Router, middleware,
    routing::{IntoMakeService, get},
};
use tower_http::cors::{Any, CorsLayer};

use crate::{AppState, middleware as app_middleware};

pub mod health;
pub mod navigation;
pub mod sessions;
pub mod vision;
pub mod voice;

/// Full application, everything mounted under `/api`
pub fn app(state: AppState) -> Router {
    let cors = if state.config().cors_allow_any {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
    };

    let api_routes = Router::new()
        .route("/health", get(health::health_check))
        .merge(voice::router())
        .merge(vision::router())
        .merge(navigation::router())
        .merge(sessions::router())
        .with_state(state);

    Router::new()
        .nest("/api", api_routes)
        .layer(cors)
        .layer(middleware::from_fn(app_middleware::request_id_middleware))
}

pub fn router(state: AppState) -> IntoMakeService<Router> {
    app(state).into_make_service()
}
