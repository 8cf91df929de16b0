mod error;
mod handlers;
mod user;

pub use error::ApiError;
pub use user::{CurrentUser, USER_ID_HEADER};

use axum::{http::HeaderValue, routing::get, Router};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::config::ServerConfig;
use crate::db::Database;

pub fn create_router(db: Database, config: &ServerConfig) -> Router {
    let api = Router::new()
        // Curriculum
        .route("/lessons", get(handlers::list_lessons))
        .route("/lessons/{name}", get(handlers::get_navigation))
        // Ratings
        .route(
            "/lessons/{name}/rating",
            get(handlers::get_rating)
                .put(handlers::set_rating)
                .delete(handlers::delete_rating),
        )
        .route(
            "/lessons/{name}/ratings/summary",
            get(handlers::get_rating_summary),
        )
        .route("/ratings", get(handlers::list_user_ratings))
        // Health
        .route("/health", get(handlers::health));

    let mut router = Router::new()
        .route("/", get(handlers::index))
        .route("/{page_name}", get(handlers::load_page))
        .nest("/api/v1", api);

    if let Some(dir) = &config.static_dir {
        tracing::info!("Serving static files from {}", dir.display());
        router = router.nest_service("/static", ServeDir::new(dir));
    }

    router
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(config))
        .with_state(db)
}

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    match &config.cors_origins {
        None => CorsLayer::permissive(),
        Some(origins) => {
            let origins: Vec<HeaderValue> = origins
                .iter()
                .filter_map(|origin| match origin.parse::<HeaderValue>() {
                    Ok(value) => Some(value),
                    Err(_) => {
                        tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                        None
                    }
                })
                .collect();
            CorsLayer::new().allow_origin(origins)
        }
    }
}
