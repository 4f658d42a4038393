use crate::handlers;
use crate::state::AppState;
use axum::{http::Method, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/terms", get(handlers::terms_page))
        .route("/terms/create", get(handlers::create_page))
        .route("/terms/:id/edit", get(handlers::edit_page))
        .route("/graph", get(handlers::graph_page))
        .route("/api", get(handlers::service_info))
        .route("/api/health", get(handlers::health))
        .route(
            "/api/terms",
            get(handlers::list_terms).post(handlers::create_term),
        )
        .route(
            "/api/terms/:id",
            get(handlers::get_term)
                .put(handlers::update_term)
                .delete(handlers::delete_term),
        )
        .route("/api/terms/search/:query", get(handlers::search_terms))
        .layer(cors_layer())
        .with_state(state)
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
}
