use super::{handlers, state::AppState};
use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderValue, Method};
use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

fn cors_layer(origin: &str) -> CorsLayer {
    if origin == "*" {
        return CorsLayer::permissive();
    }
    match origin.parse::<HeaderValue>() {
        Ok(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
            .allow_credentials(true),
        Err(e) => {
            warn!("invalid CORS origin, falling back to permissive: {e}");
            CorsLayer::permissive()
        }
    }
}

/// Creates the Axum router with all the application routes.
pub fn create_router(app_state: AppState) -> Router {
    let cors = cors_layer(&app_state.config.cors_origin);
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .route("/api", get(handlers::api_info))
        .route("/api/ping", get(handlers::ping))
        .route("/api/status", get(handlers::status))
        .route("/api/auth/register", post(handlers::register_handler))
        .route("/api/auth/login", post(handlers::login_handler))
        .route("/api/auth/me", get(handlers::me_handler))
        .route("/api/courses", get(handlers::catalog_handler))
        .route("/api/courses/{id}", get(handlers::catalog_course_handler))
        .route(
            "/api/generate-course",
            post(handlers::generate_course_handler),
        )
        .route("/api/user/courses", get(handlers::user_courses_handler))
        .route(
            "/api/user/courses/{id}",
            get(handlers::user_course_handler).delete(handlers::delete_user_course_handler),
        )
        .route(
            "/api/user/courses/{id}/progress",
            put(handlers::update_progress_handler),
        )
        .route(
            "/api/user/courses/{id}/like",
            put(handlers::like_course_handler),
        )
        .route("/api/user/dashboard", get(handlers::dashboard_handler))
        .route(
            "/api/learning-paths",
            get(handlers::learning_paths_handler).post(handlers::create_learning_path_handler),
        )
        .route(
            "/api/learning-paths/{id}",
            put(handlers::update_learning_path_handler)
                .delete(handlers::delete_learning_path_handler),
        )
        .route(
            "/api/skill-assessments",
            get(handlers::skill_assessments_handler),
        )
        .route(
            "/api/skill-assessments/generate",
            post(handlers::generate_assessment_handler),
        )
        .route(
            "/api/skill-assessments/{id}/submit",
            post(handlers::submit_assessment_handler),
        )
        .route(
            "/api/code",
            get(handlers::list_snippets_handler).post(handlers::save_snippet_handler),
        )
        .route(
            "/api/code/execute-code",
            post(handlers::execute_code_handler),
        )
        .route("/api/code/shared", post(handlers::share_code_handler))
        .route(
            "/api/code/shared/{id}",
            get(handlers::get_shared_code_handler),
        )
        .layer(DefaultBodyLimit::max(10 * 1024 * 1024))
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
