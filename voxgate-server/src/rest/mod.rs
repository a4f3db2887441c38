pub mod controllers;

pub use controllers::GatewayController;

use crate::ServerConfig;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    set_header::SetResponseHeaderLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

/// Build CORS layer based on security configuration
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    if config.security.allowed_origins.is_empty() {
        // Development mode: allow all origins (the browser shell runs on a
        // random local origin)
        cors.allow_origin(AllowOrigin::any())
    } else {
        let origins: Vec<HeaderValue> =
            config.security.allowed_origins.iter().filter_map(|o| o.parse().ok()).collect();
        cors.allow_origin(origins)
    }
}

/// Create the gateway application.
pub fn create_app(config: ServerConfig) -> Router {
    let controller = GatewayController::new(&config);

    let api_router = Router::new()
        .route("/chat", post(controllers::chat::chat))
        .route("/stt", post(controllers::audio::transcribe))
        .route("/tts", get(controllers::audio::synthesize))
        .with_state(controller.clone());

    let app = Router::new()
        .nest("/api", api_router)
        .route("/health", get(controllers::health::health))
        .with_state(controller);

    let cors_layer = build_cors_layer(&config);

    app.layer(
        ServiceBuilder::new()
            // Tracing for observability
            .layer(TraceLayer::new_for_http())
            // Request timeout: remote model calls are the slow path
            .layer(TimeoutLayer::with_status_code(
                axum::http::StatusCode::REQUEST_TIMEOUT,
                config.security.request_timeout,
            ))
            // Request body size limit (screenshots arrive base64-encoded)
            .layer(DefaultBodyLimit::max(config.security.max_body_size))
            // CORS configuration
            .layer(cors_layer)
            .layer(SetResponseHeaderLayer::if_not_present(
                header::X_CONTENT_TYPE_OPTIONS,
                HeaderValue::from_static("nosniff"),
            )),
    )
}
