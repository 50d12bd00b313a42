pub mod config;
pub mod errors;
pub mod handlers;
pub mod request_id;

use axum::{
    Extension, Router,
    http::{HeaderValue, Method, header},
    middleware,
    routing::post,
};
use synth_data::prelude::RecordBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
};

use crate::{config::ServerConfig, handlers::generate_records, request_id::request_id_middleware};

/// Shared, read-only state handed to every request.
#[derive(Debug, Clone)]
pub struct AppState {
    pub builder: RecordBuilder,
    pub max_rows: usize,
}

impl AppState {
    pub fn new(builder: RecordBuilder, config: &ServerConfig) -> Self {
        Self {
            builder,
            max_rows: config.max_rows,
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers(Any)
        .allow_origin(Any);

    Router::new()
        .route("/", post(generate_records))
        .layer(Extension(state))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(cors)
        // Security headers
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
}

pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    let builder = RecordBuilder::new();
    tracing::info!(
        semantic_generators = builder.values().catalog().len(),
        max_rows = config.max_rows,
        "Record builder ready"
    );

    let app = create_router(AppState::new(builder, &config));

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;

    tracing::info!("Server running on http://{}", config.bind_addr());

    axum::serve(listener, app).await?;

    Ok(())
}
