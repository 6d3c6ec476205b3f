//! gist HTTP server
//!
//! Actix-web REST API exposing `POST /summarize` and `GET /health`

pub mod error;
pub mod extract;
pub mod routes;
pub mod state;
pub mod types;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use gist_common::{AppConfig, Result};
use std::sync::Arc;
use tracing::info;
use tracing_actix_web::TracingLogger;

pub use error::ApiError;
pub use state::AppState;

/// Register every route on an app or test service
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(routes::summarize::summarize)
        .service(routes::system::health);
}

/// Bind and run the HTTP server until shutdown
pub async fn start_server(config: AppConfig) -> Result<()> {
    let bind_addr = config.server_bind_address();
    let max_body_bytes = config.max_body_bytes;

    let state = web::Data::new(Arc::new(AppState::new(config)?));

    info!(
        "Starting server on http://{} (model: {}, mock: {})",
        bind_addr,
        state.summarizer.model(),
        state.summarizer.is_mock()
    );

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .app_data(state.clone())
            .app_data(web::PayloadConfig::new(max_body_bytes))
            .configure(configure)
    })
    .bind(&bind_addr)?
    .run()
    .await?;

    info!("Server stopped");
    Ok(())
}
