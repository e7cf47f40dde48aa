//! # Workhours API
//!
//! HTTP surface for weekly business-hours schedules. Companies and queues
//! each own one schedule; the API loads and replaces it, validates proposed
//! weeks, reports whether the owner is currently in activity and lists
//! appointment slots for a date.
//!
//! ## Architecture
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Translate requests into schedule operations
//! - **Middleware**: Error mapping shared by every handler
//! - **Config**: Handle environment and application configuration
//!
//! Persistence goes through the [`ScheduleStore`] trait, so the router can
//! be served from PostgreSQL or from an in-memory store.

/// Configuration module for API settings
pub mod config;
/// Request handlers
pub mod handlers;
/// Middleware for error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::sync::Arc;

use axum::Router;
use eyre::{Result, WrapErr};
use sqlx::PgPool;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::FmtSubscriber;
use workhours_core::ScheduleStore;
use workhours_db::PgScheduleStore;

/// Shared application state that is accessible to all request handlers
pub struct ApiState {
    /// Storage for weekly schedules
    pub store: Arc<dyn ScheduleStore>,
}

impl ApiState {
    pub fn new(store: Arc<dyn ScheduleStore>) -> Self {
        Self { store }
    }
}

/// Builds the application router with every endpoint attached to `state`.
pub fn app(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Schedule management endpoints
        .merge(routes::schedule::routes())
        // In-activity status and appointment slots
        .merge(routes::availability::routes())
        .with_state(state)
}

/// Starts the API server with the provided configuration and database connection
///
/// Installs the tracing subscriber, wires a [`PgScheduleStore`] into the
/// router, applies CORS and timeout layers and serves until shutdown.
pub async fn start_server(config: config::ApiConfig, db_pool: PgPool) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let state = Arc::new(ApiState::new(Arc::new(PgScheduleStore::new(db_pool))));
    let app = app(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let origins = origins
            .iter()
            .map(|origin| origin.parse::<axum::http::HeaderValue>())
            .collect::<Result<Vec<_>, _>>()
            .wrap_err("Invalid origin in API_CORS_ORIGINS")?;

        let cors = tower_http::cors::CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::PUT,
                axum::http::Method::DELETE,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::AUTHORIZATION,
                axum::http::header::ACCEPT,
            ])
            .allow_origin(origins)
            .allow_credentials(true);

        app.layer(cors)
    } else {
        app
    };

    // Add request tracing and timeout middleware
    let app = app.layer(
        tower::ServiceBuilder::new()
            .layer(tower_http::trace::TraceLayer::new_for_http())
            .layer(tower_http::timeout::TimeoutLayer::new(
                std::time::Duration::from_secs(config.request_timeout),
            ))
            .into_inner(),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
