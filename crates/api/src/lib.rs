//! # SlotBook API
//!
//! The API crate provides the web server for the SlotBook reservation
//! service. It exposes a small REST surface for listing the half-hour slots
//! still open on a calendar date and booking one of them.
//!
//! ## Architecture
//!
//! This crate follows a layered architecture:
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Implement request processing logic
//! - **Middleware**: Map domain errors onto HTTP responses
//! - **Config**: Handle environment and application configuration
//!
//! Handlers never talk to a database directly; they go through the
//! [`BookingStore`] client held in [`ApiState`], which keeps the HTTP layer
//! testable against an in-memory store.

/// Configuration module for API settings
pub mod config;
/// Request handlers that implement business logic
pub mod handlers;
/// Error mapping between domain errors and HTTP responses
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::error_handling::HandleErrorLayer;
use axum::http::StatusCode;
use eyre::Result;
use slotbook_db::store::BookingStore;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
pub struct ApiState {
    /// Storage client the slot and booking services run against
    pub store: Arc<dyn BookingStore>,
}

/// Builds the application router with all routes attached.
///
/// Kept separate from [`start_server`] so tests can drive the complete HTTP
/// surface in process against a substitute [`BookingStore`].
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use slotbook_api::{app, ApiState};
/// use slotbook_db::mock::store::InMemoryBookingStore;
///
/// let state = Arc::new(ApiState {
///     store: Arc::new(InMemoryBookingStore::new()),
/// });
/// let router = app(state);
/// ```
pub fn app(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Slot availability endpoints
        .merge(routes::slots::routes())
        // Booking endpoints
        .merge(routes::bookings::routes())
        // Attach shared state to all routes
        .with_state(state)
}

/// Starts the API server with the provided configuration and storage client
///
/// This function initializes logging, builds the router, applies the
/// CORS and timeout layers, and serves until the process exits.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use slotbook_api::config::ApiConfig;
/// use slotbook_db::store::PgBookingStore;
///
/// async fn run() -> eyre::Result<()> {
///     let config = ApiConfig::from_env()?;
///     let pool = slotbook_db::create_pool(&config.database_url).await?;
///     let store = Arc::new(PgBookingStore::new(pool));
///     slotbook_api::start_server(config, store).await?;
///     Ok(())
/// }
/// ```
pub async fn start_server(config: config::ApiConfig, store: Arc<dyn BookingStore>) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Create shared state with dependencies
    let state = Arc::new(ApiState { store });

    // Build the application router with all routes
    let app = app(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let cors = tower_http::cors::CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::ACCEPT,
            ])
            .allow_origin(
                origins
                    .iter()
                    .map(|origin| origin.parse().unwrap())
                    .collect::<Vec<_>>(),
            )
            .allow_credentials(true);

        app.layer(cors)
    } else {
        app
    };

    // Add request timeout middleware; requests that outlive the timeout get
    // a 408 instead of hanging
    let app = app.layer(
        tower::ServiceBuilder::new()
            .layer(HandleErrorLayer::new(|_: tower::BoxError| async {
                StatusCode::REQUEST_TIMEOUT
            }))
            .timeout(std::time::Duration::from_secs(config.request_timeout)),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
