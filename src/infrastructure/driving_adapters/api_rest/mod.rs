//! REST API Module
//!
//! Contains HTTP handlers, DTOs, and middleware for the REST API.

pub mod dto;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::application::PayrollService;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub payroll_service: Arc<PayrollService>,
}

impl AppState {
    #[must_use]
    pub fn new(payroll_service: Arc<PayrollService>) -> Self {
        Self { payroll_service }
    }
}

/// Build the full router with tracing, request-id and CORS layers
///
/// The request-id layer is outermost so even CORS preflight answers carry
/// the header.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::employees::router())
        .merge(handlers::payroll::router())
        .layer(axum::middleware::from_fn(middleware::cors_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .with_state(state)
}
