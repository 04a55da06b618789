//! HTTP application wiring (Axum router + service wiring).
//!
//! Layout:
//! - `services.rs`: store wiring behind `AppServices`
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request DTOs
//! - `errors.rs`: error responses

use std::sync::Arc;

use axum::{Extension, Router};

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests, which inject their own services).
pub fn build_app(services: Arc<services::AppServices>) -> Router {
    routes::router().layer(Extension(services))
}
