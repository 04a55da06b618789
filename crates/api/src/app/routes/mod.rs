use axum::{
    routing::{get, patch, post},
    Router,
};

pub mod system;
pub mod users;

/// Router for all endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/", get(users::list_users))
        .route("/create", post(users::create_user))
        .route("/update/:id", patch(users::update_user))
        .route("/health", get(system::health))
}
