use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use rollcall_core::{UserId, UserPatch};

use crate::app::{dto, errors};
use crate::app::services::AppServices;

/// `GET /` — every user record as a JSON array.
///
/// Failure is a 500 with the legacy plain-text body `error`. (The service
/// this replaces left the status at 200 on failure; that defect is
/// corrected here.)
pub async fn list_users(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.users().list().await {
        Ok(users) => (StatusCode::OK, Json(users)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "list users failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "error").into_response()
        }
    }
}

/// `POST /create` — persist a new user; the store assigns the id.
pub async fn create_user(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateUserRequest>,
) -> axum::response::Response {
    match services.users().insert(body.name, body.rollno).await {
        Ok(user) => {
            tracing::info!(id = %user.id, "user created");
            (StatusCode::OK, "created").into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "create user failed");
            errors::persistence_failure()
        }
    }
}

/// `PATCH /update/{id}` — merge a partial update into the record, creating
/// one (with a fresh store-assigned id) when none exists.
///
/// The success body echoes the submitted patch, not the post-update record.
/// The two can diverge; callers that need the stored state must re-fetch.
pub async fn update_user(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(patch): Json<UserPatch>,
) -> axum::response::Response {
    let id: UserId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid user id"),
    };

    match services.users().upsert(id, patch.clone()).await {
        Ok(user) => {
            tracing::info!(id = %user.id, "user upserted");
            (StatusCode::OK, Json(patch)).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "update user failed");
            errors::persistence_failure()
        }
    }
}
