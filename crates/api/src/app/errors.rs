use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

/// Wire contract for persistence failures on the mutating routes: a bare 500
/// with an empty (but terminated) body.
pub fn persistence_failure() -> axum::response::Response {
    StatusCode::INTERNAL_SERVER_ERROR.into_response()
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
