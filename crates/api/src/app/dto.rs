use serde::Deserialize;

// -------------------------
// Request DTOs
// -------------------------

/// Body of `POST /create`. Typed deserialization here is the boundary
/// validation: missing or mistyped fields never reach the handler.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub rollno: i64,
}

// `PATCH /update/{id}` takes `rollcall_core::UserPatch` directly: the domain
// type already is the allow-list of updatable fields.
