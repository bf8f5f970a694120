//! Request/response types for the auth endpoints.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::store::StoredUser;

/// Signup input: constructed per request at the boundary, consumed once by the
/// flow. The password is wrapped in [`SecretString`] so it never shows up in
/// `Debug` output or logs.
#[derive(ToSchema, Deserialize, Debug)]
pub struct SignupRequest {
    pub email: String,
    #[schema(value_type = String, format = Password)]
    pub password: SecretString,
}

/// Caller-facing user record. Projected from [`StoredUser`]; structurally has
/// no hash field, so no code path can leak the digest.
#[derive(ToSchema, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct SignupUser {
    pub id: Uuid,
    pub email: String,
}

impl From<StoredUser> for SignupUser {
    fn from(user: StoredUser) -> Self {
        Self {
            id: user.id,
            email: user.email,
        }
    }
}

/// Fixed acknowledgement returned by the signin stub.
#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct SigninResponse {
    pub msg: String,
}
