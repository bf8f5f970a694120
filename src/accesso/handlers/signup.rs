use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse};
use std::sync::Arc;
use tracing::{debug, error, instrument};

use super::{normalize_email, valid_email};
use crate::accesso::auth::{SignupError, SignupFlow, SignupRequest, SignupUser};

#[utoipa::path(
    post,
    path = "/auth/signup",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "Registration successful", body = SignupUser, content_type = "application/json"),
        (status = 400, description = "Missing or invalid payload", body = String),
        (status = 409, description = "A user with the specified email already exists", body = String),
        (status = 500, description = "Registration failed", body = String),
    ),
    tag = "auth"
)]
#[instrument(skip(flow))]
pub async fn signup(
    flow: Extension<Arc<SignupFlow>>,
    payload: Option<Json<SignupRequest>>,
) -> impl IntoResponse {
    let request: SignupRequest = match payload {
        Some(Json(payload)) => payload,
        None => return (StatusCode::BAD_REQUEST, "Missing payload".to_string()).into_response(),
    };

    // SecretString: the password logs redacted
    debug!("request: {:?}", request);

    let email = normalize_email(&request.email);

    // An empty email falls through to the flow, which reports the missing
    // field as an explicit error; only non-empty malformed input is rejected
    // here.
    if !email.is_empty() && !valid_email(&email) {
        return (StatusCode::BAD_REQUEST, "Invalid email".to_string()).into_response();
    }

    let request = SignupRequest {
        email,
        password: request.password,
    };

    match flow.signup(request).await {
        Ok(user) => (StatusCode::CREATED, Json(user)).into_response(),
        Err(SignupError::InvalidInput(reason)) => {
            (StatusCode::BAD_REQUEST, reason.to_string()).into_response()
        }
        Err(SignupError::CredentialsTaken) => {
            (StatusCode::CONFLICT, "Credentials taken".to_string()).into_response()
        }
        Err(err) => {
            error!("Signup failed: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Registration failed".to_string(),
            )
                .into_response()
        }
    }
}
