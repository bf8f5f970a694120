use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse};
use std::sync::Arc;

use crate::accesso::auth::{SigninResponse, SignupFlow};

#[utoipa::path(
    post,
    path = "/auth/signin",
    responses(
        (status = 200, description = "Signin acknowledged", body = SigninResponse, content_type = "application/json"),
    ),
    tag = "auth"
)]
// Stub: acknowledges the request without verifying credentials or issuing a
// session. No body is required and nothing is validated.
pub async fn signin(flow: Extension<Arc<SignupFlow>>) -> impl IntoResponse {
    (StatusCode::OK, Json(flow.signin()))
}

#[cfg(test)]
mod tests {
    use super::signin;
    use crate::accesso::auth::SignupFlow;
    use crate::accesso::auth::test_support::{CountingHasher, InMemoryUserStore};
    use axum::extract::Extension;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use std::sync::Arc;

    #[tokio::test]
    async fn signin_acknowledges_without_side_effects() {
        let store = Arc::new(InMemoryUserStore::new());
        let flow = Arc::new(SignupFlow::new(
            Arc::new(CountingHasher::default()),
            store.clone(),
        ));

        let response = signin(Extension(flow)).await.into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(store.count(), 0);
    }
}
