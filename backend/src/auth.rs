use axum::Json;
use common::{Envelope, LoginResult, StepCode};

use crate::mock_data::LOGIN_RESULT;

// --- API Handlers ---

/// ## Log in
/// Accepts any body and always answers with the admin session.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    responses(
        (status = 200, description = "Login successful", body = Envelope<LoginResult>),
    )
)]
pub async fn login() -> Json<Envelope<LoginResult>> {
    tracing::info!("Logging in mock user: {}", LOGIN_RESULT.user.username);
    Json(Envelope::ok(LOGIN_RESULT.clone()))
}

/// ## Two-step verification code
/// Step code `0` tells the front-end to skip the second factor.
#[utoipa::path(
    post,
    path = "/api/auth/2step-code",
    tag = "auth",
    responses(
        (status = 200, description = "Second factor disabled", body = StepCode),
    )
)]
pub async fn two_step_code() -> Json<StepCode> {
    tracing::debug!("Two-step verification bypassed");
    Json(StepCode { step_code: 0 })
}
