use axum::Json;
use common::{Envelope, UserInfo};

use crate::mock_data::USER_INFO;

/// ## Current user
/// The admin user with its role and permissions expanded.
#[utoipa::path(
    get,
    path = "/api/user/info",
    tag = "user",
    responses(
        (status = 200, description = "Current user", body = Envelope<UserInfo>),
    )
)]
pub async fn info() -> Json<Envelope<UserInfo>> {
    tracing::info!("Fetching user info for role: {}", USER_INFO.role.id);
    Json(Envelope::ok(USER_INFO.clone()))
}
