//! Testing-only endpoints, mounted when `BLOGLIST_TESTING_ROUTES` is enabled.
//!
//! ```text
//! POST /api/testing/reset
//! ```

use actix_web::{HttpResponse, post, web};

use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Remove every account and blog so a suite starts from a clean slate.
#[utoipa::path(
    post,
    path = "/api/testing/reset",
    responses(
        (status = 204, description = "Stores cleared"),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["testing"],
    operation_id = "resetEnvironment",
    security([])
)]
#[post("/testing/reset")]
pub async fn reset(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    state.reset.reset().await?;
    Ok(HttpResponse::NoContent().finish())
}
