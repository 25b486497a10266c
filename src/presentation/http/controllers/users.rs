use crate::application::{
    commands::users::RegisterUserCommand, dto::UserAccountDto, queries::users::GetAccountQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterRequest {
    pub handle: String,
    #[serde(default)]
    pub nickname: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/v1/users",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created.", body = UserAccountDto),
        (status = 409, description = "Handle already taken.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn register(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<RegisterRequest>,
) -> HttpResult<(StatusCode, Json<UserAccountDto>)> {
    let command = RegisterUserCommand {
        handle: payload.handle,
        nickname: payload.nickname,
    };

    let account = state
        .services
        .user_commands
        .register(command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(account)))
}

#[utoipa::path(
    get,
    path = "/api/v1/users/{handle}",
    params(("handle" = String, Path, description = "Account handle")),
    responses(
        (status = 200, description = "Account details.", body = UserAccountDto),
        (status = 404, description = "No such account.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn get_account(
    Extension(state): Extension<HttpState>,
    Path(handle): Path<String>,
) -> HttpResult<Json<UserAccountDto>> {
    state
        .services
        .user_queries
        .get_account(GetAccountQuery { handle })
        .await
        .into_http()
        .map(Json)
}
