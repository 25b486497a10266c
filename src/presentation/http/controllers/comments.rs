use crate::application::{
    commands::comments::{CreateCommentCommand, DeleteCommentCommand, UpdateCommentCommand},
    dto::ArticleCommentDto,
    queries::articles::ListCommentsQuery,
};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::ActingUser;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use tracing::instrument;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CommentRequest {
    pub content: String,
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{id}/comments",
    params(("id" = i64, Path, description = "Article id")),
    responses((status = 200, description = "Comments, newest first.", body = [ArticleCommentDto])),
    tag = "Comments"
)]
pub async fn list_comments(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<Vec<ArticleCommentDto>>> {
    state
        .services
        .article_queries
        .list_comments(ListCommentsQuery { article_id: id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/articles/{id}/comments",
    params(("id" = i64, Path, description = "Article id")),
    request_body = CommentRequest,
    responses(
        (status = 201, description = "Comment created.", body = ArticleCommentDto),
        (status = 404, description = "No such article.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("actingUser" = [])),
    tag = "Comments"
)]
#[instrument(skip_all, fields(actor = %actor.handle(), article_id = id))]
pub async fn create_comment(
    Extension(state): Extension<HttpState>,
    ActingUser(actor): ActingUser,
    Path(id): Path<i64>,
    Json(payload): Json<CommentRequest>,
) -> HttpResult<(StatusCode, Json<ArticleCommentDto>)> {
    let command = CreateCommentCommand {
        article_id: id,
        content: payload.content,
    };

    state
        .services
        .comment_commands
        .save_comment(&actor, command)
        .await
        .into_http()?
        .map(|comment| (StatusCode::CREATED, Json(comment)))
        .ok_or_else(|| HttpError::not_found("article not found"))
}

#[utoipa::path(
    put,
    path = "/api/v1/comments/{id}",
    params(("id" = i64, Path, description = "Comment id")),
    request_body = CommentRequest,
    responses(
        (status = 200, description = "Comment updated.", body = ArticleCommentDto),
        (status = 404, description = "No such comment.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("actingUser" = [])),
    tag = "Comments"
)]
#[instrument(skip_all, fields(actor = %actor.handle(), comment_id = id))]
pub async fn update_comment(
    Extension(state): Extension<HttpState>,
    ActingUser(actor): ActingUser,
    Path(id): Path<i64>,
    Json(payload): Json<CommentRequest>,
) -> HttpResult<Json<ArticleCommentDto>> {
    let command = UpdateCommentCommand {
        id,
        content: payload.content,
    };

    state
        .services
        .comment_commands
        .update_comment(&actor, command)
        .await
        .into_http()?
        .map(Json)
        .ok_or_else(|| HttpError::not_found("comment not found"))
}

#[utoipa::path(
    delete,
    path = "/api/v1/comments/{id}",
    params(("id" = i64, Path, description = "Comment id")),
    responses((status = 204, description = "Comment removed, or nothing to remove.")),
    security(("actingUser" = [])),
    tag = "Comments"
)]
#[instrument(skip_all, fields(actor = %actor.handle(), comment_id = id))]
pub async fn delete_comment(
    Extension(state): Extension<HttpState>,
    ActingUser(actor): ActingUser,
    Path(id): Path<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .comment_commands
        .delete_comment(&actor, DeleteCommentCommand { id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}
