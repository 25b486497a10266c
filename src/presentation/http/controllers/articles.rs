// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand},
    dto::{ArticleDto, ArticleSummaryDto, ArticleWithCommentsDto},
    queries::articles::{BindingSearchQuery, GetArticleByIdQuery, SearchArticlesQuery},
};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::ActingUser;
use crate::presentation::http::openapi::ArticlePageResponse;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use tracing::instrument;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ArticleSearchParams {
    /// One of TITLE, CONTENT, HASHTAG, ID, NICKNAME. Unknown values disable filtering.
    pub search_type: Option<String>,
    pub search_value: Option<String>,
    /// Zero-based page index.
    pub page: Option<u32>,
    pub size: Option<u32>,
    /// `field[,asc|desc]` over createdAt, title, hashtag, createdBy.
    pub sort: Option<String>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ArticleBindingParams {
    pub title: Option<String>,
    pub content: Option<String>,
    pub hashtag: Option<String>,
    /// RFC 3339 timestamp, matched exactly.
    pub created_at: Option<String>,
    pub created_by: Option<String>,
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub sort: Option<String>,
}

impl ArticleBindingParams {
    fn into_query(self) -> BindingSearchQuery {
        let params = [
            ("title", self.title),
            ("content", self.content),
            ("hashtag", self.hashtag),
            ("createdAt", self.created_at),
            ("createdBy", self.created_by),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.map(|value| (name.to_owned(), value)))
        .collect();

        BindingSearchQuery {
            params,
            page: self.page.unwrap_or_default(),
            size: self.size,
            sort: self.sort,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateArticleRequest {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub hashtag: Option<String>,
}

/// Omitted fields are left untouched; an empty `hashtag` clears it.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateArticleRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub hashtag: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/v1/articles",
    params(ArticleSearchParams),
    responses((status = 200, description = "Page of article summaries.", body = ArticlePageResponse)),
    tag = "Articles"
)]
pub async fn search_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ArticleSearchParams>,
) -> HttpResult<Json<ArticlePageResponse>> {
    let query = SearchArticlesQuery {
        search_type: params.search_type,
        keyword: params.search_value,
        page: params.page.unwrap_or_default(),
        size: params.size,
        sort: params.sort,
    };

    let page = state
        .services
        .article_queries
        .search_articles(query)
        .await
        .into_http()?;

    Ok(Json(page.map(ArticleSummaryDto::from).into()))
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/search",
    params(ArticleBindingParams),
    responses((status = 200, description = "Page of article summaries matching every supplied field.", body = ArticlePageResponse)),
    tag = "Articles"
)]
pub async fn search_articles_by_bindings(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ArticleBindingParams>,
) -> HttpResult<Json<ArticlePageResponse>> {
    let page = state
        .services
        .article_queries
        .search_articles_by_bindings(params.into_query())
        .await
        .into_http()?;

    Ok(Json(page.map(ArticleSummaryDto::from).into()))
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article with its comments, newest first.", body = ArticleWithCommentsDto),
        (status = 404, description = "No such article.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<ArticleWithCommentsDto>> {
    state
        .services
        .article_queries
        .get_article_with_comments(GetArticleByIdQuery { id })
        .await
        .into_http()?
        .map(Json)
        .ok_or_else(|| HttpError::not_found("article not found"))
}

#[utoipa::path(
    post,
    path = "/api/v1/articles",
    request_body = CreateArticleRequest,
    responses(
        (status = 201, description = "Article created.", body = ArticleDto),
        (status = 400, description = "Invalid title, content or hashtag.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Missing or invalid X-User-Id.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("actingUser" = [])),
    tag = "Articles"
)]
#[instrument(skip_all, fields(actor = %actor.handle()))]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    ActingUser(actor): ActingUser,
    Json(payload): Json<CreateArticleRequest>,
) -> HttpResult<(StatusCode, Json<ArticleDto>)> {
    let command = CreateArticleCommand {
        title: payload.title,
        content: payload.content,
        hashtag: payload.hashtag,
    };

    let created = state
        .services
        .article_commands
        .save_article(&actor, command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put,
    path = "/api/v1/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    request_body = UpdateArticleRequest,
    responses(
        (status = 200, description = "Article updated.", body = ArticleDto),
        (status = 404, description = "No such article; nothing was written.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("actingUser" = [])),
    tag = "Articles"
)]
#[instrument(skip_all, fields(actor = %actor.handle(), article_id = id))]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    ActingUser(actor): ActingUser,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let command = UpdateArticleCommand {
        id,
        title: payload.title,
        content: payload.content,
        hashtag: payload.hashtag,
    };

    state
        .services
        .article_commands
        .update_article(&actor, command)
        .await
        .into_http()?
        .map(Json)
        .ok_or_else(|| HttpError::not_found("article not found"))
}

#[utoipa::path(
    delete,
    path = "/api/v1/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses((status = 204, description = "Article and its comments removed, or nothing to remove.")),
    security(("actingUser" = [])),
    tag = "Articles"
)]
#[instrument(skip_all, fields(actor = %actor.handle(), article_id = id))]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    ActingUser(actor): ActingUser,
    Path(id): Path<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .article_commands
        .delete_article(&actor, DeleteArticleCommand { id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}
