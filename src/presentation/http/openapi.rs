// src/presentation/http/openapi.rs
use crate::application::dto::{ArticleSummaryDto, PageDto};
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::{
    Components,
    security::{ApiKey, ApiKeyValue, SecurityScheme},
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};

use super::extractors::ACTING_USER_HEADER;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticlePageResponse {
    pub items: Vec<ArticleSummaryDto>,
    pub page: u32,
    pub size: u32,
    pub total_items: u64,
    pub total_pages: u64,
    pub has_next: bool,
}

impl From<PageDto<ArticleSummaryDto>> for ArticlePageResponse {
    fn from(page: PageDto<ArticleSummaryDto>) -> Self {
        Self {
            items: page.items,
            page: page.page,
            size: page.size,
            total_items: page.total_items,
            total_pages: page.total_pages,
            has_next: page.has_next,
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::articles::search_articles,
        crate::presentation::http::controllers::articles::search_articles_by_bindings,
        crate::presentation::http::controllers::articles::get_article,
        crate::presentation::http::controllers::articles::create_article,
        crate::presentation::http::controllers::articles::update_article,
        crate::presentation::http::controllers::articles::delete_article,
        crate::presentation::http::controllers::comments::list_comments,
        crate::presentation::http::controllers::comments::create_comment,
        crate::presentation::http::controllers::comments::update_comment,
        crate::presentation::http::controllers::comments::delete_comment,
        crate::presentation::http::controllers::users::register,
        crate::presentation::http::controllers::users::get_account,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            ArticlePageResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::articles::CreateArticleRequest,
            crate::presentation::http::controllers::articles::UpdateArticleRequest,
            crate::presentation::http::controllers::comments::CommentRequest,
            crate::presentation::http::controllers::users::RegisterRequest,
            crate::application::dto::ArticleDto,
            crate::application::dto::ArticleSummaryDto,
            crate::application::dto::ArticleCommentDto,
            crate::application::dto::ArticleWithCommentsDto,
            crate::application::dto::UserAccountDto
        )
    ),
    tags(
        (name = "Articles", description = "Article search and editing"),
        (name = "Comments", description = "Replies attached to an article"),
        (name = "Users", description = "User accounts"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Project Board API",
        description = "Bulletin board of articles and comments",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        components.add_security_scheme(
            "actingUser",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(ACTING_USER_HEADER))),
        );
    }
}

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

pub fn docs_router() -> Router {
    let redoc = Redoc::with_url("/redoc", ApiDoc::openapi());
    Router::new()
        .route("/openapi.json", get(serve_openapi))
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/redoc") }))
}

pub fn write_openapi_snapshot(output_path: &str) -> std::io::Result<()> {
    let spec = ApiDoc::openapi();
    let path = Path::new(output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(())
}

/// Snapshot destination, overridable through `OPENAPI_SNAPSHOT_PATH`.
pub fn snapshot_path() -> String {
    env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| "spec/openapi.json".to_string())
}
