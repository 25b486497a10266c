use crate::application::error::ApplicationError;
use crate::domain::article::{Article, ArticleComment};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::UserAccountDto;

const EXCERPT_CHARS: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDto {
    pub id: i64,
    pub owner: UserAccountDto,
    pub title: String,
    pub content: String,
    pub hashtag: Option<String>,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub modified_at: DateTime<Utc>,
    pub modified_by: String,
}

impl TryFrom<Article> for ArticleDto {
    type Error = ApplicationError;

    fn try_from(article: Article) -> Result<Self, Self::Error> {
        let (Some(id), Some(audit)) = (article.id(), article.audit().cloned()) else {
            return Err(ApplicationError::infrastructure(
                "repository returned an article that was never persisted",
            ));
        };
        Ok(Self {
            id: id.into(),
            owner: article.owner().clone().into(),
            title: article.title().as_str().to_owned(),
            content: article.content().as_str().to_owned(),
            hashtag: article.hashtag().map(|h| h.as_str().to_owned()),
            created_at: audit.created_at,
            created_by: audit.created_by,
            modified_at: audit.modified_at,
            modified_by: audit.modified_by,
        })
    }
}

/// List-view projection of an article: content is cut down to an excerpt.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleSummaryDto {
    pub id: i64,
    pub title: String,
    pub excerpt: String,
    pub hashtag: Option<String>,
    pub author_handle: String,
    pub author_nickname: Option<String>,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
}

impl From<ArticleDto> for ArticleSummaryDto {
    fn from(article: ArticleDto) -> Self {
        Self {
            id: article.id,
            title: article.title,
            excerpt: excerpt(&article.content),
            hashtag: article.hashtag,
            author_handle: article.owner.handle,
            author_nickname: article.owner.nickname,
            created_at: article.created_at,
            created_by: article.created_by,
        }
    }
}

fn excerpt(content: &str) -> String {
    let mut chars = content.chars();
    let head: String = chars.by_ref().take(EXCERPT_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleCommentDto {
    pub id: i64,
    pub article_id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub modified_at: DateTime<Utc>,
    pub modified_by: String,
}

impl From<ArticleComment> for ArticleCommentDto {
    fn from(comment: ArticleComment) -> Self {
        Self {
            id: comment.id.into(),
            article_id: comment.article_id.into(),
            content: comment.content.into_inner(),
            created_at: comment.audit.created_at,
            created_by: comment.audit.created_by,
            modified_at: comment.audit.modified_at,
            modified_by: comment.audit.modified_by,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleWithCommentsDto {
    #[serde(flatten)]
    pub article: ArticleDto,
    pub comments: Vec<ArticleCommentDto>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_content_is_kept_whole() {
        assert_eq!(excerpt("hello"), "hello");
    }

    #[test]
    fn long_content_is_cut_on_char_boundary() {
        let content = "가".repeat(EXCERPT_CHARS + 5);
        let cut = excerpt(&content);
        assert!(cut.ends_with("..."));
        assert_eq!(cut.chars().count(), EXCERPT_CHARS + 3);
    }
}
