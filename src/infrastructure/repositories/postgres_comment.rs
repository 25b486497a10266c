use super::map_sqlx;
use crate::domain::article::{
    ArticleComment, ArticleCommentId, ArticleCommentRepository, ArticleId, CommentContent,
    NewArticleComment,
};
use crate::domain::audit::{AuditFields, AuditStamp};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresArticleCommentRepository {
    pool: PgPool,
}

impl PostgresArticleCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CommentRow {
    id: i64,
    article_id: i64,
    content: String,
    created_at: DateTime<Utc>,
    created_by: String,
    modified_at: DateTime<Utc>,
    modified_by: String,
}

impl TryFrom<CommentRow> for ArticleComment {
    type Error = DomainError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        Ok(ArticleComment {
            id: ArticleCommentId::new(row.id)?,
            article_id: ArticleId::new(row.article_id)?,
            content: CommentContent::new(row.content)?,
            audit: AuditFields {
                created_at: row.created_at,
                created_by: row.created_by,
                modified_at: row.modified_at,
                modified_by: row.modified_by,
            },
        })
    }
}

#[async_trait]
impl ArticleCommentRepository for PostgresArticleCommentRepository {
    async fn insert(
        &self,
        comment: NewArticleComment,
        stamp: &AuditStamp,
    ) -> DomainResult<ArticleComment> {
        let row = sqlx::query_as::<_, CommentRow>(
            "INSERT INTO article_comments (article_id, content, created_at, created_by, modified_at, modified_by)
             VALUES ($1, $2, $3, $4, $3, $4)
             RETURNING id, article_id, content, created_at, created_by, modified_at, modified_by",
        )
        .bind(i64::from(comment.article_id))
        .bind(comment.content.as_str())
        .bind(stamp.at)
        .bind(stamp.actor.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        ArticleComment::try_from(row)
    }

    async fn update_content(
        &self,
        id: ArticleCommentId,
        content: CommentContent,
        stamp: &AuditStamp,
    ) -> DomainResult<Option<ArticleComment>> {
        let row = sqlx::query_as::<_, CommentRow>(
            "UPDATE article_comments
             SET content = $1, modified_at = $2, modified_by = $3
             WHERE id = $4
             RETURNING id, article_id, content, created_at, created_by, modified_at, modified_by",
        )
        .bind(content.as_str())
        .bind(stamp.at)
        .bind(stamp.actor.as_str())
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(ArticleComment::try_from).transpose()
    }

    async fn delete(&self, id: ArticleCommentId) -> DomainResult<bool> {
        let result = sqlx::query("DELETE FROM article_comments WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(result.rows_affected() > 0)
    }

    async fn list_by_article(&self, article_id: ArticleId) -> DomainResult<Vec<ArticleComment>> {
        let rows = sqlx::query_as::<_, CommentRow>(
            "SELECT id, article_id, content, created_at, created_by, modified_at, modified_by
             FROM article_comments WHERE article_id = $1
             ORDER BY created_at DESC, id DESC",
        )
        .bind(i64::from(article_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(ArticleComment::try_from).collect()
    }

    async fn count(&self) -> DomainResult<u64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(1) FROM article_comments")
            .fetch_one(&self.pool)
            .await
            .map(i64::unsigned_abs)
            .map_err(map_sqlx)
    }
}
