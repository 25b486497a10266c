use super::ArticleQueryService;
use crate::{
    application::{dto::ArticleCommentDto, error::ApplicationResult},
    domain::article::ArticleId,
};

pub struct ListCommentsQuery {
    pub article_id: i64,
}

impl ArticleQueryService {
    /// Newest first. An unknown article simply has no comments.
    pub async fn list_comments(
        &self,
        query: ListCommentsQuery,
    ) -> ApplicationResult<Vec<ArticleCommentDto>> {
        let Ok(article_id) = ArticleId::new(query.article_id) else {
            return Ok(Vec::new());
        };
        let comments = self.comment_repo.list_by_article(article_id).await?;
        Ok(comments.into_iter().map(Into::into).collect())
    }
}
