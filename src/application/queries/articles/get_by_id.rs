use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDto, ArticleWithCommentsDto},
        error::ApplicationResult,
    },
    domain::article::{Article, ArticleId},
};

pub struct GetArticleByIdQuery {
    pub id: i64,
}

impl ArticleQueryService {
    /// A missing or non-positive id yields `None`.
    pub async fn search_article(
        &self,
        query: GetArticleByIdQuery,
    ) -> ApplicationResult<Option<ArticleDto>> {
        self.find(query.id)
            .await?
            .map(ArticleDto::try_from)
            .transpose()
    }

    pub async fn get_article_with_comments(
        &self,
        query: GetArticleByIdQuery,
    ) -> ApplicationResult<Option<ArticleWithCommentsDto>> {
        let Some(article) = self.find(query.id).await? else {
            return Ok(None);
        };
        let article = ArticleDto::try_from(article)?;
        let comments = self
            .comment_repo
            .list_by_article(ArticleId(article.id))
            .await?
            .into_iter()
            .map(Into::into)
            .collect();
        Ok(Some(ArticleWithCommentsDto { article, comments }))
    }

    async fn find(&self, raw_id: i64) -> ApplicationResult<Option<Article>> {
        match ArticleId::new(raw_id) {
            Ok(id) => Ok(self.read_repo.find_by_id(id).await?),
            Err(_) => Ok(None),
        }
    }
}
