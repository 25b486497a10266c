use crate::domain::article::comment::{
    ArticleComment, ArticleCommentId, CommentContent, NewArticleComment,
};
use crate::domain::article::entity::Article;
use crate::domain::article::search::{ArticleFilter, ArticleSort};
use crate::domain::article::value_objects::ArticleId;
use crate::domain::audit::AuditStamp;
use crate::domain::errors::DomainResult;
use crate::domain::pagination::{Page, PageRequest};
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    /// Stores an unpersisted article, stamping both audit pairs.
    async fn insert(&self, article: &Article, stamp: &AuditStamp) -> DomainResult<Article>;
    /// Writes title, content and hashtag of a persisted article and its modified pair.
    async fn update(&self, article: &Article, stamp: &AuditStamp) -> DomainResult<Article>;
    /// Removes the article together with its comments. `false` when nothing matched.
    async fn delete(&self, id: ArticleId) -> DomainResult<bool>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    async fn search(
        &self,
        filter: &ArticleFilter,
        sort: ArticleSort,
        page: PageRequest,
    ) -> DomainResult<Page<Article>>;
    async fn count(&self) -> DomainResult<u64>;
}

#[async_trait]
pub trait ArticleCommentRepository: Send + Sync {
    async fn insert(
        &self,
        comment: NewArticleComment,
        stamp: &AuditStamp,
    ) -> DomainResult<ArticleComment>;
    async fn update_content(
        &self,
        id: ArticleCommentId,
        content: CommentContent,
        stamp: &AuditStamp,
    ) -> DomainResult<Option<ArticleComment>>;
    async fn delete(&self, id: ArticleCommentId) -> DomainResult<bool>;
    /// Comments of one article, newest first.
    async fn list_by_article(&self, article_id: ArticleId) -> DomainResult<Vec<ArticleComment>>;
    async fn count(&self) -> DomainResult<u64>;
}
