// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::{Actor, ArticleDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{Article, ArticleContent, ArticleTitle, Hashtag},
};
use tracing::info;

pub struct CreateArticleCommand {
    pub title: String,
    pub content: String,
    pub hashtag: Option<String>,
}

impl ArticleCommandService {
    /// Persists a new article owned by the acting user.
    pub async fn save_article(
        &self,
        actor: &Actor,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let title = ArticleTitle::new(command.title)?;
        let content = ArticleContent::new(command.content)?;
        let hashtag = Hashtag::parse_optional(command.hashtag)?;

        let owner = self
            .user_repo
            .find_by_handle(actor.handle())
            .await?
            .ok_or_else(|| ApplicationError::not_found("user account not found"))?;

        let article = Article::of(owner, title, content, hashtag);
        let stamp = self.auditing.stamp(actor);
        let saved = self.write_repo.insert(&article, &stamp).await?;

        info!(article_id = ?saved.id(), actor = %actor.handle(), "article saved");
        saved.try_into()
    }
}
