// src/application/commands/articles/update.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::{Actor, ArticleDto},
        error::ApplicationResult,
    },
    domain::article::{ArticleContent, ArticleId, ArticleTitle, Hashtag},
};
use tracing::{info, warn};

/// Fields left as `None` are kept. `hashtag: Some("")` clears the hashtag.
pub struct UpdateArticleCommand {
    pub id: i64,
    pub title: Option<String>,
    pub content: Option<String>,
    pub hashtag: Option<String>,
}

impl ArticleCommandService {
    /// Returns `Ok(None)` without writing when the article does not exist.
    pub async fn update_article(
        &self,
        actor: &Actor,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<Option<ArticleDto>> {
        let UpdateArticleCommand {
            id,
            title,
            content,
            hashtag,
        } = command;

        let title = title.map(ArticleTitle::new).transpose()?;
        let content = content.map(ArticleContent::new).transpose()?;
        let hashtag = hashtag
            .map(|value| Hashtag::parse_optional(Some(value)))
            .transpose()?;

        let existing = match ArticleId::new(id) {
            Ok(article_id) => self.read_repo.find_by_id(article_id).await?,
            Err(_) => None,
        };
        let Some(mut article) = existing else {
            warn!(article_id = id, "update skipped, article not found");
            return Ok(None);
        };

        if let Some(title) = title {
            article.set_title(title);
        }
        if let Some(content) = content {
            article.set_content(content);
        }
        if let Some(hashtag) = hashtag {
            article.set_hashtag(hashtag);
        }

        let stamp = self.auditing.stamp(actor);
        let updated = self.write_repo.update(&article, &stamp).await?;

        info!(article_id = id, actor = %actor.handle(), "article updated");
        ArticleDto::try_from(updated).map(Some)
    }
}
