// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::{
    application::{dto::Actor, error::ApplicationResult},
    domain::article::ArticleId,
};
use tracing::{info, warn};

pub struct DeleteArticleCommand {
    pub id: i64,
}

impl ArticleCommandService {
    /// Removes the article and its comments. Missing ids are a no-op reported as `false`.
    pub async fn delete_article(
        &self,
        actor: &Actor,
        command: DeleteArticleCommand,
    ) -> ApplicationResult<bool> {
        let Ok(id) = ArticleId::new(command.id) else {
            warn!(article_id = command.id, "delete skipped, invalid id");
            return Ok(false);
        };

        let removed = self.write_repo.delete(id).await?;
        if removed {
            info!(article_id = %id, actor = %actor.handle(), "article deleted");
        } else {
            warn!(article_id = %id, "delete skipped, article not found");
        }
        Ok(removed)
    }
}
