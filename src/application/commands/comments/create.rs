use super::CommentCommandService;
use crate::{
    application::{
        dto::{Actor, ArticleCommentDto},
        error::ApplicationResult,
    },
    domain::article::{ArticleId, CommentContent, NewArticleComment},
};
use tracing::{info, warn};

pub struct CreateCommentCommand {
    pub article_id: i64,
    pub content: String,
}

impl CommentCommandService {
    /// `Ok(None)` when the parent article does not exist.
    pub async fn save_comment(
        &self,
        actor: &Actor,
        command: CreateCommentCommand,
    ) -> ApplicationResult<Option<ArticleCommentDto>> {
        let content = CommentContent::new(command.content)?;

        let parent = match ArticleId::new(command.article_id) {
            Ok(id) => self.article_repo.find_by_id(id).await?.and_then(|a| a.id()),
            Err(_) => None,
        };
        let Some(article_id) = parent else {
            warn!(article_id = command.article_id, "comment skipped, article not found");
            return Ok(None);
        };

        let stamp = self.auditing.stamp(actor);
        let comment = self
            .comment_repo
            .insert(NewArticleComment { article_id, content }, &stamp)
            .await?;

        info!(comment_id = comment.id.0, %article_id, actor = %actor.handle(), "comment saved");
        Ok(Some(comment.into()))
    }
}
