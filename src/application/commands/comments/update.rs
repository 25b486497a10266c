use super::CommentCommandService;
use crate::{
    application::{
        dto::{Actor, ArticleCommentDto},
        error::ApplicationResult,
    },
    domain::article::{ArticleCommentId, CommentContent},
};
use tracing::warn;

pub struct UpdateCommentCommand {
    pub id: i64,
    pub content: String,
}

impl CommentCommandService {
    pub async fn update_comment(
        &self,
        actor: &Actor,
        command: UpdateCommentCommand,
    ) -> ApplicationResult<Option<ArticleCommentDto>> {
        let content = CommentContent::new(command.content)?;
        let Ok(id) = ArticleCommentId::new(command.id) else {
            warn!(comment_id = command.id, "update skipped, invalid comment id");
            return Ok(None);
        };

        let stamp = self.auditing.stamp(actor);
        let updated = self.comment_repo.update_content(id, content, &stamp).await?;
        if updated.is_none() {
            warn!(comment_id = command.id, "update skipped, comment not found");
        }
        Ok(updated.map(Into::into))
    }
}
