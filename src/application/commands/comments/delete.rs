use super::CommentCommandService;
use crate::{
    application::{dto::Actor, error::ApplicationResult},
    domain::article::ArticleCommentId,
};
use tracing::info;

pub struct DeleteCommentCommand {
    pub id: i64,
}

impl CommentCommandService {
    pub async fn delete_comment(
        &self,
        actor: &Actor,
        command: DeleteCommentCommand,
    ) -> ApplicationResult<bool> {
        let Ok(id) = ArticleCommentId::new(command.id) else {
            return Ok(false);
        };
        let removed = self.comment_repo.delete(id).await?;
        if removed {
            info!(comment_id = command.id, actor = %actor.handle(), "comment deleted");
        }
        Ok(removed)
    }
}
