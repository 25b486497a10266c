use crate::domain::errors::DomainError;

const CNT_USER_HANDLE: &str = "user_accounts_handle_key";
const CNT_ARTICLE_OWNER: &str = "articles_user_account_id_fkey";
const CNT_COMMENT_ARTICLE: &str = "article_comments_article_id_fkey";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_USER_HANDLE => DomainError::Conflict("handle already exists".into()),
                    CNT_ARTICLE_OWNER => DomainError::NotFound("user account not found".into()),
                    CNT_COMMENT_ARTICLE => comment_article_violation(db_err.message()),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

/// The comment FK fails on either side: a comment pointing at a missing article,
/// or an article delete that still has comments. Only the former means "not found".
fn comment_article_violation(message: &str) -> DomainError {
    if message.starts_with("insert or update on table \"article_comments\"") {
        DomainError::NotFound("article not found".into())
    } else {
        DomainError::Persistence(format!("article still referenced by comments: {message}"))
    }
}
