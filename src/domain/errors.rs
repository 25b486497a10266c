// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}

/// Reject blank input and input longer than `max_chars` characters.
pub(crate) fn ensure_text(value: &str, field: &str, max_chars: usize) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::Validation(format!("{field} cannot be empty")));
    }
    if value.chars().count() > max_chars {
        return Err(DomainError::Validation(format!(
            "{field} must be at most {max_chars} characters"
        )));
    }
    Ok(())
}
