// src/domain/user/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult, ensure_text};
use std::fmt;

const HANDLE_MAX_CHARS: usize = 50;
const NICKNAME_MAX_CHARS: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserAccountId(pub i64);

impl UserAccountId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "user account id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<UserAccountId> for i64 {
    fn from(value: UserAccountId) -> Self {
        value.0
    }
}

/// Unique login name of an account, also what audit fields record as the actor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserHandle(String);

impl UserHandle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        ensure_text(&value, "handle", HANDLE_MAX_CHARS)?;
        if value.chars().any(char::is_whitespace) {
            return Err(DomainError::Validation(
                "handle cannot contain whitespace".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for UserHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nickname(String);

impl Nickname {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        ensure_text(&value, "nickname", NICKNAME_MAX_CHARS)?;
        Ok(Self(value))
    }

    /// Blank input means "no nickname".
    pub fn parse_optional(value: Option<String>) -> DomainResult<Option<Self>> {
        value
            .filter(|v| !v.trim().is_empty())
            .map(Self::new)
            .transpose()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_rejects_whitespace_and_blank() {
        assert!(UserHandle::new("uno").is_ok());
        assert!(UserHandle::new("").is_err());
        assert!(UserHandle::new("   ").is_err());
        assert!(UserHandle::new("two words").is_err());
    }

    #[test]
    fn handle_rejects_overlong_values() {
        assert!(UserHandle::new("a".repeat(HANDLE_MAX_CHARS)).is_ok());
        assert!(UserHandle::new("a".repeat(HANDLE_MAX_CHARS + 1)).is_err());
    }

    #[test]
    fn blank_nickname_is_absent() {
        assert_eq!(Nickname::parse_optional(None).unwrap(), None);
        assert_eq!(Nickname::parse_optional(Some("  ".into())).unwrap(), None);
        let nick = Nickname::parse_optional(Some("Uno".into())).unwrap();
        assert_eq!(nick.map(Nickname::into_inner).as_deref(), Some("Uno"));
    }

    #[test]
    fn account_id_must_be_positive() {
        assert!(UserAccountId::new(0).is_err());
        assert_eq!(i64::from(UserAccountId::new(7).unwrap()), 7);
    }
}
