// src/domain/audit.rs
use crate::domain::user::UserHandle;
use chrono::{DateTime, Utc};

/// Who performed a write and when. Repositories copy it into [`AuditFields`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditStamp {
    pub actor: UserHandle,
    pub at: DateTime<Utc>,
}

impl AuditStamp {
    pub fn new(actor: UserHandle, at: DateTime<Utc>) -> Self {
        Self { actor, at }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditFields {
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub modified_at: DateTime<Utc>,
    pub modified_by: String,
}

impl AuditFields {
    /// Audit fields of a freshly inserted row: both pairs come from the same stamp.
    pub fn created(stamp: &AuditStamp) -> Self {
        Self {
            created_at: stamp.at,
            created_by: stamp.actor.as_str().to_owned(),
            modified_at: stamp.at,
            modified_by: stamp.actor.as_str().to_owned(),
        }
    }

    pub fn touch(&mut self, stamp: &AuditStamp) {
        self.modified_at = stamp.at;
        self.modified_by = stamp.actor.as_str().to_owned();
    }
}
