// src/application/auditing.rs
use std::sync::Arc;

use crate::application::{dto::Actor, ports::ClockPort};
use crate::domain::audit::AuditStamp;

/// Produces the audit stamp every create/update call hands to its repository.
pub struct AuditingInterceptor {
    clock: Arc<ClockPort>,
}

impl AuditingInterceptor {
    pub fn new(clock: Arc<ClockPort>) -> Self {
        Self { clock }
    }

    pub fn stamp(&self, actor: &Actor) -> AuditStamp {
        AuditStamp::new(actor.handle().clone(), self.clock.now())
    }
}
