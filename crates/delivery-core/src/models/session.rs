//! Session domain model.
//!
//! A session pins the acting user's role and its resolved capabilities for
//! its whole lifetime; neither can change once the session exists.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::permission::{CapabilitySet, Permission};
use crate::models::role::Role;
use crate::models::user::User;
use crate::rbac::{self, AccessRequirement, Operation};

#[derive(Debug, Clone, Serialize)]
pub struct Session {
    id: Uuid,
    user: User,
    capabilities: CapabilitySet,
    created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(user: User) -> Self {
        let capabilities = rbac::capabilities_for(&user.role);
        Self {
            id: Uuid::new_v4(),
            user,
            capabilities,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn role(&self) -> &Role {
        &self.user.role
    }

    pub fn capabilities(&self) -> CapabilitySet {
        self.capabilities
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn has_permission(&self, permission: Permission) -> bool {
        rbac::has_permission(&self.capabilities, permission)
    }

    /// Whether a menu entry or page section guarded by `requirement` is shown.
    pub fn can_see(&self, requirement: &AccessRequirement) -> bool {
        requirement.is_satisfied_by(&self.capabilities)
    }

    pub fn can_perform(&self, operation: Operation) -> bool {
        operation.permits(self.role())
    }
}
