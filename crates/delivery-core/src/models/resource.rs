//! Resource domain model.
//!
//! A resource is a person on the delivery roster. Its `project_id` is a
//! lookup key into the project collection, not an owning pointer.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{DeliveryError, DeliveryResult};

/// Mutually exclusive staffing states.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ResourceStatus {
    Billable,
    /// Not currently assigned to any billable project.
    Benched,
    Shadow,
    Associate,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Resource {
    pub id: Uuid,
    pub name: String,
    /// Job title, e.g. "Backend Developer".
    pub role: String,
    pub status: ResourceStatus,
    /// Allocation percentage, 0..=100.
    pub allocation: u8,
    pub skills: BTreeSet<String>,
    pub project_id: Option<Uuid>,
}

impl Resource {
    pub fn apply(&mut self, input: UpdateResource) {
        if let Some(name) = input.name {
            self.name = name;
        }
        if let Some(role) = input.role {
            self.role = role;
        }
        if let Some(status) = input.status {
            self.status = status;
        }
        if let Some(allocation) = input.allocation {
            self.allocation = allocation;
        }
        if let Some(skills) = input.skills {
            self.skills = skills;
        }
        if let Some(project_id) = input.project_id {
            self.project_id = project_id;
        }
    }

    /// Drop the project assignment and move to the bench.
    pub fn unassign(&mut self) {
        self.project_id = None;
        self.status = ResourceStatus::Benched;
    }

    pub fn validate(&self) -> DeliveryResult<()> {
        if self.name.trim().is_empty() {
            return Err(DeliveryError::validation("resource name must not be empty"));
        }
        if self.allocation > 100 {
            return Err(DeliveryError::validation(format!(
                "resource allocation {} is above 100",
                self.allocation
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateResource {
    pub name: String,
    pub role: String,
    pub status: ResourceStatus,
    pub allocation: u8,
    pub skills: BTreeSet<String>,
    pub project_id: Option<Uuid>,
}

impl CreateResource {
    pub fn into_resource(self, id: Uuid) -> Resource {
        Resource {
            id,
            name: self.name,
            role: self.role,
            status: self.status,
            allocation: self.allocation,
            skills: self.skills,
            project_id: self.project_id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateResource {
    pub name: Option<String>,
    pub role: Option<String>,
    pub status: Option<ResourceStatus>,
    pub allocation: Option<u8>,
    pub skills: Option<BTreeSet<String>>,
    /// `Some(Some(id))` = assign, `Some(None)` = clear, `None` = no change.
    pub project_id: Option<Option<Uuid>>,
}
