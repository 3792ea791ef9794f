//! Repository trait definitions for data access abstraction.
//!
//! Role-taking reads return owned copies already filtered for that role.
//! The `*_by_id` lookups are unfiltered and meant for internal callers.
//! Writes are permission-checked and either fully apply or leave the data
//! untouched.

use uuid::Uuid;

use crate::error::DeliveryResult;
use crate::models::{
    kpi::KpiSnapshot,
    project::{CreateProject, Project, UpdateProject},
    resource::{CreateResource, Resource, UpdateResource},
    role::Role,
};

pub trait ProjectRepository: Send + Sync {
    /// All projects, with financial fields redacted for roles that may not
    /// see them.
    fn list_projects(&self, role: &Role) -> Vec<Project>;
    /// The stored project, unfiltered. Callers acting for a user should use
    /// [`ProjectRepository::get_project_for`].
    fn get_project_by_id(&self, id: Uuid) -> DeliveryResult<Project>;
    /// A single project, redacted for `role` exactly like `list_projects`.
    fn get_project_for(&self, role: &Role, id: Uuid) -> DeliveryResult<Project>;
    fn add_project(&self, role: &Role, input: CreateProject) -> DeliveryResult<Project>;
    fn update_project(
        &self,
        role: &Role,
        id: Uuid,
        input: UpdateProject,
    ) -> DeliveryResult<Project>;
    /// Remove a project and bench every resource assigned to it.
    fn delete_project(&self, role: &Role, id: Uuid) -> DeliveryResult<()>;
}

pub trait ResourceRepository: Send + Sync {
    fn list_resources(&self, role: &Role) -> Vec<Resource>;
    /// The stored resource, unfiltered.
    fn get_resource_by_id(&self, id: Uuid) -> DeliveryResult<Resource>;
    fn get_resource_for(&self, role: &Role, id: Uuid) -> DeliveryResult<Resource>;
    fn add_resource(&self, role: &Role, input: CreateResource) -> DeliveryResult<Resource>;
    fn update_resource(
        &self,
        role: &Role,
        id: Uuid,
        input: UpdateResource,
    ) -> DeliveryResult<Resource>;
    fn delete_resource(&self, role: &Role, id: Uuid) -> DeliveryResult<()>;
}

/// Read access to the derived dashboard metrics.
pub trait KpiReader: Send + Sync {
    /// The snapshot as of the last committed mutation.
    fn kpi_snapshot(&self) -> KpiSnapshot;
}
