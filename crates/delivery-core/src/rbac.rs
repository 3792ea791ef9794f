//! Role-based capability resolution.
//!
//! Two independent tables live here:
//!
//! - the *capability* table ([`capabilities_for`]), which drives navigation
//!   and section visibility;
//! - the *write gate* table ([`Operation::permits`]), which decides who may
//!   mutate the data store.
//!
//! The tables are not derived from each other. HR, for instance, lacks
//! `canEditProjects` in the capability table but may still edit projects
//! through the store.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DeliveryError, DeliveryResult};
use crate::models::permission::{CapabilitySet, Permission};
use crate::models::role::Role;

/// Resolve the capability set of a role.
///
/// Total and deterministic. An unrecognized role gets the empty set.
pub fn capabilities_for(role: &Role) -> CapabilitySet {
    use Permission::*;

    let granted: &[Permission] = match role {
        // Full access to personal and salary data, read-only projects.
        Role::Hr => &[
            CanViewResources,
            CanEditResources,
            CanAddResources,
            CanViewSalaryDetails,
            CanEditSalaryDetails,
            CanViewPersonalInfo,
            CanEditPersonalInfo,
            CanViewProjects,
            CanViewProjectMilestones,
            CanViewDashboard,
            CanViewFinancialData,
            CanViewAnalytics,
            CanViewReports,
            CanAccessHrModule,
            CanAccessSettings,
        ],
        // Manages resources and projects, no salary or financial data.
        Role::ResourceManager => &[
            CanViewResources,
            CanEditResources,
            CanAddResources,
            CanViewPersonalInfo,
            CanViewProjects,
            CanEditProjects,
            CanAddProjects,
            CanAllocateResources,
            CanViewProjectMilestones,
            CanEditProjectMilestones,
            CanViewDashboard,
            CanViewAnalytics,
            CanViewReports,
        ],
        // View-only access to everything except the HR module and settings.
        Role::Leadership => &[
            CanViewResources,
            CanViewSalaryDetails,
            CanViewPersonalInfo,
            CanViewProjects,
            CanViewProjectMilestones,
            CanViewDashboard,
            CanViewFinancialData,
            CanViewAnalytics,
            CanViewReports,
        ],
        Role::Unrecognized(_) => &[],
    };

    granted.iter().copied().collect()
}

pub fn has_permission(set: &CapabilitySet, permission: Permission) -> bool {
    set.contains(permission)
}

/// True if any of `required` is granted. An empty list means no
/// restriction and grants access.
pub fn has_any_permission(set: &CapabilitySet, required: &[Permission]) -> bool {
    required.is_empty() || required.iter().any(|p| set.contains(*p))
}

/// True if every one of `required` is granted. Vacuously true when empty.
pub fn has_all_permissions(set: &CapabilitySet, required: &[Permission]) -> bool {
    required.iter().all(|p| set.contains(*p))
}

/// A visibility rule for a menu entry or page section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AccessRequirement {
    #[default]
    Public,
    Permission(Permission),
    Any(Vec<Permission>),
    All(Vec<Permission>),
}

impl AccessRequirement {
    pub fn is_satisfied_by(&self, set: &CapabilitySet) -> bool {
        match self {
            AccessRequirement::Public => true,
            AccessRequirement::Permission(p) => has_permission(set, *p),
            AccessRequirement::Any(list) => has_any_permission(set, list),
            AccessRequirement::All(list) => has_all_permissions(set, list),
        }
    }
}

/// A mutation on the data store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    AddProject,
    UpdateProject,
    DeleteProject,
    AddResource,
    UpdateResource,
    DeleteResource,
}

impl Operation {
    pub const ALL: [Operation; 6] = [
        Operation::AddProject,
        Operation::UpdateProject,
        Operation::DeleteProject,
        Operation::AddResource,
        Operation::UpdateResource,
        Operation::DeleteResource,
    ];

    /// Whether `role` may perform this operation.
    ///
    /// Deleting a resource is HR-only, even though resource managers may
    /// delete whole projects.
    pub fn permits(self, role: &Role) -> bool {
        match self {
            Operation::AddProject
            | Operation::UpdateProject
            | Operation::DeleteProject
            | Operation::AddResource
            | Operation::UpdateResource => matches!(role, Role::Hr | Role::ResourceManager),
            Operation::DeleteResource => matches!(role, Role::Hr),
        }
    }

    /// [`Operation::permits`] as a result carrying the denial.
    pub fn authorize(self, role: &Role) -> DeliveryResult<()> {
        if self.permits(role) {
            Ok(())
        } else {
            Err(DeliveryError::Denied {
                role: role.clone(),
                operation: self,
            })
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Operation::AddProject => "add project",
            Operation::UpdateProject => "update project",
            Operation::DeleteProject => "delete project",
            Operation::AddResource => "add resource",
            Operation::UpdateResource => "update resource",
            Operation::DeleteResource => "delete resource",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
