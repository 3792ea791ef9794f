//! Permission domain model.
//!
//! Permissions form a closed set: naming a permission that does not exist
//! is a compile error, not a silent `false`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DeliveryError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Permission {
    // Resource management
    CanViewResources,
    CanEditResources,
    CanAddResources,
    CanViewSalaryDetails,
    CanEditSalaryDetails,
    CanViewPersonalInfo,
    CanEditPersonalInfo,

    // Project management
    CanViewProjects,
    CanEditProjects,
    CanAddProjects,
    CanAllocateResources,
    CanViewProjectMilestones,
    CanEditProjectMilestones,

    // Dashboard
    CanViewDashboard,
    CanViewFinancialData,
    CanViewAnalytics,
    CanViewReports,

    // Administrative
    #[serde(rename = "canAccessHRModule")]
    CanAccessHrModule,
    CanAccessSettings,
}

impl Permission {
    pub const ALL: [Permission; 19] = [
        Permission::CanViewResources,
        Permission::CanEditResources,
        Permission::CanAddResources,
        Permission::CanViewSalaryDetails,
        Permission::CanEditSalaryDetails,
        Permission::CanViewPersonalInfo,
        Permission::CanEditPersonalInfo,
        Permission::CanViewProjects,
        Permission::CanEditProjects,
        Permission::CanAddProjects,
        Permission::CanAllocateResources,
        Permission::CanViewProjectMilestones,
        Permission::CanEditProjectMilestones,
        Permission::CanViewDashboard,
        Permission::CanViewFinancialData,
        Permission::CanViewAnalytics,
        Permission::CanViewReports,
        Permission::CanAccessHrModule,
        Permission::CanAccessSettings,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Permission::CanViewResources => "canViewResources",
            Permission::CanEditResources => "canEditResources",
            Permission::CanAddResources => "canAddResources",
            Permission::CanViewSalaryDetails => "canViewSalaryDetails",
            Permission::CanEditSalaryDetails => "canEditSalaryDetails",
            Permission::CanViewPersonalInfo => "canViewPersonalInfo",
            Permission::CanEditPersonalInfo => "canEditPersonalInfo",
            Permission::CanViewProjects => "canViewProjects",
            Permission::CanEditProjects => "canEditProjects",
            Permission::CanAddProjects => "canAddProjects",
            Permission::CanAllocateResources => "canAllocateResources",
            Permission::CanViewProjectMilestones => "canViewProjectMilestones",
            Permission::CanEditProjectMilestones => "canEditProjectMilestones",
            Permission::CanViewDashboard => "canViewDashboard",
            Permission::CanViewFinancialData => "canViewFinancialData",
            Permission::CanViewAnalytics => "canViewAnalytics",
            Permission::CanViewReports => "canViewReports",
            Permission::CanAccessHrModule => "canAccessHRModule",
            Permission::CanAccessSettings => "canAccessSettings",
        }
    }

    fn bit(self) -> u32 {
        1 << (self as u32)
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Permission {
    type Err = DeliveryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Permission::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| DeliveryError::validation(format!("unknown permission: {s}")))
    }
}

/// The set of permissions granted to a role.
///
/// Stored as a bitset over [`Permission`]; copying is free.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CapabilitySet(u32);

impl CapabilitySet {
    /// The "no access" set.
    pub const fn empty() -> Self {
        Self(0)
    }

    pub fn contains(&self, permission: Permission) -> bool {
        self.0 & permission.bit() != 0
    }

    pub fn insert(&mut self, permission: Permission) {
        self.0 |= permission.bit();
    }

    pub fn with(mut self, permission: Permission) -> Self {
        self.insert(permission);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Granted permissions in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = Permission> + '_ {
        Permission::ALL.into_iter().filter(|p| self.contains(*p))
    }
}

impl FromIterator<Permission> for CapabilitySet {
    fn from_iter<I: IntoIterator<Item = Permission>>(iter: I) -> Self {
        let mut set = CapabilitySet::empty();
        for permission in iter {
            set.insert(permission);
        }
        set
    }
}

impl fmt::Debug for CapabilitySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl Serialize for CapabilitySet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for CapabilitySet {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let permissions = Vec::<Permission>::deserialize(deserializer)?;
        Ok(permissions.into_iter().collect())
    }
}
