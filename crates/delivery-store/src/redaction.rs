//! Role-based read filtering.
//!
//! Projects and resources are redacted differently on purpose: financial
//! fields of projects are hidden from roles outside the known three, while
//! resources are returned as-is to every role. [`RedactionPolicy`] is the
//! single place to tighten either rule.

use delivery_core::models::{project::Project, resource::Resource, role::Role};

pub trait RedactionPolicy: Send + Sync {
    fn redact_project(&self, role: &Role, project: &Project) -> Project;
    fn redact_resource(&self, role: &Role, resource: &Resource) -> Resource;
}

/// Zeroes project `budget` and `spent` for unrecognized roles; passes
/// resources through untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct FinancialRedaction;

impl FinancialRedaction {
    pub fn sees_financials(role: &Role) -> bool {
        matches!(role, Role::Leadership | Role::Hr | Role::ResourceManager)
    }
}

impl RedactionPolicy for FinancialRedaction {
    fn redact_project(&self, role: &Role, project: &Project) -> Project {
        if Self::sees_financials(role) {
            project.clone()
        } else {
            project.without_financials()
        }
    }

    fn redact_resource(&self, _role: &Role, resource: &Resource) -> Resource {
        resource.clone()
    }
}
