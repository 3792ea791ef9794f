//! Change notifications published by the data store after each commit.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::kpi::KpiSnapshot;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Change {
    ProjectAdded(Uuid),
    ProjectUpdated(Uuid),
    /// A project was removed; `benched` lists the resources the cascade
    /// unassigned.
    ProjectDeleted { id: Uuid, benched: Vec<Uuid> },
    ResourceAdded(Uuid),
    ResourceUpdated(Uuid),
    ResourceDeleted(Uuid),
    Refreshed,
}

impl Change {
    /// Short headline for a user-facing notice.
    pub fn title(&self) -> &'static str {
        match self {
            Change::ProjectAdded(_) => "Project Added",
            Change::ProjectUpdated(_) => "Project Updated",
            Change::ProjectDeleted { .. } => "Project Deleted",
            Change::ResourceAdded(_) => "Resource Added",
            Change::ResourceUpdated(_) => "Resource Updated",
            Change::ResourceDeleted(_) => "Resource Deleted",
            Change::Refreshed => "Data Refreshed",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Change::ProjectAdded(_) => {
                "New project has been synchronized across all dashboard views."
            }
            Change::ResourceAdded(_) => {
                "New resource has been synchronized across all dashboard views."
            }
            Change::ProjectUpdated(_) | Change::ResourceUpdated(_) => {
                "Changes have been synchronized across all dashboard views."
            }
            Change::ProjectDeleted { .. } => {
                "Project and resource allocations have been updated across all views."
            }
            Change::ResourceDeleted(_) => "Resource has been removed from all dashboard views.",
            Change::Refreshed => "All dashboard data has been synchronized.",
        }
    }
}

/// One committed change, with the KPI snapshot as of that commit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChangeEvent {
    /// Monotonic commit counter of the store that published the event.
    pub revision: u64,
    pub change: Change,
    pub kpi: KpiSnapshot,
}
