//! Project domain model.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{DeliveryError, DeliveryResult};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ProjectStatus {
    Planning,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "On Hold")]
    OnHold,
    Completed,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

/// Status shared by milestones and deliverables.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum WorkItemStatus {
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

/// A named person staffed on a project, as listed on the project card.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResourceAllocation {
    pub name: String,
    pub role: String,
    /// Free-form share of the person's time, e.g. `"80%"`.
    pub allocation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Milestone {
    pub name: String,
    pub date: NaiveDate,
    pub status: WorkItemStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deliverable {
    pub name: String,
    pub status: WorkItemStatus,
    pub due_date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub client: String,
    pub status: ProjectStatus,
    pub priority: Priority,
    /// Completion percentage, 0..=100.
    pub progress: u8,
    /// Whole currency units. `spent` may exceed `budget` (an overrun).
    pub budget: u64,
    pub spent: u64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub description: String,
    pub project_manager: String,
    pub team_lead: String,
    pub technologies: BTreeSet<String>,
    pub resources: Vec<ResourceAllocation>,
    pub milestones: Vec<Milestone>,
    pub deliverables: Vec<Deliverable>,
}

impl Project {
    pub fn is_over_budget(&self) -> bool {
        self.spent > self.budget
    }

    /// Copy of this project with its financial fields zeroed.
    pub fn without_financials(&self) -> Self {
        Self {
            budget: 0,
            spent: 0,
            ..self.clone()
        }
    }

    /// Apply a partial update. Fields left as `None` are untouched.
    pub fn apply(&mut self, input: UpdateProject) {
        let UpdateProject {
            name,
            client,
            status,
            priority,
            progress,
            budget,
            spent,
            start_date,
            end_date,
            description,
            project_manager,
            team_lead,
            technologies,
            resources,
            milestones,
            deliverables,
        } = input;

        if let Some(v) = name {
            self.name = v;
        }
        if let Some(v) = client {
            self.client = v;
        }
        if let Some(v) = status {
            self.status = v;
        }
        if let Some(v) = priority {
            self.priority = v;
        }
        if let Some(v) = progress {
            self.progress = v;
        }
        if let Some(v) = budget {
            self.budget = v;
        }
        if let Some(v) = spent {
            self.spent = v;
        }
        if let Some(v) = start_date {
            self.start_date = v;
        }
        if let Some(v) = end_date {
            self.end_date = v;
        }
        if let Some(v) = description {
            self.description = v;
        }
        if let Some(v) = project_manager {
            self.project_manager = v;
        }
        if let Some(v) = team_lead {
            self.team_lead = v;
        }
        if let Some(v) = technologies {
            self.technologies = v;
        }
        if let Some(v) = resources {
            self.resources = v;
        }
        if let Some(v) = milestones {
            self.milestones = v;
        }
        if let Some(v) = deliverables {
            self.deliverables = v;
        }
    }

    /// Check the field-level invariants of a stored project.
    pub fn validate(&self) -> DeliveryResult<()> {
        if self.name.trim().is_empty() {
            return Err(DeliveryError::validation("project name must not be empty"));
        }
        if self.progress > 100 {
            return Err(DeliveryError::validation(format!(
                "project progress {} is above 100",
                self.progress
            )));
        }
        if self.end_date < self.start_date {
            return Err(DeliveryError::validation(format!(
                "project ends ({}) before it starts ({})",
                self.end_date, self.start_date
            )));
        }
        Ok(())
    }
}

/// Fields required to create a new project. The id is assigned by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProject {
    pub name: String,
    pub client: String,
    pub status: ProjectStatus,
    pub priority: Priority,
    pub progress: u8,
    pub budget: u64,
    pub spent: u64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub description: String,
    pub project_manager: String,
    pub team_lead: String,
    pub technologies: BTreeSet<String>,
    pub resources: Vec<ResourceAllocation>,
    pub milestones: Vec<Milestone>,
    pub deliverables: Vec<Deliverable>,
}

impl CreateProject {
    pub fn into_project(self, id: Uuid) -> Project {
        Project {
            id,
            name: self.name,
            client: self.client,
            status: self.status,
            priority: self.priority,
            progress: self.progress,
            budget: self.budget,
            spent: self.spent,
            start_date: self.start_date,
            end_date: self.end_date,
            description: self.description,
            project_manager: self.project_manager,
            team_lead: self.team_lead,
            technologies: self.technologies,
            resources: self.resources,
            milestones: self.milestones,
            deliverables: self.deliverables,
        }
    }
}

/// Fields that can be updated on an existing project.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateProject {
    pub name: Option<String>,
    pub client: Option<String>,
    pub status: Option<ProjectStatus>,
    pub priority: Option<Priority>,
    pub progress: Option<u8>,
    pub budget: Option<u64>,
    pub spent: Option<u64>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub project_manager: Option<String>,
    pub team_lead: Option<String>,
    pub technologies: Option<BTreeSet<String>>,
    pub resources: Option<Vec<ResourceAllocation>>,
    pub milestones: Option<Vec<Milestone>>,
    pub deliverables: Option<Vec<Deliverable>>,
}
