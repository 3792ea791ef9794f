//! Dashboard KPI snapshot.
//!
//! A snapshot is always derived from the live collections and is never
//! edited directly.

use serde::{Deserialize, Serialize};

use crate::models::project::{Project, ProjectStatus};
use crate::models::resource::{Resource, ResourceStatus};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct KpiSnapshot {
    pub total_projects: usize,
    pub active_projects: usize,
    pub completed_projects: usize,
    pub total_resources: usize,
    pub billable_resources: usize,
    pub benched_resources: usize,
    /// Billable share of all resources, in percent. 0 with no resources.
    pub resource_utilization: f64,
    /// Mean project progress. 0 with no projects.
    pub average_health_score: f64,
    /// Unspent share of the total budget, in percent. 100 with no budget;
    /// negative when spending overruns the budget.
    pub financial_health: f64,
}

impl KpiSnapshot {
    pub fn compute(projects: &[Project], resources: &[Resource]) -> Self {
        let total_projects = projects.len();
        let active_projects = count_projects(projects, ProjectStatus::InProgress);
        let completed_projects = count_projects(projects, ProjectStatus::Completed);

        let total_resources = resources.len();
        let billable_resources = count_resources(resources, ResourceStatus::Billable);
        let benched_resources = count_resources(resources, ResourceStatus::Benched);

        let resource_utilization = if total_resources > 0 {
            billable_resources as f64 / total_resources as f64 * 100.0
        } else {
            0.0
        };

        let average_health_score = if total_projects > 0 {
            let progress: u64 = projects.iter().map(|p| u64::from(p.progress)).sum();
            progress as f64 / total_projects as f64
        } else {
            0.0
        };

        let total_budget: u128 = projects.iter().map(|p| u128::from(p.budget)).sum();
        let total_spent: u128 = projects.iter().map(|p| u128::from(p.spent)).sum();
        let financial_health = if total_budget > 0 {
            (total_budget as f64 - total_spent as f64) / total_budget as f64 * 100.0
        } else {
            100.0
        };

        Self {
            total_projects,
            active_projects,
            completed_projects,
            total_resources,
            billable_resources,
            benched_resources,
            resource_utilization,
            average_health_score,
            financial_health,
        }
    }
}

fn count_projects(projects: &[Project], status: ProjectStatus) -> usize {
    projects.iter().filter(|p| p.status == status).count()
}

fn count_resources(resources: &[Resource], status: ResourceStatus) -> usize {
    resources.iter().filter(|r| r.status == status).count()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use uuid::Uuid;

    use super::*;
    use crate::models::project::{CreateProject, Priority};
    use crate::models::resource::CreateResource;

    fn project(status: ProjectStatus, progress: u8, budget: u64, spent: u64) -> Project {
        let day = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        CreateProject {
            name: "p".into(),
            client: "c".into(),
            status,
            priority: Priority::Low,
            progress,
            budget,
            spent,
            start_date: day,
            end_date: day,
            description: String::new(),
            project_manager: String::new(),
            team_lead: String::new(),
            technologies: Default::default(),
            resources: vec![],
            milestones: vec![],
            deliverables: vec![],
        }
        .into_project(Uuid::new_v4())
    }

    fn resource(status: ResourceStatus) -> Resource {
        CreateResource {
            name: "r".into(),
            role: "Engineer".into(),
            status,
            allocation: 100,
            skills: Default::default(),
            project_id: None,
        }
        .into_resource(Uuid::new_v4())
    }

    #[test]
    fn empty_collections_use_defined_fallbacks() {
        let kpi = KpiSnapshot::compute(&[], &[]);
        assert_eq!(kpi.total_projects, 0);
        assert_eq!(kpi.total_resources, 0);
        assert_eq!(kpi.resource_utilization, 0.0);
        assert_eq!(kpi.average_health_score, 0.0);
        assert_eq!(kpi.financial_health, 100.0);
    }

    #[test]
    fn zero_budget_projects_count_as_fully_healthy() {
        let kpi = KpiSnapshot::compute(&[project(ProjectStatus::Planning, 0, 0, 0)], &[]);
        assert_eq!(kpi.financial_health, 100.0);
    }

    #[test]
    fn counts_and_ratios() {
        let projects = vec![
            project(ProjectStatus::InProgress, 92, 450_000, 414_000),
            project(ProjectStatus::Completed, 100, 50_000, 36_000),
            project(ProjectStatus::OnHold, 20, 0, 0),
        ];
        let resources = vec![
            resource(ResourceStatus::Billable),
            resource(ResourceStatus::Billable),
            resource(ResourceStatus::Billable),
            resource(ResourceStatus::Benched),
            resource(ResourceStatus::Shadow),
        ];
        let kpi = KpiSnapshot::compute(&projects, &resources);

        assert_eq!(kpi.total_projects, 3);
        assert_eq!(kpi.active_projects, 1);
        assert_eq!(kpi.completed_projects, 1);
        assert_eq!(kpi.total_resources, 5);
        assert_eq!(kpi.billable_resources, 3);
        assert_eq!(kpi.benched_resources, 1);
        assert_eq!(kpi.resource_utilization, 60.0);
        assert!((kpi.average_health_score - 212.0 / 3.0).abs() < 1e-9);
        // budget 500_000, spent 450_000
        assert!((kpi.financial_health - 10.0).abs() < 1e-9);
    }

    #[test]
    fn overrun_goes_negative() {
        let kpi = KpiSnapshot::compute(&[project(ProjectStatus::InProgress, 50, 100, 150)], &[]);
        assert!((kpi.financial_health + 50.0).abs() < 1e-9);
    }
}
