//! Demo dataset loaded into a fresh store.

use chrono::NaiveDate;
use delivery_core::models::project::{
    CreateProject, Deliverable, Milestone, Priority, Project, ProjectStatus, ResourceAllocation,
    WorkItemStatus,
};
use delivery_core::models::resource::{CreateResource, Resource, ResourceStatus};
use uuid::Uuid;

const fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(d) => d,
        None => panic!("invalid seed date"),
    }
}

const ALPHA_START: NaiveDate = date(2024, 1, 15);
const ALPHA_END: NaiveDate = date(2024, 6, 30);
const REQUIREMENTS_DONE: NaiveDate = date(2024, 2, 1);
const PHASE_TWO_DUE: NaiveDate = date(2024, 6, 15);

fn strings(items: &[&str]) -> impl Iterator<Item = String> {
    items.iter().map(|s| (*s).to_owned())
}

/// One in-flight project with two billable resources assigned to it.
pub fn demo_dataset() -> (Vec<Project>, Vec<Resource>) {
    let alpha = CreateProject {
        name: "Project Alpha".into(),
        client: "TechCorp Industries".into(),
        status: ProjectStatus::InProgress,
        priority: Priority::High,
        progress: 92,
        budget: 450_000,
        spent: 414_000,
        start_date: ALPHA_START,
        end_date: ALPHA_END,
        description: "Complete development and deployment of Project Alpha with enhanced \
                      user experience."
            .into(),
        project_manager: "Sarah Johnson".into(),
        team_lead: "Michael Chen".into(),
        technologies: strings(&["React", "Node.js", "MongoDB", "AWS", "TypeScript"]).collect(),
        resources: vec![
            ResourceAllocation {
                name: "Alex Rodriguez".into(),
                role: "Frontend Developer".into(),
                allocation: "100%".into(),
            },
            ResourceAllocation {
                name: "Emily Davis".into(),
                role: "Backend Developer".into(),
                allocation: "80%".into(),
            },
        ],
        milestones: vec![
            Milestone {
                name: "Requirements Analysis".into(),
                date: REQUIREMENTS_DONE,
                status: WorkItemStatus::Completed,
            },
            Milestone {
                name: "Development Phase 2".into(),
                date: PHASE_TWO_DUE,
                status: WorkItemStatus::InProgress,
            },
        ],
        deliverables: vec![
            Deliverable {
                name: "Frontend Application".into(),
                status: WorkItemStatus::InProgress,
                due_date: ALPHA_END,
            },
            Deliverable {
                name: "Backend API".into(),
                status: WorkItemStatus::Completed,
                due_date: PHASE_TWO_DUE,
            },
        ],
    }
    .into_project(Uuid::new_v4());

    let resources = vec![
        CreateResource {
            name: "Alex Rodriguez".into(),
            role: "Frontend Developer".into(),
            status: ResourceStatus::Billable,
            allocation: 100,
            skills: strings(&["React", "TypeScript", "CSS"]).collect(),
            project_id: Some(alpha.id),
        }
        .into_resource(Uuid::new_v4()),
        CreateResource {
            name: "Emily Davis".into(),
            role: "Backend Developer".into(),
            status: ResourceStatus::Billable,
            allocation: 80,
            skills: strings(&["Node.js", "MongoDB", "AWS"]).collect(),
            project_id: Some(alpha.id),
        }
        .into_resource(Uuid::new_v4()),
    ];

    (vec![alpha], resources)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_dataset_is_consistent() {
        let (projects, resources) = demo_dataset();
        assert_eq!(projects.len(), 1);
        assert_eq!(resources.len(), 2);
        for project in &projects {
            project.validate().unwrap();
        }
        for resource in &resources {
            resource.validate().unwrap();
            assert_eq!(resource.project_id, Some(projects[0].id));
        }
    }
}
