//! Table-driven checks of the store's write gates.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use delivery_core::models::project::{CreateProject, Priority, ProjectStatus, UpdateProject};
use delivery_core::models::resource::{CreateResource, ResourceStatus, UpdateResource};
use delivery_core::models::role::Role;
use delivery_core::rbac::Operation;
use delivery_core::repository::{KpiReader, ProjectRepository, ResourceRepository};
use delivery_core::DeliveryResult;
use delivery_store::{DataSyncStore, StoreConfig};

fn project_input() -> CreateProject {
    let day = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
    CreateProject {
        name: "Gate".into(),
        client: "Client".into(),
        status: ProjectStatus::InProgress,
        priority: Priority::Critical,
        progress: 40,
        budget: 10_000,
        spent: 2_500,
        start_date: day,
        end_date: day,
        description: String::new(),
        project_manager: String::new(),
        team_lead: String::new(),
        technologies: BTreeSet::new(),
        resources: vec![],
        milestones: vec![],
        deliverables: vec![],
    }
}

fn resource_input() -> CreateResource {
    CreateResource {
        name: "Gate Keeper".into(),
        role: "QA Engineer".into(),
        status: ResourceStatus::Associate,
        allocation: 50,
        skills: BTreeSet::new(),
        project_id: None,
    }
}

fn roles() -> [Role; 4] {
    [
        Role::Hr,
        Role::ResourceManager,
        Role::Leadership,
        Role::from("delivery_owner"),
    ]
}

/// Run `op` as `role` against a fresh seeded store.
fn attempt(op: Operation, role: &Role) -> DeliveryResult<()> {
    let store = DataSyncStore::new(StoreConfig::default());
    let project_id = store.list_projects(&Role::Hr)[0].id;
    let resource_id = store.list_resources(&Role::Hr)[0].id;

    match op {
        Operation::AddProject => store.add_project(role, project_input()).map(drop),
        Operation::UpdateProject => store
            .update_project(
                role,
                project_id,
                UpdateProject {
                    progress: Some(99),
                    ..Default::default()
                },
            )
            .map(drop),
        Operation::DeleteProject => store.delete_project(role, project_id),
        Operation::AddResource => store.add_resource(role, resource_input()).map(drop),
        Operation::UpdateResource => store
            .update_resource(
                role,
                resource_id,
                UpdateResource {
                    allocation: Some(10),
                    ..Default::default()
                },
            )
            .map(drop),
        Operation::DeleteResource => store.delete_resource(role, resource_id),
    }
}

#[test]
fn store_outcomes_match_the_gate_table() {
    let expected = [
        (Operation::AddProject, [true, true, false, false]),
        (Operation::UpdateProject, [true, true, false, false]),
        (Operation::DeleteProject, [true, true, false, false]),
        (Operation::AddResource, [true, true, false, false]),
        (Operation::UpdateResource, [true, true, false, false]),
        (Operation::DeleteResource, [true, false, false, false]),
    ];

    for (op, allowed) in expected {
        for (role, allowed) in roles().iter().zip(allowed) {
            let outcome = attempt(op, role);
            if allowed {
                assert!(outcome.is_ok(), "{op} as {role}: {outcome:?}");
            } else {
                let err = outcome.unwrap_err();
                assert!(err.is_denied(), "{op} as {role}: {err}");
            }
        }
    }
}

#[test]
fn repeated_denials_never_change_state() {
    let store = DataSyncStore::new(StoreConfig::default());
    let project_id = store.list_projects(&Role::Hr)[0].id;
    let resource_id = store.list_resources(&Role::Hr)[0].id;

    let projects_before = serde_json::to_string(&store.list_projects(&Role::Hr)).unwrap();
    let resources_before = serde_json::to_string(&store.list_resources(&Role::Hr)).unwrap();
    let kpi_before = store.kpi_snapshot();

    for _ in 0..10 {
        for role in [Role::Leadership, Role::from("delivery_owner")] {
            assert!(store.add_project(&role, project_input()).is_err());
            assert!(
                store
                    .update_project(&role, project_id, UpdateProject::default())
                    .is_err()
            );
            assert!(store.delete_project(&role, project_id).is_err());
            assert!(store.add_resource(&role, resource_input()).is_err());
            assert!(
                store
                    .update_resource(&role, resource_id, UpdateResource::default())
                    .is_err()
            );
            assert!(store.delete_resource(&role, resource_id).is_err());
        }
        assert!(store.delete_resource(&Role::ResourceManager, resource_id).is_err());
    }

    let projects_after = serde_json::to_string(&store.list_projects(&Role::Hr)).unwrap();
    let resources_after = serde_json::to_string(&store.list_resources(&Role::Hr)).unwrap();
    assert_eq!(projects_before, projects_after);
    assert_eq!(resources_before, resources_after);
    assert_eq!(store.kpi_snapshot(), kpi_before);
    assert_eq!(store.revision(), 0);
}
