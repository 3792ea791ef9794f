//! Integration tests for change notifications and concurrent access.

use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::NaiveDate;
use delivery_core::models::event::Change;
use delivery_core::models::project::{CreateProject, Priority, ProjectStatus, UpdateProject};
use delivery_core::models::resource::{CreateResource, ResourceStatus};
use delivery_core::models::role::Role;
use delivery_core::repository::{KpiReader, ProjectRepository, ResourceRepository};
use delivery_store::{DataSyncStore, StoreConfig};
use tokio::sync::broadcast::error::TryRecvError;

fn project_input(progress: u8) -> CreateProject {
    let day = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
    CreateProject {
        name: "Events".into(),
        client: "Client".into(),
        status: ProjectStatus::InProgress,
        priority: Priority::Low,
        progress,
        budget: 1_000,
        spent: 500,
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

#[tokio::test]
async fn every_commit_publishes_an_event() {
    let store = DataSyncStore::new(StoreConfig::empty());
    let mut rx = store.subscribe();

    let project = store.add_project(&Role::Hr, project_input(20)).unwrap();
    let added = rx.recv().await.unwrap();
    assert_eq!(added.revision, 1);
    assert_eq!(added.change, Change::ProjectAdded(project.id));
    assert_eq!(added.kpi, store.kpi_snapshot());
    assert_eq!(added.change.title(), "Project Added");

    store
        .update_project(
            &Role::ResourceManager,
            project.id,
            UpdateProject {
                progress: Some(80),
                ..Default::default()
            },
        )
        .unwrap();
    let updated = rx.recv().await.unwrap();
    assert_eq!(updated.revision, 2);
    assert_eq!(updated.change, Change::ProjectUpdated(project.id));
    assert_eq!(updated.kpi.average_health_score, 80.0);
}

#[tokio::test]
async fn project_deletion_event_lists_benched_resources() {
    let store = DataSyncStore::new(StoreConfig::default());
    let project_id = store.list_projects(&Role::Hr)[0].id;
    let mut assigned: Vec<_> = store
        .list_resources(&Role::Hr)
        .into_iter()
        .map(|r| r.id)
        .collect();
    let mut rx = store.subscribe();

    store.delete_project(&Role::Hr, project_id).unwrap();

    let event = rx.recv().await.unwrap();
    assert_eq!(event.kpi.benched_resources, 2);
    assert_eq!(
        event.change.description(),
        "Project and resource allocations have been updated across all views."
    );
    match &event.change {
        Change::ProjectDeleted { id, benched } => {
            assert_eq!(*id, project_id);
            let mut benched = benched.clone();
            benched.sort();
            assigned.sort();
            assert_eq!(benched, assigned);
        }
        other => panic!("unexpected change: {other:?}"),
    }
}

#[tokio::test]
async fn rejected_mutations_publish_nothing() {
    let store = DataSyncStore::new(StoreConfig::default());
    let mut rx = store.subscribe();
    let resource_id = store.list_resources(&Role::Hr)[0].id;

    assert!(store.add_project(&Role::Leadership, project_input(1)).is_err());
    assert!(store.delete_resource(&Role::ResourceManager, resource_id).is_err());
    assert!(store.add_project(&Role::Hr, project_input(200)).is_err());

    assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
}

#[tokio::test]
async fn refresh_recomputes_and_notifies() {
    let store = DataSyncStore::new(StoreConfig::default());
    let mut rx = store.subscribe();

    let kpi = store.refresh();
    assert_eq!(kpi, store.kpi_snapshot());

    let event = rx.recv().await.unwrap();
    assert_eq!(event.change, Change::Refreshed);
    assert_eq!(event.kpi, kpi);
    assert_eq!(store.revision(), 1);
}

#[test]
fn store_works_without_subscribers_or_runtime() {
    let store = DataSyncStore::new(StoreConfig::empty());
    store.add_project(&Role::Hr, project_input(10)).unwrap();
    assert_eq!(store.revision(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_writers_are_serialized() {
    let store = Arc::new(DataSyncStore::new(StoreConfig {
        event_capacity: 128,
        ..StoreConfig::empty()
    }));
    let mut rx = store.subscribe();

    let mut handles = Vec::new();
    for i in 0..8u8 {
        let store = Arc::clone(&store);
        handles.push(tokio::task::spawn_blocking(move || {
            for _ in 0..5 {
                store.add_project(&Role::Hr, project_input(i * 10)).unwrap();
                store
                    .add_resource(
                        &Role::ResourceManager,
                        CreateResource {
                            name: format!("worker-{i}"),
                            role: "Engineer".into(),
                            status: ResourceStatus::Billable,
                            allocation: 100,
                            skills: BTreeSet::new(),
                            project_id: None,
                        },
                    )
                    .unwrap();
            }
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(store.revision(), 80);
    let kpi = store.kpi_snapshot();
    assert_eq!(kpi.total_projects, 40);
    assert_eq!(kpi.total_resources, 40);

    // Events arrive in strict revision order.
    for expected in 1..=80u64 {
        let event = rx.recv().await.unwrap();
        assert_eq!(event.revision, expected);
    }
}
