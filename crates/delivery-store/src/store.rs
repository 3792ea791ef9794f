//! In-memory implementation of the project and resource repositories.

use delivery_core::error::{DeliveryError, DeliveryResult};
use delivery_core::models::event::{Change, ChangeEvent};
use delivery_core::models::kpi::KpiSnapshot;
use delivery_core::models::project::{CreateProject, Project, UpdateProject};
use delivery_core::models::resource::{CreateResource, Resource, UpdateResource};
use delivery_core::models::role::Role;
use delivery_core::rbac::Operation;
use delivery_core::repository::{KpiReader, ProjectRepository, ResourceRepository};
use parking_lot::RwLock;
use tokio::sync::broadcast;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::StoreConfig;
use crate::redaction::{FinancialRedaction, RedactionPolicy};
use crate::seed;

#[derive(Debug, Default)]
struct State {
    projects: Vec<Project>,
    resources: Vec<Resource>,
    kpi: KpiSnapshot,
    revision: u64,
}

impl State {
    fn project_index(&self, id: Uuid) -> DeliveryResult<usize> {
        self.projects
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| DeliveryError::not_found("project", id))
    }

    fn resource_index(&self, id: Uuid) -> DeliveryResult<usize> {
        self.resources
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| DeliveryError::not_found("resource", id))
    }

    /// A resource may only point at a project that exists.
    fn check_assignment(&self, resource: &Resource) -> DeliveryResult<()> {
        match resource.project_id {
            Some(project_id) if !self.projects.iter().any(|p| p.id == project_id) => {
                Err(DeliveryError::validation(format!(
                    "resource {} references unknown project {project_id}",
                    resource.name
                )))
            }
            _ => Ok(()),
        }
    }
}

/// Single source of truth for projects and resources.
///
/// All collections sit behind one lock. A mutation holds the write lock
/// across validation, cascade and KPI recompute, so a reader sees either
/// the state before the commit or after it. Change events are published
/// before the lock is released and therefore arrive in revision order.
pub struct DataSyncStore<P: RedactionPolicy = FinancialRedaction> {
    state: RwLock<State>,
    events: broadcast::Sender<ChangeEvent>,
    redaction: P,
}

impl DataSyncStore {
    pub fn new(config: StoreConfig) -> Self {
        Self::with_redaction(config, FinancialRedaction)
    }
}

impl<P: RedactionPolicy> DataSyncStore<P> {
    /// Build a store that filters reads through `redaction`.
    pub fn with_redaction(config: StoreConfig, redaction: P) -> Self {
        let (events, _) = broadcast::channel(config.event_capacity.max(1));

        let mut state = State::default();
        if config.seed_demo_data {
            let (projects, resources) = seed::demo_dataset();
            state.projects = projects;
            state.resources = resources;
        }
        state.kpi = KpiSnapshot::compute(&state.projects, &state.resources);

        info!(
            projects = state.projects.len(),
            resources = state.resources.len(),
            "Data store initialized"
        );

        Self {
            state: RwLock::new(state),
            events,
            redaction,
        }
    }

    /// Receive a [`ChangeEvent`] for every commit made after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<ChangeEvent> {
        self.events.subscribe()
    }

    /// Number of commits since construction.
    pub fn revision(&self) -> u64 {
        self.state.read().revision
    }

    /// Recompute the KPI snapshot and notify subscribers without changing
    /// any data.
    pub fn refresh(&self) -> KpiSnapshot {
        let mut state = self.state.write();
        self.commit(&mut state, Change::Refreshed);
        state.kpi
    }

    fn authorize(&self, operation: Operation, role: &Role) -> DeliveryResult<()> {
        operation.authorize(role).inspect_err(|_| {
            warn!(role = %role, operation = %operation, "Mutation denied");
        })
    }

    fn commit(&self, state: &mut State, change: Change) {
        state.revision += 1;
        state.kpi = KpiSnapshot::compute(&state.projects, &state.resources);

        info!(revision = state.revision, change = ?change, "{}", change.title());

        // No subscribers is not an error.
        let _ = self.events.send(ChangeEvent {
            revision: state.revision,
            change,
            kpi: state.kpi,
        });
    }
}

fn rejected(err: DeliveryError) -> DeliveryError {
    debug!(error = %err, "Mutation rejected");
    err
}

impl<P: RedactionPolicy> ProjectRepository for DataSyncStore<P> {
    fn list_projects(&self, role: &Role) -> Vec<Project> {
        let state = self.state.read();
        state
            .projects
            .iter()
            .map(|p| self.redaction.redact_project(role, p))
            .collect()
    }

    fn get_project_by_id(&self, id: Uuid) -> DeliveryResult<Project> {
        let state = self.state.read();
        let idx = state.project_index(id)?;
        Ok(state.projects[idx].clone())
    }

    fn get_project_for(&self, role: &Role, id: Uuid) -> DeliveryResult<Project> {
        let state = self.state.read();
        let idx = state.project_index(id)?;
        Ok(self.redaction.redact_project(role, &state.projects[idx]))
    }

    fn add_project(&self, role: &Role, input: CreateProject) -> DeliveryResult<Project> {
        self.authorize(Operation::AddProject, role)?;

        let project = input.into_project(Uuid::new_v4());
        project.validate().map_err(rejected)?;

        let mut state = self.state.write();
        state.projects.push(project.clone());
        self.commit(&mut state, Change::ProjectAdded(project.id));

        Ok(project)
    }

    fn update_project(
        &self,
        role: &Role,
        id: Uuid,
        input: UpdateProject,
    ) -> DeliveryResult<Project> {
        self.authorize(Operation::UpdateProject, role)?;

        let mut state = self.state.write();
        let idx = state.project_index(id).map_err(rejected)?;

        let mut updated = state.projects[idx].clone();
        updated.apply(input);
        updated.validate().map_err(rejected)?;

        state.projects[idx] = updated.clone();
        self.commit(&mut state, Change::ProjectUpdated(id));

        Ok(updated)
    }

    fn delete_project(&self, role: &Role, id: Uuid) -> DeliveryResult<()> {
        self.authorize(Operation::DeleteProject, role)?;

        let mut state = self.state.write();
        let idx = state.project_index(id).map_err(rejected)?;
        state.projects.remove(idx);

        let mut benched = Vec::new();
        for resource in state
            .resources
            .iter_mut()
            .filter(|r| r.project_id == Some(id))
        {
            resource.unassign();
            benched.push(resource.id);
        }

        self.commit(&mut state, Change::ProjectDeleted { id, benched });
        Ok(())
    }
}

impl<P: RedactionPolicy> ResourceRepository for DataSyncStore<P> {
    fn list_resources(&self, role: &Role) -> Vec<Resource> {
        let state = self.state.read();
        state
            .resources
            .iter()
            .map(|r| self.redaction.redact_resource(role, r))
            .collect()
    }

    fn get_resource_by_id(&self, id: Uuid) -> DeliveryResult<Resource> {
        let state = self.state.read();
        let idx = state.resource_index(id)?;
        Ok(state.resources[idx].clone())
    }

    fn get_resource_for(&self, role: &Role, id: Uuid) -> DeliveryResult<Resource> {
        let state = self.state.read();
        let idx = state.resource_index(id)?;
        Ok(self.redaction.redact_resource(role, &state.resources[idx]))
    }

    fn add_resource(&self, role: &Role, input: CreateResource) -> DeliveryResult<Resource> {
        self.authorize(Operation::AddResource, role)?;

        let resource = input.into_resource(Uuid::new_v4());
        resource.validate().map_err(rejected)?;

        let mut state = self.state.write();
        state.check_assignment(&resource).map_err(rejected)?;
        state.resources.push(resource.clone());
        self.commit(&mut state, Change::ResourceAdded(resource.id));

        Ok(resource)
    }

    fn update_resource(
        &self,
        role: &Role,
        id: Uuid,
        input: UpdateResource,
    ) -> DeliveryResult<Resource> {
        self.authorize(Operation::UpdateResource, role)?;

        let mut state = self.state.write();
        let idx = state.resource_index(id).map_err(rejected)?;

        let mut updated = state.resources[idx].clone();
        updated.apply(input);
        updated.validate().map_err(rejected)?;
        state.check_assignment(&updated).map_err(rejected)?;

        state.resources[idx] = updated.clone();
        self.commit(&mut state, Change::ResourceUpdated(id));

        Ok(updated)
    }

    fn delete_resource(&self, role: &Role, id: Uuid) -> DeliveryResult<()> {
        self.authorize(Operation::DeleteResource, role)?;

        let mut state = self.state.write();
        let idx = state.resource_index(id).map_err(rejected)?;
        state.resources.remove(idx);
        self.commit(&mut state, Change::ResourceDeleted(id));

        Ok(())
    }
}

impl<P: RedactionPolicy> KpiReader for DataSyncStore<P> {
    fn kpi_snapshot(&self) -> KpiSnapshot {
        self.state.read().kpi
    }
}
