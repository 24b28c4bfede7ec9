//! Planning snapshot.
//!
//! An immutable, already team-scoped view of developers, projects and
//! allocations. Allocations that reference a developer or project missing
//! from the snapshot are dropped at construction so that partial or stale
//! data never reaches the computations.

use std::collections::HashSet;

use serde::Serialize;
use tracing::warn;

use super::{Allocation, Developer, Project};

/// A consistent set of planning records.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PlanningSnapshot {
    developers: Vec<Developer>,
    projects: Vec<Project>,
    allocations: Vec<Allocation>,
    dropped_allocations: usize,
}

impl PlanningSnapshot {
    /// Builds a snapshot, discarding allocations with unresolved references.
    pub fn new(
        developers: Vec<Developer>,
        projects: Vec<Project>,
        allocations: Vec<Allocation>,
    ) -> Self {
        let developer_ids: HashSet<&str> = developers.iter().map(|d| d.id.as_str()).collect();
        let project_ids: HashSet<&str> = projects.iter().map(|p| p.id.as_str()).collect();

        let total = allocations.len();
        let allocations: Vec<Allocation> = allocations
            .into_iter()
            .filter(|a| {
                developer_ids.contains(a.developer_id.as_str())
                    && project_ids.contains(a.project_id.as_str())
            })
            .collect();
        let dropped_allocations = total - allocations.len();

        if dropped_allocations > 0 {
            warn!(
                dropped = dropped_allocations,
                total, "snapshot dropped allocations with unresolved developer or project"
            );
        }

        Self {
            developers,
            projects,
            allocations,
            dropped_allocations,
        }
    }

    /// All developers, in input order.
    pub fn developers(&self) -> &[Developer] {
        &self.developers
    }

    /// All projects, in input order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Allocations whose developer and project both resolve.
    pub fn allocations(&self) -> &[Allocation] {
        &self.allocations
    }

    /// Number of allocations discarded at construction.
    pub fn dropped_allocations(&self) -> usize {
        self.dropped_allocations
    }

    /// Looks up a developer by ID.
    pub fn developer(&self, id: &str) -> Option<&Developer> {
        self.developers.iter().find(|d| d.id == id)
    }

    /// Looks up a project by ID.
    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Allocations of one developer.
    pub fn allocations_for_developer<'a>(
        &'a self,
        developer_id: &'a str,
    ) -> impl Iterator<Item = &'a Allocation> + 'a {
        self.allocations
            .iter()
            .filter(move |a| a.developer_id == developer_id)
    }

    /// Allocations of one project.
    pub fn allocations_for_project<'a>(
        &'a self,
        project_id: &'a str,
    ) -> impl Iterator<Item = &'a Allocation> + 'a {
        self.allocations
            .iter()
            .filter(move |a| a.project_id == project_id)
    }
}
