//! Roster and project summaries.
//!
//! Derived per-developer and per-project figures for overview screens:
//! utilization today, the next day a developer frees up, project load,
//! estimated completion and staffing against the target headcount.

use std::cmp::Ordering;
use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::availability::availability;
use super::bandwidth::{current_bandwidth, UtilizationStatus};
use crate::models::{Allocation, PlanningSnapshot, Project};

/// Smallest slice of time that counts as "some spare bandwidth".
const MIN_SPARE_BANDWIDTH: i32 = 1;

/// Utilization overview of one developer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeveloperSummary {
    /// Developer ID.
    pub developer_id: String,
    /// Developer display name.
    pub name: String,
    /// Bandwidth committed today (percent).
    pub current_bandwidth: i32,
    /// Load classification for today.
    pub status: UtilizationStatus,
    /// First day with any spare bandwidth; `today` unless fully booked.
    pub next_available: NaiveDate,
    /// Number of allocations the developer holds.
    pub allocation_count: usize,
}

impl DeveloperSummary {
    /// Spare bandwidth today; negative when overallocated.
    pub fn spare_bandwidth(&self) -> i32 {
        super::FULL_CAPACITY - self.current_bandwidth
    }
}

/// Headcount on a project relative to its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaffingLevel {
    /// Fewer active developers than needed.
    Under,
    /// Exactly as many as needed.
    Met,
    /// More than needed.
    Over,
}

impl StaffingLevel {
    /// Compares an active headcount with a target.
    pub fn classify(active: usize, needed: u32) -> Self {
        let needed = needed as usize;
        match active.cmp(&needed) {
            Ordering::Less => Self::Under,
            Ordering::Equal => Self::Met,
            Ordering::Greater => Self::Over,
        }
    }
}

/// Load overview of one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSummary {
    /// Project ID.
    pub project_id: String,
    /// Project name.
    pub name: String,
    /// Sum of bandwidth over all of the project's allocations (percent).
    pub total_bandwidth: i32,
    /// Latest end day among allocations still running after today.
    pub estimated_completion: Option<NaiveDate>,
    /// Distinct developers with an allocation active today.
    pub active_developers: usize,
    /// Staffing against `devs_needed`, when a target is set.
    pub staffing: Option<StaffingLevel>,
}

/// Summarizes one developer's allocations.
pub fn summarize_developer(
    developer_id: &str,
    name: &str,
    allocations: &[&Allocation],
    today: NaiveDate,
) -> DeveloperSummary {
    let current = current_bandwidth(allocations.iter().copied(), today);
    DeveloperSummary {
        developer_id: developer_id.to_string(),
        name: name.to_string(),
        current_bandwidth: current,
        status: UtilizationStatus::from_bandwidth(current),
        next_available: availability(allocations, MIN_SPARE_BANDWIDTH, today).date(today),
        allocation_count: allocations.len(),
    }
}

/// Summaries for the whole roster, busiest first, then by name.
pub fn summarize_developers(snapshot: &PlanningSnapshot, today: NaiveDate) -> Vec<DeveloperSummary> {
    let mut summaries: Vec<DeveloperSummary> = snapshot
        .developers()
        .iter()
        .map(|dev| {
            let own: Vec<&Allocation> = snapshot.allocations_for_developer(&dev.id).collect();
            summarize_developer(&dev.id, &dev.name, &own, today)
        })
        .collect();

    summaries.sort_by(|a, b| {
        b.current_bandwidth
            .cmp(&a.current_bandwidth)
            .then_with(|| a.name.cmp(&b.name))
    });
    summaries
}

/// Summarizes one project's allocations.
pub fn summarize_project(
    project: &Project,
    allocations: &[&Allocation],
    today: NaiveDate,
) -> ProjectSummary {
    let total_bandwidth = allocations.iter().map(|a| a.bandwidth).sum();

    let estimated_completion = allocations
        .iter()
        .filter(|a| a.end_date > today)
        .map(|a| a.end_date)
        .max();

    let active_developers = allocations
        .iter()
        .filter(|a| a.is_active_on(today))
        .map(|a| a.developer_id.as_str())
        .collect::<HashSet<_>>()
        .len();

    ProjectSummary {
        project_id: project.id.clone(),
        name: project.name.clone(),
        total_bandwidth,
        estimated_completion,
        active_developers,
        staffing: project
            .devs_needed
            .map(|needed| StaffingLevel::classify(active_developers, needed)),
    }
}

/// Summaries for every project, in snapshot order.
pub fn summarize_projects(snapshot: &PlanningSnapshot, today: NaiveDate) -> Vec<ProjectSummary> {
    snapshot
        .projects()
        .iter()
        .map(|project| {
            let own: Vec<&Allocation> = snapshot.allocations_for_project(&project.id).collect();
            summarize_project(project, &own, today)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Developer;
    use chrono::Days;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    fn day(offset: i64) -> NaiveDate {
        if offset >= 0 {
            today().checked_add_days(Days::new(offset as u64)).unwrap()
        } else {
            today().checked_sub_days(Days::new(offset.unsigned_abs())).unwrap()
        }
    }

    fn snapshot() -> PlanningSnapshot {
        PlanningSnapshot::new(
            vec![
                Developer::new("D1", "Zoe"),
                Developer::new("D2", "Ada"),
                Developer::new("D3", "Bob"),
                Developer::new("D4", "Cy"),
            ],
            vec![
                Project::new("P1", "Billing").with_devs_needed(3),
                Project::new("P2", "Search").with_devs_needed(1),
                Project::new("P3", "Archive"),
            ],
            vec![
                Allocation::new("A1", "D1", "P1", 100, day(-10), day(10)),
                Allocation::new("A2", "D2", "P1", 50, day(-5), day(20)),
                Allocation::new("A3", "D2", "P2", 50, day(-5), day(5)),
                Allocation::new("A4", "D2", "P2", 50, day(-5), day(30)),
                Allocation::new("A5", "D3", "P1", 50, day(-30), day(-1)),
                Allocation::new("A6", "D3", "P3", 50, day(5), day(15)),
            ],
        )
    }

    #[test]
    fn test_developer_order_busiest_then_name() {
        let summaries = summarize_developers(&snapshot(), today());
        let names: Vec<_> = summaries.iter().map(|s| s.name.as_str()).collect();
        // Ada 150, Zoe 100, Bob 0, Cy 0 (Bob before Cy by name).
        assert_eq!(names, vec!["Ada", "Zoe", "Bob", "Cy"]);
    }

    #[test]
    fn test_developer_figures() {
        let summaries = summarize_developers(&snapshot(), today());
        let ada = summaries.iter().find(|s| s.developer_id == "D2").unwrap();
        assert_eq!(ada.current_bandwidth, 150);
        assert_eq!(ada.status, UtilizationStatus::Overallocated);
        assert_eq!(ada.spare_bandwidth(), -50);
        assert_eq!(ada.allocation_count, 3);
        // A3 ends day 5 (100 left), A2 ends day 20 (50 left): spare from day 21.
        assert_eq!(ada.next_available, day(21));

        let zoe = summaries.iter().find(|s| s.developer_id == "D1").unwrap();
        assert_eq!(zoe.status, UtilizationStatus::Full);
        assert_eq!(zoe.next_available, day(11));

        let cy = summaries.iter().find(|s| s.developer_id == "D4").unwrap();
        assert_eq!(cy.status, UtilizationStatus::Idle);
        assert_eq!(cy.next_available, today());
    }

    #[test]
    fn test_next_available_is_today_with_spare_capacity() {
        let bob = summarize_developers(&snapshot(), today())
            .into_iter()
            .find(|s| s.developer_id == "D3")
            .unwrap();
        assert_eq!(bob.status, UtilizationStatus::Idle);
        assert_eq!(bob.next_available, today());

        let half = Allocation::new("A1", "D5", "P1", 50, day(-3), day(30));
        let eve = summarize_developer("D5", "Eve", &[&half], today());
        assert_eq!(eve.status, UtilizationStatus::Partial);
        assert_eq!(eve.next_available, today());

        let booked = Allocation::new("A2", "D6", "P1", 100, day(5), day(15));
        let max = summarize_developer("D6", "Max", &[&booked], today());
        assert_eq!(max.status, UtilizationStatus::Idle);
        assert_eq!(max.next_available, today());
    }

    #[test]
    fn test_project_figures() {
        let summaries = summarize_projects(&snapshot(), today());
        assert_eq!(
            summaries.iter().map(|s| s.project_id.as_str()).collect::<Vec<_>>(),
            vec!["P1", "P2", "P3"]
        );

        let billing = &summaries[0];
        assert_eq!(billing.total_bandwidth, 200);
        assert_eq!(billing.estimated_completion, Some(day(20)));
        assert_eq!(billing.active_developers, 2);
        assert_eq!(billing.staffing, Some(StaffingLevel::Under));

        let search = &summaries[1];
        // Two allocations, one developer.
        assert_eq!(search.active_developers, 1);
        assert_eq!(search.staffing, Some(StaffingLevel::Met));
        assert_eq!(search.estimated_completion, Some(day(30)));

        let archive = &summaries[2];
        assert_eq!(archive.active_developers, 0);
        assert_eq!(archive.staffing, None);
        assert_eq!(archive.estimated_completion, Some(day(15)));
    }

    #[test]
    fn test_finished_project_has_no_completion_estimate() {
        let project = Project::new("P9", "Done");
        let old = Allocation::new("A", "D1", "P9", 100, day(-20), day(-2));
        let summary = summarize_project(&project, &[&old], today());
        assert_eq!(summary.estimated_completion, None);
        assert_eq!(summary.total_bandwidth, 100);
    }

    #[test]
    fn test_staffing_classification() {
        assert_eq!(StaffingLevel::classify(1, 2), StaffingLevel::Under);
        assert_eq!(StaffingLevel::classify(2, 2), StaffingLevel::Met);
        assert_eq!(StaffingLevel::classify(3, 2), StaffingLevel::Over);
    }
}
