//! Project model.
//!
//! Projects receive allocations. Priority and status are display
//! attributes; the staffing core reads only `devs_needed` and the
//! identifier.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{CalendarDay, DayRange};

/// A project developers can be allocated to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Unique project identifier.
    pub id: String,
    /// Project name.
    pub name: String,
    /// Free-text description.
    pub description: Option<String>,
    /// Skill tags the project asks for.
    pub required_skills: Vec<String>,
    /// Display priority.
    pub priority: Priority,
    /// Lifecycle status.
    pub status: ProjectStatus,
    /// Planned start day.
    pub start_date: Option<NaiveDate>,
    /// Planned end day.
    pub end_date: Option<NaiveDate>,
    /// Target headcount.
    pub devs_needed: Option<u32>,
}

/// Project priority, lowest to highest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Nice to have.
    Low,
    /// Normal work.
    #[default]
    Medium,
    /// Important work.
    High,
    /// Must not slip.
    Critical,
}

/// Project lifecycle status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    /// Not started yet.
    #[default]
    Planning,
    /// In progress.
    Active,
    /// Finished.
    Completed,
    /// Paused.
    OnHold,
}

impl Project {
    /// Creates a medium-priority project in planning.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            required_skills: Vec::new(),
            priority: Priority::default(),
            status: ProjectStatus::default(),
            start_date: None,
            end_date: None,
            devs_needed: None,
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Adds a required skill.
    pub fn with_required_skill(mut self, skill: impl Into<String>) -> Self {
        self.required_skills.push(skill.into());
        self
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the status.
    pub fn with_status(mut self, status: ProjectStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the planned start and end days.
    pub fn with_dates(mut self, start: impl CalendarDay, end: impl CalendarDay) -> Self {
        self.start_date = Some(start.to_day());
        self.end_date = Some(end.to_day());
        self
    }

    /// Sets the target headcount.
    pub fn with_devs_needed(mut self, devs: u32) -> Self {
        self.devs_needed = Some(devs);
        self
    }

    /// Planned range, if both bounds are set.
    pub fn planned_range(&self) -> Option<DayRange> {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => Some(DayRange::new(start, end)),
            _ => None,
        }
    }
}
