//! Allocation model.
//!
//! An allocation commits a percentage of one developer's time to one
//! project over an inclusive range of calendar days. Allocations for the
//! same developer may overlap and may sum above 100%; that state is
//! reported, never rejected here.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{CalendarDay, DayRange};

/// A time-bounded bandwidth commitment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    /// Unique allocation identifier.
    pub id: String,
    /// Allocated developer.
    pub developer_id: String,
    /// Receiving project.
    pub project_id: String,
    /// Committed share of the developer's time, in percent.
    pub bandwidth: i32,
    /// First committed day (inclusive).
    pub start_date: NaiveDate,
    /// Last committed day (inclusive).
    pub end_date: NaiveDate,
    /// Free-text notes.
    pub notes: Option<String>,
    /// Provenance shown alongside the allocation.
    pub audit: Option<AuditInfo>,
}

/// Who created an allocation, and when.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditInfo {
    /// Creator identity.
    pub created_by: Option<String>,
    /// Creator display name.
    pub created_by_name: Option<String>,
    /// Creator email.
    pub created_by_email: Option<String>,
    /// Creation timestamp.
    pub created_at: Option<DateTime<Utc>>,
}

impl Allocation {
    /// Creates an allocation. Both bounds are truncated to calendar days.
    pub fn new(
        id: impl Into<String>,
        developer_id: impl Into<String>,
        project_id: impl Into<String>,
        bandwidth: i32,
        start: impl CalendarDay,
        end: impl CalendarDay,
    ) -> Self {
        Self {
            id: id.into(),
            developer_id: developer_id.into(),
            project_id: project_id.into(),
            bandwidth,
            start_date: start.to_day(),
            end_date: end.to_day(),
            notes: None,
            audit: None,
        }
    }

    /// Sets the notes.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Sets provenance data.
    pub fn with_audit(mut self, audit: AuditInfo) -> Self {
        self.audit = Some(audit);
        self
    }

    /// The committed day range.
    #[inline]
    pub fn range(&self) -> DayRange {
        DayRange {
            start: self.start_date,
            end: self.end_date,
        }
    }

    /// Whether the allocation is active on `day` (both bounds inclusive).
    #[inline]
    pub fn is_active_on(&self, day: impl CalendarDay) -> bool {
        self.range().contains(day)
    }

    /// Whether two allocations share at least one day.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.range().overlaps(&other.range())
    }

    /// Whether the allocation has at least one day inside `window`.
    pub fn intersects(&self, window: &DayRange) -> bool {
        self.range().overlaps(window)
    }
}

/// Whether `allocation` is active on `day`.
///
/// An allocation whose end precedes its start is never active.
#[inline]
pub fn is_active_on(allocation: &Allocation, day: impl CalendarDay) -> bool {
    allocation.is_active_on(day)
}

/// Allocations of one developer, in input order.
pub fn allocations_for_developer<'a>(
    allocations: &'a [Allocation],
    developer_id: &'a str,
) -> impl Iterator<Item = &'a Allocation> + 'a {
    allocations
        .iter()
        .filter(move |a| a.developer_id == developer_id)
}

/// Allocations touching `window`, ordered by start day (timeline order).
pub fn allocations_in_window<'a>(
    allocations: &'a [Allocation],
    window: &DayRange,
) -> Vec<&'a Allocation> {
    let mut hits: Vec<&Allocation> = allocations
        .iter()
        .filter(|a| a.intersects(window))
        .collect();
    hits.sort_by_key(|a| a.start_date);
    hits
}
