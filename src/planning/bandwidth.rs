//! Committed-bandwidth aggregation.
//!
//! Sums the bandwidth of allocations active on a reference day. Results
//! are never clamped: a value above [`FULL_CAPACITY`] means the developer
//! is overallocated, and the spare figure goes negative accordingly.
//!
//! # Complexity
//! O(n) per day in the number of allocations; no ordering required.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Allocation, DayRange};

/// Bandwidth of one full-time developer, in percent.
pub const FULL_CAPACITY: i32 = 100;

/// Load classification of a developer on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UtilizationStatus {
    /// Nothing committed.
    Idle,
    /// Some spare bandwidth left.
    Partial,
    /// Exactly at capacity.
    Full,
    /// Committed beyond capacity.
    Overallocated,
}

impl UtilizationStatus {
    /// Classifies a committed bandwidth figure.
    pub fn from_bandwidth(bandwidth: i32) -> Self {
        match bandwidth {
            b if b > FULL_CAPACITY => Self::Overallocated,
            FULL_CAPACITY => Self::Full,
            b if b <= 0 => Self::Idle,
            _ => Self::Partial,
        }
    }
}

/// Committed bandwidth on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyLoad {
    /// The day.
    pub day: NaiveDate,
    /// Sum of active allocation bandwidths (percent).
    pub bandwidth: i32,
}

impl DailyLoad {
    /// Whether the day is committed beyond capacity.
    #[inline]
    pub fn is_overallocated(&self) -> bool {
        self.bandwidth > FULL_CAPACITY
    }
}

/// Total bandwidth committed on `day`.
///
/// `allocations` is expected to belong to a single developer. An empty
/// slice yields 0.
pub fn current_bandwidth<'a, I>(allocations: I, day: NaiveDate) -> i32
where
    I: IntoIterator<Item = &'a Allocation>,
{
    allocations
        .into_iter()
        .filter(|a| a.is_active_on(day))
        .map(|a| a.bandwidth)
        .sum()
}

/// Spare bandwidth on `day`: `FULL_CAPACITY - current_bandwidth`.
///
/// Negative when the developer is overallocated.
pub fn available_bandwidth<'a, I>(allocations: I, day: NaiveDate) -> i32
where
    I: IntoIterator<Item = &'a Allocation>,
{
    FULL_CAPACITY - current_bandwidth(allocations, day)
}

/// Committed bandwidth for every day of `range`.
pub fn bandwidth_profile(allocations: &[Allocation], range: &DayRange) -> Vec<DailyLoad> {
    let relevant: Vec<&Allocation> = allocations
        .iter()
        .filter(|a| a.intersects(range))
        .collect();

    range
        .days()
        .map(|day| DailyLoad {
            day,
            bandwidth: current_bandwidth(relevant.iter().copied(), day),
        })
        .collect()
}

/// Days of `range` on which more than full capacity is committed.
pub fn overallocated_days(allocations: &[Allocation], range: &DayRange) -> Vec<DailyLoad> {
    bandwidth_profile(allocations, range)
        .into_iter()
        .filter(DailyLoad::is_overallocated)
        .collect()
}
