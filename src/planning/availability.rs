//! Next-availability search.
//!
//! Finds the first day a developer's committed bandwidth has dropped far
//! enough to take on a new allocation of a given size.
//!
//! # Algorithm
//!
//! Greedy release-point scan:
//! 1. Keep allocations ending after `today`; if none remain, return `today`.
//! 2. Sort them by end day, earliest first.
//! 3. For each candidate release point `A`, sum the bandwidth of every
//!    allocation still running after `A` ends. If the spare capacity that
//!    leaves is at least the requirement, the answer is the day after `A`.
//! 4. Otherwise the developer frees up the day after the last allocation.
//!
//! Committed bandwidth can only fall as allocations expire, so the first
//! satisfying release point is the earliest one.
//!
//! # Complexity
//! O(n²) in the number of live allocations of one developer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::bandwidth::{available_bandwidth, FULL_CAPACITY};
use crate::models::{day_after, Allocation};

/// When a developer can take on new work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "date", rename_all = "snake_case")]
pub enum Availability {
    /// Enough spare bandwidth today.
    Now,
    /// Enough spare bandwidth from this day on.
    From(NaiveDate),
}

impl Availability {
    /// Resolves to a concrete day.
    pub fn date(&self, today: NaiveDate) -> NaiveDate {
        match self {
            Self::Now => today,
            Self::From(day) => *day,
        }
    }

    /// Whether the developer is available today.
    #[inline]
    pub fn is_now(&self) -> bool {
        matches!(self, Self::Now)
    }
}

/// Release-point search for the earliest day with `required_bandwidth`
/// spare.
///
/// Only walks future release points: callers that need "available now"
/// semantics use [`availability`], which checks today's spare capacity
/// first. Never returns a day before `today`.
pub fn next_available_date<'a, I>(
    allocations: I,
    required_bandwidth: i32,
    today: NaiveDate,
) -> NaiveDate
where
    I: IntoIterator<Item = &'a Allocation>,
{
    let mut live: Vec<&Allocation> = allocations
        .into_iter()
        .filter(|a| a.end_date > today)
        .collect();

    if live.is_empty() {
        return today;
    }

    // Stable: equal end days keep input order.
    live.sort_by_key(|a| a.end_date);

    for release in &live {
        let still_committed: i32 = live
            .iter()
            .filter(|a| a.end_date > release.end_date)
            .map(|a| a.bandwidth)
            .sum();

        if FULL_CAPACITY - still_committed >= required_bandwidth {
            return day_after(release.end_date);
        }
    }

    // `live` is non-empty and sorted, so the last entry ends latest.
    live.last()
        .map(|a| day_after(a.end_date))
        .unwrap_or(today)
}

/// Availability for an allocation of `required_bandwidth`.
///
/// Returns [`Availability::Now`] when today's spare bandwidth already
/// covers the requirement; otherwise runs the release-point search. The
/// search reports `today` itself when nothing runs past today, so
/// `From(today)` means "short on bandwidth, no release point ahead".
pub fn availability(
    allocations: &[&Allocation],
    required_bandwidth: i32,
    today: NaiveDate,
) -> Availability {
    let spare = available_bandwidth(allocations.iter().copied(), today);
    if spare >= required_bandwidth {
        return Availability::Now;
    }

    let from = next_available_date(allocations.iter().copied(), required_bandwidth, today);
    debug!(
        spare,
        required_bandwidth,
        %from,
        "developer short on bandwidth today"
    );
    Availability::From(from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    fn day(offset: u64) -> NaiveDate {
        today().checked_add_days(Days::new(offset)).unwrap()
    }

    fn ago(offset: u64) -> NaiveDate {
        today().checked_sub_days(Days::new(offset)).unwrap()
    }

    fn alloc(id: &str, bandwidth: i32, start: NaiveDate, end: NaiveDate) -> Allocation {
        Allocation::new(id, "D1", "P1", bandwidth, start, end)
    }

    #[test]
    fn test_no_allocations_is_today() {
        let none: Vec<Allocation> = Vec::new();
        assert_eq!(next_available_date(&none, 100, today()), today());
    }

    #[test]
    fn test_past_allocations_ignored() {
        let allocations = vec![alloc("old", 100, ago(30), ago(1))];
        assert_eq!(next_available_date(&allocations, 100, today()), today());
    }

    #[test]
    fn test_allocation_ending_today_is_not_live() {
        let allocations = vec![alloc("A", 100, ago(5), today())];
        assert_eq!(next_available_date(&allocations, 100, today()), today());
    }

    #[test]
    fn test_two_allocations_full_requirement() {
        // A: 100% day 0..10, B: 50% day 5..20. 100% spare only once both end.
        let allocations = vec![
            alloc("A", 100, day(0), day(10)),
            alloc("B", 50, day(5), day(20)),
        ];
        assert_eq!(next_available_date(&allocations, 100, today()), day(21));
    }

    #[test]
    fn test_two_allocations_half_requirement() {
        let allocations = vec![
            alloc("A", 100, day(0), day(10)),
            alloc("B", 50, day(5), day(20)),
        ];
        // After A ends only B's 50% remains.
        assert_eq!(next_available_date(&allocations, 50, today()), day(11));
    }

    #[test]
    fn test_input_order_irrelevant() {
        let forward = vec![
            alloc("A", 50, day(0), day(4)),
            alloc("B", 50, day(0), day(8)),
            alloc("C", 50, day(0), day(12)),
        ];
        let mut backward = forward.clone();
        backward.reverse();
        assert_eq!(
            next_available_date(&forward, 50, today()),
            next_available_date(&backward, 50, today())
        );
        // After A ends, B + C still hold 100; after B ends, C holds 50.
        assert_eq!(next_available_date(&forward, 50, today()), day(9));
    }

    #[test]
    fn test_requirement_above_capacity_falls_back_to_last_end() {
        let allocations = vec![
            alloc("A", 50, day(0), day(4)),
            alloc("B", 50, day(0), day(9)),
        ];
        assert_eq!(next_available_date(&allocations, 150, today()), day(10));
    }

    #[test]
    fn test_availability_now_when_spare_suffices() {
        let allocations = vec![alloc("A", 50, ago(2), day(30))];
        let refs: Vec<&Allocation> = allocations.iter().collect();
        assert_eq!(availability(&refs, 50, today()), Availability::Now);
        assert_eq!(
            availability(&refs, 100, today()),
            Availability::From(day(31))
        );
    }

    #[test]
    fn test_availability_future_start_only() {
        // Busy only in the future: free today, search would report later.
        let allocations = vec![alloc("A", 100, day(5), day(10))];
        let refs: Vec<&Allocation> = allocations.iter().collect();
        assert_eq!(availability(&refs, 100, today()), Availability::Now);
        assert_eq!(next_available_date(refs.iter().copied(), 100, today()), day(11));
    }

    #[test]
    fn test_availability_date_resolution() {
        assert_eq!(Availability::Now.date(today()), today());
        assert_eq!(Availability::From(day(3)).date(today()), day(3));
        assert!(Availability::Now.is_now());
        assert!(!Availability::From(day(3)).is_now());
    }
}
