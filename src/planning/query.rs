//! Availability and skill-match query.
//!
//! Given the roster, all allocations, a bandwidth requirement and a skill
//! list, returns every developer who can take the work now or later,
//! ranked by fitness.
//!
//! # Ranking
//!
//! Sequential comparison, falling through on ties:
//! 1. Higher skill match.
//! 2. Earlier `available_from`.
//! 3. Higher reported available bandwidth.
//!
//! The sort is stable, so full ties keep roster order.

use std::cmp::Ordering;
use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::availability::availability;
use super::bandwidth::{current_bandwidth, FULL_CAPACITY};
use super::skills::skill_match;
use crate::models::{Allocation, Developer, PlanningSnapshot};

/// How to report bandwidth for developers who only free up later.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FutureBandwidthPolicy {
    /// Report full capacity from the availability day on.
    #[default]
    AssumeFullyFree,
    /// Report the spare bandwidth actually left on the availability day.
    ProjectedSpare,
}

/// Parameters of an availability query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityQuery {
    /// Bandwidth the new work needs (percent).
    pub required_bandwidth: i32,
    /// Skills the new work needs. Empty = no skill filter.
    pub required_skills: Vec<String>,
    /// Reporting policy for future availability.
    pub policy: FutureBandwidthPolicy,
}

impl AvailabilityQuery {
    /// Creates a query with no skill filter.
    pub fn new(required_bandwidth: i32) -> Self {
        Self {
            required_bandwidth,
            required_skills: Vec::new(),
            policy: FutureBandwidthPolicy::default(),
        }
    }

    /// Adds a required skill.
    pub fn with_skill(mut self, skill: impl Into<String>) -> Self {
        self.required_skills.push(skill.into());
        self
    }

    /// Adds several required skills.
    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_skills
            .extend(skills.into_iter().map(Into::into));
        self
    }

    /// Sets the future bandwidth policy.
    pub fn with_policy(mut self, policy: FutureBandwidthPolicy) -> Self {
        self.policy = policy;
        self
    }
}

/// One ranked query result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Developer ID.
    pub developer_id: String,
    /// Developer display name.
    pub developer_name: String,
    /// Bandwidth committed today (percent).
    pub current_bandwidth: i32,
    /// Bandwidth reported as available from `available_from` (percent).
    pub available_bandwidth: i32,
    /// First day the requirement can be met.
    pub available_from: NaiveDate,
    /// Share of required skills covered (0.0..=100.0).
    pub skill_match: f64,
}

impl Candidate {
    /// Whether the candidate can start on `day`.
    pub fn is_available_on(&self, day: NaiveDate) -> bool {
        self.available_from <= day
    }
}

/// Finds and ranks developers able to take `query.required_bandwidth`.
///
/// Allocations are grouped by developer internally; allocations for
/// developers missing from `developers` are ignored. Project references
/// are not checked: an allocation pointing at an unknown project still
/// counts. Use [`find_available_in`] with a [`PlanningSnapshot`] to have
/// those dropped.
pub fn find_available_developers(
    developers: &[Developer],
    allocations: &[Allocation],
    query: &AvailabilityQuery,
    today: NaiveDate,
) -> Vec<Candidate> {
    let mut by_developer: HashMap<&str, Vec<&Allocation>> = HashMap::new();
    for allocation in allocations {
        by_developer
            .entry(allocation.developer_id.as_str())
            .or_default()
            .push(allocation);
    }

    let mut candidates: Vec<Candidate> = developers
        .iter()
        .map(|developer| {
            let own = by_developer
                .get(developer.id.as_str())
                .map(Vec::as_slice)
                .unwrap_or_default();
            evaluate(developer, own, query, today)
        })
        .filter(|c| c.available_bandwidth >= query.required_bandwidth || c.available_from > today)
        .collect();

    candidates.sort_by(compare_candidates);

    debug!(
        required_bandwidth = query.required_bandwidth,
        skills = query.required_skills.len(),
        roster = developers.len(),
        matches = candidates.len(),
        "availability query ranked"
    );
    candidates
}

/// [`find_available_developers`] over a snapshot's resolved records.
pub fn find_available_in(
    snapshot: &PlanningSnapshot,
    query: &AvailabilityQuery,
    today: NaiveDate,
) -> Vec<Candidate> {
    find_available_developers(snapshot.developers(), snapshot.allocations(), query, today)
}

fn evaluate(
    developer: &Developer,
    allocations: &[&Allocation],
    query: &AvailabilityQuery,
    today: NaiveDate,
) -> Candidate {
    let current = current_bandwidth(allocations.iter().copied(), today);
    let spare_now = FULL_CAPACITY - current;
    let available_from = availability(allocations, query.required_bandwidth, today).date(today);

    let available_bandwidth = if available_from == today {
        spare_now
    } else {
        match query.policy {
            FutureBandwidthPolicy::AssumeFullyFree => FULL_CAPACITY,
            FutureBandwidthPolicy::ProjectedSpare => {
                FULL_CAPACITY - current_bandwidth(allocations.iter().copied(), available_from)
            }
        }
    };

    let skill_match = skill_match(&query.required_skills, &developer.skills);

    trace!(
        developer = %developer.id,
        current,
        available_bandwidth,
        %available_from,
        skill_match,
        "evaluated candidate"
    );

    Candidate {
        developer_id: developer.id.clone(),
        developer_name: developer.name.clone(),
        current_bandwidth: current,
        available_bandwidth,
        available_from,
        skill_match,
    }
}

/// Ranking comparator: skill match desc, availability asc, bandwidth desc.
pub fn compare_candidates(a: &Candidate, b: &Candidate) -> Ordering {
    b.skill_match
        .total_cmp(&a.skill_match)
        .then_with(|| a.available_from.cmp(&b.available_from))
        .then_with(|| b.available_bandwidth.cmp(&a.available_bandwidth))
}
