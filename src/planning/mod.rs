//! Bandwidth, availability and candidate ranking.
//!
//! Pure computations over an in-memory snapshot. Every function takes the
//! reference day explicitly; [`Planner`] supplies it from a clock.
//!
//! # Pipeline
//!
//! allocations → [`current_bandwidth`] → [`availability`] /
//! [`next_available_date`] → [`find_available_developers`] (ranked by
//! [`compare_candidates`]) → presentation.
//!
//! Nothing here mutates its input, so a snapshot can be shared across
//! threads while it stays unchanged.

mod availability;
mod bandwidth;
mod planner;
mod query;
mod skills;
mod summary;

pub use availability::{availability, next_available_date, Availability};
pub use bandwidth::{
    available_bandwidth, bandwidth_profile, current_bandwidth, overallocated_days, DailyLoad,
    UtilizationStatus, FULL_CAPACITY,
};
pub use planner::Planner;
pub use query::{
    compare_candidates, find_available_developers, find_available_in, AvailabilityQuery,
    Candidate, FutureBandwidthPolicy,
};
pub use skills::{skill_match, skills_match};
pub use summary::{
    summarize_developer, summarize_developers, summarize_project, summarize_projects,
    DeveloperSummary, ProjectSummary, StaffingLevel,
};
