//! Team staffing core for the U-Engine ecosystem.
//!
//! Tracks how much of each developer's time is committed to which project
//! over which days, and derives utilization, next-availability dates and
//! skill-ranked candidate lists from that data.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Developer`, `Project`, `Allocation`,
//!   `DayRange`, `PlanningSnapshot`, and the calendar-day helpers
//! - **`planning`**: Bandwidth aggregation, release-point availability
//!   search, availability/skill query, roster and project summaries,
//!   and the clock-bound `Planner`
//! - **`validation`**: Input integrity checks (duplicate IDs, references,
//!   date ranges, allowed bandwidths)
//! - **`config`**: `PlannerConfig` defaults and range checks
//!
//! # Time Model
//!
//! Dates are calendar days (`chrono::NaiveDate`); both ends of every range
//! are inclusive. "Today" is always a parameter; only [`planning::Planner`]
//! reads a clock, and the clock is injectable.
//!
//! # Architecture
//!
//! Storage, authentication, team scoping and rendering live outside this
//! crate. It reads an already-scoped snapshot and never mutates it.

pub mod config;
pub mod models;
pub mod planning;
pub mod validation;
