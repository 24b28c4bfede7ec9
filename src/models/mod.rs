//! Staffing domain models.
//!
//! Provides the data types the staffing computations read: people,
//! projects, the allocations binding them, and the calendar-day model every
//! comparison goes through.
//!
//! # Domain Mappings
//!
//! | u-staffing | Agency | Consulting | Research Lab |
//! |------------|--------|------------|--------------|
//! | Developer | Designer | Consultant | Researcher |
//! | Project | Client Brief | Engagement | Grant |
//! | Allocation | Booking | Staffing Line | Effort Share |

mod allocation;
mod day;
mod developer;
mod project;
mod snapshot;

pub use allocation::{
    allocations_for_developer, allocations_in_window, is_active_on, Allocation, AuditInfo,
};
pub use day::{day_after, normalize_to_day, today, CalendarDay, DayRange};
pub use developer::Developer;
pub use project::{Priority, Project, ProjectStatus};
pub use snapshot::PlanningSnapshot;
