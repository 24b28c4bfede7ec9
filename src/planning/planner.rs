//! Clock-bound planning facade.
//!
//! The pure functions in this module tree all take "today" explicitly.
//! [`Planner`] reads it once per call from an injected clock and forwards,
//! so callers get wall-clock defaults while tests pin the date.

use std::sync::Arc;

use chrono::NaiveDate;
use mockable::{Clock, DefaultClock};

use super::availability::{availability, Availability};
use super::bandwidth::current_bandwidth;
use super::query::{find_available_in, AvailabilityQuery, Candidate};
use super::summary::{summarize_developers, summarize_projects, DeveloperSummary, ProjectSummary};
use crate::config::PlannerConfig;
use crate::models::{today, Allocation, PlanningSnapshot};

/// Staffing computations over a snapshot, dated by a clock.
///
/// # Example
///
/// ```
/// use u_staffing::config::PlannerConfig;
/// use u_staffing::models::{Developer, PlanningSnapshot};
/// use u_staffing::planning::Planner;
///
/// let snapshot = PlanningSnapshot::new(vec![Developer::new("D1", "Ada")], vec![], vec![]);
/// let planner = Planner::new(PlannerConfig::default());
///
/// let no_skills: [&str; 0] = [];
/// let candidates = planner.find_available(&snapshot, 100, &no_skills);
/// assert_eq!(candidates.len(), 1);
/// assert_eq!(candidates[0].available_bandwidth, 100);
/// ```
#[derive(Clone)]
pub struct Planner {
    clock: Arc<dyn Clock>,
    config: PlannerConfig,
}

impl Planner {
    /// Creates a planner reading the system clock.
    pub fn new(config: PlannerConfig) -> Self {
        Self::with_clock(config, Arc::new(DefaultClock))
    }

    /// Creates a planner reading `clock`.
    pub fn with_clock(config: PlannerConfig, clock: Arc<dyn Clock>) -> Self {
        Self { clock, config }
    }

    /// The active configuration.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Today's calendar day according to the clock.
    pub fn today(&self) -> NaiveDate {
        today(self.clock.as_ref())
    }

    /// Bandwidth `developer_id` has committed today.
    pub fn current_bandwidth(&self, snapshot: &PlanningSnapshot, developer_id: &str) -> i32 {
        current_bandwidth(snapshot.allocations_for_developer(developer_id), self.today())
    }

    /// When `developer_id` can take on `required_bandwidth`.
    pub fn availability(
        &self,
        snapshot: &PlanningSnapshot,
        developer_id: &str,
        required_bandwidth: i32,
    ) -> Availability {
        let own: Vec<&Allocation> = snapshot.allocations_for_developer(developer_id).collect();
        availability(&own, required_bandwidth, self.today())
    }

    /// Ranked candidates for `required_bandwidth` and `required_skills`.
    pub fn find_available<S: AsRef<str>>(
        &self,
        snapshot: &PlanningSnapshot,
        required_bandwidth: i32,
        required_skills: &[S],
    ) -> Vec<Candidate> {
        let query = AvailabilityQuery::new(required_bandwidth)
            .with_skills(required_skills.iter().map(|s| s.as_ref().to_string()))
            .with_policy(self.config.future_bandwidth_policy);
        self.run_query(snapshot, &query)
    }

    /// Ranked candidates using the configured default bandwidth.
    pub fn find_available_default<S: AsRef<str>>(
        &self,
        snapshot: &PlanningSnapshot,
        required_skills: &[S],
    ) -> Vec<Candidate> {
        self.find_available(
            snapshot,
            self.config.default_required_bandwidth,
            required_skills,
        )
    }

    /// Runs a fully specified query.
    pub fn run_query(&self, snapshot: &PlanningSnapshot, query: &AvailabilityQuery) -> Vec<Candidate> {
        find_available_in(snapshot, query, self.today())
    }

    /// Roster overview, busiest first.
    pub fn developer_summaries(&self, snapshot: &PlanningSnapshot) -> Vec<DeveloperSummary> {
        summarize_developers(snapshot, self.today())
    }

    /// Project overview, in snapshot order.
    pub fn project_summaries(&self, snapshot: &PlanningSnapshot) -> Vec<ProjectSummary> {
        summarize_projects(snapshot, self.today())
    }
}

impl std::fmt::Debug for Planner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Planner")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Developer, Project};
    use crate::planning::FutureBandwidthPolicy;
    use chrono::{DateTime, Days, Local, TimeZone, Utc};

    struct FixtureClock {
        utc_now: DateTime<Utc>,
    }

    impl Clock for FixtureClock {
        fn local(&self) -> DateTime<Local> {
            self.utc_now.with_timezone(&Local)
        }

        fn utc(&self) -> DateTime<Utc> {
            self.utc_now
        }
    }

    fn fixture_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 11, 4).unwrap()
    }

    fn fixture_clock() -> Arc<dyn Clock> {
        let noon = Local
            .from_local_datetime(&fixture_today().and_hms_opt(12, 0, 0).unwrap())
            .single()
            .unwrap();
        Arc::new(FixtureClock {
            utc_now: noon.with_timezone(&Utc),
        })
    }

    fn day(offset: u64) -> NaiveDate {
        fixture_today().checked_add_days(Days::new(offset)).unwrap()
    }

    fn snapshot() -> PlanningSnapshot {
        PlanningSnapshot::new(
            vec![
                Developer::new("D1", "Ada").with_skill("Rust"),
                Developer::new("D2", "Lin").with_skill("Go"),
            ],
            vec![Project::new("P1", "Billing")],
            vec![
                Allocation::new("A1", "D1", "P1", 100, fixture_today(), day(10)),
                Allocation::new("A2", "D1", "P1", 50, day(5), day(20)),
                Allocation::new("A3", "D2", "P1", 50, fixture_today(), day(3)),
            ],
        )
    }

    fn planner(config: PlannerConfig) -> Planner {
        Planner::with_clock(config, fixture_clock())
    }

    #[test]
    fn test_today_from_clock() {
        assert_eq!(planner(PlannerConfig::default()).today(), fixture_today());
    }

    #[test]
    fn test_current_bandwidth_and_availability() {
        let p = planner(PlannerConfig::default());
        let snap = snapshot();
        assert_eq!(p.current_bandwidth(&snap, "D1"), 100);
        assert_eq!(p.current_bandwidth(&snap, "nobody"), 0);
        assert_eq!(p.availability(&snap, "D1", 100), Availability::From(day(21)));
        assert_eq!(p.availability(&snap, "D2", 50), Availability::Now);
    }

    #[test]
    fn test_find_available_uses_default_bandwidth() {
        let p = planner(PlannerConfig::default().with_default_required_bandwidth(100));
        let result = p.find_available_default(&snapshot(), &["rust"]);
        let ids: Vec<_> = result.iter().map(|c| c.developer_id.as_str()).collect();
        assert_eq!(ids, vec!["D1", "D2"]);
        assert_eq!(result[0].available_from, day(21));
        assert_eq!(result[1].available_from, day(4));
    }

    #[test]
    fn test_configured_policy_is_applied() {
        let cfg = PlannerConfig::default()
            .with_future_bandwidth_policy(FutureBandwidthPolicy::ProjectedSpare);
        let result = planner(cfg).find_available(&snapshot(), 50, &["rust"]);
        let ada = &result[0];
        assert_eq!(ada.available_from, day(11));
        assert_eq!(ada.available_bandwidth, 50);
    }

    #[test]
    fn test_summaries_use_clock() {
        let p = planner(PlannerConfig::default());
        let devs = p.developer_summaries(&snapshot());
        assert_eq!(devs[0].developer_id, "D1");
        let projects = p.project_summaries(&snapshot());
        assert_eq!(projects[0].estimated_completion, Some(day(20)));
    }

    #[test]
    fn test_debug_omits_clock() {
        let rendered = format!("{:?}", planner(PlannerConfig::default()));
        assert!(rendered.starts_with("Planner { config: "));
        assert!(rendered.ends_with(", .. }"));
        assert!(!rendered.contains(&fixture_today().to_string()));
    }
}
