//! Calendar-day model.
//!
//! Every date comparison in this crate happens at day granularity. Values
//! carrying a time of day are truncated to their calendar date through
//! [`CalendarDay`] before they are compared with anything.
//!
//! # Interval Model
//! Day ranges are closed on both ends: `[start, end]`. A range whose end
//! precedes its start is empty and contains no day.

use chrono::{DateTime, Days, NaiveDate, NaiveDateTime, TimeZone};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A value that can be reduced to a calendar day.
///
/// Time-of-day components are dropped. Zoned timestamps keep the date as
/// seen in their own zone.
pub trait CalendarDay {
    /// Returns the calendar day this value falls on.
    fn to_day(&self) -> NaiveDate;
}

impl CalendarDay for NaiveDate {
    #[inline]
    fn to_day(&self) -> NaiveDate {
        *self
    }
}

impl CalendarDay for NaiveDateTime {
    #[inline]
    fn to_day(&self) -> NaiveDate {
        self.date()
    }
}

impl<Tz: TimeZone> CalendarDay for DateTime<Tz> {
    #[inline]
    fn to_day(&self) -> NaiveDate {
        self.date_naive()
    }
}

impl<T: CalendarDay + ?Sized> CalendarDay for &T {
    #[inline]
    fn to_day(&self) -> NaiveDate {
        (**self).to_day()
    }
}

/// Truncates a date or timestamp to its calendar day.
#[inline]
pub fn normalize_to_day(value: impl CalendarDay) -> NaiveDate {
    value.to_day()
}

/// The current calendar day according to `clock`, in local time.
pub fn today(clock: &dyn Clock) -> NaiveDate {
    clock.local().date_naive()
}

/// The day following `day`. Saturates at the last representable date.
#[inline]
pub fn day_after(day: NaiveDate) -> NaiveDate {
    day.checked_add_days(Days::new(1)).unwrap_or(day)
}

/// An inclusive range of calendar days `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DayRange {
    /// First day (inclusive).
    pub start: NaiveDate,
    /// Last day (inclusive).
    pub end: NaiveDate,
}

impl DayRange {
    /// Creates a range, truncating both bounds to calendar days.
    pub fn new(start: impl CalendarDay, end: impl CalendarDay) -> Self {
        Self {
            start: start.to_day(),
            end: end.to_day(),
        }
    }

    /// A range covering exactly one day.
    pub fn single(day: impl CalendarDay) -> Self {
        let day = day.to_day();
        Self {
            start: day,
            end: day,
        }
    }

    /// Whether the range contains no day (`end < start`).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }

    /// Number of days in the range (0 when empty).
    pub fn len_days(&self) -> i64 {
        if self.is_empty() {
            0
        } else {
            (self.end - self.start).num_days() + 1
        }
    }

    /// Whether `day` falls within the range, both ends inclusive.
    #[inline]
    pub fn contains(&self, day: impl CalendarDay) -> bool {
        let day = day.to_day();
        self.start <= day && day <= self.end
    }

    /// Whether two ranges share at least one day.
    pub fn overlaps(&self, other: &Self) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.start <= other.end
            && other.start <= self.end
    }

    /// Iterates over every day in the range, in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        let first = if self.is_empty() { None } else { Some(self.start) };
        std::iter::successors(first, move |&d| {
            d.checked_add_days(Days::new(1)).filter(|next| *next <= end)
        })
    }
}
