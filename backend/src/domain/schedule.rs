//! Scheduling logic for the ordering checklist.
//!
//! This module owns the day-key convention and all date calculations: which
//! key a calendar date maps to, which weekday a date falls on, and which
//! suppliers are due on a given date. The UI only renders what comes out of
//! here; no other module derives day keys on its own.

use chrono::{Datelike, Duration, Local, NaiveDate};
use shared::{Supplier, Weekday};

/// A single day of a rolling date window.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowDay {
    pub date: NaiveDate,
    pub day_key: String,
    /// Short display label, e.g. "Mon 9"
    pub label: String,
}

/// Service that handles day-key derivation and supplier scheduling
#[derive(Clone)]
pub struct ScheduleService;

impl ScheduleService {
    pub fn new() -> Self {
        Self
    }

    /// Current local calendar date. No timezone conversion, always wall clock.
    pub fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    /// Day key for a date: "{year}-{month}-{day}" with a 1-based month and no
    /// zero padding (day 9 of month 9 of 2025 keys as "2025-9-9").
    ///
    /// Keys are map indexes only. Their lexicographic order does not follow
    /// the calendar once single-digit boundaries are crossed, so ordered
    /// views must sort by the date itself, never by the key string.
    pub fn day_key_for(&self, date: NaiveDate) -> String {
        format!("{}-{}-{}", date.year(), date.month(), date.day())
    }

    /// Day key for the current local date.
    pub fn today_key(&self) -> String {
        self.day_key_for(self.today())
    }

    /// Day key for "today + n days"; n may be negative. Month and year
    /// boundaries roll over through regular calendar arithmetic.
    pub fn day_key_offset(&self, n: i64) -> String {
        self.day_key_for(self.today() + Duration::days(n))
    }

    /// Weekday token for a date.
    ///
    /// Sunday-indexed internally (0 = sunday, matching the source data's
    /// day-of-week numbering) but exposed as a name token.
    pub fn weekday_of(&self, date: NaiveDate) -> Weekday {
        Weekday::from(date.weekday())
    }

    /// Suppliers scheduled on the given date, preserving registry order.
    pub fn active_suppliers_for(&self, date: NaiveDate, suppliers: &[Supplier]) -> Vec<Supplier> {
        let weekday = self.weekday_of(date);
        suppliers
            .iter()
            .filter(|s| s.days.contains(&weekday))
            .cloned()
            .collect()
    }

    /// Short display label for a date, e.g. "Mon 9".
    pub fn day_label(&self, date: NaiveDate) -> String {
        format!("{} {}", date.format("%a"), date.day())
    }

    /// The last `len` calendar days ending today, oldest first.
    pub fn window_ending_today(&self, len: usize) -> Vec<WindowDay> {
        let today = self.today();
        (0..len)
            .rev()
            .map(|i| {
                let date = today - Duration::days(i as i64);
                WindowDay {
                    date,
                    day_key: self.day_key_for(date),
                    label: self.day_label(date),
                }
            })
            .collect()
    }
}

impl Default for ScheduleService {
    fn default() -> Self {
        Self::new()
    }
}
