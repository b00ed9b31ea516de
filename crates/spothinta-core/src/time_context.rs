// Copyright (c) 2025 SOLARE S.R.O.
//
// This file is part of spothinta.
//
// Licensed under the Creative Commons Attribution-NonCommercial-NoDerivatives 4.0 International
// (CC BY-NC-ND 4.0). You may use and share this file for non-commercial purposes only and you may not
// create derivatives. See <https://creativecommons.org/licenses/by-nc-nd/4.0/>.
//
// This software is provided "AS IS", without warranty of any kind.
//
// For commercial licensing, please contact: info@solare.cz

//! Time context: the single place that decides what "now", "today" and
//! "tomorrow" mean.
//!
//! Price feed timestamps are local wall-clock times of the market, so every
//! comparison happens on naive local date-times produced here. The current
//! instant is always injected through a [`TimeSource`] so tests can pin it.

use chrono::{DateTime, Days, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike, Utc};
use chrono_tz::Tz;

/// Timezone of the Finnish day-ahead market feed.
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::Europe::Helsinki;

/// Source of the current instant.
pub trait TimeSource: std::fmt::Debug + Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedTimeSource(pub DateTime<Utc>);

impl TimeSource for FixedTimeSource {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// An instant bound to the market timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeContext {
    now: DateTime<Tz>,
}

impl TimeContext {
    #[must_use]
    pub fn new(now: DateTime<Utc>, tz: Tz) -> Self {
        Self {
            now: now.with_timezone(&tz),
        }
    }

    /// Capture the current instant of `source` in `tz`.
    #[must_use]
    pub fn capture(source: &dyn TimeSource, tz: Tz) -> Self {
        Self::new(source.now(), tz)
    }

    /// Build a context from a local wall-clock time. Returns `None` for local
    /// times skipped by a DST transition; ambiguous times resolve to the
    /// earlier instant.
    #[must_use]
    pub fn at_local(local: NaiveDateTime, tz: Tz) -> Option<Self> {
        tz.from_local_datetime(&local)
            .earliest()
            .map(|now| Self { now })
    }

    #[must_use]
    pub fn timezone(&self) -> Tz {
        self.now.timezone()
    }

    #[must_use]
    pub fn now(&self) -> DateTime<Tz> {
        self.now
    }

    /// Current local wall-clock time.
    #[must_use]
    pub fn local_now(&self) -> NaiveDateTime {
        self.now.naive_local()
    }

    /// Start of the current local hour.
    #[must_use]
    pub fn current_hour(&self) -> NaiveDateTime {
        truncate_to_hour(self.local_now())
    }

    #[must_use]
    pub fn today(&self) -> NaiveDate {
        calendar_date(self.local_now())
    }

    #[must_use]
    pub fn tomorrow(&self) -> NaiveDate {
        add_days(self.today(), 1).unwrap_or(NaiveDate::MAX)
    }

    /// Number of hours in the local calendar day `date`: 24, or 23/25 on DST
    /// transition days.
    #[must_use]
    pub fn hours_in_day(&self, date: NaiveDate) -> usize {
        let tz = self.timezone();
        let start = local_midnight(tz, date);
        let end = add_days(date, 1).and_then(|next| local_midnight(tz, next));

        match (start, end) {
            (Some(start), Some(end)) => {
                usize::try_from(end.signed_duration_since(start).num_hours()).unwrap_or(24)
            }
            _ => 24,
        }
    }
}

fn local_midnight(tz: Tz, date: NaiveDate) -> Option<DateTime<Tz>> {
    tz.from_local_datetime(&date.and_time(NaiveTime::MIN))
        .earliest()
}

/// Drop minutes, seconds and sub-seconds.
#[must_use]
pub fn truncate_to_hour(time: NaiveDateTime) -> NaiveDateTime {
    time.with_minute(0)
        .and_then(|t| t.with_second(0))
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(time)
}

#[must_use]
pub fn calendar_date(time: NaiveDateTime) -> NaiveDate {
    time.date()
}

#[must_use]
pub fn add_days(date: NaiveDate, days: u64) -> Option<NaiveDate> {
    date.checked_add_days(Days::new(days))
}
