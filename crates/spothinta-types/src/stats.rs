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

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::price::PricePoint;

// ============= Statistics Types =============

/// Named subsets of the price series.
///
/// Buckets overlap: `Future` is "at or after the current hour" regardless of the
/// calendar day, so a point of today or tomorrow is usually also in `Future`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeBucket {
    Today,
    Tomorrow,
    Future,
}

impl TimeBucket {
    pub const ALL: [TimeBucket; 3] = [TimeBucket::Today, TimeBucket::Tomorrow, TimeBucket::Future];
}

/// Max/min/mean of one bucket. All fields are `None` for an empty bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BucketSummary {
    pub max: Option<f64>,
    pub min: Option<f64>,
    pub mean: Option<f64>,
}

impl BucketSummary {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.max.is_none() && self.min.is_none() && self.mean.is_none()
    }
}

/// Cheapest contiguous run of `hours` upcoming hours.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CheapestWindow {
    /// Window length in hours
    pub hours: usize,

    /// First hour of the cheapest window, `None` when no window fits
    pub start: Option<NaiveDateTime>,

    /// Mean price over the window, `None` when no window fits
    pub mean: Option<f64>,
}

impl CheapestWindow {
    #[must_use]
    pub fn absent(hours: usize) -> Self {
        Self {
            hours,
            start: None,
            mean: None,
        }
    }
}

/// Everything the stats tables show, as raw numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsResult {
    /// Current hour the statistics were computed for
    pub current_hour: NaiveDateTime,

    /// Price of the current hour, if the feed contains it
    pub price_now: Option<f64>,

    /// Today's price statistics
    pub today: BucketSummary,

    /// Tomorrow's price statistics (empty until the full day is published)
    pub tomorrow: BucketSummary,

    /// One entry per window length, ascending
    pub cheapest_windows: Vec<CheapestWindow>,

    /// Current and upcoming hours in time order
    pub upcoming: Vec<PricePoint>,
}

impl StatsResult {
    #[must_use]
    pub fn cheapest_window(&self, hours: usize) -> Option<&CheapestWindow> {
        self.cheapest_windows.iter().find(|w| w.hours == hours)
    }
}
