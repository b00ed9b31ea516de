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

use spothinta_types::{BucketSummary, PricePoint, RawPricePoint, SeriesError, StatsResult};
use tracing::{debug, warn};

use crate::aggregate::{aggregate, price_now};
use crate::partition::{Buckets, DEFAULT_TRAILING_WINDOW, partition_raw, partition_trailing};
use crate::time_context::TimeContext;
use crate::window::cheapest_windows;

/// Tunables for [`compute_stats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsOptions {
    /// How many trailing feed entries are scanned
    pub trailing_window: usize,
}

impl Default for StatsOptions {
    fn default() -> Self {
        Self {
            trailing_window: DEFAULT_TRAILING_WINDOW,
        }
    }
}

/// Compute the full statistics table for an already parsed series.
#[must_use]
pub fn compute_stats(
    series: &[PricePoint],
    ctx: &TimeContext,
    options: &StatsOptions,
) -> StatsResult {
    let buckets = partition_trailing(series, ctx, options.trailing_window);
    summarize(buckets, ctx)
}

/// Parse the raw feed and compute the statistics table.
pub fn compute_stats_raw(
    raw: &[RawPricePoint],
    ctx: &TimeContext,
    options: &StatsOptions,
) -> Result<StatsResult, SeriesError> {
    let buckets = partition_raw(raw, ctx, options.trailing_window)?;
    Ok(summarize(buckets, ctx))
}

/// Turn partitioned buckets into the statistics table.
#[must_use]
pub fn summarize(buckets: Buckets, ctx: &TimeContext) -> StatsResult {
    let price_now = price_now(&buckets.today, ctx);
    if price_now.is_none() {
        warn!(hour = %ctx.current_hour(), "No price for the current hour");
    }

    let today = aggregate(&buckets.today);

    // Tomorrow counts only once the whole day is published
    let expected_hours = ctx.hours_in_day(ctx.tomorrow());
    let tomorrow = if buckets.tomorrow.len() == expected_hours {
        aggregate(&buckets.tomorrow)
    } else {
        if !buckets.tomorrow.is_empty() {
            warn!(
                available = buckets.tomorrow.len(),
                expected = expected_hours,
                "Tomorrow's prices are incomplete, skipping statistics"
            );
        }
        BucketSummary::default()
    };

    let cheapest_windows = cheapest_windows(&buckets.future);

    debug!(
        price_now = ?price_now,
        today_mean = ?today.mean,
        tomorrow_mean = ?tomorrow.mean,
        upcoming = buckets.future.len(),
        "Computed price statistics"
    );

    StatsResult {
        current_hour: ctx.current_hour(),
        price_now,
        today,
        tomorrow,
        cheapest_windows,
        upcoming: buckets.future,
    }
}
