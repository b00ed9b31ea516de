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
use spothinta_types::{PricePoint, RawPricePoint, SeriesError, TimeBucket};
use tracing::debug;

use crate::time_context::{TimeContext, calendar_date};

/// Number of trailing feed entries scanned by default. Three days of hourly
/// prices cover yesterday evening through tomorrow night.
pub const DEFAULT_TRAILING_WINDOW: usize = 72;

/// The price series split into its (overlapping) buckets, each in time order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Buckets {
    pub today: Vec<PricePoint>,
    pub tomorrow: Vec<PricePoint>,
    pub future: Vec<PricePoint>,
}

impl Buckets {
    fn bucket_mut(&mut self, bucket: TimeBucket) -> &mut Vec<PricePoint> {
        match bucket {
            TimeBucket::Today => &mut self.today,
            TimeBucket::Tomorrow => &mut self.tomorrow,
            TimeBucket::Future => &mut self.future,
        }
    }
}

/// Whether `timestamp` falls into `bucket` at the instant held by `ctx`.
#[must_use]
pub fn belongs_to(bucket: TimeBucket, timestamp: NaiveDateTime, ctx: &TimeContext) -> bool {
    match bucket {
        TimeBucket::Today => calendar_date(timestamp) == ctx.today(),
        TimeBucket::Tomorrow => calendar_date(timestamp) == ctx.tomorrow(),
        TimeBucket::Future => timestamp >= ctx.current_hour(),
    }
}

/// Split the trailing [`DEFAULT_TRAILING_WINDOW`] entries of `series`.
#[must_use]
pub fn partition(series: &[PricePoint], ctx: &TimeContext) -> Buckets {
    partition_trailing(series, ctx, DEFAULT_TRAILING_WINDOW)
}

/// Split the last `trailing_window` entries of `series` into buckets.
#[must_use]
pub fn partition_trailing(
    series: &[PricePoint],
    ctx: &TimeContext,
    trailing_window: usize,
) -> Buckets {
    let (_, window) = trailing(series, trailing_window);
    let mut buckets = Buckets::default();

    for point in window {
        for bucket in TimeBucket::ALL {
            if belongs_to(bucket, point.timestamp, ctx) {
                buckets.bucket_mut(bucket).push(*point);
            }
        }
    }

    debug!(
        scanned = window.len(),
        today = buckets.today.len(),
        tomorrow = buckets.tomorrow.len(),
        future = buckets.future.len(),
        "Partitioned price series"
    );

    buckets
}

/// Parse the trailing window of a raw feed and split it into buckets.
///
/// Fails on the first malformed timestamp inside the scanned window; the
/// reported index is relative to the whole feed.
pub fn partition_raw(
    raw: &[RawPricePoint],
    ctx: &TimeContext,
    trailing_window: usize,
) -> Result<Buckets, SeriesError> {
    let (offset, window) = trailing(raw, trailing_window);
    let points = window
        .iter()
        .enumerate()
        .map(|(i, entry)| PricePoint::from_raw(offset + i, entry))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(partition_trailing(&points, ctx, points.len()))
}

fn trailing<T>(series: &[T], window: usize) -> (usize, &[T]) {
    let offset = series.len().saturating_sub(window);
    (offset, &series[offset..])
}
