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

use spothinta_types::{BucketSummary, PricePoint};

use crate::time_context::TimeContext;

/// Max, min and arithmetic mean of a bucket. An empty bucket yields an empty
/// summary rather than zeros.
#[must_use]
pub fn aggregate(bucket: &[PricePoint]) -> BucketSummary {
    let Some(first) = bucket.first() else {
        return BucketSummary::default();
    };

    let (min, max, sum) = bucket.iter().skip(1).fold(
        (first.price, first.price, first.price),
        |(min, max, sum), p| (min.min(p.price), max.max(p.price), sum + p.price),
    );

    #[expect(
        clippy::cast_precision_loss,
        reason = "bucket sizes are a few dozen points"
    )]
    // Rounding of the sum can push a flat bucket's mean just outside [min, max]
    let mean = (sum / bucket.len() as f64).clamp(min, max);

    BucketSummary {
        max: Some(max),
        min: Some(min),
        mean: Some(mean),
    }
}

/// Price of the current hour, looked up in today's bucket.
#[must_use]
pub fn price_now(today: &[PricePoint], ctx: &TimeContext) -> Option<f64> {
    let current_hour = ctx.current_hour();
    today
        .iter()
        .find(|p| p.timestamp == current_hour)
        .map(|p| p.price)
}
