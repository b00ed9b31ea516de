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

//! End-to-end statistics over raw feed entries, pinned to fixed instants.

use chrono::{NaiveDate, NaiveDateTime, TimeDelta, TimeZone, Utc};
use spothinta_core::{
    DEFAULT_TIMEZONE, FixedTimeSource, RawPricePoint, SeriesError, StatsOptions, TimeContext,
    cheapest_window_mean, compute_stats_raw,
};

const EPS: f64 = 1e-9;

fn local(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, 0, 0)
        .unwrap()
}

/// Hourly feed entries starting at `start`, one per price.
fn feed(start: NaiveDateTime, prices: &[f64]) -> Vec<RawPricePoint> {
    prices
        .iter()
        .zip(0..)
        .map(|(&price, h)| {
            let ts = start + TimeDelta::hours(h);
            RawPricePoint::new(ts.format("%d.%m.%Y %H:%M").to_string(), price)
        })
        .collect()
}

/// 15.1.2024 12:20 in Helsinki (10:20 UTC).
fn helsinki_noon() -> TimeContext {
    let source = FixedTimeSource(Utc.with_ymd_and_hms(2024, 1, 15, 10, 20, 0).unwrap());
    TimeContext::capture(&source, DEFAULT_TIMEZONE)
}

#[test]
fn test_today_stats_with_spike_at_current_hour() {
    let ctx = helsinki_noon();
    let mut prices = vec![10.0; 24];
    prices[12] = 12.5;
    let raw = feed(local(2024, 1, 15, 0), &prices);

    let stats = compute_stats_raw(&raw, &ctx, &StatsOptions::default()).unwrap();

    assert_eq!(stats.price_now, Some(12.5));
    assert_eq!(stats.today.max, Some(12.5));
    assert_eq!(stats.today.min, Some(10.0));
    assert!((stats.today.mean.unwrap() - 10.104_166_666_666_666).abs() < EPS);
    assert!(stats.tomorrow.is_empty());
}

#[test]
fn test_partial_tomorrow_is_not_summarized() {
    let ctx = helsinki_noon();
    let mut prices = vec![8.0; 24];
    prices.extend([1.0; 10]);
    let raw = feed(local(2024, 1, 15, 0), &prices);

    let stats = compute_stats_raw(&raw, &ctx, &StatsOptions::default()).unwrap();

    assert_eq!(stats.tomorrow.max, None);
    assert_eq!(stats.tomorrow.min, None);
    assert_eq!(stats.tomorrow.mean, None);
    // The published hours still count as upcoming
    assert_eq!(stats.upcoming.len(), 12 + 10);
}

#[test]
fn test_cheapest_windows_over_upcoming_hours() {
    let ctx = helsinki_noon();
    let raw = feed(local(2024, 1, 15, 12), &[5.0, 3.0, 8.0, 2.0, 2.0, 9.0]);

    let stats = compute_stats_raw(&raw, &ctx, &StatsOptions::default()).unwrap();

    let two = stats.cheapest_window(2).unwrap();
    assert_eq!(two.mean, Some(2.0));
    assert_eq!(two.start, Some(local(2024, 1, 15, 15)));

    let six = stats.cheapest_window(6).unwrap();
    assert!((six.mean.unwrap() - 29.0 / 6.0).abs() < EPS);
    assert_eq!(six.start, Some(local(2024, 1, 15, 12)));
}

#[test]
fn test_short_future_has_no_long_windows() {
    let ctx = helsinki_noon();
    let raw = feed(local(2024, 1, 15, 12), &[4.0, 5.0, 6.0]);

    let stats = compute_stats_raw(&raw, &ctx, &StatsOptions::default()).unwrap();

    assert_eq!(stats.cheapest_window(2).unwrap().mean, Some(4.5));
    assert_eq!(stats.cheapest_window(3).unwrap().mean, Some(5.0));
    for hours in 4..=6 {
        let window = stats.cheapest_window(hours).unwrap();
        assert_eq!(window.mean, None, "{hours}h window");
        assert_eq!(window.start, None);
    }
    assert_eq!(cheapest_window_mean(&[4.0, 5.0, 6.0], 6), None);
}

#[test]
fn test_negative_price_now() {
    let ctx = helsinki_noon();
    let raw = feed(local(2024, 1, 15, 11), &[0.4, -1.5, -0.2]);

    let stats = compute_stats_raw(&raw, &ctx, &StatsOptions::default()).unwrap();

    assert_eq!(stats.price_now, Some(-1.5));
    assert_eq!(stats.today.min, Some(-1.5));
    assert_eq!(stats.today.max, Some(0.4));
}

#[test]
fn test_past_hours_are_not_upcoming() {
    let ctx = helsinki_noon();
    let raw = feed(local(2024, 1, 14, 0), &[7.0; 72]);

    let stats = compute_stats_raw(&raw, &ctx, &StatsOptions::default()).unwrap();

    assert_eq!(stats.current_hour, local(2024, 1, 15, 12));
    assert_eq!(stats.upcoming.first().unwrap().timestamp, local(2024, 1, 15, 12));
    assert_eq!(stats.upcoming.last().unwrap().timestamp, local(2024, 1, 16, 23));
    assert_eq!(stats.tomorrow.mean, Some(7.0));
}

#[test]
fn test_malformed_timestamp_fails_loudly() {
    let ctx = helsinki_noon();
    let mut raw = feed(local(2024, 1, 15, 0), &[3.0; 24]);
    raw[5] = RawPricePoint::new("15.01.2024 5am", 3.0);

    let err = compute_stats_raw(&raw, &ctx, &StatsOptions::default()).unwrap_err();
    assert!(matches!(err, SeriesError::MalformedTimestamp { index: 5, .. }));
    assert!(err.to_string().contains("15.01.2024 5am"));
}

#[test]
fn test_tomorrow_with_dst_change_needs_25_hours() {
    // 26.10.2024 is the day before clocks go back in Helsinki
    let source = FixedTimeSource(Utc.with_ymd_and_hms(2024, 10, 26, 9, 0, 0).unwrap());
    let ctx = TimeContext::capture(&source, DEFAULT_TIMEZONE);

    // The repeated 03:00 hour shows up twice in wall-clock terms
    let mut raw = feed(local(2024, 10, 26, 0), &[6.0; 24]);
    raw.extend(feed(local(2024, 10, 27, 0), &[2.0; 4]));
    raw.push(RawPricePoint::new("27.10.2024 03:00", 2.0));
    raw.extend(feed(local(2024, 10, 27, 4), &[2.0; 20]));

    let stats = compute_stats_raw(&raw, &ctx, &StatsOptions::default()).unwrap();
    assert_eq!(stats.tomorrow.mean, Some(2.0));

    raw.pop();
    let stats = compute_stats_raw(&raw, &ctx, &StatsOptions::default()).unwrap();
    assert!(stats.tomorrow.is_empty());
}

#[test]
fn test_repeated_calls_are_identical() {
    let ctx = helsinki_noon();
    let raw = feed(local(2024, 1, 14, 0), &(0..72).map(f64::from).collect::<Vec<_>>());

    let first = compute_stats_raw(&raw, &ctx, &StatsOptions::default()).unwrap();
    let second = compute_stats_raw(&raw, &ctx, &StatsOptions::default()).unwrap();
    assert_eq!(first, second);
}
