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

//! Cheapest contiguous windows of upcoming hours.

use std::ops::RangeInclusive;

use spothinta_types::{CheapestWindow, PricePoint};
use tracing::debug;

/// Window lengths (hours) searched for the cheapest upcoming period.
pub const WINDOW_LENGTHS: RangeInclusive<usize> = 2..=6;

/// Position and mean of the cheapest window found in a price slice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowMatch {
    pub start_index: usize,
    pub mean: f64,
}

/// Find the contiguous window of `window_len` prices with the lowest mean.
///
/// Returns `None` when `window_len` is zero or longer than `prices`. Ties go to
/// the earliest window.
#[must_use]
pub fn cheapest_window_match(prices: &[f64], window_len: usize) -> Option<WindowMatch> {
    if window_len == 0 || window_len > prices.len() {
        return None;
    }

    // Sliding sum for the scan, exact re-summation for the winner
    let mut sum: f64 = prices[..window_len].iter().sum();
    let mut best = (0, sum);

    for start in 1..=prices.len() - window_len {
        sum += prices[start + window_len - 1] - prices[start - 1];
        if sum < best.1 {
            best = (start, sum);
        }
    }

    let start_index = best.0;
    let exact: f64 = prices[start_index..start_index + window_len].iter().sum();

    #[expect(
        clippy::cast_precision_loss,
        reason = "window length is a handful of hours"
    )]
    let mean = exact / window_len as f64;

    Some(WindowMatch { start_index, mean })
}

/// Lowest mean over all contiguous windows of `window_len` prices.
#[must_use]
pub fn cheapest_window_mean(prices: &[f64], window_len: usize) -> Option<f64> {
    cheapest_window_match(prices, window_len).map(|m| m.mean)
}

/// Cheapest `hours`-long run within `points`, with its start time.
#[must_use]
pub fn cheapest_window(points: &[PricePoint], hours: usize) -> CheapestWindow {
    let prices: Vec<f64> = points.iter().map(|p| p.price).collect();
    match cheapest_window_match(&prices, hours) {
        Some(found) => CheapestWindow {
            hours,
            start: points.get(found.start_index).map(|p| p.timestamp),
            mean: Some(found.mean),
        },
        None => CheapestWindow::absent(hours),
    }
}

/// Cheapest window for every length in [`WINDOW_LENGTHS`].
#[must_use]
pub fn cheapest_windows(points: &[PricePoint]) -> Vec<CheapestWindow> {
    WINDOW_LENGTHS
        .map(|hours| {
            let window = cheapest_window(points, hours);
            debug!(hours, mean = ?window.mean, start = ?window.start, "Cheapest window");
            window
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeDelta};

    /// Reference implementation: average every window and take the minimum
    fn naive(prices: &[f64], w: usize) -> Option<f64> {
        if w == 0 || w > prices.len() {
            return None;
        }
        prices
            .windows(w)
            .map(|win| win.iter().sum::<f64>() / win.len() as f64)
            .reduce(f64::min)
    }

    #[test]
    fn test_two_hour_window() {
        let prices = [5.0, 3.0, 8.0, 2.0, 2.0, 9.0];
        let found = cheapest_window_match(&prices, 2).unwrap();
        assert_eq!(found.start_index, 3);
        assert!((found.mean - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_window_longer_than_series() {
        assert_eq!(cheapest_window_mean(&[1.0, 2.0, 3.0], 6), None);
        assert_eq!(cheapest_window_mean(&[], 1), None);
        for w in 1..=8 {
            let prices = vec![1.0; w - 1];
            assert_eq!(cheapest_window_mean(&prices, w), None);
        }
    }

    #[test]
    fn test_zero_length_window() {
        assert_eq!(cheapest_window_mean(&[1.0, 2.0], 0), None);
    }

    #[test]
    fn test_window_equal_to_series_is_plain_mean() {
        let mean = cheapest_window_mean(&[1.0, 2.0, 6.0], 3).unwrap();
        assert!((mean - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_ties_pick_earliest_window() {
        let found = cheapest_window_match(&[1.0, 1.0, 5.0, 1.0, 1.0], 2).unwrap();
        assert_eq!(found.start_index, 0);
    }

    #[test]
    fn test_negative_prices() {
        let mean = cheapest_window_mean(&[0.5, -2.0, -1.0, 3.0], 2).unwrap();
        assert!((mean + 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_matches_naive_search() {
        let prices = [
            7.31, 6.02, 5.55, 4.98, 5.12, 6.87, 9.44, 12.01, 11.5, 8.76, 6.3, 4.4, 3.98, 3.1,
            -0.42, -1.05, 0.0, 2.75, 7.8, 14.62, 18.3, 15.07, 10.2, 8.89,
        ];
        for w in 1..=prices.len() + 1 {
            let fast = cheapest_window_mean(&prices, w);
            let slow = naive(&prices, w);
            match (fast, slow) {
                (Some(a), Some(b)) => assert!((a - b).abs() < 1e-9, "w={w}: {a} vs {b}"),
                (None, None) => {}
                other => panic!("w={w}: {other:?}"),
            }
        }
    }

    #[test]
    fn test_appending_new_maximum_keeps_minimum() {
        let mut prices = vec![4.0, 2.5, 3.0, 8.0, 1.0, 6.5, 2.0];
        let before: Vec<_> = WINDOW_LENGTHS
            .map(|w| cheapest_window_mean(&prices, w))
            .collect();

        prices.push(100.0);
        for (w, old) in WINDOW_LENGTHS.zip(before) {
            if let Some(old) = old {
                let new = cheapest_window_mean(&prices, w).unwrap();
                assert!((new - old).abs() < 1e-12, "w={w}: {new} vs {old}");
            }
        }
    }

    #[test]
    fn test_cheapest_window_reports_start() {
        let start = NaiveDate::from_ymd_opt(2024, 4, 2)
            .unwrap()
            .and_hms_opt(14, 0, 0)
            .unwrap();
        let points: Vec<_> = [5.0, 3.0, 8.0, 2.0, 2.0, 9.0]
            .into_iter()
            .zip(0..)
            .map(|(price, h)| PricePoint::new(start + TimeDelta::hours(h), price))
            .collect();

        let window = cheapest_window(&points, 2);
        assert_eq!(window.start, Some(start + TimeDelta::hours(3)));
        assert_eq!(window.mean, Some(2.0));

        let windows = cheapest_windows(&points);
        assert_eq!(windows.len(), 5);
        assert_eq!(windows.iter().map(|w| w.hours).collect::<Vec<_>>(), vec![2, 3, 4, 5, 6]);
        assert!(windows[4].mean.is_some());

        let too_short = cheapest_windows(&points[..3]);
        assert_eq!(too_short[0].hours, 2);
        assert!(too_short[0].mean.is_some());
        assert_eq!(too_short[2], CheapestWindow::absent(4));
    }
}
