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

use crate::error::SeriesError;

/// Wall-clock format used by the price feed, e.g. `24.12.2023 17:00`.
pub const TIMESTAMP_FORMAT: &str = "%d.%m.%Y %H:%M";

// ============= Price Feed Types =============

/// One entry of the price feed exactly as delivered: `["DD.MM.YYYY HH:MM", price]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPricePoint(pub String, pub f64);

/// Hourly spot price in the local wall-clock time of the market.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Start of the hour this price applies to
    pub timestamp: NaiveDateTime,

    /// Price in cents per kWh, VAT included (may be negative)
    pub price: f64,
}

impl PricePoint {
    #[must_use]
    pub fn new(timestamp: NaiveDateTime, price: f64) -> Self {
        Self { timestamp, price }
    }

    /// Parse a raw feed entry. `index` is the position in the feed and only
    /// used for error reporting.
    pub fn from_raw(index: usize, raw: &RawPricePoint) -> Result<Self, SeriesError> {
        let timestamp = NaiveDateTime::parse_from_str(raw.0.trim(), TIMESTAMP_FORMAT).map_err(
            |source| SeriesError::MalformedTimestamp {
                index,
                raw: raw.0.clone(),
                source,
            },
        )?;
        Ok(Self::new(timestamp, raw.1))
    }
}

impl RawPricePoint {
    #[must_use]
    pub fn new(timestamp: impl Into<String>, price: f64) -> Self {
        Self(timestamp.into(), price)
    }
}
