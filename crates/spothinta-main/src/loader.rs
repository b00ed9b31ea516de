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

//! Loading the pre-fetched price feed.

use std::path::Path;

use anyhow::{Context, Result};
use spothinta_types::RawPricePoint;
use tracing::info;

/// Read a JSON feed of `["DD.MM.YYYY HH:MM", price]` pairs.
pub fn load_feed(path: &Path) -> Result<Vec<RawPricePoint>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read price feed: {}", path.display()))?;
    let feed = parse_feed(&content)
        .with_context(|| format!("Failed to parse price feed: {}", path.display()))?;

    info!(
        path = %path.display(),
        entries = feed.len(),
        last = feed.last().map(|p| p.0.as_str()),
        "Loaded price feed"
    );
    Ok(feed)
}

pub fn parse_feed(json: &str) -> Result<Vec<RawPricePoint>, serde_json::Error> {
    serde_json::from_str(json)
}
