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

use std::path::Path;

use anyhow::{Context, Result, bail};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use spothinta_core::{DEFAULT_TRAILING_WINDOW, StatsOptions};
use spothinta_i18n::Language;
use tracing::info;

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Language and timezone of the report
    #[serde(default)]
    pub display: DisplayConfig,

    /// Statistics tunables
    #[serde(default)]
    pub stats: StatsConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub language: Language,

    /// IANA timezone of the price feed's wall-clock timestamps
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsConfig {
    /// Trailing feed entries scanned for today/tomorrow/upcoming
    #[serde(default = "default_trailing_window_hours")]
    pub trailing_window_hours: usize,
}

fn default_timezone() -> String {
    "Europe/Helsinki".to_owned()
}

fn default_trailing_window_hours() -> usize {
    DEFAULT_TRAILING_WINDOW
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            timezone: default_timezone(),
        }
    }
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            trailing_window_hours: default_trailing_window_hours(),
        }
    }
}

impl AppConfig {
    /// Load from `path`, or fall back to defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                info!("No configuration file given, using defaults");
                let config = Self::default();
                config.validate()?;
                Ok(config)
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self =
            toml::from_str(&content).with_context(|| "Failed to parse config TOML")?;
        config.validate()?;
        info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.display.timezone.parse::<Tz>().is_err() {
            bail!(
                "display.timezone must be an IANA timezone name, got {:?}",
                self.display.timezone
            );
        }
        if self.stats.trailing_window_hours == 0 {
            bail!("stats.trailing_window_hours must be at least 1");
        }
        Ok(())
    }

    pub fn timezone(&self) -> Result<Tz> {
        self.display
            .timezone
            .parse::<Tz>()
            .map_err(|e| anyhow::anyhow!("Invalid timezone {:?}: {e}", self.display.timezone))
    }

    #[must_use]
    pub fn stats_options(&self) -> StatsOptions {
        StatsOptions {
            trailing_window: self.stats.trailing_window_hours,
        }
    }
}
