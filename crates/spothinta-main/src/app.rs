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

use anyhow::{Context, Result};
use tracing::{debug, info};

use spothinta_core::{
    FixedTimeSource, SystemTimeSource, TimeContext, TimeSource, compute_stats_raw,
};
use spothinta_i18n::I18n;

use crate::cli::Cli;
use crate::config::AppConfig;
use crate::loader::load_feed;
use crate::report;

/// Load the feed, compute the statistics and write the report.
pub fn run(cli: &Cli) -> Result<()> {
    let report = build_report(cli)?;

    match &cli.output {
        Some(path) => {
            std::fs::write(path, &report)
                .with_context(|| format!("Failed to write report: {}", path.display()))?;
            info!(path = %path.display(), "Report written");
        }
        None => print!("{report}"),
    }

    Ok(())
}

/// Everything [`run`] does except writing the output.
pub fn build_report(cli: &Cli) -> Result<String> {
    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(language) = cli.lang {
        config.display.language = language;
    }

    let tz = config.timezone()?;
    let source: Box<dyn TimeSource> = match cli.now {
        Some(now) => Box::new(FixedTimeSource(now)),
        None => Box::new(SystemTimeSource),
    };
    let ctx = TimeContext::capture(source.as_ref(), tz);
    debug!(now = %ctx.now(), timezone = %tz, "Time context captured");

    let feed = load_feed(&cli.data)?;
    let stats = compute_stats_raw(&feed, &ctx, &config.stats_options())
        .with_context(|| format!("Invalid price feed: {}", cli.data.display()))?;
    info!(
        current_hour = %stats.current_hour,
        upcoming = stats.upcoming.len(),
        "Statistics computed"
    );

    let i18n = I18n::new(config.display.language)?;
    report::render(&stats, &i18n, cli.format)
}
