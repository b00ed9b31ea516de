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

//! CLI argument definitions using clap.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::Parser;
use spothinta_i18n::Language;

use crate::report::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "spothinta")]
#[command(author, version, about = "Hourly electricity spot price statistics")]
#[command(
    long_about = "Reads a spot price feed (JSON array of [\"DD.MM.YYYY HH:MM\", price] pairs)\n\
    and prints today's and tomorrow's price statistics, the cheapest upcoming\n\
    2-6 hour periods and the upcoming hours.\n\
    \nExamples:\n  \
    spothinta --data spotdata.json\n  \
    spothinta --data spotdata.json --format html --output stats.html\n  \
    spothinta --data spotdata.json --now 2024-01-15T10:20:00Z --lang en"
)]
pub struct Cli {
    /// Price feed to read
    #[arg(long, default_value = "spotdata.json")]
    pub data: PathBuf,

    /// TOML configuration file (defaults are used when omitted)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Compute the report for this instant (RFC 3339) instead of the system clock
    #[arg(long)]
    pub now: Option<DateTime<Utc>>,

    /// Report language (fi, en), overrides the configuration
    #[arg(long)]
    pub lang: Option<Language>,
}
