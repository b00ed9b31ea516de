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

//! Presentation of computed statistics: localized strings, then text, JSON or
//! HTML output.

mod html;
mod table;

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use spothinta_i18n::{I18n, I18nError, PriceFormat};
use spothinta_types::StatsResult;

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Terminal tables
    Text,
    /// Raw numbers, `null` for missing values
    Json,
    /// Standalone HTML page with the statistics tables
    Html,
}

/// A label/value row of the today/tomorrow tables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatRow {
    pub label: String,
    pub value: String,
}

/// One cheapest-period row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodRow {
    pub label: String,
    pub start: String,
    pub price: String,
}

/// One upcoming-hour row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingRow {
    pub day: String,
    pub time: String,
    pub price: String,
    pub is_current: bool,
}

/// Fully localized statistics, ready for any output format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsView {
    pub lang: String,
    pub title: String,
    pub today_heading: String,
    pub today: Vec<StatRow>,
    pub tomorrow_heading: String,
    pub tomorrow: Vec<StatRow>,
    pub periods_heading: String,
    pub period_start_header: String,
    pub period_price_header: String,
    pub periods: Vec<PeriodRow>,
    pub upcoming_heading: String,
    pub upcoming_day_header: String,
    pub upcoming_time_header: String,
    pub upcoming_price_header: String,
    pub upcoming: Vec<UpcomingRow>,
}

impl StatsView {
    pub fn build(stats: &StatsResult, i18n: &I18n) -> Result<Self, I18nError> {
        let fmt = PriceFormat::from_i18n(i18n)?;
        let row = |key: &str, value: Option<f64>| -> Result<StatRow, I18nError> {
            Ok(StatRow {
                label: i18n.get(key)?,
                value: fmt.price(value),
            })
        };

        let today = vec![
            row("price-now", stats.price_now)?,
            row("price-max", stats.today.max)?,
            row("price-min", stats.today.min)?,
            row("price-mean", stats.today.mean)?,
        ];
        let tomorrow = vec![
            row("price-max", stats.tomorrow.max)?,
            row("price-min", stats.tomorrow.min)?,
            row("price-mean", stats.tomorrow.mean)?,
        ];

        let periods = stats
            .cheapest_windows
            .iter()
            .map(|window| {
                Ok(PeriodRow {
                    label: i18n.cheapest_period_label(window.hours)?,
                    start: window.start.map_or_else(
                        || fmt.placeholder.clone(),
                        |start| start_label(start, stats.current_hour),
                    ),
                    price: fmt.price(window.mean),
                })
            })
            .collect::<Result<Vec<_>, I18nError>>()?;

        let upcoming = stats
            .upcoming
            .iter()
            .map(|point| UpcomingRow {
                day: point.timestamp.format("%d.%m.%Y").to_string(),
                time: point.timestamp.format("%H:%M").to_string(),
                price: fmt.price(Some(point.price)),
                is_current: point.timestamp == stats.current_hour,
            })
            .collect();

        Ok(Self {
            lang: i18n.language().code().to_owned(),
            title: i18n.get("page-title")?,
            today_heading: i18n.get("today-heading")?,
            today,
            tomorrow_heading: i18n.get("tomorrow-heading")?,
            tomorrow,
            periods_heading: i18n.get("periods-heading")?,
            period_start_header: i18n.get("period-start")?,
            period_price_header: i18n.get("period-price")?,
            periods,
            upcoming_heading: i18n.get("upcoming-heading")?,
            upcoming_day_header: i18n.get("upcoming-day")?,
            upcoming_time_header: i18n.get("upcoming-time")?,
            upcoming_price_header: i18n.get("upcoming-price")?,
            upcoming,
        })
    }
}

/// Start of a cheapest period: time only when it is today, otherwise with date.
fn start_label(start: NaiveDateTime, current_hour: NaiveDateTime) -> String {
    if start.date() == current_hour.date() {
        start.format("%H:%M").to_string()
    } else {
        start.format("%d.%m. %H:%M").to_string()
    }
}

/// Render `stats` in the requested format.
pub fn render(stats: &StatsResult, i18n: &I18n, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(stats).context("Failed to serialize statistics")
        }
        OutputFormat::Text => {
            let view = StatsView::build(stats, i18n)?;
            Ok(table::render(&view))
        }
        OutputFormat::Html => {
            let view = StatsView::build(stats, i18n)?;
            html::render(&view)
        }
    }
}
