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
use askama::Template;

use super::StatsView;

#[derive(Debug, Template)]
#[template(path = "stats.html")]
struct StatsPage<'a> {
    view: &'a StatsView,
}

pub(super) fn render(view: &StatsView) -> Result<String> {
    StatsPage { view }
        .render()
        .context("Failed to render statistics page")
}
