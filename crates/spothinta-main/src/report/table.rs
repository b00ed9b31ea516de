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

//! Terminal tables.

use comfy_table::{Attribute, Cell, CellAlignment, Table, presets::UTF8_FULL};

use super::{StatRow, StatsView};

pub(super) fn render(view: &StatsView) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}\n\n", view.title));
    output.push_str(&stat_table(&view.today_heading, &view.today).to_string());
    output.push_str("\n\n");
    output.push_str(&stat_table(&view.tomorrow_heading, &view.tomorrow).to_string());
    output.push_str("\n\n");

    let mut periods = Table::new();
    periods.load_preset(UTF8_FULL);
    periods.set_header(vec![
        Cell::new(&view.periods_heading).add_attribute(Attribute::Bold),
        Cell::new(&view.period_start_header).add_attribute(Attribute::Bold),
        Cell::new(&view.period_price_header).add_attribute(Attribute::Bold),
    ]);
    for row in &view.periods {
        periods.add_row(vec![
            Cell::new(&row.label),
            Cell::new(&row.start),
            Cell::new(&row.price).set_alignment(CellAlignment::Right),
        ]);
    }
    output.push_str(&periods.to_string());
    output.push_str("\n\n");

    output.push_str(&format!("{}\n", view.upcoming_heading));
    let mut upcoming = Table::new();
    upcoming.load_preset(UTF8_FULL);
    upcoming.set_header(vec![
        Cell::new(&view.upcoming_day_header).add_attribute(Attribute::Bold),
        Cell::new(&view.upcoming_time_header).add_attribute(Attribute::Bold),
        Cell::new(&view.upcoming_price_header).add_attribute(Attribute::Bold),
    ]);
    for row in &view.upcoming {
        let mut price = Cell::new(&row.price).set_alignment(CellAlignment::Right);
        if row.is_current {
            price = price.add_attribute(Attribute::Bold);
        }
        upcoming.add_row(vec![Cell::new(&row.day), Cell::new(&row.time), price]);
    }
    output.push_str(&upcoming.to_string());
    output.push('\n');

    output
}

fn stat_table(heading: &str, rows: &[StatRow]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec![
        Cell::new(heading).add_attribute(Attribute::Bold),
        Cell::new(""),
    ]);
    for row in rows {
        table.add_row(vec![
            Cell::new(&row.label),
            Cell::new(&row.value).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}
