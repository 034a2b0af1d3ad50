use super::{build_calendar, normalize_raw, output_grid, output_json, output_ndjson, output_stats, ValidationMode};
use crate::cli::CommonArgs;
use crate::error::ContribError;
use crate::model::ContributionCalendar;
use crate::source::{describe, load_records};
use crate::util::candidate_years;
use anyhow::Context;
use chrono::{Datelike, Local, NaiveDate};
use tracing::info;

fn reference_date(common: &CommonArgs) -> NaiveDate {
    common.today.unwrap_or_else(|| Local::now().date_naive())
}

fn selected_year(common: &CommonArgs, today: NaiveDate) -> crate::error::Result<i32> {
    let year = common.year.unwrap_or_else(|| today.year());
    let years = candidate_years(today);
    if !years.contains(&year) {
        return Err(ContribError::InvalidYear {
            year,
            first: *years.start(),
            last: *years.end(),
        });
    }
    Ok(year)
}

fn prepare(common: &CommonArgs) -> anyhow::Result<ContributionCalendar> {
    let today = reference_date(common);
    let year = selected_year(common, today).context("Failed to select year")?;

    let raw = load_records(common.input.as_deref()).context("Failed to load contribution records")?;

    let mode = if common.lenient {
        ValidationMode::Lenient
    } else {
        ValidationMode::Strict
    };
    let index = normalize_raw(&raw, mode).context("Failed to normalize contribution records")?;

    info!(days = index.len(), year, %today, "Building calendar");
    Ok(build_calendar(&index, year, today, common.week_start))
}

pub fn exec(common: CommonArgs, json: bool, ndjson: bool, details: bool) -> anyhow::Result<()> {
    let calendar = prepare(&common)?;
    let source = describe(common.input.as_deref());

    if json {
        output_json(&calendar, &source, common.week_start)?;
    } else if ndjson {
        output_ndjson(&calendar.months)?;
    } else {
        output_grid(&calendar, common.week_start, details)?;
    }

    Ok(())
}

pub fn exec_stats(common: CommonArgs, json: bool) -> anyhow::Result<()> {
    let calendar = prepare(&common)?;
    let source = describe(common.input.as_deref());
    output_stats(&calendar.stats, calendar.selected_year, &source, json)
}

pub fn exec_years(common: CommonArgs) -> anyhow::Result<()> {
    let today = reference_date(&common);
    for year in candidate_years(today) {
        println!("{year}");
    }
    Ok(())
}
