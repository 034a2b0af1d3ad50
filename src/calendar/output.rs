use crate::model::{
    CalendarOutput, ContributionCalendar, IntensityTier, MonthWindow, StatsOutput, YearStats,
    SCHEMA_VERSION,
};
use crate::util::{weekday_labels, year_progress};
use anyhow::Result;
use chrono::{Utc, Weekday};
use console::{style, StyledObject};
use std::fmt::Write;

const PROGRESS_WIDTH: usize = 24;

pub fn output_json(calendar: &ContributionCalendar, source: &str, week_start: Weekday) -> Result<()> {
    let output = CalendarOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        source: source.to_string(),
        selected_year: calendar.selected_year,
        reference_date: calendar.reference_date,
        week_start: format!("{week_start:?}"),
        year_progress: year_progress(calendar.reference_date),
        months: calendar.months.clone(),
        stats: calendar.stats,
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

pub fn output_ndjson(months: &[MonthWindow]) -> Result<()> {
    for month in months {
        println!("{}", serde_json::to_string(month)?);
    }
    Ok(())
}

pub fn output_stats(stats: &YearStats, selected_year: i32, source: &str, json: bool) -> Result<()> {
    if json {
        let output = StatsOutput {
            version: SCHEMA_VERSION,
            generated_at: Utc::now(),
            source: source.to_string(),
            selected_year,
            stats: *stats,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", style(format!("Contributions in {selected_year}")).bold());
        println!("{}", "─".repeat(40));
        println!("{}", stats_line(stats));
    }
    Ok(())
}

pub fn output_grid(calendar: &ContributionCalendar, week_start: Weekday, details: bool) -> Result<()> {
    print!("{}", render_grid(calendar, week_start, details)?);
    Ok(())
}

fn tier_cell(tier: IntensityTier) -> StyledObject<&'static str> {
    match tier {
        IntensityTier::None => style("·").dim(),
        IntensityTier::Low => style("░").green(),
        IntensityTier::Medium => style("▒").green(),
        IntensityTier::High => style("▓").green().bright(),
        IntensityTier::Max => style("█").green().bright(),
    }
}

fn stats_line(stats: &YearStats) -> String {
    format!(
        "{} contributions   {} followers   {} pull requests",
        style(stats.total_contributions).cyan().bold(),
        style(stats.derived_followers).cyan(),
        style(stats.derived_pull_requests).cyan(),
    )
}

/// Terminal rendering: one block per month, then stats and legend.
pub fn render_grid(
    calendar: &ContributionCalendar,
    week_start: Weekday,
    details: bool,
) -> Result<String, std::fmt::Error> {
    let mut out = String::new();

    writeln!(
        out,
        "{}",
        style(format!("Contribution Activity {}", calendar.selected_year)).bold()
    )?;
    writeln!(out, "{}", "─".repeat(50))?;

    if calendar.months.is_empty() {
        writeln!(out, "No months of {} in the current window", calendar.selected_year)?;
    }

    let labels = weekday_labels(week_start).join(" ");
    for month in &calendar.months {
        writeln!(
            out,
            "\n{} {}  ({} contributions)",
            style(&month.name).bold(),
            month.year,
            month.total()
        )?;
        writeln!(out, "{}", style(&labels).dim())?;

        let mut column = 0u32;
        let mut line = String::new();
        for _ in 0..month.leading_blank_count {
            line.push_str("  ");
            column += 1;
        }
        for day in &month.days {
            write!(line, "{} ", tier_cell(day.tier()))?;
            column += 1;
            if column == 7 {
                writeln!(out, "{}", line.trim_end())?;
                line.clear();
                column = 0;
            }
        }
        if !line.is_empty() {
            writeln!(out, "{}", line.trim_end())?;
        }

        if details {
            for day in month.days.iter().filter(|d| d.count > 0) {
                writeln!(out, "  {}", day.tooltip())?;
            }
        }
    }

    let progress = year_progress(calendar.reference_date);
    let filled = (progress * PROGRESS_WIDTH as f64).round() as usize;
    writeln!(
        out,
        "\nYear progress {}{} {:.0}%",
        style("█".repeat(filled)).green(),
        style("░".repeat(PROGRESS_WIDTH - filled.min(PROGRESS_WIDTH))).dim(),
        progress * 100.0
    )?;

    writeln!(out, "\n{}", stats_line(&calendar.stats))?;

    let legend: Vec<String> = IntensityTier::ALL
        .iter()
        .map(|t| tier_cell(*t).to_string())
        .collect();
    writeln!(out, "\nLess {} More", legend.join(" "))?;

    Ok(out)
}
