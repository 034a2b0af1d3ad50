use super::{select_window, year_stats};
use crate::model::{ContributionCalendar, ContributionIndex, DayCell, MonthWindow, YearMonth};
use crate::util::{days_in_month, month_name, weekday_offset};
use chrono::{Datelike, NaiveDate, Weekday};
use tracing::{debug, trace};

pub fn build_month(month: YearMonth, index: &ContributionIndex, week_start: Weekday) -> MonthWindow {
    let first = month.first_day();
    let len = days_in_month(month.year(), month.month());

    let days: Vec<DayCell> = first
        .iter_days()
        .take(len as usize)
        .map(|date| DayCell {
            date,
            count: index.get(&date),
            day_of_month: date.day(),
        })
        .collect();

    trace!(month = %month, days = days.len(), "built month grid");

    MonthWindow {
        name: month_name(month.month()).to_string(),
        year: month.year(),
        month: month.month(),
        leading_blank_count: weekday_offset(first, week_start),
        days,
    }
}

/// Month grids and year rollup for `selected_year`, as seen from `today`.
pub fn build_calendar(
    index: &ContributionIndex,
    selected_year: i32,
    today: NaiveDate,
    week_start: Weekday,
) -> ContributionCalendar {
    let months: Vec<MonthWindow> = select_window(today, selected_year)
        .into_iter()
        .map(|m| build_month(m, index, week_start))
        .collect();

    let stats = year_stats(index, selected_year);

    debug!(
        selected_year,
        %today,
        months = months.len(),
        total = stats.total_contributions,
        "built contribution calendar"
    );

    ContributionCalendar {
        selected_year,
        reference_date: today,
        months,
        stats,
    }
}
