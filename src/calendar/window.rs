use crate::model::YearMonth;
use chrono::{Datelike, NaiveDate};

pub const WINDOW_MONTHS: u32 = 5;

/// The last `WINDOW_MONTHS` months ending at `today`'s month, oldest first.
pub fn trailing_months(today: NaiveDate) -> Vec<YearMonth> {
    let current_month = today.month0() as i32;

    (0..WINDOW_MONTHS as i32)
        .rev()
        .filter_map(|offset| {
            let mut target_month = current_month - offset;
            let mut target_year = today.year();
            if target_month < 0 {
                target_month += 12;
                target_year -= 1;
            }
            YearMonth::new(target_year, target_month as u32 + 1)
        })
        .collect()
}

/// Trailing window restricted to `selected_year`. Empty when no month of the window falls in it.
pub fn select_window(today: NaiveDate, selected_year: i32) -> Vec<YearMonth> {
    trailing_months(today)
        .into_iter()
        .filter(|m| m.year() == selected_year)
        .collect()
}
