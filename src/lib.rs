pub mod calendar;
pub mod cli;
pub mod error;
pub mod model;
pub mod source;
pub mod util;

pub use calendar::{build_calendar, classify, normalize, select_window, year_stats};
pub use error::{ContribError, Result};
pub use model::{
    ContributionCalendar, ContributionIndex, ContributionRecord, DayCell, IntensityTier,
    MonthWindow, RawContribution, YearMonth, YearStats,
};
