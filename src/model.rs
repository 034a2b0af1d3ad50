use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const SCHEMA_VERSION: u32 = 1;

/// A record exactly as it arrives from the contributions source, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawContribution {
    pub date: String,
    pub count: i64,
}

impl RawContribution {
    pub fn new(date: impl Into<String>, count: i64) -> Self {
        Self {
            date: date.into(),
            count,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionRecord {
    pub date: NaiveDate,
    pub count: u32,
}

impl ContributionRecord {
    pub fn new(date: NaiveDate, count: u32) -> Self {
        Self { date, count }
    }
}

/// Calendar date to count lookup. Later inserts for the same date replace earlier ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContributionIndex {
    counts: BTreeMap<NaiveDate, u32>,
}

impl ContributionIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, record: ContributionRecord) -> Option<u32> {
        self.counts.insert(record.date, record.count)
    }

    /// Count for `date`, zero when nothing was recorded.
    pub fn get(&self, date: &NaiveDate) -> u32 {
        self.counts.get(date).copied().unwrap_or(0)
    }

    pub fn contains(&self, date: &NaiveDate) -> bool {
        self.counts.contains_key(date)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NaiveDate, &u32)> {
        self.counts.iter()
    }

    /// Entries whose date falls in `year`, in date order.
    pub fn in_year(&self, year: i32) -> impl Iterator<Item = (&NaiveDate, &u32)> {
        let bounds = NaiveDate::from_ymd_opt(year, 1, 1).zip(NaiveDate::from_ymd_opt(year, 12, 31));
        bounds
            .map(|(first, last)| self.counts.range(first..=last))
            .into_iter()
            .flatten()
    }
}

impl FromIterator<ContributionRecord> for ContributionIndex {
    fn from_iter<I: IntoIterator<Item = ContributionRecord>>(iter: I) -> Self {
        let mut index = Self::new();
        for record in iter {
            index.insert(record);
        }
        index
    }
}

/// A calendar month, always anchored on its first day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    first: NaiveDate,
}

impl YearMonth {
    /// `month` is 1-based. Returns `None` when the month is out of range.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|first| Self { first })
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first: date - chrono::Duration::days(date.day0() as i64),
        }
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{:02}", self.year(), self.month())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntensityTier {
    None,
    Low,
    Medium,
    High,
    Max,
}

impl IntensityTier {
    pub const ALL: [IntensityTier; 5] = [
        IntensityTier::None,
        IntensityTier::Low,
        IntensityTier::Medium,
        IntensityTier::High,
        IntensityTier::Max,
    ];

    pub fn from_count(count: u32) -> Self {
        crate::calendar::classify(count)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCell {
    pub date: NaiveDate,
    pub count: u32,
    pub day_of_month: u32,
}

impl DayCell {
    pub fn tier(&self) -> IntensityTier {
        IntensityTier::from_count(self.count)
    }

    pub fn tooltip(&self) -> String {
        format!("{}: {} contributions", crate::util::date_key(&self.date), self.count)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthWindow {
    pub name: String,
    pub year: i32,
    pub month: u32,
    pub leading_blank_count: u32,
    pub days: Vec<DayCell>,
}

impl MonthWindow {
    pub fn total(&self) -> u64 {
        self.days.iter().map(|d| d.count as u64).sum()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearStats {
    pub total_contributions: u64,
    pub derived_followers: u64,
    pub derived_pull_requests: u64,
}

/// Everything the renderer needs for one selected year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionCalendar {
    pub selected_year: i32,
    pub reference_date: NaiveDate,
    pub months: Vec<MonthWindow>,
    pub stats: YearStats,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub source: String,
    pub selected_year: i32,
    pub reference_date: NaiveDate,
    pub week_start: String,
    pub year_progress: f64,
    pub months: Vec<MonthWindow>,
    pub stats: YearStats,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub source: String,
    pub selected_year: i32,
    pub stats: YearStats,
}
