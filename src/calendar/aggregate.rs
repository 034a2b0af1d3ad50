use crate::model::{ContributionIndex, YearStats};

/// Placeholder ratio: the source has no follower data, so it is approximated from activity.
pub const FOLLOWER_RATIO_PERCENT: u64 = 28;
/// Placeholder ratio, same caveat as followers.
pub const PULL_REQUEST_RATIO_PERCENT: u64 = 7;

pub fn year_total(index: &ContributionIndex, year: i32) -> u64 {
    index.in_year(year).map(|(_, &count)| count as u64).sum()
}

/// Rollup over every indexed day of `year`, not only the windowed months.
pub fn year_stats(index: &ContributionIndex, year: i32) -> YearStats {
    YearStats::from_total(year_total(index, year))
}

impl YearStats {
    pub fn from_total(total: u64) -> Self {
        Self {
            total_contributions: total,
            derived_followers: total.saturating_mul(FOLLOWER_RATIO_PERCENT) / 100,
            derived_pull_requests: total.saturating_mul(PULL_REQUEST_RATIO_PERCENT) / 100,
        }
    }
}
