pub mod aggregate;
pub mod build;
pub mod classify;
pub mod exec;
pub mod normalize;
pub mod output;
pub mod window;

pub use aggregate::{year_stats, year_total, FOLLOWER_RATIO_PERCENT, PULL_REQUEST_RATIO_PERCENT};
pub use build::{build_calendar, build_month};
pub use classify::classify;
pub use exec::{exec, exec_stats, exec_years};
pub use normalize::{normalize, normalize_raw, validate_records, ValidationMode};
pub use output::{output_grid, output_json, output_ndjson, output_stats, render_grid};
pub use window::{select_window, trailing_months, WINDOW_MONTHS};
