use thiserror::Error;

pub type Result<T> = std::result::Result<T, ContribError>;

#[derive(Error, Debug)]
pub enum ContribError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid date in record {index}: {value:?}")]
    InvalidDate { index: usize, value: String },
    #[error("Negative count in record {index} ({date}): {count}")]
    NegativeCount { index: usize, date: String, count: i64 },
    #[error("Count out of range in record {index} ({date}): {count}")]
    CountOverflow { index: usize, date: String, count: i64 },
    #[error("Year {year} is not selectable (expected {first}..={last})")]
    InvalidYear { year: i32, first: i32, last: i32 },
}
