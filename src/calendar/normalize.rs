use crate::error::{ContribError, Result};
use crate::model::{ContributionIndex, ContributionRecord, RawContribution};
use crate::util::parse_date;
use tracing::{debug, warn};

/// What to do with a record whose date does not parse or whose count is negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValidationMode {
    /// The first invalid record fails the whole batch.
    #[default]
    Strict,
    /// Invalid records are dropped with a warning.
    Lenient,
}

impl RawContribution {
    /// Validate against the record's position in the input.
    pub fn validate(&self, index: usize) -> Result<ContributionRecord> {
        let date = parse_date(&self.date).ok_or_else(|| ContribError::InvalidDate {
            index,
            value: self.date.clone(),
        })?;

        if self.count < 0 {
            return Err(ContribError::NegativeCount {
                index,
                date: self.date.clone(),
                count: self.count,
            });
        }

        let count = u32::try_from(self.count).map_err(|_| ContribError::CountOverflow {
            index,
            date: self.date.clone(),
            count: self.count,
        })?;

        Ok(ContributionRecord::new(date, count))
    }
}

pub fn validate_records(raw: &[RawContribution], mode: ValidationMode) -> Result<Vec<ContributionRecord>> {
    let mut records = Vec::with_capacity(raw.len());
    let mut dropped = 0usize;

    for (i, r) in raw.iter().enumerate() {
        match r.validate(i) {
            Ok(record) => records.push(record),
            Err(e) if mode == ValidationMode::Lenient => {
                warn!("Dropping record: {e}");
                dropped += 1;
            }
            Err(e) => return Err(e),
        }
    }

    if dropped > 0 {
        warn!(dropped, kept = records.len(), "Some contribution records were invalid");
    }
    Ok(records)
}

/// Build the date lookup. On duplicate dates the later record wins.
pub fn normalize(records: &[ContributionRecord]) -> ContributionIndex {
    let mut index = ContributionIndex::new();
    let mut overwritten = 0usize;

    for record in records {
        if index.insert(*record).is_some() {
            overwritten += 1;
        }
    }

    if overwritten > 0 {
        debug!(overwritten, "Duplicate dates replaced by later records");
    }
    index
}

pub fn normalize_raw(raw: &[RawContribution], mode: ValidationMode) -> Result<ContributionIndex> {
    let records = validate_records(raw, mode)?;
    Ok(normalize(&records))
}
