use crate::error::Result;
use crate::model::RawContribution;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// The contributions API envelope. Other top-level keys are ignored.
#[derive(Deserialize)]
struct Envelope {
    contributions: Vec<RawContribution>,
}

pub fn parse_records(text: &str) -> Result<Vec<RawContribution>> {
    if text.trim().is_empty() {
        debug!("Empty contributions payload");
        return Ok(Vec::new());
    }

    // Dispatch on the outer shape so errors point at the offending record.
    let records = if text.trim_start().starts_with('{') {
        serde_json::from_str::<Envelope>(text)?.contributions
    } else {
        serde_json::from_str::<Vec<RawContribution>>(text)?
    };
    Ok(records)
}

/// Read records from `path`, or from stdin when `path` is `None` or `-`.
pub fn load_records(path: Option<&Path>) -> Result<Vec<RawContribution>> {
    let text = match path {
        Some(p) if p != Path::new("-") => std::fs::read_to_string(p)?,
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let records = parse_records(&text)?;
    info!(count = records.len(), "Loaded contribution records");
    Ok(records)
}

pub fn describe(path: Option<&Path>) -> String {
    match path {
        Some(p) if p != Path::new("-") => p.to_string_lossy().to_string(),
        _ => "stdin".to_string(),
    }
}
