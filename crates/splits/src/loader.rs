//! Loading and validation of race data sets.
//!
//! Malformed data fails the load with a [`LoadError`]. Conditions that are
//! suspicious but still renderable, such as overlapping splits, are reported as
//! [`DataWarning`]s and logged.

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use tracing::{info, warn};

use crate::errors::LoadError;
use crate::models::{Athlete, RaceData, Segment};

/// A non-fatal data-quality finding.
#[derive(Debug, Clone, PartialEq)]
pub enum DataWarning {
    /// `second` starts before `first` ends. Lookups keep resolving to `first`.
    Overlap {
        athlete: String,
        first: String,
        second: String,
    },
    EmptySplits { athlete: String },
}

impl fmt::Display for DataWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataWarning::Overlap {
                athlete,
                first,
                second,
            } => write!(f, "athlete {athlete}: segment {second} overlaps {first}"),
            DataWarning::EmptySplits { athlete } => {
                write!(f, "athlete {athlete} has no recorded splits")
            }
        }
    }
}

/// A validated data set together with any data-quality warnings.
#[derive(Debug, Clone)]
pub struct LoadReport {
    pub data: RaceData,
    pub warnings: Vec<DataWarning>,
}

/// Reads, parses and validates a data set from a JSON file.
pub fn load_file(path: impl AsRef<Path>) -> Result<LoadReport, LoadError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    let report = load_str(&content)?;
    info!(
        "Loaded {} athletes from {}",
        report.data.athletes.len(),
        path.display()
    );
    Ok(report)
}

/// Parses and validates a data set from a JSON string.
pub fn load_str(content: &str) -> Result<LoadReport, LoadError> {
    let data: RaceData = serde_json::from_str(content)?;
    validate(data)
}

/// Validates an already-parsed data set.
pub fn validate(data: RaceData) -> Result<LoadReport, LoadError> {
    if data.athletes.is_empty() {
        return Err(LoadError::NoAthletes);
    }

    let mut seen = HashSet::new();
    let mut warnings = Vec::new();

    for athlete in &data.athletes {
        if !seen.insert(athlete.id.as_str()) {
            return Err(LoadError::DuplicateAthlete(athlete.id.clone()));
        }
        validate_athlete(athlete, &mut warnings)?;
    }

    for warning in &warnings {
        warn!("Data quality: {warning}");
    }

    Ok(LoadReport { data, warnings })
}

fn validate_athlete(athlete: &Athlete, warnings: &mut Vec<DataWarning>) -> Result<(), LoadError> {
    if athlete.splits.is_empty() {
        warnings.push(DataWarning::EmptySplits {
            athlete: athlete.id.clone(),
        });
        return Ok(());
    }

    let context = |segment: &Segment| (athlete.id.clone(), segment.name.clone());
    let valid_time = |t: f64| t.is_finite() && t >= 0.0;

    let mut previous: Option<&Segment> = None;
    // Segment with the latest end so far; later splits starting before it
    // are shadowed by first-match lookup.
    let mut latest: Option<&Segment> = None;
    for segment in &athlete.splits {
        if !valid_time(segment.start) || !valid_time(segment.end) {
            let (athlete, segment) = context(segment);
            return Err(LoadError::InvalidTime { athlete, segment });
        }
        if segment.end < segment.start {
            let (athlete, segment) = context(segment);
            return Err(LoadError::EndBeforeStart { athlete, segment });
        }
        let km = segment.distance_km();
        if !(km.is_finite() && km >= 0.0) {
            let (athlete, segment) = context(segment);
            return Err(LoadError::InvalidDistance { athlete, segment });
        }

        if previous.is_some_and(|prev| segment.start < prev.start) {
            let (athlete, segment) = context(segment);
            return Err(LoadError::OutOfOrder { athlete, segment });
        }
        if let Some(longest) = latest {
            if segment.start < longest.end {
                warnings.push(DataWarning::Overlap {
                    athlete: athlete.id.clone(),
                    first: longest.name.clone(),
                    second: segment.name.clone(),
                });
            }
            if segment.end > longest.end {
                latest = Some(segment);
            }
        } else {
            latest = Some(segment);
        }
        previous = Some(segment);
    }

    Ok(())
}
