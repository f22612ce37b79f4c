use thiserror::Error;

/// Failures that stop a data set from being loaded at all.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Data set contains no athletes")]
    NoAthletes,

    #[error("Duplicate athlete id: {0}")]
    DuplicateAthlete(String),

    #[error("Athlete {athlete}: segment {segment} has a negative or non-finite time")]
    InvalidTime { athlete: String, segment: String },

    #[error("Athlete {athlete}: segment {segment} ends before it starts")]
    EndBeforeStart { athlete: String, segment: String },

    #[error("Athlete {athlete}: segment {segment} starts before the previous segment")]
    OutOfOrder { athlete: String, segment: String },

    #[error("Athlete {athlete}: segment {segment} has a negative or non-finite distance")]
    InvalidDistance { athlete: String, segment: String },
}
