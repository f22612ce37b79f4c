//! Configuration types for sample data generation.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unknown course preset: {0} (expected sprint, olympic, marathon or track10k)")]
    UnknownCourse(String),

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

/// Pre-defined race courses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CoursePreset {
    /// 750 m swim, 20 km bike, 5 km run.
    Sprint,
    /// 1.5 km swim, 40 km bike, 10 km run.
    #[default]
    Olympic,
    /// 42.2 km road run split at the 10 km, half and 30 km mats.
    Marathon,
    /// 25 laps of a 400 m track.
    Track10k,
}

impl FromStr for CoursePreset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sprint" => Ok(Self::Sprint),
            "olympic" => Ok(Self::Olympic),
            "marathon" => Ok(Self::Marathon),
            "track10k" | "track" => Ok(Self::Track10k),
            other => Err(ConfigError::UnknownCourse(other.to_string())),
        }
    }
}

/// Distribution for skill levels (scales every leg time of an athlete).
#[derive(Debug, Clone, Copy)]
pub enum SkillDistribution {
    /// Uniform distribution - equal probability across skill range.
    Uniform,
    /// Normal distribution with specified mean and std deviation.
    Normal { mean: f64, std_dev: f64 },
    /// Log-normal with a heavy right tail: few elite, many average.
    PowerLaw { alpha: f64 },
}

impl Default for SkillDistribution {
    fn default() -> Self {
        Self::power_law()
    }
}

impl SkillDistribution {
    pub fn power_law() -> Self {
        Self::PowerLaw { alpha: 2.0 }
    }
}

/// Configuration for a generation run.
#[derive(Debug, Clone)]
pub struct GenConfig {
    /// Number of athletes (`RACE_ATHLETES`).
    pub athlete_count: usize,
    /// Course to generate splits for (`RACE_COURSE`).
    pub course: CoursePreset,
    /// RNG seed for reproducible output (`RACE_SEED`).
    pub seed: Option<u64>,
    /// Chance that a split is preceded by a timing gap (`RACE_GAP_PROBABILITY`).
    pub gap_probability: f64,
    /// Output path, stdout when unset or `-` (`RACE_OUTPUT`).
    pub output: Option<PathBuf>,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            athlete_count: 10,
            course: CoursePreset::default(),
            seed: None,
            gap_probability: 0.0,
            output: None,
        }
    }
}

impl GenConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = lookup("RACE_ATHLETES") {
            config.athlete_count = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: "RACE_ATHLETES",
                value: raw.clone(),
            })?;
        }
        if let Some(raw) = lookup("RACE_COURSE") {
            config.course = raw.parse()?;
        }
        if let Some(raw) = lookup("RACE_SEED") {
            let seed = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: "RACE_SEED",
                value: raw.clone(),
            })?;
            config.seed = Some(seed);
        }
        if let Some(raw) = lookup("RACE_GAP_PROBABILITY") {
            let probability: f64 = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: "RACE_GAP_PROBABILITY",
                value: raw.clone(),
            })?;
            if !(0.0..=1.0).contains(&probability) {
                return Err(ConfigError::InvalidValue {
                    key: "RACE_GAP_PROBABILITY",
                    value: raw,
                });
            }
            config.gap_probability = probability;
        }
        config.output = lookup("RACE_OUTPUT")
            .filter(|p| !p.is_empty() && p != "-")
            .map(PathBuf::from);

        Ok(config)
    }
}
