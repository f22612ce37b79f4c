//! Runtime configuration for the race view, read from the environment.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use tracing::warn;

use crate::view::ViewOptions;

pub const DEFAULT_DATA_PATH: &str = "data/sample-chip-data.json";

/// How the view is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output format {other}")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ViewConfig {
    /// JSON data set to load (`RACE_DATA_PATH`).
    pub data_path: PathBuf,
    /// Selected athlete id; the first athlete is shown when unset (`RACE_ATHLETE`).
    pub athlete_id: Option<String>,
    /// Query time in seconds, clamped to the race clock on use (`RACE_TIME`).
    pub time_seconds: f64,
    /// Show lap and distance progress (`RACE_SHOW_LAPS`).
    pub show_laps: bool,
    /// Progress bar width in characters (`RACE_BAR_WIDTH`).
    pub bar_width: usize,
    /// `text` or `json` (`RACE_FORMAT`).
    pub format: OutputFormat,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            athlete_id: None,
            time_seconds: 0.0,
            show_laps: true,
            bar_width: 40,
            format: OutputFormat::default(),
        }
    }
}

impl ViewConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup, falling back to defaults
    /// for missing or unparseable values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            data_path: lookup("RACE_DATA_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_path),
            athlete_id: lookup("RACE_ATHLETE").filter(|id| !id.is_empty()),
            time_seconds: parse_or(&lookup, "RACE_TIME", defaults.time_seconds),
            show_laps: flag_or(&lookup, "RACE_SHOW_LAPS", defaults.show_laps),
            bar_width: parse_or(&lookup, "RACE_BAR_WIDTH", defaults.bar_width),
            format: parse_or(&lookup, "RACE_FORMAT", defaults.format),
        }
    }

    pub fn view_options(&self) -> ViewOptions {
        ViewOptions {
            show_laps: self.show_laps,
        }
    }
}

fn parse_or<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("Ignoring invalid {key}={raw:?}, using default");
            default
        }),
        None => default,
    }
}

/// Reads an on/off switch, accepting the usual spellings (`1`/`0`, `yes`/`no`,
/// `on`/`off`, `true`/`false`).
fn flag_or(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: bool) -> bool {
    let Some(raw) = lookup(key) else {
        return default;
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "y" | "on" => true,
        "0" | "false" | "no" | "n" | "off" => false,
        _ => {
            warn!("Ignoring invalid {key}={raw:?}, using default");
            default
        }
    }
}
