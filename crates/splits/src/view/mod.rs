//! View model for the race progress display, and the presentation seam.
//!
//! [`ViewState::build`] turns an (athlete, time) pair into display-ready values
//! using the pure functions in [`crate::progress`] and [`crate::format`].
//! Anything that draws those values implements [`Renderer`].

mod json;
mod text;

pub use json::JsonRenderer;
pub use text::TextRenderer;

use serde::Serialize;

use crate::format::{format_percent, format_time};
use crate::models::{Athlete, RaceData};
use crate::progress::{
    LapProgress, find_segment_at, lap_and_distance, overall_progress, remaining, segment_progress,
};

/// Label shown when no segment is active at the query time.
pub const NO_SEGMENT_LABEL: &str = "Not started / finished";

#[derive(Debug, Clone)]
pub struct ViewOptions {
    /// Include lap and distance progress for the active segment.
    pub show_laps: bool,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self { show_laps: true }
    }
}

/// One entry in the segment list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentRow {
    pub name: String,
    pub duration_label: String,
    pub active: bool,
}

/// Overall race progress bar with one cell per segment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressBar {
    /// Fraction of the longest race clock elapsed, in `[0, 1]`
    pub fraction: f64,
    pub cells: Vec<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewState {
    pub athlete_name: String,
    pub current_time_label: String,
    pub max_time_label: String,
    pub segment_label: String,
    /// Progress through the active segment, in `[0, 1]`
    pub segment_progress: f64,
    pub progress_label: String,
    pub remaining_label: String,
    pub laps: Option<LapProgress>,
    pub rows: Vec<SegmentRow>,
    pub bar: ProgressBar,
}

impl ViewState {
    pub fn build(data: &RaceData, athlete: &Athlete, t: f64, options: &ViewOptions) -> Self {
        let max_time = data.max_end_time();
        let splits = &athlete.splits;

        let segment = find_segment_at(splits, t);
        let progress = segment_progress(segment, t);
        let laps = if options.show_laps {
            lap_and_distance(segment, t)
        } else {
            None
        };

        // Every containing split is highlighted, even where overlap means the
        // locator picked an earlier one.
        let rows = splits
            .iter()
            .map(|s| SegmentRow {
                name: s.name.clone(),
                duration_label: format_time(s.duration()),
                active: s.contains(t),
            })
            .collect();
        let cells = splits.iter().map(|s| s.contains(t)).collect();

        Self {
            athlete_name: athlete.name.clone(),
            current_time_label: format_time(t),
            max_time_label: format!("max {}", format_time(max_time)),
            segment_label: segment.map_or_else(|| NO_SEGMENT_LABEL.to_string(), |s| s.name.clone()),
            segment_progress: progress,
            progress_label: format_percent(progress),
            remaining_label: format_time(remaining(splits, t)),
            laps,
            rows,
            bar: ProgressBar {
                fraction: overall_progress(t, max_time),
                cells,
            },
        }
    }
}

/// Presentation interface: anything that can display a [`ViewState`].
pub trait Renderer {
    type Error;
    fn render(&mut self, view: &ViewState) -> Result<(), Self::Error>;
}
