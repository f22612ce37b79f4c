//! Race progress over recorded split times.
//!
//! Given an athlete's ordered splits and a query time, the [`progress`] module
//! locates the active segment and derives segment progress, lap, distance and
//! remaining time. [`view`] turns those into display values and hands them to
//! a [`view::Renderer`].
//!
//! ```rust
//! use splits::models::Segment;
//! use splits::progress::{find_segment_at, segment_progress};
//!
//! let splits = vec![
//!     Segment::new("Swim", 0.0, 1800.0),
//!     Segment::new("Bike", 1800.0, 5400.0),
//! ];
//! let active = find_segment_at(&splits, 2700.0);
//! assert_eq!(active.map(|s| s.name.as_str()), Some("Bike"));
//! assert_eq!(segment_progress(active, 2700.0), 0.25);
//! ```

pub mod config;
pub mod errors;
pub mod format;
pub mod loader;
pub mod models;
pub mod progress;
pub mod view;

use std::io::Write;

use tracing::debug;

use crate::config::{OutputFormat, ViewConfig};
use crate::models::RaceData;
use crate::view::{JsonRenderer, Renderer, TextRenderer, ViewState};

/// Renders the configured athlete and time from `data` into `out`, in the
/// configured output format.
///
/// The query time is clamped to the race clock first. Returns `Ok(false)` when
/// the data set has no athlete to show.
pub fn render(data: &RaceData, config: &ViewConfig, out: impl Write) -> std::io::Result<bool> {
    let Some(athlete) = data.select(config.athlete_id.as_deref()) else {
        return Ok(false);
    };
    let t = data.clamp_time(config.time_seconds);
    debug!("Rendering athlete {} at t={t}", athlete.id);

    let view = ViewState::build(data, athlete, t, &config.view_options());
    match config.format {
        OutputFormat::Text => TextRenderer::new(out)
            .with_bar_width(config.bar_width)
            .render(&view)?,
        OutputFormat::Json => JsonRenderer::new(out).render(&view)?,
    }
    Ok(true)
}
