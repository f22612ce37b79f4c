//! Plain-text rendering of the race view.

use std::io::{self, Write};

use super::{ProgressBar, Renderer, ViewState};
use crate::format::{format_distance, format_percent};

const ACTIVE_MARKER: &str = " • in progress";

/// Writes the view as plain text to any writer.
pub struct TextRenderer<W: Write> {
    out: W,
    bar_width: usize,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out, bar_width: 40 }
    }

    pub fn with_bar_width(mut self, width: usize) -> Self {
        self.bar_width = width.max(1);
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn render_bar(&mut self, bar: &ProgressBar) -> io::Result<()> {
        let filled = ((bar.fraction * self.bar_width as f64).round() as usize).min(self.bar_width);
        writeln!(
            self.out,
            "[{}{}] {}",
            "#".repeat(filled),
            "-".repeat(self.bar_width - filled),
            format_percent(bar.fraction)
        )?;

        let cells: String = bar
            .cells
            .iter()
            .map(|&active| if active { "[*]" } else { "[ ]" })
            .collect();
        writeln!(self.out, "{cells}")
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    type Error = io::Error;

    fn render(&mut self, view: &ViewState) -> io::Result<()> {
        writeln!(self.out, "{}", view.athlete_name)?;
        writeln!(
            self.out,
            "Time       {} ({})",
            view.current_time_label, view.max_time_label
        )?;
        writeln!(self.out, "Segment    {}", view.segment_label)?;
        writeln!(self.out, "Progress   {}", view.progress_label)?;
        writeln!(self.out, "Remaining  {}", view.remaining_label)?;
        if let Some(laps) = &view.laps {
            writeln!(self.out, "Lap        {}/{}", laps.current_lap, laps.total_laps)?;
            writeln!(
                self.out,
                "Distance   {} / {}",
                format_distance(laps.distance_covered_km),
                format_distance(laps.total_distance_km)
            )?;
        }

        writeln!(self.out)?;
        self.render_bar(&view.bar)?;

        writeln!(self.out)?;
        writeln!(self.out, "Splits")?;
        let name_width = view.rows.iter().map(|r| r.name.chars().count()).max().unwrap_or(0);
        for row in &view.rows {
            writeln!(
                self.out,
                "  {:<name_width$}  {}{}",
                row.name,
                row.duration_label,
                if row.active { ACTIVE_MARKER } else { "" }
            )?;
        }
        self.out.flush()
    }
}
