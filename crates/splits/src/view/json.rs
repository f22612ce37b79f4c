//! JSON rendering of the race view, for scripts and other front ends.

use std::io::Write;

use super::{Renderer, ViewState};

/// Writes each view as one pretty-printed JSON document followed by a newline.
pub struct JsonRenderer<W: Write> {
    out: W,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for JsonRenderer<W> {
    type Error = serde_json::Error;

    fn render(&mut self, view: &ViewState) -> Result<(), Self::Error> {
        serde_json::to_writer_pretty(&mut self.out, view)?;
        writeln!(self.out).map_err(serde_json::Error::io)?;
        self.out.flush().map_err(serde_json::Error::io)
    }
}
