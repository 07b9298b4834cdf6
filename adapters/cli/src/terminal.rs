//! Text backend that writes the scene to any byte sink.

use std::io::Write;

use anyhow::{Context, Result};
use wordhex_rendering::{RenderingBackend, Scene};

/// Presents scenes as plain text.
#[derive(Debug)]
pub(crate) struct TerminalBackend<W> {
    out: W,
}

impl<W: Write> TerminalBackend<W> {
    pub(crate) fn new(out: W) -> Self {
        Self { out }
    }

    /// Writes a single informational line.
    pub(crate) fn message(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{text}").context("failed to write to terminal")?;
        self.out.flush().context("failed to flush terminal")
    }
}

impl<W: Write> RenderingBackend for TerminalBackend<W> {
    fn present(&mut self, scene: &Scene) -> Result<()> {
        self.out
            .write_all(scene.draw_text().as_bytes())
            .context("failed to draw scene")?;
        self.out.flush().context("failed to flush terminal")
    }
}
