//! # Terminal Sink
//!
//! Development-mode rendering: draws each transmitted frame as a 5x5 block
//! of truecolor ANSI cells on stdout, redrawing in place so an animation
//! reads like the real matrix. Lets the whole rendering and state-machine
//! stack run on a desktop with no hardware attached.

use crate::surface::{physical_index, PixelSink, SinkError, CELLS, SIDE};
use crate::{Pixel, MAX_CHANNEL};
use std::io::{self, Write};

/// Renders frames as ANSI blocks on stdout.
pub struct TerminalSink {
    /// Frames after the first move the cursor back up to redraw in place.
    drawn: bool,
}

impl TerminalSink {
    pub fn new() -> Self {
        Self { drawn: false }
    }
}

impl Default for TerminalSink {
    fn default() -> Self {
        Self::new()
    }
}

/// Scale a 0..=10 channel to the 8-bit range terminals expect.
fn scale(channel: u8) -> u8 {
    (channel as u16 * 255 / MAX_CHANNEL as u16) as u8
}

impl PixelSink for TerminalSink {
    fn write(&mut self, frame: &[Pixel; CELLS]) -> Result<(), SinkError> {
        let stdout = io::stdout();
        let mut out = stdout.lock();

        let mut render = || -> io::Result<()> {
            if self.drawn {
                write!(out, "\x1b[{SIDE}A")?;
            }
            for row in 0..SIDE {
                for col in 0..SIDE {
                    // The frame arrives in physical strip order; map back
                    // through the wiring for a top-left-origin drawing
                    let p = frame[physical_index(row * SIDE + col)];
                    write!(
                        out,
                        "\x1b[48;2;{};{};{}m  ",
                        scale(p.r),
                        scale(p.g),
                        scale(p.b)
                    )?;
                }
                writeln!(out, "\x1b[0m")?;
            }
            out.flush()
        };

        render().map_err(|e| SinkError(e.to_string()))?;
        self.drawn = true;
        Ok(())
    }
}
