//! # Scroll Engine
//!
//! Animates a text string across the matrix as a horizontal ribbon: the
//! concatenation of each character's glyph strip, streamed through the
//! 25-cell window one column per tick.
//!
//! The engine runs on a background thread owned by the
//! [`crate::display::DisplayController`]. It never writes unconditionally:
//! every frame goes through a token check under the display lock, so an
//! animation that has been superseded stops at its next write without
//! corrupting whatever the new owner put on the surface. The lock is only
//! held for the check-and-write itself, never across the inter-tick sleeps.

use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use crate::display::DisplayInner;
use crate::glyphs::{glyph_for, STRIP_CELLS};
use crate::surface::{PixelSink, CELLS, SIDE};
use crate::{color, Pixel};

/// How long the first glyph is held before the ribbon starts moving. Gives
/// the reader a beat to focus before pixels start sliding.
const FIRST_FRAME_HOLD: Duration = Duration::from_millis(500);

/// A single scroll animation: one text, one color, a fixed per-column
/// cadence, and the token that authorizes its writes.
pub(crate) struct ScrollEngine<S: PixelSink> {
    shared: Arc<Mutex<DisplayInner<S>>>,
    token: u64,
    text: String,
    color: Pixel,
    delay: Duration,
    times: u32,
}

impl<S: PixelSink> ScrollEngine<S> {
    pub(crate) fn new(
        shared: Arc<Mutex<DisplayInner<S>>>,
        token: u64,
        text: String,
        color: Pixel,
        delay: Duration,
        times: u32,
    ) -> Self {
        Self {
            shared,
            token,
            text,
            color,
            delay,
            times,
        }
    }

    /// Run the animation to completion or supersession.
    ///
    /// On natural completion the surface is cleared and the token retired.
    /// On supersession the engine stops immediately and leaves the surface
    /// alone: whoever invalidated the token owns it now.
    pub(crate) fn run(self) {
        for _ in 0..self.times.max(1) {
            if !self.run_pass() {
                tracing::debug!(text = %self.text, "scroll superseded");
                return;
            }
        }

        let mut inner = self.shared.lock().unwrap();
        if inner.active == Some(self.token) {
            inner.active = None;
            inner.blank();
        }
    }

    /// One full pass over the text. Returns false when superseded.
    fn run_pass(&self) -> bool {
        let mut window = [color::OFF; CELLS];

        // The first character appears whole, no slide-in.
        let first = self.text.chars().next().unwrap_or(' ');
        window.copy_from_slice(&glyph_for(first, self.color)[..CELLS]);
        if !self.try_present(&window) {
            return false;
        }
        thread::sleep(FIRST_FRAME_HOLD);

        // Stream the rest of the ribbon through the window. The trailing
        // space walks the final character off the matrix.
        for c in self.text.chars().skip(1).chain(std::iter::once(' ')) {
            let strip = glyph_for(c, self.color);

            // Six sub-ticks per glyph: one shift for the full character
            // width, then the incoming strip's columns (padding column
            // first) injected one per tick at the entry edge.
            for step in 0..STRIP_CELLS / SIDE {
                window.copy_within(0..CELLS - SIDE, SIDE);
                let from = STRIP_CELLS - (step + 1) * SIDE;
                window[..SIDE].copy_from_slice(&strip[from..from + SIDE]);
                if !self.try_present(&window) {
                    return false;
                }
                thread::sleep(self.delay);
            }
        }

        true
    }

    /// Write a frame if this animation still holds the current token.
    fn try_present(&self, frame: &[Pixel; CELLS]) -> bool {
        let mut inner = self.shared.lock().unwrap();
        if inner.active != Some(self.token) {
            return false;
        }
        if let Err(error) = inner.surface.present(frame) {
            tracing::warn!(%error, "scroll frame transmit failed");
        }
        true
    }
}
