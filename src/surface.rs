//! # Pixel Surface and Hardware Boundary
//!
//! The surface owns the 25-cell frame that is transmitted to the LED strip.
//! Callers address cells logically (row-major, top-left origin); the surface
//! remaps to the strip's physical wiring order on write.
//!
//! ## Physical wiring
//!
//! The panel is a single WS2812 strip snaked through the frame in vertical
//! runs, rightmost column first, each run top to bottom. A logical
//! `(row, col)` cell therefore lives at strip index `row + (4 - col) * 5`.
//! The glyph tables in [`crate::glyphs`] are stored directly in this strip
//! order so the scroll engine can shift whole columns as contiguous
//! 5-element groups.
//!
//! ## Concurrency
//!
//! The surface has no concurrency control of its own. All access is
//! serialized by [`crate::display::DisplayController`], which holds the lock
//! for each write.

use crate::{color, Pixel};
use thiserror::Error;

/// Cells on the matrix.
pub const CELLS: usize = 25;

/// Matrix side length; also the height of one strip column group.
pub const SIDE: usize = 5;

/// Transmit failure at the hardware boundary (e.g. an SPI write error).
///
/// Display faults never abort the device loop; the controller logs them and
/// carries on with the stale frame.
#[derive(Error, Debug)]
#[error("pixel sink write failed: {0}")]
pub struct SinkError(pub String);

/// The single hardware primitive the core needs: push 25 colors to the
/// strip, in physical wiring order.
///
/// Implementations: WS2812 over SPI in the binary's hardware module, an
/// ANSI terminal renderer for development, and in-memory frame recorders in
/// tests.
pub trait PixelSink: Send {
    fn write(&mut self, frame: &[Pixel; CELLS]) -> Result<(), SinkError>;
}

/// Map a logical row-major cell index to its strip position.
pub(crate) fn physical_index(logical: usize) -> usize {
    let row = logical / SIDE;
    let col = logical % SIDE;
    row + (SIDE - 1 - col) * SIDE
}

/// Owns the in-memory frame and the sink it is transmitted through.
pub struct PixelSurface<S: PixelSink> {
    cells: [Pixel; CELLS],
    sink: S,
}

impl<S: PixelSink> PixelSurface<S> {
    pub fn new(sink: S) -> Self {
        Self {
            cells: [color::OFF; CELLS],
            sink,
        }
    }

    /// Replace one cell, addressed by logical row-major index.
    ///
    /// # Panics
    /// Panics if `index >= 25`. An out-of-range index is a logic defect in
    /// the caller, not a recoverable condition.
    pub fn set_cell(&mut self, index: usize, pixel: Pixel) {
        assert!(index < CELLS, "cell index {index} out of range");
        self.cells[physical_index(index)] = pixel;
    }

    /// Replace every cell with the same value.
    pub fn fill(&mut self, pixel: Pixel) {
        self.cells = [pixel; CELLS];
    }

    /// Transmit the frame, then blank the buffer to all-off.
    ///
    /// The blank-after-transmit matches the device's "show once, then dim"
    /// UX: whatever is composed next starts from a dark frame. The LEDs keep
    /// showing the transmitted frame until the next write.
    pub fn flush(&mut self) -> Result<(), SinkError> {
        let result = self.sink.write(&self.cells);
        self.cells = [color::OFF; CELLS];
        result
    }

    /// Replace the whole frame with `frame` (already in physical strip
    /// order) and transmit it, without blanking.
    ///
    /// This is the scroll engine's write path: successive animation frames
    /// build on each other, so the buffer must survive the transmit.
    pub fn present(&mut self, frame: &[Pixel; CELLS]) -> Result<(), SinkError> {
        self.cells = *frame;
        self.sink.write(&self.cells)
    }

    /// Current frame contents, in physical strip order.
    pub fn cells(&self) -> &[Pixel; CELLS] {
        &self.cells
    }
}

#[cfg(test)]
pub(crate) mod test_sink {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Records every transmitted frame; cloneable so tests keep a handle to
    /// the log while the sink is owned by a surface.
    #[derive(Clone, Default)]
    pub(crate) struct MemorySink {
        frames: Arc<Mutex<Vec<[Pixel; CELLS]>>>,
    }

    impl MemorySink {
        pub(crate) fn frames(&self) -> Vec<[Pixel; CELLS]> {
            self.frames.lock().unwrap().clone()
        }

        pub(crate) fn last(&self) -> Option<[Pixel; CELLS]> {
            self.frames.lock().unwrap().last().copied()
        }
    }

    impl PixelSink for MemorySink {
        fn write(&mut self, frame: &[Pixel; CELLS]) -> Result<(), SinkError> {
            self.frames.lock().unwrap().push(*frame);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_sink::MemorySink;
    use super::*;
    use crate::color::{GREEN, OFF, RED};

    #[test]
    fn logical_to_physical_remap_matches_wiring() {
        // Top-left cell lives at the start of the leftmost (last) column run
        assert_eq!(physical_index(0), 20);
        // Top-right cell starts the strip
        assert_eq!(physical_index(4), 0);
        // Bottom-right cell ends the first column run
        assert_eq!(physical_index(24), 4);
        // Center stays in the center
        assert_eq!(physical_index(12), 12);
    }

    #[test]
    fn set_cell_writes_through_the_remap() {
        let mut surface = PixelSurface::new(MemorySink::default());
        surface.set_cell(0, RED);
        assert_eq!(surface.cells()[20], RED);
        assert_eq!(surface.cells()[0], OFF);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn set_cell_panics_out_of_range() {
        let mut surface = PixelSurface::new(MemorySink::default());
        surface.set_cell(CELLS, RED);
    }

    #[test]
    fn flush_transmits_then_blanks() {
        let sink = MemorySink::default();
        let mut surface = PixelSurface::new(sink.clone());
        surface.fill(GREEN);
        surface.flush().unwrap();

        // The sink saw the filled frame...
        assert_eq!(sink.last().unwrap(), [GREEN; CELLS]);
        // ...but the buffer is blanked afterwards
        assert_eq!(surface.cells(), &[OFF; CELLS]);
    }

    #[test]
    fn present_keeps_the_frame_in_the_buffer() {
        let sink = MemorySink::default();
        let mut surface = PixelSurface::new(sink.clone());
        let mut frame = [OFF; CELLS];
        frame[3] = RED;
        surface.present(&frame).unwrap();

        assert_eq!(sink.last().unwrap(), frame);
        assert_eq!(surface.cells(), &frame);
    }
}
