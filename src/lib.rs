//! # Matrix Weather Core Library
//!
//! This library drives a battery-powered weather display built around a 5x5
//! addressable RGB LED matrix. It shows a weather icon at rest, scrolls
//! temperature and rain readings on demand, and drops into low-power sleep
//! between interactions.
//!
//! ## Design Philosophy
//!
//! ### One writer at a time
//! The physical LED buffer is shared between a foreground control loop, a
//! background scroll animation, and button interrupts. All mutation funnels
//! through [`display::DisplayController`], which guards a [`surface::PixelSurface`]
//! with a lock and an animation token. A superseded animation detects the
//! stale token at its next write and stops without touching the surface.
//!
//! ### Hardware at arm's length
//! The only hardware primitive the core needs is "write 25 colors to the
//! strip", captured by the [`surface::PixelSink`] trait. The binary provides a
//! WS2812-over-SPI sink on real hardware and an ANSI terminal sink for
//! development, so the whole rendering and state-machine stack is testable
//! on a desktop.
//!
//! ### Data flow
//! 1. **Startup**: fetch one [`WeatherSnapshot`] from the BOM API (with a
//!    file cache), scrolling a status message while the network is busy
//! 2. **Run**: the [`state::WeatherStation`] loop reacts to button presses,
//!    renders the active view, and asks the host for the cheapest power
//!    state that still wakes on the next interaction
//!
//! ## Core Types
//!
//! - [`Pixel`]: one LED cell, three brightness channels in the hardware-safe
//!   0-10 range
//! - [`WeatherSnapshot`]: the immutable reading the device displays for the
//!   rest of its run

// Module declarations
pub mod config;
pub mod display;
pub mod glyphs;
pub mod icons;
pub mod power;
pub mod scroll;
pub mod state;
pub mod surface;
pub mod terminal;
pub mod weather;

/// Maximum brightness per channel the matrix is driven at.
///
/// The strip is run well below full 8-bit intensity: the device is battery
/// powered and the bare LEDs are painfully bright indoors. Every channel
/// value in the system stays within this bound.
pub const MAX_CHANNEL: u8 = 10;

/// A single LED cell: three brightness channels, each clamped to
/// [`MAX_CHANNEL`].
///
/// # Example
/// ```
/// use matrix_weather_lib::{Pixel, MAX_CHANNEL};
///
/// let dim_red = Pixel::new(3, 0, 0);
/// assert_eq!(dim_red.r, 3);
///
/// // Out-of-range channels saturate rather than overdrive the hardware
/// let clamped = Pixel::new(255, 0, 0);
/// assert_eq!(clamped.r, MAX_CHANNEL);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Pixel {
    /// Build a pixel, saturating each channel at [`MAX_CHANNEL`].
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        const fn clamp(v: u8) -> u8 {
            if v > MAX_CHANNEL { MAX_CHANNEL } else { v }
        }
        Self {
            r: clamp(r),
            g: clamp(g),
            b: clamp(b),
        }
    }

    /// True if all channels are off.
    pub const fn is_off(&self) -> bool {
        self.r == 0 && self.g == 0 && self.b == 0
    }
}

/// The matrix palette. Values are tuned by eye for a diffused 5x5 panel, not
/// derived from any color space.
pub mod color {
    use super::Pixel;

    pub const OFF: Pixel = Pixel::new(0, 0, 0);
    pub const GREY: Pixel = Pixel::new(1, 1, 1);
    pub const WHITE: Pixel = Pixel::new(7, 7, 7);
    pub const RED: Pixel = Pixel::new(10, 0, 0);
    pub const GREEN: Pixel = Pixel::new(0, 10, 0);
    pub const BLUE: Pixel = Pixel::new(0, 0, 10);
    pub const YELLOW: Pixel = Pixel::new(8, 8, 0);
    pub const PURPLE: Pixel = Pixel::new(8, 0, 8);
    pub const CYAN: Pixel = Pixel::new(0, 8, 8);
    pub const ORANGE: Pixel = Pixel::new(8, 4, 0);
    pub const AMBER: Pixel = Pixel::new(5, 2, 0);
    pub const DUSK: Pixel = Pixel::new(1, 1, 3);
}

/// The weather reading the device displays.
///
/// Populated once at startup from the BOM client (or a placeholder when the
/// fetch fails) and treated as immutable for the rest of the run.
///
/// # Example
/// ```
/// use matrix_weather_lib::WeatherSnapshot;
///
/// let snapshot = WeatherSnapshot {
///     temp_min: 10,
///     temp_max: 22,
///     icon: "sunny".to_string(),
///     rain: 2,
/// };
/// assert_eq!(format!("T{}-{}", snapshot.temp_min, snapshot.temp_max), "T10-22");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeatherSnapshot {
    /// Forecast minimum temperature, whole degrees C
    pub temp_min: i32,
    /// Forecast maximum temperature, whole degrees C
    pub temp_max: i32,
    /// BOM icon descriptor (e.g. "sunny"); unknown names render the
    /// default icon
    pub icon: String,
    /// Forecast rain amount, whole millimetres
    pub rain: u32,
}

impl WeatherSnapshot {
    /// Placeholder shown when the weather fetch fails: zeroed readings and
    /// an empty icon name, which renders as the default icon.
    pub fn placeholder() -> Self {
        Self {
            temp_min: 0,
            temp_max: 0,
            icon: String::new(),
            rain: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_channels_saturate_at_hardware_maximum() {
        let p = Pixel::new(200, 11, 10);
        assert_eq!(p, Pixel::new(MAX_CHANNEL, MAX_CHANNEL, 10));
    }

    #[test]
    fn off_pixel_is_off() {
        assert!(color::OFF.is_off());
        assert!(!color::RED.is_off());
    }

    #[test]
    fn placeholder_snapshot_has_no_icon_name() {
        let s = WeatherSnapshot::placeholder();
        assert!(s.icon.is_empty());
        assert_eq!(s.temp_min, 0);
    }
}
