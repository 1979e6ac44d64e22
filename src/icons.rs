//! # Weather Icons
//!
//! Static 5x5 icon patterns keyed by the BOM forecast `icon_descriptor`
//! strings. Unlike the glyph tables, icon arrays are in logical row-major
//! order and go through [`crate::surface::PixelSurface::set_cell`]'s wiring
//! remap when rendered.
//!
//! Unknown descriptors render [`DEFAULT_ICON`] rather than failing; the BOM
//! vocabulary has drifted before and the display must keep working when it
//! does.

use crate::color::{AMBER, BLUE, DUSK, GREEN, GREY, OFF, ORANGE, PURPLE, RED, YELLOW};
use crate::surface::CELLS;
use crate::Pixel;

/// Fallback pattern for icon names without a table entry.
pub const DEFAULT_ICON: [Pixel; CELLS] = [
    OFF, GREY, GREY, GREY, OFF,
    OFF, OFF, OFF, OFF, GREY,
    OFF, OFF, GREY, GREY, OFF,
    OFF, OFF, OFF, OFF, OFF,
    OFF, OFF, GREY, OFF, OFF,
];

/// Static pattern for the Rainbow easter-egg view.
pub const RAINBOW: [Pixel; CELLS] = [
    OFF, OFF, OFF, OFF, YELLOW,
    BLUE, GREEN, YELLOW, ORANGE, RED,
    PURPLE, OFF, OFF, BLUE, GREY,
    OFF, OFF, OFF, OFF, OFF,
    OFF, OFF, OFF, OFF, OFF,
];

/// Look up the pattern for a BOM icon descriptor, falling back to
/// [`DEFAULT_ICON`].
pub fn icon_for(name: &str) -> &'static [Pixel; CELLS] {
    match name {
        "sunny" => &[
            YELLOW, OFF, YELLOW, OFF, YELLOW,
            OFF, YELLOW, ORANGE, YELLOW, OFF,
            YELLOW, ORANGE, AMBER, ORANGE, YELLOW,
            OFF, YELLOW, ORANGE, YELLOW, OFF,
            YELLOW, OFF, YELLOW, OFF, YELLOW,
        ],
        "clear" => &[
            OFF, OFF, OFF, OFF, OFF,
            OFF, YELLOW, OFF, YELLOW, OFF,
            OFF, OFF, ORANGE, OFF, OFF,
            OFF, YELLOW, OFF, YELLOW, OFF,
            OFF, OFF, OFF, OFF, OFF,
        ],
        "partly_cloudy" => &[
            YELLOW, OFF, YELLOW, OFF, OFF,
            OFF, YELLOW, ORANGE, GREY, OFF,
            YELLOW, ORANGE, GREY, GREY, GREY,
            GREY, GREY, GREY, GREY, GREY,
            OFF, GREY, GREY, GREY, OFF,
        ],
        "cloudy" => &[
            YELLOW, OFF, YELLOW, OFF, OFF,
            OFF, GREY, GREY, GREY, OFF,
            GREY, GREY, GREY, GREY, GREY,
            GREY, GREY, GREY, GREY, GREY,
            OFF, GREY, GREY, GREY, OFF,
        ],
        "mostly_sunny" => &[
            YELLOW, OFF, YELLOW, OFF, YELLOW,
            OFF, YELLOW, ORANGE, YELLOW, OFF,
            YELLOW, ORANGE, AMBER, ORANGE, YELLOW,
            OFF, YELLOW, ORANGE, GREY, GREY,
            YELLOW, OFF, GREY, GREY, GREY,
        ],
        "haze" => &[
            OFF, OFF, OFF, OFF, OFF,
            GREY, GREY, YELLOW, GREY, GREY,
            OFF, YELLOW, ORANGE, YELLOW, OFF,
            GREY, GREY, YELLOW, GREY, GREY,
            OFF, OFF, OFF, OFF, OFF,
        ],
        "hazy" => &[
            OFF, OFF, OFF, OFF, OFF,
            GREY, GREY, YELLOW, GREY, GREY,
            OFF, YELLOW, ORANGE, YELLOW, OFF,
            GREY, GREY, YELLOW, GREY, GREY,
            OFF, OFF, OFF, OFF, OFF,
        ],
        "light_rain" => &[
            OFF, GREY, GREY, GREY, OFF,
            GREY, GREY, GREY, GREY, GREY,
            GREY, GREY, GREY, GREY, GREY,
            OFF, BLUE, OFF, BLUE, OFF,
            BLUE, OFF, BLUE, OFF, OFF,
        ],
        "wind" => &[
            OFF, OFF, OFF, DUSK, OFF,
            OFF, OFF, OFF, OFF, DUSK,
            DUSK, DUSK, DUSK, DUSK, OFF,
            OFF, OFF, OFF, OFF, DUSK,
            OFF, OFF, OFF, DUSK, OFF,
        ],
        "windy" => &[
            OFF, OFF, OFF, DUSK, OFF,
            OFF, OFF, OFF, OFF, DUSK,
            DUSK, DUSK, DUSK, DUSK, OFF,
            OFF, OFF, OFF, OFF, DUSK,
            OFF, OFF, OFF, DUSK, OFF,
        ],
        "shower" => &[
            YELLOW, OFF, YELLOW, OFF, OFF,
            OFF, YELLOW, ORANGE, GREY, OFF,
            YELLOW, ORANGE, GREY, GREY, GREY,
            GREY, GREY, GREY, GREY, GREY,
            OFF, BLUE, OFF, BLUE, OFF,
        ],
        "showers" => &[
            YELLOW, OFF, YELLOW, OFF, OFF,
            OFF, YELLOW, ORANGE, GREY, OFF,
            YELLOW, ORANGE, GREY, GREY, GREY,
            GREY, GREY, GREY, GREY, GREY,
            OFF, BLUE, OFF, BLUE, OFF,
        ],
        "rain" => &[
            OFF, GREY, GREY, GREY, GREY,
            GREY, GREY, GREY, GREY, GREY,
            OFF, BLUE, OFF, BLUE, OFF,
            BLUE, OFF, BLUE, OFF, BLUE,
            BLUE, OFF, BLUE, OFF, BLUE,
        ],
        "storm" => &[
            OFF, GREY, GREY, GREY, OFF,
            GREY, GREY, GREY, GREY, GREY,
            GREY, GREY, GREY, GREY, GREY,
            OFF, OFF, YELLOW, YELLOW, OFF,
            OFF, YELLOW, YELLOW, OFF, OFF,
        ],
        "storms" => &[
            OFF, GREY, GREY, GREY, OFF,
            GREY, GREY, GREY, GREY, GREY,
            GREY, GREY, GREY, GREY, GREY,
            OFF, OFF, YELLOW, YELLOW, OFF,
            OFF, YELLOW, YELLOW, OFF, OFF,
        ],
        "light_shower" => &[
            OFF, GREY, GREY, GREY, OFF,
            GREY, GREY, GREY, GREY, GREY,
            GREY, GREY, GREY, GREY, GREY,
            OFF, BLUE, OFF, BLUE, OFF,
            OFF, BLUE, OFF, BLUE, OFF,
        ],
        "light_showers" => &[
            OFF, GREY, GREY, GREY, OFF,
            GREY, GREY, GREY, GREY, GREY,
            GREY, GREY, GREY, GREY, GREY,
            OFF, BLUE, OFF, BLUE, OFF,
            OFF, BLUE, OFF, BLUE, OFF,
        ],
        "heavy_shower" => &[
            OFF, GREY, GREY, GREY, OFF,
            GREY, GREY, GREY, GREY, GREY,
            GREY, GREY, GREY, GREY, GREY,
            OFF, BLUE, BLUE, BLUE, OFF,
            BLUE, OFF, BLUE, OFF, BLUE,
        ],
        "heavy_showers" => &[
            OFF, GREY, GREY, GREY, OFF,
            GREY, GREY, GREY, GREY, GREY,
            GREY, GREY, GREY, GREY, GREY,
            OFF, BLUE, BLUE, BLUE, OFF,
            BLUE, OFF, BLUE, OFF, BLUE,
        ],
        _ => &DEFAULT_ICON,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_descriptor_has_its_own_pattern() {
        assert_ne!(icon_for("sunny"), &DEFAULT_ICON);
        assert_ne!(icon_for("rain"), icon_for("sunny"));
    }

    #[test]
    fn unknown_descriptor_falls_back_to_default() {
        assert_eq!(icon_for("tornado_funnel"), &DEFAULT_ICON);
        assert_eq!(icon_for(""), &DEFAULT_ICON);
    }

    #[test]
    fn shower_aliases_share_a_pattern() {
        // BOM emits both singular and plural descriptors for the same icon
        assert_eq!(icon_for("shower"), icon_for("showers"));
        assert_eq!(icon_for("storm"), icon_for("storms"));
        assert_eq!(icon_for("windy"), icon_for("wind"));
    }

    #[test]
    fn rainbow_is_not_blank() {
        assert!(RAINBOW.iter().any(|p| !p.is_off()));
    }
}
