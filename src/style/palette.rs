//! Colour palettes and cycling.

use crate::error::{Error, Result};

/// Named brand colours.
pub mod brand {
    /// Blue.
    pub const PRIMARY: &str = "#0078D4";
    /// Green.
    pub const SECONDARY: &str = "#107C10";
    /// Red.
    pub const ACCENT1: &str = "#FF4B4B";
    /// Purple.
    pub const ACCENT2: &str = "#8E44AD";
    /// Orange.
    pub const ACCENT3: &str = "#F39C12";
    /// Dark gray.
    pub const NEUTRAL1: &str = "#2C3E50";
    /// Medium gray.
    pub const NEUTRAL2: &str = "#7F8C8D";
    /// Light gray.
    pub const NEUTRAL3: &str = "#BDC3C7";
    /// Very light gray.
    pub const NEUTRAL4: &str = "#ECF0F1";
    /// White.
    pub const WHITE: &str = "#FFFFFF";
    /// Black.
    pub const BLACK: &str = "#000000";
    /// Green used for stickers and autoshapes.
    pub const SIGNATURE_GREEN: &str = "#00A651";
}

/// Palette walked by the "cycle accent colours" command.
pub const ACCENT_CYCLE: [&str; 5] = ["#00A651", "#0073E6", "#FF6B35", "#8E44AD", "#F39C12"];

/// Brand palette: primary, secondary and the three accents.
pub const BRAND_CYCLE: [&str; 5] = [
    brand::PRIMARY,
    brand::SECONDARY,
    brand::ACCENT1,
    brand::ACCENT2,
    brand::ACCENT3,
];

/// Colour for position `index`, wrapping around `palette`.
pub fn cycle_color<T>(index: usize, palette: &[T]) -> Result<&T> {
    if palette.is_empty() {
        return Err(Error::invalid("palette must contain at least one colour"));
    }
    Ok(&palette[index % palette.len()])
}

/// Colours for `count` consecutive elements, starting at palette slot `start`.
///
/// The whole run is resolved up front, so callers can validate it before
/// touching any shape.
pub fn palette_run<T: Clone>(start: usize, count: usize, palette: &[T]) -> Result<Vec<T>> {
    if palette.is_empty() {
        return Err(Error::invalid("palette must contain at least one colour"));
    }
    (0..count)
        .map(|offset| cycle_color(start.wrapping_add(offset), palette).cloned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Rgb;

    #[test]
    fn test_cycle_color_wraps() {
        let palette = ["#a", "#b"];
        assert_eq!(*cycle_color(0, &palette).unwrap(), "#a");
        assert_eq!(*cycle_color(1, &palette).unwrap(), "#b");
        assert_eq!(*cycle_color(2, &palette).unwrap(), "#a");
    }

    #[test]
    fn test_cycle_color_empty_palette() {
        let empty: [&str; 0] = [];
        assert!(matches!(cycle_color(0, &empty), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_cycle_color_rgb_palette() {
        let palette = vec![Rgb::BLACK, Rgb::WHITE];
        assert_eq!(*cycle_color(5, &palette).unwrap(), Rgb::WHITE);
    }

    #[test]
    fn test_palette_run_with_offset() {
        let run = palette_run(3, 4, &BRAND_CYCLE).unwrap();
        assert_eq!(run, vec![brand::ACCENT2, brand::ACCENT3, brand::PRIMARY, brand::SECONDARY]);
        assert!(palette_run(0, 0, &ACCENT_CYCLE).unwrap().is_empty());

        let empty: [&str; 0] = [];
        assert!(palette_run(0, 0, &empty).is_err());
    }

    #[test]
    fn test_builtin_palettes_parse() {
        for colour in ACCENT_CYCLE.iter().chain(BRAND_CYCLE.iter()) {
            assert!(Rgb::from_hex(colour).is_ok(), "{colour}");
        }
    }
}
