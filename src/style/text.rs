//! Font settings and the typography table.

use super::color::Rgb;
use super::palette::brand;
use bitflags::bitflags;

/// Typeface used by every preset.
pub const PRIMARY_FONT: &str = "Calibri";

bitflags! {
    /// Font style flags.
    ///
    /// These can be combined using bitwise OR.
    ///
    /// # Example
    /// ```
    /// use deckhand::FontStyle;
    /// let style = FontStyle::BOLD | FontStyle::ITALIC;
    /// assert!(style.contains(FontStyle::BOLD));
    /// ```
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct FontStyle: u8 {
        /// Bold text
        const BOLD = 0b0000_0001;
        /// Italic text
        const ITALIC = 0b0000_0010;
        /// Underlined text
        const UNDERLINE = 0b0000_0100;
    }
}

impl std::fmt::Debug for FontStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        bitflags::parser::to_writer(self, f)
    }
}

/// Role of a block of text on a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextRole {
    /// Slide title.
    Title,
    /// Subtitle under the title.
    Subtitle,
    /// Body copy.
    Body,
    /// Captions and legends.
    Caption,
    /// Source lines at the foot of the slide.
    Footnote,
}

/// Font applied to a shape's text range.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    /// Typeface name.
    pub name: String,
    /// Size in points.
    pub size: f64,
    /// Text colour.
    pub color: Rgb,
    /// Bold / italic / underline.
    pub style: FontStyle,
}

impl Font {
    /// Create a plain font.
    pub fn new(name: impl Into<String>, size: f64, color: Rgb) -> Self {
        Self {
            name: name.into(),
            size,
            color,
            style: FontStyle::empty(),
        }
    }

    /// Set the style flags.
    #[must_use]
    pub fn with_style(mut self, style: FontStyle) -> Self {
        self.style = style;
        self
    }

    /// Formatting that "reset elements" restores: 18 pt black, no styling.
    pub fn reset() -> Self {
        Self::new(PRIMARY_FONT, 18.0, Rgb::BLACK)
    }

    /// Typography table entry for `role`.
    pub fn for_role(role: TextRole) -> Self {
        let (size, color) = match role {
            TextRole::Title => (24.0, brand::PRIMARY),
            TextRole::Subtitle => (18.0, brand::NEUTRAL1),
            TextRole::Body => (14.0, brand::NEUTRAL1),
            TextRole::Caption => (12.0, brand::NEUTRAL2),
            TextRole::Footnote => (10.0, "#666666"),
        };
        let font = Self::new(PRIMARY_FONT, size, hex(color));
        if role == TextRole::Footnote {
            font.with_style(FontStyle::ITALIC)
        } else {
            font
        }
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::reset()
    }
}

/// Decode one of the built-in colour constants.
pub(crate) fn hex(colour: &str) -> Rgb {
    Rgb::from_hex(colour).unwrap_or(Rgb::BLACK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_reset() {
        let font = Font::reset();
        assert_eq!(font.name, "Calibri");
        assert_eq!(font.size, 18.0);
        assert_eq!(font.color, Rgb::BLACK);
        assert!(font.style.is_empty());
    }

    #[test]
    fn test_typography_table() {
        assert_eq!(Font::for_role(TextRole::Title).size, 24.0);
        assert_eq!(Font::for_role(TextRole::Title).color, Rgb::from_u32(0x0078D4));
        assert_eq!(Font::for_role(TextRole::Caption).size, 12.0);

        let footnote = Font::for_role(TextRole::Footnote);
        assert_eq!(footnote.size, 10.0);
        assert!(footnote.style.contains(FontStyle::ITALIC));
    }

    #[test]
    fn test_font_style_debug() {
        let style = FontStyle::BOLD | FontStyle::UNDERLINE;
        assert_eq!(format!("{style:?}"), "BOLD | UNDERLINE");
    }
}
