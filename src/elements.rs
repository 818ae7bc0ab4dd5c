//! Ready-made slide elements and the text helpers behind them.
//!
//! Presets are plain [`ElementSpec`] values positioned from the [`Config`]
//! canvas and margins; a [`SlideHost`](crate::host::SlideHost) turns them into
//! shapes.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::host::{LineFormat, ShapeKind};
use crate::layout::Rect;
use crate::style::palette::brand;
use crate::style::{hex, Font, FontStyle, Rgb, TextRole, PRIMARY_FONT};
use std::str::FromStr;
use unicode_segmentation::UnicodeSegmentation;

/// Everything needed to create one shape.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementSpec {
    /// Geometry kind.
    pub kind: ShapeKind,
    /// Position and size.
    pub frame: Rect,
    /// Initial text.
    pub text: Option<String>,
    /// Solid fill; `None` leaves the host default.
    pub fill: Option<Rgb>,
    /// Outline; `None` leaves the host default.
    pub line: Option<LineFormat>,
    /// Text font; `None` leaves the host default.
    pub font: Option<Font>,
}

impl ElementSpec {
    /// Bare shape with no text or formatting.
    pub const fn new(kind: ShapeKind, frame: Rect) -> Self {
        Self {
            kind,
            frame,
            text: None,
            fill: None,
            line: None,
            font: None,
        }
    }

    /// Set the text.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set the fill.
    #[must_use]
    pub fn with_fill(mut self, fill: Rgb) -> Self {
        self.fill = Some(fill);
        self
    }

    /// Set the outline.
    #[must_use]
    pub fn with_line(mut self, line: LineFormat) -> Self {
        self.line = Some(line);
        self
    }

    /// Set the font.
    #[must_use]
    pub fn with_font(mut self, font: Font) -> Self {
        self.font = Some(font);
        self
    }

    /// Source line along the bottom margin.
    pub fn footnote(config: &Config) -> Self {
        let top = config.canvas_height - config.margin_bottom - 10.0;
        Self::new(ShapeKind::TextBox, Rect::new(config.margin_left, top, config.content_width, 30.0))
            .with_text("Source: internal analysis")
            .with_font(Font::for_role(TextRole::Footnote))
    }

    /// Boxed legend in the top-right corner, one bullet per item.
    pub fn legend<S: AsRef<str>>(items: &[S], config: &Config) -> Self {
        let width = 150.0;
        let left = config.canvas_width - config.margin_right - width - 20.0;
        #[allow(clippy::cast_precision_loss)]
        let height = 15.0f64.mul_add(items.len() as f64, 55.0);

        let mut text = String::from("Legend");
        for item in items {
            text.push_str("\n• ");
            text.push_str(item.as_ref());
        }

        Self::new(ShapeKind::Rectangle, Rect::new(left, 100.0, width, height))
            .with_text(text)
            .with_fill(hex("#F5F5F5"))
            .with_line(LineFormat::new(hex("#CCCCCC"), 1.0))
            .with_font(Font::new(PRIMARY_FONT, 11.0, hex("#333333")))
    }

    /// Numbered circular sticker.
    pub fn sticker(number: &str) -> Self {
        Self::new(ShapeKind::Ellipse, Rect::new(200.0, 200.0, 80.0, 80.0))
            .with_text(number)
            .with_fill(hex(brand::SIGNATURE_GREEN))
            .with_line(LineFormat::new(Rgb::WHITE, 2.0))
            .with_font(Font::new(PRIMARY_FONT, 24.0, Rgb::WHITE).with_style(FontStyle::BOLD))
    }

    /// Filled autoshape carrying `text`, sized to the text length.
    ///
    /// `kind` picks the geometry; a plain text box is not an autoshape and
    /// falls back to a rounded rectangle.
    pub fn autoshape_for_text(text: &str, kind: ShapeKind) -> Self {
        let kind = match kind {
            ShapeKind::TextBox => ShapeKind::RoundRectangle,
            other => other,
        };
        #[allow(clippy::cast_precision_loss)]
        let width = (text.graphemes(true).count() as f64 * 8.0).max(120.0);
        Self::new(kind, Rect::new(100.0, 100.0, width, 50.0))
            .with_text(text)
            .with_fill(hex(brand::SIGNATURE_GREEN))
            .with_font(Font::new(PRIMARY_FONT, 14.0, Rgb::WHITE).with_style(FontStyle::BOLD))
    }

    /// Text box styled from the typography table for `role`.
    pub fn text_box(text: &str, role: TextRole) -> Self {
        Self::new(ShapeKind::TextBox, Rect::new(100.0, 100.0, 200.0, 50.0))
            .with_text(text)
            .with_font(Font::for_role(role))
    }

    /// Grey placeholder box for a chart of `chart_type`.
    pub fn chart_placeholder(chart_type: &str, config: &Config) -> Self {
        let frame = Rect::new(
            config.margin_left,
            config.margin_top + 60.0,
            config.content_width * 0.7,
            config.content_height * 0.6,
        );
        let mut font = Font::for_role(TextRole::Subtitle);
        font.color = hex(brand::NEUTRAL2);

        Self::new(ShapeKind::Rectangle, frame)
            .with_text(format!("{} CHART\nPlaceholder", chart_type.to_uppercase()))
            .with_fill(hex(brand::NEUTRAL4))
            .with_line(LineFormat::new(hex(brand::NEUTRAL3), 1.0))
            .with_font(font)
    }

    /// Text box placed 10 pt to the right of `source`, same size.
    pub fn split_companion(source: Rect, text: &str) -> Self {
        let frame = Rect { left: source.right() + 10.0, ..source };
        Self::new(ShapeKind::TextBox, frame).with_text(text)
    }
}

/// Layouts produced by "insert template".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    /// Title, bullet list and footnote.
    Content,
    /// Title, chart placeholder and footnote.
    Chart,
}

impl FromStr for TemplateKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "content" => Ok(Self::Content),
            "chart" => Ok(Self::Chart),
            other => Err(Error::invalid(format!("unknown template '{other}'"))),
        }
    }
}

/// Elements making up a slide template, in insertion order.
pub fn slide_template(kind: TemplateKind, config: &Config) -> Vec<ElementSpec> {
    let title = ElementSpec::new(
        ShapeKind::TextBox,
        Rect::new(config.margin_left, config.margin_top, config.content_width, 40.0),
    )
    .with_text("Slide Title")
    .with_font(Font::for_role(TextRole::Title));

    let middle = match kind {
        TemplateKind::Content => ElementSpec::new(
            ShapeKind::TextBox,
            Rect::new(
                config.margin_left,
                config.margin_top + 80.0,
                config.content_width * 0.6,
                200.0,
            ),
        )
        .with_text("• Bullet point 1\n• Bullet point 2\n• Bullet point 3")
        .with_font(Font::for_role(TextRole::Body)),
        TemplateKind::Chart => ElementSpec::chart_placeholder("column", config),
    };

    vec![title, middle, ElementSpec::footnote(config)]
}

/// Leading integer of `label`, read the way a lenient number parser would:
/// optional whitespace and sign, then as many digits as are present.
fn leading_integer(label: &str) -> Option<i64> {
    let trimmed = label.trim();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = digits.bytes().take_while(u8::is_ascii_digit).count();
    let value: i64 = digits[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}

/// Next free sticker label: one more than the largest numeric label.
///
/// Labels without a leading integer are ignored; with no numeric labels (or
/// only negative ones) the result is `"1"`.
pub fn next_sticker_number<S: AsRef<str>>(labels: &[S]) -> String {
    let max = labels
        .iter()
        .filter_map(|label| leading_integer(label.as_ref()))
        .fold(0i64, i64::max);
    max.saturating_add(1).to_string()
}

/// Split `text` at its grapheme midpoint; the second half gets the extra
/// grapheme when the count is odd.
pub fn split_text(text: &str) -> (String, String) {
    let count = text.graphemes(true).count();
    let byte_mid = text
        .grapheme_indices(true)
        .nth(count / 2)
        .map_or(text.len(), |(index, _)| index);
    let (first, second) = text.split_at(byte_mid);
    (first.to_string(), second.to_string())
}

/// Text of two joined boxes.
pub fn join_text(first: &str, second: &str) -> String {
    format!("{first} {second}")
}
