//! Host adapter boundary.
//!
//! The presentation application's object model is reached only through the
//! [`SlideHost`] trait. Commands read shapes as plain data, run the pure
//! layout and style functions, write the results back and then call
//! [`SlideHost::sync`] once.

mod memory;

pub use memory::MemoryHost;

use crate::elements::ElementSpec;
use crate::error::Result;
use crate::layout::Rect;
use crate::style::{Font, Rgb};

/// Host-assigned shape identifier.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct ShapeId(pub u32);

/// Geometry of a shape as the host creates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// Plain text box.
    TextBox,
    /// Rectangle.
    Rectangle,
    /// Rectangle with rounded corners.
    RoundRectangle,
    /// Ellipse (stickers are circles).
    Ellipse,
    /// Hexagon.
    Hexagon,
}

/// Outline colour and weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineFormat {
    /// Outline colour.
    pub color: Rgb,
    /// Outline weight in points.
    pub weight: f64,
}

impl LineFormat {
    /// Create a line format.
    pub const fn new(color: Rgb, weight: f64) -> Self {
        Self { color, weight }
    }
}

impl Default for LineFormat {
    fn default() -> Self {
        Self::new(Rgb::BLACK, 1.0)
    }
}

/// Snapshot of one shape, read from the host.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    /// Identifier.
    pub id: ShapeId,
    /// Geometry kind.
    pub kind: ShapeKind,
    /// Position and size.
    pub frame: Rect,
    /// Text content; `None` when the shape has no text frame content.
    pub text: Option<String>,
    /// Solid fill; `None` means no fill.
    pub fill: Option<Rgb>,
    /// Outline.
    pub line: LineFormat,
    /// Font of the text range.
    pub font: Font,
}

impl Shape {
    /// Whether the shape carries non-empty text.
    pub fn has_text(&self) -> bool {
        self.text.as_deref().is_some_and(|t| !t.is_empty())
    }
}

/// Access to the slide being edited.
pub trait SlideHost {
    /// Every shape on the current slide, in z-order.
    fn shapes(&self) -> Result<Vec<Shape>>;

    /// Shapes the user has selected, in selection order.
    fn selection(&self) -> Result<Vec<Shape>>;

    /// Move and resize a shape.
    fn set_frame(&mut self, id: ShapeId, frame: Rect) -> Result<()>;

    /// Set or clear a shape's solid fill.
    fn set_fill(&mut self, id: ShapeId, fill: Option<Rgb>) -> Result<()>;

    /// Set a shape's outline.
    fn set_line(&mut self, id: ShapeId, line: LineFormat) -> Result<()>;

    /// Replace a shape's text.
    fn set_text(&mut self, id: ShapeId, text: &str) -> Result<()>;

    /// Set the font of a shape's whole text range.
    fn set_font(&mut self, id: ShapeId, font: &Font) -> Result<()>;

    /// Create a shape on the current slide.
    fn add_shape(&mut self, spec: ElementSpec) -> Result<ShapeId>;

    /// Remove a shape.
    fn delete_shape(&mut self, id: ShapeId) -> Result<()>;

    /// Commit pending changes.
    fn sync(&mut self) -> Result<()>;

    /// Move several shapes at once.
    fn apply_frames(&mut self, frames: &[(ShapeId, Rect)]) -> Result<()> {
        for &(id, frame) in frames {
            self.set_frame(id, frame)?;
        }
        Ok(())
    }
}
