//! Rect: position and size of one positionable element, in points.

use super::distribute::Axis;
use serde::{Deserialize, Serialize};

/// A rectangle defined by its top-left corner and size.
#[derive(Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Distance from the canvas's left edge.
    pub left: f64,
    /// Distance from the canvas's top edge.
    pub top: f64,
    /// Horizontal size.
    pub width: f64,
    /// Vertical size.
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// Zero-sized rectangle at the origin.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Get the right edge.
    #[inline]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Get the bottom edge.
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Leading coordinate on an axis (`left` or `top`).
    #[inline]
    pub const fn leading(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.left,
            Axis::Vertical => self.top,
        }
    }

    /// Size along an axis (`width` or `height`).
    #[inline]
    pub const fn extent(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// Copy of this rectangle with the leading coordinate on `axis` replaced.
    #[inline]
    #[must_use]
    pub fn with_leading(mut self, axis: Axis, value: f64) -> Self {
        match axis {
            Axis::Horizontal => self.left = value,
            Axis::Vertical => self.top = value,
        }
        self
    }
}

impl std::fmt::Debug for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Rect({}, {} {}x{})", self.left, self.top, self.width, self.height)
    }
}

/// The minimal axis-aligned box containing a set of rectangles.
#[derive(Clone, Copy, PartialEq, Debug, Serialize)]
pub struct BoundingBox {
    /// Smallest `left` of the group.
    pub left: f64,
    /// Smallest `top` of the group.
    pub top: f64,
    /// `right - left`.
    pub width: f64,
    /// `bottom - top`.
    pub height: f64,
    /// Largest right edge of the group.
    pub right: f64,
    /// Largest bottom edge of the group.
    pub bottom: f64,
}

impl BoundingBox {
    /// Check that `rect` lies entirely inside the box.
    pub fn contains(&self, rect: &Rect) -> bool {
        rect.left >= self.left
            && rect.top >= self.top
            && rect.right() <= self.right
            && rect.bottom() <= self.bottom
    }

    /// Horizontal centre.
    #[inline]
    pub fn center_x(&self) -> f64 {
        self.left + self.width / 2.0
    }

    /// Vertical centre.
    #[inline]
    pub fn center_y(&self) -> f64 {
        self.top + self.height / 2.0
    }
}

/// Smallest box covering every rectangle, or `None` for an empty slice.
pub fn bounding_box(rects: &[Rect]) -> Option<BoundingBox> {
    let first = rects.first()?;
    let (mut left, mut top) = (first.left, first.top);
    let (mut right, mut bottom) = (first.right(), first.bottom());

    for rect in &rects[1..] {
        left = left.min(rect.left);
        top = top.min(rect.top);
        right = right.max(rect.right());
        bottom = bottom.max(rect.bottom());
    }

    Some(BoundingBox {
        left,
        top,
        width: right - left,
        height: bottom - top,
        right,
        bottom,
    })
}
