//! Layout module: pure geometry over slide rectangles.
//!
//! Everything here takes plain rectangles and returns new ones. Nothing
//! talks to a host, nothing is cached, and inputs are never mutated.

mod align;
mod distribute;
mod grid;
mod rect;

pub use align::{align_to, match_width, Alignment, Bounds};
pub use distribute::{distribute, distribute_indexed, Axis};
pub use grid::snap_to_grid;
pub use rect::{bounding_box, BoundingBox, Rect};
