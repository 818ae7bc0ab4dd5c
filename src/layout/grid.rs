//! Grid snapping.

use super::rect::Rect;
use crate::error::{Error, Result};

/// Round `value` to the nearest multiple of `grid`; halves round up.
fn snap(value: f64, grid: f64) -> f64 {
    (value / grid + 0.5).floor() * grid
}

/// Snap position and size of `rect` to a `grid`-point lattice.
pub fn snap_to_grid(rect: Rect, grid: f64) -> Result<Rect> {
    if !grid.is_finite() || grid <= 0.0 {
        return Err(Error::invalid(format!("grid size must be a positive number, got {grid}")));
    }

    Ok(Rect::new(
        snap(rect.left, grid),
        snap(rect.top, grid),
        snap(rect.width, grid),
        snap(rect.height, grid),
    ))
}
