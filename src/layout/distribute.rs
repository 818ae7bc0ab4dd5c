//! Even distribution along one axis.
//!
//! The outermost rectangles stay put. Interior leading edges are linearly
//! interpolated across the span from the first leading edge to the last
//! trailing edge; interior sizes are not taken into account.

use super::rect::Rect;
use crate::error::{Error, Result};
use std::str::FromStr;

/// Distribution direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Sort and interpolate by `left`.
    Horizontal,
    /// Sort and interpolate by `top`.
    Vertical,
}

impl FromStr for Axis {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "horizontal" | "h" => Ok(Self::Horizontal),
            "vertical" | "v" => Ok(Self::Vertical),
            other => Err(Error::invalid(format!("unknown axis '{other}'"))),
        }
    }
}

/// Distribute `rects` along `axis`, returning them in sorted order.
///
/// Fewer than three rectangles are returned unchanged, in input order.
pub fn distribute(rects: &[Rect], axis: Axis) -> Vec<Rect> {
    distribute_indexed(rects, axis).into_iter().map(|(_, r)| r).collect()
}

/// Like [`distribute`], but each output carries the index of its input.
pub fn distribute_indexed(rects: &[Rect], axis: Axis) -> Vec<(usize, Rect)> {
    let mut sorted: Vec<(usize, Rect)> = rects.iter().copied().enumerate().collect();
    if sorted.len() < 3 {
        return sorted;
    }

    // Stable: equal leading coordinates keep their input order.
    sorted.sort_by(|(_, a), (_, b)| a.leading(axis).total_cmp(&b.leading(axis)));

    let count = sorted.len();
    let first = sorted[0].1;
    let last = sorted[count - 1].1;
    let start = first.leading(axis);
    #[allow(clippy::cast_precision_loss)]
    let spacing = (last.leading(axis) + last.extent(axis) - start) / (count - 1) as f64;

    for (i, (_, rect)) in sorted.iter_mut().enumerate().take(count - 1).skip(1) {
        #[allow(clippy::cast_precision_loss, clippy::suboptimal_flops)]
        let position = start + spacing * i as f64;
        *rect = rect.with_leading(axis, position);
    }

    sorted
}
