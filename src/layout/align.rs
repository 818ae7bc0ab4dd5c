//! Alignment of a selection against its own bounding box or the canvas.
//!
//! Edge targets (`Left`, `Right`, `Top`, `Bottom`) move every rectangle so
//! the matching edge touches the group's bounding box. `Center` and `Middle`
//! given explicit canvas bounds centre each rectangle on the canvas on its
//! own; the group is not kept together.

use super::distribute::Axis;
use super::rect::{bounding_box, Rect};
use crate::error::{Error, Result};
use std::str::FromStr;

/// Which coordinate of each rectangle gets overwritten, and with what.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alignment {
    /// Left edges meet the group's left edge.
    Left,
    /// Right edges meet the group's right edge.
    Right,
    /// Horizontal centring.
    Center,
    /// Top edges meet the group's top edge.
    Top,
    /// Bottom edges meet the group's bottom edge.
    Bottom,
    /// Vertical centring.
    Middle,
}

impl Alignment {
    /// The axis whose leading coordinate this alignment rewrites.
    pub const fn axis(self) -> Axis {
        match self {
            Self::Left | Self::Right | Self::Center => Axis::Horizontal,
            Self::Top | Self::Bottom | Self::Middle => Axis::Vertical,
        }
    }

    /// Lower-case name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Center => "center",
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Middle => "middle",
        }
    }
}

impl FromStr for Alignment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "center" | "centre" => Ok(Self::Center),
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            "middle" => Ok(Self::Middle),
            other => Err(Error::invalid(format!("unknown alignment '{other}'"))),
        }
    }
}

/// Canvas size used by `Center` / `Middle` alignment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Canvas width.
    pub width: f64,
    /// Canvas height.
    pub height: f64,
}

impl Bounds {
    /// Create validated bounds; both sides must be finite and non-negative.
    pub fn new(width: f64, height: f64) -> Result<Self> {
        let bounds = Self { width, height };
        bounds.validate()?;
        Ok(bounds)
    }

    fn validate(self) -> Result<()> {
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::invalid(format!("canvas {name} must be a finite, non-negative number, got {value}")));
            }
        }
        Ok(())
    }
}

/// Align `rects` to `target`, returning new rectangles in input order.
///
/// Under-populated input is a no-op: edge alignment needs two rectangles,
/// canvas centring needs one, and group centring (no `bounds`) needs two.
/// Only the target's axis changes.
pub fn align_to(rects: &[Rect], target: Alignment, bounds: Option<Bounds>) -> Result<Vec<Rect>> {
    if let Some(bounds) = bounds {
        bounds.validate()?;
    }

    let canvas_relative = bounds.is_some() && matches!(target, Alignment::Center | Alignment::Middle);
    let required = if canvas_relative { 1 } else { 2 };
    if rects.len() < required {
        return Ok(rects.to_vec());
    }

    if let (Some(canvas), true) = (bounds, canvas_relative) {
        return Ok(rects
            .iter()
            .map(|r| match target {
                Alignment::Center => Rect { left: (canvas.width - r.width) / 2.0, ..*r },
                _ => Rect { top: (canvas.height - r.height) / 2.0, ..*r },
            })
            .collect());
    }

    let Some(bbox) = bounding_box(rects) else {
        return Ok(Vec::new());
    };
    let (center_x, center_y) = (bbox.center_x(), bbox.center_y());

    Ok(rects
        .iter()
        .map(|r| match target {
            Alignment::Left => Rect { left: bbox.left, ..*r },
            Alignment::Right => Rect { left: bbox.right - r.width, ..*r },
            Alignment::Center => Rect { left: center_x - r.width / 2.0, ..*r },
            Alignment::Top => Rect { top: bbox.top, ..*r },
            Alignment::Bottom => Rect { top: bbox.bottom - r.height, ..*r },
            Alignment::Middle => Rect { top: center_y - r.height / 2.0, ..*r },
        })
        .collect())
}

/// Give every rectangle the first rectangle's width. Positions are kept.
pub fn match_width(rects: &[Rect]) -> Vec<Rect> {
    match rects.first() {
        Some(reference) if rects.len() > 1 => rects
            .iter()
            .map(|r| Rect { width: reference.width, ..*r })
            .collect(),
        _ => rects.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn canvas() -> Option<Bounds> {
        Some(Bounds::new(720.0, 540.0).unwrap())
    }

    #[test]
    fn test_align_left() {
        let rects = [Rect::new(0.0, 0.0, 10.0, 10.0), Rect::new(50.0, 0.0, 20.0, 10.0)];
        let out = align_to(&rects, Alignment::Left, None).unwrap();
        assert_eq!(out[0].left, 0.0);
        assert_eq!(out[1].left, 0.0);
        assert_eq!(out[1].width, 20.0);
    }

    #[test]
    fn test_align_right_and_bottom() {
        let rects = [Rect::new(0.0, 0.0, 10.0, 10.0), Rect::new(50.0, 30.0, 20.0, 5.0)];

        let right = align_to(&rects, Alignment::Right, None).unwrap();
        assert_eq!(right[0].left, 60.0);
        assert_eq!(right[1].left, 50.0);
        assert_eq!(right[0].top, 0.0);

        let bottom = align_to(&rects, Alignment::Bottom, None).unwrap();
        assert_eq!(bottom[0].top, 25.0);
        assert_eq!(bottom[1].top, 30.0);
        assert_eq!(bottom[0].left, 0.0);
    }

    #[test]
    fn test_align_edge_needs_two() {
        let rects = [Rect::new(40.0, 40.0, 10.0, 10.0)];
        assert_eq!(align_to(&rects, Alignment::Left, canvas()).unwrap(), rects.to_vec());
        assert!(align_to(&[], Alignment::Top, None).unwrap().is_empty());
    }

    #[test]
    fn test_align_center_on_canvas_is_per_element() {
        let rects = [Rect::new(0.0, 10.0, 100.0, 10.0), Rect::new(300.0, 20.0, 20.0, 10.0)];
        let out = align_to(&rects, Alignment::Center, canvas()).unwrap();
        assert_eq!(out[0].left, 310.0);
        assert_eq!(out[1].left, 350.0);
        assert_eq!(out[0].top, 10.0);
    }

    #[test]
    fn test_align_middle_single_element() {
        let rects = [Rect::new(0.0, 0.0, 10.0, 40.0)];
        let out = align_to(&rects, Alignment::Middle, canvas()).unwrap();
        assert_eq!(out[0].top, 250.0);
    }

    #[test]
    fn test_align_center_without_bounds_uses_group() {
        let rects = [Rect::new(0.0, 0.0, 100.0, 10.0), Rect::new(0.0, 0.0, 20.0, 10.0)];
        let out = align_to(&rects, Alignment::Center, None).unwrap();
        assert_eq!(out[0].left, 0.0);
        assert_eq!(out[1].left, 40.0);

        let single = [Rect::new(5.0, 5.0, 10.0, 10.0)];
        assert_eq!(align_to(&single, Alignment::Center, None).unwrap(), single.to_vec());
    }

    #[test]
    fn test_align_rejects_bad_bounds() {
        assert!(Bounds::new(f64::NAN, 10.0).is_err());
        assert!(Bounds::new(10.0, -1.0).is_err());

        let bad = Some(Bounds { width: f64::INFINITY, height: 10.0 });
        let result = align_to(&[], Alignment::Center, bad);
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_alignment_from_str() {
        assert_eq!("Left".parse::<Alignment>().unwrap(), Alignment::Left);
        assert_eq!("middle".parse::<Alignment>().unwrap(), Alignment::Middle);
        assert!("diagonal".parse::<Alignment>().is_err());
        assert_eq!(Alignment::Bottom.axis(), Axis::Vertical);
    }

    #[test]
    fn test_match_width() {
        let rects = [Rect::new(0.0, 0.0, 30.0, 10.0), Rect::new(50.0, 5.0, 10.0, 10.0)];
        let out = match_width(&rects);
        assert_eq!(out[1], Rect::new(50.0, 5.0, 30.0, 10.0));
        assert_eq!(match_width(&rects[..1]), rects[..1].to_vec());
    }

    fn arb_rect() -> impl Strategy<Value = Rect> {
        (-500i32..500, -500i32..500, 0i32..200, 0i32..200).prop_map(|(l, t, w, h)| {
            Rect::new(f64::from(l), f64::from(t), f64::from(w), f64::from(h))
        })
    }

    proptest! {
        #[test]
        fn test_align_left_idempotent(rects in prop::collection::vec(arb_rect(), 0..20)) {
            let once = align_to(&rects, Alignment::Left, None).unwrap();
            let twice = align_to(&once, Alignment::Left, None).unwrap();
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn test_align_edges_stay_in_box(rects in prop::collection::vec(arb_rect(), 2..20)) {
            let bbox = bounding_box(&rects).unwrap();
            for target in [Alignment::Left, Alignment::Top] {
                for rect in align_to(&rects, target, None).unwrap() {
                    prop_assert!(bbox.contains(&rect));
                }
            }
        }
    }
}
