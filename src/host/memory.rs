//! In-memory slide used by tests and the demo.

use super::{LineFormat, Shape, ShapeId, ShapeKind, SlideHost};
use crate::elements::ElementSpec;
use crate::error::{Error, Result};
use crate::layout::Rect;
use crate::style::{Font, Rgb};

/// A single slide held in memory.
#[derive(Debug, Default)]
pub struct MemoryHost {
    /// Shapes in z-order.
    shapes: Vec<Shape>,
    /// Selected shape ids, in selection order.
    selected: Vec<ShapeId>,
    /// Next id to hand out.
    next_id: u32,
    /// Number of `sync` calls.
    syncs: usize,
}

impl MemoryHost {
    /// Create an empty slide.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a plain shape and return its id.
    pub fn insert(&mut self, kind: ShapeKind, frame: Rect) -> ShapeId {
        self.insert_spec(ElementSpec::new(kind, frame))
    }

    /// Add a shape with text and return its id.
    pub fn insert_text(&mut self, kind: ShapeKind, frame: Rect, text: &str) -> ShapeId {
        self.insert_spec(ElementSpec::new(kind, frame).with_text(text))
    }

    fn insert_spec(&mut self, spec: ElementSpec) -> ShapeId {
        self.next_id += 1;
        let id = ShapeId(self.next_id);
        self.shapes.push(Shape {
            id,
            kind: spec.kind,
            frame: spec.frame,
            text: spec.text,
            fill: spec.fill.or(Some(Rgb::WHITE)),
            line: spec.line.unwrap_or_default(),
            font: spec.font.unwrap_or_default(),
        });
        id
    }

    /// Replace the selection.
    pub fn select(&mut self, ids: &[ShapeId]) {
        self.selected = ids.to_vec();
    }

    /// Select every shape, in z-order.
    pub fn select_all(&mut self) {
        self.selected = self.shapes.iter().map(|s| s.id).collect();
    }

    /// Look up a shape.
    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id == id)
    }

    /// Number of shapes on the slide.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Check if the slide is empty.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Number of times [`SlideHost::sync`] has been called.
    pub const fn sync_count(&self) -> usize {
        self.syncs
    }

    fn get_mut(&mut self, id: ShapeId) -> Result<&mut Shape> {
        self.shapes
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(Error::UnknownShape(id))
    }
}

impl SlideHost for MemoryHost {
    fn shapes(&self) -> Result<Vec<Shape>> {
        Ok(self.shapes.clone())
    }

    fn selection(&self) -> Result<Vec<Shape>> {
        self.selected
            .iter()
            .map(|&id| self.get(id).cloned().ok_or(Error::UnknownShape(id)))
            .collect()
    }

    fn set_frame(&mut self, id: ShapeId, frame: Rect) -> Result<()> {
        self.get_mut(id)?.frame = frame;
        Ok(())
    }

    fn set_fill(&mut self, id: ShapeId, fill: Option<Rgb>) -> Result<()> {
        self.get_mut(id)?.fill = fill;
        Ok(())
    }

    fn set_line(&mut self, id: ShapeId, line: LineFormat) -> Result<()> {
        self.get_mut(id)?.line = line;
        Ok(())
    }

    fn set_text(&mut self, id: ShapeId, text: &str) -> Result<()> {
        self.get_mut(id)?.text = Some(text.to_string());
        Ok(())
    }

    fn set_font(&mut self, id: ShapeId, font: &Font) -> Result<()> {
        self.get_mut(id)?.font = font.clone();
        Ok(())
    }

    fn add_shape(&mut self, spec: ElementSpec) -> Result<ShapeId> {
        Ok(self.insert_spec(spec))
    }

    fn delete_shape(&mut self, id: ShapeId) -> Result<()> {
        let before = self.shapes.len();
        self.shapes.retain(|s| s.id != id);
        if self.shapes.len() == before {
            return Err(Error::UnknownShape(id));
        }
        self.selected.retain(|&s| s != id);
        Ok(())
    }

    fn sync(&mut self) -> Result<()> {
        self.syncs += 1;
        Ok(())
    }
}
