//! Keymap: explicit chord to command table.
//!
//! Bindings are kept in insertion order so the quick-keys listing reads the
//! same way every time.

use super::messages::KeyChord;
use crate::command::Command;
use crate::elements::TemplateKind;
use crate::error::Result;
use crate::host::ShapeKind;
use crate::layout::{Alignment, Axis};
use std::collections::BTreeMap;
use std::fmt::Write as _;

/// Bindings shipped by default.
const DEFAULT_BINDINGS: [(&str, Command); 22] = [
    ("Shift+Alt+Z", Command::TextToAutoshape(ShapeKind::RoundRectangle)),
    ("Ctrl+Alt+J", Command::SplitJoinTextboxes),
    ("Shift+Alt+E", Command::MakeSameWidth),
    ("Ctrl+Alt+C", Command::Align(Alignment::Center)),
    ("Ctrl+Alt+L", Command::Align(Alignment::Left)),
    ("Ctrl+Alt+R", Command::Align(Alignment::Right)),
    ("Ctrl+Alt+M", Command::Align(Alignment::Middle)),
    ("Ctrl+Alt+Up", Command::Align(Alignment::Top)),
    ("Ctrl+Alt+Down", Command::Align(Alignment::Bottom)),
    ("Alt+Shift+H", Command::Distribute(Axis::Horizontal)),
    ("Alt+Shift+V", Command::Distribute(Axis::Vertical)),
    ("Ctrl+Alt+F", Command::InsertFootnote),
    ("Ctrl+Alt+G", Command::InsertLegend),
    ("Ctrl+Alt+S", Command::InsertSticker),
    ("Shift+Alt+A", Command::CycleAccentColors),
    ("Shift+Alt+B", Command::ApplyBrandColors { start: 0 }),
    ("Shift+Alt+G", Command::SnapToGrid),
    ("Shift+Alt+T", Command::InsertTemplate(TemplateKind::Content)),
    ("Shift+Alt+C", Command::InsertTemplate(TemplateKind::Chart)),
    ("Ctrl+Alt+P", Command::GreenPrint),
    ("Ctrl+Alt+Q", Command::ShowQuickKeys),
    ("Ctrl+Alt+Y", Command::ResetElements),
];

/// Ordered chord to command table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keymap {
    bindings: Vec<(KeyChord, Command)>,
}

impl Keymap {
    /// A keymap with no bindings.
    pub const fn empty() -> Self {
        Self { bindings: Vec::new() }
    }

    /// Default bindings with `overrides` (chord string to action string) applied on top.
    pub fn with_overrides(overrides: &BTreeMap<String, String>) -> Result<Self> {
        let mut keymap = Self::default();
        for (chord, action) in overrides {
            let chord: KeyChord = chord.parse()?;
            let command: Command = action.parse()?;
            log::debug!("binding {chord} to {}", command.action());
            keymap.bind(chord, command);
        }
        Ok(keymap)
    }

    /// Bind `chord`, replacing whatever it was bound to before.
    pub fn bind(&mut self, chord: KeyChord, command: Command) {
        if let Some(slot) = self.bindings.iter_mut().find(|(c, _)| *c == chord) {
            slot.1 = command;
        } else {
            self.bindings.push((chord, command));
        }
    }

    /// Command bound to `chord`, if any.
    pub fn lookup(&self, chord: KeyChord) -> Option<Command> {
        self.bindings.iter().find(|(c, _)| *c == chord).map(|(_, command)| *command)
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Check if nothing is bound.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Iterate over bindings in order.
    pub fn iter(&self) -> impl Iterator<Item = &(KeyChord, Command)> {
        self.bindings.iter()
    }

    /// The quick-keys listing, one `chord  description` line per binding.
    pub fn help_text(&self) -> String {
        let width = self
            .bindings
            .iter()
            .map(|(chord, _)| chord.to_string().len())
            .max()
            .unwrap_or(0);

        let mut text = String::from("Keyboard shortcuts:");
        for (chord, command) in &self.bindings {
            let _ = write!(text, "\n{:<width$}  {}", chord.to_string(), command.description());
        }
        text
    }
}

impl Default for Keymap {
    fn default() -> Self {
        let mut keymap = Self::empty();
        for (chord, command) in DEFAULT_BINDINGS {
            if let Ok(chord) = chord.parse() {
                keymap.bind(chord, command);
            }
        }
        keymap
    }
}
