//! Message types for actor communication.
//!
//! These define the protocol between the input thread and the engine.

use crate::command::Command;
use crate::error::{Error, Result};
use bitflags::bitflags;
use std::str::FromStr;

/// Key codes for keyboard input.
///
/// This is the subset of crossterm's `KeyCode` that shortcuts can bind to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A printable character, stored lower-case.
    Char(char),
    /// Function key (F1-F12).
    F(u8),
    /// Backspace key.
    Backspace,
    /// Enter/Return key.
    Enter,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Home key.
    Home,
    /// End key.
    End,
    /// Page Up.
    PageUp,
    /// Page Down.
    PageDown,
    /// Tab key.
    Tab,
    /// Delete key.
    Delete,
    /// Insert key.
    Insert,
    /// Escape key.
    Esc,
}

impl KeyCode {
    fn parse(token: &str) -> Option<Self> {
        let mut chars = token.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Some(Self::Char(c.to_ascii_lowercase()));
        }

        let lower = token.to_ascii_lowercase();
        if let Some(n) = lower.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
            return (1..=12).contains(&n).then_some(Self::F(n));
        }

        Some(match lower.as_str() {
            "space" => Self::Char(' '),
            "backspace" => Self::Backspace,
            "enter" | "return" => Self::Enter,
            "left" => Self::Left,
            "right" => Self::Right,
            "up" => Self::Up,
            "down" => Self::Down,
            "home" => Self::Home,
            "end" => Self::End,
            "pageup" | "pgup" => Self::PageUp,
            "pagedown" | "pgdn" => Self::PageDown,
            "tab" => Self::Tab,
            "delete" | "del" => Self::Delete,
            "insert" | "ins" => Self::Insert,
            "esc" | "escape" => Self::Esc,
            _ => return None,
        })
    }
}

impl std::fmt::Display for KeyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Char(' ') => f.write_str("Space"),
            Self::Char(c) => write!(f, "{}", c.to_ascii_uppercase()),
            Self::F(n) => write!(f, "F{n}"),
            other => write!(f, "{other:?}"),
        }
    }
}

bitflags! {
    /// Key modifiers.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct KeyModifiers: u8 {
        /// Control key held.
        const CONTROL = 0b0000_0001;
        /// Alt/Option key held.
        const ALT = 0b0000_0010;
        /// Shift key held.
        const SHIFT = 0b0000_0100;
        /// Super/Command/Windows key held.
        const SUPER = 0b0000_1000;
    }
}

impl std::fmt::Debug for KeyModifiers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        bitflags::parser::to_writer(self, f)
    }
}

/// A key plus the modifiers held with it, e.g. `Ctrl+Alt+L`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyChord {
    /// The key code.
    pub code: KeyCode,
    /// Modifiers held during keypress.
    pub modifiers: KeyModifiers,
}

impl KeyChord {
    /// Create a chord; character keys are folded to lower case.
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        let code = match code {
            KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
            other => other,
        };
        Self { code, modifiers }
    }

    /// A key with no modifiers.
    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::empty())
    }
}

impl FromStr for KeyChord {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut modifiers = KeyModifiers::empty();
        let mut code = None;

        for token in s.split('+').map(str::trim) {
            if token.is_empty() {
                return Err(Error::InvalidChord(s.to_string()));
            }
            let modifier = match token.to_ascii_lowercase().as_str() {
                "ctrl" | "control" => Some(KeyModifiers::CONTROL),
                "alt" | "option" | "opt" => Some(KeyModifiers::ALT),
                "shift" => Some(KeyModifiers::SHIFT),
                "super" | "cmd" | "win" | "meta" => Some(KeyModifiers::SUPER),
                _ => None,
            };
            match (modifier, code) {
                (Some(m), None) => modifiers |= m,
                (None, None) => {
                    code = Some(KeyCode::parse(token).ok_or_else(|| Error::InvalidChord(s.to_string()))?);
                }
                // Nothing may follow the key.
                (_, Some(_)) => return Err(Error::InvalidChord(s.to_string())),
            }
        }

        code.map(|code| Self::new(code, modifiers))
            .ok_or_else(|| Error::InvalidChord(s.to_string()))
    }
}

impl std::fmt::Display for KeyChord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (flag, label) in [
            (KeyModifiers::CONTROL, "Ctrl+"),
            (KeyModifiers::ALT, "Alt+"),
            (KeyModifiers::SHIFT, "Shift+"),
            (KeyModifiers::SUPER, "Super+"),
        ] {
            if self.modifiers.contains(flag) {
                f.write_str(label)?;
            }
        }
        write!(f, "{}", self.code)
    }
}

/// Events delivered to the engine.
#[derive(Debug, Clone)]
pub enum InputEvent {
    /// A key chord was pressed.
    Key(KeyChord),

    /// A front end (button, menu) asked for a command directly.
    Command(Command),

    /// Input thread encountered an error.
    Error(String),

    /// Input thread is shutting down.
    Shutdown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_chord() {
        let chord: KeyChord = "Ctrl+Alt+L".parse().unwrap();
        assert_eq!(chord.code, KeyCode::Char('l'));
        assert_eq!(chord.modifiers, KeyModifiers::CONTROL | KeyModifiers::ALT);
    }

    #[test]
    fn test_parse_chord_order_and_case_insensitive() {
        let a: KeyChord = "shift+alt+z".parse().unwrap();
        let b: KeyChord = "Alt + Shift + Z".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "Alt+Shift+Z");
    }

    #[test]
    fn test_parse_named_keys() {
        assert_eq!("Esc".parse::<KeyChord>().unwrap(), KeyChord::plain(KeyCode::Esc));
        assert_eq!("Ctrl+F5".parse::<KeyChord>().unwrap().code, KeyCode::F(5));
        assert_eq!("Space".parse::<KeyChord>().unwrap().to_string(), "Space");
    }

    #[test]
    fn test_parse_chord_errors() {
        for bad in ["", "Ctrl+", "Ctrl+Alt", "Ctrl+L+K", "Hyper+L", "F13", "Ctrl++L"] {
            assert!(
                matches!(bad.parse::<KeyChord>(), Err(Error::InvalidChord(_))),
                "{bad:?} should not parse"
            );
        }
    }

    #[test]
    fn test_chord_folds_case() {
        let upper = KeyChord::new(KeyCode::Char('H'), KeyModifiers::ALT | KeyModifiers::SHIFT);
        let lower: KeyChord = "Alt+Shift+h".parse().unwrap();
        assert_eq!(upper, lower);
    }
}
