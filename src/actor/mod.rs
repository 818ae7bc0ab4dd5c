//! Actor Model: Message-passing between the terminal and the engine.
//!
//! This module implements a small actor system using crossbeam channels:
//! - **Input Actor**: Polls terminal key events, forwards them as chords
//! - **Engine**: Looks chords up in the keymap and runs commands on the host
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     InputEvent      ┌──────────────┐   SlideHost   ┌──────────┐
//! │ Input Thread │ ─────────────────▶  │    Engine    │ ────────────▶ │  Slide   │
//! └──────────────┘                     └──────────────┘               └──────────┘
//!                                             │
//!                                             │ Notification
//!                                             ▼
//!                                       ┌──────────────┐
//!                                       │  Front end   │
//!                                       └──────────────┘
//! ```

mod engine;
mod input;
mod keymap;
mod messages;

pub use engine::Engine;
pub use input::InputActor;
pub use keymap::Keymap;
pub use messages::{InputEvent, KeyChord, KeyCode, KeyModifiers};
