//! # Deckhand
//!
//! Keyboard-driven layout and formatting commands for slide decks.
//!
//! Deckhand is a small geometry and styling core plus a shortcut engine. A
//! presentation host is plugged in through the [`SlideHost`] trait; every
//! command reads the selection, computes new frames or colours with pure
//! helpers, writes them back and reports a [`Notification`].
//!
//! ## Core Concepts
//!
//! - **Pure geometry**: bounding boxes, alignment, distribution and grid snapping
//! - **Palettes**: cyclic brand and accent colours, typography presets
//! - **Elements**: footnotes, legends, numbered stickers and slide templates
//! - **Actor model**: a terminal input thread feeding the shortcut [`Engine`]
//!
//! ## Example
//!
//! ```rust
//! use deckhand::{align_to, bounding_box, Alignment, Rect};
//!
//! let frames = [Rect::new(10.0, 10.0, 40.0, 20.0), Rect::new(80.0, 50.0, 20.0, 20.0)];
//!
//! let bbox = bounding_box(&frames).unwrap();
//! assert_eq!(bbox.right, 100.0);
//!
//! let aligned = align_to(&frames, Alignment::Left, None).unwrap();
//! assert!(aligned.iter().all(|r| r.left == 10.0));
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod actor;
pub mod command;
pub mod config;
pub mod elements;
pub mod error;
pub mod host;
pub mod layout;
pub mod notify;
pub mod style;

// Re-exports for convenience
pub use actor::{Engine, InputEvent, KeyChord, KeyCode, KeyModifiers, Keymap};
pub use command::{execute, Command};
pub use config::Config;
pub use elements::{next_sticker_number, ElementSpec, TemplateKind};
pub use error::{Error, Result};
pub use host::{MemoryHost, Shape, ShapeId, ShapeKind, SlideHost};
pub use layout::{align_to, bounding_box, distribute, snap_to_grid, Alignment, Axis, BoundingBox, Bounds, Rect};
pub use notify::{Notification, Severity};
pub use style::{cycle_color, Font, FontStyle, Rgb, TextRole};
