//! Config: canvas geometry, palettes, key bindings and input timing.
//!
//! Every field has a default, so a JSON document only needs to name what it
//! overrides:
//!
//! ```
//! let config = deckhand::Config::from_json(r#"{ "grid_size": 10 }"#).unwrap();
//! assert_eq!(config.grid_size, 10.0);
//! assert_eq!(config.canvas_width, 720.0);
//! ```

use crate::error::Result;
use crate::layout::Bounds;
use crate::style::{hex, Rgb, ACCENT_CYCLE, BRAND_CYCLE};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

/// Configuration shared by the command layer and the engine.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Slide width in points (10 in at 72 dpi).
    pub canvas_width: f64,
    /// Slide height in points (7.5 in at 72 dpi).
    pub canvas_height: f64,
    /// Top margin.
    pub margin_top: f64,
    /// Bottom margin.
    pub margin_bottom: f64,
    /// Left margin.
    pub margin_left: f64,
    /// Right margin.
    pub margin_right: f64,
    /// Width of the area between the side margins.
    pub content_width: f64,
    /// Height of the area between the top and bottom margins.
    pub content_height: f64,
    /// Lattice used by "snap to grid".
    pub grid_size: f64,
    /// Palette walked by "cycle accent colours"; entries are `#RRGGBB` in JSON.
    pub accent_palette: Vec<Rgb>,
    /// Brand palette, used when applying colours from a start index.
    pub brand_palette: Vec<Rgb>,
    /// How long the input actor waits for an event before checking shutdown.
    pub input_poll_timeout_ms: u64,
    /// Extra key bindings, chord (`"Ctrl+Alt+L"`) to action id (`"AlignLeft"`).
    pub key_bindings: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            canvas_width: 720.0,
            canvas_height: 540.0,
            margin_top: 50.0,
            margin_bottom: 50.0,
            margin_left: 50.0,
            margin_right: 50.0,
            content_width: 620.0,
            content_height: 440.0,
            grid_size: 20.0,
            accent_palette: ACCENT_CYCLE.into_iter().map(hex).collect(),
            brand_palette: BRAND_CYCLE.into_iter().map(hex).collect(),
            input_poll_timeout_ms: 10,
            key_bindings: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Decode a JSON document; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and decode a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json(&text)?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Canvas size, validated.
    pub fn canvas(&self) -> Result<Bounds> {
        Bounds::new(self.canvas_width, self.canvas_height)
    }

    /// Input poll timeout as a [`Duration`].
    pub const fn input_poll_timeout(&self) -> Duration {
        Duration::from_millis(self.input_poll_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.canvas().unwrap(), Bounds { width: 720.0, height: 540.0 });
        assert_eq!(config.accent_palette.len(), 5);
        assert_eq!(config.accent_palette[0], Rgb::from_u32(0x00A651));
        assert_eq!(config.brand_palette[0], Rgb::from_u32(0x0078D4));
        assert_eq!(config.input_poll_timeout(), Duration::from_millis(10));
    }

    #[test]
    fn test_config_partial_json() {
        let config = Config::from_json(r##"{ "canvas_width": 960, "accent_palette": ["#000000"] }"##).unwrap();
        assert_eq!(config.canvas_width, 960.0);
        assert_eq!(config.canvas_height, 540.0);
        assert_eq!(config.accent_palette, vec![Rgb::BLACK]);
        assert!(config.key_bindings.is_empty());
    }

    #[test]
    fn test_config_rejects_bad_palette_colour() {
        let result = Config::from_json(r##"{ "accent_palette": ["#000000", "nope"] }"##);
        assert!(matches!(result, Err(Error::Config(_))));
        assert!(Config::from_json(r##"{ "brand_palette": ["#12345"] }"##).is_err());
    }

    #[test]
    fn test_config_key_bindings() {
        let config = Config::from_json(r#"{ "key_bindings": { "Ctrl+Shift+L": "AlignLeft" } }"#).unwrap();
        assert_eq!(config.key_bindings.get("Ctrl+Shift+L").map(String::as_str), Some("AlignLeft"));
    }

    #[test]
    fn test_config_bad_json() {
        assert!(matches!(Config::from_json("{ nope"), Err(Error::Config(_))));
        assert!(matches!(Config::load("/nonexistent/deckhand.json"), Err(Error::Io(_))));
    }

    #[test]
    fn test_config_invalid_canvas() {
        let config = Config { canvas_width: -1.0, ..Config::default() };
        assert!(config.canvas().is_err());
    }
}
