//! Style module: colours, palettes and fonts.

mod color;
pub mod palette;
mod text;

pub use color::Rgb;
pub use palette::{cycle_color, palette_run, ACCENT_CYCLE, BRAND_CYCLE};
pub use text::{Font, FontStyle, TextRole, PRIMARY_FONT};
pub(crate) use text::hex;
