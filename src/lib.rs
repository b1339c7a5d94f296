//! termform: a small immediate-mode terminal form framework.

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

pub use crate::core::error::FormError;
pub use crate::core::form::{Flow, FormValues};
pub use crate::core::palette::{ColorPair, Palette, Rgb};
pub use crate::tui::Window;
