use std::convert::Infallible;
use std::fmt;

use crate::core::palette::PaletteError;

/// Fatal errors surfaced by the form framework.
///
/// Validation failures are not errors: they are reported back to the user
/// inside the form and the loop continues.
#[derive(Debug)]
pub enum FormError {
    /// Terminal I/O failed (drawing, flushing, or reading input).
    Io(std::io::Error),
    /// A widget tried to draw starting outside the terminal area.
    OutOfBounds { row: u16, col: u16, width: u16, height: u16 },
    /// A window was built without any widgets.
    NoWidgets,
    /// Color registration collided with an earlier one.
    Palette(PaletteError),
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::Io(e) => write!(f, "terminal I/O error: {e}"),
            FormError::OutOfBounds { row, col, width, height } => write!(
                f,
                "draw at row {row}, col {col} is outside the {width}x{height} terminal"
            ),
            FormError::NoWidgets => write!(f, "a window needs at least one widget"),
            FormError::Palette(e) => write!(f, "palette error: {e}"),
        }
    }
}

impl std::error::Error for FormError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FormError::Io(e) => Some(e),
            FormError::Palette(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for FormError {
    fn from(e: std::io::Error) -> Self {
        FormError::Io(e)
    }
}

impl From<PaletteError> for FormError {
    fn from(e: PaletteError) -> Self {
        FormError::Palette(e)
    }
}

// TestBackend never fails to draw.
impl From<Infallible> for FormError {
    fn from(e: Infallible) -> Self {
        match e {}
    }
}
