use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::Style;
use unicode_width::UnicodeWidthStr;

use crate::core::error::FormError;
use crate::core::form::{FieldSnapshot, FormContext};
use crate::tui::event::EditKey;

/// What a widget asks of the window after handling an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Nothing for the window to do.
    None,
    /// Move focus forward, as if Tab had been pressed.
    FocusNext,
    /// Submission blocked; show these messages.
    Rejected(Vec<String>),
    /// A validated submission went through.
    Submitted,
    /// Leave the event loop.
    Exit,
}

/// A focusable, drawable form element.
///
/// The window owns every widget and calls into them one at a time. Widgets
/// never see each other: anything they need from their siblings arrives as a
/// [`FormContext`] argument.
///
/// Only `index`, the active flag, `render` and `hit_box` are mandatory. The
/// input hooks default to doing nothing, so each variant implements the
/// subset it supports.
pub trait Widget {
    /// Caller-assigned ordering key. Lower indices come first.
    fn index(&self) -> i32;

    fn is_active(&self) -> bool;

    fn set_active(&mut self, active: bool);

    /// Draw the widget. Must not change widget state.
    fn render(&self, surface: &mut Surface<'_>) -> Result<(), FormError>;

    /// Screen cells that respond to a mouse press.
    fn hit_box(&self) -> Rect;

    /// Editing input while focused.
    fn handle_key(&mut self, _key: EditKey) {}

    /// Mouse press inside `hit_box`. Focus has already moved here.
    fn handle_click(&mut self, _ctx: &FormContext) -> Response {
        Response::None
    }

    /// Enter while focused. Widgets without an action pass focus along.
    fn activate(&mut self, _ctx: &FormContext) -> Response {
        Response::FocusNext
    }

    /// Where the terminal caret belongs while this widget has focus.
    fn caret(&self) -> Option<Position> {
        None
    }

    /// The widget's contribution to submitted form values, if any.
    fn field(&self) -> Option<FieldSnapshot> {
        None
    }
}

/// Bounds-checked drawing on top of a ratatui buffer.
pub struct Surface<'a> {
    buf: &'a mut Buffer,
}

impl<'a> Surface<'a> {
    pub fn new(buf: &'a mut Buffer) -> Self {
        Self { buf }
    }

    pub fn area(&self) -> Rect {
        self.buf.area
    }

    /// Writes `text` starting at (`row`, `col`).
    ///
    /// The start cell must lie inside the terminal. Text running past the
    /// right edge is clipped.
    pub fn put(&mut self, row: u16, col: u16, text: &str, style: Style) -> Result<(), FormError> {
        let area = self.buf.area;
        if !area.contains(Position::new(col, row)) {
            return Err(FormError::OutOfBounds {
                row,
                col,
                width: area.width,
                height: area.height,
            });
        }
        self.buf.set_string(col, row, text, style);
        Ok(())
    }
}

/// Terminal columns occupied by `text`.
pub fn display_width(text: &str) -> u16 {
    u16::try_from(text.width()).unwrap_or(u16::MAX)
}
