//! # TextBox Widget
//!
//! A labelled single-line text field of fixed width.
//!
//! ```text
//! Enter the admin server IP: 10.0.0.1__________
//! └──────── label ─────────┘└─── max_length ───┘
//! ```
//!
//! Only the text area responds to the mouse. Enter moves focus on instead of
//! editing; validation happens later, in the submitting button.

use ratatui::layout::{Position, Rect};

use crate::core::error::FormError;
use crate::core::form::FieldSnapshot;
use crate::core::palette::ColorPair;
use crate::tui::event::EditKey;
use crate::tui::widget::{Surface, Widget, display_width};

/// Color handles for a text box. Each style takes its foreground from the
/// `*_fg` pair and its background from the `*_bg` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextBoxColors {
    pub label_fg: ColorPair,
    pub label_bg: ColorPair,
    pub text_fg: ColorPair,
    pub text_bg: ColorPair,
    pub highlight_fg: ColorPair,
    pub highlight_bg: ColorPair,
}

impl Default for TextBoxColors {
    fn default() -> Self {
        Self {
            label_fg: ColorPair::FIELD,
            label_bg: ColorPair::FIELD,
            text_fg: ColorPair::FIELD,
            text_bg: ColorPair::FIELD,
            highlight_fg: ColorPair::HIGHLIGHT,
            highlight_bg: ColorPair::HIGHLIGHT,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TextBox {
    row: u16,
    col: u16,
    index: i32,
    label: String,
    text: String,
    max_length: usize,
    required: bool,
    active: bool,
    colors: TextBoxColors,
}

impl TextBox {
    pub fn new(row: u16, col: u16, label: impl Into<String>, max_length: usize) -> Self {
        Self {
            row,
            col,
            index: 0,
            label: label.into(),
            text: String::new(),
            max_length,
            required: false,
            active: false,
            colors: TextBoxColors::default(),
        }
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn with_index(mut self, index: i32) -> Self {
        self.index = index;
        self
    }

    pub fn with_colors(mut self, colors: TextBoxColors) -> Self {
        self.colors = colors;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    fn text_col(&self) -> u16 {
        self.col.saturating_add(display_width(&self.label))
    }
}

impl Widget for TextBox {
    fn index(&self) -> i32 {
        self.index
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    fn render(&self, surface: &mut Surface<'_>) -> Result<(), FormError> {
        let c = &self.colors;
        surface.put(
            self.row,
            self.col,
            &self.label,
            ColorPair::compose(c.label_fg, c.label_bg),
        )?;

        let text_style = if self.active {
            ColorPair::compose(c.highlight_fg, c.highlight_bg)
        } else {
            ColorPair::compose(c.text_fg, c.text_bg)
        };
        let padded = format!("{:<width$}", self.text, width = self.max_length);
        surface.put(self.row, self.text_col(), &padded, text_style)
    }

    fn hit_box(&self) -> Rect {
        let width = u16::try_from(self.max_length).unwrap_or(u16::MAX);
        Rect::new(self.text_col(), self.row, width, 1)
    }

    fn handle_key(&mut self, key: EditKey) {
        match key {
            EditKey::Backspace => {
                self.text.pop();
            }
            EditKey::Char(c) => {
                if self.text.chars().count() < self.max_length {
                    self.text.push(c);
                }
            }
        }
    }

    fn caret(&self) -> Option<Position> {
        Some(Position::new(
            self.text_col().saturating_add(display_width(&self.text)),
            self.row,
        ))
    }

    fn field(&self) -> Option<FieldSnapshot> {
        Some(FieldSnapshot {
            label: self.label.clone(),
            text: self.text.clone(),
            required: self.required,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::form::FormContext;
    use crate::tui::widget::Response;
    use ratatui::buffer::Buffer;

    fn type_str(tb: &mut TextBox, s: &str) {
        for c in s.chars() {
            tb.handle_key(EditKey::Char(c));
        }
    }

    #[test]
    fn test_backspace_on_empty_never_underflows() {
        let mut tb = TextBox::new(0, 0, "Name: ", 5);
        for _ in 0..10 {
            tb.handle_key(EditKey::Backspace);
        }
        assert_eq!(tb.text(), "");
    }

    #[test]
    fn test_input_stops_at_max_length() {
        let mut tb = TextBox::new(0, 0, "Pin: ", 4);
        type_str(&mut tb, "123456");
        assert_eq!(tb.text(), "1234");

        tb.handle_key(EditKey::Backspace);
        type_str(&mut tb, "9");
        assert_eq!(tb.text(), "1239");
    }

    #[test]
    fn test_enter_passes_focus_along() {
        let mut tb = TextBox::new(0, 0, "Name: ", 5);
        type_str(&mut tb, "ab");
        assert_eq!(tb.activate(&FormContext::default()), Response::FocusNext);
        assert_eq!(tb.text(), "ab");
    }

    #[test]
    fn test_hit_box_covers_text_area_only() {
        let tb = TextBox::new(2, 2, "IP: ", 10);
        let hit = tb.hit_box();
        assert!(!hit.contains(Position::new(2, 2)));
        assert!(hit.contains(Position::new(6, 2)));
        assert!(hit.contains(Position::new(15, 2)));
        assert!(!hit.contains(Position::new(16, 2)));
        assert!(!hit.contains(Position::new(6, 3)));
    }

    #[test]
    fn test_caret_follows_text() {
        let mut tb = TextBox::new(3, 1, "User: ", 10);
        assert_eq!(tb.caret(), Some(Position::new(7, 3)));
        type_str(&mut tb, "root");
        assert_eq!(tb.caret(), Some(Position::new(11, 3)));
    }

    #[test]
    fn test_render_pads_and_highlights() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 20, 1));
        let mut tb = TextBox::new(0, 0, "A: ", 6);
        type_str(&mut tb, "xy");
        tb.set_active(true);

        tb.render(&mut Surface::new(&mut buf)).unwrap();

        let line: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(line.starts_with("A: xy    "));
        assert_eq!(buf[(3, 0)].fg, ColorPair::HIGHLIGHT.fg());
        assert_eq!(buf[(8, 0)].bg, ColorPair::HIGHLIGHT.bg());
        assert_eq!(buf[(0, 0)].bg, ColorPair::FIELD.bg());
    }

    #[test]
    fn test_field_snapshot() {
        let mut tb = TextBox::new(0, 0, "Port: ", 5).required(true);
        type_str(&mut tb, "22");
        let field = tb.field().unwrap();
        assert_eq!(field.label, "Port: ");
        assert_eq!(field.text, "22");
        assert!(field.required);
    }
}
