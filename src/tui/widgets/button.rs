//! # Button Widget
//!
//! `[ label ]`, clicked with the mouse or Enter.
//!
//! A validating button is a form submit: it refuses to run its action while
//! any required text box is blank, and instead hands the error messages back
//! to the window for display.

use log::info;
use ratatui::layout::Rect;

use crate::core::error::FormError;
use crate::core::form::{Flow, FormContext, FormValues};
use crate::core::palette::ColorPair;
use crate::tui::widget::{Response, Surface, Widget, display_width};

/// Callback run with the form's current values.
pub type SubmitAction = Box<dyn FnMut(&FormValues) -> Flow>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonColors {
    pub normal: ColorPair,
    pub highlight: ColorPair,
}

impl Default for ButtonColors {
    fn default() -> Self {
        Self {
            normal: ColorPair::NORMAL,
            highlight: ColorPair::HIGHLIGHT,
        }
    }
}

pub struct Button {
    row: u16,
    col: u16,
    index: i32,
    label: String,
    action: SubmitAction,
    validate: bool,
    active: bool,
    colors: ButtonColors,
}

impl Button {
    pub fn new(
        row: u16,
        col: u16,
        label: impl Into<String>,
        action: impl FnMut(&FormValues) -> Flow + 'static,
    ) -> Self {
        Self {
            row,
            col,
            index: 0,
            label: label.into(),
            action: Box::new(action),
            validate: false,
            active: false,
            colors: ButtonColors::default(),
        }
    }

    /// Require every required text box to be filled before the action runs.
    pub fn validate(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    pub fn with_index(mut self, index: i32) -> Self {
        self.index = index;
        self
    }

    pub fn with_colors(mut self, colors: ButtonColors) -> Self {
        self.colors = colors;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    fn decorated(&self) -> String {
        format!("[ {} ]", self.label)
    }
}

impl Widget for Button {
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
        let pair = if self.active {
            self.colors.highlight
        } else {
            self.colors.normal
        };
        surface.put(self.row, self.col, &self.decorated(), pair.style())
    }

    fn hit_box(&self) -> Rect {
        Rect::new(self.col, self.row, display_width(&self.decorated()), 1)
    }

    fn handle_click(&mut self, ctx: &FormContext) -> Response {
        self.activate(ctx)
    }

    fn activate(&mut self, ctx: &FormContext) -> Response {
        if self.validate {
            let errors = ctx.missing_required();
            if !errors.is_empty() {
                info!(
                    "Button '{}' blocked: {} required field(s) empty",
                    self.label,
                    errors.len()
                );
                return Response::Rejected(errors);
            }
        }

        let values = ctx.values();
        info!("Button '{}' invoked with {} value(s)", self.label, values.len());
        match (self.action)(&values) {
            Flow::Exit => Response::Exit,
            Flow::Continue if self.validate => Response::Submitted,
            Flow::Continue => Response::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::form::FieldSnapshot;
    use ratatui::buffer::Buffer;
    use ratatui::layout::Position;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn ctx(fields: &[(&str, &str)]) -> FormContext {
        FormContext::new(
            fields
                .iter()
                .map(|(label, text)| FieldSnapshot {
                    label: label.to_string(),
                    text: text.to_string(),
                    required: true,
                })
                .collect(),
        )
    }

    fn recording_button(validate: bool) -> (Button, Rc<RefCell<Vec<FormValues>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);
        let button = Button::new(0, 0, "Submit", move |values: &FormValues| {
            sink.borrow_mut().push(values.clone());
            Flow::Continue
        })
        .validate(validate);
        (button, calls)
    }

    #[test]
    fn test_validation_blocks_action() {
        let (mut button, calls) = recording_button(true);
        let response = button.activate(&ctx(&[("Host: ", "db"), ("Port: ", " ")]));

        assert_eq!(
            response,
            Response::Rejected(vec![
                "Error: 'Port:' is required and cannot be empty.".to_string()
            ])
        );
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_valid_submit_passes_values() {
        let (mut button, calls) = recording_button(true);
        let response = button.activate(&ctx(&[("Host: ", "db"), ("Port: ", "5432")]));

        assert_eq!(response, Response::Submitted);
        let calls = calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].get("host:"), Some("db"));
        assert_eq!(calls[0].get("port:"), Some("5432"));
    }

    #[test]
    fn test_without_validation_blank_fields_pass() {
        let (mut button, calls) = recording_button(false);
        assert_eq!(button.activate(&ctx(&[("Host: ", "")])), Response::None);
        assert_eq!(calls.borrow().len(), 1);
    }

    #[test]
    fn test_exit_action() {
        let mut button = Button::new(0, 0, "Exit", |_: &FormValues| Flow::Exit);
        assert_eq!(button.handle_click(&FormContext::default()), Response::Exit);
    }

    #[test]
    fn test_render_and_hit_box() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 12, 1));
        let mut button = Button::new(0, 1, "Go", |_: &FormValues| Flow::Continue);
        button.render(&mut Surface::new(&mut buf)).unwrap();

        let line: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert_eq!(line, " [ Go ]     ");
        assert_eq!(buf[(1, 0)].bg, ColorPair::NORMAL.bg());

        button.set_active(true);
        button.render(&mut Surface::new(&mut buf)).unwrap();
        assert_eq!(buf[(1, 0)].bg, ColorPair::HIGHLIGHT.bg());

        let hit = button.hit_box();
        assert!(hit.contains(Position::new(1, 0)));
        assert!(hit.contains(Position::new(6, 0)));
        assert!(!hit.contains(Position::new(7, 0)));
    }
}
