//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::VecDeque;

use ratatui::Terminal;
use ratatui::backend::TestBackend;

use crate::core::palette::Palette;
use crate::tui::Window;
use crate::tui::event::{EventSource, FormEvent};
use crate::tui::widget::Widget;

/// Replays a fixed list of events, then interrupts.
pub struct ScriptedEvents(VecDeque<FormEvent>);

impl ScriptedEvents {
    pub fn new(events: Vec<FormEvent>) -> Self {
        Self(events.into())
    }
}

impl EventSource for ScriptedEvents {
    fn next_event(&mut self) -> std::io::Result<Option<FormEvent>> {
        Ok(Some(self.0.pop_front().unwrap_or(FormEvent::Interrupt)))
    }
}

/// Creates an 80x24 test window over the given widgets.
pub fn test_window(
    widgets: Vec<Box<dyn Widget>>,
    events: Vec<FormEvent>,
) -> Window<TestBackend, ScriptedEvents> {
    let terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    Window::new(terminal, ScriptedEvents::new(events), Palette::new(), widgets).unwrap()
}

/// Sends each character of `text` to the focused widget.
pub fn type_text(window: &mut Window<TestBackend, ScriptedEvents>, text: &str) {
    for c in text.chars() {
        window.handle_event(FormEvent::Char(c));
    }
}

/// Text of one screen row as last drawn.
pub fn screen_line(window: &Window<TestBackend, ScriptedEvents>, row: u16) -> String {
    let buffer = window.backend().buffer();
    let width = buffer.area.width;
    (0..width).map(|x| buffer[(x, row)].symbol()).collect()
}
