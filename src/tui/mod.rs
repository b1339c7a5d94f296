//! # Window Controller
//!
//! Owns the terminal, the event source, the palette and every widget, and
//! runs the form's event loop.
//!
//! ## Loop
//!
//! ```text
//! ┌─► draw all widgets + notice region, place caret, flush
//! │   block for one event
//! │   dispatch:
//! │     mouse     → hit-test every widget, last match takes focus
//! │     Up/Down   → move focus (wraps)
//! │     Enter     → focused.activate()
//! │     chars     → focused.handle_key()
//! └── repeat until an action returns Flow::Exit or Ctrl+C
//! ```
//!
//! Everything happens on one thread. An event is handled completely, actions
//! included, before the next one is read.
//!
//! A `SteadyBlock` cursor is used so the caret does not flicker when the
//! whole form is redrawn after every event.

pub mod event;
pub mod widget;
pub mod widgets;

use log::{debug, info};
use std::io::stdout;

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::backend::Backend;
use ratatui::layout::Position;
use ratatui::{DefaultTerminal, Frame, Terminal};

use crate::core::config::NoticeSettings;
use crate::core::error::FormError;
use crate::core::form::{Flow, FormContext, FormValues};
use crate::core::palette::{ColorPair, Palette};
use crate::tui::event::{EditKey, EventSource, FormEvent, TerminalEvents};
use crate::tui::widget::{Response, Surface, Widget};

/// What the notice region currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum Notice {
    #[default]
    Empty,
    Errors(Vec<String>),
    Submitted,
}

pub struct Window<B: Backend, E: EventSource> {
    terminal: Terminal<B>,
    events: E,
    palette: Palette,
    widgets: Vec<Box<dyn Widget>>,
    focus: usize,
    notice: Notice,
    notice_settings: NoticeSettings,
}

impl<B, E> Window<B, E>
where
    B: Backend,
    E: EventSource,
    FormError: From<B::Error>,
{
    /// Takes ownership of the widgets and orders them by index.
    ///
    /// Widgets sharing an index keep the order they were passed in. The first
    /// widget starts out focused.
    pub fn new(
        terminal: Terminal<B>,
        events: E,
        palette: Palette,
        mut widgets: Vec<Box<dyn Widget>>,
    ) -> Result<Self, FormError> {
        if widgets.is_empty() {
            return Err(FormError::NoWidgets);
        }
        widgets.sort_by_key(|w| w.index());
        for widget in widgets.iter_mut() {
            widget.set_active(false);
        }
        widgets[0].set_active(true);

        Ok(Self {
            terminal,
            events,
            palette,
            widgets,
            focus: 0,
            notice: Notice::Empty,
            notice_settings: NoticeSettings::default(),
        })
    }

    pub fn with_notice(mut self, settings: NoticeSettings) -> Self {
        self.notice_settings = settings;
        self
    }

    /// Runs the event loop until an action asks to exit.
    pub fn run(&mut self) -> Result<(), FormError> {
        info!("Form loop starting with {} widgets", self.widgets.len());
        loop {
            self.draw()?;
            let Some(event) = self.events.next_event()? else {
                continue;
            };
            if self.handle_event(event) == Flow::Exit {
                info!("Form loop exiting");
                return Ok(());
            }
        }
    }

    /// Draws every widget and the notice region, then flushes.
    pub fn draw(&mut self) -> Result<(), FormError> {
        let widgets = &self.widgets;
        let focus = self.focus;
        let lines = self.notice_lines();
        let notice_style = self
            .palette
            .pair(ColorPair::ALERT.id())
            .unwrap_or(ColorPair::ALERT)
            .style();
        let (row, col) = (self.notice_settings.row, self.notice_settings.col);

        let mut outcome = Ok(());
        self.terminal.draw(|frame| {
            outcome = render_form(frame, widgets, focus, |surface| {
                for (offset, line) in (0u16..).zip(&lines) {
                    surface.put(row.saturating_add(offset), col, line, notice_style)?;
                }
                Ok(())
            });
        })?;
        outcome
    }

    /// Applies one input event. Returns `Flow::Exit` when the loop should stop.
    pub fn handle_event(&mut self, event: FormEvent) -> Flow {
        debug!("Form event: {:?} (focus={})", event, self.focus);
        match event {
            FormEvent::Mouse { row, col } => self.click(Position::new(col, row)),
            FormEvent::Erase => {
                self.widgets[self.focus].handle_key(EditKey::Backspace);
                Flow::Continue
            }
            FormEvent::Char(c) => {
                self.widgets[self.focus].handle_key(EditKey::Char(c));
                Flow::Continue
            }
            FormEvent::Prev => {
                self.focus_prev();
                Flow::Continue
            }
            FormEvent::Next => {
                self.focus_next();
                Flow::Continue
            }
            FormEvent::Confirm => {
                let ctx = self.context();
                match self.widgets[self.focus].activate(&ctx) {
                    Response::FocusNext => {
                        self.focus_next();
                        Flow::Continue
                    }
                    response => self.settle(response),
                }
            }
            FormEvent::Interrupt => {
                info!("Interrupted");
                Flow::Exit
            }
        }
    }

    /// Moves focus one widget forward, wrapping at the end.
    pub fn focus_next(&mut self) {
        let next = (self.focus + 1) % self.widgets.len();
        self.move_focus(next);
    }

    /// Moves focus one widget back, wrapping at the start.
    pub fn focus_prev(&mut self) {
        let len = self.widgets.len();
        let prev = (self.focus + len - 1) % len;
        self.move_focus(prev);
    }

    fn move_focus(&mut self, to: usize) {
        self.widgets[self.focus].set_active(false);
        self.focus = to;
        self.widgets[self.focus].set_active(true);
        debug!("Focus moved to widget {} (index {})", to, self.widgets[to].index());
    }

    /// Mouse press: every widget is deactivated, and every widget whose hit
    /// box contains the point is focused, activated and clicked in turn.
    /// With overlapping boxes the last match keeps focus.
    fn click(&mut self, at: Position) -> Flow {
        let ctx = self.context();
        for (i, widget) in self.widgets.iter_mut().enumerate() {
            widget.set_active(false);
            if !widget.hit_box().contains(at) {
                continue;
            }
            self.focus = i;
            widget.set_active(true);
            match widget.handle_click(&ctx) {
                Response::Exit => return Flow::Exit,
                response => update_notice(&mut self.notice, response),
            }
        }
        Flow::Continue
    }

    fn settle(&mut self, response: Response) -> Flow {
        if response == Response::Exit {
            return Flow::Exit;
        }
        update_notice(&mut self.notice, response);
        Flow::Continue
    }

    /// Read-only snapshot of every text box, in widget order.
    pub fn context(&self) -> FormContext {
        FormContext::new(self.widgets.iter().filter_map(|w| w.field()).collect())
    }

    /// Current text box values keyed by normalized label.
    pub fn values(&self) -> FormValues {
        self.context().values()
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn focused(&self) -> &dyn Widget {
        self.widgets[self.focus].as_ref()
    }

    pub fn widgets(&self) -> &[Box<dyn Widget>] {
        &self.widgets
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn backend(&self) -> &B {
        self.terminal.backend()
    }

    /// Lines the notice region will draw on the next frame.
    pub fn notice_lines(&self) -> Vec<String> {
        match &self.notice {
            Notice::Empty => Vec::new(),
            Notice::Errors(errors) => std::iter::once(self.notice_settings.error_header.clone())
                .chain(errors.iter().cloned())
                .collect(),
            Notice::Submitted => vec![self.notice_settings.success_message.clone()],
        }
    }
}

fn update_notice(notice: &mut Notice, response: Response) {
    match response {
        Response::Rejected(errors) => *notice = Notice::Errors(errors),
        Response::Submitted => *notice = Notice::Submitted,
        Response::None | Response::FocusNext | Response::Exit => {}
    }
}

fn render_form(
    frame: &mut Frame,
    widgets: &[Box<dyn Widget>],
    focus: usize,
    notice: impl FnOnce(&mut Surface<'_>) -> Result<(), FormError>,
) -> Result<(), FormError> {
    {
        let mut surface = Surface::new(frame.buffer_mut());
        for widget in widgets {
            widget.render(&mut surface)?;
        }
        notice(&mut surface)?;
    }
    if let Some(caret) = widgets[focus].caret() {
        frame.set_cursor_position(caret);
    }
    Ok(())
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            Show,                        // Caret marks the text insertion point
            SetCursorStyle::SteadyBlock, // Non-blinking: every event triggers a full redraw
        )?;
        info!("Terminal modes enabled (mouse capture, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, SetCursorStyle::DefaultUserShape, Show);
    }
}

/// Takes over the real terminal, runs the form, and restores the terminal
/// whether the loop ends cleanly or with an error.
pub fn run(
    palette: Palette,
    widgets: Vec<Box<dyn Widget>>,
    notice: NoticeSettings,
) -> Result<(), FormError> {
    let terminal = ratatui::init();
    let result = run_in(terminal, palette, widgets, notice);
    ratatui::restore();
    result
}

fn run_in(
    terminal: DefaultTerminal,
    palette: Palette,
    widgets: Vec<Box<dyn Widget>>,
    notice: NoticeSettings,
) -> Result<(), FormError> {
    let _terminal_mode_guard = TerminalModeGuard::new()?;
    let mut window = Window::new(terminal, TerminalEvents, palette, widgets)?.with_notice(notice);
    window.run()
}
