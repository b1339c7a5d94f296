//! # CheckList Widget
//!
//! A checkbox with a label: `[ x ]Option 1`.
//!
//! Toggles are debounced. Some terminals report a single physical click more
//! than once, so a toggle arriving within the debounce interval of the last
//! accepted one is dropped.

use log::debug;
use ratatui::layout::Rect;
use std::time::{Duration, Instant};

use crate::core::error::FormError;
use crate::core::form::FormContext;
use crate::core::palette::ColorPair;
use crate::tui::widget::{Response, Surface, Widget, display_width};

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Columns taken by the `[ x ]` glyph.
const GLYPH_WIDTH: u16 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckListColors {
    /// Brackets around the mark.
    pub checkbox: ColorPair,
    /// Foreground of the `x` mark.
    pub mark: ColorPair,
    pub label: ColorPair,
    pub highlight: ColorPair,
}

impl Default for CheckListColors {
    fn default() -> Self {
        Self {
            checkbox: ColorPair::NORMAL,
            mark: ColorPair::NORMAL,
            label: ColorPair::NORMAL,
            highlight: ColorPair::HIGHLIGHT,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CheckList {
    row: u16,
    col: u16,
    index: i32,
    label: String,
    checked: bool,
    last_toggle: Option<Instant>,
    debounce: Duration,
    active: bool,
    colors: CheckListColors,
}

impl CheckList {
    pub fn new(row: u16, col: u16, label: impl Into<String>, checked: bool) -> Self {
        Self {
            row,
            col,
            index: 0,
            label: label.into(),
            checked,
            last_toggle: None,
            debounce: DEFAULT_DEBOUNCE,
            active: false,
            colors: CheckListColors::default(),
        }
    }

    pub fn with_index(mut self, index: i32) -> Self {
        self.index = index;
        self
    }

    pub fn with_colors(mut self, colors: CheckListColors) -> Self {
        self.colors = colors;
        self
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Flips the checked state unless the last accepted toggle was too recent.
    /// Returns whether the state changed.
    pub fn toggle(&mut self) -> bool {
        self.toggle_at(Instant::now())
    }

    fn toggle_at(&mut self, now: Instant) -> bool {
        if let Some(last) = self.last_toggle
            && now.saturating_duration_since(last) <= self.debounce
        {
            debug!("CheckList '{}' toggle debounced", self.label);
            return false;
        }
        self.checked = !self.checked;
        self.last_toggle = Some(now);
        debug!("CheckList '{}' now {}", self.label, self.checked);
        true
    }
}

impl Widget for CheckList {
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
        let box_style = c.checkbox.style();
        let mark = if self.checked { "x" } else { " " };

        surface.put(self.row, self.col, "[ ", box_style)?;
        surface.put(
            self.row,
            self.col.saturating_add(2),
            mark,
            ColorPair::compose(c.mark, c.checkbox),
        )?;
        surface.put(self.row, self.col.saturating_add(3), " ]", box_style)?;

        let label_pair = if self.active { c.highlight } else { c.label };
        surface.put(
            self.row,
            self.col.saturating_add(GLYPH_WIDTH),
            &self.label,
            label_pair.style(),
        )
    }

    fn hit_box(&self) -> Rect {
        Rect::new(
            self.col,
            self.row,
            GLYPH_WIDTH.saturating_add(display_width(&self.label)),
            1,
        )
    }

    fn handle_click(&mut self, _ctx: &FormContext) -> Response {
        self.toggle();
        Response::None
    }

    fn activate(&mut self, _ctx: &FormContext) -> Response {
        self.toggle();
        Response::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::buffer::Buffer;

    #[test]
    fn test_first_toggle_always_accepted() {
        let mut cl = CheckList::new(0, 0, "Option", false);
        assert!(cl.toggle());
        assert!(cl.is_checked());
    }

    #[test]
    fn test_toggles_within_debounce_change_once() {
        let mut cl = CheckList::new(0, 0, "Option", false);
        let t0 = Instant::now();
        assert!(cl.toggle_at(t0));
        assert!(!cl.toggle_at(t0 + Duration::from_millis(100)));
        assert!(!cl.toggle_at(t0 + DEFAULT_DEBOUNCE));
        assert!(cl.is_checked());
    }

    #[test]
    fn test_toggles_past_debounce_change_twice() {
        let mut cl = CheckList::new(0, 0, "Option", true);
        let t0 = Instant::now();
        assert!(cl.toggle_at(t0));
        assert!(cl.toggle_at(t0 + Duration::from_millis(301)));
        assert!(cl.is_checked());
    }

    #[test]
    fn test_rejected_toggle_does_not_reset_timer() {
        let mut cl = CheckList::new(0, 0, "Option", false).with_debounce(Duration::from_millis(50));
        let t0 = Instant::now();
        cl.toggle_at(t0);
        cl.toggle_at(t0 + Duration::from_millis(40));
        assert!(cl.toggle_at(t0 + Duration::from_millis(60)));
        assert!(!cl.is_checked());
    }

    #[test]
    fn test_render_glyph_and_label() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 16, 1));
        let mut cl = CheckList::new(0, 0, "Opt", true);
        cl.render(&mut Surface::new(&mut buf)).unwrap();
        let line: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(line.starts_with("[ x ]Opt"));

        cl.toggle();
        cl.set_active(true);
        cl.render(&mut Surface::new(&mut buf)).unwrap();
        let line: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(line.starts_with("[   ]Opt"));
        assert_eq!(buf[(5, 0)].bg, ColorPair::HIGHLIGHT.bg());
    }

    #[test]
    fn test_hit_box_spans_glyph_and_label() {
        let cl = CheckList::new(6, 20, "Option 2", false);
        assert_eq!(cl.hit_box(), Rect::new(20, 6, 13, 1));
    }
}
