use ratatui::layout::Rect;

use crate::core::error::FormError;
use crate::core::form::{Flow, FormContext};
use crate::core::palette::ColorPair;
use crate::tui::widget::{Response, Surface, Widget, display_width};

/// Callback run when a menu entry is chosen.
pub type MenuAction = Box<dyn FnMut() -> Flow>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuListColors {
    pub normal: ColorPair,
    pub highlight: ColorPair,
}

impl Default for MenuListColors {
    fn default() -> Self {
        Self {
            normal: ColorPair::NORMAL,
            highlight: ColorPair::HIGHLIGHT,
        }
    }
}

/// A plain-text menu entry that runs an action when chosen.
pub struct MenuList {
    row: u16,
    col: u16,
    index: i32,
    label: String,
    action: MenuAction,
    active: bool,
    colors: MenuListColors,
}

impl MenuList {
    pub fn new(
        row: u16,
        col: u16,
        label: impl Into<String>,
        action: impl FnMut() -> Flow + 'static,
    ) -> Self {
        Self {
            row,
            col,
            index: 0,
            label: label.into(),
            action: Box::new(action),
            active: false,
            colors: MenuListColors::default(),
        }
    }

    pub fn with_index(mut self, index: i32) -> Self {
        self.index = index;
        self
    }

    pub fn with_colors(mut self, colors: MenuListColors) -> Self {
        self.colors = colors;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Widget for MenuList {
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
        surface.put(self.row, self.col, &self.label, pair.style())
    }

    fn hit_box(&self) -> Rect {
        Rect::new(self.col, self.row, display_width(&self.label), 1)
    }

    fn handle_click(&mut self, ctx: &FormContext) -> Response {
        self.activate(ctx)
    }

    fn activate(&mut self, _ctx: &FormContext) -> Response {
        log::info!("Menu item '{}' selected", self.label);
        match (self.action)() {
            Flow::Exit => Response::Exit,
            Flow::Continue => Response::None,
        }
    }
}
