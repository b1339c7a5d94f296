//! # Palette
//!
//! Turns RGB triples into color-pair handles that widgets carry around.
//!
//! Each registration consumes three identifiers:
//!
//! ```text
//! register(fg, bg, pair_id = 10)
//!   color 10   ← fg
//!   color 110  ← bg   (pair_id + BACKGROUND_OFFSET)
//!   pair  10   → (color 10, color 110)
//! ```
//!
//! The palette remembers every identifier it has handed out and refuses a
//! registration that would reuse one, so two pairs can never silently share a
//! background color.

use log::debug;
use ratatui::style::{Color, Style};
use std::collections::BTreeMap;
use std::fmt;

/// Offset between a pair's foreground color id and its background color id.
pub const BACKGROUND_OFFSET: u16 = 100;

/// An 8-bit-per-channel color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Converts to the backend's color representation.
    ///
    /// crossterm speaks 24-bit color, so channels pass through unscaled.
    pub fn to_native(self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

/// A registered (foreground, background) binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPair {
    id: u16,
    fg: Color,
    bg: Color,
}

impl ColorPair {
    /// Notice region (validation errors, submit confirmation).
    pub const ALERT: ColorPair = ColorPair::builtin(1, Color::Black, Color::White);
    /// Resting buttons, checklists and menu items.
    pub const NORMAL: ColorPair = ColorPair::builtin(2, Color::White, Color::Black);
    /// Whatever currently holds focus.
    pub const HIGHLIGHT: ColorPair = ColorPair::builtin(3, Color::Black, Color::White);
    /// Text box labels and text.
    pub const FIELD: ColorPair = ColorPair::builtin(4, Color::White, Color::Blue);

    const BUILTINS: [ColorPair; 4] = [Self::ALERT, Self::NORMAL, Self::HIGHLIGHT, Self::FIELD];

    const fn builtin(id: u16, fg: Color, bg: Color) -> Self {
        Self { id, fg, bg }
    }

    pub fn id(&self) -> u16 {
        self.id
    }

    pub fn fg(&self) -> Color {
        self.fg
    }

    pub fn bg(&self) -> Color {
        self.bg
    }

    pub fn style(&self) -> Style {
        Style::new().fg(self.fg).bg(self.bg)
    }

    /// Foreground from one pair, background from another.
    ///
    /// Text boxes and checklists configure these halves independently.
    pub fn compose(fg: ColorPair, bg: ColorPair) -> Style {
        Style::new().fg(fg.fg).bg(bg.bg)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    /// Pair 0 and the built-in pairs cannot be redefined.
    Reserved(u16),
    /// The pair id is already bound.
    PairInUse(u16),
    /// A derived color id was already issued by another registration.
    ColorInUse { pair_id: u16, color_id: u16 },
    /// `pair_id + BACKGROUND_OFFSET` does not fit.
    OutOfRange(u16),
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::Reserved(id) => write!(f, "color pair {id} is reserved"),
            PaletteError::PairInUse(id) => write!(f, "color pair {id} is already registered"),
            PaletteError::ColorInUse { pair_id, color_id } => write!(
                f,
                "color pair {pair_id} needs color {color_id}, which is already in use"
            ),
            PaletteError::OutOfRange(id) => {
                write!(f, "color pair {id} leaves no room for its background color")
            }
        }
    }
}

impl std::error::Error for PaletteError {}

/// Registry of custom colors and the pairs built from them.
#[derive(Debug, Clone)]
pub struct Palette {
    colors: BTreeMap<u16, Color>,
    pairs: BTreeMap<u16, ColorPair>,
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}

impl Palette {
    /// A palette holding only the built-in pairs.
    pub fn new() -> Self {
        let pairs = ColorPair::BUILTINS.iter().map(|p| (p.id, *p)).collect();
        Self {
            colors: BTreeMap::new(),
            pairs,
        }
    }

    /// Registers `fg`/`bg` under `pair_id` and returns the handle.
    ///
    /// Fails without changing the palette if any of the three identifiers
    /// the registration needs is already taken.
    pub fn register(&mut self, fg: Rgb, bg: Rgb, pair_id: u16) -> Result<ColorPair, PaletteError> {
        if pair_id == 0 || ColorPair::BUILTINS.iter().any(|p| p.id == pair_id) {
            return Err(PaletteError::Reserved(pair_id));
        }
        if self.pairs.contains_key(&pair_id) {
            return Err(PaletteError::PairInUse(pair_id));
        }
        let bg_id = pair_id
            .checked_add(BACKGROUND_OFFSET)
            .ok_or(PaletteError::OutOfRange(pair_id))?;
        for color_id in [pair_id, bg_id] {
            if self.colors.contains_key(&color_id) {
                return Err(PaletteError::ColorInUse { pair_id, color_id });
            }
        }

        let pair = ColorPair {
            id: pair_id,
            fg: fg.to_native(),
            bg: bg.to_native(),
        };
        self.colors.insert(pair_id, pair.fg);
        self.colors.insert(bg_id, pair.bg);
        self.pairs.insert(pair_id, pair);
        debug!("Registered color pair {pair_id}: fg={fg:?} (color {pair_id}), bg={bg:?} (color {bg_id})");
        Ok(pair)
    }

    /// Looks up a pair by id, built-in or registered.
    pub fn pair(&self, id: u16) -> Option<ColorPair> {
        self.pairs.get(&id).copied()
    }

    /// Looks up a custom color by id.
    pub fn color(&self, id: u16) -> Option<Color> {
        self.colors.get(&id).copied()
    }
}
