//! # Form Widgets
//!
//! The four widget kinds a form is built from. Each implements
//! [`Widget`](crate::tui::widget::Widget) and only the input hooks it needs:
//!
//! | Widget     | Enter / click                  | Typing          |
//! |------------|--------------------------------|-----------------|
//! | `TextBox`  | Enter moves focus; click focuses | appends, erases |
//! | `Button`   | validates, then runs action    | ignored         |
//! | `CheckList`| toggles (debounced)            | ignored         |
//! | `MenuList` | runs action                    | ignored         |
//!
//! Every widget is built with a builder chain and handed to the window,
//! which owns it from then on:
//!
//! ```rust,ignore
//! let name = TextBox::new(2, 2, "Name: ", 20).required(true).with_index(1);
//! let submit = Button::new(4, 2, "Submit", |values| { /* ... */ Flow::Continue })
//!     .validate(true)
//!     .with_index(2);
//! ```

pub mod button;
pub mod check_list;
pub mod menu_list;
pub mod text_box;

pub use button::{Button, ButtonColors, SubmitAction};
pub use check_list::{CheckList, CheckListColors};
pub use menu_list::{MenuList, MenuListColors, MenuAction};
pub use text_box::{TextBox, TextBoxColors};
