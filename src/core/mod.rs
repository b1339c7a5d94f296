//! # Core Form Logic
//!
//! Everything that does not touch the terminal.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Palette (colors)     │
//!                    │  • Form values + rules  │
//!                    │  • Config, errors       │
//!                    │                         │
//!                    │  No I/O. No terminal.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Window +  │
//!                         │  widgets   │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`palette`]: RGB registration and color-pair handles
//! - [`form`]: label normalization, submitted values, validation
//! - [`config`]: TOML settings and their resolution
//! - [`error`]: the crate's fatal error type

pub mod config;
pub mod error;
pub mod form;
pub mod palette;
