//! Swatch Theme System
//!
//! Design tokens and the store that holds the current theme.
//!
//! # Overview
//!
//! - **Palette**: semantic color roles, each a light/dark [`ThemedColor`] pair,
//!   plus component color families (primary, accent, success, warning, danger)
//! - **Layout tokens**: disabled opacity, radii, border widths, press
//!   animation scales, shadows and typography
//! - **Theme store**: one current [`Theme`] per [`ThemeStore`], replaced
//!   atomically with change notifications
//! - **Config**: TOML overrides applied on top of a base theme
//!
//! # Quick Start
//!
//! ```rust
//! use swatch_core::ColorScheme;
//! use swatch_theme::{ColorToken, ThemeStore};
//!
//! let store = ThemeStore::default();
//! store.subscribe(|change| println!("theme generation {}", change.generation));
//!
//! store.update(|theme| theme.layout.disabled_opacity = 0.4);
//!
//! let theme = store.current();
//! let background = theme.colors.get(ColorToken::Background).resolve(ColorScheme::Dark);
//! # let _ = background;
//! ```
//!
//! Appearance is never observed here: callers pass the current
//! [`ColorScheme`](swatch_core::ColorScheme) into every resolution.

mod config;
mod error;
mod layout;
mod state;
mod theme;
pub mod tokens;

pub use config::{ColorConfig, ComponentColorConfig, PaletteConfig, ScaleConfig, ThemeConfig};
pub use error::ThemeError;
pub use layout::Layout;
pub use state::{SubscriptionId, ThemeChange, ThemeStore};
pub use theme::Theme;
pub use tokens::*;
