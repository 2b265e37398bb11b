//! Swatch Components
//!
//! View-models and style resolvers for every component kind, independent of
//! any UI toolkit.
//!
//! # Overview
//!
//! - **View-models**: plain values holding optional overrides plus required
//!   state (titles, items, ranges), built with consuming builder methods
//! - **Resolvers**: `vm.resolve(&theme, &state)` turns a view-model into the
//!   concrete colors and metrics of one render
//! - **Geometry**: track layouts, stripe overlays, countdown breakdowns and
//!   the floating-title position of input fields
//!
//! Every field resolves the same way: explicit override, then the role the
//! style variant picks, then the theme default. Disabled components fade
//! every resolved color by the theme's disabled opacity.
//!
//! # Quick Start
//!
//! ```rust
//! use swatch_components::{ProgressBarStyle, ProgressBarVm, RuntimeState};
//! use swatch_core::ColorScheme;
//! use swatch_theme::{ComponentSize, ThemeStore};
//!
//! let store = ThemeStore::default();
//! let theme = store.current();
//!
//! let bar = ProgressBarVm::new()
//!     .style(ProgressBarStyle::Filled)
//!     .size(ComponentSize::Small);
//! let style = bar.resolve(&theme, &RuntimeState::new(ColorScheme::Dark));
//! let layout = bar.layout(206.0, 50.0);
//!
//! assert_eq!(style.bar_height, 20.0);
//! assert_eq!(layout.bar.width(), 100.0);
//! ```

pub mod components;
mod error;
pub mod input;
mod items;
mod resolve;

pub use components::*;
pub use error::ComponentError;
pub use input::{KeyboardType, SubmitType, TextAutocapitalization};
pub use items::{Item, RadioItem, SegmentedItem};
pub use resolve::{
    fade, resolve_color, resolve_or, resolve_or_else, track_corner_radius, RuntimeState,
};
