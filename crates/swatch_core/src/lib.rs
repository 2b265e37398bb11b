//! Swatch Core
//!
//! Toolkit-independent primitives shared by every Swatch crate:
//!
//! - **Color**: RGBA colors, hex parsing and opacity math
//! - **Geometry**: points, sizes, rectangles and paddings
//! - **Paths**: command lists produced by the shape helpers
//! - **Progress math**: normalized fractions and stepped values
//! - **Stripes**: the diagonal stripe pattern shared by progress bars and sliders
//!
//! # Example
//!
//! ```rust
//! use swatch_core::{progress_fraction, snapped_value};
//!
//! assert_eq!(progress_fraction(0.0, 100.0, 25.0), 0.25);
//!
//! // Pointer at 42% of a 200px track, snapped to steps of 5.
//! assert_eq!(snapped_value(84.0, 200.0, 0.0, 100.0, 5.0), 40.0);
//! ```

pub mod color;
pub mod geometry;
pub mod path;
pub mod progress;
pub mod scheme;
pub mod stripes;

pub use color::{Color, ColorParseError};
pub use geometry::{Paddings, Point, Rect, Size};
pub use path::{Path, PathBuilder, PathCommand};
pub use progress::{progress_fraction, snapped_value};
pub use scheme::ColorScheme;
pub use stripes::{
    stripe_path, striped_fill, StripedFill, MAX_STRIPES, STRIPE_ANGLE_DEGREES, STRIPE_SPACING,
    STRIPE_WIDTH,
};
