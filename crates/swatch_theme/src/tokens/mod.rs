//! Design tokens for theming
//!
//! Tokens are the atomic values that make up a design system:
//! - Colors (palette roles and component color families)
//! - Corner radii
//! - Border widths
//! - Press animation scales
//! - Shadows
//! - Typography
//! - Size classes

mod animation;
mod border;
mod color;
mod radius;
mod shadow;
mod size;
mod typography;

pub use animation::*;
pub use border::*;
pub use color::*;
pub use radius::*;
pub use shadow::*;
pub use size::*;
pub use typography::*;
