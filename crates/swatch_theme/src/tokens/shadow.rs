//! Shadow tokens for theming

use swatch_core::Point;

use super::color::{ColorValue, ThemedColor};
use crate::layout::Layout;

/// A drop shadow definition
#[derive(Clone, Debug, PartialEq)]
pub struct ShadowParams {
    /// Blur radius
    pub radius: f32,
    pub offset: Point,
    pub color: ThemedColor,
}

impl ShadowParams {
    pub fn new(radius: f32, offset: Point, color: ThemedColor) -> Self {
        Self {
            radius,
            offset,
            color,
        }
    }

    pub fn none() -> Self {
        Self::new(
            0.0,
            Point::ZERO,
            ThemedColor::universal(swatch_core::Color::TRANSPARENT),
        )
    }

    /// Shadow with the given blur and offset, dark on light and light on dark
    fn preset(radius: f32, offset_y: f32, alpha: f32) -> Self {
        Self::new(
            radius,
            Point::new(0.0, offset_y),
            ThemedColor::themed(
                ColorValue::rgba(0, 0, 0, alpha),
                ColorValue::rgba(255, 255, 255, alpha),
            ),
        )
    }
}

/// Small/medium/large shadow presets
#[derive(Clone, Debug, PartialEq)]
pub struct ShadowScale {
    pub small: ShadowParams,
    pub medium: ShadowParams,
    pub large: ShadowParams,
}

impl Default for ShadowScale {
    fn default() -> Self {
        Self {
            small: ShadowParams::preset(10.0, 6.0, 0.1),
            medium: ShadowParams::preset(16.0, 10.0, 0.15),
            large: ShadowParams::preset(20.0, 12.0, 0.2),
        }
    }
}

/// Shadow token
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Shadow {
    None,
    Small,
    #[default]
    Medium,
    Large,
    Custom(ShadowParams),
}

impl Shadow {
    pub fn params(&self, layout: &Layout) -> ShadowParams {
        match self {
            Shadow::None => ShadowParams::none(),
            Shadow::Small => layout.shadow.small.clone(),
            Shadow::Medium => layout.shadow.medium.clone(),
            Shadow::Large => layout.shadow.large.clone(),
            Shadow::Custom(params) => params.clone(),
        }
    }
}
