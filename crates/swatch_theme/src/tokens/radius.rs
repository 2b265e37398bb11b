//! Corner radius tokens

use crate::layout::Layout;

/// Small/medium/large radius values
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadiusScale {
    pub small: f32,
    pub medium: f32,
    pub large: f32,
}

impl RadiusScale {
    pub const fn new(small: f32, medium: f32, large: f32) -> Self {
        Self {
            small,
            medium,
            large,
        }
    }
}

/// Corner radius of controls (buttons, inputs, badges)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ComponentRadius {
    None,
    Small,
    #[default]
    Medium,
    Large,
    /// Pill shape: half the height
    Full,
    Custom(f32),
}

impl ComponentRadius {
    /// Radius for a control of the given `height`.
    ///
    /// Never exceeds `height / 2`, so every variant degrades to a pill shape
    /// on short controls.
    pub fn value(&self, layout: &Layout, height: f32) -> f32 {
        let limit = height.max(0.0) / 2.0;
        let raw = match self {
            ComponentRadius::None => 0.0,
            ComponentRadius::Small => layout.component_radius.small,
            ComponentRadius::Medium => layout.component_radius.medium,
            ComponentRadius::Large => layout.component_radius.large,
            ComponentRadius::Full => limit,
            ComponentRadius::Custom(value) => *value,
        };
        raw.max(0.0).min(limit)
    }
}

/// Corner radius of containers (cards, modals)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ContainerRadius {
    None,
    Small,
    #[default]
    Medium,
    Large,
    Custom(f32),
}

impl ContainerRadius {
    /// Radius for a container of the given `height`, clamped to `height / 2`
    pub fn value(&self, layout: &Layout, height: f32) -> f32 {
        let raw = match self {
            ContainerRadius::None => 0.0,
            ContainerRadius::Small => layout.container_radius.small,
            ContainerRadius::Medium => layout.container_radius.medium,
            ContainerRadius::Large => layout.container_radius.large,
            ContainerRadius::Custom(value) => *value,
        };
        raw.max(0.0).min(height.max(0.0) / 2.0)
    }
}
