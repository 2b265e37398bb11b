//! Layout tokens: everything in a theme that is not a color

use crate::tokens::{AnimationScales, BorderWidths, RadiusScale, ShadowScale, Typography};

/// Complete set of layout tokens
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    /// Opacity multiplier applied to every color of a disabled component
    pub disabled_opacity: f32,
    /// Radii for controls (buttons, inputs, badges)
    pub component_radius: RadiusScale,
    /// Radii for containers (cards, modals)
    pub container_radius: RadiusScale,
    pub border_width: BorderWidths,
    pub animation_scale: AnimationScales,
    pub shadow: ShadowScale,
    pub typography: Typography,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            disabled_opacity: 0.5,
            component_radius: RadiusScale::new(10.0, 12.0, 16.0),
            container_radius: RadiusScale::new(16.0, 20.0, 26.0),
            border_width: BorderWidths::default(),
            animation_scale: AnimationScales::default(),
            shadow: ShadowScale::default(),
            typography: Typography::default(),
        }
    }
}
