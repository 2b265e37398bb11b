//! Border width tokens

use crate::layout::Layout;

/// Small/medium/large border widths
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BorderWidths {
    pub small: f32,
    pub medium: f32,
    pub large: f32,
}

impl Default for BorderWidths {
    fn default() -> Self {
        Self {
            small: 0.5,
            medium: 1.0,
            large: 2.0,
        }
    }
}

/// Border width token
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BorderWidth {
    None,
    #[default]
    Small,
    Medium,
    Large,
}

impl BorderWidth {
    pub fn value(&self, layout: &Layout) -> f32 {
        match self {
            BorderWidth::None => 0.0,
            BorderWidth::Small => layout.border_width.small,
            BorderWidth::Medium => layout.border_width.medium,
            BorderWidth::Large => layout.border_width.large,
        }
    }
}
