//! Spinning loading indicator

use swatch_core::Size;
use swatch_theme::{ColorValue, ComponentColor, ComponentSize, Theme};

use crate::resolve::{resolve_color, RuntimeState};

/// Loading indicator view-model
#[derive(Clone, Debug, PartialEq)]
pub struct LoadingVm {
    /// Falls back to the theme's accent family
    pub color: Option<ComponentColor>,
    /// Stroke width; derived from the size when unset
    pub line_width: Option<f32>,
    /// `None` lets the indicator fill whatever space the host gives it
    pub size: Option<ComponentSize>,
}

impl Default for LoadingVm {
    fn default() -> Self {
        Self {
            color: None,
            line_width: None,
            size: Some(ComponentSize::Medium),
        }
    }
}

/// Concrete indicator appearance
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedLoadingStyle {
    pub color: ColorValue,
    pub line_width: f32,
    pub size: Option<Size>,
}

impl LoadingVm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(mut self, color: ComponentColor) -> Self {
        self.color = Some(color);
        self
    }

    pub fn line_width(mut self, width: f32) -> Self {
        self.line_width = Some(width);
        self
    }

    pub fn size(mut self, size: Option<ComponentSize>) -> Self {
        self.size = size;
        self
    }

    pub fn preferred_size(&self) -> Option<Size> {
        self.size.map(|size| Size::square(size.pick(24.0, 36.0, 48.0)))
    }

    /// Explicit width, else an eighth of the side (at least 2), else 3
    pub fn preferred_line_width(&self) -> f32 {
        match (self.line_width, self.preferred_size()) {
            (Some(width), _) => width,
            (None, Some(size)) => (size.width / 8.0).max(2.0),
            (None, None) => 3.0,
        }
    }

    pub fn resolve(&self, theme: &Theme, state: &RuntimeState) -> ResolvedLoadingStyle {
        let family = self.color.as_ref().unwrap_or(&theme.colors.accent);
        ResolvedLoadingStyle {
            color: resolve_color(&family.main, true, theme, state),
            line_width: self.preferred_line_width(),
            size: self.preferred_size(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swatch_core::ColorScheme;

    #[test]
    fn line_width_follows_size() {
        assert_eq!(LoadingVm::new().preferred_line_width(), 4.5);
        assert_eq!(
            LoadingVm::new()
                .size(Some(ComponentSize::Small))
                .preferred_line_width(),
            3.0
        );
        assert_eq!(LoadingVm::new().size(None).preferred_line_width(), 3.0);
        assert_eq!(LoadingVm::new().line_width(1.0).preferred_line_width(), 1.0);
    }

    #[test]
    fn unsized_indicator_has_no_preferred_size() {
        assert_eq!(LoadingVm::new().size(None).preferred_size(), None);
        assert_eq!(
            LoadingVm::new().size(Some(ComponentSize::Large)).preferred_size(),
            Some(Size::square(48.0))
        );
    }

    #[test]
    fn defaults_to_accent() {
        let theme = Theme::default();
        let style = LoadingVm::new().resolve(&theme, &RuntimeState::new(ColorScheme::Dark));
        assert_eq!(style.color, theme.colors.accent.main.dark.clone());
    }
}
