//! Badge view-model and style resolver

use swatch_core::Paddings;
use swatch_theme::{
    ColorValue, ComponentColor, ComponentRadius, ComponentSize, Font, Theme, ThemedColor,
    TypographyRole,
};

use crate::resolve::{resolve_color, resolve_or_else, RuntimeState};

/// Visual style of a badge
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BadgeStyle {
    #[default]
    Filled,
    Light,
}

/// Badge view-model
#[derive(Clone, Debug, PartialEq)]
pub struct BadgeVm {
    pub title: String,
    pub color: Option<ComponentColor>,
    pub style: BadgeStyle,
    pub corner_radius: ComponentRadius,
    /// Falls back to the theme's small button font
    pub font: Option<Font>,
    pub paddings: Paddings,
    pub enabled: bool,
}

impl Default for BadgeVm {
    fn default() -> Self {
        Self {
            title: String::new(),
            color: None,
            style: BadgeStyle::default(),
            corner_radius: ComponentRadius::Medium,
            font: None,
            paddings: Paddings::symmetric(10.0, 8.0),
            enabled: true,
        }
    }
}

/// Concrete badge appearance
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedBadgeStyle {
    pub background: ColorValue,
    pub foreground: ColorValue,
    pub corner_radius: f32,
    pub font: Font,
    pub paddings: Paddings,
}

impl BadgeVm {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn color(mut self, color: ComponentColor) -> Self {
        self.color = Some(color);
        self
    }

    pub fn style(mut self, style: BadgeStyle) -> Self {
        self.style = style;
        self
    }

    pub fn corner_radius(mut self, radius: ComponentRadius) -> Self {
        self.corner_radius = radius;
        self
    }

    pub fn font(mut self, font: Font) -> Self {
        self.font = Some(font);
        self
    }

    pub fn paddings(mut self, paddings: Paddings) -> Self {
        self.paddings = paddings;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn preferred_font(&self, theme: &Theme) -> Font {
        resolve_or_else(self.font.clone(), || {
            theme
                .layout
                .typography
                .font(TypographyRole::Button, ComponentSize::Small)
                .clone()
        })
    }

    /// Single-line height: font line height plus vertical paddings
    pub fn height(&self, theme: &Theme) -> f32 {
        self.preferred_font(theme).line_height() + self.paddings.vertical()
    }

    fn background_role<'a>(&'a self, theme: &'a Theme) -> &'a ThemedColor {
        let color = self.color.as_ref();
        match self.style {
            BadgeStyle::Filled => color.map_or(&theme.colors.content2, |c| &c.main),
            BadgeStyle::Light => color.map_or(&theme.colors.content1, |c| &c.background),
        }
    }

    fn foreground_role<'a>(&'a self, theme: &'a Theme) -> &'a ThemedColor {
        let color = self.color.as_ref();
        match self.style {
            BadgeStyle::Filled => color.map_or(&theme.colors.foreground, |c| &c.contrast),
            BadgeStyle::Light => color.map_or(&theme.colors.foreground, |c| &c.main),
        }
    }

    pub fn resolve(&self, theme: &Theme, state: &RuntimeState) -> ResolvedBadgeStyle {
        ResolvedBadgeStyle {
            background: resolve_color(self.background_role(theme), self.enabled, theme, state),
            foreground: resolve_color(self.foreground_role(theme), self.enabled, theme, state),
            corner_radius: self.corner_radius.value(&theme.layout, self.height(theme)),
            font: self.preferred_font(theme),
            paddings: self.paddings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swatch_core::ColorScheme;

    #[test]
    fn light_badge_uses_tint_and_main() {
        let theme = Theme::default();
        let style = BadgeVm::new("New")
            .style(BadgeStyle::Light)
            .color(theme.colors.warning.clone())
            .resolve(&theme, &RuntimeState::new(ColorScheme::Light));
        assert_eq!(style.background, theme.colors.warning.background.light.clone());
        assert_eq!(style.foreground, theme.colors.warning.main.light.clone());
    }

    #[test]
    fn default_metrics() {
        let theme = Theme::default();
        let badge = BadgeVm::new("3");
        assert_eq!(badge.paddings, Paddings::symmetric(10.0, 8.0));
        assert_eq!(badge.preferred_font(&theme).size(), 14.0);
        // 14 * 1.2 + 16
        assert!((badge.height(&theme) - 32.8).abs() < 1e-4);
    }

    #[test]
    fn full_radius_is_half_the_height() {
        let theme = Theme::default();
        let badge = BadgeVm::new("3").corner_radius(ComponentRadius::Full);
        let style = badge.resolve(&theme, &RuntimeState::default());
        assert_eq!(style.corner_radius, badge.height(&theme) / 2.0);
    }
}
