//! Card container

use swatch_core::{ColorScheme, Paddings, Point};
use swatch_theme::{
    AnimationScale, BorderWidth, ColorValue, ContainerRadius, Shadow, Theme, ThemedColor,
};

use crate::resolve::{resolve_color, resolve_or_else, RuntimeState};

/// Height used to resolve container radii before the real height is known
pub const UNBOUNDED_HEIGHT: f32 = 10_000.0;

/// Card view-model
#[derive(Clone, Debug, PartialEq)]
pub struct CardVm {
    /// Falls back to the palette background
    pub background_color: Option<ThemedColor>,
    /// Falls back to the palette divider
    pub border_color: Option<ThemedColor>,
    pub border_width: BorderWidth,
    pub content_paddings: Paddings,
    pub corner_radius: ContainerRadius,
    pub shadow: Shadow,
    pub animation_scale: AnimationScale,
    pub tappable: bool,
}

impl Default for CardVm {
    fn default() -> Self {
        Self {
            background_color: None,
            border_color: None,
            border_width: BorderWidth::Medium,
            content_paddings: Paddings::uniform(16.0),
            corner_radius: ContainerRadius::Medium,
            shadow: Shadow::Medium,
            animation_scale: AnimationScale::Medium,
            tappable: false,
        }
    }
}

/// Resolved shadow for one scheme
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedShadow {
    pub radius: f32,
    pub offset: Point,
    pub color: ColorValue,
}

impl ResolvedShadow {
    pub(crate) fn from_token(shadow: &Shadow, theme: &Theme, scheme: ColorScheme) -> Self {
        let params = shadow.params(&theme.layout);
        Self {
            radius: params.radius,
            offset: params.offset,
            color: params.color.resolve(scheme),
        }
    }
}

/// Concrete card appearance
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedCardStyle {
    pub background: ColorValue,
    pub border_color: ColorValue,
    pub border_width: f32,
    pub content_paddings: Paddings,
    /// Token radius; use [`ResolvedCardStyle::corner_radius_for`] once the
    /// card's height is known
    pub corner_radius: f32,
    pub shadow: ResolvedShadow,
    pub scale: f32,
}

impl ResolvedCardStyle {
    /// Radius clamped to half of `height`
    pub fn corner_radius_for(&self, height: f32) -> f32 {
        self.corner_radius.min(height.max(0.0) / 2.0)
    }
}

impl CardVm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background_color(mut self, color: ThemedColor) -> Self {
        self.background_color = Some(color);
        self
    }

    pub fn border_color(mut self, color: ThemedColor) -> Self {
        self.border_color = Some(color);
        self
    }

    pub fn border_width(mut self, width: BorderWidth) -> Self {
        self.border_width = width;
        self
    }

    pub fn content_paddings(mut self, paddings: Paddings) -> Self {
        self.content_paddings = paddings;
        self
    }

    pub fn corner_radius(mut self, radius: ContainerRadius) -> Self {
        self.corner_radius = radius;
        self
    }

    pub fn shadow(mut self, shadow: Shadow) -> Self {
        self.shadow = shadow;
        self
    }

    /// # Panics
    ///
    /// Panics if a custom scale is outside `0.0..=1.0`.
    #[track_caller]
    pub fn animation_scale(mut self, scale: AnimationScale) -> Self {
        self.animation_scale = scale.validated();
        self
    }

    pub fn tappable(mut self, tappable: bool) -> Self {
        self.tappable = tappable;
        self
    }

    pub fn resolve(&self, theme: &Theme, state: &RuntimeState) -> ResolvedCardStyle {
        let background = resolve_or_else(self.background_color.clone(), || {
            theme.colors.background.clone()
        });
        let border = resolve_or_else(self.border_color.clone(), || theme.colors.divider.clone());
        let scale = if self.tappable && state.pressed {
            self.animation_scale.value(&theme.layout)
        } else {
            1.0
        };

        ResolvedCardStyle {
            background: resolve_color(&background, true, theme, state),
            border_color: resolve_color(&border, true, theme, state),
            border_width: self.border_width.value(&theme.layout),
            content_paddings: self.content_paddings,
            corner_radius: self.corner_radius.value(&theme.layout, UNBOUNDED_HEIGHT),
            shadow: ResolvedShadow::from_token(&self.shadow, theme, state.scheme),
            scale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swatch_core::Color;

    #[test]
    fn defaults_resolve_from_palette() {
        let theme = Theme::default();
        let style = CardVm::new().resolve(&theme, &RuntimeState::new(ColorScheme::Dark));
        assert_eq!(style.background, theme.colors.background.dark.clone());
        assert_eq!(style.border_color, theme.colors.divider.dark.clone());
        assert_eq!(style.border_width, 1.0);
        assert_eq!(style.corner_radius, 20.0);
        assert_eq!(style.content_paddings, Paddings::uniform(16.0));
        assert_eq!(style.shadow.radius, 16.0);
    }

    #[test]
    fn radius_clamps_for_short_cards() {
        let style = CardVm::new().resolve(&Theme::default(), &RuntimeState::default());
        assert_eq!(style.corner_radius_for(30.0), 15.0);
        assert_eq!(style.corner_radius_for(200.0), 20.0);
    }

    #[test]
    fn only_tappable_cards_scale() {
        let theme = Theme::default();
        let pressed = RuntimeState::default().pressed(true);
        assert_eq!(CardVm::new().resolve(&theme, &pressed).scale, 1.0);
        assert_eq!(CardVm::new().tappable(true).resolve(&theme, &pressed).scale, 0.98);
    }

    #[test]
    fn background_override_wins() {
        let style = CardVm::new()
            .background_color(ThemedColor::universal(Color::WHITE))
            .resolve(&Theme::default(), &RuntimeState::new(ColorScheme::Dark));
        assert_eq!(style.background, ColorValue::Rgba(Color::WHITE));
    }
}
