//! Shared resolution helpers
//!
//! Every resolver follows the same order per field: explicit override, then
//! the style variant's role, then the theme default for that role. Disabled
//! components get one multiplicative opacity rule applied last.

use swatch_core::ColorScheme;
use swatch_theme::{ColorValue, ComponentRadius, Theme, ThemedColor};

/// Transient per-render state supplied by the host
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RuntimeState {
    pub scheme: ColorScheme,
    pub pressed: bool,
    pub focused: bool,
    pub selected: bool,
}

impl RuntimeState {
    pub fn new(scheme: ColorScheme) -> Self {
        Self {
            scheme,
            ..Self::default()
        }
    }

    pub fn pressed(mut self, pressed: bool) -> Self {
        self.pressed = pressed;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}

/// Explicit override if present, otherwise `default`
pub fn resolve_or<T>(value: Option<T>, default: T) -> T {
    value.unwrap_or(default)
}

/// Explicit override if present, otherwise the lazily computed default
pub fn resolve_or_else<T>(value: Option<T>, default: impl FnOnce() -> T) -> T {
    value.unwrap_or_else(default)
}

/// Resolve `color` for the current scheme, faded when not `enabled`
pub fn resolve_color(
    color: &ThemedColor,
    enabled: bool,
    theme: &Theme,
    state: &RuntimeState,
) -> ColorValue {
    fade(color.resolve(state.scheme), enabled, theme)
}

/// Apply the theme's disabled opacity unless `enabled`
pub fn fade(color: ColorValue, enabled: bool, theme: &Theme) -> ColorValue {
    if enabled {
        color
    } else {
        color.with_opacity(theme.layout.disabled_opacity)
    }
}

/// Radius of a track-like bar (slider, progress bar) of the given `height`.
///
/// Named radii are fractions of the height rather than theme tokens, so thin
/// and thick tracks keep the same silhouette.
pub fn track_corner_radius(radius: ComponentRadius, height: f32) -> f32 {
    let height = height.max(0.0);
    let raw = match radius {
        ComponentRadius::None => 0.0,
        ComponentRadius::Small => height / 3.5,
        ComponentRadius::Medium => height / 3.0,
        ComponentRadius::Large => height / 2.5,
        ComponentRadius::Full => height / 2.0,
        ComponentRadius::Custom(value) => value,
    };
    raw.clamp(0.0, height / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use swatch_core::Color;

    #[test]
    fn override_wins() {
        assert_eq!(resolve_or(Some(3), 5), 3);
        assert_eq!(resolve_or(None, 5), 5);
        assert_eq!(resolve_or_else(None, || "theme"), "theme");
    }

    #[test]
    fn disabled_rule_multiplies_alpha() {
        let theme = Theme::default();
        let state = RuntimeState::new(ColorScheme::Dark);
        let token = ThemedColor::themed(Color::BLACK, Color::WHITE.with_alpha(0.8));

        let enabled = resolve_color(&token, true, &theme, &state);
        let disabled = resolve_color(&token, false, &theme, &state);
        assert_eq!(disabled, enabled.with_opacity(0.5));
        assert_eq!(disabled.to_color().a, 0.4);
    }

    #[test]
    fn track_radius_is_a_fraction_of_height() {
        assert_eq!(track_corner_radius(ComponentRadius::None, 12.0), 0.0);
        assert_eq!(track_corner_radius(ComponentRadius::Medium, 12.0), 4.0);
        assert_eq!(track_corner_radius(ComponentRadius::Full, 12.0), 6.0);
        assert_eq!(track_corner_radius(ComponentRadius::Custom(40.0), 12.0), 6.0);
        assert_eq!(track_corner_radius(ComponentRadius::Custom(-3.0), 12.0), 0.0);
    }
}
