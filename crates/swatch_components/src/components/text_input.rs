//! Multi-line text input

use swatch_theme::{
    ColorValue, ComponentColor, ComponentRadius, ComponentSize, Font, Theme, ThemedColor,
    TypographyRole,
};

use crate::input::{KeyboardType, SubmitType, TextAutocapitalization};
use crate::resolve::{fade, resolve_color, resolve_or_else, RuntimeState};

/// Padding between the text and every edge of the input
pub const CONTENT_PADDING: f32 = 12.0;
/// Maximum height when the input grows without a row limit
pub const MAX_HEIGHT: f32 = 10_000.0;
/// Opacity of a colored placeholder relative to `color.main`
pub(crate) const PLACEHOLDER_OPACITY: f32 = 0.7;

/// Text input view-model
#[derive(Clone, Debug, PartialEq)]
pub struct TextInputVm {
    pub color: Option<ComponentColor>,
    pub corner_radius: ComponentRadius,
    /// Falls back to the theme's body font for `size`
    pub font: Option<Font>,
    pub size: ComponentSize,
    pub placeholder: Option<String>,
    /// Cursor and selection color; falls back to `accent.main`
    pub tint_color: Option<ThemedColor>,
    pub enabled: bool,
    pub autocapitalization: TextAutocapitalization,
    pub autocorrection: bool,
    pub keyboard_type: KeyboardType,
    pub submit_type: SubmitType,
    min_rows: u32,
    max_rows: Option<u32>,
}

impl Default for TextInputVm {
    fn default() -> Self {
        Self {
            color: None,
            corner_radius: ComponentRadius::Medium,
            font: None,
            size: ComponentSize::default(),
            placeholder: None,
            tint_color: None,
            enabled: true,
            autocapitalization: TextAutocapitalization::default(),
            autocorrection: true,
            keyboard_type: KeyboardType::default(),
            submit_type: SubmitType::default(),
            min_rows: 2,
            max_rows: None,
        }
    }
}

/// Concrete text input appearance
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedTextInputStyle {
    pub background: ColorValue,
    pub foreground: ColorValue,
    pub placeholder: ColorValue,
    pub tint: ColorValue,
    pub font: Font,
    pub corner_radius: f32,
    pub content_padding: f32,
    pub min_height: f32,
    pub max_height: f32,
}

#[track_caller]
fn assert_rows(rows: u32) {
    assert!(rows >= 1, "number of rows in a text input must be at least 1");
}

impl TextInputVm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(mut self, color: ComponentColor) -> Self {
        self.color = Some(color);
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

    pub fn size(mut self, size: ComponentSize) -> Self {
        self.size = size;
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn tint_color(mut self, color: ThemedColor) -> Self {
        self.tint_color = Some(color);
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn submit_type(mut self, submit_type: SubmitType) -> Self {
        self.submit_type = submit_type;
        self
    }

    /// # Panics
    ///
    /// Panics if `rows` is zero.
    #[track_caller]
    pub fn min_rows(mut self, rows: u32) -> Self {
        assert_rows(rows);
        self.min_rows = rows;
        self
    }

    /// # Panics
    ///
    /// Panics if `rows` is `Some(0)`.
    #[track_caller]
    pub fn max_rows(mut self, rows: Option<u32>) -> Self {
        if let Some(rows) = rows {
            assert_rows(rows);
        }
        self.max_rows = rows;
        self
    }

    pub fn preferred_font(&self, theme: &Theme) -> Font {
        resolve_or_else(self.font.clone(), || {
            theme
                .layout
                .typography
                .font(TypographyRole::Body, self.size)
                .clone()
        })
    }

    /// Height of `rows` lines of text plus vertical padding
    pub fn height_for_rows(&self, rows: u32, theme: &Theme) -> f32 {
        let rows = rows.max(1);
        self.preferred_font(theme).line_height() * rows as f32 + 2.0 * CONTENT_PADDING
    }

    pub fn min_height(&self, theme: &Theme) -> f32 {
        let rows = self.max_rows.map_or(self.min_rows, |max| max.min(self.min_rows));
        self.height_for_rows(rows, theme)
    }

    pub fn max_height(&self, theme: &Theme) -> f32 {
        self.max_rows
            .map_or(MAX_HEIGHT, |rows| self.height_for_rows(rows, theme))
    }

    /// Corner radius for an input of `height`.
    ///
    /// A full radius rounds like a one-row input so taller inputs keep
    /// straight sides.
    pub fn corner_radius_for(&self, height: f32, theme: &Theme) -> f32 {
        let radius = match self.corner_radius {
            ComponentRadius::Full => ComponentRadius::Custom(self.height_for_rows(1, theme) / 2.0),
            other => other,
        };
        radius.value(&theme.layout, height)
    }

    pub fn resolve(&self, theme: &Theme, state: &RuntimeState) -> ResolvedTextInputStyle {
        let color = self.color.as_ref();
        let placeholder = match color {
            Some(color) => color.main.with_opacity(PLACEHOLDER_OPACITY),
            None => theme.colors.secondary_foreground.clone(),
        };
        let tint = resolve_or_else(self.tint_color.clone(), || theme.colors.accent.main.clone());
        let min_height = self.min_height(theme);

        ResolvedTextInputStyle {
            background: resolve_color(
                color.map_or(&theme.colors.content1, |c| &c.background),
                self.enabled,
                theme,
                state,
            ),
            foreground: resolve_color(
                color.map_or(&theme.colors.foreground, |c| &c.main),
                self.enabled,
                theme,
                state,
            ),
            placeholder: fade(placeholder.resolve(state.scheme), self.enabled, theme),
            tint: resolve_color(&tint, self.enabled, theme, state),
            font: self.preferred_font(theme),
            corner_radius: self.corner_radius_for(min_height, theme),
            content_padding: CONTENT_PADDING,
            min_height,
            max_height: self.max_height(theme),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swatch_core::ColorScheme;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    #[should_panic(expected = "at least 1")]
    fn zero_rows_panics() {
        let _ = TextInputVm::new().min_rows(0);
    }

    #[test]
    fn heights_follow_line_height() {
        let theme = Theme::default();
        // Medium body font is 16pt, line height 19.2
        let vm = TextInputVm::new();
        assert!(approx(vm.min_height(&theme), 19.2 * 2.0 + 24.0));
        assert_eq!(vm.max_height(&theme), MAX_HEIGHT);

        let capped = vm.min_rows(4).max_rows(Some(3));
        assert!(approx(capped.min_height(&theme), 19.2 * 3.0 + 24.0));
        assert!(approx(capped.max_height(&theme), 19.2 * 3.0 + 24.0));
    }

    #[test]
    fn full_radius_matches_a_single_row() {
        let theme = Theme::default();
        let vm = TextInputVm::new().corner_radius(ComponentRadius::Full);
        let one_row = vm.height_for_rows(1, &theme);
        assert!(approx(vm.corner_radius_for(200.0, &theme), one_row / 2.0));
        assert_eq!(vm.corner_radius_for(10.0, &theme), 5.0);
    }

    #[test]
    fn placeholder_colors() {
        let theme = Theme::default();
        let state = RuntimeState::new(ColorScheme::Light);

        let neutral = TextInputVm::new().resolve(&theme, &state);
        assert_eq!(neutral.placeholder, theme.colors.secondary_foreground.light.clone());

        let colored = TextInputVm::new().color(theme.colors.danger.clone());
        let enabled = colored.resolve(&theme, &state);
        assert_eq!(
            enabled.placeholder,
            theme.colors.danger.main.light.clone().with_opacity(0.7)
        );
        let disabled = colored.enabled(false).resolve(&theme, &state);
        assert_eq!(disabled.placeholder, enabled.placeholder.with_opacity(0.5));
    }
}
