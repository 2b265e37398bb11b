//! Single-line input field with a floating title
//!
//! The title sits centered in the field while it is empty, unfocused and has
//! no placeholder; otherwise it floats above the text in a smaller font. The
//! position is recomputed from the current [`InputFieldState`] on every
//! change and never depends on earlier states.

use swatch_theme::{
    ColorValue, ComponentColor, ComponentRadius, ComponentSize, Font, Theme, ThemedColor,
    TypographyRole,
};

use super::text_input::PLACEHOLDER_OPACITY;
use crate::input::{KeyboardType, SubmitType, TextAutocapitalization};
use crate::resolve::{fade, resolve_color, resolve_or_else, RuntimeState};

/// Marker appended to the title of required fields
pub const REQUIRED_MARKER: &str = "*";
/// Gap between a floating title and the text below it
const TITLE_SPACING: f32 = 2.0;
/// Points the floating title shrinks by
const TITLE_SIZE_DELTA: f32 = -2.0;

/// Where the title is drawn
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TitlePosition {
    /// Vertically centered, standing in for the text
    Center,
    /// Above the text
    Top,
}

/// Title position for the given inputs
pub fn title_position(focused: bool, has_text: bool, has_placeholder: bool) -> TitlePosition {
    if focused || has_text || has_placeholder {
        TitlePosition::Top
    } else {
        TitlePosition::Center
    }
}

/// Transient inputs that decide the title position
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputFieldState {
    pub focused: bool,
    pub has_text: bool,
}

impl InputFieldState {
    pub fn new(focused: bool, text: &str) -> Self {
        Self {
            focused,
            has_text: !text.is_empty(),
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Update after the text changed
    pub fn with_text(mut self, text: &str) -> Self {
        self.has_text = !text.is_empty();
        self
    }
}

/// Input field view-model
#[derive(Clone, Debug, PartialEq)]
pub struct InputFieldVm {
    pub title: Option<String>,
    pub placeholder: Option<String>,
    pub color: Option<ComponentColor>,
    pub corner_radius: ComponentRadius,
    /// Falls back to the theme's body font for `size`
    pub font: Option<Font>,
    pub size: ComponentSize,
    pub tint_color: Option<ThemedColor>,
    pub enabled: bool,
    /// Mask the entered text
    pub secure_input: bool,
    /// Mark the title as required
    pub required: bool,
    pub autocapitalization: TextAutocapitalization,
    pub autocorrection: bool,
    pub keyboard_type: KeyboardType,
    pub submit_type: SubmitType,
}

impl Default for InputFieldVm {
    fn default() -> Self {
        Self {
            title: None,
            placeholder: None,
            color: None,
            corner_radius: ComponentRadius::Medium,
            font: None,
            size: ComponentSize::default(),
            tint_color: None,
            enabled: true,
            secure_input: false,
            required: false,
            autocapitalization: TextAutocapitalization::default(),
            autocorrection: true,
            keyboard_type: KeyboardType::default(),
            submit_type: SubmitType::default(),
        }
    }
}

/// Concrete input field appearance for one state
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedInputFieldStyle {
    pub background: ColorValue,
    pub foreground: ColorValue,
    pub placeholder: ColorValue,
    pub tint: ColorValue,
    pub title_color: ColorValue,
    /// Color of [`REQUIRED_MARKER`]; `None` for optional fields
    pub required_marker: Option<ColorValue>,
    pub title_position: TitlePosition,
    pub title_font: Font,
    pub font: Font,
    pub height: f32,
    pub corner_radius: f32,
    pub horizontal_padding: f32,
    pub vertical_padding: f32,
    /// Offset of the text from the top edge
    pub input_top_padding: f32,
    pub secure_input: bool,
}

impl InputFieldVm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
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

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn secure_input(mut self, secure: bool) -> Self {
        self.secure_input = secure;
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn keyboard_type(mut self, keyboard_type: KeyboardType) -> Self {
        self.keyboard_type = keyboard_type;
        self
    }

    fn has_placeholder(&self) -> bool {
        self.placeholder.as_deref().is_some_and(|p| !p.is_empty())
    }

    pub fn title_position(&self, state: &InputFieldState) -> TitlePosition {
        title_position(state.focused, state.has_text, self.has_placeholder())
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

    pub fn title_font(&self, position: TitlePosition, theme: &Theme) -> Font {
        let font = self.preferred_font(theme);
        match position {
            TitlePosition::Center => font,
            TitlePosition::Top => font.with_relative_size(TITLE_SIZE_DELTA),
        }
    }

    pub fn height(&self) -> f32 {
        self.size.pick(60.0, 70.0, 80.0)
    }

    pub fn horizontal_padding(&self) -> f32 {
        12.0
    }

    pub fn vertical_padding(&self) -> f32 {
        12.0
    }

    /// Where the text starts: below the floating title
    pub fn input_top_padding(&self, theme: &Theme) -> f32 {
        self.vertical_padding()
            + self.title_font(TitlePosition::Top, theme).line_height()
            + TITLE_SPACING
    }

    /// Title text including the required marker
    pub fn display_title(&self) -> Option<String> {
        self.title.as_ref().map(|title| {
            if self.required {
                format!("{title} {REQUIRED_MARKER}")
            } else {
                title.clone()
            }
        })
    }

    pub fn resolve(
        &self,
        theme: &Theme,
        state: &RuntimeState,
        field: &InputFieldState,
    ) -> ResolvedInputFieldStyle {
        let color = self.color.as_ref();
        let position = self.title_position(field);
        let tint = resolve_or_else(self.tint_color.clone(), || theme.colors.accent.main.clone());
        let placeholder = match color {
            Some(color) => color.main.with_opacity(PLACEHOLDER_OPACITY),
            None => theme.colors.secondary_foreground.clone(),
        };
        let title_role = match position {
            TitlePosition::Top => &theme.colors.foreground,
            TitlePosition::Center => &theme.colors.secondary_foreground,
        };

        ResolvedInputFieldStyle {
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
            title_color: resolve_color(title_role, self.enabled, theme, state),
            required_marker: self
                .required
                .then(|| resolve_color(&theme.colors.danger.main, self.enabled, theme, state)),
            title_position: position,
            title_font: self.title_font(position, theme),
            font: self.preferred_font(theme),
            height: self.height(),
            corner_radius: self.corner_radius.value(&theme.layout, self.height()),
            horizontal_padding: self.horizontal_padding(),
            vertical_padding: self.vertical_padding(),
            input_top_padding: self.input_top_padding(theme),
            secure_input: self.secure_input,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swatch_core::ColorScheme;

    #[test]
    fn test_title_position_truth_table() {
        for focused in [false, true] {
            for has_text in [false, true] {
                for has_placeholder in [false, true] {
                    let expected = if focused || has_text || has_placeholder {
                        TitlePosition::Top
                    } else {
                        TitlePosition::Center
                    };
                    assert_eq!(title_position(focused, has_text, has_placeholder), expected);
                }
            }
        }
    }

    #[test]
    fn title_returns_to_center_after_clearing() {
        let vm = InputFieldVm::new().title("Email");
        let state = InputFieldState::new(true, "");
        assert_eq!(vm.title_position(&state), TitlePosition::Top);

        let typed = state.with_text("a@b.c").focused(false);
        assert_eq!(vm.title_position(&typed), TitlePosition::Top);

        let cleared = typed.with_text("");
        assert_eq!(vm.title_position(&cleared), TitlePosition::Center);
    }

    #[test]
    fn empty_placeholder_does_not_lift_the_title() {
        let vm = InputFieldVm::new().placeholder("");
        assert_eq!(vm.title_position(&InputFieldState::default()), TitlePosition::Center);
        let vm = vm.placeholder("name@example.com");
        assert_eq!(vm.title_position(&InputFieldState::default()), TitlePosition::Top);
    }

    #[test]
    fn floating_title_is_smaller() {
        let theme = Theme::default();
        let vm = InputFieldVm::new().title("Name");
        let style = vm.resolve(
            &theme,
            &RuntimeState::new(ColorScheme::Dark),
            &InputFieldState::new(true, ""),
        );
        assert_eq!(style.title_position, TitlePosition::Top);
        assert_eq!(style.title_font.size(), style.font.size() - 2.0);
        assert_eq!(style.title_color, theme.colors.foreground.dark.clone());
    }

    #[test]
    fn required_marker() {
        let theme = Theme::default();
        let vm = InputFieldVm::new().title("Password").required(true).secure_input(true);
        assert_eq!(vm.display_title().as_deref(), Some("Password *"));

        let style = vm.resolve(&theme, &RuntimeState::default(), &InputFieldState::default());
        assert_eq!(style.required_marker, Some(theme.colors.danger.main.light.clone()));
        assert!(style.secure_input);
        assert_eq!(InputFieldVm::new().display_title(), None);
    }
}
