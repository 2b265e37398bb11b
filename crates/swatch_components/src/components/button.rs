//! Button view-model and style resolver
//!
//! ```rust
//! use swatch_components::{ButtonStyle, ButtonVm, RuntimeState};
//! use swatch_core::ColorScheme;
//! use swatch_theme::{ComponentSize, Theme};
//!
//! let theme = Theme::default();
//! let button = ButtonVm::new("Save")
//!     .color(theme.colors.accent.clone())
//!     .style(ButtonStyle::Light)
//!     .size(ComponentSize::Large);
//!
//! let style = button.resolve(&theme, &RuntimeState::new(ColorScheme::Light));
//! assert_eq!(style.height, 52.0);
//! ```

use swatch_core::Size;
use swatch_theme::{
    AnimationScale, BorderWidth, ComponentColor, ComponentRadius, ComponentSize, ColorValue, Font,
    Theme, ThemedColor, TypographyRole,
};

use super::loading::LoadingVm;
use crate::resolve::{resolve_color, resolve_or_else, RuntimeState};

/// Width used by full-width buttons when the parent width is unknown
pub const FULL_WIDTH: f32 = 10_000.0;

/// Visual style of a button
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ButtonStyle {
    /// Solid `main` background
    #[default]
    Filled,
    /// Tinted `background` fill
    Light,
    /// Text only
    Plain,
    /// Outline only
    Bordered(BorderWidth),
}

/// Image placement relative to the title
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ImageLocation {
    #[default]
    Leading,
    Trailing,
}

/// Where a button image comes from; the host resolves the name
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImageSource {
    /// Platform symbol set
    System(String),
    /// Asset bundled with the application
    Named(String),
}

/// Button view-model
#[derive(Clone, Debug, PartialEq)]
pub struct ButtonVm {
    pub title: String,
    pub color: Option<ComponentColor>,
    pub style: ButtonStyle,
    pub size: ComponentSize,
    pub corner_radius: ComponentRadius,
    /// Falls back to the theme's button font for `size`
    pub font: Option<Font>,
    pub animation_scale: AnimationScale,
    /// Gap between title and image or loading indicator
    pub content_spacing: f32,
    pub image: Option<ImageSource>,
    pub image_location: ImageLocation,
    pub enabled: bool,
    pub full_width: bool,
    pub loading: bool,
    pub loading_vm: Option<LoadingVm>,
}

impl Default for ButtonVm {
    fn default() -> Self {
        Self {
            title: String::new(),
            color: None,
            style: ButtonStyle::default(),
            size: ComponentSize::default(),
            corner_radius: ComponentRadius::Medium,
            font: None,
            animation_scale: AnimationScale::Medium,
            content_spacing: 8.0,
            image: None,
            image_location: ImageLocation::default(),
            enabled: true,
            full_width: false,
            loading: false,
            loading_vm: None,
        }
    }
}

/// Concrete button appearance for one render
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedButtonStyle {
    pub background: Option<ColorValue>,
    pub foreground: ColorValue,
    pub border_color: Option<ColorValue>,
    pub border_width: f32,
    pub corner_radius: f32,
    pub font: Font,
    pub height: f32,
    pub horizontal_padding: f32,
    pub image_side: f32,
    pub content_spacing: f32,
    /// Scale to draw at; below 1.0 only while pressed and interactive
    pub scale: f32,
}

impl ButtonVm {
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

    pub fn style(mut self, style: ButtonStyle) -> Self {
        self.style = style;
        self
    }

    pub fn size(mut self, size: ComponentSize) -> Self {
        self.size = size;
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

    /// # Panics
    ///
    /// Panics if a custom scale is outside `0.0..=1.0`.
    #[track_caller]
    pub fn animation_scale(mut self, scale: AnimationScale) -> Self {
        self.animation_scale = scale.validated();
        self
    }

    pub fn content_spacing(mut self, spacing: f32) -> Self {
        self.content_spacing = spacing;
        self
    }

    pub fn image(mut self, image: ImageSource, location: ImageLocation) -> Self {
        self.image = Some(image);
        self.image_location = location;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn full_width(mut self, full_width: bool) -> Self {
        self.full_width = full_width;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn loading_vm(mut self, vm: LoadingVm) -> Self {
        self.loading_vm = Some(vm);
        self
    }

    /// Enabled and not loading
    pub fn is_interactive(&self) -> bool {
        self.enabled && !self.loading
    }

    pub fn height(&self) -> f32 {
        self.size.pick(36.0, 44.0, 52.0)
    }

    pub fn horizontal_padding(&self) -> f32 {
        self.size.pick(16.0, 20.0, 24.0)
    }

    pub fn image_side(&self) -> f32 {
        self.size.pick(20.0, 24.0, 28.0)
    }

    pub fn preferred_font(&self, theme: &Theme) -> Font {
        resolve_or_else(self.font.clone(), || {
            theme
                .layout
                .typography
                .font(TypographyRole::Button, self.size)
                .clone()
        })
    }

    /// Button size for measured content.
    ///
    /// Full-width buttons take the parent width when known, otherwise
    /// [`FULL_WIDTH`].
    pub fn preferred_size(&self, content: Size, parent_width: Option<f32>) -> Size {
        let width = if self.full_width {
            match parent_width {
                Some(width) if width > 0.0 => width,
                _ => FULL_WIDTH,
            }
        } else {
            content.width + 2.0 * self.horizontal_padding()
        };
        Size::new(width, self.height())
    }

    fn background_role<'a>(&'a self, theme: &'a Theme) -> Option<&'a ThemedColor> {
        match self.style {
            ButtonStyle::Filled => Some(
                self.color
                    .as_ref()
                    .map_or(&theme.colors.content2, |c| &c.main),
            ),
            ButtonStyle::Light => Some(
                self.color
                    .as_ref()
                    .map_or(&theme.colors.content1, |c| &c.background),
            ),
            ButtonStyle::Plain | ButtonStyle::Bordered(_) => None,
        }
    }

    fn foreground_role<'a>(&'a self, theme: &'a Theme) -> &'a ThemedColor {
        let color = self.color.as_ref();
        match self.style {
            ButtonStyle::Filled => color.map_or(&theme.colors.foreground, |c| &c.contrast),
            ButtonStyle::Light | ButtonStyle::Plain | ButtonStyle::Bordered(_) => {
                color.map_or(&theme.colors.foreground, |c| &c.main)
            }
        }
    }

    /// Loading indicator shown while `loading`; tinted like the title
    pub fn preferred_loading_vm(&self, theme: &Theme) -> LoadingVm {
        if let Some(vm) = &self.loading_vm {
            return vm.clone();
        }
        let main = self
            .foreground_role(theme)
            .enabled(self.is_interactive(), theme.layout.disabled_opacity);
        let contrast = self
            .color
            .as_ref()
            .map_or(&theme.colors.background, |c| &c.main)
            .clone();
        LoadingVm::new()
            .color(ComponentColor::from_main(main, contrast))
            .size(Some(ComponentSize::Small))
    }

    pub fn resolve(&self, theme: &Theme, state: &RuntimeState) -> ResolvedButtonStyle {
        let interactive = self.is_interactive();
        let height = self.height();

        let (border_color, border_width) = match self.style {
            ButtonStyle::Bordered(width) => {
                let role = self
                    .color
                    .as_ref()
                    .map_or(&theme.colors.divider, |c| &c.main);
                (
                    Some(resolve_color(role, interactive, theme, state)),
                    width.value(&theme.layout),
                )
            }
            _ => (None, 0.0),
        };

        let scale = if state.pressed && interactive {
            self.animation_scale.value(&theme.layout)
        } else {
            1.0
        };

        tracing::trace!(title = %self.title, style = ?self.style, interactive, "resolving button");

        ResolvedButtonStyle {
            background: self
                .background_role(theme)
                .map(|role| resolve_color(role, interactive, theme, state)),
            foreground: resolve_color(self.foreground_role(theme), interactive, theme, state),
            border_color,
            border_width,
            corner_radius: self.corner_radius.value(&theme.layout, height),
            font: self.preferred_font(theme),
            height,
            horizontal_padding: self.horizontal_padding(),
            image_side: self.image_side(),
            content_spacing: self.content_spacing,
            scale,
        }
    }
}
