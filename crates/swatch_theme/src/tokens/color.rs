//! Color tokens for theming

use swatch_core::{Color, ColorScheme};

/// Reference to a color owned by the host toolkit (e.g. `systemBackground`).
///
/// The host maps `name` to its own color; `fallback` is used wherever no such
/// mapping exists. `opacity` accumulates every `with_opacity` applied.
#[derive(Clone, Debug, PartialEq)]
pub struct PlatformColor {
    pub name: String,
    pub fallback: Color,
    pub opacity: f32,
}

impl PlatformColor {
    pub fn new(name: impl Into<String>, fallback: Color) -> Self {
        Self {
            name: name.into(),
            fallback,
            opacity: 1.0,
        }
    }
}

/// A single concrete color value
#[derive(Clone, Debug, PartialEq)]
pub enum ColorValue {
    Rgba(Color),
    Platform(PlatformColor),
}

impl ColorValue {
    /// Parse a hex literal, panicking on malformed input
    #[track_caller]
    pub fn hex(value: &str) -> Self {
        ColorValue::Rgba(Color::hex(value))
    }

    /// 8-bit RGB channels with a 0.0-1.0 alpha
    pub fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        ColorValue::Rgba(Color::from_rgba8(r, g, b, a))
    }

    pub fn platform(name: impl Into<String>, fallback: Color) -> Self {
        ColorValue::Platform(PlatformColor::new(name, fallback))
    }

    /// Multiply the alpha (or platform opacity) by `opacity`
    pub fn with_opacity(self, opacity: f32) -> Self {
        match self {
            ColorValue::Rgba(color) => ColorValue::Rgba(color.with_opacity(opacity)),
            ColorValue::Platform(mut platform) => {
                platform.opacity *= opacity;
                ColorValue::Platform(platform)
            }
        }
    }

    /// Concrete color, using the fallback for platform references
    pub fn to_color(&self) -> Color {
        match self {
            ColorValue::Rgba(color) => *color,
            ColorValue::Platform(platform) => platform.fallback.with_opacity(platform.opacity),
        }
    }
}

impl From<Color> for ColorValue {
    fn from(color: Color) -> Self {
        ColorValue::Rgba(color)
    }
}

/// A color token: one value for light appearance, one for dark
#[derive(Clone, Debug, PartialEq)]
pub struct ThemedColor {
    pub light: ColorValue,
    pub dark: ColorValue,
}

impl ThemedColor {
    pub fn themed(light: impl Into<ColorValue>, dark: impl Into<ColorValue>) -> Self {
        Self {
            light: light.into(),
            dark: dark.into(),
        }
    }

    /// Same value in both schemes
    pub fn universal(value: impl Into<ColorValue>) -> Self {
        let value = value.into();
        Self {
            light: value.clone(),
            dark: value,
        }
    }

    /// Themed pair from two hex literals
    #[track_caller]
    pub fn hex(light: &str, dark: &str) -> Self {
        Self::themed(ColorValue::hex(light), ColorValue::hex(dark))
    }

    /// Pick the value for `scheme`
    pub fn resolve(&self, scheme: ColorScheme) -> ColorValue {
        match scheme {
            ColorScheme::Light => self.light.clone(),
            ColorScheme::Dark => self.dark.clone(),
        }
    }

    pub fn with_opacity(&self, opacity: f32) -> Self {
        Self {
            light: self.light.clone().with_opacity(opacity),
            dark: self.dark.clone().with_opacity(opacity),
        }
    }

    /// Apply `disabled_opacity` unless `enabled`
    pub fn enabled(&self, enabled: bool, disabled_opacity: f32) -> Self {
        if enabled {
            self.clone()
        } else {
            self.with_opacity(disabled_opacity)
        }
    }
}

impl From<Color> for ThemedColor {
    fn from(color: Color) -> Self {
        ThemedColor::universal(color)
    }
}

/// A semantic color family used consistently across components
#[derive(Clone, Debug, PartialEq)]
pub struct ComponentColor {
    /// Primary tint (filled backgrounds, text on light backgrounds)
    pub main: ThemedColor,
    /// Color drawn on top of `main`
    pub contrast: ThemedColor,
    /// Soft tint for light-style backgrounds
    pub background: ThemedColor,
}

impl ComponentColor {
    pub fn new(main: ThemedColor, contrast: ThemedColor, background: ThemedColor) -> Self {
        Self {
            main,
            contrast,
            background,
        }
    }

    /// Family without a dedicated tint; `main` at 15% opacity stands in
    pub fn from_main(main: ThemedColor, contrast: ThemedColor) -> Self {
        let background = main.with_opacity(0.15);
        Self::new(main, contrast, background)
    }
}

/// Palette roles holding a single color token
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ColorToken {
    Background,
    SecondaryBackground,
    Foreground,
    SecondaryForeground,
    Content1,
    Content2,
    Content3,
    Content4,
    Divider,
}

/// Palette roles holding a full component color family
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ComponentColorToken {
    Primary,
    Accent,
    Success,
    Warning,
    Danger,
}

/// Complete set of palette colors
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    // Surfaces and text
    pub background: ThemedColor,
    pub secondary_background: ThemedColor,
    pub foreground: ThemedColor,
    pub secondary_foreground: ThemedColor,

    // Content fills
    pub content1: ThemedColor,
    pub content2: ThemedColor,
    pub content3: ThemedColor,
    pub content4: ThemedColor,

    pub divider: ThemedColor,

    // Component families
    pub primary: ComponentColor,
    pub accent: ComponentColor,
    pub success: ComponentColor,
    pub warning: ComponentColor,
    pub danger: ComponentColor,
}

impl Palette {
    /// Get a color token by role
    pub fn get(&self, token: ColorToken) -> &ThemedColor {
        match token {
            ColorToken::Background => &self.background,
            ColorToken::SecondaryBackground => &self.secondary_background,
            ColorToken::Foreground => &self.foreground,
            ColorToken::SecondaryForeground => &self.secondary_foreground,
            ColorToken::Content1 => &self.content1,
            ColorToken::Content2 => &self.content2,
            ColorToken::Content3 => &self.content3,
            ColorToken::Content4 => &self.content4,
            ColorToken::Divider => &self.divider,
        }
    }

    pub fn get_mut(&mut self, token: ColorToken) -> &mut ThemedColor {
        match token {
            ColorToken::Background => &mut self.background,
            ColorToken::SecondaryBackground => &mut self.secondary_background,
            ColorToken::Foreground => &mut self.foreground,
            ColorToken::SecondaryForeground => &mut self.secondary_foreground,
            ColorToken::Content1 => &mut self.content1,
            ColorToken::Content2 => &mut self.content2,
            ColorToken::Content3 => &mut self.content3,
            ColorToken::Content4 => &mut self.content4,
            ColorToken::Divider => &mut self.divider,
        }
    }

    /// Get a component color family by role
    pub fn component(&self, token: ComponentColorToken) -> &ComponentColor {
        match token {
            ComponentColorToken::Primary => &self.primary,
            ComponentColorToken::Accent => &self.accent,
            ComponentColorToken::Success => &self.success,
            ComponentColorToken::Warning => &self.warning,
            ComponentColorToken::Danger => &self.danger,
        }
    }

    pub fn component_mut(&mut self, token: ComponentColorToken) -> &mut ComponentColor {
        match token {
            ComponentColorToken::Primary => &mut self.primary,
            ComponentColorToken::Accent => &mut self.accent,
            ComponentColorToken::Success => &mut self.success,
            ComponentColorToken::Warning => &mut self.warning,
            ComponentColorToken::Danger => &mut self.danger,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        let ink = || ThemedColor::hex("#0B0C0E", "#FFFFFF");
        let ink_contrast = || ThemedColor::hex("#FFFFFF", "#0B0C0E");

        Self {
            background: ThemedColor::hex("#FFFFFF", "#000000"),
            secondary_background: ThemedColor::hex("#F5F5F5", "#323335"),
            foreground: ink(),
            secondary_foreground: ThemedColor::hex("#424355", "#D6D6D7"),

            content1: ThemedColor::hex("#EFEFF0", "#27272A"),
            content2: ThemedColor::hex("#D4D4D8", "#3F3F46"),
            content3: ThemedColor::hex("#B4BDC8", "#52525B"),
            content4: ThemedColor::hex("#8C9197", "#86898B"),

            divider: ThemedColor::themed(
                ColorValue::rgba(11, 12, 14, 0.12),
                ColorValue::rgba(255, 255, 255, 0.15),
            ),

            primary: ComponentColor::new(
                ink(),
                ink_contrast(),
                ThemedColor::hex("#D9D9D9", "#515253"),
            ),
            accent: ComponentColor::new(
                ThemedColor::universal(ColorValue::hex("#007AFF")),
                ThemedColor::universal(ColorValue::hex("#FFFFFF")),
                ThemedColor::hex("#E1EEFE", "#2B3E53"),
            ),
            success: ComponentColor::new(
                ThemedColor::hex("#37D45C", "#1EC645"),
                ink_contrast(),
                ThemedColor::hex("#E1FBE7", "#344B3C"),
            ),
            warning: ComponentColor::new(
                ThemedColor::hex("#F4B300", "#F4B300"),
                ThemedColor::universal(ColorValue::hex("#0B0C0E")),
                ThemedColor::hex("#FFF6DD", "#514A35"),
            ),
            danger: ComponentColor::new(
                ThemedColor::hex("#F03E53", "#D22338"),
                ThemedColor::universal(ColorValue::hex("#FFFFFF")),
                ThemedColor::hex("#FFE5E8", "#4F353A"),
            ),
        }
    }
}
