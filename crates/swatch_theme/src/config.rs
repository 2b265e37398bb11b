//! TOML theme configuration
//!
//! A config file carries optional overrides on top of a base theme:
//!
//! ```toml
//! disabled_opacity = 0.4
//!
//! [component_radius]
//! medium = 8.0
//!
//! [colors]
//! background = { light = "#FAFAFA", dark = "#101010" }
//! divider = "#00000022"
//!
//! [colors.accent]
//! main = "#6D28D9"
//! ```
//!
//! Color values are either one hex string used in both schemes or a
//! `{ light, dark }` table. Unlike hex literals in code, malformed values here
//! are reported as [`ThemeError`] instead of panicking.

use std::path::Path;

use serde::Deserialize;
use swatch_core::Color;
use tracing::{debug, warn};

use crate::error::ThemeError;
use crate::theme::Theme;
use crate::tokens::{
    AnimationScales, BorderWidths, ColorToken, ComponentColor, ComponentColorToken, RadiusScale,
    ThemedColor,
};

/// Partial small/medium/large override
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScaleConfig {
    pub small: Option<f32>,
    pub medium: Option<f32>,
    pub large: Option<f32>,
}

impl ScaleConfig {
    /// Merge onto `(small, medium, large)`, rejecting negative values
    fn merge(&self, name: &str, base: [f32; 3]) -> Result<[f32; 3], ThemeError> {
        let merged = [
            self.small.unwrap_or(base[0]),
            self.medium.unwrap_or(base[1]),
            self.large.unwrap_or(base[2]),
        ];
        for (value, step) in merged.iter().zip(["small", "medium", "large"]) {
            if !(*value >= 0.0) {
                return Err(ThemeError::Negative {
                    name: format!("{name}.{step}"),
                    value: *value,
                });
            }
        }
        Ok(merged)
    }
}

/// A color in config form
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ColorConfig {
    Universal(String),
    Themed { light: String, dark: String },
}

impl ColorConfig {
    fn parse(&self, role: &str) -> Result<ThemedColor, ThemeError> {
        let parse = |value: &str| {
            Color::parse_hex(value).map_err(|source| ThemeError::InvalidColor {
                role: role.to_string(),
                source,
            })
        };
        Ok(match self {
            ColorConfig::Universal(value) => ThemedColor::universal(parse(value)?),
            ColorConfig::Themed { light, dark } => ThemedColor::themed(parse(light)?, parse(dark)?),
        })
    }
}

/// Partial component color family override
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ComponentColorConfig {
    pub main: Option<ColorConfig>,
    pub contrast: Option<ColorConfig>,
    pub background: Option<ColorConfig>,
}

impl ComponentColorConfig {
    fn apply(&self, role: &str, color: &mut ComponentColor) -> Result<(), ThemeError> {
        let slots = [
            (&self.main, &mut color.main, "main"),
            (&self.contrast, &mut color.contrast, "contrast"),
            (&self.background, &mut color.background, "background"),
        ];
        for (config, slot, part) in slots {
            if let Some(config) = config {
                *slot = config.parse(&format!("{role}.{part}"))?;
            }
        }
        Ok(())
    }
}

/// Palette overrides, one optional entry per role
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaletteConfig {
    pub background: Option<ColorConfig>,
    pub secondary_background: Option<ColorConfig>,
    pub foreground: Option<ColorConfig>,
    pub secondary_foreground: Option<ColorConfig>,
    pub content1: Option<ColorConfig>,
    pub content2: Option<ColorConfig>,
    pub content3: Option<ColorConfig>,
    pub content4: Option<ColorConfig>,
    pub divider: Option<ColorConfig>,

    pub primary: Option<ComponentColorConfig>,
    pub accent: Option<ComponentColorConfig>,
    pub success: Option<ComponentColorConfig>,
    pub warning: Option<ComponentColorConfig>,
    pub danger: Option<ComponentColorConfig>,
}

impl PaletteConfig {
    fn colors(&self) -> [(ColorToken, &'static str, &Option<ColorConfig>); 9] {
        [
            (ColorToken::Background, "background", &self.background),
            (
                ColorToken::SecondaryBackground,
                "secondary_background",
                &self.secondary_background,
            ),
            (ColorToken::Foreground, "foreground", &self.foreground),
            (
                ColorToken::SecondaryForeground,
                "secondary_foreground",
                &self.secondary_foreground,
            ),
            (ColorToken::Content1, "content1", &self.content1),
            (ColorToken::Content2, "content2", &self.content2),
            (ColorToken::Content3, "content3", &self.content3),
            (ColorToken::Content4, "content4", &self.content4),
            (ColorToken::Divider, "divider", &self.divider),
        ]
    }

    fn component_colors(
        &self,
    ) -> [(ComponentColorToken, &'static str, &Option<ComponentColorConfig>); 5] {
        [
            (ComponentColorToken::Primary, "primary", &self.primary),
            (ComponentColorToken::Accent, "accent", &self.accent),
            (ComponentColorToken::Success, "success", &self.success),
            (ComponentColorToken::Warning, "warning", &self.warning),
            (ComponentColorToken::Danger, "danger", &self.danger),
        ]
    }
}

/// Theme overrides loaded from a TOML file
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    pub disabled_opacity: Option<f32>,
    pub component_radius: Option<ScaleConfig>,
    pub container_radius: Option<ScaleConfig>,
    pub border_width: Option<ScaleConfig>,
    pub animation_scale: Option<ScaleConfig>,
    pub colors: PaletteConfig,
}

impl ThemeConfig {
    pub fn from_toml_str(src: &str) -> Result<Self, ThemeError> {
        Ok(toml::from_str(src)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ThemeError> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loading theme config");
        Self::from_toml_str(&src)
    }

    /// Build a new theme from `base` with these overrides applied.
    ///
    /// `base` is left untouched; on error no partial theme is returned.
    pub fn apply(&self, base: &Theme) -> Result<Theme, ThemeError> {
        let mut theme = base.clone();
        let layout = &mut theme.layout;

        if let Some(opacity) = self.disabled_opacity {
            if !(0.0..=1.0).contains(&opacity) {
                return Err(ThemeError::OutOfUnitRange {
                    name: "disabled_opacity",
                    value: opacity,
                });
            }
            layout.disabled_opacity = opacity;
        }

        if let Some(config) = &self.component_radius {
            let r = layout.component_radius;
            let [s, m, l] = config.merge("component_radius", [r.small, r.medium, r.large])?;
            layout.component_radius = RadiusScale::new(s, m, l);
        }

        if let Some(config) = &self.container_radius {
            let r = layout.container_radius;
            let [s, m, l] = config.merge("container_radius", [r.small, r.medium, r.large])?;
            layout.container_radius = RadiusScale::new(s, m, l);
        }

        if let Some(config) = &self.border_width {
            let b = layout.border_width;
            let [small, medium, large] =
                config.merge("border_width", [b.small, b.medium, b.large])?;
            layout.border_width = BorderWidths {
                small,
                medium,
                large,
            };
        }

        if let Some(config) = &self.animation_scale {
            let a = layout.animation_scale;
            let [small, medium, large] =
                config.merge("animation_scale", [a.small(), a.medium(), a.large()])?;
            layout.animation_scale = AnimationScales::checked(small, medium, large).ok_or(
                ThemeError::AnimationScaleOutOfRange {
                    small,
                    medium,
                    large,
                },
            )?;
        }

        for (token, role, config) in self.colors.colors() {
            if let Some(config) = config {
                *theme.colors.get_mut(token) = config.parse(role)?;
            }
        }
        for (token, role, config) in self.colors.component_colors() {
            if let Some(config) = config {
                config.apply(role, theme.colors.component_mut(token))?;
            }
        }

        if theme == *base {
            warn!("theme config applied without changing any token");
        }
        Ok(theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::ColorValue;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_universal_and_themed_colors() {
        let config = ThemeConfig::from_toml_str(
            r##"
            [colors]
            divider = "#00000022"
            background = { light = "#FAFAFA", dark = "#101010" }
            "##,
        )
        .unwrap();

        let theme = config.apply(&Theme::default()).unwrap();
        assert_eq!(
            theme.colors.background.light,
            ColorValue::hex("#FAFAFA")
        );
        assert_eq!(theme.colors.background.dark, ColorValue::hex("#101010"));
        assert_eq!(theme.colors.divider.light, theme.colors.divider.dark);
    }

    #[test]
    fn partial_scales_keep_base_values() {
        let config = ThemeConfig::from_toml_str(
            r#"
            disabled_opacity = 0.4

            [component_radius]
            medium = 8.0
            "#,
        )
        .unwrap();

        let theme = config.apply(&Theme::default()).unwrap();
        assert_eq!(theme.layout.disabled_opacity, 0.4);
        assert_eq!(theme.layout.component_radius, RadiusScale::new(10.0, 8.0, 16.0));
    }

    #[test]
    fn invalid_hex_is_an_error_not_a_panic() {
        let config = ThemeConfig::from_toml_str(
            r##"
            [colors.accent]
            main = "#12"
            "##,
        )
        .unwrap();

        let err = config.apply(&Theme::default()).unwrap_err();
        match err {
            ThemeError::InvalidColor { role, .. } => assert_eq!(role, "accent.main"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn animation_scale_out_of_range_is_rejected() {
        let config = ThemeConfig::from_toml_str("[animation_scale]\nlarge = 1.5\n").unwrap();
        assert!(matches!(
            config.apply(&Theme::default()),
            Err(ThemeError::AnimationScaleOutOfRange { large, .. }) if large == 1.5
        ));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(matches!(
            ThemeConfig::from_toml_str("disabled_opacty = 0.4"),
            Err(ThemeError::Toml(_))
        ));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = ThemeConfig::load("/definitely/not/here/theme.toml").unwrap_err();
        assert!(err.to_string().contains("theme.toml"));
    }
}
