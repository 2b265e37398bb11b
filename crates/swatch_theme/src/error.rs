use std::path::PathBuf;

use swatch_core::ColorParseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("failed to read theme config `{}`", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    #[error("invalid color for `{role}`")]
    InvalidColor {
        role: String,
        #[source]
        source: ColorParseError,
    },

    #[error("animation scales must be between 0 and 1 (got {small}, {medium}, {large})")]
    AnimationScaleOutOfRange { small: f32, medium: f32, large: f32 },

    #[error("`{name}` must be between 0 and 1 (got {value})")]
    OutOfUnitRange { name: &'static str, value: f32 },

    #[error("`{name}` must not be negative (got {value})")]
    Negative { name: String, value: f32 },
}
