use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum I18nError {
    #[error("yaml parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to read catalog `{}`", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid locale `{0}`")]
    InvalidLocale(String),

    #[error("unit labels for `{locale}` must not be empty")]
    EmptyLabel { locale: String },

    #[error("unit label for `{locale}` is too long (max {max} bytes)")]
    LabelTooLong { locale: String, max: usize },

    #[error("too many locales (max {max})")]
    TooManyLocales { max: usize },
}
