//! Swatch localization
//!
//! - Locale normalization and fallback chains ending in English
//! - Countdown unit labels (short/long forms) for ten built-in languages,
//!   extensible from YAML catalogs
//!
//! Lookups never fail: a locale with no labels resolves to the built-in
//! English table.
//!
//! ```rust
//! use swatch_i18n::UnitsCatalog;
//!
//! let catalog = UnitsCatalog::builtin();
//! assert_eq!(catalog.get("de-AT").days.long, "Tage");
//! assert_eq!(catalog.get("xx").days.long, "Days");
//! ```

mod error;
mod locale;
mod units;

pub use error::I18nError;
pub use locale::{locale_fallback_chain, normalize_locale, DEFAULT_LANGUAGE};
pub use units::{TimeUnit, UnitLabel, UnitsCatalog, UnitsLocalization};
