//! Countdown unit labels
//!
//! Each locale maps the four countdown units to a short form (`"d"`) and a
//! long form (`"Days"`). Ten languages ship built in; hosts can add or
//! replace entries from YAML:
//!
//! ```yaml
//! it:
//!   days: { short: g, long: Giorni }
//!   hours: { short: h, long: Ore }
//!   minutes: { short: m, long: Minuti }
//!   seconds: { short: s, long: Secondi }
//! ```

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::OnceLock;

use rustc_hash::FxHashMap;
use serde::Deserialize;
use tracing::debug;

use crate::error::I18nError;
use crate::locale::{locale_fallback_chain, normalize_locale, DEFAULT_LANGUAGE};

const MAX_CATALOG_LOCALES: usize = 1_000;
const MAX_LABEL_BYTES: usize = 64;

/// Countdown unit
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    Days,
    Hours,
    Minutes,
    Seconds,
}

impl TimeUnit {
    /// Display order, largest first
    pub const ALL: [TimeUnit; 4] = [
        TimeUnit::Days,
        TimeUnit::Hours,
        TimeUnit::Minutes,
        TimeUnit::Seconds,
    ];
}

/// Short and long label of one unit
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UnitLabel {
    pub short: String,
    pub long: String,
}

impl UnitLabel {
    pub fn new(short: impl Into<String>, long: impl Into<String>) -> Self {
        Self {
            short: short.into(),
            long: long.into(),
        }
    }
}

/// Labels for all four countdown units in one locale
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UnitsLocalization {
    pub days: UnitLabel,
    pub hours: UnitLabel,
    pub minutes: UnitLabel,
    pub seconds: UnitLabel,
}

impl UnitsLocalization {
    pub fn label(&self, unit: TimeUnit) -> &UnitLabel {
        match unit {
            TimeUnit::Days => &self.days,
            TimeUnit::Hours => &self.hours,
            TimeUnit::Minutes => &self.minutes,
            TimeUnit::Seconds => &self.seconds,
        }
    }

    fn labels(&self) -> [&UnitLabel; 4] {
        [&self.days, &self.hours, &self.minutes, &self.seconds]
    }

    /// Baked-in English labels, the last resort of every lookup
    pub fn english() -> &'static UnitsLocalization {
        static ENGLISH: OnceLock<UnitsLocalization> = OnceLock::new();
        ENGLISH.get_or_init(|| table_entry(BUILTIN[0].1))
    }
}

type RawTable = [(&'static str, &'static str); 4];

/// Built-in labels: days, hours, minutes, seconds as (short, long)
const BUILTIN: [(&str, RawTable); 10] = [
    ("en", [("d", "Days"), ("h", "Hours"), ("m", "Minutes"), ("s", "Seconds")]),
    ("es", [("d", "Días"), ("h", "Horas"), ("m", "Minutos"), ("s", "Segundos")]),
    ("fr", [("j", "Jours"), ("h", "Heures"), ("m", "Minutes"), ("s", "Secondes")]),
    ("de", [("t", "Tage"), ("h", "Stunden"), ("m", "Minuten"), ("s", "Sekunden")]),
    ("zh", [("天", "天"), ("时", "小时"), ("分", "分钟"), ("秒", "秒")]),
    ("ja", [("日", "日"), ("時", "時間"), ("分", "分"), ("秒", "秒")]),
    ("ru", [("д", "Дней"), ("ч", "Часов"), ("м", "Минут"), ("с", "Секунд")]),
    ("ar", [("ي", "أيام"), ("س", "ساعات"), ("د", "دقائق"), ("ث", "ثوانٍ")]),
    ("hi", [("दि", "दिन"), ("घं", "घंटे"), ("मि", "मिनट"), ("से", "सेकंड")]),
    ("pt", [("d", "Dias"), ("h", "Horas"), ("m", "Minutos"), ("s", "Segundos")]),
];

fn table_entry(raw: RawTable) -> UnitsLocalization {
    let [days, hours, minutes, seconds] = raw.map(|(short, long)| UnitLabel::new(short, long));
    UnitsLocalization {
        days,
        hours,
        minutes,
        seconds,
    }
}

/// Unit labels keyed by normalized locale
#[derive(Clone, Debug, Default)]
pub struct UnitsCatalog {
    entries: FxHashMap<String, UnitsLocalization>,
}

impl UnitsCatalog {
    /// Empty catalog; lookups still fall back to English
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog holding the built-in languages
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        for (locale, raw) in BUILTIN {
            catalog.insert(locale, table_entry(raw));
        }
        catalog
    }

    pub fn insert(&mut self, locale: &str, labels: UnitsLocalization) {
        self.entries.insert(normalize_locale(locale), labels);
    }

    pub fn contains(&self, locale: &str) -> bool {
        self.entries.contains_key(&normalize_locale(locale))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Labels for `locale`, walking its fallback chain.
    ///
    /// Never fails: locales with no match get the baked-in English table.
    pub fn get(&self, locale: &str) -> &UnitsLocalization {
        let normalized = normalize_locale(locale);
        let language = normalized.split('-').next().unwrap_or_default();

        for candidate in locale_fallback_chain(locale) {
            if let Some(labels) = self.entries.get(&candidate) {
                if candidate == DEFAULT_LANGUAGE && language != DEFAULT_LANGUAGE {
                    debug!(locale, "no unit labels for locale, using English");
                }
                return labels;
            }
        }
        debug!(locale, "no unit labels for locale, using built-in English");
        UnitsLocalization::english()
    }

    /// Parse a YAML mapping of locale -> unit labels
    pub fn parse_yaml(src: &str) -> Result<Self, I18nError> {
        let raw: BTreeMap<String, UnitsLocalization> = serde_yaml::from_str(src)?;
        if raw.len() > MAX_CATALOG_LOCALES {
            return Err(I18nError::TooManyLocales {
                max: MAX_CATALOG_LOCALES,
            });
        }

        let mut catalog = Self::new();
        for (locale, labels) in raw {
            let normalized = normalize_locale(&locale);
            if normalized.is_empty() {
                return Err(I18nError::InvalidLocale(locale));
            }
            for label in labels.labels() {
                if label.long.is_empty() || label.short.is_empty() {
                    return Err(I18nError::EmptyLabel { locale });
                }
                if label.long.len() > MAX_LABEL_BYTES || label.short.len() > MAX_LABEL_BYTES {
                    return Err(I18nError::LabelTooLong {
                        locale,
                        max: MAX_LABEL_BYTES,
                    });
                }
            }
            catalog.entries.insert(normalized, labels);
        }
        debug!(locales = catalog.len(), "parsed unit label catalog");
        Ok(catalog)
    }

    /// Read and parse a YAML catalog file
    pub fn load_yaml(path: impl AsRef<Path>) -> Result<Self, I18nError> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path).map_err(|source| I18nError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse_yaml(&src)
    }

    /// Add every entry of `other`, replacing existing locales
    pub fn merge(&mut self, other: UnitsCatalog) {
        self.entries.extend(other.entries);
    }
}
