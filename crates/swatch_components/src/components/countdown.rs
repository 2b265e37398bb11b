//! Countdown timer
//!
//! - [`countdown_breakdown`] splits the time left into days, hours, minutes
//!   and seconds.
//! - [`CountdownVm`] formats each column and resolves the timer's style.
//!
//! Unit labels come from a [`UnitsCatalog`]; the view-model can also carry
//! its own [`UnitsLocalization`].

use chrono::{DateTime, Utc};
use swatch_i18n::{TimeUnit, UnitsCatalog, UnitsLocalization, DEFAULT_LANGUAGE};
use swatch_theme::{ColorValue, ComponentColor, ComponentSize, Font, Theme, TypographyRole};

use crate::resolve::{resolve_color, resolve_or_else, RuntimeState};

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;

/// Column width used before any text has been measured
pub const DEFAULT_MIN_WIDTH: f32 = 70.0;

/// Time left until a countdown target
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CountdownBreakdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl CountdownBreakdown {
    pub fn value(&self, unit: TimeUnit) -> i64 {
        match unit {
            TimeUnit::Days => self.days,
            TimeUnit::Hours => self.hours,
            TimeUnit::Minutes => self.minutes,
            TimeUnit::Seconds => self.seconds,
        }
    }

    pub fn is_finished(&self) -> bool {
        *self == Self::default()
    }
}

/// Whole seconds from `now` to `target`, cascaded into larger units.
///
/// Targets in the past yield all zeros.
pub fn countdown_breakdown(target: DateTime<Utc>, now: DateTime<Utc>) -> CountdownBreakdown {
    let mut remaining = (target - now).num_seconds().max(0);

    let days = remaining / SECONDS_PER_DAY;
    remaining %= SECONDS_PER_DAY;
    let hours = remaining / SECONDS_PER_HOUR;
    remaining %= SECONDS_PER_HOUR;
    let minutes = remaining / SECONDS_PER_MINUTE;
    let seconds = remaining % SECONDS_PER_MINUTE;

    CountdownBreakdown {
        days,
        hours,
        minutes,
        seconds,
    }
}

/// Countdown visual style
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CountdownStyle {
    /// Columns separated by colons
    #[default]
    Plain,
    /// Each column on a tinted rounded background
    Light,
}

/// Where unit labels go relative to the number
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnitsStyle {
    Hidden,
    /// Long label on a second line
    #[default]
    Bottom,
    /// Short label after the number
    Trailing,
}

/// Countdown view-model
#[derive(Clone, Debug, PartialEq)]
pub struct CountdownVm {
    pub until: DateTime<Utc>,
    pub color: Option<ComponentColor>,
    /// Falls back to the theme's headline font for `size`
    pub font: Option<Font>,
    pub size: ComponentSize,
    pub style: CountdownStyle,
    pub units_style: UnitsStyle,
    pub locale: String,
    /// Labels used instead of the catalog entry for `locale`
    pub localization: Option<UnitsLocalization>,
}

/// Concrete countdown appearance
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedCountdownStyle {
    pub foreground: ColorValue,
    /// Column background; only the light style has one
    pub background: Option<ColorValue>,
    /// Color of the colon separators in the plain style
    pub separator: ColorValue,
    pub font: Font,
    pub spacing: f32,
    pub height: f32,
    pub min_column_width: f32,
    pub corner_radius: f32,
}

impl CountdownVm {
    pub fn new(until: DateTime<Utc>) -> Self {
        Self {
            until,
            color: None,
            font: None,
            size: ComponentSize::default(),
            style: CountdownStyle::default(),
            units_style: UnitsStyle::default(),
            locale: DEFAULT_LANGUAGE.to_string(),
            localization: None,
        }
    }

    pub fn color(mut self, color: ComponentColor) -> Self {
        self.color = Some(color);
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

    pub fn style(mut self, style: CountdownStyle) -> Self {
        self.style = style;
        self
    }

    pub fn units_style(mut self, units_style: UnitsStyle) -> Self {
        self.units_style = units_style;
        self
    }

    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    pub fn localization(mut self, localization: UnitsLocalization) -> Self {
        self.localization = Some(localization);
        self
    }

    pub fn preferred_font(&self, theme: &Theme) -> Font {
        resolve_or_else(self.font.clone(), || {
            theme
                .layout
                .typography
                .font(TypographyRole::Headline, self.size)
                .clone()
        })
    }

    pub fn height(&self) -> f32 {
        self.size.pick(40.0, 55.0, 80.0)
    }

    /// Light-style column minimum width
    pub fn light_background_min_width(&self) -> f32 {
        self.size.pick(40.0, 50.0, 60.0)
    }

    pub fn horizontal_padding(&self) -> f32 {
        4.0
    }

    pub fn spacing(&self) -> f32 {
        match self.style {
            CountdownStyle::Light => 10.0,
            CountdownStyle::Plain => 6.0,
        }
    }

    /// Override if set, otherwise the catalog's labels for `locale`
    pub fn labels<'a>(&'a self, catalog: &'a UnitsCatalog) -> &'a UnitsLocalization {
        match &self.localization {
            Some(labels) => labels,
            None => catalog.get(&self.locale),
        }
    }

    /// Text of one column: zero-padded value plus the unit label
    pub fn time_text(&self, value: i64, unit: TimeUnit, labels: &UnitsLocalization) -> String {
        let label = labels.label(unit);
        match self.units_style {
            UnitsStyle::Hidden => format!("{value:02}"),
            UnitsStyle::Trailing => format!("{value:02} {}", label.short),
            UnitsStyle::Bottom => format!("{value:02}\n{}", label.long),
        }
    }

    /// Texts of all four columns, largest unit first
    pub fn column_texts(&self, now: DateTime<Utc>, catalog: &UnitsCatalog) -> [String; 4] {
        let breakdown = countdown_breakdown(self.until, now);
        let labels = self.labels(catalog);
        TimeUnit::ALL.map(|unit| self.time_text(breakdown.value(unit), unit, labels))
    }

    /// Shared column width: the widest measured text plus horizontal padding.
    ///
    /// `measure` returns the rendered width of a text in the host's font.
    pub fn preferred_column_width<S: AsRef<str>>(
        &self,
        texts: &[S],
        measure: impl Fn(&str) -> f32,
    ) -> f32 {
        let widest = texts
            .iter()
            .map(|text| measure(text.as_ref()))
            .reduce(f32::max)
            .unwrap_or(DEFAULT_MIN_WIDTH);
        widest + 2.0 * self.horizontal_padding()
    }

    pub fn resolve(&self, theme: &Theme, state: &RuntimeState) -> ResolvedCountdownStyle {
        let color = self.color.as_ref();
        let foreground = color.map_or(&theme.colors.foreground, |c| &c.main);
        let background = match self.style {
            CountdownStyle::Light => Some(resolve_color(
                color.map_or(&theme.colors.content1, |c| &c.background),
                true,
                theme,
                state,
            )),
            CountdownStyle::Plain => None,
        };

        ResolvedCountdownStyle {
            foreground: resolve_color(foreground, true, theme, state),
            background,
            separator: resolve_color(&theme.colors.secondary_foreground, true, theme, state),
            font: self.preferred_font(theme),
            spacing: self.spacing(),
            height: self.height(),
            min_column_width: match self.style {
                CountdownStyle::Light => self.light_background_min_width(),
                CountdownStyle::Plain => 0.0,
            },
            corner_radius: 8.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use pretty_assertions::assert_eq;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_breakdown_cascades() {
        let target = now() + Duration::seconds(90_061);
        assert_eq!(
            countdown_breakdown(target, now()),
            CountdownBreakdown {
                days: 1,
                hours: 1,
                minutes: 1,
                seconds: 1
            }
        );
    }

    #[test]
    fn test_past_target_clamps_to_zero() {
        let breakdown = countdown_breakdown(now() - Duration::hours(5), now());
        assert!(breakdown.is_finished());
        assert_eq!(breakdown, CountdownBreakdown::default());
    }

    #[test]
    fn sub_second_remainder_is_dropped() {
        let target = now() + Duration::milliseconds(59_999);
        assert_eq!(countdown_breakdown(target, now()).seconds, 59);
    }

    #[test]
    fn time_text_by_units_style() {
        let en = UnitsLocalization::english();
        let vm = CountdownVm::new(now());
        assert_eq!(
            vm.clone()
                .units_style(UnitsStyle::Hidden)
                .time_text(5, TimeUnit::Days, en),
            "05"
        );
        assert_eq!(
            vm.clone()
                .units_style(UnitsStyle::Trailing)
                .time_text(5, TimeUnit::Days, en),
            "05 d"
        );
        assert_eq!(vm.time_text(5, TimeUnit::Days, en), "05\nDays");
        assert_eq!(
            CountdownVm::new(now())
                .units_style(UnitsStyle::Hidden)
                .time_text(123, TimeUnit::Days, en),
            "123"
        );
    }

    #[test]
    fn column_texts_use_locale() {
        let catalog = UnitsCatalog::builtin();
        let vm = CountdownVm::new(now() + Duration::seconds(3_725))
            .locale("de_DE")
            .units_style(UnitsStyle::Trailing);
        assert_eq!(
            vm.column_texts(now(), &catalog),
            ["00 t", "01 h", "02 m", "05 s"].map(String::from)
        );
    }

    #[test]
    fn localization_override_beats_catalog() {
        let mut custom = UnitsLocalization::english().clone();
        custom.seconds.long = "Secs".to_string();
        let catalog = UnitsCatalog::builtin();
        let vm = CountdownVm::new(now()).locale("fr").localization(custom);
        assert_eq!(vm.labels(&catalog).seconds.long, "Secs");
    }

    #[test]
    fn column_width_takes_the_widest_text() {
        let vm = CountdownVm::new(now());
        let width = vm.preferred_column_width(&["01", "0123", "012"], |s| s.len() as f32 * 10.0);
        assert_eq!(width, 48.0);

        let empty: [&str; 0] = [];
        assert_eq!(vm.preferred_column_width(&empty, |_| 0.0), 78.0);
    }

    #[test]
    fn light_style_has_tinted_columns() {
        let theme = Theme::default();
        let state = RuntimeState::default();
        let plain = CountdownVm::new(now()).resolve(&theme, &state);
        assert_eq!(plain.background, None);
        assert_eq!(plain.spacing, 6.0);
        assert_eq!(plain.font.size(), 20.0);

        let light = CountdownVm::new(now())
            .style(CountdownStyle::Light)
            .resolve(&theme, &state);
        assert_eq!(light.background, Some(theme.colors.content1.light.clone()));
        assert_eq!(light.spacing, 10.0);
        assert_eq!(light.min_column_width, 50.0);
    }
}
