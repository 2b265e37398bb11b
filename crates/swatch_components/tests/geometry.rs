use chrono::{Duration, TimeZone, Utc};
use swatch_components::*;
use swatch_core::{progress_fraction, snapped_value, Rect};
use swatch_i18n::UnitsCatalog;
use swatch_theme::{ComponentRadius, ComponentSize, Theme};

const HEIGHTS: [f32; 7] = [0.0, 1.0, 8.0, 20.0, 36.0, 44.0, 400.0];

#[test]
fn radius_never_exceeds_half_the_height() {
    let theme = Theme::default();
    let radii = [
        ComponentRadius::None,
        ComponentRadius::Small,
        ComponentRadius::Medium,
        ComponentRadius::Large,
        ComponentRadius::Full,
        ComponentRadius::Custom(1_000.0),
    ];

    for radius in radii {
        for height in HEIGHTS {
            assert!(radius.value(&theme.layout, height) <= height / 2.0);
            assert!(track_corner_radius(radius, height) <= height / 2.0);
        }
        for size in [ComponentSize::Small, ComponentSize::Medium, ComponentSize::Large] {
            let button = ButtonVm::new("x").size(size).corner_radius(radius);
            let style = button.resolve(&theme, &RuntimeState::default());
            assert!(style.corner_radius <= style.height / 2.0);

            let badge = BadgeVm::new("x").corner_radius(radius);
            let style = badge.resolve(&theme, &RuntimeState::default());
            assert!(style.corner_radius <= badge.height(&theme) / 2.0);
        }
    }

    let card = CardVm::new().resolve(&theme, &RuntimeState::default());
    for height in HEIGHTS {
        assert!(card.corner_radius_for(height) <= height / 2.0);
    }
}

#[test]
fn progress_fraction_is_monotonic_and_bounded() {
    let mut previous = 0.0;
    for i in -20..=120 {
        let fraction = progress_fraction(0.0, 100.0, i as f32);
        assert!((0.0..=1.0).contains(&fraction));
        assert!(fraction >= previous);
        previous = fraction;
    }
    assert_eq!(progress_fraction(3.0, 3.0, 3.0), 0.0);
}

#[test]
fn snapped_values_are_step_multiples_within_bounds() {
    let (min, max, step) = (-10.0_f32, 30.0_f32, 2.5_f32);
    for offset in (-50..=350).step_by(7) {
        let value = snapped_value(offset as f32, 300.0, min, max, step);
        assert!((min..=max).contains(&value), "{value}");
        let steps = (value - min) / step;
        assert!((steps - steps.round()).abs() < 1e-4, "{value}");
    }
}

#[test]
fn countdown_breaks_down_and_clamps() {
    let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();

    let ahead = countdown_breakdown(now + Duration::seconds(90_061), now);
    assert_eq!(
        (ahead.days, ahead.hours, ahead.minutes, ahead.seconds),
        (1, 1, 1, 1)
    );

    let past = countdown_breakdown(now - Duration::seconds(90_061), now);
    assert_eq!(past, CountdownBreakdown::default());
}

#[test]
fn countdown_unknown_locale_uses_english() {
    let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    let vm = CountdownVm::new(now + Duration::days(2)).locale("xx");
    let texts = vm.column_texts(now, &UnitsCatalog::builtin());
    assert_eq!(texts[0], "02\nDays");
    assert_eq!(texts[3], "00\nSeconds");
}

#[test]
#[should_panic(expected = "duplicated id: \"a\"")]
fn duplicate_radio_ids_panic() {
    let mut vm = RadioGroupVm::new();
    vm.set_items(vec![RadioItem::new("a", "First"), RadioItem::new("a", "Second")]);
}

#[test]
#[should_panic(expected = "duplicated id: \"a\"")]
fn duplicate_segment_ids_panic() {
    let _ = SegmentedControlVm::new()
        .with_items(vec![SegmentedItem::new("a", "First"), SegmentedItem::new("a", "Second")]);
}

#[test]
fn slider_and_progress_bar_share_the_stripe_pattern() {
    let theme = Theme::default();
    let state = RuntimeState::default();
    let rect = Rect::new(0.0, 0.0, 120.0, 32.0);

    let slider = SliderVm::new()
        .style(SliderStyle::Striped)
        .stripes(rect, &theme, &state)
        .unwrap();
    let bar = ProgressBarVm::new()
        .style(ProgressBarStyle::Striped)
        .stripes(rect, &theme, &state)
        .unwrap();
    assert_eq!(slider.path, bar.path);
}
