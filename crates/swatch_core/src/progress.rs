//! Progress and slider value math

/// Normalized progress of `current` within `[min, max]`, clamped to `0.0..=1.0`.
///
/// A zero or negative range yields `0.0`.
pub fn progress_fraction(min: f32, max: f32, current: f32) -> f32 {
    let range = max - min;
    if !(range > 0.0) {
        return 0.0;
    }
    ((current - min) / range).clamp(0.0, 1.0)
}

/// Map a pointer offset along a track back to a value, snapped to `step`.
///
/// The offset fraction is clamped to the track, so the result always stays in
/// `[min, max]`. Snapping counts whole steps from `min`; a `step` of zero or
/// less returns the raw interpolated value. A track with no width maps to `min`.
pub fn snapped_value(offset: f32, track_width: f32, min: f32, max: f32, step: f32) -> f32 {
    if !(track_width > 0.0) {
        return min;
    }

    let range = (max - min).max(0.0);
    let fraction = (offset / track_width).clamp(0.0, 1.0);
    let raw = min + fraction * range;

    if !(step > 0.0) {
        return raw;
    }

    let max_steps = (range / step).floor();
    let steps = ((raw - min) / step).round().clamp(0.0, max_steps);
    min + steps * step
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fraction_endpoints() {
        assert_eq!(progress_fraction(10.0, 20.0, 10.0), 0.0);
        assert_eq!(progress_fraction(10.0, 20.0, 20.0), 1.0);
        assert_eq!(progress_fraction(10.0, 20.0, 15.0), 0.5);
    }

    #[test]
    fn fraction_clamps_out_of_range_values() {
        assert_eq!(progress_fraction(0.0, 100.0, -50.0), 0.0);
        assert_eq!(progress_fraction(0.0, 100.0, 150.0), 1.0);
    }

    #[test]
    fn fraction_of_degenerate_range_is_zero() {
        assert_eq!(progress_fraction(5.0, 5.0, 5.0), 0.0);
        assert_eq!(progress_fraction(5.0, 5.0, 100.0), 0.0);
        assert_eq!(progress_fraction(10.0, 0.0, 5.0), 0.0);
    }

    #[test]
    fn fraction_is_monotonic() {
        let mut previous = 0.0;
        for i in -20..=120 {
            let f = progress_fraction(0.0, 100.0, i as f32);
            assert!(f >= previous);
            assert!((0.0..=1.0).contains(&f));
            previous = f;
        }
    }

    #[test]
    fn snapping_counts_steps_from_min() {
        // 30% of [3, 13] is 6.0; nearest step of 4 from 3 is 7.
        assert_eq!(snapped_value(30.0, 100.0, 3.0, 13.0, 4.0), 7.0);
        assert_eq!(snapped_value(0.0, 100.0, 3.0, 13.0, 4.0), 3.0);
    }

    #[test]
    fn snapping_stays_within_bounds() {
        // Nearest step would be 12.0, beyond max.
        assert_eq!(snapped_value(100.0, 100.0, 0.0, 10.0, 4.0), 8.0);
        assert_eq!(snapped_value(-40.0, 100.0, 0.0, 10.0, 4.0), 0.0);
        assert_eq!(snapped_value(500.0, 100.0, 0.0, 10.0, 4.0), 8.0);
    }

    #[test]
    fn snapped_values_are_step_multiples() {
        let (min, max, step) = (-5.0, 20.0, 2.5);
        for offset in 0..=200 {
            let v = snapped_value(offset as f32, 200.0, min, max, step);
            let steps = (v - min) / step;
            assert!((steps - steps.round()).abs() < 1e-4);
            assert!(v >= min && v <= max);
        }
    }

    #[test]
    fn non_positive_step_disables_snapping() {
        assert_eq!(snapped_value(25.0, 100.0, 0.0, 10.0, 0.0), 2.5);
        assert_eq!(snapped_value(25.0, 100.0, 0.0, 10.0, -1.0), 2.5);
    }

    #[test]
    fn empty_track_maps_to_min() {
        assert_eq!(snapped_value(10.0, 0.0, 4.0, 10.0, 1.0), 4.0);
    }
}
