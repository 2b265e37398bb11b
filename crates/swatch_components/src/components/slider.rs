//! Slider view-model, track layout and style resolver

use swatch_core::{progress_fraction, snapped_value, striped_fill, Rect, Size, StripedFill};
use swatch_theme::{ColorValue, ComponentColor, ComponentRadius, ComponentSize, Theme, ThemedColor};

use crate::resolve::{resolve_color, track_corner_radius, RuntimeState};

/// Gap between the handle and either track segment
pub const TRACK_SPACING: f32 = 4.0;
/// Side of the grip mark drawn on the handle
pub const HANDLE_OVERLAY_SIDE: f32 = 12.0;

/// Visual style of a slider
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SliderStyle {
    /// Solid `main` bar on a tinted track
    #[default]
    Light,
    /// `contrast` bar on a striped `main` track
    Striped,
}

/// Slider view-model
#[derive(Clone, Debug, PartialEq)]
pub struct SliderVm {
    /// Falls back to the theme's accent family
    pub color: Option<ComponentColor>,
    pub style: SliderStyle,
    pub size: ComponentSize,
    pub corner_radius: ComponentRadius,
    /// Snapping interval; `<= 0` disables snapping
    pub step: f32,
    pub enabled: bool,
    min_value: f32,
    max_value: f32,
}

impl Default for SliderVm {
    fn default() -> Self {
        Self {
            color: None,
            style: SliderStyle::default(),
            size: ComponentSize::default(),
            corner_radius: ComponentRadius::Full,
            step: 1.0,
            enabled: true,
            min_value: 0.0,
            max_value: 100.0,
        }
    }
}

/// Horizontal split of a slider for one value
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderLayout {
    /// Filled segment left of the handle
    pub left_width: f32,
    /// Remaining track right of the handle
    pub right_width: f32,
    pub track_height: f32,
    pub handle: Size,
    /// Height of the whole control
    pub container_height: f32,
}

/// Concrete slider appearance
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedSliderStyle {
    pub bar: ColorValue,
    pub background: ColorValue,
    pub handle: ColorValue,
    pub handle_overlay: ColorValue,
    pub track_radius: f32,
    pub handle_radius: f32,
    pub striped: bool,
}

impl SliderVm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value bounds.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`.
    #[track_caller]
    pub fn range(mut self, min: f32, max: f32) -> Self {
        assert!(min <= max, "slider min value {min} exceeds max value {max}");
        self.min_value = min;
        self.max_value = max;
        self
    }

    pub fn min_value(&self) -> f32 {
        self.min_value
    }

    pub fn max_value(&self) -> f32 {
        self.max_value
    }

    pub fn color(mut self, color: ComponentColor) -> Self {
        self.color = Some(color);
        self
    }

    pub fn style(mut self, style: SliderStyle) -> Self {
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

    pub fn step(mut self, step: f32) -> Self {
        self.step = step;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn track_height(&self) -> f32 {
        self.size.pick(6.0, 12.0, 32.0)
    }

    pub fn handle_size(&self) -> Size {
        match self.size {
            ComponentSize::Small | ComponentSize::Medium => Size::new(20.0, 32.0),
            ComponentSize::Large => Size::new(40.0, 40.0),
        }
    }

    pub fn container_height(&self) -> f32 {
        self.handle_size().height.max(self.track_height())
    }

    pub fn progress(&self, value: f32) -> f32 {
        progress_fraction(self.min_value, self.max_value, value)
    }

    /// Value under a pointer `offset` along a track of `track_width`
    pub fn value_at(&self, offset: f32, track_width: f32) -> f32 {
        snapped_value(offset, track_width, self.min_value, self.max_value, self.step)
    }

    /// Width left for the two track segments once the handle is placed
    fn slider_width(&self, total_width: f32) -> f32 {
        (total_width - self.handle_size().width - 2.0 * TRACK_SPACING).max(0.0)
    }

    pub fn layout(&self, total_width: f32, value: f32) -> SliderLayout {
        let width = self.slider_width(total_width);
        let left_width = width * self.progress(value);
        SliderLayout {
            left_width,
            right_width: width - left_width,
            track_height: self.track_height(),
            handle: self.handle_size(),
            container_height: self.container_height(),
        }
    }

    fn family<'a>(&'a self, theme: &'a Theme) -> &'a ComponentColor {
        self.color.as_ref().unwrap_or(&theme.colors.accent)
    }

    fn bar_role<'a>(&'a self, theme: &'a Theme) -> &'a ThemedColor {
        let family = self.family(theme);
        match self.style {
            SliderStyle::Light => &family.main,
            SliderStyle::Striped => &family.contrast,
        }
    }

    fn background_role<'a>(&'a self, theme: &'a Theme) -> &'a ThemedColor {
        let family = self.family(theme);
        match self.style {
            SliderStyle::Light => &family.background,
            SliderStyle::Striped => &family.main,
        }
    }

    /// Stripes over the remaining track, `None` for the light style
    pub fn stripes(&self, track: Rect, theme: &Theme, state: &RuntimeState) -> Option<StripedFill> {
        match self.style {
            SliderStyle::Light => None,
            SliderStyle::Striped => {
                let color = resolve_color(self.bar_role(theme), self.enabled, theme, state);
                Some(striped_fill(track, color.to_color()))
            }
        }
    }

    pub fn resolve(&self, theme: &Theme, state: &RuntimeState) -> ResolvedSliderStyle {
        let bar = resolve_color(self.bar_role(theme), self.enabled, theme, state);
        ResolvedSliderStyle {
            background: resolve_color(self.background_role(theme), self.enabled, theme, state),
            handle: bar.clone(),
            handle_overlay: resolve_color(&self.family(theme).contrast, self.enabled, theme, state),
            bar,
            track_radius: track_corner_radius(self.corner_radius, self.track_height()),
            handle_radius: track_corner_radius(self.corner_radius, self.handle_size().width),
            striped: self.style == SliderStyle::Striped,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swatch_core::ColorScheme;

    #[test]
    #[should_panic(expected = "exceeds max value")]
    fn inverted_range_panics() {
        let _ = SliderVm::new().range(10.0, 5.0);
    }

    #[test]
    fn test_metrics_by_size() {
        let small = SliderVm::new().size(ComponentSize::Small);
        assert_eq!(small.track_height(), 6.0);
        assert_eq!(small.handle_size(), Size::new(20.0, 32.0));
        assert_eq!(small.container_height(), 32.0);

        let large = SliderVm::new().size(ComponentSize::Large);
        assert_eq!(large.track_height(), 32.0);
        assert_eq!(large.handle_size(), Size::new(40.0, 40.0));
    }

    #[test]
    fn layout_splits_the_track_around_the_handle() {
        let slider = SliderVm::new();
        // 228 - 20 handle - 8 spacing leaves 200
        let layout = slider.layout(228.0, 25.0);
        assert_eq!(layout.left_width, 50.0);
        assert_eq!(layout.right_width, 150.0);

        let cramped = slider.layout(10.0, 50.0);
        assert_eq!(cramped.left_width + cramped.right_width, 0.0);
    }

    #[test]
    fn dragging_snaps_to_steps() {
        let slider = SliderVm::new().range(0.0, 10.0).step(2.5);
        assert_eq!(slider.value_at(30.0, 100.0), 2.5);
        assert_eq!(slider.value_at(500.0, 100.0), 10.0);
        assert_eq!(slider.value_at(-5.0, 100.0), 0.0);
        assert_eq!(slider.value_at(50.0, 0.0), 0.0);
    }

    #[test]
    fn striped_style_swaps_roles() {
        let theme = Theme::default();
        let state = RuntimeState::new(ColorScheme::Light);
        let light = SliderVm::new().resolve(&theme, &state);
        assert_eq!(light.bar, theme.colors.accent.main.light.clone());
        assert_eq!(light.background, theme.colors.accent.background.light.clone());

        let slider = SliderVm::new().style(SliderStyle::Striped);
        let striped = slider.resolve(&theme, &state);
        assert_eq!(striped.bar, theme.colors.accent.contrast.light.clone());
        assert_eq!(striped.background, theme.colors.accent.main.light.clone());

        let track = Rect::new(0.0, 0.0, 120.0, 12.0);
        let fill = slider.stripes(track, &theme, &state).unwrap();
        assert_eq!(fill.clip, track);
        assert!(!fill.path.is_empty());
        assert!(SliderVm::new().stripes(track, &theme, &state).is_none());
    }

    #[test]
    fn full_radius_rounds_the_track() {
        let style = SliderVm::new().resolve(&Theme::default(), &RuntimeState::default());
        assert_eq!(style.track_radius, 6.0);
        assert_eq!(style.handle_radius, 10.0);
    }
}
