//! Linear progress bar

use swatch_core::{progress_fraction, striped_fill, Rect, StripedFill};
use swatch_theme::{ColorValue, ComponentColor, ComponentRadius, ComponentSize, Theme};

use crate::resolve::{resolve_color, track_corner_radius, RuntimeState};

/// Inset of the inner bar in the filled and striped styles
pub const INNER_INSET: f32 = 3.0;
/// Gap between bar and remaining track in the light style
pub const LIGHT_GAP: f32 = 4.0;

/// Visual style of a progress bar
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProgressBarStyle {
    /// Thin bar next to a tinted remainder
    Light,
    /// `contrast` bar inset in a `main` track
    Filled,
    /// Filled, with diagonal stripes over the bar
    #[default]
    Striped,
}

/// Progress bar view-model
#[derive(Clone, Debug, PartialEq)]
pub struct ProgressBarVm {
    /// Falls back to the theme's accent family
    pub color: Option<ComponentColor>,
    pub style: ProgressBarStyle,
    pub size: ComponentSize,
    pub corner_radius: ComponentRadius,
    pub min_value: f32,
    pub max_value: f32,
}

impl Default for ProgressBarVm {
    fn default() -> Self {
        Self {
            color: None,
            style: ProgressBarStyle::default(),
            size: ComponentSize::default(),
            corner_radius: ComponentRadius::Medium,
            min_value: 0.0,
            max_value: 100.0,
        }
    }
}

/// Rectangles of a progress bar laid out in its own coordinate space
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProgressBarLayout {
    /// Full track (filled/striped) or remaining track (light)
    pub track: Rect,
    /// The part representing progress
    pub bar: Rect,
    pub track_radius: f32,
    pub bar_radius: f32,
}

/// Concrete progress bar colors
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedProgressBarStyle {
    pub track: ColorValue,
    pub bar: ColorValue,
    pub bar_height: f32,
}

impl ProgressBarVm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(mut self, color: ComponentColor) -> Self {
        self.color = Some(color);
        self
    }

    pub fn style(mut self, style: ProgressBarStyle) -> Self {
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

    pub fn range(mut self, min: f32, max: f32) -> Self {
        self.min_value = min;
        self.max_value = max;
        self
    }

    pub fn bar_height(&self) -> f32 {
        match self.style {
            ProgressBarStyle::Light => self.size.pick(4.0, 8.0, 12.0),
            ProgressBarStyle::Filled | ProgressBarStyle::Striped => {
                self.size.pick(20.0, 32.0, 42.0)
            }
        }
    }

    pub fn progress(&self, value: f32) -> f32 {
        progress_fraction(self.min_value, self.max_value, value)
    }

    pub fn corner_radius_for(&self, height: f32) -> f32 {
        track_corner_radius(self.corner_radius, height)
    }

    /// Radius of the inset bar, following the track's shape
    pub fn inner_corner_radius_for(&self, height: f32) -> f32 {
        track_corner_radius(self.corner_radius, height - 2.0 * INNER_INSET)
    }

    /// Split a bar of `width` for `value`
    pub fn layout(&self, width: f32, value: f32) -> ProgressBarLayout {
        let width = width.max(0.0);
        let height = self.bar_height();
        let fraction = self.progress(value);

        match self.style {
            ProgressBarStyle::Light => {
                let total = (width - LIGHT_GAP).max(0.0);
                let bar_width = total * fraction;
                let radius = self.corner_radius_for(height);
                ProgressBarLayout {
                    bar: Rect::new(0.0, 0.0, bar_width, height),
                    track: Rect::new(bar_width + LIGHT_GAP, 0.0, total - bar_width, height),
                    track_radius: radius,
                    bar_radius: radius,
                }
            }
            ProgressBarStyle::Filled | ProgressBarStyle::Striped => {
                let track = Rect::new(0.0, 0.0, width, height);
                let inner = track.inset(INNER_INSET);
                ProgressBarLayout {
                    bar: Rect::new(inner.x(), inner.y(), inner.width() * fraction, inner.height()),
                    track,
                    track_radius: self.corner_radius_for(height),
                    bar_radius: self.inner_corner_radius_for(height),
                }
            }
        }
    }

    /// Stripe overlay for the striped style, drawn over the whole track in
    /// the track color so it only shows on top of the bar
    pub fn stripes(&self, track: Rect, theme: &Theme, state: &RuntimeState) -> Option<StripedFill> {
        match self.style {
            ProgressBarStyle::Striped => {
                let family = self.color.as_ref().unwrap_or(&theme.colors.accent);
                let color = resolve_color(&family.main, true, theme, state);
                Some(striped_fill(track, color.to_color()))
            }
            ProgressBarStyle::Light | ProgressBarStyle::Filled => None,
        }
    }

    pub fn resolve(&self, theme: &Theme, state: &RuntimeState) -> ResolvedProgressBarStyle {
        let family = self.color.as_ref().unwrap_or(&theme.colors.accent);
        let (track, bar) = match self.style {
            ProgressBarStyle::Light => (&family.background, &family.main),
            ProgressBarStyle::Filled | ProgressBarStyle::Striped => {
                (&family.main, &family.contrast)
            }
        };
        ResolvedProgressBarStyle {
            track: resolve_color(track, true, theme, state),
            bar: resolve_color(bar, true, theme, state),
            bar_height: self.bar_height(),
        }
    }
}
