//! Center and bottom modals
//!
//! Both kinds embed a [`ModalStyle`] carrying the shared appearance; the
//! bottom modal adds its swipe behavior on top.

use swatch_core::{Color, Paddings};
use swatch_theme::{BorderWidth, ColorValue, ContainerRadius, Theme, ThemedColor};

use super::card::UNBOUNDED_HEIGHT;
use crate::resolve::{resolve_color, RuntimeState};

/// Maximum width class of a modal
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalSize {
    Small,
    #[default]
    Medium,
    Large,
    /// Takes the whole screen width
    Full,
}

impl ModalSize {
    pub fn max_width(&self) -> f32 {
        match self {
            ModalSize::Small => 300.0,
            ModalSize::Medium => 400.0,
            ModalSize::Large => 600.0,
            ModalSize::Full => 10_000.0,
        }
    }
}

/// Appearance and dismissal animation speed
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ModalTransition {
    None,
    Slow,
    Normal,
    #[default]
    Fast,
    /// Duration in seconds; negative values mean no transition
    Custom(f64),
}

impl ModalTransition {
    /// Duration in seconds
    pub fn duration(&self) -> f64 {
        match self {
            ModalTransition::None => 0.0,
            ModalTransition::Slow => 0.5,
            ModalTransition::Normal => 0.3,
            ModalTransition::Fast => 0.2,
            ModalTransition::Custom(value) => value.max(0.0),
        }
    }
}

/// What is drawn behind the modal
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverlayStyle {
    #[default]
    Dimmed,
    Blurred,
    /// Visually clear but still catches taps
    Opaque,
}

/// Resolved overlay: a fill plus an optional background blur
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedOverlay {
    pub color: ColorValue,
    pub blurred: bool,
}

impl OverlayStyle {
    pub fn resolve(&self) -> ResolvedOverlay {
        match self {
            OverlayStyle::Dimmed => ResolvedOverlay {
                color: Color::BLACK.with_alpha(0.7).into(),
                blurred: false,
            },
            OverlayStyle::Blurred => ResolvedOverlay {
                color: Color::TRANSPARENT.into(),
                blurred: true,
            },
            // Fully transparent views receive no touches on some hosts.
            OverlayStyle::Opaque => ResolvedOverlay {
                color: Color::BLACK.with_alpha(0.0001).into(),
                blurred: false,
            },
        }
    }
}

/// Appearance shared by every modal kind
#[derive(Clone, Debug, PartialEq)]
pub struct ModalStyle {
    /// Falls back to background in light mode, secondary background in dark
    pub background_color: Option<ThemedColor>,
    pub border_width: BorderWidth,
    pub closes_on_overlay_tap: bool,
    pub content_paddings: Paddings,
    /// Gap between header, body and footer
    pub content_spacing: f32,
    pub corner_radius: ContainerRadius,
    pub overlay_style: OverlayStyle,
    /// Space between the modal and the screen edges
    pub outer_paddings: Paddings,
    pub size: ModalSize,
    pub transition: ModalTransition,
}

impl Default for ModalStyle {
    fn default() -> Self {
        Self {
            background_color: None,
            border_width: BorderWidth::Small,
            closes_on_overlay_tap: true,
            content_paddings: Paddings::uniform(16.0),
            content_spacing: 16.0,
            corner_radius: ContainerRadius::Medium,
            overlay_style: OverlayStyle::default(),
            outer_paddings: Paddings::uniform(20.0),
            size: ModalSize::default(),
            transition: ModalTransition::default(),
        }
    }
}

/// Concrete modal appearance
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedModalStyle {
    pub background: ColorValue,
    pub border_color: ColorValue,
    pub border_width: f32,
    pub content_paddings: Paddings,
    pub content_spacing: f32,
    /// Token radius; clamp with [`ResolvedModalStyle::corner_radius_for`]
    pub corner_radius: f32,
    pub outer_paddings: Paddings,
    pub max_width: f32,
    pub transition_duration: f64,
    pub overlay: ResolvedOverlay,
}

impl ResolvedModalStyle {
    pub fn corner_radius_for(&self, height: f32) -> f32 {
        self.corner_radius.min(height.max(0.0) / 2.0)
    }
}

impl ModalStyle {
    pub fn preferred_background(&self, theme: &Theme) -> ThemedColor {
        match &self.background_color {
            Some(color) => color.clone(),
            None => ThemedColor::themed(
                theme.colors.background.light.clone(),
                theme.colors.secondary_background.dark.clone(),
            ),
        }
    }

    pub fn resolve(&self, theme: &Theme, state: &RuntimeState) -> ResolvedModalStyle {
        ResolvedModalStyle {
            background: resolve_color(&self.preferred_background(theme), true, theme, state),
            border_color: resolve_color(&theme.colors.divider, true, theme, state),
            border_width: self.border_width.value(&theme.layout),
            content_paddings: self.content_paddings,
            content_spacing: self.content_spacing,
            corner_radius: self.corner_radius.value(&theme.layout, UNBOUNDED_HEIGHT),
            outer_paddings: self.outer_paddings,
            max_width: self.size.max_width(),
            transition_duration: self.transition.duration(),
            overlay: self.overlay_style.resolve(),
        }
    }
}

/// Modal centered on screen
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CenterModalVm {
    pub style: ModalStyle,
}

impl CenterModalVm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn style(mut self, f: impl FnOnce(&mut ModalStyle)) -> Self {
        f(&mut self.style);
        self
    }

    pub fn resolve(&self, theme: &Theme, state: &RuntimeState) -> ResolvedModalStyle {
        self.style.resolve(theme, state)
    }
}

/// Modal anchored to the bottom edge
#[derive(Clone, Debug, PartialEq)]
pub struct BottomModalVm {
    pub style: ModalStyle,
    /// Swiping down far enough dismisses the modal
    pub hides_on_swipe: bool,
    /// The modal follows the finger while dragged
    pub is_draggable: bool,
}

impl Default for BottomModalVm {
    fn default() -> Self {
        Self {
            style: ModalStyle::default(),
            hides_on_swipe: true,
            is_draggable: true,
        }
    }
}

impl BottomModalVm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn style(mut self, f: impl FnOnce(&mut ModalStyle)) -> Self {
        f(&mut self.style);
        self
    }

    pub fn hides_on_swipe(mut self, hides: bool) -> Self {
        self.hides_on_swipe = hides;
        self
    }

    pub fn is_draggable(mut self, draggable: bool) -> Self {
        self.is_draggable = draggable;
        self
    }

    pub fn resolve(&self, theme: &Theme, state: &RuntimeState) -> ResolvedModalStyle {
        self.style.resolve(theme, state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swatch_core::ColorScheme;

    #[test]
    fn test_modal_size_widths() {
        assert_eq!(ModalSize::Small.max_width(), 300.0);
        assert_eq!(ModalSize::Medium.max_width(), 400.0);
        assert_eq!(ModalSize::Large.max_width(), 600.0);
        assert_eq!(ModalSize::Full.max_width(), 10_000.0);
    }

    #[test]
    fn test_transition_durations() {
        assert_eq!(ModalTransition::None.duration(), 0.0);
        assert_eq!(ModalTransition::Slow.duration(), 0.5);
        assert_eq!(ModalTransition::Normal.duration(), 0.3);
        assert_eq!(ModalTransition::default().duration(), 0.2);
        assert_eq!(ModalTransition::Custom(-1.0).duration(), 0.0);
        assert_eq!(ModalTransition::Custom(0.75).duration(), 0.75);
    }

    #[test]
    fn default_background_differs_per_scheme() {
        let theme = Theme::default();
        let modal = CenterModalVm::new();
        let light = modal.resolve(&theme, &RuntimeState::new(ColorScheme::Light));
        let dark = modal.resolve(&theme, &RuntimeState::new(ColorScheme::Dark));
        assert_eq!(light.background, theme.colors.background.light.clone());
        assert_eq!(dark.background, theme.colors.secondary_background.dark.clone());
    }

    #[test]
    fn bottom_modal_shares_the_base_style() {
        let theme = Theme::default();
        let bottom = BottomModalVm::new().style(|s| s.size = ModalSize::Full);
        assert!(bottom.hides_on_swipe && bottom.is_draggable);

        let style = bottom.resolve(&theme, &RuntimeState::default());
        assert_eq!(style.max_width, 10_000.0);
        assert_eq!(style.border_width, 0.5);
        assert_eq!(style.outer_paddings, Paddings::uniform(20.0));
        assert_eq!(style.corner_radius_for(24.0), 12.0);
    }

    #[test]
    fn overlay_styles() {
        assert_eq!(OverlayStyle::Dimmed.resolve().color.to_color().a, 0.7);
        assert!(OverlayStyle::Blurred.resolve().blurred);
        assert!(OverlayStyle::Opaque.resolve().color.to_color().a > 0.0);
    }
}
