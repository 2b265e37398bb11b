//! Radio group view-model and per-item style resolver

use std::fmt::Debug;
use std::hash::Hash;

use swatch_core::Color;
use swatch_theme::{
    AnimationScale, ColorValue, ComponentSize, Font, Theme, ThemedColor, TypographyRole,
};

use crate::error::ComponentError;
use crate::items::{assert_valid_items, validate_items, RadioItem};
use crate::resolve::{resolve_color, resolve_or_else, RuntimeState};

/// Radio group view-model
#[derive(Clone, Debug, PartialEq)]
pub struct RadioGroupVm<Id> {
    /// Tint of the selected circle; falls back to `primary.main`
    pub color: Option<ThemedColor>,
    /// Group font; items may override it
    pub font: Option<Font>,
    pub size: ComponentSize,
    pub animation_scale: AnimationScale,
    pub enabled: bool,
    pub selected: Option<Id>,
    items: Vec<RadioItem<Id>>,
}

impl<Id> Default for RadioGroupVm<Id> {
    fn default() -> Self {
        Self {
            color: None,
            font: None,
            size: ComponentSize::default(),
            animation_scale: AnimationScale::Medium,
            enabled: true,
            selected: None,
            items: Vec::new(),
        }
    }
}

/// Appearance of one radio item
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedRadioItemStyle {
    pub circle: ColorValue,
    /// Inner dot, present only on the selected item
    pub dot: Option<ColorValue>,
    pub text: ColorValue,
    pub font: Font,
    pub enabled: bool,
}

/// Concrete radio group appearance, items in display order
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedRadioGroupStyle {
    pub circle_size: f32,
    pub inner_circle_size: f32,
    pub line_width: f32,
    /// Scale of the pressed item
    pub pressed_scale: f32,
    pub items: Vec<ResolvedRadioItemStyle>,
}

impl<Id: Eq + Hash + Debug + Clone> RadioGroupVm<Id> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`RadioGroupVm::set_items`]
    #[track_caller]
    pub fn with_items(mut self, items: Vec<RadioItem<Id>>) -> Self {
        self.set_items(items);
        self
    }

    pub fn color(mut self, color: ThemedColor) -> Self {
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

    /// # Panics
    ///
    /// Panics if a custom scale is outside `0.0..=1.0`.
    #[track_caller]
    pub fn animation_scale(mut self, scale: AnimationScale) -> Self {
        self.animation_scale = scale.validated();
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn selected(mut self, id: Id) -> Self {
        self.selected = Some(id);
        self
    }

    pub fn items(&self) -> &[RadioItem<Id>] {
        &self.items
    }

    /// Replace the item list.
    ///
    /// # Panics
    ///
    /// Panics if `items` is empty or two items share an id.
    #[track_caller]
    pub fn set_items(&mut self, items: Vec<RadioItem<Id>>) {
        assert_valid_items(&items);
        self.items = items;
    }

    /// Replace the item list, leaving it untouched on error
    pub fn try_set_items(&mut self, items: Vec<RadioItem<Id>>) -> Result<(), ComponentError> {
        validate_items(&items)?;
        self.items = items;
        Ok(())
    }

    pub fn item(&self, id: &Id) -> Option<&RadioItem<Id>> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn circle_size(&self) -> f32 {
        self.size.pick(16.0, 20.0, 24.0)
    }

    pub fn inner_circle_size(&self) -> f32 {
        self.size.pick(10.0, 12.0, 14.0)
    }

    pub fn line_width(&self) -> f32 {
        self.size.pick(1.5, 2.0, 2.0)
    }

    /// Item font, then group font, then the theme's button font
    pub fn preferred_font(&self, item: &RadioItem<Id>, theme: &Theme) -> Font {
        resolve_or_else(item.font.clone().or_else(|| self.font.clone()), || {
            theme
                .layout
                .typography
                .font(TypographyRole::Button, self.size)
                .clone()
        })
    }

    pub fn resolve_item(
        &self,
        item: &RadioItem<Id>,
        theme: &Theme,
        state: &RuntimeState,
    ) -> ResolvedRadioItemStyle {
        let enabled = item.enabled && self.enabled;
        let is_selected = self.selected.as_ref() == Some(&item.id);
        let tint = resolve_or_else(self.color.clone(), || theme.colors.primary.main.clone());
        let unselected =
            ThemedColor::universal(ColorValue::platform("lightGray", Color::LIGHT_GRAY));

        let circle_role = if is_selected { &tint } else { &unselected };
        ResolvedRadioItemStyle {
            circle: resolve_color(circle_role, enabled, theme, state),
            dot: is_selected.then(|| resolve_color(&tint, enabled, theme, state)),
            text: resolve_color(&theme.colors.foreground, enabled, theme, state),
            font: self.preferred_font(item, theme),
            enabled,
        }
    }

    pub fn resolve(&self, theme: &Theme, state: &RuntimeState) -> ResolvedRadioGroupStyle {
        ResolvedRadioGroupStyle {
            circle_size: self.circle_size(),
            inner_circle_size: self.inner_circle_size(),
            line_width: self.line_width(),
            pressed_scale: self.animation_scale.value(&theme.layout),
            items: self
                .items
                .iter()
                .map(|item| self.resolve_item(item, theme, state))
                .collect(),
        }
    }
}
