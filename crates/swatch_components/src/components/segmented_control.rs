//! Segmented control view-model, segment layout and style resolver

use std::fmt::Debug;
use std::hash::Hash;

use swatch_core::Size;
use swatch_theme::{
    ColorValue, ComponentColor, ComponentRadius, ComponentSize, Font, Theme, TypographyRole,
};

use super::button::FULL_WIDTH;
use crate::error::ComponentError;
use crate::items::{assert_valid_items, validate_items, SegmentedItem};
use crate::resolve::{resolve_color, resolve_or_else, RuntimeState};

/// Segmented control view-model
#[derive(Clone, Debug, PartialEq)]
pub struct SegmentedControlVm<Id> {
    /// Tint of the selected segment; neutral surfaces when unset
    pub color: Option<ComponentColor>,
    pub corner_radius: ComponentRadius,
    pub font: Option<Font>,
    pub size: ComponentSize,
    pub enabled: bool,
    pub full_width: bool,
    /// Padding on both sides of each title; derived from the size when unset
    pub horizontal_inner_paddings: Option<f32>,
    /// Inset of the segments from the control's edge
    pub outer_paddings: f32,
    pub selected: Option<Id>,
    items: Vec<SegmentedItem<Id>>,
}

impl<Id> Default for SegmentedControlVm<Id> {
    fn default() -> Self {
        Self {
            color: None,
            corner_radius: ComponentRadius::Medium,
            font: None,
            size: ComponentSize::default(),
            enabled: true,
            full_width: false,
            horizontal_inner_paddings: None,
            outer_paddings: 4.0,
            selected: None,
            items: Vec::new(),
        }
    }
}

/// Appearance of one segment's title
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedSegmentStyle {
    pub foreground: ColorValue,
    pub font: Font,
    pub selected: bool,
    pub enabled: bool,
}

/// Concrete segmented control appearance
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedSegmentedControlStyle {
    pub background: ColorValue,
    /// Highlight behind the selected segment; `None` when nothing selectable
    /// is selected
    pub selected_segment: Option<ColorValue>,
    pub height: f32,
    pub corner_radius: f32,
    pub selected_corner_radius: f32,
    pub outer_paddings: f32,
    pub segments: Vec<ResolvedSegmentStyle>,
}

impl<Id: Eq + Hash + Debug + Clone> SegmentedControlVm<Id> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`SegmentedControlVm::set_items`]
    #[track_caller]
    pub fn with_items(mut self, items: Vec<SegmentedItem<Id>>) -> Self {
        self.set_items(items);
        self
    }

    pub fn color(mut self, color: ComponentColor) -> Self {
        self.color = Some(color);
        self
    }

    pub fn corner_radius(mut self, radius: ComponentRadius) -> Self {
        self.corner_radius = radius;
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

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn full_width(mut self, full_width: bool) -> Self {
        self.full_width = full_width;
        self
    }

    pub fn horizontal_inner_paddings(mut self, padding: f32) -> Self {
        self.horizontal_inner_paddings = Some(padding);
        self
    }

    pub fn selected(mut self, id: Id) -> Self {
        self.selected = Some(id);
        self
    }

    pub fn items(&self) -> &[SegmentedItem<Id>] {
        &self.items
    }

    /// Replace the segments.
    ///
    /// # Panics
    ///
    /// Panics if `items` is empty or two items share an id.
    #[track_caller]
    pub fn set_items(&mut self, items: Vec<SegmentedItem<Id>>) {
        assert_valid_items(&items);
        self.items = items;
    }

    pub fn try_set_items(&mut self, items: Vec<SegmentedItem<Id>>) -> Result<(), ComponentError> {
        validate_items(&items)?;
        self.items = items;
        Ok(())
    }

    pub fn item(&self, id: &Id) -> Option<&SegmentedItem<Id>> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn height(&self) -> f32 {
        self.size.pick(36.0, 44.0, 52.0)
    }

    pub fn inner_padding(&self) -> f32 {
        self.horizontal_inner_paddings
            .unwrap_or_else(|| self.size.pick(8.0, 12.0, 16.0))
    }

    pub fn preferred_font(&self, item: &SegmentedItem<Id>, theme: &Theme) -> Font {
        resolve_or_else(item.font.clone().or_else(|| self.font.clone()), || {
            theme
                .layout
                .typography
                .font(TypographyRole::Button, self.size)
                .clone()
        })
    }

    /// Width of each segment inside a container of `container_width`.
    ///
    /// Full-width controls split evenly; otherwise each segment gets a share
    /// proportional to its padded title width (`title_widths`, one per item).
    pub fn segment_widths(&self, title_widths: &[f32], container_width: f32) -> Vec<f32> {
        let count = title_widths.len();
        if count == 0 {
            return Vec::new();
        }
        let container_width = container_width.max(0.0);
        if self.full_width {
            return vec![container_width / count as f32; count];
        }

        let padded: Vec<f32> = title_widths
            .iter()
            .map(|width| width + 2.0 * self.inner_padding())
            .collect();
        let total: f32 = padded.iter().sum();
        if !(total > 0.0) {
            return vec![container_width / count as f32; count];
        }
        padded
            .iter()
            .map(|width| container_width * width / total)
            .collect()
    }

    /// Preferred control size, limited by the space the host proposes
    pub fn preferred_size(
        &self,
        title_widths: &[f32],
        parent_width: Option<f32>,
        proposed: Size,
    ) -> Size {
        let width = if self.full_width {
            parent_width.unwrap_or(FULL_WIDTH)
        } else {
            title_widths
                .iter()
                .map(|width| width + 2.0 * self.inner_padding())
                .sum::<f32>()
                + 2.0 * self.outer_paddings
        };
        Size::new(width.min(proposed.width), self.height().min(proposed.height))
    }

    fn selected_enabled_item(&self) -> Option<&SegmentedItem<Id>> {
        self.selected
            .as_ref()
            .and_then(|id| self.item(id))
            .filter(|item| item.enabled)
    }

    pub fn resolve_segment(
        &self,
        item: &SegmentedItem<Id>,
        theme: &Theme,
        state: &RuntimeState,
    ) -> ResolvedSegmentStyle {
        let enabled = item.enabled && self.enabled;
        let selected = self.selected.as_ref() == Some(&item.id);
        let role = match (&self.color, selected) {
            (Some(color), true) => &color.contrast,
            _ => &theme.colors.foreground,
        };
        ResolvedSegmentStyle {
            foreground: resolve_color(role, enabled, theme, state),
            font: self.preferred_font(item, theme),
            selected,
            enabled,
        }
    }

    pub fn resolve(&self, theme: &Theme, state: &RuntimeState) -> ResolvedSegmentedControlStyle {
        let height = self.height();
        let inner_height = height - 2.0 * self.outer_paddings;
        let selected_role = self
            .color
            .as_ref()
            .map_or(&theme.colors.background, |c| &c.main);

        ResolvedSegmentedControlStyle {
            background: resolve_color(&theme.colors.content1, self.enabled, theme, state),
            selected_segment: self
                .selected_enabled_item()
                .map(|_| resolve_color(selected_role, self.enabled, theme, state)),
            height,
            corner_radius: self.corner_radius.value(&theme.layout, height),
            selected_corner_radius: self.corner_radius.value(&theme.layout, inner_height),
            outer_paddings: self.outer_paddings,
            segments: self
                .items
                .iter()
                .map(|item| self.resolve_segment(item, theme, state))
                .collect(),
        }
    }
}
