//! Identified items of list-bearing components

use std::fmt::Debug;
use std::hash::Hash;

use rustc_hash::FxHashSet;
use swatch_theme::Font;

use crate::error::ComponentError;

/// One selectable entry of a radio group or segmented control
#[derive(Clone, Debug, PartialEq)]
pub struct Item<Id> {
    pub id: Id,
    pub title: String,
    /// Overrides the group font for this item only
    pub font: Option<Font>,
    pub enabled: bool,
}

impl<Id> Item<Id> {
    pub fn new(id: Id, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            font: None,
            enabled: true,
        }
    }

    pub fn font(mut self, font: Font) -> Self {
        self.font = Some(font);
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

/// Entry of a radio group
pub type RadioItem<Id> = Item<Id>;

/// Segment of a segmented control
pub type SegmentedItem<Id> = Item<Id>;

/// Reject empty lists and duplicate ids
pub(crate) fn validate_items<Id>(items: &[Item<Id>]) -> Result<(), ComponentError>
where
    Id: Eq + Hash + Debug,
{
    if items.is_empty() {
        return Err(ComponentError::EmptyItems);
    }
    let mut seen = FxHashSet::default();
    for item in items {
        if !seen.insert(&item.id) {
            return Err(ComponentError::DuplicateId(format!("{:?}", item.id)));
        }
    }
    Ok(())
}

/// Panicking form used by `set_items`; invalid lists are programming errors
#[track_caller]
pub(crate) fn assert_valid_items<Id: Eq + Hash + Debug>(items: &[Item<Id>]) {
    if let Err(err) = validate_items(items) {
        panic!("{err}");
    }
}
