//! Press animation scale tokens

use crate::layout::Layout;

/// Press-down scale factors, each within `0.0..=1.0`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationScales {
    small: f32,
    medium: f32,
    large: f32,
}

impl AnimationScales {
    /// # Panics
    ///
    /// Panics if any value is outside `0.0..=1.0`.
    #[track_caller]
    pub fn new(small: f32, medium: f32, large: f32) -> Self {
        match Self::checked(small, medium, large) {
            Some(scales) => scales,
            None => panic!(
                "animation scale values must be between 0 and 1 (got {small}, {medium}, {large})"
            ),
        }
    }

    /// Non-panicking form of [`AnimationScales::new`]
    pub fn checked(small: f32, medium: f32, large: f32) -> Option<Self> {
        [small, medium, large]
            .iter()
            .all(|v| is_unit(*v))
            .then_some(Self {
                small,
                medium,
                large,
            })
    }

    pub fn small(&self) -> f32 {
        self.small
    }

    pub fn medium(&self) -> f32 {
        self.medium
    }

    pub fn large(&self) -> f32 {
        self.large
    }
}

impl Default for AnimationScales {
    fn default() -> Self {
        Self {
            small: 0.99,
            medium: 0.98,
            large: 0.95,
        }
    }
}

/// Scale applied to a pressed component
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum AnimationScale {
    /// No scaling (1.0)
    None,
    Small,
    #[default]
    Medium,
    Large,
    Custom(f32),
}

impl AnimationScale {
    /// Check a custom value up front, so a bad scale fails where it is set
    /// rather than on the first press.
    ///
    /// # Panics
    ///
    /// Panics if a custom value is outside `0.0..=1.0`.
    #[track_caller]
    pub fn validated(self) -> Self {
        if let AnimationScale::Custom(value) = self {
            assert_custom(value);
        }
        self
    }

    /// # Panics
    ///
    /// Panics if a custom value is outside `0.0..=1.0`.
    #[track_caller]
    pub fn value(&self, layout: &Layout) -> f32 {
        match self {
            AnimationScale::None => 1.0,
            AnimationScale::Small => layout.animation_scale.small(),
            AnimationScale::Medium => layout.animation_scale.medium(),
            AnimationScale::Large => layout.animation_scale.large(),
            AnimationScale::Custom(value) => {
                assert_custom(*value);
                *value
            }
        }
    }
}

#[track_caller]
fn assert_custom(value: f32) {
    assert!(
        is_unit(value),
        "animation scale value must be between 0 and 1 (got {value})"
    );
}

fn is_unit(value: f32) -> bool {
    (0.0..=1.0).contains(&value)
}
