//! Typography tokens

use super::size::ComponentSize;

/// Line height as a multiple of the font size
pub const LINE_HEIGHT_FACTOR: f32 = 1.2;

/// Font weight
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontWeight {
    Light,
    #[default]
    Regular,
    Medium,
    Semibold,
    Bold,
}

impl FontWeight {
    /// CSS-style numeric weight
    pub fn value(&self) -> u16 {
        match self {
            FontWeight::Light => 300,
            FontWeight::Regular => 400,
            FontWeight::Medium => 500,
            FontWeight::Semibold => 600,
            FontWeight::Bold => 700,
        }
    }
}

/// A font reference: the platform system font or a named custom face
#[derive(Clone, Debug, PartialEq)]
pub enum Font {
    System { size: f32, weight: FontWeight },
    Custom { name: String, size: f32 },
}

impl Font {
    pub fn system(size: f32, weight: FontWeight) -> Self {
        Font::System { size, weight }
    }

    pub fn custom(name: impl Into<String>, size: f32) -> Self {
        Font::Custom {
            name: name.into(),
            size,
        }
    }

    pub fn size(&self) -> f32 {
        match self {
            Font::System { size, .. } | Font::Custom { size, .. } => *size,
        }
    }

    /// Same face at a new size
    pub fn with_size(&self, size: f32) -> Self {
        match self {
            Font::System { weight, .. } => Font::System {
                size,
                weight: *weight,
            },
            Font::Custom { name, .. } => Font::Custom {
                name: name.clone(),
                size,
            },
        }
    }

    /// Same face, size shifted by `delta` (never below 1pt)
    pub fn with_relative_size(&self, delta: f32) -> Self {
        self.with_size((self.size() + delta).max(1.0))
    }

    pub fn line_height(&self) -> f32 {
        self.size() * LINE_HEIGHT_FACTOR
    }
}

/// Fonts for the three size classes of one role
#[derive(Clone, Debug, PartialEq)]
pub struct FontSet {
    pub small: Font,
    pub medium: Font,
    pub large: Font,
}

impl FontSet {
    fn system(small: f32, medium: f32, large: f32, weight: FontWeight) -> Self {
        Self {
            small: Font::system(small, weight),
            medium: Font::system(medium, weight),
            large: Font::system(large, weight),
        }
    }

    pub fn get(&self, size: ComponentSize) -> &Font {
        match size {
            ComponentSize::Small => &self.small,
            ComponentSize::Medium => &self.medium,
            ComponentSize::Large => &self.large,
        }
    }
}

/// Typographic role; each component kind uses a fixed one
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum TypographyRole {
    Headline,
    Body,
    Button,
    Caption,
}

/// Font sets per role
#[derive(Clone, Debug, PartialEq)]
pub struct Typography {
    pub headline: FontSet,
    pub body: FontSet,
    pub button: FontSet,
    pub caption: FontSet,
}

impl Typography {
    pub fn set(&self, role: TypographyRole) -> &FontSet {
        match role {
            TypographyRole::Headline => &self.headline,
            TypographyRole::Body => &self.body,
            TypographyRole::Button => &self.button,
            TypographyRole::Caption => &self.caption,
        }
    }

    pub fn font(&self, role: TypographyRole, size: ComponentSize) -> &Font {
        self.set(role).get(size)
    }
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            headline: FontSet::system(14.0, 20.0, 24.0, FontWeight::Semibold),
            body: FontSet::system(14.0, 16.0, 18.0, FontWeight::Regular),
            button: FontSet::system(14.0, 16.0, 20.0, FontWeight::Medium),
            caption: FontSet::system(10.0, 12.0, 14.0, FontWeight::Regular),
        }
    }
}
