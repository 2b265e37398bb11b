//! Component size classes

/// Size class shared by every sized component
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ComponentSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ComponentSize {
    /// Pick one of three values by size class
    pub fn pick<T>(&self, small: T, medium: T, large: T) -> T {
        match self {
            ComponentSize::Small => small,
            ComponentSize::Medium => medium,
            ComponentSize::Large => large,
        }
    }
}
