//! Theme aggregate

use crate::layout::Layout;
use crate::tokens::Palette;

/// A complete theme: palette plus layout tokens.
///
/// Themes are plain values. Build a new one (or transform a copy of the
/// current one) and hand it to [`ThemeStore::replace`](crate::ThemeStore::replace).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Theme {
    pub colors: Palette,
    pub layout: Layout,
}

impl Theme {
    pub fn new(colors: Palette, layout: Layout) -> Self {
        Self { colors, layout }
    }

    /// Copy of this theme with `f` applied
    pub fn with(&self, f: impl FnOnce(&mut Theme)) -> Self {
        let mut theme = self.clone();
        f(&mut theme);
        theme
    }
}
