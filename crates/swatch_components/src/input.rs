//! Keyboard behavior shared by text entry components

/// Return key label and behavior
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SubmitType {
    Done,
    Go,
    Send,
    Join,
    Route,
    Search,
    #[default]
    Return,
    Next,
    Continue,
}

/// Automatic capitalization applied while typing
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextAutocapitalization {
    Never,
    Words,
    #[default]
    Sentences,
    AllCharacters,
}

/// Keyboard layout requested from the host
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum KeyboardType {
    #[default]
    Default,
    Ascii,
    Email,
    Number,
    Decimal,
    Phone,
    Url,
}
