//! Color types and hex parsing

use thiserror::Error;

/// Error produced when a hex color string cannot be parsed
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("hex color `{0}` must have 6 (RRGGBB) or 8 (RRGGBBAA) digits")]
    InvalidLength(String),

    #[error("hex color `{0}` contains non-hex characters")]
    InvalidDigit(String),
}

/// RGBA color with f32 components (0.0 to 1.0)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);
    /// Neutral gray used for unselected indicators
    pub const LIGHT_GRAY: Color = Color::rgb(2.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create from a packed `0xRRGGBB` value
    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    /// Create from 8-bit channels and a 0.0-1.0 alpha
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self::rgba(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a)
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA` (the `#` is optional)
    pub fn parse_hex(value: &str) -> Result<Self, ColorParseError> {
        let digits = value.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);

        if digits.len() != 6 && digits.len() != 8 {
            return Err(ColorParseError::InvalidLength(value.to_string()));
        }
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit(value.to_string()));
        }

        let packed = u32::from_str_radix(digits, 16)
            .map_err(|_| ColorParseError::InvalidDigit(value.to_string()))?;

        if digits.len() == 6 {
            Ok(Self::from_hex(packed))
        } else {
            let alpha = (packed & 0xFF) as f32 / 255.0;
            Ok(Self::from_hex(packed >> 8).with_alpha(alpha))
        }
    }

    /// Parse a hex literal, panicking on malformed input.
    ///
    /// Intended for colors written in source code, where a bad literal is a
    /// programming mistake. Use [`Color::parse_hex`] for data read at runtime.
    #[track_caller]
    pub fn hex(value: &str) -> Self {
        match Self::parse_hex(value) {
            Ok(color) => color,
            Err(err) => panic!("{err}"),
        }
    }

    /// Replace the alpha channel
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    /// Multiply the alpha channel by `opacity`
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.a *= opacity;
        self
    }

    /// Linear interpolation between two colors
    pub fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        Self {
            r: from.r + (to.r - from.r) * t,
            g: from.g + (to.g - from.g) * t,
            b: from.b + (to.b - from.b) * t,
            a: from.a + (to.a - from.a) * t,
        }
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Format as `#rrggbb`, or `#rrggbbaa` when translucent
    pub fn to_hex_string(&self) -> String {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        if self.a < 1.0 {
            format!(
                "#{:02x}{:02x}{:02x}{:02x}",
                channel(self.r),
                channel(self.g),
                channel(self.b),
                channel(self.a)
            )
        } else {
            format!(
                "#{:02x}{:02x}{:02x}",
                channel(self.r),
                channel(self.g),
                channel(self.b)
            )
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_six_and_eight_digit_hex() {
        assert_eq!(Color::parse_hex("#FFFFFF"), Ok(Color::WHITE));
        assert_eq!(Color::parse_hex("000000"), Ok(Color::BLACK));

        let translucent = Color::parse_hex("#FF000080").unwrap();
        assert_eq!(translucent.r, 1.0);
        assert!((translucent.a - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn rejects_malformed_hex() {
        assert_eq!(
            Color::parse_hex("#FFF"),
            Err(ColorParseError::InvalidLength("#FFF".to_string()))
        );
        assert_eq!(
            Color::parse_hex("#GG0000"),
            Err(ColorParseError::InvalidDigit("#GG0000".to_string()))
        );
        assert!(Color::parse_hex("+FFFFF").is_err());
    }

    #[test]
    #[should_panic(expected = "must have 6")]
    fn hex_literal_panics_on_bad_input() {
        let _ = Color::hex("#12345");
    }

    #[test]
    fn opacity_multiplies_alpha() {
        let c = Color::rgba(0.1, 0.2, 0.3, 0.8).with_opacity(0.5);
        assert!((c.a - 0.4).abs() < 1e-6);
        assert_eq!(Color::WHITE.with_alpha(0.25).a, 0.25);
    }

    #[test]
    fn hex_string_round_trips_opaque_colors() {
        assert_eq!(Color::hex("#0B0C0E").to_hex_string(), "#0b0c0e");
        assert_eq!(Color::WHITE.with_alpha(0.0).to_hex_string(), "#ffffff00");
    }
}
