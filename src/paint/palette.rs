use serde::{Deserialize, Serialize};

use crate::foundation::error::{SceneError, SceneResult};

/// Straight 8-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Build a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `"r, g, b"`, ready to be spliced into a CSS `rgba(...)` expression.
    pub fn triplet(self) -> String {
        format!("{}, {}, {}", self.r, self.g, self.b)
    }

    /// Channels scaled to `[0, 1]`.
    pub fn to_unit(self) -> [f64; 3] {
        [
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        ]
    }
}

/// Accent colors used to stroke and fill scene elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamedColor {
    /// `#e03131`
    Red,
    /// `#2f9e44`
    Green,
    /// `#1971c2`
    Blue,
    /// `#f08c00`
    Orange,
}

impl NamedColor {
    /// Every palette entry, in declaration order.
    pub const ALL: [NamedColor; 4] = [
        NamedColor::Red,
        NamedColor::Green,
        NamedColor::Blue,
        NamedColor::Orange,
    ];

    /// Lowercase `#rrggbb` form.
    pub fn hex(self) -> &'static str {
        match self {
            NamedColor::Red => "#e03131",
            NamedColor::Green => "#2f9e44",
            NamedColor::Blue => "#1971c2",
            NamedColor::Orange => "#f08c00",
        }
    }

    /// Channel values.
    pub fn rgb(self) -> Rgb8 {
        match self {
            NamedColor::Red => Rgb8::new(224, 49, 49),
            NamedColor::Green => Rgb8::new(47, 158, 68),
            NamedColor::Blue => Rgb8::new(25, 113, 194),
            NamedColor::Orange => Rgb8::new(240, 140, 0),
        }
    }

    /// See [`Rgb8::triplet`].
    pub fn rgb_triplet(self) -> String {
        self.rgb().triplet()
    }
}

/// Parse `#RRGGBB` (the leading `#` is optional, case-insensitive).
pub fn parse_hex(s: &str) -> SceneResult<Rgb8> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);

    fn hex_byte(pair: &str) -> SceneResult<u8> {
        u8::from_str_radix(pair, 16)
            .map_err(|_| SceneError::validation(format!("invalid hex byte \"{pair}\"")))
    }

    if s.len() != 6 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(SceneError::validation(
            "hex color must be #RRGGBB (case-insensitive)",
        ));
    }

    Ok(Rgb8::new(
        hex_byte(&s[0..2])?,
        hex_byte(&s[2..4])?,
        hex_byte(&s[4..6])?,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/paint/palette.rs"]
mod tests;
