//! Color types for rich-text components.
//!
//! Supports the sixteen classic named colors plus arbitrary RGB values.

use phf::phf_map;

use crate::error::ColorParseError;

/// The sixteen built-in named colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NamedColor {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
}

/// Canonical name -> color table. Also admits the `grey` spellings.
static NAMED_COLORS: phf::Map<&'static str, NamedColor> = phf_map! {
    "black" => NamedColor::Black,
    "dark_blue" => NamedColor::DarkBlue,
    "dark_green" => NamedColor::DarkGreen,
    "dark_aqua" => NamedColor::DarkAqua,
    "dark_red" => NamedColor::DarkRed,
    "dark_purple" => NamedColor::DarkPurple,
    "gold" => NamedColor::Gold,
    "gray" => NamedColor::Gray,
    "grey" => NamedColor::Gray,
    "dark_gray" => NamedColor::DarkGray,
    "dark_grey" => NamedColor::DarkGray,
    "blue" => NamedColor::Blue,
    "green" => NamedColor::Green,
    "aqua" => NamedColor::Aqua,
    "red" => NamedColor::Red,
    "light_purple" => NamedColor::LightPurple,
    "yellow" => NamedColor::Yellow,
    "white" => NamedColor::White,
};

impl NamedColor {
    /// Look up a named color by its lower-case name.
    pub fn by_name(name: &str) -> Option<Self> {
        NAMED_COLORS.get(name).copied()
    }

    /// The canonical name of this color.
    pub fn name(&self) -> &'static str {
        match self {
            NamedColor::Black => "black",
            NamedColor::DarkBlue => "dark_blue",
            NamedColor::DarkGreen => "dark_green",
            NamedColor::DarkAqua => "dark_aqua",
            NamedColor::DarkRed => "dark_red",
            NamedColor::DarkPurple => "dark_purple",
            NamedColor::Gold => "gold",
            NamedColor::Gray => "gray",
            NamedColor::DarkGray => "dark_gray",
            NamedColor::Blue => "blue",
            NamedColor::Green => "green",
            NamedColor::Aqua => "aqua",
            NamedColor::Red => "red",
            NamedColor::LightPurple => "light_purple",
            NamedColor::Yellow => "yellow",
            NamedColor::White => "white",
        }
    }

    /// The RGB components of this color.
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            NamedColor::Black => (0x00, 0x00, 0x00),
            NamedColor::DarkBlue => (0x00, 0x00, 0xaa),
            NamedColor::DarkGreen => (0x00, 0xaa, 0x00),
            NamedColor::DarkAqua => (0x00, 0xaa, 0xaa),
            NamedColor::DarkRed => (0xaa, 0x00, 0x00),
            NamedColor::DarkPurple => (0xaa, 0x00, 0xaa),
            NamedColor::Gold => (0xff, 0xaa, 0x00),
            NamedColor::Gray => (0xaa, 0xaa, 0xaa),
            NamedColor::DarkGray => (0x55, 0x55, 0x55),
            NamedColor::Blue => (0x55, 0x55, 0xff),
            NamedColor::Green => (0x55, 0xff, 0x55),
            NamedColor::Aqua => (0x55, 0xff, 0xff),
            NamedColor::Red => (0xff, 0x55, 0x55),
            NamedColor::LightPurple => (0xff, 0x55, 0xff),
            NamedColor::Yellow => (0xff, 0xff, 0x55),
            NamedColor::White => (0xff, 0xff, 0xff),
        }
    }
}

/// A color specification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    /// One of the sixteen named colors.
    Named(NamedColor),
    /// RGB color components.
    Rgb(u8, u8, u8),
}

impl Color {
    /// Parse a color from a string.
    ///
    /// Supports:
    /// - Named colors: `red`, `dark_aqua`, `grey`, ...
    /// - Hex colors: `#rrggbb`
    ///
    /// # Examples
    ///
    /// ```
    /// use richtext::Color;
    ///
    /// let red = Color::parse("red").unwrap();
    /// let hex = Color::parse("#ff5733").unwrap();
    /// assert_eq!(hex, Color::Rgb(255, 87, 51));
    /// ```
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        let input = input.trim();

        if let Some(hex) = input.strip_prefix('#') {
            return Self::parse_hex(hex);
        }

        let lower = input.to_ascii_lowercase();
        NamedColor::by_name(&lower)
            .map(Color::Named)
            .ok_or_else(|| ColorParseError::UnknownName(input.to_string()))
    }

    /// Parse a six-digit hex color (without the `#` prefix).
    fn parse_hex(hex: &str) -> Result<Self, ColorParseError> {
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidHex(format!("#{}", hex)));
        }

        let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| ColorParseError::InvalidHex(format!("#{}", hex)))?;
        let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| ColorParseError::InvalidHex(format!("#{}", hex)))?;
        let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| ColorParseError::InvalidHex(format!("#{}", hex)))?;
        Ok(Color::Rgb(r, g, b))
    }

    /// The RGB components of this color.
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Color::Named(named) => named.rgb(),
            Color::Rgb(r, g, b) => (*r, *g, *b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_named_color() {
        assert_eq!(Color::parse("red").unwrap(), Color::Named(NamedColor::Red));
        assert_eq!(
            Color::parse("dark_aqua").unwrap(),
            Color::Named(NamedColor::DarkAqua)
        );
    }

    #[test]
    fn parse_named_color_is_case_insensitive() {
        assert_eq!(Color::parse("RED").unwrap(), Color::Named(NamedColor::Red));
    }

    #[test]
    fn parse_grey_aliases() {
        assert_eq!(Color::parse("grey").unwrap(), Color::parse("gray").unwrap());
        assert_eq!(
            Color::parse("dark_grey").unwrap(),
            Color::parse("dark_gray").unwrap()
        );
    }

    #[test]
    fn parse_hex_color() {
        assert_eq!(Color::parse("#ff5733").unwrap(), Color::Rgb(255, 87, 51));
        assert_eq!(Color::parse("#000000").unwrap(), Color::Rgb(0, 0, 0));
    }

    #[test]
    fn parse_invalid_hex() {
        assert!(Color::parse("#fff").is_err());
        assert!(Color::parse("#zzzzzz").is_err());
        assert!(Color::parse("#ff573").is_err());
    }

    #[test]
    fn parse_unknown_name() {
        assert!(matches!(
            Color::parse("crimson"),
            Err(ColorParseError::UnknownName(_))
        ));
    }

    #[test]
    fn named_rgb_values() {
        assert_eq!(Color::Named(NamedColor::Red).rgb(), (0xff, 0x55, 0x55));
        assert_eq!(Color::Named(NamedColor::Gold).rgb(), (0xff, 0xaa, 0x00));
    }
}
