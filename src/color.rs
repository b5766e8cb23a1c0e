//! RGBA color values used by themes, palettes and labels.
use std::str::FromStr;
use std::{error, fmt};

/// An 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorU8 {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

impl ColorU8 {
    /// Build an opaque color from red, green and blue components
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        ColorU8 { r, g, b, a: 255 }
    }

    /// Build a color from red, green, blue and alpha components
    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        ColorU8 { r, g, b, a }
    }

    /// Build a color from an HTML hex literal such as `b"#e69f00"`.
    /// Accepts 3, 4, 6 or 8 hex digits. Panics on a malformed literal,
    /// which makes it suitable for color table constants.
    pub const fn from_html(hex: &[u8]) -> Self {
        if hex.is_empty() || hex[0] != b'#' {
            panic!("invalid hex color");
        }
        match hex.len() {
            4 => {
                let r = hex_to_u8(hex[1]);
                let g = hex_to_u8(hex[2]);
                let b = hex_to_u8(hex[3]);
                ColorU8::from_rgb(r << 4 | r, g << 4 | g, b << 4 | b)
            }
            5 => {
                let r = hex_to_u8(hex[1]);
                let g = hex_to_u8(hex[2]);
                let b = hex_to_u8(hex[3]);
                let a = hex_to_u8(hex[4]);
                ColorU8::from_rgba(r << 4 | r, g << 4 | g, b << 4 | b, a << 4 | a)
            }
            7 => ColorU8::from_rgb(
                hex_to_u8(hex[1]) << 4 | hex_to_u8(hex[2]),
                hex_to_u8(hex[3]) << 4 | hex_to_u8(hex[4]),
                hex_to_u8(hex[5]) << 4 | hex_to_u8(hex[6]),
            ),
            9 => ColorU8::from_rgba(
                hex_to_u8(hex[1]) << 4 | hex_to_u8(hex[2]),
                hex_to_u8(hex[3]) << 4 | hex_to_u8(hex[4]),
                hex_to_u8(hex[5]) << 4 | hex_to_u8(hex[6]),
                hex_to_u8(hex[7]) << 4 | hex_to_u8(hex[8]),
            ),
            _ => panic!("invalid hex color"),
        }
    }

    /// The red component
    pub const fn red(&self) -> u8 {
        self.r
    }

    /// The green component
    pub const fn green(&self) -> u8 {
        self.g
    }

    /// The blue component
    pub const fn blue(&self) -> u8 {
        self.b
    }

    /// The alpha component
    pub const fn alpha(&self) -> u8 {
        self.a
    }

    /// RGB components as an array
    pub const fn rgb(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// RGBA components as an array
    pub const fn rgba(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Format as an HTML hex string (RGB only)
    pub fn html(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Scale the alpha channel by `opacity` (0.0 to 1.0)
    pub const fn with_opacity(self, opacity: f32) -> Self {
        assert!(0.0 <= opacity && opacity <= 1.0);
        ColorU8 {
            a: (self.a as f32 * opacity) as u8,
            ..self
        }
    }

    /// Reset the alpha channel to fully opaque
    pub const fn without_opacity(self) -> Self {
        ColorU8 { a: 255, ..self }
    }

    /// Relative luminance in [0, 1], used to classify themes as light or dark
    pub fn luminance(&self) -> f32 {
        let [r, g, b] = [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ];
        0.2126 * r + 0.7152 * g + 0.0722 * b
    }
}

const fn hex_to_u8(hex: u8) -> u8 {
    match hex {
        b'0'..=b'9' => hex - b'0',
        b'a'..=b'f' => hex - b'a' + 10,
        b'A'..=b'F' => hex - b'A' + 10,
        _ => panic!("invalid hex character"),
    }
}

/// Pure white
pub const WHITE: ColorU8 = ColorU8::from_rgb(255, 255, 255);
/// Warm off-white, easier on the eye than pure white for large backgrounds
pub const OFF_WHITE: ColorU8 = ColorU8::from_html(b"#faf9f6");
/// Pure black
pub const BLACK: ColorU8 = ColorU8::from_rgb(0, 0, 0);
/// Middle gray
pub const GRAY: ColorU8 = ColorU8::from_rgb(128, 128, 128);
/// Pure red
pub const RED: ColorU8 = ColorU8::from_rgb(255, 0, 0);
/// Pure green
pub const GREEN: ColorU8 = ColorU8::from_rgb(0, 128, 0);
/// Pure blue
pub const BLUE: ColorU8 = ColorU8::from_rgb(0, 0, 255);

const NAMED: &[(&str, ColorU8)] = &[
    ("black", BLACK),
    ("blue", BLUE),
    ("brown", ColorU8::from_html(b"#a52a2a")),
    ("cyan", ColorU8::from_html(b"#00ffff")),
    ("gray", GRAY),
    ("green", GREEN),
    ("grey", GRAY),
    ("magenta", ColorU8::from_html(b"#ff00ff")),
    ("offwhite", OFF_WHITE),
    ("orange", ColorU8::from_html(b"#ffa500")),
    ("pink", ColorU8::from_html(b"#ffc0cb")),
    ("purple", ColorU8::from_html(b"#800080")),
    ("red", RED),
    ("silver", ColorU8::from_html(b"#c0c0c0")),
    ("white", WHITE),
    ("yellow", ColorU8::from_html(b"#ffff00")),
];

fn lookup_name(name: &str) -> Option<ColorU8> {
    let name = name.to_ascii_lowercase();
    NAMED
        .binary_search_by(|(n, _)| n.cmp(&name.as_str()))
        .ok()
        .map(|idx| NAMED[idx].1)
}

/// Parse error for [`ColorU8`]
#[derive(Debug, Clone, Copy)]
pub enum ParseError {
    /// The string is not in a recognized color format
    InvalidFormat,
    /// A red, green or blue component is out of range or malformed
    InvalidComponent,
    /// The alpha component is out of range or malformed
    InvalidAlphaComponent,
    /// A hex literal has the wrong length or bad digits
    InvalidHex,
    /// The color name is not in the named-color table
    UnknownName,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidFormat => write!(f, "invalid color format"),
            ParseError::InvalidComponent => write!(f, "invalid color component"),
            ParseError::InvalidAlphaComponent => write!(f, "invalid alpha component"),
            ParseError::InvalidHex => write!(f, "invalid hex color"),
            ParseError::UnknownName => write!(f, "unknown color name"),
        }
    }
}

impl error::Error for ParseError {}

fn parse_hex_digit(c: u8) -> Result<u8, ParseError> {
    match c {
        b'0'..=b'9' => Ok(c - b'0'),
        b'a'..=b'f' => Ok(c - b'a' + 10),
        b'A'..=b'F' => Ok(c - b'A' + 10),
        _ => Err(ParseError::InvalidHex),
    }
}

fn parse_hex(raw: &[u8]) -> Result<ColorU8, ParseError> {
    // raw starts with '#', checked by the caller
    let digits = &raw[1..];
    for &d in digits {
        parse_hex_digit(d)?;
    }
    match digits.len() {
        3 | 4 | 6 | 8 => Ok(ColorU8::from_html(raw)),
        _ => Err(ParseError::InvalidHex),
    }
}

fn parse_component(s: &str) -> Result<u8, ParseError> {
    let s = s.trim();
    if let Some(pct) = s.strip_suffix('%') {
        let val: f32 = pct.trim().parse().map_err(|_| ParseError::InvalidComponent)?;
        if !(0.0..=100.0).contains(&val) {
            return Err(ParseError::InvalidComponent);
        }
        Ok(((val / 100.0) * 255.0).round() as u8)
    } else {
        let val: i32 = s.parse().map_err(|_| ParseError::InvalidComponent)?;
        if !(0..=255).contains(&val) {
            return Err(ParseError::InvalidComponent);
        }
        Ok(val as u8)
    }
}

fn parse_alpha(s: &str) -> Result<u8, ParseError> {
    let s = s.trim();
    if let Some(pct) = s.strip_suffix('%') {
        let val: f32 = pct
            .trim()
            .parse()
            .map_err(|_| ParseError::InvalidAlphaComponent)?;
        if !(0.0..=100.0).contains(&val) {
            return Err(ParseError::InvalidAlphaComponent);
        }
        return Ok(((val / 100.0) * 255.0).round() as u8);
    }
    if s.contains('.') {
        let f: f32 = s.parse().map_err(|_| ParseError::InvalidAlphaComponent)?;
        if !(0.0..=1.0).contains(&f) {
            return Err(ParseError::InvalidAlphaComponent);
        }
        return Ok((f * 255.0).round() as u8);
    }
    let val: i32 = s.parse().map_err(|_| ParseError::InvalidAlphaComponent)?;
    if !(0..=255).contains(&val) {
        return Err(ParseError::InvalidAlphaComponent);
    }
    Ok(val as u8)
}

impl FromStr for ColorU8 {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        if raw.is_empty() {
            return Err(ParseError::InvalidFormat);
        }

        if raw.starts_with('#') {
            return parse_hex(raw.as_bytes());
        }

        let lower = raw.to_ascii_lowercase();
        if let Some(inner) = lower.strip_prefix("rgb(").and_then(|r| r.strip_suffix(')')) {
            let parts: Vec<&str> = inner.split(',').collect();
            if parts.len() != 3 {
                return Err(ParseError::InvalidFormat);
            }
            return Ok(ColorU8::from_rgb(
                parse_component(parts[0])?,
                parse_component(parts[1])?,
                parse_component(parts[2])?,
            ));
        }
        if let Some(inner) = lower.strip_prefix("rgba(").and_then(|r| r.strip_suffix(')')) {
            let parts: Vec<&str> = inner.split(',').collect();
            if parts.len() != 4 {
                return Err(ParseError::InvalidFormat);
            }
            return Ok(ColorU8::from_rgba(
                parse_component(parts[0])?,
                parse_component(parts[1])?,
                parse_component(parts[2])?,
                parse_alpha(parts[3])?,
            ));
        }

        lookup_name(raw).ok_or(ParseError::UnknownName)
    }
}
