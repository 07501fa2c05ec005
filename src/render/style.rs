//! Display styles for log tags and highlighted text.

use std::fmt;
use std::str::FromStr;

/// Names of the eight standard terminal colors, in ANSI order.
const STANDARD_COLORS: [&str; 8] = [
    "black", "red", "green", "yellow", "blue", "magenta", "cyan", "white",
];

/// A foreground color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    /// One of the eight standard colors (index 0-7).
    Standard(u8),
    /// The bright variant of a standard color (index 0-7).
    Bright(u8),
    /// An xterm-256 palette entry.
    Fixed(u8),
}

impl Color {
    fn to_console(self) -> console::Color {
        match self {
            Color::Standard(i) | Color::Bright(i) => match i {
                0 => console::Color::Black,
                1 => console::Color::Red,
                2 => console::Color::Green,
                3 => console::Color::Yellow,
                4 => console::Color::Blue,
                5 => console::Color::Magenta,
                6 => console::Color::Cyan,
                _ => console::Color::White,
            },
            Color::Fixed(n) => console::Color::Color256(n),
        }
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let lower = s.to_lowercase();

        // Palette names used by the default theme
        match lower.as_str() {
            "red3" => return Ok(Color::Fixed(160)),
            "purple" => return Ok(Color::Fixed(129)),
            _ => {}
        }

        if let Some(n) = lower
            .strip_prefix("color(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return n
                .trim()
                .parse::<u8>()
                .map(Color::Fixed)
                .map_err(|_| format!("Invalid palette index: {}", s));
        }

        let (name, bright) = match lower.strip_prefix("bright_") {
            Some(name) => (name, true),
            None => (lower.as_str(), false),
        };

        match STANDARD_COLORS.iter().position(|c| *c == name) {
            Some(i) if bright => Ok(Color::Bright(i as u8)),
            Some(i) => Ok(Color::Standard(i as u8)),
            None => Err(format!("Unknown color: {}", s)),
        }
    }
}

/// Color and weight applied to a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub color: Option<Color>,
    pub bold: bool,
    pub underline: bool,
}

impl Style {
    /// The empty style; text renders as-is.
    pub const fn plain() -> Self {
        Self {
            color: None,
            bold: false,
            underline: false,
        }
    }

    pub const fn color(color: Color) -> Self {
        Self {
            color: Some(color),
            bold: false,
            underline: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    pub fn is_plain(&self) -> bool {
        *self == Self::plain()
    }

    /// Convert into a `console` style, forcing styling on or off.
    pub fn to_console(&self, colors: bool) -> console::Style {
        let mut style = console::Style::new().force_styling(colors);

        if let Some(color) = self.color {
            style = style.fg(color.to_console());
            if let Color::Bright(_) = color {
                style = style.bright();
            }
        }
        if self.bold {
            style = style.bold();
        }
        if self.underline {
            style = style.underlined();
        }

        style
    }

    /// Apply the style to `text`, producing ANSI output when `colors` is set.
    pub fn paint(&self, text: &str, colors: bool) -> String {
        if !colors || self.is_plain() {
            return text.to_string();
        }
        self.to_console(colors).apply_to(text).to_string()
    }
}

impl FromStr for Style {
    type Err = String;

    /// Parse a space-separated style description such as `"bold bright_red"`.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut style = Style::plain();

        for word in s.split_whitespace() {
            match word.to_lowercase().as_str() {
                "default" | "none" => {}
                "bold" => style.bold = true,
                "underline" | "underlined" => style.underline = true,
                _ => {
                    if style.color.is_some() {
                        return Err(format!("More than one color in style: {}", s));
                    }
                    style.color = Some(word.parse()?);
                }
            }
        }

        Ok(style)
    }
}

/// A 24-bit color, written in config files as `"r;g;b"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Wrap `text` in a truecolor foreground escape.
    pub fn paint(&self, text: &str) -> String {
        format!("\x1b[38;2;{};{};{}m{}\x1b[0m", self.0, self.1, self.2, text)
    }
}

impl FromStr for Rgb {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(';').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(format!("Expected \"r;g;b\", got '{}'", s));
        }

        let mut values = [0u8; 3];
        for (value, part) in values.iter_mut().zip(&parts) {
            *value = part
                .parse()
                .map_err(|_| format!("Color component '{}' is not in 0-255", part))?;
        }

        Ok(Rgb(values[0], values[1], values[2]))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{};{};{}", self.0, self.1, self.2)
    }
}
