//! Colour themes and center icons

use std::fmt;
use std::str::FromStr;

use image::Rgba;

use crate::io::error::{BingoError, Result, invalid_parameter};

/// Colours used to paint a card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Preset name
    pub name: &'static str,
    /// Frame and header band
    pub primary: Rgba<u8>,
    /// Title text
    pub header_text: Rgba<u8>,
    /// Cell background
    pub cell_background: Rgba<u8>,
    /// Cell text and icons
    pub cell_text: Rgba<u8>,
    /// Cell outlines
    pub border: Rgba<u8>,
}

const fn rgb(r: u8, g: u8, b: u8) -> Rgba<u8> {
    Rgba([r, g, b, 0xff])
}

/// Built-in presets, first one is the default
pub const PRESETS: [Theme; 5] = [
    Theme {
        name: "indigo",
        primary: rgb(0x4f, 0x46, 0xe5),
        header_text: rgb(0xff, 0xff, 0xff),
        cell_background: rgb(0xff, 0xff, 0xff),
        cell_text: rgb(0x33, 0x41, 0x55),
        border: rgb(0x4f, 0x46, 0xe5),
    },
    Theme {
        name: "baby-pink",
        primary: rgb(0xec, 0x48, 0x99),
        header_text: rgb(0xff, 0xff, 0xff),
        cell_background: rgb(0xff, 0xf1, 0xf2),
        cell_text: rgb(0x83, 0x18, 0x43),
        border: rgb(0xfb, 0x71, 0x85),
    },
    Theme {
        name: "emerald",
        primary: rgb(0x05, 0x96, 0x69),
        header_text: rgb(0xff, 0xff, 0xff),
        cell_background: rgb(0xf0, 0xfd, 0xf4),
        cell_text: rgb(0x06, 0x4e, 0x3b),
        border: rgb(0x10, 0xb9, 0x81),
    },
    Theme {
        name: "sunset",
        primary: rgb(0xf5, 0x9e, 0x0b),
        header_text: rgb(0xff, 0xff, 0xff),
        cell_background: rgb(0xff, 0xfb, 0xeb),
        cell_text: rgb(0x78, 0x35, 0x0f),
        border: rgb(0xfb, 0xbf, 0x24),
    },
    Theme {
        name: "dark-mode",
        primary: rgb(0x1e, 0x29, 0x3b),
        header_text: rgb(0xf8, 0xfa, 0xfc),
        cell_background: rgb(0x33, 0x41, 0x55),
        cell_text: rgb(0xf8, 0xfa, 0xfc),
        border: rgb(0x47, 0x55, 0x69),
    },
];

/// Grid gutter colour shared by every theme
pub const GUTTER: Rgba<u8> = rgb(0xe2, 0xe8, 0xf0);
/// Page background for print surfaces
pub const PAPER: Rgba<u8> = rgb(0xff, 0xff, 0xff);
/// Ink for cut lines and captions on print surfaces
pub const INK: Rgba<u8> = rgb(0x0f, 0x17, 0x2a);
/// Muted ink for secondary captions
pub const MUTED_INK: Rgba<u8> = rgb(0x94, 0xa3, 0xb8);

impl Theme {
    /// Look a preset up by name (case-insensitive, spaces and dashes equivalent)
    ///
    /// # Errors
    ///
    /// Returns an error if no preset has that name
    pub fn by_name(name: &str) -> Result<Self> {
        let wanted = name.trim().to_ascii_lowercase().replace(' ', "-");
        PRESETS
            .iter()
            .find(|theme| theme.name == wanted)
            .copied()
            .ok_or_else(|| {
                let known = PRESETS.map(|theme| theme.name).join(", ");
                invalid_parameter("theme", &name, &format!("known themes: {known}"))
            })
    }

    /// Copy of this theme with a different primary colour
    #[must_use]
    pub const fn with_primary(mut self, primary: Rgba<u8>) -> Self {
        self.primary = primary;
        self
    }

    /// Copy of this theme with a different cell background
    #[must_use]
    pub const fn with_cell_background(mut self, cell_background: Rgba<u8>) -> Self {
        self.cell_background = cell_background;
        self
    }
}

impl Default for Theme {
    fn default() -> Self {
        PRESETS[0]
    }
}

/// Parse a `#rrggbb` (or `rrggbb`) colour
///
/// # Errors
///
/// Returns an error if the text is not six hexadecimal digits
pub fn parse_hex_color(text: &str) -> Result<Rgba<u8>> {
    let digits = text.trim().trim_start_matches('#');
    let invalid = || invalid_parameter("color", &text, &"expected #rrggbb");
    if digits.len() != 6 || !digits.is_ascii() {
        return Err(invalid());
    }
    let channel = |range: std::ops::Range<usize>| {
        digits
            .get(range)
            .and_then(|hex| u8::from_str_radix(hex, 16).ok())
            .ok_or_else(invalid)
    };
    Ok(rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Decoration drawn on the free-space cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CenterIcon {
    /// Label only
    #[default]
    None,
    /// Five-pointed star
    Star,
    /// Heart
    Heart,
    /// Trophy cup
    Trophy,
}

impl FromStr for CenterIcon {
    type Err = BingoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "star" => Ok(Self::Star),
            "heart" => Ok(Self::Heart),
            "trophy" => Ok(Self::Trophy),
            other => Err(invalid_parameter(
                "icon",
                &other,
                &"expected none, star, heart or trophy",
            )),
        }
    }
}

impl fmt::Display for CenterIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Star => write!(f, "star"),
            Self::Heart => write!(f, "heart"),
            Self::Trophy => write!(f, "trophy"),
        }
    }
}
