use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Display theme preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Theme {
    #[default]
    Day,
    Night,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.0, self.1, self.2)
    }
}

/// Foreground/background pair the host applies for a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub dark: Rgb,
    pub light: Rgb,
}

const INK: Rgb = Rgb(10, 10, 20);
const PAPER: Rgb = Rgb(255, 255, 255);

impl Theme {
    pub fn all() -> &'static [Theme] {
        &[Theme::Day, Theme::Night]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Theme::Day => "day",
            Theme::Night => "night",
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            Theme::Day => Palette {
                dark: INK,
                light: PAPER,
            },
            Theme::Night => Palette {
                dark: PAPER,
                light: INK,
            },
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Theme {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Theme::all()
            .iter()
            .copied()
            .find(|theme| theme.name() == name)
            .ok_or(ModelError::UnknownTheme(name))
    }
}
