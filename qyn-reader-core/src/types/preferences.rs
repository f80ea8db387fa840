//! Session-local display preferences

use crate::error::ReaderError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Smallest font size the reader can shrink to
pub const MIN_FONT_SIZE: u32 = 12;

/// Font size at the start of a session
pub const DEFAULT_FONT_SIZE: u32 = 16;

/// Amount a single increase/decrease step changes the font size by
pub const FONT_SIZE_STEP: u32 = 2;

/// Font families offered by the reader
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FontFamily {
    #[default]
    Arial,
    #[serde(rename = "Times New Roman")]
    TimesNewRoman,
    Georgia,
    #[serde(rename = "Courier New")]
    CourierNew,
}

impl FontFamily {
    pub const ALL: [FontFamily; 4] = [
        FontFamily::Arial,
        FontFamily::TimesNewRoman,
        FontFamily::Georgia,
        FontFamily::CourierNew,
    ];

    /// Display name of the family
    pub fn name(self) -> &'static str {
        match self {
            FontFamily::Arial => "Arial",
            FontFamily::TimesNewRoman => "Times New Roman",
            FontFamily::Georgia => "Georgia",
            FontFamily::CourierNew => "Courier New",
        }
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FontFamily {
    type Err = ReaderError;

    /// Accepts the display name in any case, with spaces, dashes or
    /// underscores between words ("times-new-roman", "Courier New").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();

        FontFamily::ALL
            .into_iter()
            .find(|family| {
                family
                    .name()
                    .chars()
                    .filter(|c| *c != ' ')
                    .flat_map(char::to_lowercase)
                    .eq(key.chars())
            })
            .ok_or_else(|| ReaderError::UnknownFontFamily(s.to_string()))
    }
}

/// Color theme of the reading surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Sepia,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Light, Theme::Dark, Theme::Sepia];

    pub fn name(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Sepia => "sepia",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Theme {
    type Err = ReaderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Theme::ALL
            .into_iter()
            .find(|theme| theme.name() == lower)
            .ok_or_else(|| ReaderError::UnknownTheme(s.to_string()))
    }
}

/// Font size, font family and theme.
///
/// These live for the whole session and are independent of whichever
/// chapter is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayPreferences {
    pub font_size: u32,
    pub font_family: FontFamily,
    pub theme: Theme,
}

impl Default for DisplayPreferences {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
            font_family: FontFamily::default(),
            theme: Theme::default(),
        }
    }
}

impl DisplayPreferences {
    /// Set the font size, raising anything below the floor to [`MIN_FONT_SIZE`]
    pub fn set_font_size(&mut self, size: u32) {
        self.font_size = size.max(MIN_FONT_SIZE);
    }

    pub fn increase_font_size(&mut self) {
        self.font_size = self.font_size.saturating_add(FONT_SIZE_STEP);
    }

    pub fn decrease_font_size(&mut self) {
        self.set_font_size(self.font_size.saturating_sub(FONT_SIZE_STEP));
    }

    pub fn set_font_family(&mut self, family: FontFamily) {
        self.font_family = family;
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }
}
