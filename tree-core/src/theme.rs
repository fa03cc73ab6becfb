//! Named color palettes for the generated tree.
//!
//! A [`ColorTheme`] is a fixed, read-only lookup table: four foliage
//! shades ordered dark to light, plus trunk, highlight, star and
//! background colors. Palettes are `'static` and shared by all
//! generation calls.

use crate::color::Color;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Classic,
    Winter,
    Autumn,
    Festive,
}

impl Theme {
    pub const ALL: [Theme; 4] = [Theme::Classic, Theme::Winter, Theme::Autumn, Theme::Festive];

    pub fn name(self) -> &'static str {
        match self {
            Theme::Classic => "Classic",
            Theme::Winter => "Winter",
            Theme::Autumn => "Autumn",
            Theme::Festive => "Festive",
        }
    }

    /// Resolves a theme by name, falling back to Classic.
    ///
    /// Unknown names are not an error: the caller always gets a usable
    /// theme back.
    pub fn from_name(name: &str) -> Theme {
        match name.trim().to_ascii_lowercase().as_str() {
            "winter" => Theme::Winter,
            "autumn" => Theme::Autumn,
            "festive" => Theme::Festive,
            _ => Theme::Classic,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorTheme {
    /// Foliage shades, dark to light. Layer indices past the end clamp
    /// to the last (lightest) entry.
    pub foliage: [Color; 4],
    pub trunk: Color,
    pub highlight: Color,
    pub star: Color,
    pub background: Color,
}

pub static CLASSIC: ColorTheme = ColorTheme {
    foliage: [
        Color::rgb(16, 59, 24),
        Color::rgb(26, 82, 34),
        Color::rgb(38, 107, 46),
        Color::rgb(56, 133, 62),
    ],
    trunk: Color::rgb(101, 67, 33),
    highlight: Color::rgb(142, 190, 110),
    star: Color::rgb(255, 215, 0),
    background: Color::rgb(240, 248, 255),
};

pub static WINTER: ColorTheme = ColorTheme {
    foliage: [
        Color::rgb(35, 66, 84),
        Color::rgb(52, 89, 110),
        Color::rgb(84, 122, 140),
        Color::rgb(128, 160, 175),
    ],
    trunk: Color::rgb(84, 66, 56),
    highlight: Color::rgb(201, 226, 235),
    star: Color::rgb(235, 245, 255),
    background: Color::rgb(223, 234, 245),
};

pub static AUTUMN: ColorTheme = ColorTheme {
    foliage: [
        Color::rgb(123, 63, 16),
        Color::rgb(160, 82, 20),
        Color::rgb(196, 112, 30),
        Color::rgb(222, 148, 58),
    ],
    trunk: Color::rgb(87, 54, 33),
    highlight: Color::rgb(240, 190, 100),
    star: Color::rgb(255, 200, 50),
    background: Color::rgb(250, 240, 225),
};

pub static FESTIVE: ColorTheme = ColorTheme {
    foliage: [
        Color::rgb(10, 60, 30),
        Color::rgb(20, 90, 45),
        Color::rgb(35, 120, 60),
        Color::rgb(60, 150, 80),
    ],
    trunk: Color::rgb(92, 58, 30),
    highlight: Color::rgb(255, 92, 92),
    star: Color::rgb(255, 223, 70),
    background: Color::rgb(25, 30, 45),
};

/// Returns the palette for a theme.
pub fn palette(theme: Theme) -> &'static ColorTheme {
    match theme {
        Theme::Classic => &CLASSIC,
        Theme::Winter => &WINTER,
        Theme::Autumn => &AUTUMN,
        Theme::Festive => &FESTIVE,
    }
}

/// Total lookup by name with a Classic fallback.
pub fn theme_for(name: &str) -> &'static ColorTheme {
    palette(Theme::from_name(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_is_case_insensitive() {
        assert_eq!(Theme::from_name("winter"), Theme::Winter);
        assert_eq!(Theme::from_name("WINTER"), Theme::Winter);
        assert_eq!(Theme::from_name("  Festive "), Theme::Festive);
        assert_eq!(Theme::from_name("autumn"), Theme::Autumn);
    }

    #[test]
    fn unknown_names_fall_back_to_classic() {
        assert_eq!(Theme::from_name("neon"), Theme::Classic);
        assert_eq!(Theme::from_name(""), Theme::Classic);
        assert_eq!(theme_for("no-such-theme"), &CLASSIC);
    }

    #[test]
    fn every_palette_orders_foliage_dark_to_light() {
        for theme in Theme::ALL {
            let p = palette(theme);
            let luma = |c: Color| c.r as u32 + c.g as u32 + c.b as u32;
            for pair in p.foliage.windows(2) {
                assert!(
                    luma(pair[0]) < luma(pair[1]),
                    "{:?} foliage not dark-to-light",
                    theme
                );
            }
        }
    }
}
