//! Theme definitions and implementations

use crate::color::{self, ColorU8};

/// A theme, defining the colors of the non-data parts of a figure
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Theme {
    #[default]
    /// Light theme on a pure white background
    Light,
    /// Light theme on a warm off-white background
    OffWhite,
    /// Dark theme
    Dark,
    /// A custom theme
    Custom(ThemePalette),
}

impl Theme {
    /// Get the background color of the theme
    pub const fn background(&self) -> ColorU8 {
        self.palette().background
    }

    /// Get the foreground color of the theme
    pub const fn foreground(&self) -> ColorU8 {
        self.palette().foreground
    }

    /// Get the grid line color of the theme
    pub const fn grid(&self) -> ColorU8 {
        self.palette().grid
    }

    /// Get the legend background fill color of the theme
    pub const fn legend_fill(&self) -> ColorU8 {
        self.palette().legend_fill
    }

    /// Get the legend border color of the theme
    pub const fn legend_border(&self) -> ColorU8 {
        self.palette().legend_border
    }

    /// Get the theme palette
    pub const fn palette(&self) -> &ThemePalette {
        match self {
            Theme::Light => &ThemePalette::LIGHT,
            Theme::OffWhite => &ThemePalette::OFF_WHITE,
            Theme::Dark => &ThemePalette::DARK,
            Theme::Custom(palette) => palette,
        }
    }

    /// Get a theme color by identifier
    pub const fn col(&self, col: Col) -> ColorU8 {
        match col {
            Col::Background => self.background(),
            Col::Foreground => self.foreground(),
            Col::Grid => self.grid(),
            Col::LegendFill => self.legend_fill(),
            Col::LegendBorder => self.legend_border(),
        }
    }

    /// Build a copy of the theme with one color replaced.
    /// Built-in themes are converted to custom palettes on the way.
    pub fn with_col(&self, col: Col, color: ColorU8) -> Theme {
        let mut palette = *self.palette();
        match col {
            Col::Background => palette.background = color,
            Col::Foreground => palette.foreground = color,
            Col::Grid => palette.grid = color,
            Col::LegendFill => palette.legend_fill = color,
            Col::LegendBorder => palette.legend_border = color,
        }
        Theme::Custom(palette)
    }

    /// Check whether the theme is dark or light
    /// A theme is considered dark if its background color has a luminance < 0.5
    pub fn is_dark(&self) -> bool {
        self.background().luminance() < 0.5
    }
}

/// The colors used in a theme
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemePalette {
    /// Background color
    pub background: ColorU8,
    /// Foreground color
    pub foreground: ColorU8,
    /// Grid line color
    pub grid: ColorU8,
    /// Legend background fill color
    pub legend_fill: ColorU8,
    /// Legend border color
    pub legend_border: ColorU8,
}

impl ThemePalette {
    /// The light built-in theme palette
    pub const LIGHT: Self = Self {
        background: color::WHITE,
        foreground: color::BLACK,
        grid: ColorU8::from_html(b"#808080").with_opacity(0.6),
        legend_fill: color::WHITE.with_opacity(0.5),
        legend_border: color::BLACK,
    };

    /// The off-white built-in theme palette.
    /// Same foreground as the light palette, on a background that avoids the
    /// harsh contrast of pure white in print and on projectors.
    pub const OFF_WHITE: Self = Self {
        background: color::OFF_WHITE,
        foreground: color::BLACK,
        grid: ColorU8::from_html(b"#808080").with_opacity(0.6),
        legend_fill: color::OFF_WHITE.with_opacity(0.5),
        legend_border: color::BLACK,
    };

    /// The dark built-in theme palette
    pub const DARK: Self = Self {
        background: ColorU8::from_html(b"#1e1e2e"),
        foreground: color::WHITE,
        grid: ColorU8::from_html(b"#c0c0c0").with_opacity(0.6),
        legend_fill: ColorU8::from_html(b"#1e1e2e").with_opacity(0.5),
        legend_border: color::WHITE,
    };

    /// Create a new custom theme from background and foreground colors
    /// The grid, legend fill and legend border colors are derived automatically.
    pub fn new_back_and_fore(background: ColorU8, foreground: ColorU8) -> Self {
        let grid = if background.luminance() < 0.5 {
            // Dark background
            ColorU8::from_rgb(192, 192, 192).with_opacity(0.6)
        } else {
            // Light background
            ColorU8::from_rgb(128, 128, 128).with_opacity(0.6)
        };

        Self {
            background,
            foreground,
            grid,
            legend_fill: background.with_opacity(0.5),
            legend_border: foreground,
        }
    }
}

/// Identifiers for the individual theme colors, as named in style sheets
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Col {
    /// Background color
    Background,
    /// Foreground color
    Foreground,
    /// Grid line color
    Grid,
    /// Legend background fill color
    LegendFill,
    /// Legend border color
    LegendBorder,
}

impl std::str::FromStr for Col {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "background" => Ok(Col::Background),
            "foreground" => Ok(Col::Foreground),
            "grid" => Ok(Col::Grid),
            "legend_fill" => Ok(Col::LegendFill),
            "legend_border" => Ok(Col::LegendBorder),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_darkness() {
        assert!(!Theme::Light.is_dark());
        assert!(!Theme::OffWhite.is_dark());
        assert!(Theme::Dark.is_dark());
    }

    #[test]
    fn custom_back_and_fore() {
        let palette = ThemePalette::new_back_and_fore(color::BLACK, color::WHITE);
        assert_eq!(palette.legend_border, color::WHITE);
        assert!(Theme::Custom(palette).is_dark());
    }

    #[test]
    fn with_col_overrides_one_color() {
        let theme = Theme::OffWhite.with_col(Col::Foreground, color::GRAY);
        assert_eq!(theme.foreground(), color::GRAY);
        assert_eq!(theme.background(), color::OFF_WHITE);
    }

    #[test]
    fn col_names() {
        assert_eq!("background".parse::<Col>(), Ok(Col::Background));
        assert_eq!("legend_fill".parse::<Col>(), Ok(Col::LegendFill));
        assert!("bogus".parse::<Col>().is_err());
    }
}
