//! Style presets and the one-time style initialization.
pub mod colormap;
pub(crate) mod defaults;
pub mod palette;
pub mod sheet;
pub mod theme;

use std::path::PathBuf;

use log::info;

pub use crate::style::colormap::Colormap;
pub use crate::style::palette::Palette;
pub use crate::style::theme::Theme;

/// Overall style definition for figures
///
/// The style gathers together the theme (colors of the non-data parts of a
/// figure), the palette (discrete colors for data series), the colormap
/// (continuous colors for 2D data) and a handful of figure cosmetics that a
/// style sheet can override.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    /// Theme used for the figure
    pub theme: Theme,
    /// Palette used for series colors
    pub palette: Palette,
    /// Colormap used for 2D data
    pub colormap: Colormap,
    /// Font family for all figure text
    pub font_family: String,
    /// Default line width for series and frames, in figure units
    pub line_width: f32,
    /// Figure title font size
    pub title_size: f32,
    /// Axis title font size
    pub axis_title_size: f32,
    /// Tick label font size
    pub tick_label_size: f32,
    /// Watermark label font size
    pub watermark_size: f32,
    /// Center axis titles along their axis
    pub center_axis_titles: bool,
}

impl Style {
    /// Set the theme, returning self for chaining
    pub fn with_theme(self, theme: Theme) -> Self {
        Style { theme, ..self }
    }

    /// Set the palette, returning self for chaining
    pub fn with_palette(self, palette: Palette) -> Self {
        Style { palette, ..self }
    }

    /// Set the colormap, returning self for chaining
    pub fn with_colormap(self, colormap: Colormap) -> Self {
        Style { colormap, ..self }
    }

    /// Set the line width, returning self for chaining
    pub fn with_line_width(self, line_width: f32) -> Self {
        Style { line_width, ..self }
    }
}

impl Default for Style {
    fn default() -> Self {
        Builtin::default().to_style()
    }
}

/// Symbolic constants for the built-in styles
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Builtin {
    #[default]
    /// White background, Okabe & Ito series cycle
    Standard,
    /// Off-white background preset, otherwise like `Standard`
    OffWhite,
    /// Dark background preset
    Dark,
    /// Black and white monochrome style
    /// If you use this with multiple series, consider styling the series
    /// lines with different patterns to distinguish them
    BlackWhite,
}

impl Builtin {
    /// Generate a style from the built-in style enum
    pub fn to_style(self) -> Style {
        let (theme, palette) = match self {
            Builtin::Standard => (Theme::Light, Palette::OkabeIto),
            Builtin::OffWhite => (Theme::OffWhite, Palette::OkabeIto),
            Builtin::Dark => (Theme::Dark, Palette::TolBright),
            Builtin::BlackWhite => (Theme::Light, Palette::Black),
        };
        Style {
            theme,
            palette,
            colormap: Colormap::default(),
            font_family: defaults::FONT_FAMILY.to_string(),
            line_width: defaults::LINE_WIDTH,
            title_size: defaults::TITLE_FONT_SIZE,
            axis_title_size: defaults::AXIS_TITLE_FONT_SIZE,
            tick_label_size: defaults::TICKS_LABEL_FONT_SIZE,
            watermark_size: defaults::WATERMARK_FONT_SIZE,
            center_axis_titles: true,
        }
    }
}

/// Dash pattern for dashed lines
/// A dash pattern is a sequence of lengths that specify the lengths of
/// alternating dashes and gaps.
///
/// The lengths are relative to the line width.
/// So a pattern will scale with the line width and remain visually consistent.
#[derive(Debug, Clone, PartialEq)]
pub struct Dash(pub Vec<f32>);

impl Default for Dash {
    fn default() -> Self {
        Dash(vec![5.0, 5.0])
    }
}

/// Line pattern defines how the line is drawn
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LinePattern {
    #[default]
    /// Solid line
    Solid,
    /// Dashed line. The pattern is relative to the line width.
    Dash(Dash),
    /// Dotted line. Equivalent to Dash(1.0, 1.0)
    Dot,
}

impl From<Dash> for LinePattern {
    fn from(dash: Dash) -> Self {
        LinePattern::Dash(dash)
    }
}

impl LinePattern {
    /// An endless solid, dotted, dashed cycle.
    /// Overlaid series stay distinguishable in grayscale print when their
    /// line patterns cycle along with their colors.
    pub fn cycle() -> impl Iterator<Item = LinePattern> {
        [LinePattern::Solid, LinePattern::Dot, LinePattern::Dash(Dash::default())]
            .into_iter()
            .cycle()
    }
}

/// Where to look for the style-sheet resource during [`enable()`]
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SheetLookup {
    /// Do not load any sheet, use the base preset as-is
    None,
    #[default]
    /// Search the [`sheet::SEARCH_PATH_VAR`] directories and the current
    /// directory for a [`sheet::FILE_NAME`] file
    Search,
    /// Load the sheet from an explicit path
    Path(PathBuf),
}

/// Options for the one-time style initialization
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// The built-in preset used as the base style
    pub base: Builtin,
    /// The sheet lookup policy applied on top of the base
    pub sheet: SheetLookup,
}

/// Build the process style, once, at host-application startup.
///
/// Nothing style-related happens implicitly at load time; the host calls
/// this explicitly and owns the returned [`Style`]. With
/// [`SheetLookup::None`] the call cannot fail and only selects a preset.
/// Otherwise the sheet resource is located, parsed and applied on top of
/// the preset, and a missing or malformed sheet fails here, at startup.
pub fn enable(options: Options) -> Result<Style, sheet::Error> {
    let mut style = options.base.to_style();
    match options.sheet {
        SheetLookup::None => {}
        SheetLookup::Search => {
            let path = sheet::Sheet::find()?;
            sheet::Sheet::load(&path)?.apply(&mut style)?;
        }
        SheetLookup::Path(path) => {
            sheet::Sheet::load(&path)?.apply(&mut style)?;
        }
    }
    info!("plot style enabled");
    Ok(style)
}
