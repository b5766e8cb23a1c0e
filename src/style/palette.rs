/*!
 * Discrete color cycles for data series.
 *
 * A palette hands out colors by index, wrapping around when a figure holds
 * more series than the cycle has entries. [`Palette::cycle()`] returns an
 * endless iterator owned by the caller, so two plots never share cursor
 * state.
 */
use std::str::FromStr;

use crate::color::ColorU8;

/// A discrete color cycle
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Palette {
    #[default]
    /// Okabe & Ito colorblind-safe cycle (the recommended default)
    OkabeIto,
    /// The common 10-color cycle used by most plotting packages
    Standard,
    /// Paul Tol's bright colorblind-safe cycle
    TolBright,
    /// Black monochrome cycle.
    /// With multiple series, distinguish them by line pattern instead.
    Black,
    /// A custom cycle. Must not be empty.
    Custom(Vec<ColorU8>),
}

impl Palette {
    /// Get the number of colors in the cycle before repeating
    pub fn len(&self) -> usize {
        self.colors().len()
    }

    /// Check whether the cycle is empty. Only possible for an empty custom cycle.
    pub fn is_empty(&self) -> bool {
        self.colors().is_empty()
    }

    /// Get a color from the cycle by index, wrapping around.
    /// Panics on an empty custom cycle.
    pub fn get(&self, idx: usize) -> ColorU8 {
        let colors = self.colors();
        colors[idx % colors.len()]
    }

    /// An endless iterator over the cycle colors
    pub fn cycle(&self) -> Cycle<'_> {
        Cycle {
            palette: self,
            next: 0,
        }
    }

    fn colors(&self) -> &[ColorU8] {
        match self {
            Palette::OkabeIto => OKABE_ITO,
            Palette::Standard => STANDARD,
            Palette::TolBright => TOL_BRIGHT,
            Palette::Black => BLACK,
            Palette::Custom(colors) => colors,
        }
    }
}

impl FromStr for Palette {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "okabe-ito" => Ok(Palette::OkabeIto),
            "standard" => Ok(Palette::Standard),
            "tol-bright" => Ok(Palette::TolBright),
            "black" => Ok(Palette::Black),
            _ => Err(()),
        }
    }
}

/// An endless iterator over a palette's colors.
/// Obtained from [`Palette::cycle()`].
#[derive(Debug, Clone, Copy)]
pub struct Cycle<'a> {
    palette: &'a Palette,
    next: usize,
}

impl Iterator for Cycle<'_> {
    type Item = ColorU8;

    fn next(&mut self) -> Option<ColorU8> {
        let color = self.palette.get(self.next);
        self.next += 1;
        Some(color)
    }
}

const OKABE_ITO: &[ColorU8] = &[
    ColorU8::from_html(b"#E69F00"), // orange
    ColorU8::from_html(b"#56B4E9"), // sky blue
    ColorU8::from_html(b"#009E73"), // bluish green
    ColorU8::from_html(b"#F0E442"), // yellow
    ColorU8::from_html(b"#0072B2"), // blue
    ColorU8::from_html(b"#D55E00"), // vermillion
    ColorU8::from_html(b"#CC79A7"), // reddish purple
];

const STANDARD: &[ColorU8] = &[
    ColorU8::from_html(b"#1f77b4"), // blue
    ColorU8::from_html(b"#ff7f0e"), // orange
    ColorU8::from_html(b"#2ca02c"), // green
    ColorU8::from_html(b"#d62728"), // red
    ColorU8::from_html(b"#9467bd"), // purple
    ColorU8::from_html(b"#8c564b"), // brown
    ColorU8::from_html(b"#e377c2"), // pink
    ColorU8::from_html(b"#7f7f7f"), // gray
    ColorU8::from_html(b"#bcbd22"), // olive
    ColorU8::from_html(b"#17becf"), // cyan
];

const TOL_BRIGHT: &[ColorU8] = &[
    ColorU8::from_html(b"#4477AA"), // blue
    ColorU8::from_html(b"#EE6677"), // red
    ColorU8::from_html(b"#228833"), // green
    ColorU8::from_html(b"#CCBB44"), // yellow
    ColorU8::from_html(b"#66CCEE"), // cyan
    ColorU8::from_html(b"#AA3377"), // purple
    ColorU8::from_html(b"#BBBBBB"), // gray
];

const BLACK: &[ColorU8] = &[ColorU8::from_html(b"#000000")];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_wraps_around() {
        let palette = Palette::OkabeIto;
        assert_eq!(palette.len(), 7);
        assert_eq!(palette.get(0), palette.get(7));
        assert_eq!(palette.get(3), ColorU8::from_html(b"#F0E442"));
    }

    #[test]
    fn cycle_is_endless_and_independent() {
        let palette = Palette::TolBright;
        let colors: Vec<ColorU8> = palette.cycle().take(15).collect();
        assert_eq!(colors.len(), 15);
        assert_eq!(colors[0], colors[7]);
        assert_eq!(colors[14], palette.get(0));

        // a second cycle starts over
        let mut other = palette.cycle();
        assert_eq!(other.next(), Some(palette.get(0)));
    }

    #[test]
    fn custom_cycle() {
        let palette = Palette::Custom(vec![crate::color::RED, crate::color::BLUE]);
        assert_eq!(palette.get(5), crate::color::BLUE);
    }

    #[test]
    fn parse_names() {
        assert_eq!("okabe-ito".parse::<Palette>(), Ok(Palette::OkabeIto));
        assert_eq!("tol-bright".parse::<Palette>(), Ok(Palette::TolBright));
        assert!("viridis".parse::<Palette>().is_err());
    }
}
