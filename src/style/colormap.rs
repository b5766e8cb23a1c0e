//! Continuous colormap presets for 2D histograms and heat maps.
use std::str::FromStr;

use crate::color::ColorU8;

/// A continuous colormap, sampled in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Colormap {
    #[default]
    /// Perceptually uniform viridis map (the default)
    Viridis,
    /// Cividis map, optimized for color-vision deficiency
    Cividis,
    /// Inverted monochrome reds (white to deep red)
    RedsInverted,
}

impl Colormap {
    /// Sample the colormap at `t`, clamped to [0, 1]
    pub fn sample(&self, t: f64) -> ColorU8 {
        let t = t.clamp(0.0, 1.0);
        let c = match self {
            Colormap::Viridis => colorous::VIRIDIS.eval_continuous(t),
            Colormap::Cividis => colorous::CIVIDIS.eval_continuous(t),
            Colormap::RedsInverted => colorous::REDS.eval_continuous(t),
        };
        ColorU8::from_rgb(c.r, c.g, c.b)
    }

    /// Sample the colormap at `idx` out of `count` evenly spaced steps
    pub fn sample_discrete(&self, idx: usize, count: usize) -> ColorU8 {
        assert!(count > 0 && idx < count);
        if count == 1 {
            return self.sample(0.0);
        }
        self.sample(idx as f64 / (count - 1) as f64)
    }
}

impl FromStr for Colormap {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "viridis" => Ok(Colormap::Viridis),
            "cividis" => Ok(Colormap::Cividis),
            "reds-inverted" => Ok(Colormap::RedsInverted),
            _ => Err(()),
        }
    }
}
