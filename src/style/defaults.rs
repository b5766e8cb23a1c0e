pub const FONT_FAMILY: &str = "sans-serif";

pub const TITLE_FONT_SIZE: f32 = 16.0;
pub const AXIS_TITLE_FONT_SIZE: f32 = 14.0;
pub const TICKS_LABEL_FONT_SIZE: f32 = 12.0;
pub const WATERMARK_FONT_SIZE: f32 = 18.0;

pub const LINE_WIDTH: f32 = 2.0;

pub const RATIO_PANEL_FRACTION: f32 = 0.3;
pub const GRID_GAP: f32 = 0.04;
