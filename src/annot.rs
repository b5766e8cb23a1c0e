/*!
 * Watermark and corner labels placed on a plot frame.
 *
 * Labels are positioned in axes-fraction coordinates: (0, 0) is the
 * bottom-left corner of the plot frame, (1, 1) the top-right, and values
 * outside [0, 1] land in the margins. Rendering is the host plotting
 * library's job; this module only produces the label values.
 */
use crate::color::{self, ColorU8};
use crate::style::defaults;

/// An anchor point for a [`Label`].
/// It defines which point of the label is positioned at the label coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Anchor {
    /// Anchor at the center of the label
    Center,
    #[default]
    /// Anchor at the bottom-left of the label
    BottomLeft,
    /// Anchor at the bottom-right of the label
    BottomRight,
    /// Anchor at the top-left of the label
    TopLeft,
    /// Anchor at the top-right of the label
    TopRight,
    /// Anchor at the top-center of the label
    TopCenter,
    /// Anchor at the center-right of the label
    CenterRight,
    /// Anchor at the bottom-center of the label
    BottomCenter,
    /// Anchor at the center-left of the label
    CenterLeft,
}

/// A text label placed on the plot frame in axes-fraction coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    text: String,
    x: f32,
    y: f32,
    font_size: f32,
    color: ColorU8,
    anchor: Anchor,
    angle: f32,
}

impl Label {
    /// Create a new label with the given text at axes-fraction coordinates (x, y)
    pub fn new(text: impl Into<String>, x: f32, y: f32) -> Self {
        Label {
            text: text.into(),
            x,
            y,
            font_size: defaults::WATERMARK_FONT_SIZE,
            color: color::BLACK,
            anchor: Anchor::default(),
            angle: 0.0,
        }
    }

    /// Set the position of the label, returning self for chaining
    pub fn at(self, x: f32, y: f32) -> Self {
        Label { x, y, ..self }
    }

    /// Set the font size of the label
    pub fn with_font_size(self, font_size: f32) -> Self {
        Label { font_size, ..self }
    }

    /// Set the color of the label
    pub fn with_color(self, color: ColorU8) -> Self {
        Label { color, ..self }
    }

    /// Set the anchor point of the label.
    /// By default, the bottom-left corner is used.
    pub fn with_anchor(self, anchor: Anchor) -> Self {
        Label { anchor, ..self }
    }

    /// Set the rotation angle of the label in degrees in counter-clockwise
    /// direction. The label is rotated around its anchor point.
    pub fn with_angle(self, angle: f32) -> Self {
        Label { angle, ..self }
    }

    /// The label text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The X position in axes-fraction coordinates
    pub fn x(&self) -> f32 {
        self.x
    }

    /// The Y position in axes-fraction coordinates
    pub fn y(&self) -> f32 {
        self.y
    }

    /// The font size
    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    /// The label color
    pub fn color(&self) -> ColorU8 {
        self.color
    }

    /// The anchor point
    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    /// The rotation angle in counter-clockwise degrees
    pub fn angle(&self) -> f32 {
        self.angle
    }
}

/// The standard claim-status watermarks stamped on non-final plots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Watermark {
    /// Result shown before collaboration approval
    Preliminary,
    /// Result still being worked on
    WorkInProgress,
    /// Plot made from simulated data
    Simulation,
}

impl Watermark {
    /// The watermark text
    pub const fn text(&self) -> &'static str {
        match self {
            Watermark::Preliminary => "Preliminary",
            Watermark::WorkInProgress => "Work In Progress",
            Watermark::Simulation => "Simulation",
        }
    }

    const fn color(&self) -> ColorU8 {
        match self {
            // blue marks unapproved results, gray marks simulation
            Watermark::Preliminary | Watermark::WorkInProgress => color::BLUE,
            Watermark::Simulation => color::GRAY,
        }
    }

    /// The watermark label at its standard place: inside the frame, near
    /// the top-left corner
    pub fn label(&self) -> Label {
        Label::new(self.text(), 0.05, 0.90).with_color(self.color())
    }

    /// The watermark label rotated along the right margin, for plots too
    /// crowded to carry the standard placement
    pub fn side_label(&self) -> Label {
        Label::new(self.text(), 1.05, 0.5)
            .with_color(self.color())
            .with_anchor(Anchor::Center)
            .with_angle(270.0)
    }

    /// The watermark label with the experiment name in front of the text,
    /// e.g. `branded("DUNE")` for "DUNE Preliminary"
    pub fn branded(&self, experiment: &str) -> Label {
        let text = format!("{} {}", experiment, self.text());
        Label::new(text, 0.05, 0.90).with_color(self.color())
    }
}

/// A gray label just above the top-left corner of the frame.
/// Useful for beam-mode or dataset tags that are not watermarks.
pub fn corner_label(text: impl Into<String>) -> Label {
    Label::new(text, 0.0, 1.05).with_color(color::GRAY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn watermark_defaults() {
        let label = Watermark::Preliminary.label();
        assert_eq!(label.text(), "Preliminary");
        assert_eq!((label.x(), label.y()), (0.05, 0.90));
        assert_eq!(label.color(), color::BLUE);
        assert_eq!(label.anchor(), Anchor::BottomLeft);
        assert_eq!(label.font_size(), 18.0);

        let label = Watermark::Simulation.label();
        assert_eq!(label.color(), color::GRAY);
    }

    #[test]
    fn side_label_is_rotated() {
        let label = Watermark::Simulation.side_label();
        assert_eq!(label.angle(), 270.0);
        assert!(label.x() > 1.0);
        assert_eq!(label.anchor(), Anchor::Center);
    }

    #[test]
    fn branded_prefixes_experiment() {
        let label = Watermark::WorkInProgress.branded("DUNE");
        assert_eq!(label.text(), "DUNE Work In Progress");
        assert_eq!(label.color(), color::BLUE);
    }

    #[test]
    fn corner_label_sits_above_frame() {
        let label = corner_label("Neutrino Beam");
        assert_eq!(label.text(), "Neutrino Beam");
        assert!(label.y() > 1.0);
        assert_eq!(label.color(), color::GRAY);
    }

    #[test]
    fn label_builder_chain() {
        let label = Label::new("tag", 0.5, 0.5)
            .at(0.25, 0.75)
            .with_font_size(12.0)
            .with_anchor(Anchor::TopRight)
            .with_angle(90.0);
        assert_eq!((label.x(), label.y()), (0.25, 0.75));
        assert_eq!(label.font_size(), 12.0);
        assert_eq!(label.anchor(), Anchor::TopRight);
        assert_eq!(label.angle(), 90.0);
    }
}
