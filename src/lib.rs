#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![warn(missing_copy_implementations)]
/*!
 * # hepstyle
 * _publication styling for experiment figures_.
 *
 * Hepstyle keeps example and publication plots visually consistent without
 * owning any rendering: it produces style values (themes, color cycles,
 * colormaps), watermark labels, canvas-splitting rectangles and confidence
 * ellipse geometry, and any 2D plotting library draws them.
 *
 * ## Get started
 *
 * Initialize the style once at application startup. With the default
 * options, a `hep.style` sheet is searched in the directories named by the
 * `HEPSTYLE_PATH` environment variable (and the current directory) and
 * applied on top of the chosen preset; a missing sheet fails right there.
 *
 * ```
 * use hepstyle::style::{self, Builtin, Options, SheetLookup};
 * use hepstyle::annot::Watermark;
 * use hepstyle::{geom, layout};
 *
 * // Styles are explicit values, nothing is applied behind your back.
 * // `SheetLookup::None` skips the sheet resource entirely.
 * let style = style::enable(Options {
 *     base: Builtin::OffWhite,
 *     sheet: SheetLookup::None,
 * })
 * .unwrap();
 *
 * // Hand out series colors from the style's cycle.
 * let mut colors = style.palette.cycle();
 * let first = colors.next().unwrap();
 * assert_ne!(first, style.theme.background());
 *
 * // Stamp a watermark on a plot that is not approved yet.
 * let label = Watermark::Preliminary.label();
 * assert_eq!(label.text(), "Preliminary");
 *
 * // Split the canvas for a data panel with a ratio panel below.
 * let (main, ratio) = layout::ratio_panels(geom::Rect::unit());
 * assert!(main.height() > ratio.height());
 * ```
 *
 * The confidence-ellipse helper turns a covariance matrix into geometry the
 * host library can draw:
 *
 * ```
 * use hepstyle::ellipse::{Confidence, confidence_ellipse};
 * use nalgebra::Matrix2;
 *
 * let x = [0.0, 2.0];
 * let y = [0.0, 4.0];
 * let cov = Matrix2::new(0.5, -0.5, -0.5, 1.0);
 * let conf = Confidence::sigma(1.0).unwrap();
 *
 * let ellipse = confidence_ellipse(&x, &y, &cov, conf).unwrap();
 * assert_eq!((ellipse.center_x, ellipse.center_y), (1.0, 2.0));
 * ```
 */
// Hepstyle is released under the MIT License.

pub mod annot;
pub mod color;
pub mod ellipse;
pub mod geom;
pub mod layout;
pub mod style;

pub use annot::{Label, Watermark};
pub use color::ColorU8;
pub use ellipse::{Confidence, confidence_ellipse};
pub use style::{Builtin, Options, SheetLookup, Style, enable};

#[cfg(test)]
pub(crate) mod tests {
    pub trait Near {
        fn near_abs(&self, other: &Self, tol: f64) -> bool;
        fn near_rel(&self, other: &Self, err: f64) -> bool;
    }

    impl Near for f64 {
        fn near_abs(&self, other: &Self, tol: f64) -> bool {
            (self - other).abs() <= tol
        }

        fn near_rel(&self, other: &Self, err: f64) -> bool {
            let diff = (self - other).abs();
            let largest = self.abs().max(other.abs());
            diff <= largest * err
        }
    }

    macro_rules! assert_near {
        (abs, $a:expr, $b:expr, $tol:expr) => {
            assert!(
                $a.near_abs(&$b, $tol),
                "Assertion failed: Values are not close enough.\nValue 1: {:?}\nValue 2: {:?}\nTolerance: {}",
                $a,
                $b,
                $tol
            );
        };
        (rel, $a:expr, $b:expr, $err:expr) => {
            assert!(
                $a.near_rel(&$b, $err),
                "Assertion failed: Values are not close enough.\nValue 1: {:?}\nValue 2: {:?}\nRelative error: {}",
                $a,
                $b,
                $err
            );
        };
    }

    pub(crate) use assert_near;

    #[test]
    fn test_near() {
        let a = 1.0;
        let b = 1.0 + 1e-9;
        assert_near!(abs, a, b, 1e-8);
        assert!(!a.near_abs(&b, 1e-10));
        assert_near!(rel, a, b, 1e-8);
        assert!(!a.near_rel(&b, 1e-10));
    }
}
