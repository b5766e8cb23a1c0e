/*!
 * Canvas-splitting helpers.
 *
 * All helpers work on [`Rect`] values in relative canvas coordinates
 * (the whole canvas being [`Rect::unit()`]), so the host plotting
 * library can map the resulting panels onto pads, subplots or viewports.
 */
use crate::geom::Rect;
use crate::style::defaults;

/// Split a canvas into a main panel and a bottom panel.
///
/// `bottom_frac` is the fraction of the canvas height given to the bottom
/// panel and must lie strictly between 0 and 1. The panels share an edge;
/// any spacing between the plot frames is left to the host library's
/// padding.
///
/// Panics on a fraction outside (0, 1).
pub fn split_canvas(canvas: Rect, bottom_frac: f32) -> (Rect, Rect) {
    assert!(
        bottom_frac > 0.0 && bottom_frac < 1.0,
        "bottom_frac must be in (0, 1)"
    );
    let split = canvas.bottom() - bottom_frac * canvas.height();
    (canvas.with_bottom(split), canvas.with_top(split))
}

/// Split a canvas into the usual data panel over a smaller ratio panel,
/// with the ratio panel taking 30% of the height
pub fn ratio_panels(canvas: Rect) -> (Rect, Rect) {
    split_canvas(canvas, defaults::RATIO_PANEL_FRACTION)
}

/// Split a canvas into a row-major grid of `rows` x `cols` cells with an
/// even gap between neighboring cells.
///
/// Panics if `rows` or `cols` is zero, or if the gaps leave no room for
/// the cells.
pub fn grid(canvas: Rect, rows: usize, cols: usize, gap: f32) -> Vec<Rect> {
    assert!(rows > 0 && cols > 0, "grid needs at least one row and column");
    assert!(gap >= 0.0, "gap must not be negative");

    let cell_w = (canvas.width() - gap * (cols - 1) as f32) / cols as f32;
    let cell_h = (canvas.height() - gap * (rows - 1) as f32) / rows as f32;
    assert!(cell_w > 0.0 && cell_h > 0.0, "gaps leave no room for cells");

    let mut cells = Vec::with_capacity(rows * cols);
    for row in 0..rows {
        for col in 0..cols {
            let x = canvas.x() + col as f32 * (cell_w + gap);
            let y = canvas.y() + row as f32 * (cell_h + gap);
            cells.push(Rect::from_xywh(x, y, cell_w, cell_h));
        }
    }
    cells
}

/// Like [`grid`], with the default gap
pub fn subplots(canvas: Rect, rows: usize, cols: usize) -> Vec<Rect> {
    grid(canvas, rows, cols, defaults::GRID_GAP)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{Near, assert_near};

    #[test]
    fn split_fractions() {
        let (main, ratio) = split_canvas(Rect::unit(), 0.25);
        assert_eq!(main, Rect::from_xywh(0.0, 0.0, 1.0, 0.75));
        assert_eq!(ratio, Rect::from_xywh(0.0, 0.75, 1.0, 0.25));
    }

    #[test]
    fn split_panels_are_adjacent() {
        let canvas = Rect::from_xywh(0.1, 0.2, 0.8, 0.6);
        let (main, ratio) = ratio_panels(canvas);
        assert_near!(abs, main.bottom() as f64, ratio.top() as f64, 1e-6);
        assert_near!(
            abs,
            (main.height() + ratio.height()) as f64,
            canvas.height() as f64,
            1e-6
        );
        assert_near!(abs, ratio.height() as f64, 0.18, 1e-6);
    }

    #[test]
    #[should_panic]
    fn split_rejects_full_fraction() {
        split_canvas(Rect::unit(), 1.0);
    }

    #[test]
    fn grid_cells() {
        let cells = grid(Rect::unit(), 2, 3, 0.0);
        assert_eq!(cells.len(), 6);
        // row-major: second cell is in the first row
        assert_eq!(cells[1].y(), 0.0);
        assert_near!(abs, cells[1].x() as f64, 1.0 / 3.0, 1e-6);
        // last cell reaches the canvas corner
        assert_near!(abs, cells[5].right() as f64, 1.0, 1e-6);
        assert_near!(abs, cells[5].bottom() as f64, 1.0, 1e-6);
    }

    #[test]
    fn grid_with_gaps() {
        let cells = grid(Rect::unit(), 1, 2, 0.1);
        assert_near!(abs, cells[0].width() as f64, 0.45, 1e-6);
        assert_near!(abs, cells[1].left() as f64, 0.55, 1e-6);
    }
}
