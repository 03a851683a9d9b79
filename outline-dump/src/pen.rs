//! Interface for receiving the commands of an outline traversal.

use crate::path::{GlyphPath, Point};

/// Interface for accepting a sequence of path commands in font units.
///
/// The outline source decides the order of the calls; implementors only
/// accumulate. Contours are implicitly closed by the next `move_to` or by
/// the end of the traversal.
pub trait OutlinePen {
    /// Emit a command to begin a new contour at `to`.
    fn move_to(&mut self, to: Point);

    /// Emit a line segment from the current point to `to`.
    fn line_to(&mut self, to: Point);

    /// Emit a quadratic bezier segment from the current point with a control
    /// point at `control` and ending at `to`.
    fn quad_to(&mut self, control: Point, to: Point);

    /// Emit a cubic bezier segment from the current point with control
    /// points at `control0` and `control1` and ending at `to`.
    fn curve_to(&mut self, control0: Point, control1: Point, to: Point);
}

/// Collects the traversal into contours.
///
/// Line and curve commands that arrive before any `move_to` violate the
/// traversal protocol. They are logged and dropped so that previously
/// collected contours stay intact.
impl OutlinePen for GlyphPath {
    fn move_to(&mut self, to: Point) {
        self.begin_contour(to);
    }

    fn line_to(&mut self, to: Point) {
        match self.current_contour() {
            Some(contour) => contour.line_to(to),
            None => log::warn!(
                "line_to ({}, {}) without an open contour, ignoring",
                to.x,
                to.y
            ),
        }
    }

    fn quad_to(&mut self, control: Point, to: Point) {
        match self.current_contour() {
            Some(contour) => contour.quad_to(control, to),
            None => log::warn!(
                "quad_to ({}, {}) without an open contour, ignoring",
                to.x,
                to.y
            ),
        }
    }

    // TrueType outlines are made of quadratic splines only, so this is never
    // called for the fonts we decompose.
    fn curve_to(&mut self, _control0: Point, _control1: Point, _to: Point) {}
}
