//! Fixed width text rendering of a glyph path.

use core::fmt;

use crate::path::{Contour, GlyphPath, Point, Segment};

const HEADER: &str = "// Extracted Glyph Path:";

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({:>5}, {:>5})", self.x, self.y)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::MoveTo { to } => write!(f, "MoveTo {to}"),
            Self::LineTo { to } => write!(f, "LineTo {to}"),
            Self::QuadTo { control, to } => write!(f, "QuadTo {control} {to}"),
        }
    }
}

fn write_contour(f: &mut fmt::Formatter, ordinal: usize, contour: &Contour) -> fmt::Result {
    writeln!(f, "   Contour #{ordinal:>2}")?;
    for segment in contour.segments() {
        writeln!(f, "      {segment}")?;
    }
    Ok(())
}

/// One line per segment, grouped under a numbered header per contour.
///
/// ```text
/// // Extracted Glyph Path:
///    Contour # 1
///       MoveTo (  250,     0)
///       QuadTo (  500,     0) (  500,   250)
/// ```
impl fmt::Display for GlyphPath {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{HEADER}")?;
        for (i, contour) in self.iter().enumerate() {
            write_contour(f, i + 1, contour)?;
        }
        Ok(())
    }
}
