//! An explicit model of a glyph outline in font design units.

/// A position in unscaled font design units.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default, Debug)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

/// Single drawing command of a contour.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Segment {
    /// Begin a new contour at `to`.
    MoveTo { to: Point },
    /// Draw a line from the current point to `to`.
    LineTo { to: Point },
    /// Draw a quadratic bezier from the current point with a control point
    /// at `control` and ending at `to`.
    QuadTo { control: Point, to: Point },
}

impl Segment {
    /// Returns the end point of the segment.
    pub fn end(&self) -> Point {
        match self {
            Self::MoveTo { to } | Self::LineTo { to } | Self::QuadTo { to, .. } => *to,
        }
    }
}

/// One closed loop of a glyph outline.
///
/// A contour always begins with exactly one [`Segment::MoveTo`] and every
/// following segment is a line or a quadratic curve. The contour is
/// implicitly closed.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Contour {
    segments: Vec<Segment>,
}

impl Contour {
    /// Creates a new contour beginning at `start`.
    pub fn new(start: Point) -> Self {
        Self {
            segments: vec![Segment::MoveTo { to: start }],
        }
    }

    /// Returns the point where the contour begins.
    pub fn start(&self) -> Point {
        self.segments[0].end()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns the number of segments, including the initial move.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` if the contour has no segments, which never happens
    /// for a contour built with [`Contour::new`].
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub(crate) fn line_to(&mut self, to: Point) {
        self.segments.push(Segment::LineTo { to });
    }

    pub(crate) fn quad_to(&mut self, control: Point, to: Point) {
        self.segments.push(Segment::QuadTo { control, to });
    }
}

/// The complete outline of a glyph as a sequence of contours.
///
/// Contours are kept in the order in which they were reported by the
/// outline source. A glyph without an outline (such as a space) has no
/// contours.
#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub struct GlyphPath {
    contours: Vec<Contour>,
}

impl GlyphPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contours(&self) -> &[Contour] {
        &self.contours
    }

    pub fn len(&self) -> usize {
        self.contours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contours.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Contour> {
        self.contours.iter()
    }

    pub(crate) fn begin_contour(&mut self, start: Point) {
        self.contours.push(Contour::new(start));
    }

    /// Returns the contour currently receiving segments.
    pub(crate) fn current_contour(&mut self) -> Option<&mut Contour> {
        self.contours.last_mut()
    }
}

impl<'a> IntoIterator for &'a GlyphPath {
    type Item = &'a Contour;
    type IntoIter = std::slice::Iter<'a, Contour>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
