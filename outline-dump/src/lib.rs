//! Extract the outline of a single glyph in font design units.
//!
//! FreeType loads the glyph unscaled and unhinted and walks its outline;
//! each traversal command is collected into a [`GlyphPath`] through the
//! [`OutlinePen`] interface. The resulting path implements `Display`, which
//! renders one fixed width line per segment.

mod error;
mod font;
mod format;
mod path;
mod pen;

pub use error::{Error, GlyphFormat, OpenError, Result};
pub use font::FontFile;
pub use path::{Contour, GlyphPath, Point, Segment};
pub use pen::OutlinePen;
