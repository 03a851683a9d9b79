use std::path::PathBuf;

use thiserror::Error;

/// Errors that may occur while extracting a glyph outline.
#[derive(Debug, Error)]
pub enum Error {
    #[error("could not initialize the FreeType library: {0}")]
    LibraryInit(freetype::Error),

    #[error("the font file {} could be opened but its format is unsupported", .path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("could not open or process font file {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: OpenError,
    },

    #[error("glyph not found for character '{0}' (U+{code:04X})", code = u32::from(*.0))]
    GlyphNotFound(char),

    #[error("could not load glyph for character '{ch}': {source}")]
    GlyphLoad {
        ch: char,
        #[source]
        source: freetype::Error,
    },

    #[error("glyph for character '{ch}' is not an outline (format '{format}')")]
    NotAnOutline { ch: char, format: GlyphFormat },

    #[error("could not decompose outline for character '{ch}' (FreeType error {code})")]
    Decompose { ch: char, code: i32 },
}

/// The reason a font file could not be opened.
#[derive(Debug, Error)]
pub enum OpenError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("file is empty")]
    Empty,

    #[error(transparent)]
    FreeType(#[from] freetype::Error),
}

/// FreeType glyph image format, a four byte tag such as `outl` or `bits`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct GlyphFormat(pub u32);

impl std::fmt::Display for GlyphFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for byte in self.0.to_be_bytes() {
            let ch = if byte.is_ascii_graphic() || byte == b' ' {
                byte as char
            } else {
                '?'
            };
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

/// Result type for outline extraction.
pub type Result<T> = core::result::Result<T, Error>;
