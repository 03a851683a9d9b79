//! Loading glyph outlines through FreeType.

use std::{
    borrow::Borrow,
    path::{Path, PathBuf},
    sync::Arc,
};

use ::freetype::{face::LoadFlag, ffi::FT_ULong, Face, Library};

use crate::{
    error::{Error, GlyphFormat, OpenError, Result},
    path::GlyphPath,
};

mod freetype;

/// A single face of a font file, ready for outline extraction.
pub struct FontFile {
    // Fields drop in declaration order: the face must be released before
    // the library that created it.
    face: Face<SharedFontData>,
    _library: Library,
    path: PathBuf,
}

impl FontFile {
    /// Opens the face at `face_index` in the font file at `path`.
    ///
    /// FreeType only reserves the low 16 bits of a face index for the face
    /// number, so wider indices are not representable.
    pub fn open(path: impl AsRef<Path>, face_index: u16) -> Result<Self> {
        let path = path.as_ref().to_owned();
        let library = Library::init().map_err(Error::LibraryInit)?;
        let data = SharedFontData::map(&path).map_err(|source| Error::Unreadable {
            path: path.clone(),
            source,
        })?;
        let face = match library.new_memory_face2(data, face_index as isize) {
            Ok(face) => face,
            Err(::freetype::Error::UnknownFileFormat) => {
                return Err(Error::UnsupportedFormat { path });
            }
            Err(e) => {
                return Err(Error::Unreadable {
                    path,
                    source: OpenError::FreeType(e),
                });
            }
        };
        log::debug!(
            "opened {} face {face_index}: family {:?}, {} glyphs",
            path.display(),
            face.family_name().unwrap_or_default(),
            face.num_glyphs()
        );
        Ok(Self {
            face,
            _library: library,
            path,
        })
    }

    /// Returns the path the font was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the glyph index that the character map assigns to `ch`.
    pub fn glyph_index(&mut self, ch: char) -> Result<u32> {
        let index = unsafe {
            ::freetype::freetype_sys::FT_Get_Char_Index(
                self.face.raw_mut() as _,
                u32::from(ch) as FT_ULong,
            )
        };
        // index 0 is .notdef, which FreeType uses for "not mapped"
        if index == 0 {
            return Err(Error::GlyphNotFound(ch));
        }
        Ok(index)
    }

    /// Extracts the outline of the glyph mapped to `ch` in font units.
    ///
    /// The glyph is loaded unscaled and unhinted so that the coordinates are
    /// exactly the ones stored in the font. Either the complete outline is
    /// returned or an error; a partially decomposed outline is discarded.
    pub fn outline(&mut self, ch: char) -> Result<GlyphPath> {
        let glyph_index = self.glyph_index(ch)?;
        log::debug!("character {ch:?} maps to glyph {glyph_index}");
        self.face
            .load_glyph(glyph_index, LoadFlag::NO_SCALE | LoadFlag::NO_HINTING)
            .map_err(|source| Error::GlyphLoad { ch, source })?;
        let slot = self.face.glyph().raw();
        if slot.format != ::freetype::ffi::FT_GLYPH_FORMAT_OUTLINE {
            return Err(Error::NotAnOutline {
                ch,
                format: GlyphFormat(slot.format as u32),
            });
        }
        let mut path = GlyphPath::new();
        freetype::decompose(&slot.outline, &mut path)
            .map_err(|code| Error::Decompose { ch, code })?;
        log::debug!("glyph {glyph_index} has {} contours", path.len());
        Ok(path)
    }
}

/// Memory mapped font file contents shared with FreeType.
#[derive(Clone)]
struct SharedFontData(Arc<memmap2::Mmap>);

impl SharedFontData {
    fn map(path: &Path) -> core::result::Result<Self, OpenError> {
        let file = std::fs::File::open(path)?;
        // SAFETY: the mapping is read only; we rely on the file not being
        // truncated while the process runs
        let map = unsafe { memmap2::Mmap::map(&file)? };
        if map.is_empty() {
            return Err(OpenError::Empty);
        }
        Ok(Self(Arc::new(map)))
    }
}

impl Borrow<[u8]> for SharedFontData {
    fn borrow(&self) -> &[u8] {
        self.0.as_ref()
    }
}
