//! Selection of one of the four encodings for a generation run.
use std::io::{self, Read, Write};

use crate::{Asset, Result, asset, header};

/// How every asset of one run is represented in the generated file.
///
/// The two flags are independent and fixed for the whole run; each of the
/// four combinations has its own [`Emitter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Strategy {
    /// Store zstd frames instead of the raw bytes.
    pub compress: bool,
    /// Borrow from static storage instead of returning an owned copy.
    pub zero_copy: bool,
}

impl Strategy {
    #[must_use]
    pub const fn new(compress: bool, zero_copy: bool) -> Self {
        Self {
            compress,
            zero_copy,
        }
    }

    /// The emitter for this combination of flags.
    #[must_use]
    pub fn emitter(self) -> &'static dyn Emitter {
        match (self.compress, self.zero_copy) {
            (true, true) => &CompressedZeroCopy,
            (true, false) => &CompressedCopy,
            (false, true) => &UncompressedZeroCopy,
            (false, false) => &UncompressedCopy,
        }
    }
}

impl Default for Strategy {
    fn default() -> Self {
        Self::new(true, false)
    }
}

/// Writes the encoding specific parts of a generated file.
pub trait Emitter {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Writes imports, `register()` and the `bindata_read` helper, if any.
    fn write_header(&self, w: &mut dyn Write) -> io::Result<()>;

    /// Writes the data literal and `<id>_bytes()` for one asset.
    fn write_asset(
        &self,
        w: &mut dyn Write,
        asset: &Asset,
        reader: &mut dyn Read,
        level: i32,
    ) -> Result<()>;
}

struct CompressedZeroCopy;
struct CompressedCopy;
struct UncompressedZeroCopy;
struct UncompressedCopy;

impl Emitter for CompressedZeroCopy {
    fn name(&self) -> &'static str {
        "compressed, zero-copy"
    }

    fn write_header(&self, w: &mut dyn Write) -> io::Result<()> {
        header::compressed_zero_copy(w)?;
        header::common(w)
    }

    fn write_asset(
        &self,
        w: &mut dyn Write,
        asset: &Asset,
        reader: &mut dyn Read,
        level: i32,
    ) -> Result<()> {
        asset::compressed_zero_copy(w, asset, reader, level)
    }
}

impl Emitter for CompressedCopy {
    fn name(&self) -> &'static str {
        "compressed, copy"
    }

    fn write_header(&self, w: &mut dyn Write) -> io::Result<()> {
        header::compressed_copy(w)?;
        header::common(w)
    }

    fn write_asset(
        &self,
        w: &mut dyn Write,
        asset: &Asset,
        reader: &mut dyn Read,
        level: i32,
    ) -> Result<()> {
        asset::compressed_copy(w, asset, reader, level)
    }
}

impl Emitter for UncompressedZeroCopy {
    fn name(&self) -> &'static str {
        "uncompressed, zero-copy"
    }

    fn write_header(&self, w: &mut dyn Write) -> io::Result<()> {
        header::uncompressed_zero_copy(w)?;
        header::common(w)
    }

    fn write_asset(
        &self,
        w: &mut dyn Write,
        asset: &Asset,
        reader: &mut dyn Read,
        _level: i32,
    ) -> Result<()> {
        asset::uncompressed_zero_copy(w, asset, reader)
    }
}

impl Emitter for UncompressedCopy {
    fn name(&self) -> &'static str {
        "uncompressed, copy"
    }

    fn write_header(&self, w: &mut dyn Write) -> io::Result<()> {
        header::uncompressed_copy(w)?;
        header::common(w)
    }

    fn write_asset(
        &self,
        w: &mut dyn Write,
        asset: &Asset,
        reader: &mut dyn Read,
        _level: i32,
    ) -> Result<()> {
        asset::uncompressed_copy(w, asset, reader)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(strategy: Strategy) -> String {
        let mut out = Vec::new();
        strategy.emitter().write_header(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn every_combination_has_its_own_emitter() {
        let names: Vec<&str> = [(true, true), (true, false), (false, true), (false, false)]
            .into_iter()
            .map(|(compress, zero_copy)| Strategy::new(compress, zero_copy).emitter().name())
            .collect();
        assert_eq!(
            names,
            [
                "compressed, zero-copy",
                "compressed, copy",
                "uncompressed, zero-copy",
                "uncompressed, copy"
            ]
        );
    }

    #[test]
    fn default_compresses_and_copies() {
        assert_eq!(Strategy::default(), Strategy::new(true, false));
    }

    #[test]
    fn headers_only_mention_their_own_helper() {
        let compressed_zero_copy = header(Strategy::new(true, true));
        assert!(compressed_zero_copy.contains("Decoder::with_buffer(data)"));
        assert!(!compressed_zero_copy.contains("Decoder::new"));

        let compressed_copy = header(Strategy::new(true, false));
        assert!(compressed_copy.contains("Decoder::new(data)"));
        assert!(!compressed_copy.contains("with_buffer"));

        let uncompressed_zero_copy = header(Strategy::new(false, true));
        assert!(uncompressed_zero_copy.contains("Ok(Cow::Borrowed(data))"));
        assert!(!uncompressed_zero_copy.contains("Decoder"));

        let uncompressed_copy = header(Strategy::new(false, false));
        assert!(!uncompressed_copy.contains("bindata_read"));
        assert!(!uncompressed_copy.contains("Decoder"));
    }

    #[test]
    fn every_header_wires_the_registry_and_metadata_type() {
        for (compress, zero_copy) in [(true, true), (true, false), (false, true), (false, false)] {
            let out = header(Strategy::new(compress, zero_copy));
            assert!(out.contains("pub fn register()"));
            assert!(out.contains("::bindata::register(Backend {"));
            assert!(out.contains("impl FileInfo for BindataFileInfo"));
            assert!(out.contains("fn is_dir(&self) -> bool {\n        false\n    }"));
        }
    }
}
