//! The prologue written once at the top of every generated file.
use std::io::{self, Write};

const IMPORTS_COMPRESSED: &str = "\
use std::borrow::Cow;
use std::io::Read;
use std::time::SystemTime;

use ::bindata::__private::zstd::stream::read::Decoder;
use ::bindata::{Backend, FileInfo, ReadError};
";

const IMPORTS_UNCOMPRESSED: &str = "\
use std::borrow::Cow;
use std::time::SystemTime;

use ::bindata::{Backend, FileInfo, ReadError};
";

const REGISTER: &str = "
/// Installs this module's assets into the `bindata` registry.
///
/// Call once during startup, before using `bindata::asset` and friends.
pub fn register() {
    ::bindata::register(Backend {
        asset,
        asset_dir,
        asset_names,
    });
}
";

/// Writes the header for compressed data borrowed straight from static storage.
pub(crate) fn compressed_zero_copy(w: &mut dyn Write) -> io::Result<()> {
    w.write_all(IMPORTS_COMPRESSED.as_bytes())?;
    w.write_all(REGISTER.as_bytes())?;
    w.write_all(
        br#"
fn bindata_read(data: &'static [u8], name: &str) -> Result<Cow<'static, [u8]>, ReadError> {
    let mut decoder = Decoder::with_buffer(data).map_err(|err| ReadError::decode(name, err))?;
    let mut buf = Vec::new();
    decoder
        .read_to_end(&mut buf)
        .map_err(|err| ReadError::decode(name, err))?;
    Ok(Cow::Owned(buf))
}
"#,
    )
}

/// Writes the header for compressed data read through a buffered copy.
pub(crate) fn compressed_copy(w: &mut dyn Write) -> io::Result<()> {
    w.write_all(IMPORTS_COMPRESSED.as_bytes())?;
    w.write_all(REGISTER.as_bytes())?;
    w.write_all(
        br#"
fn bindata_read(data: &[u8], name: &str) -> Result<Cow<'static, [u8]>, ReadError> {
    let mut decoder = Decoder::new(data).map_err(|err| ReadError::decode(name, err))?;
    let mut buf = Vec::new();
    decoder
        .read_to_end(&mut buf)
        .map_err(|err| ReadError::decode(name, err))?;
    Ok(Cow::Owned(buf))
}
"#,
    )
}

/// Writes the header for raw data handed out as a borrowed view.
pub(crate) fn uncompressed_zero_copy(w: &mut dyn Write) -> io::Result<()> {
    w.write_all(IMPORTS_UNCOMPRESSED.as_bytes())?;
    w.write_all(REGISTER.as_bytes())?;
    w.write_all(
        br#"
fn bindata_read(data: &'static [u8], _name: &str) -> Result<Cow<'static, [u8]>, ReadError> {
    Ok(Cow::Borrowed(data))
}
"#,
    )
}

/// Writes the header for raw data copied on every read. No helper is needed.
pub(crate) fn uncompressed_copy(w: &mut dyn Write) -> io::Result<()> {
    w.write_all(IMPORTS_UNCOMPRESSED.as_bytes())?;
    w.write_all(REGISTER.as_bytes())
}

/// Writes the asset handle and metadata record shared by every encoding.
pub(crate) fn common(w: &mut dyn Write) -> io::Result<()> {
    w.write_all(
        br#"
/// An embedded file together with the metadata it had when it was embedded.
#[derive(Debug, Clone)]
pub struct BindataAsset {
    bytes: Cow<'static, [u8]>,
    info: BindataFileInfo,
}

impl BindataAsset {
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn info(&self) -> &BindataFileInfo {
        &self.info
    }

    pub fn into_bytes(self) -> Cow<'static, [u8]> {
        self.bytes
    }
}

/// File metadata captured at generation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BindataFileInfo {
    name: &'static str,
    size: u64,
    mode: u32,
    mod_time: i64,
}

impl FileInfo for BindataFileInfo {
    fn name(&self) -> &str {
        self.name
    }

    fn size(&self) -> u64 {
        self.size
    }

    fn mode(&self) -> u32 {
        self.mode
    }

    fn mod_time(&self) -> SystemTime {
        ::bindata::unix_time(self.mod_time)
    }

    fn is_dir(&self) -> bool {
        false
    }

    fn sys(&self) -> Option<&dyn ::std::any::Any> {
        None
    }
}

"#,
    )
}
