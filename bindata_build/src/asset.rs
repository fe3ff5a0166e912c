//! Per-asset output: the data literal, its decode function and its constructor.
use std::{
    fs,
    io::{self, Read, Write},
    time::{SystemTime, UNIX_EPOCH},
};

use crate::{
    Asset, Error, Result,
    literal::{self, ByteArrayWriter, ByteStrWriter},
};

/// Compressed data in a `b"..."` literal, decoded straight from static storage.
pub(crate) fn compressed_zero_copy(
    w: &mut dyn Write,
    asset: &Asset,
    reader: &mut dyn Read,
    level: i32,
) -> Result<()> {
    open_static(w, asset)?;
    w.write_all(b"b\"")?;
    compress(ByteStrWriter::new(&mut *w), asset, reader, level)?;
    w.write_all(b"\";\n")?;
    write_read_fn(w, asset)?;
    Ok(())
}

/// Compressed data in a byte array literal.
pub(crate) fn compressed_copy(
    w: &mut dyn Write,
    asset: &Asset,
    reader: &mut dyn Read,
    level: i32,
) -> Result<()> {
    open_static(w, asset)?;
    w.write_all(b"&[")?;
    compress(ByteArrayWriter::new(&mut *w), asset, reader, level)?;
    w.write_all(b"\n];\n")?;
    write_read_fn(w, asset)?;
    Ok(())
}

/// Raw data in a `b"..."` literal, handed out as a borrowed view.
pub(crate) fn uncompressed_zero_copy(
    w: &mut dyn Write,
    asset: &Asset,
    reader: &mut dyn Read,
) -> Result<()> {
    open_static(w, asset)?;
    w.write_all(b"b\"")?;
    io::copy(reader, &mut ByteStrWriter::new(&mut *w))?;
    w.write_all(b"\";\n")?;
    write_read_fn(w, asset)?;
    Ok(())
}

/// Raw data copied into an owned buffer on every read.
///
/// UTF-8 content is written as a raw string so the generated file stays
/// readable; anything else falls back to a byte string. Both decode to the
/// same bytes.
pub(crate) fn uncompressed_copy(
    w: &mut dyn Write,
    asset: &Asset,
    reader: &mut dyn Read,
) -> Result<()> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|source| Error::Read {
            path: asset.path.clone(),
            source,
        })?;

    open_static(w, asset)?;
    match std::str::from_utf8(&bytes) {
        Ok(text) => {
            literal::write_raw_str(w, text)?;
            w.write_all(b".as_bytes()")?;
        }
        Err(_) => literal::write_byte_str(w, &bytes)?,
    }
    w.write_all(b";\n")?;

    write!(
        w,
        "
pub fn {func}_bytes() -> Result<Cow<'static, [u8]>, ReadError> {{
    Ok(Cow::Owned(_{func}.to_vec()))
}}
",
        func = asset.func,
    )?;
    Ok(())
}

/// Writes the constructor pairing decoded bytes with the file's metadata.
///
/// The file is stat'd now; the values become constants in the output.
pub(crate) fn write_constructor(w: &mut dyn Write, asset: &Asset) -> Result<()> {
    let stat = |source| Error::Stat {
        path: asset.path.clone(),
        source,
    };
    let metadata = fs::metadata(&asset.path).map_err(stat)?;
    let mod_time = unix_seconds(metadata.modified().map_err(stat)?);

    write!(
        w,
        "
pub fn {func}() -> Result<BindataAsset, ReadError> {{
    let bytes = {func}_bytes()?;
    let info = BindataFileInfo {{
        name: {name:?},
        size: {size},
        mode: 0o{mode:o},
        mod_time: {mod_time},
    }};
    Ok(BindataAsset {{ bytes, info }})
}}

",
        func = asset.func,
        name = asset.name,
        size = metadata.len(),
        mode = permission_bits(&metadata),
    )?;
    Ok(())
}

fn open_static(w: &mut dyn Write, asset: &Asset) -> io::Result<()> {
    write!(
        w,
        "#[allow(non_upper_case_globals)]\nstatic _{}: &[u8] = ",
        asset.func
    )
}

fn write_read_fn(w: &mut dyn Write, asset: &Asset) -> io::Result<()> {
    write!(
        w,
        "
pub fn {func}_bytes() -> Result<Cow<'static, [u8]>, ReadError> {{
    bindata_read(_{func}, {name:?})
}}
",
        func = asset.func,
        name = asset.name,
    )
}

/// Streams `reader` through a zstd encoder into `out`.
fn compress<W: Write>(out: W, asset: &Asset, reader: &mut dyn Read, level: i32) -> Result<()> {
    let encode = |source| Error::Encode {
        name: asset.name.clone(),
        source,
    };
    let mut encoder = zstd::stream::write::Encoder::new(out, level).map_err(encode)?;
    io::copy(reader, &mut encoder).map_err(encode)?;
    encoder.finish().map_err(encode)?;
    Ok(())
}

#[cfg(unix)]
fn permission_bits(metadata: &fs::Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;

    metadata.permissions().mode() & 0o7777
}

#[cfg(not(unix))]
fn permission_bits(metadata: &fs::Metadata) -> u32 {
    if metadata.permissions().readonly() {
        0o444
    } else {
        0o644
    }
}

/// Whole seconds since the Unix epoch, rounded down.
fn unix_seconds(time: SystemTime) -> i64 {
    match time.duration_since(UNIX_EPOCH) {
        Ok(after) => i64::try_from(after.as_secs()).unwrap_or(i64::MAX),
        Err(err) => {
            let before = err.duration();
            let secs = i64::try_from(before.as_secs()).unwrap_or(i64::MAX);
            if before.subsec_nanos() > 0 {
                -secs - 1
            } else {
                -secs
            }
        }
    }
}
