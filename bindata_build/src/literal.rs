//! Writers that turn arbitrary bytes into Rust literal syntax.
//!
//! Three literal shapes are produced:
//!
//! - raw text, `concat!(r#"..."#)`, used for readable UTF-8 content;
//! - byte strings, `b"..."`, which can hold anything;
//! - byte arrays, `&[0x.., ...]`.
use std::io::{self, Write};

/// Entries per line written by [`ByteArrayWriter`].
const BYTES_PER_LINE: usize = 16;

/// Prepares UTF-8 text for the body of an `r#"..."#` literal inside `concat!`.
///
/// Anything rustc would not read back verbatim from a raw literal is moved into
/// an escaped string literal spliced between two raw pieces:
///
/// - the closing delimiter `"#`;
/// - carriage returns, since rustc normalises CRLF and rejects a lone CR;
/// - the byte-order mark;
/// - bidirectional control characters, denied by rustc inside literals.
#[must_use]
pub fn sanitize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' if chars.peek() == Some(&'#') => {
                chars.next();
                splice(&mut out, "\\\"#");
            }
            '\r' => splice(&mut out, "\\r"),
            '\u{feff}' | '\u{202a}'..='\u{202e}' | '\u{2066}'..='\u{2069}' => {
                splice(&mut out, &format!("\\u{{{:x}}}", u32::from(c)));
            }
            _ => out.push(c),
        }
    }
    out
}

/// Closes the current raw piece, appends `"<escaped>"` and opens a new one.
fn splice(out: &mut String, escaped: &str) {
    out.push_str(&format!("\"#, \"{escaped}\", r#\""));
}

/// Writes `text` as a `concat!(r#"..."#)` expression of type `&'static str`.
pub fn write_raw_str(w: &mut dyn Write, text: &str) -> io::Result<()> {
    write!(w, "concat!(r#\"{}\"#)", sanitize(text))
}

/// Writes `bytes` as a complete `b"..."` literal.
pub fn write_byte_str(w: &mut dyn Write, bytes: &[u8]) -> io::Result<()> {
    w.write_all(b"b\"")?;
    ByteStrWriter::new(&mut *w).write_all(bytes)?;
    w.write_all(b"\"")
}

/// Streams bytes as the body of a `b"..."` literal.
///
/// Printable ASCII passes through, `"` and `\` get a backslash and every other
/// byte is written as `\xNN`. The caller writes the surrounding quotes.
#[derive(Debug)]
pub struct ByteStrWriter<W> {
    inner: W,
}

impl<W: Write> ByteStrWriter<W> {
    pub const fn new(inner: W) -> Self {
        Self { inner }
    }
}

impl<W: Write> Write for ByteStrWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut escaped = Vec::with_capacity(buf.len() * 2);
        for &byte in buf {
            match byte {
                b'"' | b'\\' => escaped.extend_from_slice(&[b'\\', byte]),
                0x20..=0x7e => escaped.push(byte),
                _ => escaped.extend_from_slice(format!("\\x{byte:02x}").as_bytes()),
            }
        }
        self.inner.write_all(&escaped)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Streams bytes as the entries of an array literal, `0xNN,` sixteen to a line.
///
/// The caller writes the surrounding `&[` and `]`.
#[derive(Debug)]
pub struct ByteArrayWriter<W> {
    inner: W,
    written: usize,
}

impl<W: Write> ByteArrayWriter<W> {
    pub const fn new(inner: W) -> Self {
        Self { inner, written: 0 }
    }
}

impl<W: Write> Write for ByteArrayWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut out = String::with_capacity(buf.len() * 6);
        for &byte in buf {
            let sep = if self.written % BYTES_PER_LINE == 0 {
                "\n    "
            } else {
                " "
            };
            out.push_str(&format!("{sep}0x{byte:02x},"));
            self.written += 1;
        }
        self.inner.write_all(out.as_bytes())?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
