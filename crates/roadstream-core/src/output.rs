// crates/roadstream-core/src/output.rs

//! JSON writers for the tools' output: compact lines and pretty documents,
//! both with every non-ASCII character written as a `\uXXXX` escape.

use crate::error::Result;
use serde::Serialize;
use serde_json::ser::{CompactFormatter, Formatter, PrettyFormatter};
use serde_json::Serializer;
use std::io::{self, Write};

/// Wraps another formatter and escapes non-ASCII text, plus DEL (U+007F).
///
/// Characters outside the BMP become a surrogate pair, so the output is
/// printable ASCII while still decoding to the original strings.
#[derive(Debug, Clone)]
pub struct AsciiFormatter<F> {
    inner: F,
}

impl<F: Formatter> AsciiFormatter<F> {
    pub fn new(inner: F) -> Self {
        Self { inner }
    }
}

impl<F: Formatter> Formatter for AsciiFormatter<F> {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        let mut start = 0;
        for (i, ch) in fragment.char_indices() {
            if ch.is_ascii() && ch != '\u{7f}' {
                continue;
            }
            writer.write_all(&fragment.as_bytes()[start..i])?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = i + ch.len_utf8();
        }
        writer.write_all(&fragment.as_bytes()[start..])
    }

    // Layout is the inner formatter's business.

    fn begin_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.begin_array(writer)
    }

    fn end_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.end_array(writer)
    }

    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.begin_array_value(writer, first)
    }

    fn end_array_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.end_array_value(writer)
    }

    fn begin_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.begin_object(writer)
    }

    fn end_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.end_object(writer)
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.begin_object_key(writer, first)
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.begin_object_value(writer)
    }

    fn end_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.end_object_value(writer)
    }
}

/// Writes `value` as one compact ASCII line, newline-terminated.
pub fn write_json_line<W, T>(writer: &mut W, value: &T) -> Result<()>
where
    W: Write,
    T: ?Sized + Serialize,
{
    let mut ser = Serializer::with_formatter(&mut *writer, AsciiFormatter::new(CompactFormatter));
    value.serialize(&mut ser)?;
    writer.write_all(b"\n")?;
    Ok(())
}

/// Writes `value` with two-space indentation and ASCII escapes. No
/// trailing newline.
pub fn write_pretty_ascii<W, T>(writer: &mut W, value: &T) -> Result<()>
where
    W: Write,
    T: ?Sized + Serialize,
{
    let formatter = AsciiFormatter::new(PrettyFormatter::with_indent(b"  "));
    let mut ser = Serializer::with_formatter(&mut *writer, formatter);
    value.serialize(&mut ser)?;
    Ok(())
}
