//! Decoding and rendering of JSON payloads
//!
//! Payloads are parsed into a generic [`Value`] tree with object keys kept in
//! the order they were received, and rendered back with 2-space indentation.

use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter};
use serde_json::Value;
use std::io;

use crate::error::{LaunchError, Result};

/// Indentation used for rendered payloads.
pub const INDENT: &[u8] = b"  ";

/// Options controlling [`render_pretty`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Escape every non-ASCII character in strings as `\uXXXX`.
    pub escape_unicode: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            escape_unicode: true,
        }
    }
}

/// Decode a raw response body.
///
/// Bytes that are not UTF-8, or text that is not JSON, yield
/// [`LaunchError::InvalidJson`].
pub fn parse_payload(body: &[u8]) -> Result<Value> {
    serde_json::from_slice(body).map_err(LaunchError::InvalidJson)
}

/// Render a value with 2-space indentation.
pub fn render_pretty(value: &Value, options: RenderOptions) -> Result<String> {
    let mut buf = Vec::with_capacity(128);

    if options.escape_unicode {
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, AsciiFormatter::new());
        value
            .serialize(&mut ser)
            .map_err(|e| LaunchError::Render(e.to_string()))?;
    } else {
        let mut ser =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
        value
            .serialize(&mut ser)
            .map_err(|e| LaunchError::Render(e.to_string()))?;
    }

    String::from_utf8(buf).map_err(|e| LaunchError::Render(e.to_string()))
}

/// Pretty formatter that keeps the output pure ASCII.
///
/// Layout is delegated to [`PrettyFormatter`]; only string fragments are
/// rewritten, with characters outside the BMP written as surrogate pairs.
struct AsciiFormatter<'a> {
    pretty: PrettyFormatter<'a>,
}

impl<'a> AsciiFormatter<'a> {
    fn new() -> Self {
        Self {
            pretty: PrettyFormatter::with_indent(INDENT),
        }
    }
}

impl Formatter for AsciiFormatter<'_> {
    fn begin_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_array(writer)
    }

    fn end_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.pretty.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_object(writer)
    }

    fn end_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.pretty.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_object_value(writer)
    }

    fn write_string_fragment<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        let bytes = fragment.as_bytes();
        let mut start = 0;

        for (idx, ch) in fragment.char_indices() {
            if ch.is_ascii() {
                continue;
            }
            writer.write_all(&bytes[start..idx])?;

            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = idx + ch.len_utf8();
        }

        writer.write_all(&bytes[start..])
    }
}
