//! The parser operates over complete in-memory documents, so input arriving as raw bytes
//! is drained through a decoder into `char`s up front rather than fed in incrementally.
//! Decoding is handled by the `chisel-decoders` crate; currently UTF-8 (the default) and
//! ASCII are supported.

use chisel_decoders::{ascii::AsciiDecoder, utf8::Utf8Decoder};
use std::io::BufRead;

/// Enumeration of different supported encoding types
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Encoding {
    Utf8,
    Ascii,
}

impl Default for Encoding {
    fn default() -> Self {
        Self::Utf8
    }
}

/// Create a `char` iterator over `reader` for the given encoding.  A decode failure in
/// the underlying stream simply ends the iterator, so a partially decoded document is
/// parsed as far as it goes.
pub fn decoder<'a, B: BufRead>(
    reader: &'a mut B,
    encoding: Encoding,
) -> Box<dyn Iterator<Item = char> + 'a> {
    match encoding {
        Encoding::Utf8 => Box::new(Utf8Decoder::new(reader)),
        Encoding::Ascii => Box::new(AsciiDecoder::new(reader)),
    }
}
