//! The recursive parser
//!
//! A document is a brace-wrapped list of `key: value` pairs.  Keys run from the cursor to
//! the next `:`; values are classified by their first significant byte as an object (`{`),
//! an array of objects (`[`), a quoted scalar (`"` or `'`) or a bare scalar (anything
//! else).  Object and array values recurse over the sub-span, scalars are stored as raw
//! text.
//!
//! Closing delimiters are found by first-occurrence search, never by depth counting, and
//! array elements are split on every comma.  Both searches truncate structures nested
//! more than one level deep; the scan semantics are deliberate and pinned by the tests.
//! Faults never surface as early returns to the caller: the scan records a diagnostic,
//! stops, and whatever was accumulated up to that point is handed back in a [Parsed].

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::decoders::{self, Encoding};
use crate::errors::{Error, ParserResult};
use crate::scanner;
use crate::Node;

/// Outcome of a best-effort parse: the tree accumulated by the scan plus every diagnostic
/// recorded along the way, in emission order.  An empty diagnostic list means the whole
/// document was consumed cleanly; a non-empty one means the scan stopped early and `node`
/// holds whatever had been built by then.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parsed {
    /// The best-effort tree
    pub node: Node,
    /// Diagnostics recorded during the scan, in emission order
    pub errors: Vec<Error>,
}

impl Parsed {
    /// True when the parse recorded no diagnostics
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Collapse into a strict result, keeping only the first diagnostic on failure
    pub fn into_result(self) -> ParserResult<Node> {
        match self.errors.first() {
            Some(err) => Err(*err),
            None => Ok(self.node),
        }
    }
}

/// Main parser struct.  Cheap to construct; carries only the input encoding used by the
/// byte-stream entry points.
pub struct Parser {
    encoding: Encoding,
}

impl Default for Parser {
    /// The default encoding is Utf-8
    fn default() -> Self {
        Self {
            encoding: Encoding::default(),
        }
    }
}

impl Parser {
    /// Create a new instance of the parser using a specific [Encoding]
    pub fn with_encoding(encoding: Encoding) -> Self {
        Self { encoding }
    }

    /// Parse the contents of a file.  Only a failure to open the file is surfaced as an
    /// error; once open, parsing is best-effort as everywhere else.
    pub fn parse_file<PathLike: AsRef<Path>>(&self, path: PathLike) -> ParserResult<Parsed> {
        match File::open(&path) {
            Ok(f) => {
                let mut reader = BufReader::new(f);
                let mut chars = decoders::decoder(&mut reader, self.encoding);
                Ok(self.parse(&mut chars))
            }
            Err(_) => Err(Error::InvalidFile),
        }
    }

    /// Parse a document supplied as raw bytes, decoding with the configured encoding
    pub fn parse_bytes(&self, bytes: &[u8]) -> Parsed {
        let mut reader = BufReader::new(bytes);
        let mut chars = decoders::decoder(&mut reader, self.encoding);
        self.parse(&mut chars)
    }

    /// Parse a document supplied as a stream of `char`s.  The stream is drained into a
    /// single buffer first; there is no incremental scanning.
    pub fn parse(&self, chars: &mut impl Iterator<Item = char>) -> Parsed {
        let document: String = chars.collect();
        self.parse_str(&document)
    }

    /// Parse a document already held in memory
    pub fn parse_str(&self, input: &str) -> Parsed {
        let mut errors = vec![];
        let node = self.parse_span(input, &mut errors);
        Parsed { node, errors }
    }

    /// Parse one object span.  The trimmed span must be wrapped in braces; the body
    /// between them is scanned pair by pair until it is exhausted or a fault stops the
    /// scan.  Child spans record their own diagnostics into the shared list without
    /// stopping this scan.
    fn parse_span(&self, span: &str, errors: &mut Vec<Error>) -> Node {
        let trimmed = scanner::trim(span);
        if trimmed.is_empty() || !trimmed.starts_with('{') || !trimmed.ends_with('}') {
            errors.push(Error::InvalidEnvelope);
            return Node::default();
        }
        let body = &trimmed[1..trimmed.len() - 1];
        let mut node = Node::default();
        let mut pos = 0;
        while pos < body.len() {
            match self.scan_pair(body, pos, &mut node, errors) {
                Ok(next) => pos = next,
                Err(err) => {
                    errors.push(err);
                    break;
                }
            }
        }
        node
    }

    /// Scan a single `key: value` pair starting at `pos`, store the member in `node` and
    /// return the cursor position for the next pair
    fn scan_pair(
        &self,
        body: &str,
        pos: usize,
        node: &mut Node,
        errors: &mut Vec<Error>,
    ) -> ParserResult<usize> {
        let key_start = scanner::skip_whitespace(body, pos).ok_or(Error::PairExpected)?;
        let key_end = scanner::find_from(body, key_start, b':').ok_or(Error::PairExpected)?;
        let key = scanner::trim(&body[key_start..key_end]).to_string();
        let value_start = scanner::skip_whitespace(body, key_end + 1).ok_or(Error::EndOfInput)?;

        match body.as_bytes()[value_start] {
            b'{' => {
                let value_end =
                    scanner::find_from(body, value_start, b'}').ok_or(Error::UnterminatedObject)?;
                let child = self.parse_span(&body[value_start..=value_end], errors);
                node.insert_object(key, child);
                Ok(next_pair(body, value_end + 1))
            }
            b'[' => {
                let value_end =
                    scanner::find_from(body, value_start, b']').ok_or(Error::UnterminatedArray)?;
                let elements = self.parse_elements(&body[value_start..=value_end], errors);
                node.insert_array(key, elements);
                Ok(next_pair(body, value_end + 1))
            }
            quote @ (b'"' | b'\'') => {
                let value_end = scanner::find_from(body, value_start + 1, quote)
                    .ok_or(Error::UnterminatedString)?;
                node.insert_property(key, body[value_start + 1..value_end].to_string());
                Ok(next_pair(body, value_end + 1))
            }
            _ => {
                // Bare scalars run to the next delimiter, or to the end of the body when
                // the closing brace was consumed by the envelope.  Never a fault.
                let value_end =
                    scanner::find_first_of(body, value_start, &[b',', b'}']).unwrap_or(body.len());
                node.insert_property(key, scanner::trim(&body[value_start..value_end]).to_string());
                Ok(value_end + 1)
            }
        }
    }

    /// Split a bracketed span (both brackets included) on every comma and parse each
    /// trimmed, non-empty segment as an object.  The comma scan is a plain forward
    /// search with no nesting awareness; segments that are not object-shaped contribute
    /// a default node plus a diagnostic.
    fn parse_elements(&self, span: &str, errors: &mut Vec<Error>) -> Vec<Node> {
        let mut elements = vec![];
        let closing = span.len() - 1;
        let mut pos = 1;
        while pos < closing {
            let element_end = scanner::find_from(span, pos, b',').unwrap_or(closing);
            let element = scanner::trim(&span[pos..element_end]);
            if !element.is_empty() {
                elements.push(self.parse_span(element, errors));
            }
            pos = element_end + 1;
        }
        elements
    }
}

/// Advance from the end of a consumed value to the start of the next pair, swallowing at
/// most one separating comma and any surrounding whitespace
fn next_pair(body: &str, pos: usize) -> usize {
    match scanner::skip_whitespace(body, pos) {
        Some(index) if body.as_bytes()[index] == b',' => index + 1,
        Some(index) => index,
        None => body.len(),
    }
}
