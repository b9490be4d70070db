//! Low-level scanning helpers underneath the parser.  The parser keeps byte offsets into a
//! single borrowed document rather than carving off owned substrings, and the functions in
//! this module are the primitive searches those offsets move through.
//!
//! Whitespace is exactly space, tab and newline.  Every delimiter in the grammar is a
//! single ASCII byte, so byte-wise searches always land on `char` boundaries and the
//! returned offsets are safe to slice with.

/// The whitespace set recognised between keys, values and delimiters
fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n')
}

/// Strip leading and trailing whitespace from a span, returning the maximal interior
/// slice. A span that is empty or all whitespace trims to the empty string.
pub fn trim(text: &str) -> &str {
    text.trim_matches(|c| matches!(c, ' ' | '\t' | '\n'))
}

/// Index of the first non-whitespace byte at or after `from`, if any
pub fn skip_whitespace(text: &str, from: usize) -> Option<usize> {
    text.as_bytes()
        .get(from..)?
        .iter()
        .position(|b| !is_whitespace(*b))
        .map(|index| from + index)
}

/// Index of the first occurrence of `target` at or after `from`, if any
pub fn find_from(text: &str, from: usize, target: u8) -> Option<usize> {
    text.as_bytes()
        .get(from..)?
        .iter()
        .position(|b| *b == target)
        .map(|index| from + index)
}

/// Index of the first occurrence of any byte in `targets` at or after `from`, if any
pub fn find_first_of(text: &str, from: usize, targets: &[u8]) -> Option<usize> {
    text.as_bytes()
        .get(from..)?
        .iter()
        .position(|b| targets.contains(b))
        .map(|index| from + index)
}
