//! General error types for the parser

use std::fmt::{Display, Formatter};

/// Global result type used throughout the parser
pub type ParserResult<T> = Result<T, Error>;

/// A global enumeration of error codes. Every code other than [Error::InvalidFile] is
/// recorded as a diagnostic during a best-effort parse rather than returned eagerly.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Error {
    /// The trimmed input is not wrapped in a brace pair
    InvalidEnvelope,
    /// No key could be found, or no `:` separator followed it
    PairExpected,
    /// The body ran out where a value should begin
    EndOfInput,
    /// No closing `}` was found for an object value
    UnterminatedObject,
    /// No closing `]` was found for an array value
    UnterminatedArray,
    /// No closing quote was found for a quoted value
    UnterminatedString,
    /// The input file could not be opened
    InvalidFile,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidEnvelope => write!(f, "input is not a braced document"),
            Self::PairExpected => write!(f, "expected a key followed by ':'"),
            Self::EndOfInput => write!(f, "input ended where a value should begin"),
            Self::UnterminatedObject => write!(f, "no closing brace found for object value"),
            Self::UnterminatedArray => write!(f, "no closing bracket found for array value"),
            Self::UnterminatedString => write!(f, "no closing quote found for quoted value"),
            Self::InvalidFile => write!(f, "input file could not be opened"),
        }
    }
}

impl std::error::Error for Error {}
