//! Error type returned by [`crate::parse`] (§7 "Error handling design").
//!
//! [`crate::parse_partial`] never fails (a structural failure simply
//! reports `+0.0` at offset 0, per §7); this type exists only for the
//! whole-string convenience wrapper, which additionally rejects
//! trailing unconsumed input.

use core::fmt;

/// Why [`crate::parse`] could not convert its input to an `f64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseFloatError {
    pub(crate) kind: ErrorKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorKind {
    /// No valid numeral, `inf`/`infinity`, or `nan` prefix exists at all.
    NoNumeral,
    /// A numeral was recognized but did not consume the whole input.
    TrailingCharacters,
    /// The input was empty.
    Empty,
}

impl ParseFloatError {
    pub(crate) const fn empty() -> Self {
        ParseFloatError { kind: ErrorKind::Empty }
    }

    pub(crate) const fn no_numeral() -> Self {
        ParseFloatError { kind: ErrorKind::NoNumeral }
    }

    pub(crate) const fn trailing_characters() -> Self {
        ParseFloatError { kind: ErrorKind::TrailingCharacters }
    }
}

impl fmt::Display for ParseFloatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self.kind {
            ErrorKind::Empty => "cannot parse float from empty string",
            ErrorKind::NoNumeral => "invalid float literal",
            ErrorKind::TrailingCharacters => "invalid float literal: trailing characters",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseFloatError {}
