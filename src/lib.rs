//! Low-level, correctly-rounded conversion from decimal numeral strings
//! to `f64`, equivalent to a from-scratch implementation of C's
//! `strtod` restricted to `double`.
//!
//! Converting a decimal string to the nearest binary floating-point
//! value exactly is non-trivial: the naive approach (accumulate digits
//! into a `f64` and multiply by powers of ten) accumulates rounding
//! error, and can be off by more than one ULP for inputs that are
//! common in practice (long decimal literals, numbers near the
//! subnormal boundary). This crate instead implements the fast-path
//! 128/192-bit approximate multiplication with an exact bignum
//! fallback described by Clinger and refined by numerous `strtod`
//! implementations since, so every conversion is correctly rounded
//! under the caller's chosen IEEE rounding mode.
//!
//! The functionality of this crate is provided through two free
//! functions, [`parse_partial`] and [`parse`], plus the convenience
//! newtype [`StrictF64`] for `FromStr`-style parsing.
//!
//! # Minimum Rust version
//!
//! The minimum Rust version required by this crate is 1.50 (for
//! `Ord::clamp`, used internally to saturate the decimal exponent).
//!
//! # Example
//!
//! ```
//! use dec2flt64::{parse, parse_partial, RoundingMode};
//!
//! // `parse_partial` mirrors `strtod`'s cursor contract: it returns the
//! // value and how many bytes were consumed, never failing outright.
//! let (value, consumed) = parse_partial(b"3.5e2trailing", RoundingMode::ToNearest);
//! assert_eq!(value, 350.0);
//! assert_eq!(consumed, 5);
//!
//! // `parse` additionally rejects empty input and trailing garbage.
//! assert_eq!(parse(b"3.5e2", RoundingMode::ToNearest), Ok(350.0));
//! assert!(parse(b"3.5e2trailing", RoundingMode::ToNearest).is_err());
//! ```
//!
//! # Example (rounding modes)
//!
//! ```
//! use dec2flt64::{parse, RoundingMode};
//!
//! // 9007199254740993 == 2**53 + 1 is exactly halfway between two
//! // representable doubles; round-to-nearest ties to even...
//! let nearest = parse(b"9007199254740993", RoundingMode::ToNearest).unwrap();
//! assert_eq!(nearest, 9007199254740992.0);
//! // ...while round-toward-positive-infinity always takes the larger one.
//! let up = parse(b"9007199254740993", RoundingMode::Upward).unwrap();
//! assert_eq!(up, 9007199254740994.0);
//! ```

#![deny(
    rust_2018_idioms,
    trivial_numeric_casts,
    unreachable_pub,
    unused_must_use,
    unused_qualifications
)]
#![no_std]

#[cfg(any(test, feature = "std"))]
extern crate std;

mod error;
mod parse;

pub use error::ParseFloatError;
pub use parse::RoundingMode;

use core::str::FromStr;

/// Scans the longest valid prefix of `s` for a decimal numeral (or
/// `inf`/`infinity`/`nan`, case-insensitively) and converts it to the
/// `f64` nearest it under `mode`, returning the value together with the
/// number of bytes consumed.
///
/// Leading ASCII whitespace is skipped. If no valid prefix exists at
/// all, returns `(0.0, 0)`: the cursor is left at the true start of
/// `s`, matching the contract of C's `strtod` when `endptr` is set back
/// to `nptr`. This function never panics and performs no allocation.
///
/// # Example
///
/// ```
/// use dec2flt64::{parse_partial, RoundingMode};
///
/// assert_eq!(parse_partial(b"1", RoundingMode::ToNearest), (1.0, 1));
/// assert_eq!(parse_partial(b"  -0.5e+1 ", RoundingMode::ToNearest), (-5.0, 9));
/// assert_eq!(parse_partial(b"abc", RoundingMode::ToNearest), (0.0, 0));
/// ```
pub fn parse_partial(s: &[u8], mode: RoundingMode) -> (f64, usize) {
    match parse::parse_partial(s, mode) {
        parse::Parsed::Ok { value, end } => (value, end),
        parse::Parsed::StructuralFailure => (0.0, 0),
    }
}

/// Converts the whole of `s` to an `f64` under `mode`, rejecting empty
/// input and any trailing characters the numeral does not account for.
///
/// # Example
///
/// ```
/// use dec2flt64::{parse, RoundingMode};
///
/// assert_eq!(parse(b"5e-324", RoundingMode::ToNearest), Ok(5e-324));
/// assert!(parse(b"", RoundingMode::ToNearest).is_err());
/// assert!(parse(b"1.5 ", RoundingMode::ToNearest).is_err());
/// ```
pub fn parse(s: &[u8], mode: RoundingMode) -> Result<f64, ParseFloatError> {
    if s.is_empty() {
        return Err(ParseFloatError::empty());
    }
    match parse::parse_partial(s, mode) {
        parse::Parsed::StructuralFailure => Err(ParseFloatError::no_numeral()),
        parse::Parsed::Ok { value, end } if end == s.len() => Ok(value),
        parse::Parsed::Ok { .. } => Err(ParseFloatError::trailing_characters()),
    }
}

/// A thin `f64` newtype whose [`FromStr`] implementation parses with
/// [`RoundingMode::ToNearest`], for callers who just want ordinary
/// `"1.5".parse::<StrictF64>()` ergonomics on top of [`parse`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct StrictF64(pub f64);

impl FromStr for StrictF64 {
    type Err = ParseFloatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s.as_bytes(), RoundingMode::ToNearest).map(StrictF64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_partial_stops_before_trailing_garbage() {
        assert_eq!(parse_partial(b"1.25xyz", RoundingMode::ToNearest), (1.25, 4));
    }

    #[test]
    fn parse_partial_reports_zero_and_no_consumption_on_failure() {
        assert_eq!(parse_partial(b"xyz", RoundingMode::ToNearest), (0.0, 0));
    }

    #[test]
    fn parse_rejects_empty_input() {
        assert!(parse(b"", RoundingMode::ToNearest).is_err());
    }

    #[test]
    fn parse_rejects_trailing_characters() {
        assert!(parse(b"1.5trailing", RoundingMode::ToNearest).is_err());
    }

    #[test]
    fn parse_accepts_signed_infinity() {
        assert_eq!(parse(b"-inf", RoundingMode::ToNearest), Ok(f64::NEG_INFINITY));
    }

    #[test]
    fn strict_f64_from_str_round_trips() {
        let v: StrictF64 = "2.5".parse().unwrap();
        assert_eq!(v.0, 2.5);
        assert!("nope".parse::<StrictF64>().is_err());
    }

    #[test]
    fn error_messages_are_distinct() {
        use std::string::ToString;
        assert_ne!(
            parse(b"", RoundingMode::ToNearest).unwrap_err().to_string(),
            parse(b"x", RoundingMode::ToNearest).unwrap_err().to_string(),
        );
    }
}
