//! Wires the four components together (§2 "System overview"):
//! [`lexer`] scans the input, [`fast_path`] attempts a 128/192-bit
//! approximate conversion, and falls back to [`slow`] (backed by
//! [`bignum`]) only when the approximation is ambiguous. [`round`]
//! supplies the shared rounding primitives and mode translation.
//!
//! This module has no public items; [`crate::parse_partial`] and
//! [`crate::parse`] are the crate's public entry points and live at
//! the crate root, matching where the reference implementation's
//! single `my_strtod` entry point sits relative to its helpers.

mod bignum;
mod fast_path;
mod lexer;
mod round;
mod slow;
mod tables;

pub use round::RoundingMode;

use lexer::Lexed;
use round::Internal;

/// Quiet-NaN bit pattern (exponent all ones, top mantissa bit set, no
/// payload), matching `f64::NAN`'s own encoding.
const NAN_PATTERN: u64 = 0x7ff8_0000_0000_0000;
/// Positive infinity bit pattern (exponent all ones, zero mantissa).
const INF_PATTERN: u64 = 0x7ff0_0000_0000_0000;

/// The outcome of scanning a single numeral out of a longer buffer
/// (§6.1's `parse_partial` contract).
pub(crate) enum Parsed {
    /// A numeral, `inf`/`infinity`, or `nan` token was recognized.
    /// `end` is the offset just past the recognized token.
    Ok { value: f64, end: usize },
    /// No valid prefix exists at all; per §7 the caller reports this as
    /// `+0.0` with the cursor left at the original position.
    StructuralFailure,
}

/// Scans the longest valid prefix of `s` and converts it to the
/// nearest (per `mode`) `f64`. Never panics and never allocates.
pub(crate) fn parse_partial(s: &[u8], mode: RoundingMode) -> Parsed {
    match lexer::lex(s) {
        Lexed::StructuralFailure => Parsed::StructuralFailure,
        Lexed::Special { sign, is_nan, end } => {
            let magnitude = if is_nan { NAN_PATTERN } else { INF_PATTERN };
            Parsed::Ok { value: with_sign(magnitude, sign), end }
        }
        Lexed::Number(p) => {
            let internal_mode = mode.resolve(p.sign);
            let magnitude = resolve_number(&p, internal_mode, s);
            Parsed::Ok { value: with_sign(magnitude, p.sign), end: p.end }
        }
    }
}

fn with_sign(magnitude: u64, sign: bool) -> f64 {
    f64::from_bits(magnitude | (u64::from(sign) << 63))
}

/// Runs the fast path, falling back to the exact comparator (§4.4) only
/// when the fast path itself could not decide, and applies the
/// comparator's verdict to the candidate exactly as the fast path's own
/// internal rounding loop would have (round-to-even tie-break, etc).
fn resolve_number(p: &lexer::ParseResult, mode: Internal, s: &[u8]) -> u64 {
    if let Some(magnitude) = fast_path::shortcut(p.mnt, p.dec_exp, mode) {
        return magnitude;
    }
    match fast_path::run(p.mnt, p.last_dig.is_some(), p.dec_exp, mode) {
        fast_path::FastResult::Definite(magnitude) => magnitude,
        fast_path::FastResult::Ambiguous { candidate } => {
            let mut cmp = slow::compare_with_threshold(p, candidate, mode, s);
            match mode {
                Internal::ToNearest => {
                    if cmp == 0 && (candidate & 1) != 0 {
                        cmp = 1; // break the tie to even
                    }
                    candidate + u64::from(cmp > 0)
                }
                Internal::Upward => candidate + u64::from(cmp > 0),
                Internal::TowardZero => candidate + u64::from(cmp >= 0),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str, mode: RoundingMode) -> Option<(f64, usize)> {
        match parse_partial(s.as_bytes(), mode) {
            Parsed::Ok { value, end } => Some((value, end)),
            Parsed::StructuralFailure => None,
        }
    }

    #[test]
    fn parses_plain_integer() {
        let (v, end) = parse("1", RoundingMode::ToNearest).unwrap();
        assert_eq!(v, 1.0);
        assert_eq!(end, 1);
    }

    #[test]
    fn parses_leading_numeral_and_stops_at_trailing_garbage() {
        let (v, end) = parse("3.5xyz", RoundingMode::ToNearest).unwrap();
        assert_eq!(v, 3.5);
        assert_eq!(end, 3);
    }

    #[test]
    fn parses_signed_exponent_form() {
        let (v, end) = parse("  -0.5e+1 ", RoundingMode::ToNearest).unwrap();
        assert_eq!(v, -5.0);
        assert_eq!(end, 9);
    }

    #[test]
    fn parses_case_insensitive_infinity() {
        let (v, end) = parse("-INFINITY", RoundingMode::ToNearest).unwrap();
        assert!(v.is_infinite() && v.is_sign_negative());
        assert_eq!(end, 9);
    }

    #[test]
    fn parses_nan_without_payload() {
        let (v, _) = parse("+NaN", RoundingMode::ToNearest).unwrap();
        assert!(v.is_nan());
    }

    #[test]
    fn smallest_subnormal_round_trips() {
        let (v, _) = parse("5e-324", RoundingMode::ToNearest).unwrap();
        assert_eq!(v, 5e-324);
        assert_eq!(v.to_bits(), 1u64);
    }

    #[test]
    fn huge_exponent_saturates_to_infinity() {
        let (v, _) = parse("1e400", RoundingMode::ToNearest).unwrap();
        assert!(v.is_infinite());
    }

    #[test]
    fn bare_text_is_a_structural_failure() {
        assert!(parse("abc", RoundingMode::ToNearest).is_none());
    }

    #[test]
    fn rounding_mode_affects_halfway_case() {
        // 2^53 + 1 is exactly halfway between two representable doubles;
        // ToNearest ties to even (down, since 2^53 is even), Upward
        // always rounds the magnitude up.
        let (nearest, _) = parse("9007199254740993", RoundingMode::ToNearest).unwrap();
        let (up, _) = parse("9007199254740993", RoundingMode::Upward).unwrap();
        assert_eq!(nearest.to_bits(), 9007199254740992.0f64.to_bits());
        assert_eq!(up.to_bits(), 9007199254740994.0f64.to_bits());
    }
}
