//! Lexer (§4.1): scans a byte buffer for the longest valid decimal (or
//! `inf`/`nan`) prefix, producing either a [`ParseResult`] or a bare IEEE
//! pattern for the infinity/NaN tokens, or a structural failure.
//!
//! Mirrors the accumulation scheme of `parse_t`/the main scan loop in
//! the reference implementation (`examples/original_source/big/my_strtod99.c`):
//! up to 19 significant digits are folded into a `u64` (`mnt`), after
//! which the lexer keeps scanning (without further accumulating) to
//! find the last non-zero digit and the radix point, while `decExp` is
//! derived purely from cursor arithmetic rather than tracked digit by
//! digit.

/// Maximum number of significant (mantissa) characters accepted; inputs
/// whose mantissa is longer are rejected as a structural failure (§4.1).
pub(crate) const MAX_MANTISSA_LEN: usize = 100_000;

/// Saturation bound for the parsed decimal exponent literal (§4.1).
const EXP_SATURATE: i64 = 200_000;

/// `mnt` stops accumulating once it would exceed this bound; one more
/// digit could overflow `u64` multiplication by 10.
const MNT_LIMIT: u64 = (u64::MAX - 9) / 10;

/// The outcome of scanning a numeric prefix (§3 "Parse result").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ParseResult {
    /// Accumulated significand, up to 19 decimal digits.
    pub mnt: u64,
    /// Byte offset (from the start of the mantissa) where accumulation
    /// into `mnt` stopped.
    pub eom: usize,
    /// Byte offset of the last non-zero digit beyond `eom`, if any.
    pub last_dig: Option<usize>,
    /// Byte offset of the radix point, if it was encountered at or
    /// after `eom`. A radix point encountered strictly before `eom` is
    /// folded into `decExp` directly and not retained here.
    pub dot: Option<usize>,
    /// Decimal exponent such that the source value equals
    /// `mnt * 10^dec_exp`, truncated at the `mnt`/`last_dig` window.
    pub dec_exp: i32,
    /// `true` for a negative sign.
    pub sign: bool,
    /// Byte offset of the first character not consumed by this numeral.
    pub end: usize,
}

/// The result of running the lexer over an input buffer.
pub(crate) enum Lexed {
    /// A numeric prefix was recognized.
    Number(ParseResult),
    /// `inf`/`infinity`/`nan` (case-insensitive) was recognized; `nan`
    /// carries no payload (§9 open item (ii): parenthesized payloads are
    /// not part of the recognized grammar).
    Special { sign: bool, is_nan: bool, end: usize },
    /// No valid numeric prefix exists; per §6.1/§7 the caller must
    /// return +0.0 and leave the cursor at the true original position.
    StructuralFailure,
}

fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

fn eq_ignore_case(s: &[u8], word: &[u8]) -> bool {
    s.len() >= word.len() && s[..word.len()].eq_ignore_ascii_case(word)
}

/// Scans `s` per the grammar of §4.1 and returns the parsed prefix.
pub(crate) fn lex(s: &[u8]) -> Lexed {
    let len = s.len();
    let mut i = 0;
    while i < len && s[i] <= b' ' {
        i += 1;
    }

    let sign = match s.get(i) {
        Some(b'+') => {
            i += 1;
            false
        }
        Some(b'-') => {
            i += 1;
            true
        }
        _ => false,
    };

    let start = i;
    let mut mnt: u64 = 0;
    let mut dot_consumed = false;
    let mut frac_start: Option<usize> = None; // effective dot when found pre-overflow
    let mut seen_digit = false;
    let mut overflowed = false;
    let mut eom = start;

    // Phase 1: accumulate up to 19 significant digits, recognizing a
    // single radix point along the way.
    loop {
        if i < len && is_digit(s[i]) {
            seen_digit = true;
            let dig = u64::from(s[i] - b'0');
            i += 1;
            mnt = mnt * 10 + dig;
            if mnt > MNT_LIMIT {
                eom = i;
                overflowed = true;
                break;
            }
            continue;
        }
        if i < len && s[i] == b'.' && !dot_consumed {
            dot_consumed = true;
            frac_start = Some(i + 1);
            i += 1;
            continue;
        }
        eom = i;
        break;
    }

    let mut dot: Option<usize> = None;
    if overflowed {
        // Phase 2: keep scanning (without accumulating) to find the
        // last non-zero digit and a possibly still-unseen radix point.
        loop {
            while i < len && is_digit(s[i]) {
                i += 1;
            }
            if i < len && s[i] == b'.' && !dot_consumed {
                dot_consumed = true;
                dot = Some(i);
                i += 1;
                continue;
            }
            break;
        }
    }
    let p = i;

    if !seen_digit && !dot_consumed {
        // Nothing matched a numeric prefix at all: try inf/infinity/nan.
        let rest = &s[start..];
        if eq_ignore_case(rest, b"inf") {
            let mut end = start + 3;
            if eq_ignore_case(&s[end..], b"inity") {
                end += 5;
            }
            return Lexed::Special { sign, is_nan: false, end };
        }
        if eq_ignore_case(rest, b"nan") {
            return Lexed::Special { sign, is_nan: true, end: start + 3 };
        }
        return Lexed::StructuralFailure;
    }

    if !seen_digit {
        // Only a lone radix point was consumed, with no digits on
        // either side (e.g. "."): not a valid numeral under the
        // grammar's `'.' digits` / `digits ('.' digits?)?` alternatives.
        return Lexed::StructuralFailure;
    }

    if p - start >= MAX_MANTISSA_LEN {
        return Lexed::StructuralFailure;
    }

    let last_dig = if overflowed && p > eom {
        let mut last = p - 1;
        while s[last] == b'0' {
            last -= 1;
        }
        if dot == Some(last) {
            last -= 1;
            while s[last] == b'0' {
                last -= 1;
            }
        }
        if last < eom {
            None
        } else {
            Some(last)
        }
    } else {
        None
    };

    let effective_dot = frac_start.or(dot).unwrap_or(p);
    let mut dec_exp = effective_dot as i64 - eom as i64;

    let mut end = p;
    if p < len && (s[p] == b'e' || s[p] == b'E') {
        let mut j = p + 1;
        let exp_neg = match s.get(j) {
            Some(b'+') => {
                j += 1;
                false
            }
            Some(b'-') => {
                j += 1;
                true
            }
            _ => false,
        };
        if j < len && is_digit(s[j]) {
            let mut exp_acc: i64 = 0;
            while j < len && is_digit(s[j]) {
                let dig = i64::from(s[j] - b'0');
                if exp_acc < EXP_SATURATE * 2 {
                    exp_acc = exp_acc * 10 + dig;
                }
                j += 1;
            }
            let exp_acc = exp_acc.min(EXP_SATURATE);
            dec_exp += if exp_neg { -exp_acc } else { exp_acc };
            end = j;
        }
    }

    let dec_exp = dec_exp.clamp(i64::from(i32::MIN / 2), i64::from(i32::MAX / 2)) as i32;

    Lexed::Number(ParseResult {
        mnt,
        eom,
        last_dig,
        dot,
        dec_exp,
        sign,
        end,
    })
}
