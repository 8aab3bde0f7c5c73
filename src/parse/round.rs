//! Rounder (§4.3) and directed-rounding-mode translation (§4.5).
//!
//! Transcribes `ldexp_u` from
//! `examples/original_source/big/my_strtod99.c`: given a normalized
//! 56-bit mantissa (53 data bits, 2 guard bits, 1 sticky bit) and a
//! binary exponent, produces the final 64-bit IEEE pattern.

/// The ambient IEEE rounding mode requested by the caller.
///
/// There is no process-wide floating-point environment in Rust the way
/// there is in C (`fegetround`); callers pass the mode explicitly, as
/// recommended by §9 ("do not expose the platform's rounding-mode-query
/// API in the call signature; read it once at function entry" — here
/// "entry" is simply the function argument).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundingMode {
    /// Round to nearest, ties to even. The default and by far the most
    /// common mode.
    #[default]
    ToNearest,
    /// Round toward positive infinity.
    Upward,
    /// Round toward negative infinity.
    Downward,
    /// Round toward zero (truncate).
    TowardZero,
}

/// The three internal rounding behaviors the rounder and comparator
/// actually implement, after the sign-dependent translation of §4.5.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Internal {
    ToNearest,
    Upward,
    TowardZero,
}

impl RoundingMode {
    /// Translates a directed mode by sign per §4.5, so downstream code
    /// can ignore sign entirely.
    pub(crate) fn resolve(self, sign: bool) -> Internal {
        match self {
            RoundingMode::ToNearest => Internal::ToNearest,
            RoundingMode::TowardZero => Internal::TowardZero,
            RoundingMode::Downward => {
                if sign {
                    Internal::Upward
                } else {
                    Internal::TowardZero
                }
            }
            RoundingMode::Upward => {
                if sign {
                    Internal::TowardZero
                } else {
                    Internal::Upward
                }
            }
        }
    }
}

const INF_PATTERN: u64 = 2047u64 << 52;

/// Rounds a normalized 56-bit mantissa (`m56`, top bit of the 56 set)
/// with associated binary exponent `bin_exp` (such that the exact value
/// is `m56 / 2^55 * 2^bin_exp`) to the nearest representable `f64`
/// pattern under `mode`.
///
/// `bin_exp` here already has the same meaning as `be` in the
/// reference: it is the exponent of the *unit* bit of `m56`, i.e. this
/// function adds the fixed biases internally.
pub(crate) fn round_to_pattern(m56: u64, bin_exp: i32, mode: Internal) -> u64 {
    // biased exponent; +64 accounts for m56's implicit unit bit sitting
    // at position 63 of a hypothetical 64-bit integer mantissa.
    let mut be = bin_exp + 1023 + 64 + 63;
    if be > 2046 {
        return INF_PATTERN;
    }

    let mut mnt = m56 >> 3; // isolate the 53 data bits (+ implicit leading 1)
    let mut mnt_bits: i32 = 53 + 8;
    if be < 1 {
        let rsh = 1 - be;
        mnt_bits -= rsh;
        be = 0;
        if mnt_bits < 0 {
            return if mode == Internal::Upward { 1 } else { 0 };
        }
        mnt >>= rsh;
    }

    let tail = m56 << mnt_bits; // bits shifted away from the data field
    let mut res = mnt & ((u64::MAX) >> 12); // strip the implicit leading 1
    res |= (be as u64) << 52;
    match mode {
        Internal::ToNearest => {
            let tie_to_even = tail | (mnt & 1);
            if tie_to_even > (1u64 << 63) {
                res += 1;
            }
        }
        Internal::Upward => {
            if tail != 0 {
                res += 1;
            }
        }
        Internal::TowardZero => {}
    }
    res
}
