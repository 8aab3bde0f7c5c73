//! Approximate multiplier (§4.2): the fast path. Scales the accumulated
//! significand by a 128/192-bit approximation of `10^decExp` and
//! produces a lower and an upper 56-bit mantissa estimate; if both
//! round to the same final pattern the result is final, otherwise the
//! caller must fall back to the exact comparator (§4.4).
//!
//! Transcribes the `ie`/`iH`/`iL` table indexing and the three-word
//! (`m2:m1:m0`) running product from
//! `examples/original_source/big/my_strtod99.c`.

use super::round::{round_to_pattern, Internal};
use super::tables::{TAB1, TAB28};

/// Either a result that is already final, or an estimate that must be
/// disambiguated by the exact comparator.
pub(crate) enum FastResult {
    /// The fast path is conclusive; this is the final pattern (sign not
    /// yet applied).
    Definite(u64),
    /// The fast path could not decide. `candidate` is the pattern that
    /// the exact comparator must be run against (derived from the lower
    /// estimate, possibly already renormalized by one bit, matching the
    /// reference implementation).
    Ambiguous { candidate: u64 },
}

const INF_PATTERN: u64 = 2047u64 << 52;

/// Multiplies a 128-bit value (`hi:lo`) by a 64-bit scalar `y`, yielding
/// a 192-bit product as three 64-bit words `(hi2, mid, lo2)`.
fn mul_wide_by_u64(hi: u64, lo: u64, y: u64) -> (u64, u64, u64) {
    let lo_prod = u128::from(lo) * u128::from(y);
    let carry = (lo_prod >> 64) as u64;
    let lo2 = lo_prod as u64;
    let hi_prod = u128::from(hi) * u128::from(y) + u128::from(carry);
    let mid = hi_prod as u64;
    let hi2 = (hi_prod >> 64) as u64;
    (hi2, mid, lo2)
}

/// Runs the fast path for `decExp` in `[-342, 308]` (the caller is
/// responsible for the `mnt == 0`, overflow and underflow shortcuts of
/// §4.2's "Shortcuts taken before invocation").
pub(crate) fn run(mnt: u64, last_dig_present: bool, dec_exp: i32, mode: Internal) -> FastResult {
    let ie = dec_exp + 13 * 28;
    let i_h = (ie / 28) as usize;
    let i_l = (ie % 28) as usize;

    let mnt_l = mnt;
    let mnt_u = mnt_l + u64::from(last_dig_present);

    let prod_l = u128::from(mnt_l) * u128::from(TAB1[i_l]);
    let prod_u = u128::from(mnt_u) * u128::from(TAB1[i_l]);
    let mut m2l = (prod_l >> 64) as u64;
    let mut m1l = prod_l as u64;
    let mut m2u = (prod_u >> 64) as u64;
    let mut m1u = prod_u as u64;

    let mut be = i_l as i32;
    let mut m0l: u64 = 0;
    let mut m0u: u64 = 0;

    if i_h != 13 {
        be += (((i_h as i32 - 13) * 24_383_059) >> 18) + 1;
        let x28 = TAB28[i_h];

        let (h, m, l) = mul_wide_by_u64(m2l, m1l, x28);
        m2l = h;
        m1l = m;
        m0l = l;

        let (h, m, l) = mul_wide_by_u64(m2u, m1u, x28 + 1);
        m2u = h;
        m1u = m;
        m0u = l;

        if m2u == 0 {
            be -= 64;
            m2l = m1l;
            m1l = m0l;
            m0l = 0;
            m2u = m1u;
            m1u = m0u;
            m0u = 0;
        }
    }

    if m2u == 0 {
        be -= 64;
        m2l = m1l;
        m1l = 0;
        m2u = m1u;
        m1u = 0;
    }

    let lsh = m2u.leading_zeros() as i32;
    if lsh != 0 {
        m2l = (m2l << lsh) | (m1l >> (64 - lsh));
        m1l <<= lsh;
        m2u = (m2u << lsh) | (m1u >> (64 - lsh));
        m1u <<= lsh;
    }
    be -= lsh;

    // pack to 56 bits (53 data + 2 guard + 1 sticky), sticky bit in the LSB
    m2u = (m2u >> 8) | u64::from(((m2u & 255) | m1u | m0u) != 0);
    m2l = (m2l >> 8) | u64::from(((m2l & 255) | m1l | m0l) != 0);

    let mut res;
    let mut res_u = 0u64;
    let mut m2 = m2u;
    loop {
        res = round_to_pattern(m2, be, mode);
        if m2 == m2l {
            break;
        }
        res_u = res;
        const BIT55: u64 = 1 << 55;
        if m2l < BIT55 {
            m2l += m2l;
            be -= 1;
        }
        m2 = m2l;
    }

    if m2u != m2l && res != res_u {
        FastResult::Ambiguous { candidate: res }
    } else {
        FastResult::Definite(res)
    }
}

/// Handles the definite overflow/underflow shortcuts of §4.2, returning
/// `Some(magnitude_pattern)` (sign not yet applied) when no table
/// lookup is needed at all.
pub(crate) fn shortcut(mnt: u64, dec_exp: i32, mode: Internal) -> Option<u64> {
    if mnt == 0 {
        return Some(0);
    }
    if dec_exp > 308 {
        return Some(INF_PATTERN);
    }
    if dec_exp < -342 {
        return Some(if mode == Internal::Upward { 1 } else { 0 });
    }
    None
}
