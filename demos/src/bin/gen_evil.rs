//! Generator 3 (§6.2): "evil" midpoint strings, one per line as
//! `<tie> <hex pattern> <decimal>`.
//!
//! Grounded in `examples/original_source/big/gen_test3.cpp`: pick a
//! random representable `f64`, compute the exact decimal midpoint to
//! its successor, and record which side round-to-nearest-even resolves
//! the tie to. The midpoint of two adjacent dyadic values is itself an
//! exact (terminating) decimal, so it is produced here with the small
//! fixed-point bignum in `common.rs` rather than GMP.
//!
//! The reference bit pattern is the neighbor that ties-to-even selects:
//! whichever of the pair has an even low mantissa bit. Since the two
//! bit patterns are consecutive integers, exactly one of them is even,
//! so the tie-break is always deterministic and the emitted marker is
//! always `'+'` (away from zero) or `'-'` (toward zero), never `' '`.
//!
//! `'optionally perturb by a small deviation in ULP'` (§6.2) is
//! approximated here by occasionally nudging the decimal's last digit
//! by one, rather than reconstructing an exact N-ULP-off decimal; see
//! `DESIGN.md`.

#[path = "../common.rs"]
mod common;

use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

fn main() {
    let mut args = std::env::args().skip(1);
    let count: u64 = args.next().and_then(|a| a.parse().ok()).unwrap_or(100_000);
    let seed: u64 = args.next().and_then(|a| a.parse().ok()).unwrap_or(1);
    let jitter_one_in: u64 = args.next().and_then(|a| a.parse().ok()).unwrap_or(0);

    let mut rng = StdRng::seed_from_u64(seed);
    println!("N");
    for _ in 0..count {
        // Any finite, non-maximal magnitude has a successor.
        let mut bits: u64 = rng.gen::<u64>() & 0x7fff_ffff_ffff_ffff;
        if bits >= 0x7fef_ffff_ffff_ffff {
            bits = 0x7fef_ffff_ffff_ffff - 1;
        }
        let next_bits = bits + 1;

        let (m_lo, e_lo) = common::decode_magnitude(bits);
        let (m_hi, e_hi) = common::decode_magnitude(next_bits);
        let common_exp = e_lo.min(e_hi);
        let scaled_lo = m_lo << (e_lo - common_exp);
        let scaled_hi = m_hi << (e_hi - common_exp);
        let mid_mantissa = scaled_lo + scaled_hi;
        let mid_exp = common_exp - 1;

        // `next_bits` is even (picked by ties-to-even) iff `bits` is odd.
        let tie = if next_bits % 2 == 0 { '+' } else { '-' };
        let expected_bits = if next_bits % 2 == 0 { next_bits } else { bits };

        let mut decimal = common::exact_decimal_of_dyadic(mid_mantissa, mid_exp);
        if jitter_one_in > 0 && rng.gen_range(0..jitter_one_in) == 0 {
            nudge_last_digit(&mut decimal);
        }

        let vector = common::Vector { tie, bits: expected_bits, decimal };
        println!("{vector}");
    }
}

/// Increments the last decimal digit by one (with carry), used for the
/// occasional "near miss" vector (see module docs).
fn nudge_last_digit(s: &mut String) {
    let mut bytes = s.clone().into_bytes();
    for b in bytes.iter_mut().rev() {
        if b.is_ascii_digit() {
            if *b == b'9' {
                *b = b'0';
            } else {
                *b += 1;
                break;
            }
        }
    }
    *s = String::from_utf8(bytes).unwrap();
}
