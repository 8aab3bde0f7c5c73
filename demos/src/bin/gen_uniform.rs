//! Generator 1 (§6.2): random uniformly distributed finite `f64`
//! values, one per line as `<tie> <hex pattern> <17-digit decimal>`.
//!
//! Grounded in `examples/original_source/big/gen_test1.cpp`: that
//! generator draws a raw 64-bit pattern and folds it into the finite
//! range by scaling against `DBL_MAX`'s bit pattern. Here it is simpler
//! to draw a raw pattern and clear one exponent bit whenever it would
//! otherwise land on `inf`/`nan`, which is equivalent for the purpose
//! of generating "some finite value from most of the exponent range"
//! and avoids reimplementing the C version's 128-bit scaling trick.

#[path = "../common.rs"]
mod common;

use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

fn main() {
    let mut args = std::env::args().skip(1);
    let count: u64 = args.next().and_then(|a| a.parse().ok()).unwrap_or(100_000);
    let seed: u64 = args.next().and_then(|a| a.parse().ok()).unwrap_or(1);

    let mut rng = StdRng::seed_from_u64(seed);
    println!("N");
    for _ in 0..count {
        let mut bits: u64 = rng.gen();
        if (bits >> 52) & 0x7ff == 0x7ff {
            // Land in the finite range: clear the top exponent bit so
            // the biased exponent can no longer be all-ones.
            bits &= !(1u64 << 62);
        }
        let value = f64::from_bits(bits);
        let vector = common::Vector {
            tie: ' ',
            bits,
            decimal: std::format!("{:.17e}", value),
        };
        println!("{vector}");
    }
}
