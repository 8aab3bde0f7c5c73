//! Generator 2 (§6.2): `nDigits`-digit random decimal significands at a
//! random decimal exponent, one per line as
//! `<tie> <hex pattern> <decimal>`.
//!
//! Grounded in `examples/original_source/big/gen_test2.cpp`, which
//! draws an `nDigits`-digit significand and an exponent from a
//! configurable range and computes the correctly rounded reference via
//! GMP. This port uses the host's own correctly-rounded `f64` parser
//! (`str::parse::<f64>`, which is also a from-scratch correctly-rounded
//! `dec2flt` implementation) as the independent oracle instead of
//! linking GMP, so the reference pattern does not depend on the crate
//! under test. Exact midpoints are astronomically unlikely for
//! uniformly random digit strings this long, so every line is emitted
//! with a `' '` (not-a-tie) marker; see `DESIGN.md`.

#[path = "../common.rs"]
mod common;

use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

const N_DIGITS_MIN: u32 = 2;
const N_DIGITS_MAX: u32 = 800;
const DECEXP_MIN: i32 = -325;
const DECEXP_MAX: i32 = 325;

fn main() {
    let mut args = std::env::args().skip(1);
    let n_digits: u32 = args
        .next()
        .and_then(|a| a.parse().ok())
        .unwrap_or(17)
        .clamp(N_DIGITS_MIN, N_DIGITS_MAX);
    let count: u64 = args.next().and_then(|a| a.parse().ok()).unwrap_or(100_000);
    let seed: u64 = args.next().and_then(|a| a.parse().ok()).unwrap_or(1);

    let mut rng = StdRng::seed_from_u64(seed);
    println!("N");
    for _ in 0..count {
        let mut digits = String::with_capacity(n_digits as usize);
        digits.push(char::from(b'1' + rng.gen_range(0..9u8)));
        for _ in 1..n_digits {
            digits.push(char::from(b'0' + rng.gen_range(0..10u8)));
        }
        let dec_exp = rng.gen_range(DECEXP_MIN..=DECEXP_MAX);
        let decimal = std::format!("{digits}e{dec_exp}");

        let value: f64 = decimal.parse().expect("generated numeral always parses");
        let vector = common::Vector { tie: ' ', bits: value.to_bits(), decimal };
        println!("{vector}");
    }
}
