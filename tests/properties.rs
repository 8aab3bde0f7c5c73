//! End-to-end exercise of the testable properties in spec §8, plus the
//! concrete scenario table from the same section.

use dec2flt64::{parse, parse_partial, RoundingMode};

fn nearest(s: &str) -> f64 {
    parse(s.as_bytes(), RoundingMode::ToNearest).unwrap()
}

#[test]
fn concrete_scenarios_from_spec_table() {
    let cases: &[(&str, u64, usize)] = &[
        ("1", 0x3FF0000000000000, 1),
        ("  -0.5e+1 ", 0xC014000000000000, 9),
        ("1.7976931348623157e308", 0x7FEFFFFFFFFFFFFF, 22),
        ("5e-324", 0x0000000000000001, 6),
        ("2.2250738585072014e-308", 0x0010000000000000, 23),
        ("0.1", 0x3FB999999999999A, 3),
        ("1e400", 0x7FF0000000000000, 5),
        ("abc", 0x0000000000000000, 0),
    ];
    for &(input, pattern, end) in cases {
        let (value, consumed) = parse_partial(input.as_bytes(), RoundingMode::ToNearest);
        assert_eq!(value.to_bits(), pattern, "mismatch for {input:?}");
        assert_eq!(consumed, end, "end-pointer mismatch for {input:?}");
    }
}

#[test]
fn nan_literal_has_the_quiet_nan_pattern() {
    let (value, consumed) = parse_partial(b"+NaN", RoundingMode::ToNearest);
    assert_eq!(value.to_bits(), 0x7FFFFFFFFFFFFFFF);
    assert_eq!(consumed, 4);
}

#[test]
fn round_trip_printable_direction() {
    // §8 property 1: printing a finite f64 at 17 significant digits and
    // converting back must reproduce it exactly.
    let samples = [
        0.0,
        -0.0,
        1.0,
        core::f64::consts::PI,
        1.7976931348623157e308,
        5e-324,
        2.2250738585072014e-308,
        123456789.123456,
        -9.999999999999999e-10,
    ];
    for &x in &samples {
        let printed = std::format!("{:e}", x);
        let parsed = nearest(&printed);
        assert_eq!(parsed.to_bits(), x.to_bits(), "round-trip failed for {x}");
    }
}

#[test]
fn monotonicity_over_lexicographic_prefixes() {
    // §8 property 3: successively longer (hence lexicographically
    // larger, decimal) strings convert to non-decreasing values.
    let strings = ["1", "12", "123", "1234", "12345", "123456"];
    let mut prev = f64::NEG_INFINITY;
    for s in strings {
        let v = nearest(s);
        assert!(v >= prev, "{s} ({v}) is not >= previous ({prev})");
        prev = v;
    }
}

#[test]
fn sign_symmetry() {
    // §8 property 4.
    for s in ["1", "3.5e2", "0.1", "1.7976931348623157e308", "5e-324"] {
        let positive = nearest(s);
        let negated = nearest(&std::format!("-{s}"));
        assert_eq!(negated, -positive, "sign symmetry failed for {s}");
    }
}

#[test]
fn end_pointer_consistency() {
    // §8 property 5.
    let (_, end) = parse_partial(b"  -0.5e+1 ", RoundingMode::ToNearest);
    assert_eq!(end, 9);
    let (_, end) = parse_partial(b"1.25trailing", RoundingMode::ToNearest);
    assert_eq!(end, 4);
}

#[test]
fn identity_decimals() {
    // §8 property 6.
    assert_eq!(nearest("0").to_bits(), 0.0f64.to_bits());
    assert_eq!(nearest("-0").to_bits(), (-0.0f64).to_bits());
    assert!(nearest("inf").is_sign_positive() && nearest("inf").is_infinite());
    assert!(nearest("-infinity").is_sign_negative() && nearest("-infinity").is_infinite());
}

#[test]
fn boundary_values_round_exactly() {
    // §8 property 7.
    assert_eq!(nearest("1.7976931348623157e308"), f64::MAX);
    assert_eq!(nearest("2.2250738585072014e-308"), f64::MIN_POSITIVE);
    assert_eq!(nearest("5e-324").to_bits(), 1u64);
}

#[test]
fn midpoint_ties_to_even() {
    // §8 "midpoint property": the exact decimal midpoint between two
    // adjacent representables rounds (ties-to-even) to whichever has an
    // even low mantissa bit.
    //
    // 1.0's successor is 1.0000000000000002220446049250313080847263336181640625;
    // their exact midpoint is 1.00000000000000011102230246251565404236316680908203125.
    let midpoint = "1.00000000000000011102230246251565404236316680908203125";
    let rounded = nearest(midpoint);
    // 1.0 has mantissa 0 (even); its successor has mantissa 1 (odd).
    assert_eq!(rounded.to_bits(), 1.0f64.to_bits());
}

#[test]
fn directed_rounding_modes_differ_on_a_halfway_case() {
    let nearest = parse(b"9007199254740993", RoundingMode::ToNearest).unwrap();
    let up = parse(b"9007199254740993", RoundingMode::Upward).unwrap();
    let down = parse(b"9007199254740993", RoundingMode::Downward).unwrap();
    let toward_zero = parse(b"9007199254740993", RoundingMode::TowardZero).unwrap();
    assert_eq!(nearest.to_bits(), 9007199254740992.0f64.to_bits());
    assert_eq!(up.to_bits(), 9007199254740994.0f64.to_bits());
    assert_eq!(down.to_bits(), 9007199254740992.0f64.to_bits());
    assert_eq!(toward_zero.to_bits(), 9007199254740992.0f64.to_bits());

    let neg_up = parse(b"-9007199254740993", RoundingMode::Upward).unwrap();
    let neg_down = parse(b"-9007199254740993", RoundingMode::Downward).unwrap();
    assert_eq!(neg_up.to_bits(), (-9007199254740992.0f64).to_bits());
    assert_eq!(neg_down.to_bits(), (-9007199254740994.0f64).to_bits());
}

#[test]
fn very_long_digit_strings_stay_correctly_rounded() {
    // A long run of nines beyond the 19-digit accumulation window still
    // has to push the result up by one ULP relative to the truncated
    // value, exercising the lexer's `last_dig` tracking.
    let s = "1.000000000000000000000000000000000000000000000000000000001";
    assert!(nearest(s) > 1.0);
}

#[test]
fn length_cap_is_treated_as_structural_failure() {
    let huge = "1".repeat(100_001);
    let (value, end) = parse_partial(huge.as_bytes(), RoundingMode::ToNearest);
    assert_eq!(value, 0.0);
    assert_eq!(end, 0);
}
