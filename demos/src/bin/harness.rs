//! Test harness (§6.3): reads a generator output file, resolves the
//! rounding mode from its one-character header line, converts each
//! decimal vector, and compares the resulting bit pattern against the
//! reference.
//!
//! Grounded in `examples/original_source/big/clib_test.cpp`, which
//! drives the same kind of file against the reference `strtod`
//! implementation and tallies mismatches.

use std::io::BufRead;

use dec2flt64::RoundingMode;

fn main() {
    let path = std::env::args().nth(1).unwrap_or_else(|| {
        eprintln!("usage: harness <vector-file>");
        std::process::exit(2);
    });
    let file = std::fs::File::open(&path).unwrap_or_else(|e| {
        eprintln!("cannot open {path}: {e}");
        std::process::exit(2);
    });
    let mut lines = std::io::BufReader::new(file).lines();

    let header = lines
        .next()
        .expect("file has a header line")
        .expect("header line is valid UTF-8");
    let mut mode = match header.trim() {
        "N" => RoundingMode::ToNearest,
        "D" => RoundingMode::Downward,
        "U" => RoundingMode::Upward,
        "Z" => RoundingMode::TowardZero,
        other => {
            eprintln!("unrecognized rounding-mode header {other:?}");
            std::process::exit(2);
        }
    };

    let mut total = 0u64;
    let mut failures = 0u64;
    let mut tolerated_odd_ties = 0u64;

    for line in lines {
        let line = line.expect("vector line is valid UTF-8");
        if line.is_empty() {
            continue;
        }
        // A bare header line mid-stream switches the active mode for
        // all following vectors (useful for concatenated files).
        if let Some(new_mode) = parse_header(&line) {
            mode = new_mode;
            continue;
        }

        let (tie, rest) = line.split_at(1);
        let tie = tie.chars().next().unwrap();
        let rest = rest.trim_start();
        let (hex, decimal) = rest.split_once(' ').expect("line has hex and decimal parts");
        let reference = u64::from_str_radix(hex, 16).expect("valid hex pattern");

        total += 1;
        let got = dec2flt64::parse(decimal.as_bytes(), mode)
            .unwrap_or_else(|e| panic!("vector {decimal:?} failed to parse: {e}"))
            .to_bits();

        if got != reference {
            let tolerated = mode == RoundingMode::ToNearest && tie != ' ' && (reference & 1) != 0;
            if tolerated {
                tolerated_odd_ties += 1;
            } else {
                failures += 1;
                eprintln!(
                    "MISMATCH: {decimal:?} expected {reference:016x} got {got:016x} (tie={tie})"
                );
            }
        }
    }

    println!(
        "{total} vectors, {failures} failures, {tolerated_odd_ties} tolerated odd-direction ties"
    );
    if failures > 0 {
        std::process::exit(1);
    }
}

fn parse_header(line: &str) -> Option<RoundingMode> {
    match line.trim() {
        "N" => Some(RoundingMode::ToNearest),
        "D" => Some(RoundingMode::Downward),
        "U" => Some(RoundingMode::Upward),
        "Z" => Some(RoundingMode::TowardZero),
        _ => None,
    }
}
