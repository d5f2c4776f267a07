//! Argument parsing shared by the command-line front ends.  Not every
//! binary uses every helper.
#![allow(dead_code)]

use clap::ArgMatches;
use num::Complex;
use std::str::FromStr;

/// Split `s` at the first `separator` and parse both halves.
pub fn parse_pair<T: FromStr>(s: &str, separator: char) -> Option<(T, T)> {
    let index = s.find(separator)?;
    let (left, right) = (&s[..index], &s[index + separator.len_utf8()..]);
    match (left.parse(), right.parse()) {
        (Ok(l), Ok(r)) => Some((l, r)),
        _ => None,
    }
}

/// `re,im` as a complex number.
pub fn parse_complex(s: &str) -> Option<Complex<f64>> {
    parse_pair(s, ',').map(|(re, im)| Complex::new(re, im))
}

/// A clap validator for `parse_pair`.
pub fn validate_pair<T: FromStr>(s: &str, separator: char, err: &str) -> Result<(), String> {
    parse_pair::<T>(s, separator)
        .map(|_| ())
        .ok_or_else(|| err.to_string())
}

/// A clap validator for a single value.
pub fn validate<T: FromStr>(s: &str, err: &str) -> Result<(), String> {
    s.parse::<T>().map(|_| ()).map_err(|_| err.to_string())
}

/// A clap validator for a value within `low..=high`.
pub fn validate_range<T: FromStr + Ord>(
    s: &str,
    low: T,
    high: T,
    nan_err: &str,
    range_err: &str,
) -> Result<(), String> {
    match s.parse::<T>() {
        Ok(ref v) if *v >= low && *v <= high => Ok(()),
        Ok(_) => Err(range_err.to_string()),
        Err(_) => Err(nan_err.to_string()),
    }
}

/// The already-validated value of argument `name`.
pub fn value<T: FromStr>(matches: &ArgMatches, name: &str) -> T {
    match matches.value_of(name).map(T::from_str) {
        Some(Ok(v)) => v,
        _ => panic!("Could not parse {}", name),
    }
}
