//! Natural ("human") string ordering.
//!
//! Runs of ASCII digits compare by numeric magnitude, everything else compares
//! character by character. Strings that tie under those rules (`"01"` vs `"1"`)
//! fall back to ordinal order, so the result is a total order and equal only
//! for identical strings.

use std::cmp::Ordering;
use std::iter::Peekable;
use std::str::Chars;

/// Compare two strings in natural order: `".NET 9.0" < ".NET 10.0"`.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = a.chars().peekable();
    let mut right = b.chars().peekable();

    loop {
        let (ca, cb) = match (left.peek().copied(), right.peek().copied()) {
            (None, None) => return a.cmp(b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(ca), Some(cb)) => (ca, cb),
        };

        if ca.is_ascii_digit() && cb.is_ascii_digit() {
            let da = take_digits(&mut left);
            let db = take_digits(&mut right);
            match compare_digit_runs(&da, &db) {
                Ordering::Equal => continue,
                other => return other,
            }
        }

        match ca.cmp(&cb) {
            Ordering::Equal => {
                left.next();
                right.next();
            }
            other => return other,
        }
    }
}

fn take_digits(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(c) = chars.next_if(char::is_ascii_digit) {
        run.push(c);
    }
    run
}

/// Compare two digit runs by value without parsing, so arbitrarily long runs
/// never overflow.
fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
