//! Title comparison used by the sorted views.
//!
//! Approximates a default collation in levels:
//! 1. primary: base letters with accents removed and case folded, so
//!    "Amélie" sits between "Alien" and "Amores Perros"
//! 2. secondary: accents, unaccented first ("Amelie" before "Amélie")
//! 3. tertiary: lowercase before uppercase
//! 4. finally raw code points, which makes the order total

use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Compare two titles for display ordering.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| accented_letters(a).cmp(accented_letters(b)))
        .then_with(|| compare_case(a, b))
        .then_with(|| a.cmp(b))
}

fn base_letters(title: &str) -> impl Iterator<Item = char> + '_ {
    title
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

// Combining marks sit above the Latin letters, so the bare spelling wins
fn accented_letters(title: &str) -> impl Iterator<Item = char> + '_ {
    title.nfd().flat_map(char::to_lowercase)
}

fn compare_case(a: &str, b: &str) -> Ordering {
    a.chars().map(case_rank).cmp(b.chars().map(case_rank))
}

fn case_rank(c: char) -> u8 {
    if c.is_uppercase() { 1 } else { 0 }
}
