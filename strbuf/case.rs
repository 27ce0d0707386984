//! Per-character case folding.
//!
//! Case conversion and case-insensitive comparison both go through a
//! [`CaseMap`], so hosts with locale-specific rules can inject their own
//! mapping instead of the default Unicode one.

/// A single-character case mapping.
///
/// The mapping must be 1:1: in-place conversion rewrites each position of
/// the buffer individually, so a character whose full case mapping would
/// expand (`'ß'` → `"SS"`) has to map to itself instead.
pub trait CaseMap {
  fn to_lower(&self, ch: char) -> char;
  fn to_upper(&self, ch: char) -> char;
}

/// The single-character subset of the Unicode case mapping.
///
/// Characters with multi-character expansions are left unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unicode;

impl CaseMap for Unicode {
  fn to_lower(&self, ch: char) -> char {
    let mut mapped = ch.to_lowercase();
    match (mapped.next(), mapped.next()) {
      (Some(lower), None) => lower,
      _ => ch,
    }
  }

  fn to_upper(&self, ch: char) -> char {
    let mut mapped = ch.to_uppercase();
    match (mapped.next(), mapped.next()) {
      (Some(upper), None) => upper,
      _ => ch,
    }
  }
}

/// ASCII-only folding; everything outside `a..=z` / `A..=Z` is untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ascii;

impl CaseMap for Ascii {
  fn to_lower(&self, ch: char) -> char {
    ch.to_ascii_lowercase()
  }

  fn to_upper(&self, ch: char) -> char {
    ch.to_ascii_uppercase()
  }
}

/// Character equality with optional case folding, as used by the
/// case-insensitive search paths.
#[inline]
pub(crate) fn fold_eq(a: char, b: char, ignore_case: bool) -> bool {
  if ignore_case {
    Unicode.to_lower(a) == Unicode.to_lower(b)
  } else {
    a == b
  }
}
