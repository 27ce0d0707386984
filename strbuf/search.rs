//! Forward and backward scans over a validated `(start, count)` window.
//!
//! These are the naive O(n·m) engines behind every `index_of*` and
//! `last_index_of*` operation. Validation lives here too, so the public
//! surface in [`crate::ext`] can reject a bad window before any indexing
//! happens. Forward windows cover `[start, start + count)`; backward
//! windows are anchored at `start` and cover `[start - count + 1, start]`.

use crate::{
  buffer::CharBuffer,
  case::fold_eq,
  error::{Error, Result},
};

/// A forward start is valid anywhere in `[0, len]`; `len` itself denotes
/// the empty window at the end of the buffer.
pub(crate) fn check_forward_start(len: usize, start: usize) -> Result<()> {
  if start > len {
    return Err(Error::StartOutOfBounds { start, len });
  }
  Ok(())
}

pub(crate) fn check_forward_window(len: usize, start: usize, count: usize) -> Result<()> {
  check_forward_start(len, start)?;
  if count > len - start {
    return Err(Error::WindowOutOfBounds { start, count, len });
  }
  Ok(())
}

/// A backward start is valid in `[0, len - 1]`, or only `0` when the
/// buffer is empty.
pub(crate) fn check_backward_start(len: usize, start: usize) -> Result<()> {
  if start > len.saturating_sub(1) {
    return Err(Error::StartOutOfBounds { start, len });
  }
  Ok(())
}

pub(crate) fn check_backward_window(len: usize, start: usize, count: usize) -> Result<()> {
  check_backward_start(len, start)?;
  if count > start + 1 {
    return Err(Error::WindowUnderflow { start, count });
  }
  Ok(())
}

/// First position of `value` in `[start, start + count)`.
pub(crate) fn find_char<B>(buf: &B, value: char, start: usize, count: usize) -> Option<usize>
where
  B: CharBuffer + ?Sized,
{
  (start..start + count).find(|&i| buf.char_at(i) == value)
}

/// First position in `[start, start + count)` holding any member of
/// `any_of`. An empty set never matches.
pub(crate) fn find_any<B>(buf: &B, any_of: &[char], start: usize, count: usize) -> Option<usize>
where
  B: CharBuffer + ?Sized,
{
  (start..start + count).find(|&i| any_of.contains(&buf.char_at(i)))
}

/// Last position of `value` in the backward window anchored at `start`.
pub(crate) fn rfind_char<B>(buf: &B, value: char, start: usize, count: usize) -> Option<usize>
where
  B: CharBuffer + ?Sized,
{
  (start + 1 - count..=start).rev().find(|&i| buf.char_at(i) == value)
}

pub(crate) fn rfind_any<B>(buf: &B, any_of: &[char], start: usize, count: usize) -> Option<usize>
where
  B: CharBuffer + ?Sized,
{
  (start + 1 - count..=start)
    .rev()
    .find(|&i| any_of.contains(&buf.char_at(i)))
}

/// First occurrence of `pattern` starting in `[start, start + count)`.
///
/// Candidate positions run through `start + count - m` inclusive, the last
/// position where the whole pattern still fits inside the window. The
/// empty pattern matches immediately at `start`.
pub(crate) fn find_pattern<B>(
  buf: &B,
  pattern: &[char],
  start: usize,
  count: usize,
  ignore_case: bool,
) -> Option<usize>
where
  B: CharBuffer + ?Sized,
{
  if pattern.is_empty() {
    return Some(start);
  }
  let m = pattern.len();
  if count < m {
    return None;
  }

  for i in start..=start + count - m {
    if fold_eq(buf.char_at(i), pattern[0], ignore_case) {
      let mut matched = 1;
      while matched < m && fold_eq(buf.char_at(i + matched), pattern[matched], ignore_case) {
        matched += 1;
      }
      if matched == m {
        return Some(i);
      }
    }
  }

  None
}

/// Last occurrence of `pattern` whose final character lies in the backward
/// window anchored at `start`.
///
/// The scan walks candidate match *ends* descending from `start` and
/// compares the pattern in reverse; the returned index is the position of
/// the match's first character.
pub(crate) fn rfind_pattern<B>(
  buf: &B,
  pattern: &[char],
  start: usize,
  count: usize,
  ignore_case: bool,
) -> Option<usize>
where
  B: CharBuffer + ?Sized,
{
  if pattern.is_empty() {
    return Some(start);
  }
  let m = pattern.len();
  if count < m {
    return None;
  }

  // Lowest usable match end: keeps the match start inside the window.
  // `count <= start + 1` is guaranteed by validation, so this cannot
  // underflow.
  let low = start + m - count;
  let mut i = start;
  loop {
    if fold_eq(buf.char_at(i), pattern[m - 1], ignore_case) {
      let mut matched = 1;
      while matched < m && fold_eq(buf.char_at(i - matched), pattern[m - 1 - matched], ignore_case)
      {
        matched += 1;
      }
      if matched == m {
        return Some(i + 1 - m);
      }
    }
    if i == low {
      return None;
    }
    i -= 1;
  }
}

#[cfg(test)]
mod test {
  use super::*;

  fn buf(text: &str) -> Vec<char> {
    text.chars().collect()
  }

  fn pat(text: &str) -> Vec<char> {
    text.chars().collect()
  }

  #[test]
  fn find_char_respects_the_window() {
    let b = buf("abcabc");
    assert_eq!(find_char(&b, 'a', 0, 6), Some(0));
    assert_eq!(find_char(&b, 'a', 1, 5), Some(3));
    assert_eq!(find_char(&b, 'a', 1, 2), None);
    assert_eq!(find_char(&b, 'z', 0, 6), None);
    assert_eq!(find_char(&b, 'a', 0, 0), None);
  }

  #[test]
  fn rfind_char_scans_descending() {
    let b = buf("abcabc");
    assert_eq!(rfind_char(&b, 'a', 5, 6), Some(3));
    assert_eq!(rfind_char(&b, 'a', 2, 3), Some(0));
    assert_eq!(rfind_char(&b, 'c', 1, 2), None);
    assert_eq!(rfind_char(&b, 'a', 5, 0), None);
  }

  #[test]
  fn find_any_matches_set_members() {
    let b = buf("one two");
    assert_eq!(find_any(&b, &[' ', 'w'], 0, 7), Some(3));
    assert_eq!(find_any(&b, &['x', 'y'], 0, 7), None);
    assert_eq!(find_any(&b, &[], 0, 7), None);
  }

  #[test]
  fn rfind_any_matches_set_members() {
    let b = buf("one two");
    assert_eq!(rfind_any(&b, &['o', 'n'], 6, 7), Some(6));
    assert_eq!(rfind_any(&b, &['o', 'n'], 4, 5), Some(1));
    assert_eq!(rfind_any(&b, &[], 6, 7), None);
  }

  #[test]
  fn find_pattern_basic() {
    let b = buf("Hello, world!");
    assert_eq!(find_pattern(&b, &pat("world"), 0, 13, false), Some(7));
    assert_eq!(find_pattern(&b, &pat("World"), 0, 13, false), None);
    assert_eq!(find_pattern(&b, &pat("World"), 0, 13, true), Some(7));
  }

  #[test]
  fn find_pattern_fits_exactly_at_the_window_tail() {
    // A match ending flush with the window must be found; the candidate
    // range is start..=start + count - m.
    let b = buf("ABCABC");
    assert_eq!(find_pattern(&b, &pat("ABC"), 3, 3, false), Some(3));
    assert_eq!(find_pattern(&b, &pat("ABC"), 1, 5, false), Some(3));
    assert_eq!(find_pattern(&b, &pat("ABCABC"), 0, 6, false), Some(0));
  }

  #[test]
  fn find_pattern_longer_than_window() {
    let b = buf("abc");
    assert_eq!(find_pattern(&b, &pat("abcd"), 0, 3, false), None);
    assert_eq!(find_pattern(&b, &pat("bc"), 2, 1, false), None);
  }

  #[test]
  fn find_pattern_empty_matches_at_start() {
    let b = buf("abc");
    assert_eq!(find_pattern(&b, &[], 2, 1, false), Some(2));
    assert_eq!(rfind_pattern(&b, &[], 1, 2, false), Some(1));
  }

  #[test]
  fn rfind_pattern_returns_first_char_of_match() {
    let b = buf("ABCABC");
    assert_eq!(rfind_pattern(&b, &pat("ABC"), 5, 6, false), Some(3));
    assert_eq!(rfind_pattern(&b, &pat("ABC"), 2, 3, false), Some(0));
    assert_eq!(rfind_pattern(&b, &pat("CA"), 5, 6, false), Some(2));
  }

  #[test]
  fn rfind_pattern_window_too_small() {
    let b = buf("ABCABC");
    assert_eq!(rfind_pattern(&b, &pat("ABC"), 1, 2, false), None);
    // A "BC" ending inside the window but starting outside it does not
    // count; the whole match has to fit.
    assert_eq!(rfind_pattern(&b, &pat("BC"), 4, 3, false), None);
    assert_eq!(rfind_pattern(&b, &pat("BC"), 4, 4, false), Some(1));
  }

  #[test]
  fn rfind_pattern_ignore_case() {
    let b = buf("AbcaBc");
    assert_eq!(rfind_pattern(&b, &pat("ABC"), 5, 6, true), Some(3));
    assert_eq!(rfind_pattern(&b, &pat("abc"), 2, 3, true), Some(0));
  }

  #[test]
  fn forward_window_validation() {
    assert_eq!(check_forward_start(6, 6), Ok(()));
    assert_eq!(
      check_forward_start(6, 7),
      Err(Error::StartOutOfBounds { start: 7, len: 6 })
    );
    assert_eq!(check_forward_window(6, 2, 4), Ok(()));
    assert_eq!(
      check_forward_window(6, 2, 5),
      Err(Error::WindowOutOfBounds { start: 2, count: 5, len: 6 })
    );
    // Empty buffer: only the empty window at 0 is valid.
    assert_eq!(check_forward_window(0, 0, 0), Ok(()));
    assert_eq!(
      check_forward_window(0, 1, 0),
      Err(Error::StartOutOfBounds { start: 1, len: 0 })
    );
  }

  #[test]
  fn backward_window_validation() {
    assert_eq!(check_backward_start(6, 5), Ok(()));
    assert_eq!(
      check_backward_start(6, 6),
      Err(Error::StartOutOfBounds { start: 6, len: 6 })
    );
    assert_eq!(check_backward_start(0, 0), Ok(()));
    assert_eq!(check_backward_window(6, 5, 6), Ok(()));
    assert_eq!(
      check_backward_window(6, 2, 4),
      Err(Error::WindowUnderflow { start: 2, count: 4 })
    );
  }
}
