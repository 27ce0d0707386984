//! The public operation surface: `string`-like queries and in-place
//! mutation for any [`CharBuffer`].
//!
//! The original overload explosion (array vs. span vs. builder parameters,
//! optional start/count) collapses into one method family per shape:
//! `index_of` takes the whole buffer, `index_of_from` a start index, and
//! `index_of_in` a full `(start, count)` window. Searches return
//! `Option<usize>` — `None` where a `-1` sentinel would be — and the
//! window-taking forms return `Result` so a bad window is rejected before
//! anything is scanned or mutated.

use std::fmt;

use crate::{
  buffer::CharBuffer,
  case::{CaseMap, Unicode, fold_eq},
  error::{Error, Result},
  search,
  trim::{self, TrimClass, TrimSide},
};

pub trait StrBufExt: CharBuffer {
  // ---
  // Forward search.

  /// Position of the first occurrence of `value`.
  fn index_of(&self, value: char) -> Option<usize> {
    search::find_char(self, value, 0, self.len())
  }

  /// Position of the first occurrence of `value` at or after `start`.
  ///
  /// `start` may equal the buffer length (an empty search window); past
  /// that it is a range violation.
  fn index_of_from(&self, value: char, start: usize) -> Result<Option<usize>> {
    search::check_forward_start(self.len(), start)?;
    Ok(search::find_char(self, value, start, self.len() - start))
  }

  /// Position of the first occurrence of `value` in `[start, start + count)`.
  fn index_of_in(&self, value: char, start: usize, count: usize) -> Result<Option<usize>> {
    search::check_forward_window(self.len(), start, count)?;
    Ok(search::find_char(self, value, start, count))
  }

  /// Position of the first character that is a member of `any_of`.
  fn index_of_any(&self, any_of: &[char]) -> Option<usize> {
    search::find_any(self, any_of, 0, self.len())
  }

  fn index_of_any_from(&self, any_of: &[char], start: usize) -> Result<Option<usize>> {
    search::check_forward_start(self.len(), start)?;
    Ok(search::find_any(self, any_of, start, self.len() - start))
  }

  fn index_of_any_in(&self, any_of: &[char], start: usize, count: usize) -> Result<Option<usize>> {
    search::check_forward_window(self.len(), start, count)?;
    Ok(search::find_any(self, any_of, start, count))
  }

  /// Position of the first occurrence of `value`.
  ///
  /// The empty pattern always matches at position 0, mirroring the
  /// conventional string semantics where every position trivially
  /// contains the empty string.
  fn index_of_str(&self, value: &str, ignore_case: bool) -> Option<usize> {
    if value.is_empty() {
      return Some(0);
    }
    let pattern: Vec<char> = value.chars().collect();
    search::find_pattern(self, &pattern, 0, self.len(), ignore_case)
  }

  /// Position of the first occurrence of `value` at or after `start`.
  /// The empty pattern matches at `start` itself.
  fn index_of_str_from(&self, value: &str, start: usize, ignore_case: bool) -> Result<Option<usize>> {
    search::check_forward_start(self.len(), start)?;
    if value.is_empty() {
      return Ok(Some(start));
    }
    let pattern: Vec<char> = value.chars().collect();
    Ok(search::find_pattern(self, &pattern, start, self.len() - start, ignore_case))
  }

  fn index_of_str_in(
    &self,
    value: &str,
    start: usize,
    count: usize,
    ignore_case: bool,
  ) -> Result<Option<usize>> {
    search::check_forward_window(self.len(), start, count)?;
    if value.is_empty() {
      return Ok(Some(start));
    }
    let pattern: Vec<char> = value.chars().collect();
    Ok(search::find_pattern(self, &pattern, start, count, ignore_case))
  }

  // ---
  // Backward search.

  /// Position of the last occurrence of `value`.
  fn last_index_of(&self, value: char) -> Option<usize> {
    if self.is_empty() {
      return None;
    }
    search::rfind_char(self, value, self.len() - 1, self.len())
  }

  /// Position of the last occurrence of `value` at or before `start`.
  fn last_index_of_from(&self, value: char, start: usize) -> Result<Option<usize>> {
    search::check_backward_start(self.len(), start)?;
    if self.is_empty() {
      return Ok(None);
    }
    Ok(search::rfind_char(self, value, start, start + 1))
  }

  /// Position of the last occurrence of `value` in the backward window
  /// `[start - count + 1, start]`.
  fn last_index_of_in(&self, value: char, start: usize, count: usize) -> Result<Option<usize>> {
    search::check_backward_window(self.len(), start, count)?;
    if self.is_empty() {
      return Ok(None);
    }
    Ok(search::rfind_char(self, value, start, count))
  }

  fn last_index_of_any(&self, any_of: &[char]) -> Option<usize> {
    if self.is_empty() {
      return None;
    }
    search::rfind_any(self, any_of, self.len() - 1, self.len())
  }

  fn last_index_of_any_from(&self, any_of: &[char], start: usize) -> Result<Option<usize>> {
    search::check_backward_start(self.len(), start)?;
    if self.is_empty() {
      return Ok(None);
    }
    Ok(search::rfind_any(self, any_of, start, start + 1))
  }

  fn last_index_of_any_in(
    &self,
    any_of: &[char],
    start: usize,
    count: usize,
  ) -> Result<Option<usize>> {
    search::check_backward_window(self.len(), start, count)?;
    if self.is_empty() {
      return Ok(None);
    }
    Ok(search::rfind_any(self, any_of, start, count))
  }

  /// Position of the start of the last occurrence of `value`.
  ///
  /// The empty pattern matches at the last position (`len - 1`), or at 0
  /// when the buffer is empty.
  fn last_index_of_str(&self, value: &str, ignore_case: bool) -> Option<usize> {
    if value.is_empty() {
      return Some(self.len().saturating_sub(1));
    }
    if self.is_empty() {
      return None;
    }
    let pattern: Vec<char> = value.chars().collect();
    search::rfind_pattern(self, &pattern, self.len() - 1, self.len(), ignore_case)
  }

  /// Position of the start of the last occurrence of `value` whose final
  /// character lies at or before `start`.
  fn last_index_of_str_from(
    &self,
    value: &str,
    start: usize,
    ignore_case: bool,
  ) -> Result<Option<usize>> {
    search::check_backward_start(self.len(), start)?;
    if value.is_empty() {
      return Ok(Some(start));
    }
    if self.is_empty() {
      return Ok(None);
    }
    let pattern: Vec<char> = value.chars().collect();
    Ok(search::rfind_pattern(self, &pattern, start, start + 1, ignore_case))
  }

  fn last_index_of_str_in(
    &self,
    value: &str,
    start: usize,
    count: usize,
    ignore_case: bool,
  ) -> Result<Option<usize>> {
    search::check_backward_window(self.len(), start, count)?;
    if value.is_empty() {
      return Ok(Some(start));
    }
    if self.is_empty() {
      return Ok(None);
    }
    let pattern: Vec<char> = value.chars().collect();
    Ok(search::rfind_pattern(self, &pattern, start, count, ignore_case))
  }

  // ---
  // Boolean wrappers.

  /// Whether the buffer starts with `value`. A direct O(m) head compare,
  /// not a search; the empty pattern always matches.
  fn starts_with(&self, value: &str, ignore_case: bool) -> bool {
    let len = self.len();
    let mut i = 0;
    for ch in value.chars() {
      if i >= len || !fold_eq(self.char_at(i), ch, ignore_case) {
        return false;
      }
      i += 1;
    }
    true
  }

  /// Whether the buffer ends with `value`; symmetric from the tail.
  fn ends_with(&self, value: &str, ignore_case: bool) -> bool {
    let m = value.chars().count();
    let len = self.len();
    if m > len {
      return false;
    }
    let mut i = len - m;
    for ch in value.chars() {
      if !fold_eq(self.char_at(i), ch, ignore_case) {
        return false;
      }
      i += 1;
    }
    true
  }

  fn contains_str(&self, value: &str, ignore_case: bool) -> bool {
    self.index_of_str(value, ignore_case).is_some()
  }

  fn contains_char(&self, value: char) -> bool {
    self.index_of(value).is_some()
  }

  // ---
  // Trim.

  /// Strips leading and trailing whitespace in place.
  fn trim(&mut self) {
    trim::trim_in_place(self, TrimSide::Both, TrimClass::Whitespace);
  }

  fn trim_start(&mut self) {
    trim::trim_in_place(self, TrimSide::Start, TrimClass::Whitespace);
  }

  fn trim_end(&mut self) {
    trim::trim_in_place(self, TrimSide::End, TrimClass::Whitespace);
  }

  /// Strips leading and trailing members of `trim_chars` in place. An
  /// empty set falls back to whitespace.
  fn trim_matches(&mut self, trim_chars: &[char]) {
    trim::trim_in_place(self, TrimSide::Both, TrimClass::from_chars(trim_chars));
  }

  fn trim_start_matches(&mut self, trim_chars: &[char]) {
    trim::trim_in_place(self, TrimSide::Start, TrimClass::from_chars(trim_chars));
  }

  fn trim_end_matches(&mut self, trim_chars: &[char]) {
    trim::trim_in_place(self, TrimSide::End, TrimClass::from_chars(trim_chars));
  }

  // ---
  // Removal.

  /// Removes every occurrence of `remove`, preserving the order of the
  /// survivors. The cursor does not advance after an excision: the
  /// freshly shifted-in character is checked too.
  fn remove_char(&mut self, remove: char) {
    let mut i = 0;
    while i < self.len() {
      if self.char_at(i) == remove {
        self.remove_range(i, i + 1);
      } else {
        i += 1;
      }
    }
  }

  /// Removes every occurrence of any member of `remove_chars`. Unlike the
  /// trim set, an empty set here removes nothing.
  fn remove_chars(&mut self, remove_chars: &[char]) {
    let mut i = 0;
    while i < self.len() {
      if remove_chars.contains(&self.char_at(i)) {
        self.remove_range(i, i + 1);
      } else {
        i += 1;
      }
    }
  }

  /// Removes every whitespace character.
  fn remove_white_space(&mut self) {
    let mut i = 0;
    while i < self.len() {
      if self.char_at(i).is_whitespace() {
        self.remove_range(i, i + 1);
      } else {
        i += 1;
      }
    }
  }

  /// Truncates the buffer to `start`, removing the whole suffix.
  ///
  /// `start` must address an existing character; `start == len` (and in
  /// particular 0 on an empty buffer) is a range violation.
  fn remove_from(&mut self, start: usize) -> Result<()> {
    let len = self.len();
    if start >= len {
      return Err(Error::StartOutOfBounds { start, len });
    }
    self.truncate(start);
    Ok(())
  }

  // ---
  // Replace.

  /// Replaces every occurrence of `old` with `new` rendered as text.
  ///
  /// Each iteration re-searches from position 0 rather than resuming
  /// after the insertion, so a replacement that reintroduces `old`
  /// earlier in the buffer is found again. An empty `old` is a no-op:
  /// it would otherwise match at every position and never terminate.
  fn replace<V: fmt::Display>(&mut self, old: &str, new: V, ignore_case: bool) {
    if old.is_empty() {
      return;
    }
    let pattern: Vec<char> = old.chars().collect();
    let rendered = new.to_string();
    while let Some(index) = search::find_pattern(self, &pattern, 0, self.len(), ignore_case) {
      self.remove_range(index, index + pattern.len());
      self.insert_text(index, &rendered);
    }
  }

  // ---
  // Case conversion and capacity.

  /// Lowercases every character in place via the default Unicode mapping.
  fn to_lower(&mut self) {
    self.to_lower_with(&Unicode);
  }

  /// Lowercases every character in place through an explicit [`CaseMap`].
  fn to_lower_with(&mut self, case: &impl CaseMap) {
    for i in 0..self.len() {
      self.set_char(i, case.to_lower(self.char_at(i)));
    }
  }

  fn to_upper(&mut self) {
    self.to_upper_with(&Unicode);
  }

  fn to_upper_with(&mut self, case: &impl CaseMap) {
    for i in 0..self.len() {
      self.set_char(i, case.to_upper(self.char_at(i)));
    }
  }

  /// Reserves room for at least `room` additional characters beyond the
  /// current length.
  fn ensure_room(&mut self, room: usize) {
    self.reserve(room);
  }
}

impl<B: CharBuffer + ?Sized> StrBufExt for B {}
