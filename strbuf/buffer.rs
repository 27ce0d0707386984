//! The mutable-buffer contract the operation surface is written against.
//!
//! Everything in this crate borrows a buffer for the duration of one call
//! and either reads it or mutates it in place; no operation retains a
//! reference or replaces the buffer's identity. `Vec<char>` is the
//! in-tree implementation, but any append-oriented host type that can
//! provide these primitives gets the whole [`StrBufExt`] surface for
//! free.
//!
//! [`StrBufExt`]: crate::ext::StrBufExt

/// An exclusively-owned, randomly-indexable, resizable `char` sequence.
///
/// Indexing is valid for `0 <= i < len()`; implementations may panic on
/// out-of-range access. The operations in [`crate::ext`] validate their
/// windows before indexing, so they never trip that contract themselves.
pub trait CharBuffer {
  /// Current number of characters.
  fn len(&self) -> usize;

  /// Character at `index`.
  fn char_at(&self, index: usize) -> char;

  /// Overwrites the character at `index` in place.
  fn set_char(&mut self, index: usize, ch: char);

  /// Appends a character at the end.
  fn push_char(&mut self, ch: char);

  /// Shortens the buffer to `new_len` characters. No-op when `new_len`
  /// is not below the current length.
  fn truncate(&mut self, new_len: usize);

  /// Excises `[start, end)`, shifting the tail left to close the gap.
  fn remove_range(&mut self, start: usize, end: usize);

  /// Inserts the characters of `text` at `index`, shifting the tail
  /// right.
  fn insert_text(&mut self, index: usize, text: &str);

  /// Capacity hint: makes room for at least `additional` characters
  /// beyond the current length.
  fn reserve(&mut self, additional: usize);

  fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

impl CharBuffer for Vec<char> {
  fn len(&self) -> usize {
    self.len()
  }

  fn char_at(&self, index: usize) -> char {
    self[index]
  }

  fn set_char(&mut self, index: usize, ch: char) {
    self[index] = ch;
  }

  fn push_char(&mut self, ch: char) {
    self.push(ch);
  }

  fn truncate(&mut self, new_len: usize) {
    Vec::truncate(self, new_len);
  }

  fn remove_range(&mut self, start: usize, end: usize) {
    self.drain(start..end);
  }

  fn insert_text(&mut self, index: usize, text: &str) {
    self.splice(index..index, text.chars());
  }

  fn reserve(&mut self, additional: usize) {
    Vec::reserve(self, additional);
  }
}
