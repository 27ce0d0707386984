//! Leading/trailing character-class stripping.
//!
//! The engine computes the surviving `[start, end)` range by walking a
//! cursor in from each requested end, then asks the buffer to excise
//! everything outside it. A buffer with nothing to strip is left
//! completely untouched.

use crate::buffer::CharBuffer;

/// Which end(s) of the buffer to strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrimSide {
  Start,
  End,
  Both,
}

/// The set of characters eligible for stripping.
#[derive(Debug, Clone, Copy)]
pub enum TrimClass<'a> {
  /// The Unicode `White_Space` set, via `char::is_whitespace`.
  Whitespace,
  AnyOf(&'a [char]),
}

impl<'a> TrimClass<'a> {
  /// An empty explicit set means "no trim characters specified", which
  /// the ambient convention reads as "trim whitespace".
  pub fn from_chars(chars: &'a [char]) -> Self {
    if chars.is_empty() {
      TrimClass::Whitespace
    } else {
      TrimClass::AnyOf(chars)
    }
  }

  fn member(&self, ch: char) -> bool {
    match self {
      TrimClass::Whitespace => ch.is_whitespace(),
      TrimClass::AnyOf(chars) => chars.contains(&ch),
    }
  }
}

/// Strips `class` members from the end(s) named by `side`, shortening the
/// buffer in place to exactly the surviving range.
pub(crate) fn trim_in_place<B>(buf: &mut B, side: TrimSide, class: TrimClass<'_>)
where
  B: CharBuffer + ?Sized,
{
  let len = buf.len();

  let mut start = 0;
  if side != TrimSide::End {
    while start < len && class.member(buf.char_at(start)) {
      start += 1;
    }
  }

  // The end cursor never crosses below the already-advanced start.
  let mut end = len;
  if side != TrimSide::Start {
    while end > start && class.member(buf.char_at(end - 1)) {
      end -= 1;
    }
  }

  if end - start == len {
    return;
  }
  if end == start {
    buf.truncate(0);
    return;
  }
  // Truncate-then-drop-head keeps exactly [start, end).
  buf.truncate(end);
  buf.remove_range(0, start);
}
