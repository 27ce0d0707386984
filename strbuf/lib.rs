//! `string`-like queries and in-place mutation for mutable character
//! buffers.
//!
//! The operations — forward/backward substring search, trimming, removal,
//! replacement, containment checks, case conversion — act directly on an
//! append-oriented buffer through the [`CharBuffer`] contract, so no
//! intermediate immutable string is ever materialized. `Vec<char>`
//! implements the contract in-tree; blanket-implementing [`StrBufExt`]
//! gives any conforming host type the whole surface.
//!
//! Buffers are exclusively owned: every operation borrows one for a
//! single synchronous call and leaves it either untouched or mutated in
//! place. There is no interior locking and no state kept across calls.
//!
//! # Example
//!
//! ```
//! use strbuf::StrBufExt;
//!
//! let mut sb: Vec<char> = "  Hello, world!  ".chars().collect();
//! sb.trim();
//! assert_eq!(sb.index_of_str("world", false), Some(7));
//!
//! sb.replace("world", 123, false);
//! assert_eq!(sb.iter().collect::<String>(), "Hello, 123!");
//! ```

pub mod buffer;
pub mod case;
pub mod error;
pub mod ext;

mod search;
mod trim;

pub use buffer::CharBuffer;
pub use case::{Ascii, CaseMap, Unicode};
pub use error::{Error, Result};
pub use ext::StrBufExt;
