//! The binary (wire) form of a tag tree.
//!
//! A tree is written depth-first, pre-order: whoever recurses into a tag
//! (the root entry point, a list header or a compound entry) writes that
//! tag's one-byte id; the tag itself writes only its contents. Integers are
//! big-endian at their tag's fixed width, floats are IEEE-754, strings are
//! UTF-8 prefixed by an unsigned 16-bit byte length, and arrays and lists
//! are prefixed by a signed 32-bit element count.
//!
//! # Examples
//!
//! ```
//! use bintag::{compound, from_binary, to_binary, Tag};
//!
//! let tree = Tag::Compound(compound! {
//!     "byte" => 5_i8,
//!     "string" => "hello",
//! });
//!
//! let mut buf = Vec::new();
//! to_binary(&tree, &mut buf).unwrap();
//!
//! assert_eq!(from_binary(&mut buf.as_slice()).unwrap(), tree);
//! ```

mod decode;
mod encode;

pub use decode::*;
pub use encode::*;

/// Default bound on list/compound nesting when decoding, so corrupt or
/// adversarial input fails with a typed error instead of exhausting the
/// call stack.
pub const MAX_DEPTH: usize = 512;
