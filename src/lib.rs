#![doc = include_str!("../README.md")]

pub use array::ImmutableArray;
pub use binary::{
    from_binary, from_binary_named, from_binary_with_depth_limit, to_binary, to_binary_named,
    written_size, MAX_DEPTH,
};
pub use compound::{Compound, CompoundBuilder};
pub use error::{Error, Result};
pub use id::TagId;
pub use list::List;
pub use snbt::to_snbt_string;
pub use tag::Tag;

pub mod array;
pub mod binary;
pub mod compound;
pub mod conv;
mod error;
pub mod id;
pub mod list;
pub mod snbt;
pub mod tag;

/// A convenience macro for constructing [`Compound`]s.
///
/// Key expressions must implement `Into<String>` while value expressions
/// must implement `Into<Tag>`. Entries appear in the compound in the order
/// written; a repeated key keeps its first position but takes the last
/// value.
///
/// # Examples
///
/// ```
/// use bintag::{compound, List, Tag, TagId};
///
/// let c = compound! {
///     "byte" => 123_i8,
///     "list_of_int" => List::new(TagId::Int, vec![Tag::int(3), Tag::int(-7)]),
///     "string" => "aé日",
///     "compound" => compound! {
///         "foo" => 1,
///         "bar" => 2,
///     },
///     "int_array" => vec![5, -9, i32::MIN],
///     "byte_array" => vec![0_i8, 2, 3],
///     "long_array" => vec![123_i64, 456, 789],
/// };
///
/// println!("{c:?}");
/// ```
#[macro_export]
macro_rules! compound {
    ($($key:expr => $value:expr),* $(,)?) => {
        <$crate::Compound as ::std::iter::FromIterator<(
            ::std::string::String,
            $crate::Tag,
        )>>::from_iter([
            $((
                ::std::string::String::from($key),
                $crate::Tag::from($value),
            ),)*
        ])
    };
}
