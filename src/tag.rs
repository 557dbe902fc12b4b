use std::borrow::Cow;
use std::fmt;

use crate::array::ImmutableArray;
use crate::compound::Compound;
use crate::id::TagId;
use crate::list::List;

/// One immutable node of a tag tree.
///
/// The thirteen variants are closed: the wire id ([`Tag::id`]) is a total
/// bijection with the kinds, so codec dispatch is exhaustive with no
/// unknown-kind fallback. Containers own their children exclusively; trees
/// are built bottom-up, so cycles cannot exist.
#[derive(Clone, PartialEq, Debug)]
pub enum Tag {
    /// The zero-payload sentinel that terminates compounds on the wire.
    End,
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(ImmutableArray<i8>),
    String(String),
    List(List),
    Compound(Compound),
    IntArray(ImmutableArray<i32>),
    LongArray(ImmutableArray<i64>),
}

impl Tag {
    /// Canonical `false`, shared by [`Tag::bool`].
    pub const FALSE: Tag = Tag::Byte(0);
    /// Canonical `true`, shared by [`Tag::bool`].
    pub const TRUE: Tag = Tag::Byte(1);

    /// Booleans are byte tags: `true` is [`Tag::TRUE`], `false` is
    /// [`Tag::FALSE`]. Equality remains by value.
    pub const fn bool(flag: bool) -> Tag {
        if flag {
            Self::TRUE
        } else {
            Self::FALSE
        }
    }

    /// Builds a byte tag from a wider integer, truncating to the wire
    /// width with two's-complement wraparound. Never an error:
    /// `Tag::byte(300)` is `Tag::Byte(44)`.
    pub const fn byte(value: i32) -> Tag {
        Tag::Byte(value as i8)
    }

    /// Builds a short tag from a wider integer, truncating like
    /// [`Tag::byte`].
    pub const fn short(value: i32) -> Tag {
        Tag::Short(value as i16)
    }

    pub const fn int(value: i32) -> Tag {
        Tag::Int(value)
    }

    pub const fn long(value: i64) -> Tag {
        Tag::Long(value)
    }

    pub const fn float(value: f32) -> Tag {
        Tag::Float(value)
    }

    pub const fn double(value: f64) -> Tag {
        Tag::Double(value)
    }

    pub fn string(value: impl Into<String>) -> Tag {
        Tag::String(value.into())
    }

    pub fn byte_array(values: impl Into<ImmutableArray<i8>>) -> Tag {
        Tag::ByteArray(values.into())
    }

    pub fn int_array(values: impl Into<ImmutableArray<i32>>) -> Tag {
        Tag::IntArray(values.into())
    }

    pub fn long_array(values: impl Into<ImmutableArray<i64>>) -> Tag {
        Tag::LongArray(values.into())
    }

    /// The kind of this tag.
    pub fn id(&self) -> TagId {
        match self {
            Tag::End => TagId::End,
            Tag::Byte(_) => TagId::Byte,
            Tag::Short(_) => TagId::Short,
            Tag::Int(_) => TagId::Int,
            Tag::Long(_) => TagId::Long,
            Tag::Float(_) => TagId::Float,
            Tag::Double(_) => TagId::Double,
            Tag::ByteArray(_) => TagId::ByteArray,
            Tag::String(_) => TagId::String,
            Tag::List(_) => TagId::List,
            Tag::Compound(_) => TagId::Compound,
            Tag::IntArray(_) => TagId::IntArray,
            Tag::LongArray(_) => TagId::LongArray,
        }
    }

    /// Renders this tag in SNBT form. [`Tag::End`] renders as the empty
    /// string; its human-readable form is the `Display` impl.
    pub fn to_snbt(&self) -> String {
        crate::snbt::to_snbt_string(self)
    }

    pub fn as_byte(&self) -> Option<i8> {
        match self {
            Tag::Byte(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_short(&self) -> Option<i16> {
        match self {
            Tag::Short(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            Tag::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_long(&self) -> Option<i64> {
        match self {
            Tag::Long(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f32> {
        match self {
            Tag::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_double(&self) -> Option<f64> {
        match self {
            Tag::Double(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Tag::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_byte_array(&self) -> Option<&ImmutableArray<i8>> {
        match self {
            Tag::ByteArray(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_int_array(&self) -> Option<&ImmutableArray<i32>> {
        match self {
            Tag::IntArray(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_long_array(&self) -> Option<&ImmutableArray<i64>> {
        match self {
            Tag::LongArray(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&List> {
        match self {
            Tag::List(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_compound(&self) -> Option<&Compound> {
        match self {
            Tag::Compound(v) => Some(v),
            _ => None,
        }
    }
}

/// The human-readable form: identical to SNBT for every kind except
/// [`Tag::End`], which renders as `<TAG_End>` instead of the empty string.
impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tag::End => f.write_str("<TAG_End>"),
            other => f.write_str(&other.to_snbt()),
        }
    }
}

impl From<bool> for Tag {
    fn from(v: bool) -> Self {
        Tag::bool(v)
    }
}

impl From<i8> for Tag {
    fn from(v: i8) -> Self {
        Tag::Byte(v)
    }
}

impl From<i16> for Tag {
    fn from(v: i16) -> Self {
        Tag::Short(v)
    }
}

impl From<i32> for Tag {
    fn from(v: i32) -> Self {
        Tag::Int(v)
    }
}

impl From<i64> for Tag {
    fn from(v: i64) -> Self {
        Tag::Long(v)
    }
}

impl From<f32> for Tag {
    fn from(v: f32) -> Self {
        Tag::Float(v)
    }
}

impl From<f64> for Tag {
    fn from(v: f64) -> Self {
        Tag::Double(v)
    }
}

impl From<&str> for Tag {
    fn from(v: &str) -> Self {
        Tag::String(v.to_owned())
    }
}

impl From<String> for Tag {
    fn from(v: String) -> Self {
        Tag::String(v)
    }
}

impl<'a> From<Cow<'a, str>> for Tag {
    fn from(v: Cow<'a, str>) -> Self {
        Tag::String(v.into_owned())
    }
}

impl From<Vec<i8>> for Tag {
    fn from(v: Vec<i8>) -> Self {
        Tag::ByteArray(v.into())
    }
}

impl From<Vec<i32>> for Tag {
    fn from(v: Vec<i32>) -> Self {
        Tag::IntArray(v.into())
    }
}

impl From<Vec<i64>> for Tag {
    fn from(v: Vec<i64>) -> Self {
        Tag::LongArray(v.into())
    }
}

impl From<ImmutableArray<i8>> for Tag {
    fn from(v: ImmutableArray<i8>) -> Self {
        Tag::ByteArray(v)
    }
}

impl From<ImmutableArray<i32>> for Tag {
    fn from(v: ImmutableArray<i32>) -> Self {
        Tag::IntArray(v)
    }
}

impl From<ImmutableArray<i64>> for Tag {
    fn from(v: ImmutableArray<i64>) -> Self {
        Tag::LongArray(v)
    }
}

impl From<List> for Tag {
    fn from(v: List) -> Self {
        Tag::List(v)
    }
}

impl From<Compound> for Tag {
    fn from(v: Compound) -> Self {
        Tag::Compound(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrowing_constructors_wrap() {
        assert_eq!(Tag::byte(300), Tag::Byte(44));
        assert_eq!(Tag::byte(-300), Tag::Byte(-44));
        assert_eq!(Tag::byte(255), Tag::Byte(-1));
        assert_eq!(Tag::short(70000), Tag::Short(4464));
    }

    #[test]
    fn bool_uses_canonical_bytes() {
        assert_eq!(Tag::bool(true), Tag::TRUE);
        assert_eq!(Tag::bool(false), Tag::FALSE);
        assert_eq!(Tag::bool(true), Tag::Byte(1));
        assert_eq!(Tag::bool(false), Tag::Byte(0));
    }

    #[test]
    fn end_renders_differently_as_snbt_and_display() {
        assert_eq!(Tag::End.to_snbt(), "");
        assert_eq!(Tag::End.to_string(), "<TAG_End>");

        // Every other kind displays as its SNBT.
        let tag = Tag::int(7);
        assert_eq!(tag.to_string(), tag.to_snbt());
    }

    #[test]
    fn id_covers_every_kind() {
        assert_eq!(Tag::End.id(), TagId::End);
        assert_eq!(Tag::byte(0).id(), TagId::Byte);
        assert_eq!(Tag::string("x").id(), TagId::String);
        assert_eq!(Tag::List(List::empty()).id(), TagId::List);
        assert_eq!(Tag::Compound(Compound::new()).id(), TagId::Compound);
        assert_eq!(Tag::long_array(vec![1]).id(), TagId::LongArray);
    }
}
