use std::fmt;
use std::iter::FusedIterator;
use std::ops::Index;

use indexmap::IndexMap;

use crate::tag::Tag;

type Map = IndexMap<String, Tag>;

/// An insertion-ordered mapping from unique string keys to tags.
///
/// Keys iterate in the order they were first inserted; inserting a key a
/// second time replaces the value but keeps the original position. A
/// compound is frozen once constructed: build one with [`Compound::build`],
/// the [`compound!`](crate::compound!) macro or `FromIterator`, and read it
/// through the accessors below.
#[derive(Clone, Default)]
pub struct Compound {
    map: Map,
}

/// Entry order is part of a compound's value: two compounds holding the
/// same entries in different insertion orders are not equal.
impl PartialEq for Compound {
    fn eq(&self, other: &Self) -> bool {
        self.map.iter().eq(other.map.iter())
    }
}

impl Compound {
    /// An empty compound.
    pub fn new() -> Self {
        Self { map: Map::new() }
    }

    /// Runs `build` against a mutable staging map, then freezes the result.
    ///
    /// Write access exists only for the duration of the callback; the
    /// returned compound is immutable.
    ///
    /// ```
    /// use bintag::{Compound, Tag};
    ///
    /// let c = Compound::build(|b| {
    ///     b.insert("x", Tag::int(1));
    ///     b.insert("y", Tag::string("two"));
    /// });
    /// assert_eq!(c.get("x"), Some(&Tag::Int(1)));
    /// ```
    pub fn build(build: impl FnOnce(&mut CompoundBuilder)) -> Self {
        let mut builder = CompoundBuilder::new();
        build(&mut builder);
        builder.finish()
    }

    pub fn get(&self, key: &str) -> Option<&Tag> {
        self.map.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            iter: self.map.iter(),
        }
    }

    pub fn keys(&self) -> Keys<'_> {
        Keys {
            iter: self.map.keys(),
        }
    }
}

impl fmt::Debug for Compound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.map.fmt(f)
    }
}

impl Index<&str> for Compound {
    type Output = Tag;

    fn index(&self, key: &str) -> &Self::Output {
        &self.map[key]
    }
}

impl FromIterator<(String, Tag)> for Compound {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = (String, Tag)>,
    {
        Self {
            map: Map::from_iter(iter),
        }
    }
}

/// The mutable staging map behind [`Compound::build`].
///
/// Single-owner for the duration of the build; freezing consumes it.
#[derive(Default)]
pub struct CompoundBuilder {
    map: Map,
}

impl CompoundBuilder {
    pub fn new() -> Self {
        Self { map: Map::new() }
    }

    /// Inserts an entry. A repeated key takes the new value (last write
    /// wins) but keeps its original position; the displaced value is
    /// returned.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Tag>) -> Option<Tag> {
        self.map.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<Tag> {
        self.map.shift_remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    /// Freezes the staged entries into an immutable [`Compound`].
    pub fn finish(self) -> Compound {
        Compound { map: self.map }
    }
}

macro_rules! impl_iterator_traits {
    (($name:ident $($generics:tt)*) => $item:ty) => {
        impl $($generics)* Iterator for $name $($generics)* {
            type Item = $item;
            #[inline]
            fn next(&mut self) -> Option<Self::Item> {
                self.iter.next()
            }
            #[inline]
            fn size_hint(&self) -> (usize, Option<usize>) {
                self.iter.size_hint()
            }
        }

        impl $($generics)* DoubleEndedIterator for $name $($generics)* {
            #[inline]
            fn next_back(&mut self) -> Option<Self::Item> {
                self.iter.next_back()
            }
        }

        impl $($generics)* ExactSizeIterator for $name $($generics)* {
            #[inline]
            fn len(&self) -> usize {
                self.iter.len()
            }
        }

        impl $($generics)* FusedIterator for $name $($generics)* {}
    }
}

impl<'a> IntoIterator for &'a Compound {
    type Item = (&'a String, &'a Tag);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Clone)]
pub struct Iter<'a> {
    iter: indexmap::map::Iter<'a, String, Tag>,
}

impl_iterator_traits!((Iter<'a>) => (&'a String, &'a Tag));

#[derive(Clone)]
pub struct Keys<'a> {
    iter: indexmap::map::Keys<'a, String, Tag>,
}

impl_iterator_traits!((Keys<'a>) => &'a String);

impl IntoIterator for Compound {
    type Item = (String, Tag);
    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            iter: self.map.into_iter(),
        }
    }
}

pub struct IntoIter {
    iter: indexmap::map::IntoIter<String, Tag>,
}

impl_iterator_traits!((IntoIter) => (String, Tag));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_insertion_order() {
        let letters = ["g", "b", "d", "e", "h", "z", "m", "a", "q"];

        let c = Compound::build(|b| {
            for l in letters {
                b.insert(l, Tag::Byte(0));
            }
        });

        for (k, l) in c.keys().zip(letters) {
            assert_eq!(k, l);
        }
    }

    #[test]
    fn equality_respects_entry_order() {
        let ab = Compound::build(|b| {
            b.insert("a", Tag::int(1));
            b.insert("b", Tag::int(2));
        });
        let ba = Compound::build(|b| {
            b.insert("b", Tag::int(2));
            b.insert("a", Tag::int(1));
        });

        assert_ne!(ab, ba);
        assert_eq!(
            ab,
            Compound::build(|b| {
                b.insert("a", Tag::int(1));
                b.insert("b", Tag::int(2));
            })
        );
    }

    #[test]
    fn duplicate_key_last_write_wins() {
        let c = Compound::build(|b| {
            b.insert("first", Tag::int(1));
            b.insert("dup", Tag::int(2));
            b.insert("second", Tag::int(3));
            let displaced = b.insert("dup", Tag::int(4));
            assert_eq!(displaced, Some(Tag::Int(2)));
        });

        assert_eq!(c.len(), 3);
        assert_eq!(c["dup"], Tag::Int(4));
        let keys: Vec<_> = c.keys().map(String::as_str).collect();
        assert_eq!(keys, ["first", "dup", "second"]);
    }
}
