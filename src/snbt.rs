//! Stringified (SNBT) rendering of a tag tree.
//!
//! Only the tree-to-text direction lives here; parsing SNBT back into tags
//! is deliberately out of scope. The output is deterministic: a pure
//! function of the tree, with compound entries in insertion order, no
//! trailing commas and no whitespace.

use crate::compound::Compound;
use crate::list::List;
use crate::tag::Tag;

/// Renders a tag in SNBT form.
///
/// [`Tag::End`] renders as the empty string here; its human-readable
/// `<TAG_End>` form is the `Display` impl on [`Tag`].
pub fn to_snbt_string(tag: &Tag) -> String {
    let mut output = String::new();
    SnbtWriter::new(&mut output).write_tag(tag);
    output
}

pub struct SnbtWriter<'a> {
    output: &'a mut String,
}

impl<'a> SnbtWriter<'a> {
    pub fn new(output: &'a mut String) -> Self {
        Self { output }
    }

    /// Appends one tag's SNBT to the output.
    pub fn write_tag(&mut self, tag: &Tag) {
        match tag {
            Tag::End => {}
            Tag::Byte(v) => self.write_suffixed(v, "b"),
            Tag::Short(v) => self.write_suffixed(v, "s"),
            Tag::Int(v) => self.write_suffixed(v, ""),
            Tag::Long(v) => self.write_suffixed(v, "L"),
            Tag::Float(v) => self.write_suffixed(v, "f"),
            Tag::Double(v) => self.write_suffixed(v, "d"),
            Tag::ByteArray(v) => self.write_array("B", v),
            Tag::String(v) => self.write_quoted(v),
            Tag::List(v) => self.write_list(v),
            Tag::Compound(v) => self.write_compound(v),
            Tag::IntArray(v) => self.write_array("I", v),
            Tag::LongArray(v) => self.write_array("L", v),
        }
    }

    fn write_suffixed(&mut self, value: impl ToString, suffix: &str) {
        self.output.push_str(&value.to_string());
        self.output.push_str(suffix);
    }

    fn write_array<'v, T: ToString + 'v>(
        &mut self,
        prefix: &str,
        values: impl IntoIterator<Item = &'v T>,
    ) {
        self.output.push('[');
        self.output.push_str(prefix);
        self.output.push(';');
        let mut first = true;
        for v in values {
            if !first {
                self.output.push(',');
            }
            first = false;
            self.output.push_str(&v.to_string());
        }
        self.output.push(']');
    }

    fn write_list(&mut self, list: &List) {
        self.output.push('[');
        let mut first = true;
        for element in list {
            if !first {
                self.output.push(',');
            }
            first = false;
            self.write_tag(element);
        }
        self.output.push(']');
    }

    fn write_compound(&mut self, compound: &Compound) {
        self.output.push('{');
        let mut first = true;
        for (key, value) in compound {
            if !first {
                self.output.push(',');
            }
            first = false;
            self.write_key(key);
            self.output.push(':');
            self.write_tag(value);
        }
        self.output.push('}');
    }

    /// Compound keys stay bare when nonempty and made only of SNBT-safe
    /// characters; anything else is quoted.
    fn write_key(&mut self, key: &str) {
        let bare = !key.is_empty()
            && key
                .chars()
                .all(|c| matches!(c, 'a'..='z' | 'A'..='Z' | '0'..='9' | '_' | '-' | '+' | '.'));

        if bare {
            self.output.push_str(key);
        } else {
            self.write_quoted(key);
        }
    }

    fn write_quoted(&mut self, s: &str) {
        self.output.push('"');
        for c in s.chars() {
            match c {
                '"' => self.output.push_str("\\\""),
                '\\' => self.output.push_str("\\\\"),
                _ => self.output.push(c),
            }
        }
        self.output.push('"');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::TagId;
    use crate::{compound, ImmutableArray};

    #[test]
    fn numeric_suffixes() {
        assert_eq!(Tag::Byte(1).to_snbt(), "1b");
        assert_eq!(Tag::Short(-2).to_snbt(), "-2s");
        assert_eq!(Tag::Int(3).to_snbt(), "3");
        assert_eq!(Tag::Long(4).to_snbt(), "4L");
        assert_eq!(Tag::Float(1.5).to_snbt(), "1.5f");
        assert_eq!(Tag::Double(-2.25).to_snbt(), "-2.25d");
    }

    #[test]
    fn strings_are_always_quoted_and_escaped() {
        assert_eq!(Tag::string("plain").to_snbt(), r#""plain""#);
        assert_eq!(
            Tag::string(r#"say "hi" \o/"#).to_snbt(),
            r#""say \"hi\" \\o/""#
        );
        assert_eq!(Tag::string("").to_snbt(), r#""""#);
    }

    #[test]
    fn arrays_use_kind_prefixes() {
        assert_eq!(Tag::byte_array(vec![1_i8, 2, 3]).to_snbt(), "[B;1,2,3]");
        assert_eq!(Tag::int_array(vec![-1, 0, 1]).to_snbt(), "[I;-1,0,1]");
        assert_eq!(Tag::long_array(vec![9_i64]).to_snbt(), "[L;9]");
        assert_eq!(
            Tag::byte_array(ImmutableArray::default()).to_snbt(),
            "[B;]"
        );
    }

    #[test]
    fn lists_render_elements_without_repeating_brackets() {
        let list = List::new(TagId::Int, vec![Tag::int(1), Tag::int(2)]);
        assert_eq!(Tag::List(list).to_snbt(), "[1,2]");
        assert_eq!(Tag::List(List::empty()).to_snbt(), "[]");

        let nested = List::new(
            TagId::List,
            vec![Tag::List(List::new(TagId::Byte, vec![Tag::byte(1)]))],
        );
        assert_eq!(Tag::List(nested).to_snbt(), "[[1b]]");
    }

    #[test]
    fn compound_keys_in_insertion_order_quoted_only_when_needed() {
        let tree = Tag::Compound(compound! {
            "plain_key" => 1,
            "needs quoting" => 2,
            "" => 3,
            "nested" => compound! { "s" => "v" },
        });

        assert_eq!(
            tree.to_snbt(),
            r#"{plain_key:1,"needs quoting":2,"":3,nested:{s:"v"}}"#
        );
    }

    #[test]
    fn stringification_is_pure() {
        let tree = Tag::Compound(compound! {
            "a" => vec![1_i8, 2],
            "b" => List::new(TagId::Double, vec![Tag::double(0.5)]),
        });

        assert_eq!(tree.to_snbt(), tree.to_snbt());
        assert_eq!(tree.to_snbt(), r#"{a:[B;1,2],b:[0.5d]}"#);
    }
}
