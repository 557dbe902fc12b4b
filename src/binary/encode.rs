use std::io::Write;

use byteorder::{BigEndian, WriteBytesExt};

use crate::array::ImmutableArray;
use crate::compound::Compound;
use crate::conv::i8_slice_as_u8_slice;
use crate::error::{Error, Result};
use crate::id::TagId;
use crate::list::List;
use crate::tag::Tag;

/// Encodes a tag tree to the provided writer, with the empty root name.
///
/// The destination stream only ever advances; nothing is seeked or
/// rewritten. Underlying I/O errors propagate unchanged.
pub fn to_binary<W: Write>(tag: &Tag, writer: W) -> Result<()> {
    to_binary_named(tag, writer, "")
}

/// Encodes a tag tree with an explicit root name.
///
/// The root tag's id is written exactly once, followed by the name and the
/// root's contents.
pub fn to_binary_named<W: Write>(tag: &Tag, writer: W, root_name: &str) -> Result<()> {
    let mut state = EncodeState { writer, written: 0 };

    state.write_id(tag.id())?;
    state.write_string(root_name)?;
    state.write_payload(tag)
}

/// Returns the number of bytes [`to_binary_named`] will write for this tag
/// and root name.
///
/// If encoding succeeds, exactly this many bytes will have been written; if
/// it fails, the count is an upper bound on the bytes actually written.
pub fn written_size(tag: &Tag, root_name: &str) -> usize {
    fn payload_size(tag: &Tag) -> usize {
        match tag {
            Tag::End => 0,
            Tag::Byte(_) => 1,
            Tag::Short(_) => 2,
            Tag::Int(_) => 4,
            Tag::Long(_) => 8,
            Tag::Float(_) => 4,
            Tag::Double(_) => 8,
            Tag::ByteArray(v) => 4 + v.len(),
            Tag::String(v) => string_size(v),
            Tag::List(v) => list_size(v),
            Tag::Compound(v) => compound_size(v),
            Tag::IntArray(v) => 4 + v.len() * 4,
            Tag::LongArray(v) => 4 + v.len() * 8,
        }
    }

    fn list_size(l: &List) -> usize {
        1 + 4 + l.iter().map(payload_size).sum::<usize>()
    }

    fn string_size(s: &str) -> usize {
        2 + s.len()
    }

    fn compound_size(c: &Compound) -> usize {
        c.iter()
            .map(|(k, v)| 1 + string_size(k) + payload_size(v))
            .sum::<usize>()
            + 1
    }

    1 + string_size(root_name) + payload_size(tag)
}

struct EncodeState<W> {
    writer: W,
    /// Bytes written so far, for error reporting.
    written: u64,
}

impl<W: Write> EncodeState<W> {
    fn write_id(&mut self, id: TagId) -> Result<()> {
        self.writer.write_u8(id.to_id())?;
        self.written += 1;
        Ok(())
    }

    fn write_payload(&mut self, tag: &Tag) -> Result<()> {
        match tag {
            Tag::End => Ok(()),
            Tag::Byte(v) => self.write_byte(*v),
            Tag::Short(v) => self.write_short(*v),
            Tag::Int(v) => self.write_int(*v),
            Tag::Long(v) => self.write_long(*v),
            Tag::Float(v) => self.write_float(*v),
            Tag::Double(v) => self.write_double(*v),
            Tag::ByteArray(v) => self.write_byte_array(v),
            Tag::String(v) => self.write_string(v),
            Tag::List(v) => self.write_list(v),
            Tag::Compound(v) => self.write_compound(v),
            Tag::IntArray(v) => self.write_int_array(v),
            Tag::LongArray(v) => self.write_long_array(v),
        }
    }

    fn write_byte(&mut self, v: i8) -> Result<()> {
        self.writer.write_i8(v)?;
        self.written += 1;
        Ok(())
    }

    fn write_short(&mut self, v: i16) -> Result<()> {
        self.writer.write_i16::<BigEndian>(v)?;
        self.written += 2;
        Ok(())
    }

    fn write_int(&mut self, v: i32) -> Result<()> {
        self.writer.write_i32::<BigEndian>(v)?;
        self.written += 4;
        Ok(())
    }

    fn write_long(&mut self, v: i64) -> Result<()> {
        self.writer.write_i64::<BigEndian>(v)?;
        self.written += 8;
        Ok(())
    }

    fn write_float(&mut self, v: f32) -> Result<()> {
        self.writer.write_f32::<BigEndian>(v)?;
        self.written += 4;
        Ok(())
    }

    fn write_double(&mut self, v: f64) -> Result<()> {
        self.writer.write_f64::<BigEndian>(v)?;
        self.written += 8;
        Ok(())
    }

    fn write_string(&mut self, s: &str) -> Result<()> {
        match s.len().try_into() {
            Ok(n) => self.writer.write_u16::<BigEndian>(n)?,
            Err(_) => {
                return Err(Error::malformed(
                    format!("string of {} bytes exceeds maximum of 65535", s.len()),
                    self.written,
                ))
            }
        }

        self.writer.write_all(s.as_bytes())?;
        self.written += 2 + s.len() as u64;
        Ok(())
    }

    /// Writes a signed 32-bit element count.
    fn write_count(&mut self, len: usize, what: &'static str) -> Result<()> {
        match len.try_into() {
            Ok(n) => self.write_int(n),
            Err(_) => Err(Error::malformed(
                format!("{what} of length {len} exceeds maximum of i32::MAX"),
                self.written,
            )),
        }
    }

    fn write_byte_array(&mut self, values: &ImmutableArray<i8>) -> Result<()> {
        self.write_count(values.len(), "byte array")?;
        self.writer.write_all(i8_slice_as_u8_slice(values.as_slice()))?;
        self.written += values.len() as u64;
        Ok(())
    }

    fn write_int_array(&mut self, values: &ImmutableArray<i32>) -> Result<()> {
        self.write_count(values.len(), "int array")?;
        for v in values {
            self.write_int(*v)?;
        }
        Ok(())
    }

    fn write_long_array(&mut self, values: &ImmutableArray<i64>) -> Result<()> {
        self.write_count(values.len(), "long array")?;
        for v in values {
            self.write_long(*v)?;
        }
        Ok(())
    }

    fn write_list(&mut self, list: &List) -> Result<()> {
        if list.element_id() == TagId::End && !list.is_empty() {
            return Err(Error::invariant(
                "non-empty list declared with element id end",
            ));
        }

        self.write_id(list.element_id())?;
        self.write_count(list.len(), "list")?;

        // The element id is written once for the whole list, so an element
        // of another kind would be unreadable. Fail fast instead.
        for element in list {
            if element.id() != list.element_id() {
                return Err(Error::invariant(format!(
                    "list declared element id {} but contains a {} tag",
                    list.element_id().name(),
                    element.id().name(),
                )));
            }
            self.write_payload(element)?;
        }

        Ok(())
    }

    fn write_compound(&mut self, compound: &Compound) -> Result<()> {
        for (key, value) in compound {
            // An end tag as a value would terminate the compound early on
            // the wire.
            if value.id() == TagId::End {
                return Err(Error::invariant(format!(
                    "compound entry {key:?} holds an end tag"
                )));
            }
            self.write_id(value.id())?;
            self.write_string(key)?;
            self.write_payload(value)?;
        }
        self.write_id(TagId::End)
    }
}
