use std::io::{self, Read};

use byteorder::{BigEndian, ReadBytesExt};

use crate::binary::MAX_DEPTH;
use crate::compound::{Compound, CompoundBuilder};
use crate::conv::u8_vec_into_i8_vec;
use crate::error::{Error, Result};
use crate::id::TagId;
use crate::list::List;
use crate::tag::Tag;

/// Decodes one tag tree from the provided reader, discarding the root name.
///
/// Decoding never panics on malformed input: unknown ids, negative counts,
/// truncated streams and invalid UTF-8 all surface as
/// [`Error::Malformed`] carrying the byte offset of the problem.
pub fn from_binary<R: Read>(reader: R) -> Result<Tag> {
    Ok(from_binary_named(reader)?.1)
}

/// Decodes one tag tree together with its root name.
pub fn from_binary_named<R: Read>(reader: R) -> Result<(String, Tag)> {
    from_binary_with_depth_limit(reader, MAX_DEPTH)
}

/// Decodes with an explicit nesting bound instead of [`MAX_DEPTH`].
///
/// The reader tracks its recursion depth through lists and compounds and
/// fails with [`Error::StructureTooDeep`] once `max_depth` is exceeded, so
/// hostile input cannot overflow the call stack.
pub fn from_binary_with_depth_limit<R: Read>(
    reader: R,
    max_depth: usize,
) -> Result<(String, Tag)> {
    let mut state = DecodeState {
        reader,
        offset: 0,
        depth: 0,
        max_depth,
    };

    let id = state.read_id()?;
    let name = state.read_string()?;
    let tag = state.read_payload(id)?;

    Ok((name, tag))
}

struct DecodeState<R> {
    reader: R,
    /// Bytes consumed so far, for error reporting.
    offset: u64,
    depth: usize,
    max_depth: usize,
}

impl<R: Read> DecodeState<R> {
    /// Accounts `width` consumed bytes and converts a premature end of
    /// stream into a malformed-data error at the current offset.
    fn take<T>(&mut self, width: u64, read: io::Result<T>) -> Result<T> {
        match read {
            Ok(v) => {
                self.offset += width;
                Ok(v)
            }
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                Err(Error::malformed("unexpected end of stream", self.offset))
            }
            Err(e) => Err(Error::Io(e)),
        }
    }

    fn read_u8(&mut self) -> Result<u8> {
        let r = self.reader.read_u8();
        self.take(1, r)
    }

    fn read_i8(&mut self) -> Result<i8> {
        let r = self.reader.read_i8();
        self.take(1, r)
    }

    fn read_u16(&mut self) -> Result<u16> {
        let r = self.reader.read_u16::<BigEndian>();
        self.take(2, r)
    }

    fn read_i16(&mut self) -> Result<i16> {
        let r = self.reader.read_i16::<BigEndian>();
        self.take(2, r)
    }

    fn read_i32(&mut self) -> Result<i32> {
        let r = self.reader.read_i32::<BigEndian>();
        self.take(4, r)
    }

    fn read_i64(&mut self) -> Result<i64> {
        let r = self.reader.read_i64::<BigEndian>();
        self.take(8, r)
    }

    fn read_f32(&mut self) -> Result<f32> {
        let r = self.reader.read_f32::<BigEndian>();
        self.take(4, r)
    }

    fn read_f64(&mut self) -> Result<f64> {
        let r = self.reader.read_f64::<BigEndian>();
        self.take(8, r)
    }

    fn read_exact(&mut self, buf: &mut [u8]) -> Result<()> {
        let r = self.reader.read_exact(buf);
        self.take(buf.len() as u64, r)
    }

    fn read_id(&mut self) -> Result<TagId> {
        let raw = self.read_u8()?;
        TagId::from_id(raw)
            .ok_or_else(|| Error::malformed(format!("invalid tag id {raw}"), self.offset))
    }

    /// Reads a signed 32-bit element count, rejecting negative values.
    fn read_count(&mut self, what: &'static str) -> Result<usize> {
        let len = self.read_i32()?;
        if len < 0 {
            return Err(Error::malformed(
                format!("negative {what} length {len}"),
                self.offset,
            ));
        }
        Ok(len as usize)
    }

    fn read_string(&mut self) -> Result<String> {
        let len = self.read_u16()? as usize;
        let mut buf = vec![0; len];
        self.read_exact(&mut buf)?;
        String::from_utf8(buf)
            .map_err(|_| Error::malformed("string is not valid utf-8", self.offset))
    }

    fn enter(&mut self) -> Result<()> {
        if self.depth >= self.max_depth {
            return Err(Error::StructureTooDeep {
                max_depth: self.max_depth,
            });
        }
        self.depth += 1;
        Ok(())
    }

    fn read_payload(&mut self, id: TagId) -> Result<Tag> {
        Ok(match id {
            TagId::End => Tag::End,
            TagId::Byte => Tag::Byte(self.read_i8()?),
            TagId::Short => Tag::Short(self.read_i16()?),
            TagId::Int => Tag::Int(self.read_i32()?),
            TagId::Long => Tag::Long(self.read_i64()?),
            TagId::Float => Tag::Float(self.read_f32()?),
            TagId::Double => Tag::Double(self.read_f64()?),
            TagId::ByteArray => {
                let len = self.read_count("byte array")?;
                let mut buf = vec![0; len];
                self.read_exact(&mut buf)?;
                Tag::ByteArray(u8_vec_into_i8_vec(buf).into())
            }
            TagId::String => Tag::String(self.read_string()?),
            TagId::List => {
                self.enter()?;
                let list = self.read_list()?;
                self.depth -= 1;
                Tag::List(list)
            }
            TagId::Compound => {
                self.enter()?;
                let compound = self.read_compound()?;
                self.depth -= 1;
                Tag::Compound(compound)
            }
            TagId::IntArray => {
                let len = self.read_count("int array")?;
                let values: Vec<i32> = (0..len).map(|_| self.read_i32()).collect::<Result<_>>()?;
                Tag::IntArray(values.into())
            }
            TagId::LongArray => {
                let len = self.read_count("long array")?;
                let values: Vec<i64> = (0..len).map(|_| self.read_i64()).collect::<Result<_>>()?;
                Tag::LongArray(values.into())
            }
        })
    }

    fn read_list(&mut self) -> Result<List> {
        let element_id = self.read_id()?;
        let len = self.read_count("list")?;

        // The degenerate empty list keeps its end element id; a count with
        // no readable element shape is corrupt.
        if element_id == TagId::End && len != 0 {
            return Err(Error::malformed(
                "non-empty list with element id end",
                self.offset,
            ));
        }

        let mut elements = Vec::new();
        for _ in 0..len {
            elements.push(self.read_payload(element_id)?);
        }

        Ok(List::new(element_id, elements))
    }

    fn read_compound(&mut self) -> Result<Compound> {
        let mut builder = CompoundBuilder::new();
        loop {
            let id = self.read_id()?;
            if id == TagId::End {
                return Ok(builder.finish());
            }
            let name = self.read_string()?;
            let value = self.read_payload(id)?;
            builder.insert(name, value);
        }
    }
}
