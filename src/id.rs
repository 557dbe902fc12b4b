/// One of the possible tag kinds, identified on the wire by a single byte.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum TagId {
    // Variant order is significant: `TagId as u8` is the wire id.
    End,
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
    ByteArray,
    String,
    List,
    Compound,
    IntArray,
    LongArray,
}

impl TagId {
    /// The byte identifying this kind on the wire.
    pub const fn to_id(self) -> u8 {
        self as u8
    }

    /// Inverse of [`to_id`](Self::to_id). Ids outside `0..=12` identify no
    /// kind and are rejected during decoding.
    pub const fn from_id(id: u8) -> Option<Self> {
        match id {
            0 => Some(Self::End),
            1 => Some(Self::Byte),
            2 => Some(Self::Short),
            3 => Some(Self::Int),
            4 => Some(Self::Long),
            5 => Some(Self::Float),
            6 => Some(Self::Double),
            7 => Some(Self::ByteArray),
            8 => Some(Self::String),
            9 => Some(Self::List),
            10 => Some(Self::Compound),
            11 => Some(Self::IntArray),
            12 => Some(Self::LongArray),
            _ => None,
        }
    }

    /// Returns the name of this kind for error reporting purposes.
    pub const fn name(self) -> &'static str {
        match self {
            Self::End => "end",
            Self::Byte => "byte",
            Self::Short => "short",
            Self::Int => "int",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
            Self::ByteArray => "byte array",
            Self::String => "string",
            Self::List => "list",
            Self::Compound => "compound",
            Self::IntArray => "int array",
            Self::LongArray => "long array",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_ids_are_a_bijection() {
        for id in 0..=12 {
            let kind = TagId::from_id(id).unwrap();
            assert_eq!(kind.to_id(), id);
        }
        assert_eq!(TagId::from_id(13), None);
        assert_eq!(TagId::from_id(255), None);
    }
}
