use std::borrow::Cow;

use thiserror::Error;

/// Result of a binary encode or decode operation.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the binary codec.
///
/// No error is ever swallowed and no partial recovery is attempted: any
/// failure aborts the current read or write, and the caller decides whether
/// to retry, discard or abort.
#[derive(Debug, Error)]
pub enum Error {
    /// The underlying byte sink or source failed; propagated unchanged.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The data itself is corrupt or unrepresentable: an unknown tag id, a
    /// negative length, a truncated stream, invalid UTF-8 or an oversized
    /// string. Carries the byte offset at which the problem was found.
    #[error("malformed data at byte offset {offset}: {reason}")]
    Malformed {
        reason: Cow<'static, str>,
        offset: u64,
    },

    /// List/compound nesting exceeded the reader's depth limit.
    #[error("structure too deep: nesting exceeds the maximum depth of {max_depth}")]
    StructureTooDeep { max_depth: usize },

    /// A programming error in the tree being written, such as a list
    /// element not matching the list's declared element id. Reported
    /// loudly because writing it out anyway would corrupt the stream.
    #[error("invariant violation: {reason}")]
    InvariantViolation { reason: Cow<'static, str> },
}

impl Error {
    pub(crate) fn malformed(reason: impl Into<Cow<'static, str>>, offset: u64) -> Self {
        Self::Malformed {
            reason: reason.into(),
            offset,
        }
    }

    pub(crate) fn invariant(reason: impl Into<Cow<'static, str>>) -> Self {
        Self::InvariantViolation {
            reason: reason.into(),
        }
    }
}
