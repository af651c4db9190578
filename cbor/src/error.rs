use thiserror::Error;

/// Errors raised while decoding.
///
/// [`Error::EndOfStream`] means the input ran out before a bounded read
/// could complete; every other variant means the bytes were present but
/// malformed for the requested item. Both are terminal for the decode call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Not enough data for encoded value")]
    EndOfStream,

    #[error("Empty CBOR head")]
    EmptyHead,

    #[error("Bad header byte {0:#04x}")]
    BadHeader(u8),

    #[error("Invalid minor-type value {0}")]
    InvalidMinorValue(u8),

    #[error("Float marker where a generic head was expected")]
    UnexpectedFloat,

    #[error("Incorrect type, expected {expected}, found {found}")]
    IncorrectType {
        expected: &'static str,
        found: &'static str,
    },

    #[error("Invalid UTF-8 in text string")]
    InvalidUtf8,

    #[error("Chunked string contains an invalid chunk")]
    InvalidChunk,

    #[error("Chunk of {0} bytes exceeds the 64 byte limit")]
    ChunkTooLarge(u64),

    #[error("Read past the end of the list")]
    EndOfList,

    #[error("Expected at least {expected} items, found {found}")]
    TooFewItems { expected: usize, found: usize },

    #[error("Sequence has additional items")]
    AdditionalItems,

    #[error("Map has key but no value")]
    PartialMap,

    #[error("Expected set tag 258, found tag {0}")]
    InvalidSetTag(u64),

    #[error("Invalid constructor tag argument {0}")]
    InvalidConstrTag(u64),

    #[error("Constructor escape must be followed by a 2 item list")]
    InvalidConstrEscape,

    #[error("Unhandled field {0}")]
    UnhandledField(String),

    #[error("Value too big for the target type")]
    TooBig,

    #[error("Bignum with an empty payload")]
    EmptyBignum,

    #[error("Invalid hexadecimal input")]
    InvalidHex,

    #[error("Maximum recursion depth reached")]
    MaxRecursion,

    #[error("{0} bytes of trailing data")]
    TrailingData(usize),
}

impl Error {
    /// True if the input was exhausted, rather than malformed.
    pub fn is_end_of_stream(&self) -> bool {
        matches!(self, Self::EndOfStream)
    }
}

impl From<core::str::Utf8Error> for Error {
    fn from(_: core::str::Utf8Error) -> Self {
        Self::InvalidUtf8
    }
}

impl From<core::num::TryFromIntError> for Error {
    fn from(_: core::num::TryFromIntError) -> Self {
        Self::TooBig
    }
}

/// Name of a major type, for error messages.
pub(crate) fn major_name(major: u8) -> &'static str {
    match major {
        0 => "Unsigned Integer",
        1 => "Negative Integer",
        2 => "Byte String",
        3 => "Text String",
        4 => "Array",
        5 => "Map",
        6 => "Tag",
        _ => "Simple Value",
    }
}
