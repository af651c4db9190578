use super::decode::{FromCbor, incorrect_type, shift_payload};
use super::encode::{Encoder, ToCbor};
use super::head::*;
use super::{cursor::Cursor, error::Error};
use tracing::debug;

/// Largest chunk written, and accepted, in a chunked string.
pub const CHUNK_SIZE: usize = 64;

/// Decode a byte string, definite or chunked.
///
/// Chunks of an indefinite byte string must be definite byte strings of at
/// most [`CHUNK_SIZE`] bytes.
pub fn decode_bytes(cursor: &mut Cursor) -> Result<Vec<u8>, Error> {
    let head = decode_head(cursor)?;
    if head.major != MAJOR_BYTES {
        return Err(incorrect_type("Byte String", head.major));
    }
    match head.length {
        Length::Definite(n) => Ok(shift_payload(cursor, n)?.to_vec()),
        Length::Indefinite => {
            let mut bytes = Vec::new();
            while !shift_break(cursor)? {
                let n = match decode_head(cursor)? {
                    Head {
                        major: MAJOR_BYTES,
                        length: Length::Definite(n),
                    } => n,
                    _ => return Err(Error::InvalidChunk),
                };
                if n > CHUNK_SIZE as u64 {
                    debug!("Byte string chunk of {n} bytes at offset {}", cursor.position());
                    return Err(Error::ChunkTooLarge(n));
                }
                bytes.extend_from_slice(shift_payload(cursor, n)?);
            }
            Ok(bytes)
        }
    }
}

pub fn is_bytes(cursor: &Cursor) -> Result<bool, Error> {
    Ok(peek_major(cursor)? == MAJOR_BYTES)
}

pub fn is_def_bytes(cursor: &Cursor) -> Result<bool, Error> {
    Ok(matches!(cursor.peek_one()?, 0x40..=0x5B))
}

pub fn is_indef_bytes(cursor: &Cursor) -> Result<bool, Error> {
    Ok(cursor.peek_one()? == (MAJOR_BYTES << 5) | 31)
}

impl Encoder {
    /// Emit a byte string.
    ///
    /// With `split` set, anything longer than [`CHUNK_SIZE`] is written as
    /// an indefinite string of [`CHUNK_SIZE`] byte chunks.
    pub fn emit_bytes(&mut self, bytes: &[u8], split: bool) {
        if split && bytes.len() > CHUNK_SIZE {
            self.emit_indefinite_minor(MAJOR_BYTES);
            for chunk in bytes.chunks(CHUNK_SIZE) {
                self.emit_uint_minor(MAJOR_BYTES, chunk.len() as u64);
                self.emit_raw_slice(chunk);
            }
            self.emit_break()
        } else {
            self.emit_uint_minor(MAJOR_BYTES, bytes.len() as u64);
            self.emit_raw_slice(bytes)
        }
    }
}

/// An owned byte string, as opposed to a `Vec<u8>` which is a list of
/// integers.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ByteString(pub Vec<u8>);

impl core::ops::Deref for ByteString {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for ByteString {
    fn from(value: Vec<u8>) -> Self {
        Self(value)
    }
}

impl From<&[u8]> for ByteString {
    fn from(value: &[u8]) -> Self {
        Self(value.to_vec())
    }
}

impl FromCbor for ByteString {
    fn decode(cursor: &mut Cursor) -> Result<Self, Error> {
        decode_bytes(cursor).map(Self)
    }
}

impl ToCbor for ByteString {
    fn to_cbor(&self, encoder: &mut Encoder) {
        encoder.emit_bytes(&self.0, false)
    }
}
