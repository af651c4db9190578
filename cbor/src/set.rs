use super::decode::{FromCbor, probe_with};
use super::encode::{Encoder, ToCbor};
use super::head::*;
use super::list::{decode_list, is_list};
use super::{cursor::Cursor, error::Error};
use tracing::debug;

pub const TAG_SET: u64 = 258;

/// Decode a set: a list, optionally wrapped in tag 258.
pub fn decode_set<T, F>(cursor: &mut Cursor, item: F) -> Result<Vec<T>, Error>
where
    F: FnMut(&mut Cursor, usize) -> Result<T, Error>,
{
    if peek_major(cursor)? == MAJOR_TAG {
        let (_, tag) = decode_definite_head(cursor)?;
        if tag != TAG_SET {
            debug!("Set wrapped in tag {tag}");
            return Err(Error::InvalidSetTag(tag));
        }
    }
    decode_list(cursor, item)
}

/// True for a list wrapped in tag 258.
pub fn is_set(cursor: &Cursor) -> Result<bool, Error> {
    probe_with(cursor, |cursor| {
        let (major, tag) = decode_definite_head(cursor)?;
        Ok(major == MAJOR_TAG && tag == TAG_SET && is_list(cursor)?)
    })
}

impl Encoder {
    pub fn emit_set_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut super::encode::Array),
    {
        self.emit_uint_minor(MAJOR_TAG, TAG_SET);
        self.emit_list_with(f)
    }

    pub fn emit_set<T>(&mut self, values: &[T])
    where
        T: ToCbor,
    {
        self.emit_uint_minor(MAJOR_TAG, TAG_SET);
        self.emit_list(values)
    }
}

/// Items that are written as a tag 258 set, in the order given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Set<T>(pub Vec<T>);

impl<T> FromCbor for Set<T>
where
    T: FromCbor,
{
    fn decode(cursor: &mut Cursor) -> Result<Self, Error> {
        decode_set(cursor, |cursor, _| T::decode(cursor)).map(Self)
    }
}

impl<T> ToCbor for Set<T>
where
    T: ToCbor,
{
    fn to_cbor(&self, encoder: &mut Encoder) {
        encoder.emit_set(&self.0)
    }
}
