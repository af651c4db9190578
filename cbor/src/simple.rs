use super::decode::{FromCbor, incorrect_type};
use super::encode::{Encoder, ToCbor};
use super::head::*;
use super::{cursor::Cursor, error::Error};

pub const FALSE: u8 = (MAJOR_SIMPLE << 5) | 20;
pub const TRUE: u8 = (MAJOR_SIMPLE << 5) | 21;
pub const NULL: u8 = (MAJOR_SIMPLE << 5) | 22;

fn expect_simple(cursor: &mut Cursor, expected: &'static str) -> Result<u64, Error> {
    let (major, n) = decode_definite_head(cursor)?;
    if major != MAJOR_SIMPLE {
        return Err(incorrect_type(expected, major));
    }
    Ok(n)
}

pub fn decode_bool(cursor: &mut Cursor) -> Result<bool, Error> {
    match expect_simple(cursor, "Bool")? {
        20 => Ok(false),
        21 => Ok(true),
        _ => Err(incorrect_type("Bool", MAJOR_SIMPLE)),
    }
}

pub fn is_bool(cursor: &Cursor) -> Result<bool, Error> {
    Ok(matches!(cursor.peek_one()?, FALSE | TRUE))
}

pub fn decode_null(cursor: &mut Cursor) -> Result<(), Error> {
    match expect_simple(cursor, "Null")? {
        22 => Ok(()),
        _ => Err(incorrect_type("Null", MAJOR_SIMPLE)),
    }
}

pub fn is_null(cursor: &Cursor) -> Result<bool, Error> {
    Ok(cursor.peek_one()? == NULL)
}

/// Decode the number of a tag, leaving the cursor at the tagged item.
pub fn decode_tag(cursor: &mut Cursor) -> Result<u64, Error> {
    let (major, n) = decode_definite_head(cursor)?;
    if major != MAJOR_TAG {
        return Err(incorrect_type("Tag", major));
    }
    Ok(n)
}

pub fn is_tag(cursor: &Cursor) -> Result<bool, Error> {
    Ok(peek_major(cursor)? == MAJOR_TAG)
}

impl Encoder {
    pub fn emit_null(&mut self) {
        self.emit_raw_slice(&[NULL])
    }

    pub fn emit_tag(&mut self, tag: u64) {
        self.emit_uint_minor(MAJOR_TAG, tag)
    }
}

impl FromCbor for bool {
    fn decode(cursor: &mut Cursor) -> Result<Self, Error> {
        decode_bool(cursor)
    }
}

impl ToCbor for bool {
    fn to_cbor(&self, encoder: &mut Encoder) {
        encoder.emit_raw_slice(&[if *self { TRUE } else { FALSE }])
    }
}

/// `None` is written as null.
impl<T> FromCbor for Option<T>
where
    T: FromCbor,
{
    fn decode(cursor: &mut Cursor) -> Result<Self, Error> {
        if is_null(cursor)? {
            cursor.shift_one()?;
            Ok(None)
        } else {
            T::decode(cursor).map(Some)
        }
    }
}

impl<T> ToCbor for Option<T>
where
    T: ToCbor,
{
    fn to_cbor(&self, encoder: &mut Encoder) {
        match self {
            Some(value) => encoder.emit(value),
            None => encoder.emit_null(),
        }
    }
}
