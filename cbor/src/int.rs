use super::bytes::decode_bytes;
use super::decode::{FromCbor, incorrect_type, probe};
use super::encode::{Encoder, ToCbor};
use super::head::*;
use super::{cursor::Cursor, error::Error};
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::ToPrimitive;

pub const TAG_POSITIVE_BIGNUM: u64 = 2;
pub const TAG_NEGATIVE_BIGNUM: u64 = 3;

/// Decode an integer of any size.
///
/// Plain major type 0/1 items and bignums (tags 2 and 3 wrapping a byte
/// string) are accepted alike.
pub fn decode_int(cursor: &mut Cursor) -> Result<BigInt, Error> {
    let (major, n) = decode_definite_head(cursor)?;
    match major {
        MAJOR_UNSIGNED => Ok(BigInt::from(n)),
        MAJOR_NEGATIVE => Ok(-BigInt::from(n) - 1),
        MAJOR_TAG => match n {
            TAG_POSITIVE_BIGNUM => decode_bignum(cursor).map(BigInt::from),
            TAG_NEGATIVE_BIGNUM => Ok(-BigInt::from(decode_bignum(cursor)?) - 1),
            _ => Err(incorrect_type("Integer", major)),
        },
        _ => Err(incorrect_type("Integer", major)),
    }
}

fn decode_bignum(cursor: &mut Cursor) -> Result<BigUint, Error> {
    let bytes = decode_bytes(cursor)?;
    if bytes.is_empty() {
        return Err(Error::EmptyBignum);
    }
    Ok(BigUint::from_bytes_be(&bytes))
}

pub fn is_int(cursor: &Cursor) -> Result<bool, Error> {
    probe(cursor, decode_int)
}

impl Encoder {
    /// Emit an integer of any size, switching to a bignum tag beyond the
    /// 64 bit argument range.
    pub fn emit_int(&mut self, n: &BigInt) {
        if n.sign() != Sign::Minus {
            match n.to_u64() {
                Some(v) => self.emit_uint_minor(MAJOR_UNSIGNED, v),
                None => self.emit_bignum(TAG_POSITIVE_BIGNUM, n.magnitude()),
            }
        } else {
            let m = -n - 1u32;
            match m.to_u64() {
                Some(v) => self.emit_uint_minor(MAJOR_NEGATIVE, v),
                None => self.emit_bignum(TAG_NEGATIVE_BIGNUM, m.magnitude()),
            }
        }
    }

    fn emit_bignum(&mut self, tag: u64, magnitude: &BigUint) {
        self.emit_uint_minor(MAJOR_TAG, tag);
        self.emit_bytes(&magnitude.to_bytes_be(), false)
    }
}

macro_rules! impl_int_from_cbor {
    ($(($ty:ty, $to:ident)),*) => {
        $(
            impl FromCbor for $ty {
                fn decode(cursor: &mut Cursor) -> Result<Self, Error> {
                    decode_int(cursor)?.$to().ok_or(Error::TooBig)
                }
            }
        )*
    };
}

impl_int_from_cbor!(
    (u8, to_u8),
    (u16, to_u16),
    (u32, to_u32),
    (u64, to_u64),
    (u128, to_u128),
    (usize, to_usize),
    (i8, to_i8),
    (i16, to_i16),
    (i32, to_i32),
    (i64, to_i64),
    (i128, to_i128),
    (isize, to_isize)
);

impl FromCbor for BigInt {
    fn decode(cursor: &mut Cursor) -> Result<Self, Error> {
        decode_int(cursor)
    }
}

impl FromCbor for BigUint {
    fn decode(cursor: &mut Cursor) -> Result<Self, Error> {
        decode_int(cursor)?.to_biguint().ok_or(Error::TooBig)
    }
}

macro_rules! impl_uint_to_cbor {
    ($($ty:ty),*) => {
        $(
            impl ToCbor for $ty {
                fn to_cbor(&self, encoder: &mut Encoder) {
                    encoder.emit_uint_minor(MAJOR_UNSIGNED, *self as u64);
                }
            }
        )*
    };
}

impl_uint_to_cbor!(u8, u16, u32, u64, usize);

fn emit_i64(encoder: &mut Encoder, val: i64) {
    if val >= 0 {
        encoder.emit_uint_minor(MAJOR_UNSIGNED, val as u64);
    } else {
        encoder.emit_uint_minor(MAJOR_NEGATIVE, (-1 - val) as u64);
    }
}

macro_rules! impl_int_to_cbor {
    ($($ty:ty),*) => {
        $(
            impl ToCbor for $ty {
                fn to_cbor(&self, encoder: &mut Encoder) {
                    emit_i64(encoder, *self as i64)
                }
            }
        )*
    };
}

impl_int_to_cbor!(i8, i16, i32, i64, isize);

impl ToCbor for u128 {
    fn to_cbor(&self, encoder: &mut Encoder) {
        encoder.emit_int(&BigInt::from(*self))
    }
}

impl ToCbor for i128 {
    fn to_cbor(&self, encoder: &mut Encoder) {
        encoder.emit_int(&BigInt::from(*self))
    }
}

impl ToCbor for BigInt {
    fn to_cbor(&self, encoder: &mut Encoder) {
        encoder.emit_int(self)
    }
}

impl ToCbor for BigUint {
    fn to_cbor(&self, encoder: &mut Encoder) {
        encoder.emit_int(&BigInt::from(self.clone()))
    }
}
