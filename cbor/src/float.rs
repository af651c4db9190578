/*!
IEEE-754 floats at the three CBOR widths.

Half precision has no native Rust type, so it is converted by hand from
and to `f64`.
*/

use super::decode::{FromCbor, incorrect_type};
use super::encode::{self, Encoder, ToCbor};
use super::{cursor::Cursor, error::Error};
use num_traits::FromPrimitive;

pub const FLOAT16: u8 = 0xF9;
pub const FLOAT32: u8 = 0xFA;
pub const FLOAT64: u8 = 0xFB;

/// Canonical bit pattern used for every NaN written as a float16.
const F16_NAN: u16 = 0x7C01;

pub fn f16_bits_to_f64(bits: u16) -> f64 {
    let sign = if bits & 0x8000 != 0 { -1.0 } else { 1.0 };
    let exponent = ((bits >> 10) & 0x1F) as i32;
    let significand = (bits & 0x3FF) as f64;
    match exponent {
        0 if significand == 0.0 => sign * 0.0,
        0 => sign * significand * 2f64.powi(-24),
        31 if significand == 0.0 => sign * f64::INFINITY,
        31 => f64::NAN,
        _ => sign * 2f64.powi(exponent - 15) * (1.0 + significand / 1024.0),
    }
}

/// Round `value` to the nearest float16 bit pattern.
pub fn f64_to_f16_bits(value: f64) -> Result<u16, encode::Error> {
    if value == 0.0 {
        return Ok(if value.is_sign_negative() { 0x8000 } else { 0 });
    }
    if value.is_nan() {
        return Ok(F16_NAN);
    }
    if value.is_infinite() {
        return Ok(if value > 0.0 { 0x7C00 } else { 0xFC00 });
    }

    let sign: u16 = if value < 0.0 { 0x8000 } else { 0 };
    let value = value.abs();
    let mut p = value.log2().floor() as i32;
    // log2 may land one off either side of an exact power of two
    let m = value / 2f64.powi(p);
    if m < 1.0 {
        p -= 1;
    } else if m >= 2.0 {
        p += 1;
    }
    if p > 15 {
        return Err(encode::Error::Float16Overflow);
    }

    let magnitude = if p < -14 {
        // Subnormal; a significand that rounds up to 1024 is the smallest normal
        (value * 2f64.powi(24)).round() as u16
    } else {
        let significand = ((value / 2f64.powi(p) - 1.0) * 1024.0).round() as u16;
        // A significand of 1024 carries into the exponent
        (((p + 15) as u16) << 10) + significand
    };
    if magnitude >= 0x7C00 {
        return Err(encode::Error::Float16Overflow);
    }
    Ok(sign | magnitude)
}

fn expect_marker(cursor: &mut Cursor, marker: u8) -> Result<(), Error> {
    if cursor.is_at_end() {
        return Err(Error::EmptyHead);
    }
    let b = cursor.shift_one()?;
    if b != marker {
        return Err(incorrect_type("Float", b >> 5));
    }
    Ok(())
}

pub fn decode_float16(cursor: &mut Cursor) -> Result<f64, Error> {
    expect_marker(cursor, FLOAT16)?;
    Ok(f16_bits_to_f64(u16::from_be_bytes(cursor.shift_array()?)))
}

pub fn decode_float32(cursor: &mut Cursor) -> Result<f32, Error> {
    expect_marker(cursor, FLOAT32)?;
    Ok(f32::from_be_bytes(cursor.shift_array()?))
}

pub fn decode_float64(cursor: &mut Cursor) -> Result<f64, Error> {
    expect_marker(cursor, FLOAT64)?;
    Ok(f64::from_be_bytes(cursor.shift_array()?))
}

/// Decode a float of any of the three widths.
pub fn decode_float(cursor: &mut Cursor) -> Result<f64, Error> {
    match cursor.peek_one() {
        Ok(FLOAT16) => decode_float16(cursor),
        Ok(FLOAT32) => decode_float32(cursor).map(f64::from),
        Ok(FLOAT64) => decode_float64(cursor),
        Ok(b) => Err(incorrect_type("Float", b >> 5)),
        Err(_) => Err(Error::EmptyHead),
    }
}

pub fn is_float16(cursor: &Cursor) -> Result<bool, Error> {
    Ok(cursor.peek_one()? == FLOAT16)
}

pub fn is_float32(cursor: &Cursor) -> Result<bool, Error> {
    Ok(cursor.peek_one()? == FLOAT32)
}

pub fn is_float64(cursor: &Cursor) -> Result<bool, Error> {
    Ok(cursor.peek_one()? == FLOAT64)
}

pub fn is_float(cursor: &Cursor) -> Result<bool, Error> {
    Ok(matches!(cursor.peek_one()?, FLOAT16 | FLOAT32 | FLOAT64))
}

impl Encoder {
    pub fn emit_float16(&mut self, value: f64) -> Result<(), encode::Error> {
        let bits = f64_to_f16_bits(value)?;
        self.emit_raw_slice(&[FLOAT16]);
        self.emit_raw(bits.to_be_bytes());
        Ok(())
    }

    pub fn emit_float32(&mut self, value: f32) {
        self.emit_raw_slice(&[FLOAT32]);
        self.emit_raw(value.to_be_bytes())
    }

    pub fn emit_float64(&mut self, value: f64) {
        self.emit_raw_slice(&[FLOAT64]);
        self.emit_raw(value.to_be_bytes())
    }
}

/// A float that is written at half precision.
///
/// The value is checked for range on construction, so encoding it cannot
/// fail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct F16(f64);

impl F16 {
    pub fn new(value: f64) -> Result<Self, encode::Error> {
        f64_to_f16_bits(value)?;
        Ok(Self(value))
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl ToCbor for F16 {
    fn to_cbor(&self, encoder: &mut Encoder) {
        let bits = f64_to_f16_bits(self.0).unwrap_or(F16_NAN);
        encoder.emit_raw_slice(&[FLOAT16]);
        encoder.emit_raw(bits.to_be_bytes())
    }
}

impl FromCbor for F16 {
    fn decode(cursor: &mut Cursor) -> Result<Self, Error> {
        decode_float16(cursor).map(Self)
    }
}

impl ToCbor for f32 {
    fn to_cbor(&self, encoder: &mut Encoder) {
        encoder.emit_float32(*self)
    }
}

impl ToCbor for f64 {
    fn to_cbor(&self, encoder: &mut Encoder) {
        encoder.emit_float64(*self)
    }
}

impl FromCbor for f64 {
    fn decode(cursor: &mut Cursor) -> Result<Self, Error> {
        decode_float(cursor)
    }
}

impl FromCbor for f32 {
    fn decode(cursor: &mut Cursor) -> Result<Self, Error> {
        let v = decode_float(cursor)?;
        if v.is_nan() {
            return Ok(f32::NAN);
        }
        f32::from_f64(v).ok_or(Error::TooBig)
    }
}
