/*!
The initial byte and length argument shared by every CBOR item.
*/

use super::cursor::Cursor;
use super::error::Error;

pub const MAJOR_UNSIGNED: u8 = 0;
pub const MAJOR_NEGATIVE: u8 = 1;
pub const MAJOR_BYTES: u8 = 2;
pub const MAJOR_TEXT: u8 = 3;
pub const MAJOR_ARRAY: u8 = 4;
pub const MAJOR_MAP: u8 = 5;
pub const MAJOR_TAG: u8 = 6;
pub const MAJOR_SIMPLE: u8 = 7;

/// Terminator of every indefinite length item.
pub const BREAK: u8 = 0xFF;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Length {
    Definite(u64),
    Indefinite,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Head {
    pub major: u8,
    pub length: Length,
}

impl Head {
    /// The definite argument, or [`Error::BadHeader`] for an indefinite head.
    pub fn definite(self) -> Result<u64, Error> {
        match self.length {
            Length::Definite(n) => Ok(n),
            Length::Indefinite => Err(Error::BadHeader((self.major << 5) | 31)),
        }
    }
}

/// Decode a head, advancing past the initial byte and any argument bytes.
///
/// Float markers (`0xF9`..=`0xFB`) are rejected: floats have their own
/// decoders. The indefinite marker is only legal for majors 2, 3, 4, 5 and 7.
pub fn decode_head(cursor: &mut Cursor) -> Result<Head, Error> {
    if cursor.is_at_end() {
        return Err(Error::EmptyHead);
    }
    let b0 = cursor.shift_one()?;
    let major = b0 >> 5;
    let minor = b0 & 0x1F;
    let length = match minor {
        0..=23 => Length::Definite(minor as u64),
        25..=27 if major == MAJOR_SIMPLE => return Err(Error::UnexpectedFloat),
        24 => Length::Definite(cursor.shift_one()? as u64),
        25 => Length::Definite(u16::from_be_bytes(cursor.shift_array()?) as u64),
        26 => Length::Definite(u32::from_be_bytes(cursor.shift_array()?) as u64),
        27 => Length::Definite(u64::from_be_bytes(cursor.shift_array()?)),
        31 => match major {
            MAJOR_BYTES | MAJOR_TEXT | MAJOR_ARRAY | MAJOR_MAP | MAJOR_SIMPLE => {
                Length::Indefinite
            }
            _ => return Err(Error::BadHeader(b0)),
        },
        _ => return Err(Error::InvalidMinorValue(minor)),
    };
    Ok(Head { major, length })
}

/// Decode a head that must carry a definite argument.
pub fn decode_definite_head(cursor: &mut Cursor) -> Result<(u8, u64), Error> {
    let head = decode_head(cursor)?;
    Ok((head.major, head.definite()?))
}

/// The major type of the next item, without consuming it.
pub fn peek_major(cursor: &Cursor) -> Result<u8, Error> {
    cursor.peek_one().map(|b| b >> 5)
}

/// Consume the break byte if it is next.
pub(crate) fn shift_break(cursor: &mut Cursor) -> Result<bool, Error> {
    if cursor.peek_one()? == BREAK {
        cursor.shift_one()?;
        Ok(true)
    } else {
        Ok(false)
    }
}
