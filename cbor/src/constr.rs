/*!
Constructor values: a variant index plus an ordered list of fields.

The index is folded into the argument of a major type 6 tag:

| index       | tag argument                                   |
|-------------|------------------------------------------------|
| `0..=6`     | `121 + index`                                  |
| `7..=127`   | `1280 + (index - 7)`                           |
| `128..`     | `102`, then a 2 item list `[index, fields]`    |

Every other tag argument is malformed. These ranges are shared with other
implementations byte for byte, so the boundaries are exact.
*/

use super::decode::{FromCbor, incorrect_type, probe_with};
use super::encode::{self, Array, Encoder, ToCbor};
use super::head::*;
use super::int::decode_int;
use super::list::{ListReader, decode_list, decode_list_lazy, is_list};
use super::{cursor::Cursor, error::Error};
use num_traits::ToPrimitive;
use tracing::debug;

/// Tag argument announcing an explicit `[index, fields]` pair.
pub const CONSTR_ESCAPE: u64 = 102;

const COMPACT_BASE: u64 = 121;
const COMPACT_MAX_INDEX: u64 = 6;
const EXTENDED_BASE: u64 = 1280;
const EXTENDED_MAX_INDEX: u64 = 127;

fn index_from_tag_argument(n: u64) -> Option<u64> {
    match n {
        121..=127 => Some(n - COMPACT_BASE),
        1280..=1400 => Some(n - EXTENDED_BASE + COMPACT_MAX_INDEX + 1),
        _ => None,
    }
}

/// Decode the tag of a constructor, leaving the cursor at its field list.
pub fn decode_constr_tag(cursor: &mut Cursor) -> Result<u64, Error> {
    let (major, n) = decode_definite_head(cursor)?;
    if major != MAJOR_TAG {
        return Err(incorrect_type("Constr", major));
    }
    if n == CONSTR_ESCAPE {
        match decode_head(cursor)? {
            Head {
                major: MAJOR_ARRAY,
                length: Length::Definite(2),
            } => {}
            head => {
                debug!("Constructor escape followed by {head:?}");
                return Err(Error::InvalidConstrEscape);
            }
        }
        return decode_int(cursor)?
            .to_u64()
            .ok_or(Error::InvalidConstrEscape);
    }
    index_from_tag_argument(n).ok_or_else(|| {
        debug!(
            "Tag argument {n} at offset {} is not a constructor",
            cursor.position()
        );
        Error::InvalidConstrTag(n)
    })
}

/// Decode a constructor, reading each field with `field`.
pub fn decode_constr<T, F>(cursor: &mut Cursor, field: F) -> Result<(u64, Vec<T>), Error>
where
    F: FnMut(&mut Cursor, usize) -> Result<T, Error>,
{
    let tag = decode_constr_tag(cursor)?;
    let fields = decode_list(cursor, field)?;
    Ok((tag, fields))
}

/// Decode a constructor tag, and return a reader over its fields.
pub fn decode_constr_lazy<'c, 'a>(
    cursor: &'c mut Cursor<'a>,
) -> Result<(u64, ListReader<'c, 'a>), Error> {
    let tag = decode_constr_tag(cursor)?;
    let reader = decode_list_lazy(cursor)?;
    Ok((tag, reader))
}

/// True if the next item is a tag whose argument belongs to the
/// constructor scheme.
pub fn is_constr(cursor: &Cursor) -> Result<bool, Error> {
    probe_with(cursor, |cursor| match decode_definite_head(cursor)? {
        (MAJOR_TAG, n) => Ok(n == CONSTR_ESCAPE || index_from_tag_argument(n).is_some()),
        _ => Ok(false),
    })
}

/// Decode either a constructor or a plain list whose first item is the tag.
///
/// Either way the reader is left at the first field. Field indices are the
/// item positions within the underlying list, so for a plain list the first
/// field is at index 1.
pub fn decode_tagged<'c, 'a>(
    cursor: &'c mut Cursor<'a>,
) -> Result<(u64, ListReader<'c, 'a>), Error> {
    if is_list(cursor)? {
        let mut reader = decode_list_lazy(cursor)?;
        let tag = reader.parse::<u64>()?;
        Ok((tag, reader))
    } else {
        decode_constr_lazy(cursor)
    }
}

/// Decode a tagged value, dispatching on its tag.
///
/// `f` must read every field: leftovers are [`Error::AdditionalItems`].
pub fn decode_tagged_with<T, F>(cursor: &mut Cursor, f: F) -> Result<T, Error>
where
    F: FnOnce(u64, &mut ListReader) -> Result<T, Error>,
{
    let (tag, mut reader) = decode_tagged(cursor)?;
    let value = f(tag, &mut reader)?;
    reader.finish()?;
    Ok(value)
}

fn checked_tag<N>(tag: &N) -> Result<u64, encode::Error>
where
    N: ToPrimitive,
{
    match (tag.to_u64(), tag.to_f64()) {
        (Some(t), Some(f)) if f.fract() == 0.0 => Ok(t),
        _ => Err(encode::Error::InvalidConstrTag),
    }
}

impl Encoder {
    fn emit_constr_tag(&mut self, tag: u64) {
        if tag <= COMPACT_MAX_INDEX {
            self.emit_uint_minor(MAJOR_TAG, COMPACT_BASE + tag)
        } else if tag <= EXTENDED_MAX_INDEX {
            self.emit_uint_minor(MAJOR_TAG, EXTENDED_BASE + tag - COMPACT_MAX_INDEX - 1)
        } else {
            self.emit_uint_minor(MAJOR_TAG, CONSTR_ESCAPE);
            self.emit_uint_minor(MAJOR_ARRAY, 2);
            self.emit_uint_minor(MAJOR_UNSIGNED, tag)
        }
    }

    /// Emit a constructor whose fields are written by `f`, with the usual
    /// list framing.
    ///
    /// Tags must be whole numbers in `0..=u64::MAX`; anything else,
    /// including indices of 2^64 and above, is
    /// [`encode::Error::InvalidConstrTag`] before anything is written.
    /// The decoder reads the escaped index as a `u64` too, so every tag
    /// accepted here decodes back unchanged.
    pub fn emit_constr_with<N, F>(&mut self, tag: N, f: F) -> Result<(), encode::Error>
    where
        N: ToPrimitive,
        F: FnOnce(&mut Array),
    {
        let tag = checked_tag(&tag)?;
        self.emit_constr_tag(tag);
        self.emit_list_with(f);
        Ok(())
    }

    pub fn emit_constr<N, T>(&mut self, tag: N, fields: &[T]) -> Result<(), encode::Error>
    where
        N: ToPrimitive,
        T: ToCbor,
    {
        self.emit_constr_with(tag, |a| {
            for field in fields {
                a.emit(field);
            }
        })
    }
}

/// A constructor with homogeneous fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constr<T> {
    pub tag: u64,
    pub fields: Vec<T>,
}

impl<T> Constr<T> {
    pub fn new(tag: u64, fields: Vec<T>) -> Self {
        Self { tag, fields }
    }
}

impl<T> FromCbor for Constr<T>
where
    T: FromCbor,
{
    fn decode(cursor: &mut Cursor) -> Result<Self, Error> {
        decode_constr(cursor, |cursor, _| T::decode(cursor)).map(|(tag, fields)| Self { tag, fields })
    }
}

impl<T> ToCbor for Constr<T>
where
    T: ToCbor,
{
    fn to_cbor(&self, encoder: &mut Encoder) {
        encoder.emit_constr_tag(self.tag);
        encoder.emit_list(&self.fields)
    }
}
