/*!
Decoding entry points.

Every decoder takes a [`Cursor`] and, on success, leaves it just past the
one item it decoded. On failure the cursor position is unspecified and the
cursor should be dropped. Probes (`is_*`) take the cursor by shared
reference and so can never move it.
*/

pub use super::cursor::{BytesLike, Cursor};
pub use super::error::Error;

pub use super::bytes::{ByteString, decode_bytes, is_bytes, is_def_bytes, is_indef_bytes};
pub use super::constr::{
    Constr, decode_constr, decode_constr_lazy, decode_constr_tag, decode_tagged,
    decode_tagged_with, is_constr,
};
pub use super::float::{
    decode_float, decode_float16, decode_float32, decode_float64, f16_bits_to_f64, is_float,
    is_float16, is_float32, is_float64,
};
pub use super::head::{Head, Length, decode_definite_head, decode_head, peek_major};
pub use super::int::{decode_int, is_int};
pub use super::list::{ListReader, decode_list, decode_list_lazy, is_def_list, is_indef_list, is_list};
pub use super::map::{decode_map, decode_map_with, is_map};
pub use super::object::ObjectDecoder;
pub use super::set::{Set, decode_set, is_set};
pub use super::simple::{decode_bool, decode_null, decode_tag, is_bool, is_null, is_tag};
pub use super::text::{decode_string, is_string};
pub use super::tuple::decode_tuple;

use tracing::debug;

/// A type that can be read from exactly one CBOR item.
pub trait FromCbor: Sized {
    fn decode(cursor: &mut Cursor) -> Result<Self, Error>;
}

/// Decode one item from the start of `input`, ignoring anything after it.
pub fn decode<T, I>(input: &I) -> Result<T, Error>
where
    T: FromCbor,
    I: BytesLike + ?Sized,
{
    decode_with(input, T::decode)
}

/// Decode one item with a custom decoder, ignoring anything after it.
pub fn decode_with<T, I, F>(input: &I, f: F) -> Result<T, Error>
where
    I: BytesLike + ?Sized,
    F: FnOnce(&mut Cursor) -> Result<T, Error>,
{
    let bytes = input.to_bytes()?;
    f(&mut Cursor::new(&bytes))
}

/// Decode one item that must span the whole of `input`.
pub fn decode_all<T, I>(input: &I) -> Result<T, Error>
where
    T: FromCbor,
    I: BytesLike + ?Sized,
{
    let bytes = input.to_bytes()?;
    let mut cursor = Cursor::new(&bytes);
    let value = T::decode(&mut cursor)?;
    if !cursor.is_at_end() {
        debug!(
            "Item ends at offset {} of {}",
            cursor.position(),
            cursor.len()
        );
        return Err(Error::TrailingData(cursor.remaining()));
    }
    Ok(value)
}

/// Answer a yes/no question by decoding on a throwaway copy of `cursor`.
///
/// Only an already exhausted cursor reports an error; any decode failure
/// is simply `false`.
pub(crate) fn probe<T, F>(cursor: &Cursor, f: F) -> Result<bool, Error>
where
    F: FnOnce(&mut Cursor) -> Result<T, Error>,
{
    cursor.peek_one()?;
    Ok(f(&mut cursor.copy()).is_ok())
}

/// As [`probe`], for a predicate that reads ahead on the copy.
pub(crate) fn probe_with<F>(cursor: &Cursor, f: F) -> Result<bool, Error>
where
    F: FnOnce(&mut Cursor) -> Result<bool, Error>,
{
    cursor.peek_one()?;
    Ok(matches!(f(&mut cursor.copy()), Ok(true)))
}

pub(crate) fn incorrect_type(expected: &'static str, major: u8) -> Error {
    Error::IncorrectType {
        expected,
        found: super::error::major_name(major),
    }
}

/// Take the payload of a definite length string.
pub(crate) fn shift_payload<'a>(cursor: &mut Cursor<'a>, n: u64) -> Result<&'a [u8], Error> {
    cursor.shift_many(usize::try_from(n).map_err(|_| Error::EndOfStream)?)
}
