use super::decode::{FromCbor, incorrect_type};
use super::encode::{Encoder, ToCbor};
use super::head::*;
use super::{cursor::Cursor, error::Error};
use std::collections::BTreeMap;

/// Decode a map, letting the value decoder see the key it belongs to.
///
/// Pairs come back in wire order; duplicate keys are not checked.
pub fn decode_map_with<K, V, FK, FV>(
    cursor: &mut Cursor,
    mut key: FK,
    mut value: FV,
) -> Result<Vec<(K, V)>, Error>
where
    FK: FnMut(&mut Cursor) -> Result<K, Error>,
    FV: FnMut(&K, &mut Cursor) -> Result<V, Error>,
{
    let head = decode_head(cursor)?;
    if head.major != MAJOR_MAP {
        return Err(incorrect_type("Map", head.major));
    }
    let mut pairs = Vec::new();
    match head.length {
        Length::Definite(n) => {
            for _ in 0..n {
                let k = key(cursor)?;
                let v = value(&k, cursor)?;
                pairs.push((k, v));
            }
        }
        Length::Indefinite => {
            while !shift_break(cursor)? {
                let k = key(cursor)?;
                if cursor.peek_one()? == BREAK {
                    return Err(Error::PartialMap);
                }
                let v = value(&k, cursor)?;
                pairs.push((k, v));
            }
        }
    }
    Ok(pairs)
}

/// Decode a map with independent key and value decoders.
pub fn decode_map<K, V, FK, FV>(
    cursor: &mut Cursor,
    key: FK,
    mut value: FV,
) -> Result<Vec<(K, V)>, Error>
where
    FK: FnMut(&mut Cursor) -> Result<K, Error>,
    FV: FnMut(&mut Cursor) -> Result<V, Error>,
{
    decode_map_with(cursor, key, |_, cursor| value(cursor))
}

pub fn is_map(cursor: &Cursor) -> Result<bool, Error> {
    Ok(peek_major(cursor)? == MAJOR_MAP)
}

impl<K, V> FromCbor for BTreeMap<K, V>
where
    K: FromCbor + Ord,
    V: FromCbor,
{
    fn decode(cursor: &mut Cursor) -> Result<Self, Error> {
        decode_map(cursor, K::decode, V::decode).map(|pairs| pairs.into_iter().collect())
    }
}

impl<K, V> ToCbor for BTreeMap<K, V>
where
    K: ToCbor,
    V: ToCbor,
{
    fn to_cbor(&self, encoder: &mut Encoder) {
        encoder.emit_map_with(self.len(), |m| {
            for (key, value) in self {
                m.emit(key);
                m.emit(value);
            }
        })
    }
}
