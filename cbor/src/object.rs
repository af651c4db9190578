use super::decode::FromCbor;
use super::map::decode_map_with;
use super::{cursor::Cursor, error::Error};
use std::collections::BTreeMap;
use std::fmt::Debug;
use tracing::debug;

type FieldDecoder<'f, T> = Box<dyn FnMut(&mut Cursor) -> Result<T, Error> + 'f>;

/// Decodes a map with a known set of keys, like the fields of a record.
///
/// Each key gets its own decoder. Keys on the wire without a decoder fail
/// the decode; registered keys missing from the wire are simply absent from
/// the result.
///
/// ```
/// use plutus_cbor::decode::{Cursor, FromCbor, ObjectDecoder, decode_string};
///
/// #[derive(Debug, PartialEq)]
/// enum Field {
///     Name(String),
///     Age(u8),
/// }
///
/// let data = [0xa2, 0x00, 0x62, 0x68, 0x69, 0x01, 0x18, 0x2a];
/// let object = ObjectDecoder::<i64, Field>::new()
///     .field(0, |c| decode_string(c).map(Field::Name))
///     .field(1, |c| u8::decode(c).map(Field::Age))
///     .decode(&mut Cursor::new(&data))
///     .unwrap();
/// assert_eq!(object[&0], Field::Name("hi".into()));
/// assert_eq!(object[&1], Field::Age(42));
/// ```
pub struct ObjectDecoder<'f, K, T> {
    fields: BTreeMap<K, FieldDecoder<'f, T>>,
}

impl<K, T> Default for ObjectDecoder<'_, K, T>
where
    K: Ord,
{
    fn default() -> Self {
        Self {
            fields: BTreeMap::new(),
        }
    }
}

impl<'f, K, T> ObjectDecoder<'f, K, T>
where
    K: FromCbor + Ord + Debug,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the decoder for `key`, replacing any earlier one.
    pub fn field<F>(mut self, key: impl Into<K>, decoder: F) -> Self
    where
        F: FnMut(&mut Cursor) -> Result<T, Error> + 'f,
    {
        self.fields.insert(key.into(), Box::new(decoder));
        self
    }

    pub fn decode(&mut self, cursor: &mut Cursor) -> Result<BTreeMap<K, T>, Error> {
        let pairs = decode_map_with(cursor, K::decode, |key, cursor| {
            match self.fields.get_mut(key) {
                Some(decoder) => decoder(cursor),
                None => {
                    debug!("No decoder registered for field {key:?}");
                    Err(Error::UnhandledField(format!("{key:?}")))
                }
            }
        })?;
        Ok(pairs.into_iter().collect())
    }
}

/// An object keyed by integers.
pub type IntKeyObject<'f, T> = ObjectDecoder<'f, i64, T>;

/// An object keyed by text strings.
pub type StrKeyObject<'f, T> = ObjectDecoder<'f, String, T>;
