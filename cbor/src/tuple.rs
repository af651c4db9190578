use super::decode::FromCbor;
use super::encode::{Encoder, ToCbor};
use super::list::decode_list_lazy;
use super::{cursor::Cursor, error::Error};

/// Decode a list holding `required` items followed by up to `optional`
/// more.
///
/// `item` is called with the index of every item present.
pub fn decode_tuple<T, F>(
    cursor: &mut Cursor,
    required: usize,
    optional: usize,
    mut item: F,
) -> Result<Vec<T>, Error>
where
    F: FnMut(&mut Cursor, usize) -> Result<T, Error>,
{
    let mut reader = decode_list_lazy(cursor)?;
    let mut items = Vec::new();
    while items.len() < required + optional {
        match reader.try_next(|cursor, index| item(cursor, index))? {
            Some(value) => items.push(value),
            None => break,
        }
    }
    if items.len() < required {
        return Err(Error::TooFewItems {
            expected: required,
            found: items.len(),
        });
    }
    reader.finish()?;
    Ok(items)
}

macro_rules! impl_tuple {
    ($( ($($name:ident),+) ),*) => {
        $(
            impl<$($name),+> FromCbor for ($($name,)+)
            where
                $($name: FromCbor,)+
            {
                fn decode(cursor: &mut Cursor) -> Result<Self, Error> {
                    const ARITY: usize = [$(stringify!($name)),+].len();
                    let mut reader = decode_list_lazy(cursor)?;
                    let value = ($(
                        reader.try_parse::<$name>()?.ok_or_else(|| Error::TooFewItems {
                            expected: ARITY,
                            found: reader.index(),
                        })?,
                    )+);
                    reader.finish()?;
                    Ok(value)
                }
            }

            impl<$($name),+> ToCbor for ($($name,)+)
            where
                $($name: ToCbor,)+
            {
                #[allow(non_snake_case)]
                fn to_cbor(&self, encoder: &mut Encoder) {
                    let ($($name,)+) = self;
                    encoder.emit_list_with(|a| {
                        $(a.emit($name);)+
                    })
                }
            }
        )*
    };
}

impl_tuple!(
    (A),
    (A, B),
    (A, B, C),
    (A, B, C, D),
    (A, B, C, D, E),
    (A, B, C, D, E, F)
);
