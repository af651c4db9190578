/*!
Diagnostic rendering of CBOR items

Items are recognised with the library's probes, so constructors and bignums
are shown by meaning rather than as raw tags:

- `constr(5000)[1, 2]` for a constructor, whichever tag form it uses
- `18446744073709551616` for a tag 2 bignum
- `[_ 1, 2]` for an indefinite list
*/

use num_bigint::BigInt;
use plutus_cbor::decode::*;
use std::fmt;
use tracing::trace;

/// Deepest nesting of lists, maps and tags that will be rendered
pub const MAX_RECURSION: usize = 128;

/// One decoded CBOR item
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Int(BigInt),
    Float(f64),
    Bytes(Vec<u8>),
    Text(String),
    List { items: Vec<Item>, indefinite: bool },
    Map(Vec<(Item, Item)>),
    Constr(u64, Vec<Item>),
    Tagged(u64, Box<Item>),
    Bool(bool),
    Null,
    Simple(u64),
}

impl Item {
    /// Decode the next item, whatever it holds
    pub fn parse(cursor: &mut Cursor) -> Result<Self, Error> {
        Self::parse_nested(cursor, MAX_RECURSION)
    }

    fn parse_nested(cursor: &mut Cursor, max_recursion: usize) -> Result<Self, Error> {
        if max_recursion == 0 {
            return Err(Error::MaxRecursion);
        }
        let max_recursion = max_recursion - 1;
        trace!("Parsing item at offset {}", cursor.position());

        if is_float(cursor)? {
            return decode_float(cursor).map(Item::Float);
        }
        if is_bool(cursor)? {
            return decode_bool(cursor).map(Item::Bool);
        }
        if is_null(cursor)? {
            return decode_null(cursor).map(|_| Item::Null);
        }
        // Bignums are tags, so integers must be tried first
        if is_int(cursor)? {
            return decode_int(cursor).map(Item::Int);
        }
        if is_constr(cursor)? {
            let (tag, fields) = decode_constr(cursor, |c, _| Item::parse_nested(c, max_recursion))?;
            return Ok(Item::Constr(tag, fields));
        }
        if is_tag(cursor)? {
            let tag = decode_tag(cursor)?;
            return Ok(Item::Tagged(tag, Box::new(Item::parse_nested(cursor, max_recursion)?)));
        }
        if is_bytes(cursor)? {
            return decode_bytes(cursor).map(Item::Bytes);
        }
        if is_string(cursor)? {
            return decode_string(cursor).map(Item::Text);
        }
        if is_list(cursor)? {
            let indefinite = is_indef_list(cursor)?;
            let items = decode_list(cursor, |c, _| Item::parse_nested(c, max_recursion))?;
            return Ok(Item::List { items, indefinite });
        }
        if is_map(cursor)? {
            return decode_map(
                cursor,
                |c| Item::parse_nested(c, max_recursion),
                |c| Item::parse_nested(c, max_recursion),
            )
            .map(Item::Map);
        }
        decode_head(cursor)?.definite().map(Item::Simple)
    }

    /// Decode every item in `data`, which may hold a sequence of them
    pub fn parse_all(data: &[u8]) -> Result<Vec<Self>, Error> {
        let mut cursor = Cursor::new(data);
        let mut items = Vec::new();
        while !cursor.is_at_end() {
            items.push(Item::parse(&mut cursor)?);
        }
        Ok(items)
    }
}

fn write_joined<'a, I>(f: &mut fmt::Formatter<'_>, items: I) -> fmt::Result
where
    I: IntoIterator<Item = &'a Item>,
{
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Item::Int(n) => write!(f, "{n}"),
            Item::Float(v) if v.is_nan() => f.write_str("NaN"),
            Item::Float(v) if v.is_infinite() => {
                f.write_str(if *v > 0.0 { "Infinity" } else { "-Infinity" })
            }
            Item::Float(v) => write!(f, "{v:?}"),
            Item::Bytes(b) => write!(f, "h'{}'", hex::encode(b)),
            Item::Text(s) => write!(f, "{s:?}"),
            Item::List { items, indefinite } => {
                f.write_str(if *indefinite { "[_ " } else { "[" })?;
                write_joined(f, items)?;
                f.write_str("]")
            }
            Item::Map(pairs) => {
                f.write_str("{")?;
                for (i, (key, value)) in pairs.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
            Item::Constr(tag, fields) => {
                write!(f, "constr({tag})[")?;
                write_joined(f, fields)?;
                f.write_str("]")
            }
            Item::Tagged(tag, item) => write!(f, "{tag}({item})"),
            Item::Bool(b) => write!(f, "{b}"),
            Item::Null => f.write_str("null"),
            Item::Simple(n) => write!(f, "simple({n})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    fn render(data: &[u8]) -> String {
        Item::parse_all(data)
            .unwrap()
            .iter()
            .map(Item::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn scalars() {
        assert_eq!(render(&hex!("1903e8")), "1000");
        assert_eq!(render(&hex!("3903e7")), "-1000");
        assert_eq!(render(&hex!("c249010000000000000000")), "18446744073709551616");
        assert_eq!(render(&hex!("c349010000000000000000")), "-18446744073709551617");
        assert_eq!(render(&hex!("f93e00")), "1.5");
        assert_eq!(render(&hex!("f97c00")), "Infinity");
        assert_eq!(render(&hex!("f97c01")), "NaN");
        assert_eq!(render(&hex!("4401020304")), "h'01020304'");
        assert_eq!(render(&hex!("6449455446")), "\"IETF\"");
        assert_eq!(render(&hex!("f4 f5 f6 f7")), "false\ntrue\nnull\nsimple(23)");
    }

    #[test]
    fn containers() {
        assert_eq!(render(&hex!("8301820203820405")), "[1, [2, 3], [4, 5]]");
        assert_eq!(render(&hex!("9f018202039f0405ffff")), "[_ 1, [2, 3], [_ 4, 5]]");
        assert_eq!(render(&hex!("a26161016162820203")), "{\"a\": 1, \"b\": [2, 3]}");
        assert_eq!(render(&hex!("d9010283010203")), "258([1, 2, 3])");
        assert_eq!(
            render(&hex!("c074323031332d30332d32315432303a30343a30305a")),
            "0(\"2013-03-21T20:04:00Z\")"
        );
    }

    #[test]
    fn constrs() {
        assert_eq!(render(&hex!("d87980")), "constr(0)[]");
        assert_eq!(render(&hex!("d8799f0102ff")), "constr(0)[1, 2]");
        assert_eq!(render(&hex!("d905789f40ff")), "constr(127)[h'']");
        assert_eq!(
            render(&hex!("d86682191388 9fd87a80ff")),
            "constr(5000)[constr(1)[]]"
        );

        // Arguments outside the constructor ranges are plain tags
        assert_eq!(render(&hex!("d86780")), "103([])");
    }

    #[test]
    fn errors() {
        assert_eq!(Item::parse_all(&hex!("ff")), Err(Error::BadHeader(0xff)));
        assert_eq!(Item::parse_all(&hex!("8201")), Err(Error::EndOfStream));
        assert_eq!(Item::parse_all(&hex!("5f6161ff")), Err(Error::InvalidChunk));
    }

    fn nested(prefix: &[u8], depth: usize) -> Vec<u8> {
        let mut data = prefix.repeat(depth);
        data.push(0x00);
        data
    }

    #[test]
    fn nesting_limit() {
        assert!(Item::parse_all(&nested(&[0x81], MAX_RECURSION - 1)).is_ok());
        assert_eq!(
            Item::parse_all(&nested(&[0x81], MAX_RECURSION)),
            Err(Error::MaxRecursion)
        );
        assert_eq!(
            Item::parse_all(&nested(&[0xa1, 0x00], 10_000)),
            Err(Error::MaxRecursion)
        );
        assert_eq!(
            Item::parse_all(&nested(&[0xd8, 0x79, 0x81], 10_000)),
            Err(Error::MaxRecursion)
        );
        assert_eq!(
            Item::parse_all(&nested(&[0xc0], 10_000)),
            Err(Error::MaxRecursion)
        );
    }
}
