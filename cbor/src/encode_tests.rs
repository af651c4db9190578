use super::decode::{self, FromCbor};
use super::encode::*;
use super::{ByteString, Constr, F16, Set};
use hex_literal::hex;
use num_bigint::BigInt;
use std::collections::BTreeMap;

#[test]
fn rfc_tests() {
    // RFC 8949, Appendix A:
    // https://www.rfc-editor.org/rfc/rfc8949.html#section-appendix.a

    assert_eq!(emit(&0), hex!("00"));
    assert_eq!(emit(&1), hex!("01"));
    assert_eq!(emit(&10), hex!("0a"));
    assert_eq!(emit(&23), hex!("17"));
    assert_eq!(emit(&24), hex!("1818"));
    assert_eq!(emit(&25), hex!("1819"));
    assert_eq!(emit(&100), hex!("1864"));
    assert_eq!(emit(&1000), hex!("1903e8"));
    assert_eq!(emit(&1000000), hex!("1a000f4240"));
    assert_eq!(emit(&1000000000000u64), hex!("1b000000e8d4a51000"));
    assert_eq!(emit(&18446744073709551615u64), hex!("1bffffffffffffffff"));
    assert_eq!(
        emit(&18446744073709551616u128),
        hex!("c249010000000000000000")
    );
    assert_eq!(
        emit(&-18446744073709551616i128),
        hex!("3bffffffffffffffff")
    );
    assert_eq!(
        emit(&-18446744073709551617i128),
        hex!("c349010000000000000000")
    );
    assert_eq!(emit(&-1), hex!("20"));
    assert_eq!(emit(&-10), hex!("29"));
    assert_eq!(emit(&-100), hex!("3863"));
    assert_eq!(emit(&-1000), hex!("3903e7"));
    assert_eq!(emit(&F16::new(0.0).unwrap()), hex!("f90000"));
    assert_eq!(emit(&F16::new(-0.0).unwrap()), hex!("f98000"));
    assert_eq!(emit(&F16::new(1.0).unwrap()), hex!("f93c00"));
    assert_eq!(emit(&1.1), hex!("fb3ff199999999999a"));
    assert_eq!(emit(&F16::new(1.5).unwrap()), hex!("f93e00"));
    assert_eq!(emit(&F16::new(65504.0).unwrap()), hex!("f97bff"));
    assert_eq!(emit(&100000.0f32), hex!("fa47c35000"));
    assert_eq!(emit(&3.4028234663852886e+38f32), hex!("fa7f7fffff"));
    assert_eq!(emit(&1.0e+300), hex!("fb7e37e43c8800759c"));
    assert_eq!(emit(&F16::new(5.960464477539063e-8).unwrap()), hex!("f90001"));
    assert_eq!(emit(&F16::new(0.00006103515625).unwrap()), hex!("f90400"));
    assert_eq!(emit(&F16::new(-4.0).unwrap()), hex!("f9c400"));
    assert_eq!(emit(&-4.1), hex!("fbc010666666666666"));
    assert_eq!(emit(&F16::new(f64::INFINITY).unwrap()), hex!("f97c00"));
    assert_eq!(emit(&F16::new(f64::NEG_INFINITY).unwrap()), hex!("f9fc00"));
    assert_eq!(emit(&f32::INFINITY), hex!("fa7f800000"));
    assert_eq!(emit(&f64::NEG_INFINITY), hex!("fbfff0000000000000"));
    assert_eq!(emit(&false), hex!("f4"));
    assert_eq!(emit(&true), hex!("f5"));
    assert_eq!(emit(&None::<u8>), hex!("f6"));
    assert_eq!(
        emit_with(|e| {
            e.emit_tag(0);
            e.emit("2013-03-21T20:04:00Z");
            Ok::<_, Error>(())
        })
        .unwrap(),
        hex!("c074323031332d30332d32315432303a30343a30305a")
    );
    assert_eq!(emit(&ByteString::default()), hex!("40"));
    assert_eq!(
        emit(&ByteString(hex!("01020304").to_vec())),
        hex!("4401020304")
    );
    assert_eq!(emit(""), hex!("60"));
    assert_eq!(emit("a"), hex!("6161"));
    assert_eq!(emit("IETF"), hex!("6449455446"));
    assert_eq!(emit("\"\\"), hex!("62225c"));
    assert_eq!(emit("\u{00fc}"), hex!("62c3bc"));
    assert_eq!(emit("\u{6c34}"), hex!("63e6b0b4"));
    assert_eq!(emit("\u{10151}"), hex!("64f0908591"));
    assert_eq!(emit_def_list::<u8>(&[]), hex!("80"));
    assert_eq!(emit_def_list(&[1, 2, 3]), hex!("83010203"));
    assert_eq!(
        emit_with(|e| {
            e.emit_array(Some(3), |a| {
                a.emit(&1);
                a.emit_with(|e| e.emit_def_list(&[2, 3]));
                a.emit_with(|e| e.emit_def_list(&[4, 5]));
            });
            Ok::<_, Error>(())
        })
        .unwrap(),
        hex!("8301820203820405")
    );
    assert_eq!(
        emit_def_list(&(1..=25).collect::<Vec<u8>>()),
        hex!("98190102030405060708090a0b0c0d0e0f101112131415161718181819")
    );
    assert_eq!(emit(&BTreeMap::<u8, u8>::new()), hex!("a0"));
    assert_eq!(emit_map(&[(1, 2), (3, 4)]), hex!("a201020304"));
    assert_eq!(
        emit_with(|e| {
            e.emit_map_with(2, |m| {
                m.emit("a");
                m.emit(&1);
                m.emit("b");
                m.emit_with(|e| e.emit_def_list(&[2, 3]));
            });
            Ok::<_, Error>(())
        })
        .unwrap(),
        hex!("a26161016162820203")
    );
    assert_eq!(
        emit_map(&[("a", "A"), ("b", "B"), ("c", "C"), ("d", "D"), ("e", "E")]),
        hex!("a56161614161626142616361436164614461656145")
    );
    assert_eq!(emit_indef_list::<u8>(&[]), hex!("9fff"));
    assert_eq!(
        emit_with(|e| {
            e.emit_array(None, |a| {
                a.emit(&1);
                a.emit_with(|e| e.emit_def_list(&[2, 3]));
                a.emit_with(|e| e.emit_indef_list(&[4, 5]));
            });
            Ok::<_, Error>(())
        })
        .unwrap(),
        hex!("9f018202039f0405ffff")
    );
}

#[test]
fn integer_vectors() {
    assert_eq!(emit(&0u8), hex!("00"));
    assert_eq!(emit(&23u8), hex!("17"));
    assert_eq!(emit(&24u8), hex!("1818"));
    assert_eq!(emit(&1000000u32), hex!("1a000f4240"));
    assert_eq!(emit(&(BigInt::from(1) << 64u32)), hex!("c249010000000000000000"));
    assert_eq!(emit(&-1i8), hex!("20"));
    assert_eq!(emit(&-1000i16), hex!("3903e7"));
    assert_eq!(emit(&i64::MIN), hex!("3b7fffffffffffffff"));
    assert_eq!(emit(&u128::from(u64::MAX)), hex!("1bffffffffffffffff"));
}

#[test]
fn integer_roundtrip() {
    let one = BigInt::from(1);
    let values = [
        BigInt::from(0),
        BigInt::from(1),
        BigInt::from(23),
        BigInt::from(24),
        BigInt::from(255),
        BigInt::from(256),
        BigInt::from(65535),
        BigInt::from(65536),
        BigInt::from(u32::MAX) + 1,
        BigInt::from(u64::MAX),
        &one << 64u32,
        &one << 200u32,
        BigInt::from(-1),
        BigInt::from(-24),
        BigInt::from(-25),
        -(&one << 64u32),
        -(&one << 64u32) - 1,
        -(&one << 200u32),
    ];
    for value in values {
        let data = emit(&value);
        assert_eq!(decode::decode_all::<BigInt, _>(&data), Ok(value));
    }
}

fn head(major: u8, n: u128) -> Result<Vec<u8>, Error> {
    emit_with(|e| e.emit_head(major, n))
}

#[test]
fn head_widths() {
    assert_eq!(head(0, 23), Ok(hex!("17").to_vec()));
    assert_eq!(head(4, 65536), Ok(hex!("9a00010000").to_vec()));
    assert_eq!(head(2, u64::MAX as u128), Ok(hex!("5bffffffffffffffff").to_vec()));
    assert_eq!(head(0, u64::MAX as u128 + 1), Err(Error::ArgumentTooLarge));
    assert_eq!(
        emit_with(|e| e.emit_head(0, -1)),
        Err(Error::ArgumentTooLarge)
    );

    let mut e = Encoder::new();
    e.emit_indefinite_head(2).unwrap();
    e.emit_indefinite_head(3).unwrap();
    assert_eq!(e.build(), hex!("5f7f"));
}

#[test]
fn major_type_range() {
    assert_eq!(head(7, 22), Ok(hex!("f6").to_vec()));
    assert_eq!(head(8, 0), Err(Error::InvalidMajorType(8)));
    assert_eq!(head(0xff, 1), Err(Error::InvalidMajorType(0xff)));

    let mut e = Encoder::new();
    assert_eq!(e.emit_indefinite_head(9), Err(Error::InvalidMajorType(9)));
    assert!(e.build().is_empty());
}

#[test]
fn list_framing() {
    // Only the empty list is definite
    assert_eq!(emit_list::<u8>(&[]), hex!("80"));
    assert_eq!(emit_list(&[1]), hex!("9f01ff"));
    assert_eq!(emit(&vec![1, 2, 3]), hex!("9f010203ff"));
    assert_eq!(
        emit(&vec![vec![1], vec![]]),
        hex!("9f 9f01ff 80 ff")
    );
    assert_eq!(
        emit_with(|e| {
            e.emit_list_with(|_| {});
            e.emit_list_with(|a| a.emit(&true));
            Ok::<_, Error>(())
        })
        .unwrap(),
        hex!("80 9ff5ff")
    );
    assert_eq!(emit(&(1u8, "a")), hex!("9f016161ff"));
    assert_eq!(emit(&Set(vec![1, 2])), hex!("d90102 9f0102ff"));
    assert_eq!(emit_set::<u8>(&[]), hex!("d90102 80"));
}

#[test]
fn maps() {
    // Maps keep their order and stay definite
    assert_eq!(emit_map(&[(3, 4), (1, 2)]), hex!("a203040102"));
    let data = emit(&BTreeMap::from([(3, "c"), (1, "a")]));
    assert_eq!(data, hex!("a2 01 6161 03 6163"));
}

#[test]
#[should_panic]
fn short_definite_array() {
    emit_with(|e| {
        e.emit_array(Some(2), |a| a.emit(&1));
        Ok::<_, Error>(())
    })
    .unwrap();
}

#[test]
#[should_panic]
fn long_definite_array() {
    emit_with(|e| {
        e.emit_array(Some(1), |a| {
            a.emit(&1);
            a.emit(&2);
        });
        Ok::<_, Error>(())
    })
    .unwrap();
}

#[test]
fn byte_string_split() {
    let bytes: Vec<u8> = (0..65).collect();

    let data = emit_bytes(&bytes, false);
    assert_eq!(data[..2], hex!("5841"));
    assert_eq!(data.len(), 67);

    let data = emit_bytes(&bytes, true);
    assert_eq!(data[..3], hex!("5f5840"));
    assert_eq!(data[3..67], bytes[..64]);
    assert_eq!(data[67..], hex!("4140ff"));
    assert_eq!(decode::decode::<ByteString, _>(&data).unwrap().0, bytes);

    // Nothing to split
    assert_eq!(emit_bytes(&bytes[..64], true), emit_bytes(&bytes[..64], false));
    assert_eq!(emit_bytes(&[], true), hex!("40"));
}

#[test]
fn text_split() {
    let s = "x".repeat(70);
    let data = emit_text(&s, true);
    assert_eq!(data[..3], hex!("827840"));
    assert_eq!(data[67], 0x66);
    assert_eq!(data.len(), 74);
    assert_eq!(decode::decode::<String, _>(&data).unwrap(), s);

    // A two byte character straddling the chunk boundary moves to the next chunk
    let s = format!("{}\u{00fc}{}", "x".repeat(63), "y".repeat(10));
    let data = emit_text(&s, true);
    assert_eq!(data[..3], hex!("82783f"));
    assert_eq!(data[66], 0x6c);
    assert_eq!(decode::decode::<String, _>(&data).unwrap(), s);

    assert_eq!(emit_text("short", true), emit_text("short", false));
}

#[test]
fn constr_tags() {
    assert_eq!(emit_constr::<_, u8>(0, &[]).unwrap(), hex!("d87980"));
    assert_eq!(emit_constr(6, &[1]).unwrap(), hex!("d87f9f01ff"));
    assert_eq!(emit_constr::<_, u8>(7, &[]).unwrap(), hex!("d9050080"));
    assert_eq!(emit_constr::<_, u8>(127, &[]).unwrap(), hex!("d9057880"));
    assert_eq!(emit_constr::<_, u8>(128, &[]).unwrap(), hex!("d866821880 80"));
    assert_eq!(emit_constr::<_, u8>(5000, &[]).unwrap(), hex!("d86682191388 80"));

    assert_eq!(emit_constr::<_, u8>(-1, &[]), Err(Error::InvalidConstrTag));
    assert_eq!(emit_constr::<_, u8>(1.5, &[]), Err(Error::InvalidConstrTag));
    assert_eq!(emit_constr::<_, u8>(f64::NAN, &[]), Err(Error::InvalidConstrTag));
    assert_eq!(emit_constr(3.0, &[1]).unwrap(), hex!("d87c9f01ff"));
}

#[test]
fn constr_tag_limit() {
    assert_eq!(
        emit_constr::<_, u8>(u64::MAX, &[]).unwrap(),
        hex!("d866821bffffffffffffffff 80")
    );
    assert_eq!(
        emit_constr::<_, u8>(u128::from(u64::MAX) + 1, &[]),
        Err(Error::InvalidConstrTag)
    );
    assert_eq!(
        emit_constr::<_, u8>(BigInt::from(1) << 64u32, &[]),
        Err(Error::InvalidConstrTag)
    );
}

#[test]
fn constr_roundtrip() {
    for tag in [0, 6, 7, 127, 128, 1400, 5000] {
        for fields in [vec![], vec![BigInt::from(-7)], vec![BigInt::from(1) << 70u32, BigInt::from(2)]] {
            let value = Constr::new(tag, fields);
            let data = emit(&value);
            assert_eq!(decode::decode_all::<Constr<BigInt>, _>(&data), Ok(value));
        }
    }
}

#[test]
fn float16() {
    assert_eq!(F16::new(65520.0), Err(Error::Float16Overflow));
    assert_eq!(F16::new(1.0e10), Err(Error::Float16Overflow));
    assert_eq!(emit(&F16::new(f64::NAN).unwrap()), hex!("f97c01"));
    assert_eq!(emit(&F16::new(-5.960464477539063e-8).unwrap()), hex!("f98001"));

    let mut e = Encoder::new();
    assert_eq!(e.emit_float16(70000.0), Err(Error::Float16Overflow));
    assert_eq!(e.offset(), 0);
}

#[test]
fn nested_roundtrip() {
    type Record = (Constr<BigInt>, BTreeMap<String, Vec<ByteString>>, Set<u16>, Option<bool>);

    let value: Vec<Record> = vec![
        (
            Constr::new(3, vec![BigInt::from(1) << 100u32]),
            BTreeMap::from([
                ("a".to_string(), vec![]),
                ("b".to_string(), vec![ByteString(vec![0; 100]), ByteString(vec![1, 2])]),
            ]),
            Set(vec![1, 65535]),
            Some(false),
        ),
        (
            Constr::new(1000, vec![]),
            BTreeMap::new(),
            Set(vec![]),
            None,
        ),
    ];
    let data = emit(&value);
    assert_eq!(decode::decode_all::<Vec<Record>, _>(&data), Ok(value.clone()));

    // Hex input decodes the same
    assert_eq!(
        decode::decode_all::<Vec<Record>, _>(hex::encode(&data).as_str()),
        Ok(value)
    );
}

#[test]
fn to_cbor_through_from_cbor() {
    fn roundtrip<T>(value: T)
    where
        T: ToCbor + FromCbor + PartialEq + std::fmt::Debug,
    {
        assert_eq!(decode::decode_all::<T, _>(&emit(&value)), Ok(value));
    }

    roundtrip(u8::MAX);
    roundtrip(i128::MIN);
    roundtrip(u128::MAX);
    roundtrip(-2.5f64);
    roundtrip("caf\u{e9}".to_string());
    roundtrip(Some(Some(3u8)));
    roundtrip((1u8, 2i16, "three".to_string(), vec![4u32], true, None::<u8>));
}
