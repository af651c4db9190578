#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint::BigInt;
use plutus_cbor::decode::{self, Cursor};
use plutus_cbor::{ByteString, Constr};
use std::collections::BTreeMap;

fuzz_target!(|data: &[u8]| {
    let _ = decode::decode::<Constr<BigInt>, _>(data);
    let _ = decode::decode::<Vec<BigInt>, _>(data);
    let _ = decode::decode::<BTreeMap<BigInt, ByteString>, _>(data);
    let _ = decode::decode::<String, _>(data);
    let _ = decode::decode::<(u64, Option<bool>, f64), _>(data);

    // Probes never move the cursor
    let cursor = Cursor::new(data);
    let _ = decode::is_int(&cursor);
    let _ = decode::is_constr(&cursor);
    let _ = decode::is_set(&cursor);
    assert_eq!(cursor.position(), 0);
});
