#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint::BigInt;
use plutus_cbor::{Constr, decode, encode};

fuzz_target!(|data: &[u8]| {
    if let Ok(value) = decode::decode_all::<Constr<Vec<BigInt>>, _>(data) {
        let encoded = encode::emit(&value);
        let decoded = decode::decode_all::<Constr<Vec<BigInt>>, _>(&encoded)
            .expect("Failed to decode re-encoded constructor");
        assert_eq!(decoded, value);
        assert_eq!(encode::emit(&decoded), encoded);
    }
});
