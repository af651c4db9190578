#![cfg(test)]

use num_bigint::BigInt;
use plutus_cbor::{Constr, decode, encode};
use std::io::Read;

fn replay(dir: &str, f: impl Fn(&[u8])) {
    match std::fs::read_dir(dir) {
        Err(e) => {
            eprintln!(
                "Failed to open dir: {e}, curr dir: {}",
                std::env::current_dir().unwrap().to_string_lossy()
            );
        }
        Ok(dir) => {
            for entry in dir.flatten() {
                let path = entry.path();
                if path.is_file()
                    && let Ok(mut file) = std::fs::File::open(&path)
                {
                    let mut buffer = Vec::new();
                    if file.read_to_end(&mut buffer).is_ok() {
                        f(&buffer);
                    }
                }
            }
        }
    }
}

#[test]
fn test_decode() {
    replay("./corpus/decode", |data| {
        _ = decode::decode::<Constr<BigInt>, _>(data);
        _ = decode::decode::<Vec<BigInt>, _>(data);
        _ = decode::decode::<String, _>(data);
    });
}

#[test]
fn test_constr_roundtrip() {
    replay("./corpus/constr_roundtrip", |data| {
        if let Ok(value) = decode::decode_all::<Constr<Vec<BigInt>>, _>(data) {
            let encoded = encode::emit(&value);
            assert_eq!(decode::decode_all(&encoded), Ok(value));
        }
    });
}
