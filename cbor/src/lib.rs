/*!
CBOR (RFC 8949) encoding and decoding, with the compact constructor-tag
scheme used for Plutus data.

Decoding works over an in-memory [`Cursor`](decode::Cursor); encoding
appends to an [`Encoder`](encode::Encoder). The byte layout written is
fixed, because encoded data is compared by hash rather than by meaning:

- an empty list is `0x80`, any other list is indefinite length;
- maps are always definite length;
- strings are a single definite chunk unless splitting is requested;
- constructor tags use arguments 121..=127, 1280..=1400, or the 102
  escape.

```
use plutus_cbor::{Constr, decode, encode};

let value = Constr::new(5000, vec![1u64, 2, 3]);
let bytes = encode::emit(&value);
assert_eq!(decode::decode::<Constr<u64>, _>(&bytes).unwrap(), value);
```
*/

pub mod cursor;
pub mod decode;
pub mod encode;
pub mod error;
pub mod head;

mod bytes;
mod constr;
mod float;
mod int;
mod list;
mod map;
mod object;
mod set;
mod simple;
mod text;
mod tuple;

pub use bytes::{ByteString, CHUNK_SIZE};
pub use constr::{CONSTR_ESCAPE, Constr};
pub use float::{F16, f64_to_f16_bits};
pub use int::{TAG_NEGATIVE_BIGNUM, TAG_POSITIVE_BIGNUM};
pub use object::{IntKeyObject, StrKeyObject};
pub use set::{Set, TAG_SET};


#[cfg(test)]
mod encode_tests;
