use super::bytes::CHUNK_SIZE;
use super::decode::{FromCbor, incorrect_type, shift_payload};
use super::encode::{Encoder, ToCbor};
use super::head::*;
use super::list::{decode_list, is_def_list};
use super::{cursor::Cursor, error::Error};

/// Decode a text string.
///
/// A definite list of text strings is also accepted, and its items
/// concatenated: that is how long strings are split on the wire. Anything
/// else must be a single definite text string.
pub fn decode_string(cursor: &mut Cursor) -> Result<String, Error> {
    if is_def_list(cursor)? {
        let mut s = String::new();
        decode_list(cursor, |cursor, _| {
            s.push_str(decode_text_chunk(cursor)?);
            Ok(())
        })?;
        Ok(s)
    } else {
        decode_text_chunk(cursor).map(str::to_owned)
    }
}

fn decode_text_chunk<'a>(cursor: &mut Cursor<'a>) -> Result<&'a str, Error> {
    let (major, n) = decode_definite_head(cursor)?;
    if major != MAJOR_TEXT {
        return Err(incorrect_type("Text String", major));
    }
    Ok(core::str::from_utf8(shift_payload(cursor, n)?)?)
}

pub fn is_string(cursor: &Cursor) -> Result<bool, Error> {
    Ok(peek_major(cursor)? == MAJOR_TEXT)
}

/// Split `s` into the longest pieces of at most [`CHUNK_SIZE`] bytes that
/// do not cut a character in two.
fn split_utf8(s: &str) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut rest = s;
    while !rest.is_empty() {
        let mut end = rest.len().min(CHUNK_SIZE);
        while !rest.is_char_boundary(end) {
            end -= 1;
        }
        let (chunk, tail) = rest.split_at(end);
        chunks.push(chunk);
        rest = tail;
    }
    chunks
}

impl Encoder {
    /// Emit a text string.
    ///
    /// With `split` set, anything longer than [`CHUNK_SIZE`] bytes is
    /// written as a definite list of text string chunks.
    pub fn emit_text(&mut self, s: &str, split: bool) {
        if split && s.len() > CHUNK_SIZE {
            let chunks = split_utf8(s);
            self.emit_array(Some(chunks.len()), |a| {
                for chunk in chunks {
                    a.emit(chunk);
                }
            })
        } else {
            self.emit_uint_minor(MAJOR_TEXT, s.len() as u64);
            self.emit_raw_slice(s.as_bytes())
        }
    }
}

impl ToCbor for str {
    fn to_cbor(&self, encoder: &mut Encoder) {
        encoder.emit_text(self, false)
    }
}

impl ToCbor for String {
    fn to_cbor(&self, encoder: &mut Encoder) {
        encoder.emit_text(self, false)
    }
}

impl FromCbor for String {
    fn decode(cursor: &mut Cursor) -> Result<Self, Error> {
        decode_string(cursor)
    }
}
