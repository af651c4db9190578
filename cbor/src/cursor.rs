use super::error::Error;
use std::borrow::Cow;

/// A read position over a borrowed byte buffer.
///
/// Reads never go past the end of the buffer, and the position only ever
/// moves forward, by exactly the number of bytes consumed. [`Cursor::copy`]
/// duplicates the position only, so probing ahead on a copy is free.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    /// Current offset from the start of the buffer.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Total length of the underlying buffer.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.data.len()
    }

    /// Number of bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.position
    }

    /// An independent cursor over the same buffer, at the same position.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    pub fn peek_one(&self) -> Result<u8, Error> {
        self.data
            .get(self.position)
            .copied()
            .ok_or(Error::EndOfStream)
    }

    pub fn peek_many(&self, n: usize) -> Result<&'a [u8], Error> {
        let end = self.position.checked_add(n).ok_or(Error::EndOfStream)?;
        self.data.get(self.position..end).ok_or(Error::EndOfStream)
    }

    pub fn peek_remaining(&self) -> &'a [u8] {
        &self.data[self.position..]
    }

    pub fn shift_one(&mut self) -> Result<u8, Error> {
        let b = self.peek_one()?;
        self.position += 1;
        Ok(b)
    }

    pub fn shift_many(&mut self, n: usize) -> Result<&'a [u8], Error> {
        let bytes = self.peek_many(n)?;
        self.position += n;
        Ok(bytes)
    }

    /// Read a fixed size array, e.g. a big-endian integer argument.
    pub fn shift_array<const N: usize>(&mut self) -> Result<[u8; N], Error> {
        let mut a = [0u8; N];
        a.copy_from_slice(self.shift_many(N)?);
        Ok(a)
    }

    pub fn shift_remaining(&mut self) -> &'a [u8] {
        let bytes = self.peek_remaining();
        self.position = self.data.len();
        bytes
    }
}

impl<'a> From<&'a [u8]> for Cursor<'a> {
    fn from(data: &'a [u8]) -> Self {
        Self::new(data)
    }
}

/// Anything that can be turned into CBOR input bytes.
///
/// Raw byte containers are borrowed as is, text is treated as hexadecimal,
/// and an existing [`Cursor`] contributes its unread bytes.
pub trait BytesLike {
    fn to_bytes(&self) -> Result<Cow<'_, [u8]>, Error>;
}

impl BytesLike for [u8] {
    fn to_bytes(&self) -> Result<Cow<'_, [u8]>, Error> {
        Ok(Cow::Borrowed(self))
    }
}

impl<const N: usize> BytesLike for [u8; N] {
    fn to_bytes(&self) -> Result<Cow<'_, [u8]>, Error> {
        Ok(Cow::Borrowed(self))
    }
}

impl BytesLike for Vec<u8> {
    fn to_bytes(&self) -> Result<Cow<'_, [u8]>, Error> {
        Ok(Cow::Borrowed(self))
    }
}

impl BytesLike for str {
    fn to_bytes(&self) -> Result<Cow<'_, [u8]>, Error> {
        hex::decode(self.trim())
            .map(Cow::Owned)
            .map_err(|_| Error::InvalidHex)
    }
}

impl BytesLike for String {
    fn to_bytes(&self) -> Result<Cow<'_, [u8]>, Error> {
        self.as_str().to_bytes()
    }
}

impl BytesLike for Cursor<'_> {
    fn to_bytes(&self) -> Result<Cow<'_, [u8]>, Error> {
        Ok(Cow::Borrowed(self.peek_remaining()))
    }
}
