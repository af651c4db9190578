use super::head::*;
use thiserror::Error;

/// Errors raised while encoding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Head argument is negative or does not fit in 64 bits")]
    ArgumentTooLarge,

    #[error("Major type {0} is out of range")]
    InvalidMajorType(u8),

    #[error("Constructor tags must be non-negative integers")]
    InvalidConstrTag,

    #[error("Value is out of range for a float16")]
    Float16Overflow,
}

pub trait ToCbor {
    fn to_cbor(&self, encoder: &mut Encoder);
}

/// A growable byte sink that CBOR items are written into, in order.
pub struct Encoder {
    data: Vec<u8>,
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Encoder {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    pub fn build(self) -> Vec<u8> {
        self.data
    }

    pub fn offset(&self) -> usize {
        self.data.len()
    }

    pub(crate) fn emit_uint_minor(&mut self, major: u8, val: u64) {
        if val < 24 {
            self.data.push((major << 5) | (val as u8))
        } else if val <= u8::MAX as u64 {
            self.data.push((major << 5) | 24u8);
            self.data.push(val as u8)
        } else if val <= u16::MAX as u64 {
            self.data.push((major << 5) | 25u8);
            self.data.extend((val as u16).to_be_bytes())
        } else if val <= u32::MAX as u64 {
            self.data.push((major << 5) | 26u8);
            self.data.extend((val as u32).to_be_bytes())
        } else {
            self.data.push((major << 5) | 27u8);
            self.data.extend(val.to_be_bytes())
        }
    }

    /// Emit a head in its shortest form.
    ///
    /// Arguments beyond 64 bits have no head form; integers that large go
    /// through the bignum tags instead.
    pub fn emit_head<N>(&mut self, major: u8, n: N) -> Result<(), Error>
    where
        N: num_traits::ToPrimitive,
    {
        if major > MAJOR_SIMPLE {
            return Err(Error::InvalidMajorType(major));
        }
        let n = n.to_u64().ok_or(Error::ArgumentTooLarge)?;
        self.emit_uint_minor(major, n);
        Ok(())
    }

    pub fn emit_indefinite_head(&mut self, major: u8) -> Result<(), Error> {
        if major > MAJOR_SIMPLE {
            return Err(Error::InvalidMajorType(major));
        }
        self.emit_indefinite_minor(major);
        Ok(())
    }

    pub(crate) fn emit_indefinite_minor(&mut self, major: u8) {
        self.data.push((major << 5) | 31)
    }

    pub(crate) fn emit_break(&mut self) {
        self.data.push(BREAK)
    }

    pub fn emit_raw<I>(&mut self, data: I)
    where
        I: IntoIterator<Item = u8>,
    {
        self.data.extend(data)
    }

    pub fn emit_raw_slice(&mut self, data: &[u8]) {
        self.data.extend_from_slice(data)
    }

    pub fn emit<T>(&mut self, value: &T)
    where
        T: ToCbor + ?Sized,
    {
        value.to_cbor(self)
    }

    /// Start a raw array: `Some(n)` for definite length, `None` for
    /// indefinite.
    ///
    /// # Panics
    ///
    /// If `f` emits a different number of items than a definite `count`.
    pub fn emit_array<F>(&mut self, count: Option<usize>, f: F)
    where
        F: FnOnce(&mut Array),
    {
        let framing = match count {
            Some(count) => Framing::Definite(count),
            None => Framing::Indefinite,
        };
        let mut a = Array::new(self, framing);
        f(&mut a);
        a.end()
    }

    /// Emit a list of however many items `f` emits.
    ///
    /// An empty list is written as `0x80`, anything else in indefinite form.
    /// Verifiers compare bytes, so this framing must not change.
    pub fn emit_list_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Array),
    {
        let mut a = Array::new(self, Framing::Compact);
        f(&mut a);
        a.end()
    }

    pub fn emit_list<T>(&mut self, values: &[T])
    where
        T: ToCbor,
    {
        self.emit_list_with(|a| {
            for value in values {
                a.emit(value);
            }
        })
    }

    pub fn emit_def_list<T>(&mut self, values: &[T])
    where
        T: ToCbor,
    {
        self.emit_array(Some(values.len()), |a| {
            for value in values {
                a.emit(value);
            }
        })
    }

    pub fn emit_indef_list<T>(&mut self, values: &[T])
    where
        T: ToCbor,
    {
        self.emit_array(None, |a| {
            for value in values {
                a.emit(value);
            }
        })
    }

    /// Emit a definite length map of `count` pairs.
    ///
    /// # Panics
    ///
    /// If `f` emits anything other than `count` keys and `count` values.
    pub fn emit_map_with<F>(&mut self, count: usize, f: F)
    where
        F: FnOnce(&mut Map),
    {
        let mut m = Map::new(self, Framing::Definite(count));
        f(&mut m);
        m.end()
    }

    pub fn emit_map<K, V>(&mut self, pairs: &[(K, V)])
    where
        K: ToCbor,
        V: ToCbor,
    {
        self.emit_map_with(pairs.len(), |m| {
            for (key, value) in pairs {
                m.emit(key);
                m.emit(value);
            }
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Framing {
    Definite(usize),
    Indefinite,
    /// Definite if empty, indefinite otherwise.
    Compact,
}

pub struct Sequence<'a, const D: usize> {
    encoder: &'a mut Encoder,
    start: usize,
    framing: Framing,
    idx: usize,
}

pub type Array<'a> = Sequence<'a, 1>;
pub type Map<'a> = Sequence<'a, 2>;

impl<'a, const D: usize> Sequence<'a, D> {
    fn new(encoder: &'a mut Encoder, framing: Framing) -> Self {
        let major = if D == 1 { MAJOR_ARRAY } else { MAJOR_MAP };
        let start = encoder.offset();
        let framing = match framing {
            Framing::Definite(count) => {
                encoder.emit_uint_minor(major, count as u64);
                Framing::Definite(count * D)
            }
            framing => {
                encoder.emit_indefinite_minor(major);
                framing
            }
        };
        Self {
            encoder,
            start,
            framing,
            idx: 0,
        }
    }

    /// Bytes written since the sequence started, including its head.
    pub fn offset(&self) -> usize {
        self.encoder.offset() - self.start
    }

    /// Items emitted so far; keys and values count separately in a map.
    pub fn count(&self) -> usize {
        self.idx
    }

    fn next_field(&mut self) -> &mut Encoder {
        self.idx += 1;
        if let Framing::Definite(count) = self.framing
            && self.idx > count
        {
            panic!("Too many items added to definite length sequence")
        }
        self.encoder
    }

    fn end(self) {
        match self.framing {
            Framing::Definite(count) if self.idx != count => panic!(
                "Definite length sequence is short of items: {}, expected {}",
                self.idx, count
            ),
            Framing::Definite(_) => {}
            Framing::Compact if self.idx == 0 => {
                // Rewrite the indefinite head as a definite zero count
                self.encoder.data[self.start] = MAJOR_ARRAY << 5;
            }
            _ => {
                if D == 2 && self.idx % 2 == 1 {
                    panic!("Map is missing the value of its last key")
                }
                self.encoder.emit_break()
            }
        }
    }

    pub fn emit_raw_slice(&mut self, data: &[u8]) {
        self.next_field().emit_raw_slice(data)
    }

    pub fn emit<T>(&mut self, value: &T)
    where
        T: ToCbor + ?Sized,
    {
        self.next_field().emit(value)
    }

    /// Emit one item through the full [`Encoder`] API, e.g. a fallible
    /// float16 or a nested constructor.
    pub fn emit_with<R, F>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut Encoder) -> R,
    {
        f(self.next_field())
    }
}

pub fn emit<T>(value: &T) -> Vec<u8>
where
    T: ToCbor + ?Sized,
{
    let mut e = Encoder::new();
    e.emit(value);
    e.build()
}

/// Run a fallible encoding and return its bytes.
pub fn emit_with<F, E>(f: F) -> Result<Vec<u8>, E>
where
    F: FnOnce(&mut Encoder) -> Result<(), E>,
{
    let mut e = Encoder::new();
    f(&mut e)?;
    Ok(e.build())
}

macro_rules! impl_collection_emit_functions {
    ($( $method:ident ),*) => {
        $(
            pub fn $method<T>(values: &[T]) -> Vec<u8>
            where
                T: ToCbor,
            {
                let mut e = Encoder::new();
                e.$method(values);
                e.build()
            }
        )*
    };
}

impl_collection_emit_functions!(emit_list, emit_def_list, emit_indef_list, emit_set);

pub fn emit_map<K, V>(pairs: &[(K, V)]) -> Vec<u8>
where
    K: ToCbor,
    V: ToCbor,
{
    let mut e = Encoder::new();
    e.emit_map(pairs);
    e.build()
}

pub fn emit_bytes(bytes: &[u8], split: bool) -> Vec<u8> {
    let mut e = Encoder::new();
    e.emit_bytes(bytes, split);
    e.build()
}

pub fn emit_text(s: &str, split: bool) -> Vec<u8> {
    let mut e = Encoder::new();
    e.emit_text(s, split);
    e.build()
}

/// Encode a constructor; tags outside `0..=u64::MAX` are
/// [`Error::InvalidConstrTag`].
pub fn emit_constr<N, T>(tag: N, fields: &[T]) -> Result<Vec<u8>, Error>
where
    N: num_traits::ToPrimitive,
    T: ToCbor,
{
    emit_with(|e| e.emit_constr(tag, fields))
}

impl<T> ToCbor for [T]
where
    T: ToCbor,
{
    fn to_cbor(&self, encoder: &mut Encoder) {
        encoder.emit_list(self)
    }
}

impl<T> ToCbor for Vec<T>
where
    T: ToCbor,
{
    fn to_cbor(&self, encoder: &mut Encoder) {
        encoder.emit_list(self)
    }
}

impl<T> ToCbor for &T
where
    T: ToCbor + ?Sized,
{
    fn to_cbor(&self, encoder: &mut Encoder) {
        (**self).to_cbor(encoder)
    }
}
