use super::decode::{FromCbor, incorrect_type};
use super::head::*;
use super::{cursor::Cursor, error::Error};

/// Pull-based reader over the items of one list.
///
/// The reader holds the cursor mutably for its whole life, so a lazy
/// session has exactly one owner. Items must be read in order; the list is
/// done once its declared count is reached, or once the break byte of an
/// indefinite list has been consumed.
pub struct ListReader<'c, 'a> {
    cursor: &'c mut Cursor<'a>,
    count: Option<u64>,
    index: usize,
    done: bool,
}

impl<'c, 'a> ListReader<'c, 'a> {
    pub(crate) fn new(cursor: &'c mut Cursor<'a>, count: Option<u64>) -> Self {
        Self {
            cursor,
            count,
            index: 0,
            done: false,
        }
    }

    /// The declared item count, `None` for an indefinite list.
    pub fn len(&self) -> Option<u64> {
        self.count
    }

    pub fn is_definite(&self) -> bool {
        self.count.is_some()
    }

    /// Position of the next item in the list.
    pub fn index(&self) -> usize {
        self.index
    }

    fn check_for_end(&mut self) -> Result<bool, Error> {
        if !self.done {
            self.done = match self.count {
                Some(count) => self.index as u64 >= count,
                None => shift_break(self.cursor)?,
            };
        }
        Ok(self.done)
    }

    /// True once every item has been read.
    pub fn at_end(&mut self) -> Result<bool, Error> {
        self.check_for_end()
    }

    /// Decode the next item with `f`, or return `None` if the list is done.
    ///
    /// `f` receives the item's index within the list.
    pub fn try_next<T, F>(&mut self, f: F) -> Result<Option<T>, Error>
    where
        F: FnOnce(&mut Cursor<'a>, usize) -> Result<T, Error>,
    {
        if self.check_for_end()? {
            return Ok(None);
        }
        let item = f(self.cursor, self.index)?;
        self.index += 1;
        Ok(Some(item))
    }

    /// Decode the next item with `f`, failing with [`Error::EndOfList`] if
    /// the list is done.
    pub fn next<T, F>(&mut self, f: F) -> Result<T, Error>
    where
        F: FnOnce(&mut Cursor<'a>, usize) -> Result<T, Error>,
    {
        self.try_next(f)?.ok_or(Error::EndOfList)
    }

    pub fn try_parse<T>(&mut self) -> Result<Option<T>, Error>
    where
        T: FromCbor,
    {
        self.try_next(|cursor, _| T::decode(cursor))
    }

    pub fn parse<T>(&mut self) -> Result<T, Error>
    where
        T: FromCbor,
    {
        self.next(|cursor, _| T::decode(cursor))
    }

    /// Close the list, failing if items remain unread.
    ///
    /// Returns the number of items read.
    pub fn finish(mut self) -> Result<usize, Error> {
        if !self.check_for_end()? {
            return Err(Error::AdditionalItems);
        }
        Ok(self.index)
    }
}

/// Start reading a list one item at a time.
pub fn decode_list_lazy<'c, 'a>(cursor: &'c mut Cursor<'a>) -> Result<ListReader<'c, 'a>, Error> {
    let head = decode_head(cursor)?;
    if head.major != MAJOR_ARRAY {
        return Err(incorrect_type("Array", head.major));
    }
    let count = match head.length {
        Length::Definite(n) => Some(n),
        Length::Indefinite => None,
    };
    Ok(ListReader::new(cursor, count))
}

/// Decode every item of a list with `item`, which receives each index.
pub fn decode_list<T, F>(cursor: &mut Cursor, mut item: F) -> Result<Vec<T>, Error>
where
    F: FnMut(&mut Cursor, usize) -> Result<T, Error>,
{
    let mut reader = decode_list_lazy(cursor)?;
    let mut items = Vec::new();
    while let Some(value) = reader.try_next(|cursor, index| item(cursor, index))? {
        items.push(value);
    }
    Ok(items)
}

pub fn is_list(cursor: &Cursor) -> Result<bool, Error> {
    Ok(peek_major(cursor)? == MAJOR_ARRAY)
}

pub fn is_def_list(cursor: &Cursor) -> Result<bool, Error> {
    Ok(matches!(cursor.peek_one()?, 0x80..=0x9B))
}

pub fn is_indef_list(cursor: &Cursor) -> Result<bool, Error> {
    Ok(cursor.peek_one()? == (MAJOR_ARRAY << 5) | 31)
}

impl<T> FromCbor for Vec<T>
where
    T: FromCbor,
{
    fn decode(cursor: &mut Cursor) -> Result<Self, Error> {
        decode_list(cursor, |cursor, _| T::decode(cursor))
    }
}
