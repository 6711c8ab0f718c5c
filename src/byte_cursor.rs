use byteorder::{ByteOrder, ReadBytesExt};

use crate::errors::PcapError;

/// Thin view over a byte buffer that is consumed front-to-back.
///
/// All reads advance the cursor. Multi-byte reads are parameterized over a
/// [`ByteOrder`] so the byte order derived from the file's magic number can
/// be applied uniformly.
#[derive(Debug)]
pub(crate) struct ByteCursor<'a> {
    slice: &'a [u8],
}

impl<'a> ByteCursor<'a> {
    pub fn new(slice: &'a [u8]) -> ByteCursor<'a> {
        ByteCursor { slice }
    }

    /// Number of bytes left in the cursor.
    pub fn remaining(&self) -> usize {
        self.slice.len()
    }

    /// Checks that at least `count` bytes are left.
    pub fn require(&self, count: usize) -> Result<(), PcapError> {
        if self.slice.len() < count {
            return Err(PcapError::IncompleteBuffer(count - self.slice.len()));
        }
        Ok(())
    }

    pub fn read_u16<B: ByteOrder>(&mut self) -> Result<u16, PcapError> {
        self.require(2)?;
        Ok(self.slice.read_u16::<B>()?)
    }

    pub fn read_u32<B: ByteOrder>(&mut self) -> Result<u32, PcapError> {
        self.require(4)?;
        Ok(self.slice.read_u32::<B>()?)
    }

    pub fn read_i32<B: ByteOrder>(&mut self) -> Result<i32, PcapError> {
        self.require(4)?;
        Ok(self.slice.read_i32::<B>()?)
    }

    pub fn read_u64<B: ByteOrder>(&mut self) -> Result<u64, PcapError> {
        self.require(8)?;
        Ok(self.slice.read_u64::<B>()?)
    }

    /// Splits off the next `count` bytes and advances past them.
    pub fn take(&mut self, count: usize) -> Result<&'a [u8], PcapError> {
        self.require(count)?;
        let slice = self.slice;
        let (head, rest) = slice.split_at(count);
        self.slice = rest;
        Ok(head)
    }

    /// Advances past `count` bytes.
    pub fn skip(&mut self, count: usize) -> Result<(), PcapError> {
        self.take(count).map(|_| ())
    }

    /// Returns the unconsumed remainder.
    pub fn rest(self) -> &'a [u8] {
        self.slice
    }
}
