// SPDX-License-Identifier: Apache-2.0

/// Error type for Cursor operations.
#[derive(Debug, PartialEq)]
pub enum Error {
    /// Reached the end of input data.
    ReachedEnd,
    /// Invalid slice bounds provided.
    InvalidSliceBounds,
}

/// A read-only view over the input and the current parsing position.
///
/// The position only ever moves forward.
#[derive(Debug)]
pub struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new Cursor at the start of the given data.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn current_pos(&self) -> usize {
        self.pos
    }

    /// Returns the next byte without consuming it.
    pub fn peek(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    /// Returns the byte `offset` positions past the current one without consuming anything.
    pub fn peek_at(&self, offset: usize) -> Option<u8> {
        self.data.get(self.pos.checked_add(offset)?).copied()
    }

    pub fn consume_byte(&mut self) -> Result<u8, Error> {
        match self.data.get(self.pos) {
            Some(&byte) => {
                self.pos = self.pos.checked_add(1).ok_or(Error::InvalidSliceBounds)?;
                Ok(byte)
            }
            None => Err(Error::ReachedEnd),
        }
    }

    /// Moves the position forward by `count` bytes, staying within the data.
    pub fn advance(&mut self, count: usize) -> Result<(), Error> {
        let new_pos = self.pos.checked_add(count).ok_or(Error::InvalidSliceBounds)?;
        if new_pos > self.data.len() {
            return Err(Error::InvalidSliceBounds);
        }
        self.pos = new_pos;
        Ok(())
    }

    /// The unconsumed tail of the input.
    pub fn remaining(&self) -> &'a [u8] {
        self.data.get(self.pos..).unwrap_or(&[])
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Gets a slice of the data from start to end positions, with bounds checking.
    pub fn slice(&self, start: usize, end: usize) -> Result<&'a [u8], Error> {
        self.data.get(start..end).ok_or(Error::InvalidSliceBounds)
    }
}
