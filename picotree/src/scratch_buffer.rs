// SPDX-License-Identifier: Apache-2.0

use alloc::vec::Vec;

/// Error types for ScratchBuffer operations
#[derive(Debug, PartialEq)]
pub enum Error {
    /// Growing would exceed the configured maximum capacity
    BufferFull,
    /// Attempted to pop more bytes than the buffer holds
    Underflow,
}

/// Compile-time sizing for the scratch buffer used during string decoding.
///
/// ```
/// use picotree::{Parser, ScratchConfig};
///
/// struct Tiny;
/// impl ScratchConfig for Tiny {
///     const INITIAL_CAPACITY: usize = 8;
///     const MAX_CAPACITY: Option<usize> = Some(64);
/// }
///
/// let parser = Parser::<Tiny>::with_config();
/// assert!(parser.parse(r#""short""#).is_ok());
/// ```
pub trait ScratchConfig {
    /// Capacity allocated on the first push.
    const INITIAL_CAPACITY: usize;
    /// Upper bound on capacity, `None` for unbounded.
    const MAX_CAPACITY: Option<usize>;
}

/// Default configuration: 256 bytes up front, no upper bound.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultConfig;

impl ScratchConfig for DefaultConfig {
    const INITIAL_CAPACITY: usize = 256;
    const MAX_CAPACITY: Option<usize> = None;
}

/// A growable byte stack with a logical length (`top`) separate from its
/// allocated capacity (`size`).
///
/// Decoded runs are addressed by offset, never by retained reference, so
/// growth is free to move the backing storage.
#[derive(Debug)]
pub struct ScratchBuffer {
    /// Backing storage, always exactly `size` bytes long
    storage: Vec<u8>,
    /// Logical length
    top: usize,
    initial_capacity: usize,
    max_capacity: Option<usize>,
}

impl ScratchBuffer {
    /// Create an empty buffer; nothing is allocated until the first push.
    pub fn new(initial_capacity: usize, max_capacity: Option<usize>) -> Self {
        Self {
            storage: Vec::new(),
            top: 0,
            initial_capacity: initial_capacity.max(1),
            max_capacity,
        }
    }

    /// Create an empty buffer sized by a [`ScratchConfig`].
    pub fn with_config<C: ScratchConfig>() -> Self {
        Self::new(C::INITIAL_CAPACITY, C::MAX_CAPACITY)
    }

    pub fn len(&self) -> usize {
        self.top
    }

    pub fn is_empty(&self) -> bool {
        self.top == 0
    }

    /// Allocated size in bytes.
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Make room for `additional` bytes past `top`, growing by 1.5x as needed.
    fn reserve(&mut self, additional: usize) -> Result<(), Error> {
        let required = self.top.checked_add(additional).ok_or(Error::BufferFull)?;
        let mut size = self.storage.len();
        if required <= size {
            return Ok(());
        }
        if size == 0 {
            size = self.initial_capacity;
        }
        while size < required {
            size = size
                .checked_add((size >> 1).max(1))
                .ok_or(Error::BufferFull)?;
        }
        if let Some(max) = self.max_capacity {
            if size > max {
                // Clamp to the limit if the request itself still fits
                if required > max {
                    log::debug!(
                        "Scratch buffer limit reached: need {} bytes, max {}",
                        required,
                        max
                    );
                    return Err(Error::BufferFull);
                }
                size = max;
            }
        }
        log::debug!(
            "Growing scratch buffer from {} to {} bytes",
            self.storage.len(),
            size
        );
        self.storage.resize(size, 0);
        Ok(())
    }

    pub fn push(&mut self, byte: u8) -> Result<(), Error> {
        self.reserve(1)?;
        if let Some(slot) = self.storage.get_mut(self.top) {
            *slot = byte;
        }
        self.top = self.top.wrapping_add(1);
        Ok(())
    }

    pub fn push_slice(&mut self, bytes: &[u8]) -> Result<(), Error> {
        self.reserve(bytes.len())?;
        let end = self.top.wrapping_add(bytes.len());
        if let Some(dest) = self.storage.get_mut(self.top..end) {
            dest.copy_from_slice(bytes);
        }
        self.top = end;
        Ok(())
    }

    /// Pop the last `count` bytes, returning them as a slice.
    ///
    /// The returned bytes stay valid until the next push.
    pub fn pop(&mut self, count: usize) -> Result<&[u8], Error> {
        let start = self.top.checked_sub(count).ok_or(Error::Underflow)?;
        let end = self.top;
        self.top = start;
        self.storage.get(start..end).ok_or(Error::Underflow)
    }

    /// Unwind the logical length back to `head`. Never grows.
    pub fn truncate(&mut self, head: usize) {
        if head < self.top {
            self.top = head;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn test_lazy_allocation() {
        let buf = ScratchBuffer::new(16, None);
        assert_eq!(buf.capacity(), 0);
        assert!(buf.is_empty());
    }

    #[test]
    fn test_push_and_pop() {
        let mut buf = ScratchBuffer::new(4, None);
        buf.push_slice(b"Hello").unwrap();
        buf.push(b'!').unwrap();
        assert_eq!(buf.len(), 6);

        assert_eq!(buf.pop(1).unwrap(), b"!");
        assert_eq!(buf.pop(5).unwrap(), b"Hello");
        assert!(buf.is_empty());
    }

    #[test]
    fn test_geometric_growth() {
        let mut buf = ScratchBuffer::new(4, None);
        buf.push(b'a').unwrap();
        assert_eq!(buf.capacity(), 4);

        for b in b"bcd" {
            buf.push(*b).unwrap();
        }
        assert_eq!(buf.capacity(), 4);

        // 4 -> 6
        buf.push(b'e').unwrap();
        assert_eq!(buf.capacity(), 6);

        // 6 -> 9 -> 13 for a single large append
        buf.push_slice(b"fghijkl").unwrap();
        assert_eq!(buf.capacity(), 13);
        assert_eq!(buf.len(), 12);
        assert_eq!(buf.pop(12).unwrap(), b"abcdefghijkl");
    }

    #[test]
    fn test_growth_from_capacity_one() {
        // 1 >> 1 == 0, growth must still make progress
        let mut buf = ScratchBuffer::new(1, None);
        buf.push_slice(b"xy").unwrap();
        assert_eq!(buf.capacity(), 2);
        buf.push(b'z').unwrap();
        assert_eq!(buf.capacity(), 3);
    }

    #[test]
    fn test_pop_underflow() {
        let mut buf = ScratchBuffer::new(8, None);
        buf.push(b'a').unwrap();
        assert_eq!(buf.pop(2), Err(Error::Underflow));
        // A failed pop leaves the buffer untouched
        assert_eq!(buf.len(), 1);
    }

    #[test]
    fn test_truncate_unwinds() {
        let mut buf = ScratchBuffer::new(8, None);
        buf.push_slice(b"keep").unwrap();
        let head = buf.len();
        buf.push_slice(b"drop me").unwrap();
        buf.truncate(head);
        assert_eq!(buf.len(), 4);
        // Truncating above top is a no-op
        buf.truncate(10);
        assert_eq!(buf.len(), 4);
        assert_eq!(buf.pop(4).unwrap(), b"keep");
    }

    #[test]
    fn test_max_capacity() {
        let mut buf = ScratchBuffer::new(4, Some(8));
        buf.push_slice(b"abcde").unwrap();
        // 4 -> 6 fits under the limit
        assert_eq!(buf.capacity(), 6);
        // 6 -> 9 is clamped to 8
        buf.push_slice(b"fgh").unwrap();
        assert_eq!(buf.capacity(), 8);
        assert_eq!(buf.push(b'i'), Err(Error::BufferFull));
        assert_eq!(buf.len(), 8);
    }

    #[test]
    fn test_with_config() {
        struct Small;
        impl ScratchConfig for Small {
            const INITIAL_CAPACITY: usize = 2;
            const MAX_CAPACITY: Option<usize> = Some(3);
        }
        let mut buf = ScratchBuffer::with_config::<Small>();
        buf.push_slice(b"abc").unwrap();
        assert_eq!(buf.push(b'd'), Err(Error::BufferFull));
    }
}
