// SPDX-License-Identifier: Apache-2.0

use crate::parse_error::ParseError;

/// Pure helpers for decoding string escape sequences.
pub struct EscapeProcessor;

impl EscapeProcessor {
    /// Process a simple escape sequence character and return the unescaped byte.
    ///
    /// # Arguments
    /// * `escape_char` - The character following the backslash in an escape sequence
    ///
    /// # Returns
    /// The unescaped byte value, or `InvalidStringEscape` for anything else,
    /// including `u` since Unicode escapes are not decoded.
    ///
    /// # Examples
    /// ```ignore
    /// // Internal API - see unit tests for usage examples
    /// assert_eq!(EscapeProcessor::process_simple_escape(b'n').unwrap(), b'\n');
    /// ```
    pub fn process_simple_escape(escape_char: u8) -> Result<u8, ParseError> {
        match escape_char {
            b'"' => Ok(b'"'),
            b'\\' => Ok(b'\\'),
            b'/' => Ok(b'/'),
            b'b' => Ok(0x08), // Backspace
            b'f' => Ok(0x0C), // Form feed
            b'n' => Ok(b'\n'),
            b'r' => Ok(b'\r'),
            b't' => Ok(b'\t'),
            _ => Err(ParseError::InvalidStringEscape),
        }
    }

    /// Raw bytes below 0x20 must be escaped inside a string.
    pub const fn is_unescaped_control(byte: u8) -> bool {
        byte < 0x20
    }
}
