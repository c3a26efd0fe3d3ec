// SPDX-License-Identifier: Apache-2.0

use core::marker::PhantomData;

use crate::cursor::Cursor;
use crate::number_parser::parse_number;
use crate::parse_error::ParseError;
use crate::scanner::{parse_literal, skip_whitespace};
use crate::scratch_buffer::{DefaultConfig, ScratchBuffer, ScratchConfig};
use crate::string_decoder::decode_string;
use crate::Value;

/// State for a single parse call: the input cursor and the string scratch buffer.
///
/// Dropped at the end of the call, which releases the scratch allocation.
struct ParseContext<'a> {
    cursor: Cursor<'a>,
    scratch: ScratchBuffer,
}

impl<'a> ParseContext<'a> {
    fn new<C: ScratchConfig>(input: &'a [u8]) -> Self {
        Self {
            cursor: Cursor::new(input),
            scratch: ScratchBuffer::with_config::<C>(),
        }
    }

    /// Dispatch on the next significant byte without consuming it.
    fn parse_value(&mut self) -> Result<Value, ParseError> {
        let next = self.cursor.peek();
        log::trace!(
            "Dispatching on {:?} at {}",
            next.map(char::from),
            self.cursor.current_pos()
        );
        match next {
            None => Err(ParseError::ExpectValue),
            Some(b'n') => parse_literal(&mut self.cursor, b"null", Value::Null),
            Some(b't') => parse_literal(&mut self.cursor, b"true", Value::True),
            Some(b'f') => parse_literal(&mut self.cursor, b"false", Value::False),
            Some(b'"') => decode_string(&mut self.cursor, &mut self.scratch).map(Value::String),
            Some(_) => parse_number(&mut self.cursor),
        }
    }

    /// Parse exactly one value spanning the whole input.
    fn parse_root(&mut self) -> Result<Value, ParseError> {
        skip_whitespace(&mut self.cursor);
        let value = self.parse_value()?;
        skip_whitespace(&mut self.cursor);
        if !self.cursor.is_at_end() {
            return Err(ParseError::RootNotSingular);
        }
        Ok(value)
    }

    fn run(mut self) -> Result<Value, ParseError> {
        let result = self.parse_root();
        debug_assert!(
            self.scratch.is_empty(),
            "scratch buffer must be empty after a parse"
        );
        if let Err(ref e) = result {
            log::debug!("Parse failed at {}: {:?}", self.cursor.current_pos(), e);
        }
        log::trace!(
            "Releasing {} byte scratch buffer",
            self.scratch.capacity()
        );
        result
    }
}

/// A JSON value parser, sized by a [`ScratchConfig`].
///
/// The parser itself holds no state; each call gets its own scratch buffer,
/// which is released before the call returns.
///
/// # Example
/// ```
/// use picotree::{Parser, ValueType};
///
/// let parser = Parser::new();
/// let value = parser.parse("  -1.5e3 ").unwrap();
/// assert_eq!(value.value_type(), ValueType::Number);
/// assert_eq!(value.get_number(), -1500.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Parser<C: ScratchConfig = DefaultConfig> {
    _config: PhantomData<C>,
}

impl Parser<DefaultConfig> {
    /// Creates a parser using [`DefaultConfig`].
    pub const fn new() -> Self {
        Self::with_config()
    }
}

impl Default for Parser<DefaultConfig> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ScratchConfig> Parser<C> {
    /// Creates a parser with a custom `ScratchConfig`.
    pub const fn with_config() -> Self {
        Parser {
            _config: PhantomData,
        }
    }

    /// Parses `input` as exactly one JSON value.
    pub fn parse(&self, input: &str) -> Result<Value, ParseError> {
        self.parse_slice(input.as_bytes())
    }

    /// Parses a byte slice as exactly one JSON value.
    ///
    /// String content is returned as raw bytes and is not checked for UTF-8.
    pub fn parse_slice(&self, input: &[u8]) -> Result<Value, ParseError> {
        ParseContext::new::<C>(input).run()
    }

    /// Parses `input` into a caller-supplied slot.
    ///
    /// The slot is reset to `Null` first, releasing whatever it held, and stays
    /// `Null` if parsing fails.
    pub fn parse_into(&self, value: &mut Value, input: &str) -> Result<(), ParseError> {
        value.set_null();
        *value = self.parse(input)?;
        Ok(())
    }
}

/// Parses `input` as exactly one JSON value using [`DefaultConfig`].
///
/// ```
/// use picotree::{parse, ParseError};
///
/// assert!(parse("true").unwrap().get_boolean());
/// assert_eq!(parse("null x"), Err(ParseError::RootNotSingular));
/// ```
pub fn parse(input: &str) -> Result<Value, ParseError> {
    Parser::new().parse(input)
}

/// Byte-slice counterpart of [`parse`].
pub fn parse_slice(input: &[u8]) -> Result<Value, ParseError> {
    Parser::new().parse_slice(input)
}

/// Slot-based counterpart of [`parse`]; see [`Parser::parse_into`].
pub fn parse_into(value: &mut Value, input: &str) -> Result<(), ParseError> {
    Parser::new().parse_into(value, input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ValueType;
    use test_log::test;

    /// Runs one parse and reports the scratch length left behind.
    fn parse_with_scratch_len(input: &[u8]) -> (Result<Value, ParseError>, usize) {
        let mut ctx = ParseContext::new::<DefaultConfig>(input);
        let result = ctx.parse_root();
        (result, ctx.scratch.len())
    }

    #[test]
    fn test_literals() {
        assert_eq!(parse("null"), Ok(Value::Null));
        assert_eq!(parse("true"), Ok(Value::True));
        assert_eq!(parse(" false\n"), Ok(Value::False));
    }

    #[test]
    fn test_expect_value() {
        assert_eq!(parse(""), Err(ParseError::ExpectValue));
        assert_eq!(parse(" \t\r\n"), Err(ParseError::ExpectValue));
    }

    #[test]
    fn test_dispatch_falls_through_to_number() {
        assert_eq!(parse("?"), Err(ParseError::InvalidValue));
        assert_eq!(parse("INF"), Err(ParseError::InvalidValue));
        assert_eq!(parse("nan"), Err(ParseError::InvalidValue));
    }

    #[test]
    fn test_root_not_singular() {
        assert_eq!(parse("null x"), Err(ParseError::RootNotSingular));
        assert_eq!(parse("0123"), Err(ParseError::RootNotSingular));
        assert_eq!(parse("0x0"), Err(ParseError::RootNotSingular));
        assert_eq!(parse("\"a\"\"b\""), Err(ParseError::RootNotSingular));
    }

    #[test]
    fn test_scratch_empty_after_every_parse() {
        let inputs: [&[u8]; 9] = [
            b"\"Hello\\nWorld\"",
            b"\"abc",
            b"\"ab\\v\"",
            b"\"a\x01\"",
            b"\"ok\" trailing",
            b"1e309",
            b"nul",
            b"",
            b"\"\\",
        ];
        for input in inputs {
            let (_, top) = parse_with_scratch_len(input);
            assert_eq!(top, 0, "scratch leaked for {:?}", input);
        }
    }

    #[test]
    fn test_parse_into_resets_slot() {
        let mut v = Value::from("previous");
        assert_eq!(parse_into(&mut v, "1e309"), Err(ParseError::NumberTooBig));
        assert_eq!(v.value_type(), ValueType::Null);

        assert_eq!(parse_into(&mut v, "\"next\""), Ok(()));
        assert_eq!(v.get_string(), b"next");

        v.set_boolean(true);
        assert_eq!(parse_into(&mut v, "null x"), Err(ParseError::RootNotSingular));
        assert!(v.is_null());
    }

    #[test]
    fn test_parse_slice_keeps_raw_bytes() {
        let v = parse_slice(b"\"\xFF\"").unwrap();
        assert_eq!(v.get_string(), &[0xFF]);
        assert!(matches!(v.get_str(), Err(ParseError::InvalidUtf8(_))));
    }

    #[test]
    fn test_custom_config_limit() {
        struct Tiny;
        impl ScratchConfig for Tiny {
            const INITIAL_CAPACITY: usize = 2;
            const MAX_CAPACITY: Option<usize> = Some(4);
        }
        let parser = Parser::<Tiny>::with_config();
        assert_eq!(parser.parse("\"abcd\"").unwrap().get_string(), b"abcd");
        assert_eq!(parser.parse("\"abcde\""), Err(ParseError::ScratchBufferFull));
    }
}
