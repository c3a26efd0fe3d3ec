// SPDX-License-Identifier: Apache-2.0

use crate::cursor;
use crate::scratch_buffer;
use crate::shared::UnexpectedState;

/// Errors that can occur during JSON parsing
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// Input is empty or contains only whitespace.
    ExpectValue,
    /// A token matches no grammar: bad literal or malformed number.
    InvalidValue,
    /// A complete value is followed by non-whitespace content.
    RootNotSingular,
    /// A number's magnitude overflows an `f64`.
    NumberTooBig,
    /// A string was opened but never closed.
    MissQuotationMark,
    /// A backslash is followed by an unrecognized escape character.
    InvalidStringEscape,
    /// An unescaped control character (below 0x20) appears inside a string.
    InvalidStringChar,
    /// A decoded string outgrew the configured scratch buffer limit.
    ScratchBufferFull,
    /// String content was not valid UTF-8.
    InvalidUtf8(core::str::Utf8Error),
    /// The parser entered an unexpected internal state.
    Unexpected(UnexpectedState),
}

impl From<cursor::Error> for ParseError {
    fn from(err: cursor::Error) -> Self {
        match err {
            // Callers that can hit the end of input map it to their own error
            // before `?`, so reaching here means an unterminated token.
            cursor::Error::ReachedEnd => ParseError::InvalidValue,
            cursor::Error::InvalidSliceBounds => UnexpectedState::InvalidSliceBounds.into(),
        }
    }
}

impl From<scratch_buffer::Error> for ParseError {
    fn from(err: scratch_buffer::Error) -> Self {
        match err {
            scratch_buffer::Error::BufferFull => ParseError::ScratchBufferFull,
            scratch_buffer::Error::Underflow => UnexpectedState::ScratchUnderflow.into(),
        }
    }
}

impl From<core::str::Utf8Error> for ParseError {
    fn from(err: core::str::Utf8Error) -> Self {
        ParseError::InvalidUtf8(err)
    }
}

impl From<UnexpectedState> for ParseError {
    fn from(info: UnexpectedState) -> Self {
        ParseError::Unexpected(info)
    }
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ParseError::ExpectValue => f.write_str("expected a value"),
            ParseError::InvalidValue => f.write_str("invalid value"),
            ParseError::RootNotSingular => f.write_str("trailing content after root value"),
            ParseError::NumberTooBig => f.write_str("number too big"),
            ParseError::MissQuotationMark => f.write_str("missing closing quotation mark"),
            ParseError::InvalidStringEscape => f.write_str("invalid string escape"),
            ParseError::InvalidStringChar => f.write_str("invalid character in string"),
            ParseError::ScratchBufferFull => f.write_str("scratch buffer full"),
            ParseError::InvalidUtf8(e) => write!(f, "Invalid UTF-8: {e}"),
            ParseError::Unexpected(info) => write!(f, "unexpected parser state: {info}"),
        }
    }
}

impl core::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_constructors() {
        let error: ParseError = UnexpectedState::ScratchUnderflow.into();
        match error {
            ParseError::Unexpected(info) => {
                assert_eq!(info, UnexpectedState::ScratchUnderflow);
            }
            _ => panic!("Expected UnexpectedState error"),
        }

        let error: ParseError = scratch_buffer::Error::BufferFull.into();
        assert_eq!(error, ParseError::ScratchBufferFull);

        let error: ParseError = cursor::Error::InvalidSliceBounds.into();
        assert_eq!(
            error,
            ParseError::Unexpected(UnexpectedState::InvalidSliceBounds)
        );
    }

    #[test]
    fn test_utf8_error_conversion() {
        use core::str;
        // Lone continuation byte, built at runtime to avoid a literal invalid UTF-8 warning
        let mut invalid_utf8_array = [0u8; 1];
        invalid_utf8_array[0] = 0b10000000u8;

        match str::from_utf8(&invalid_utf8_array) {
            Err(utf8_error) => {
                let parse_error: ParseError = utf8_error.into();
                assert!(matches!(parse_error, ParseError::InvalidUtf8(_)));
            }
            Ok(_) => panic!("Expected UTF-8 validation to fail"),
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(ParseError::NumberTooBig.to_string(), "number too big");
        assert_eq!(
            ParseError::Unexpected(UnexpectedState::InvalidSliceBounds).to_string(),
            "unexpected parser state: invalid slice bounds"
        );
    }
}
