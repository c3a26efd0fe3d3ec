// SPDX-License-Identifier: Apache-2.0

/// Internal parser states that should be unreachable for well-formed operation.
///
/// These are reported through [`ParseError::Unexpected`](crate::ParseError::Unexpected)
/// instead of panicking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnexpectedState {
    /// A slice was requested outside of the available data.
    InvalidSliceBounds,
    /// More bytes were popped from the scratch buffer than it holds.
    ScratchUnderflow,
    /// A string decode was entered without an opening quote.
    MissingOpeningQuote,
}

impl core::fmt::Display for UnexpectedState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            UnexpectedState::InvalidSliceBounds => "invalid slice bounds",
            UnexpectedState::ScratchUnderflow => "scratch buffer underflow",
            UnexpectedState::MissingOpeningQuote => "string decode without opening quote",
        };
        f.write_str(msg)
    }
}

/// Whitespace as accepted between and around JSON values.
pub const fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r')
}
