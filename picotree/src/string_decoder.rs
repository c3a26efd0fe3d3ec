// SPDX-License-Identifier: Apache-2.0

use alloc::vec::Vec;

use crate::cursor::{self, Cursor};
use crate::escape_processor::EscapeProcessor;
use crate::parse_error::ParseError;
use crate::scratch_buffer::ScratchBuffer;
use crate::shared::UnexpectedState;

/// Decode a quoted string starting at the opening quote.
///
/// Decoded bytes are staged in `scratch` above its current length and moved
/// into the returned vector once the closing quote is found. On every error
/// path the scratch buffer is unwound back to where it started.
pub fn decode_string(
    cursor: &mut Cursor<'_>,
    scratch: &mut ScratchBuffer,
) -> Result<Vec<u8>, ParseError> {
    if cursor.consume_byte() != Ok(b'"') {
        return Err(UnexpectedState::MissingOpeningQuote.into());
    }
    let head = scratch.len();
    let result = decode_content(cursor, scratch, head);
    if let Err(ref e) = result {
        log::debug!(
            "String decode failed at {}: {:?}, unwinding {} scratch bytes",
            cursor.current_pos(),
            e,
            scratch.len().saturating_sub(head)
        );
        scratch.truncate(head);
    }
    result
}

/// Bytes that end a plain run: the closing quote, an escape, or a control character.
fn is_special(byte: u8) -> bool {
    byte == b'"' || byte == b'\\' || EscapeProcessor::is_unescaped_control(byte)
}

fn decode_content(
    cursor: &mut Cursor<'_>,
    scratch: &mut ScratchBuffer,
    head: usize,
) -> Result<Vec<u8>, ParseError> {
    loop {
        // Copy runs of ordinary bytes in one go
        let run = cursor
            .remaining()
            .iter()
            .take_while(|&&b| !is_special(b))
            .count();
        if run > 0 {
            let start = cursor.current_pos();
            scratch.push_slice(cursor.slice(start, start.wrapping_add(run))?)?;
            cursor.advance(run)?;
        }

        let byte = match cursor.consume_byte() {
            Ok(b) => b,
            Err(cursor::Error::ReachedEnd) => return Err(ParseError::MissQuotationMark),
            Err(e) => return Err(e.into()),
        };
        match byte {
            b'"' => {
                let len = scratch.len().saturating_sub(head);
                let decoded = scratch.pop(len)?.to_vec();
                log::trace!("Decoded string of {} bytes", decoded.len());
                return Ok(decoded);
            }
            b'\\' => {
                // A backslash at end of input is an invalid escape, not a missing quote
                let escape_char = cursor
                    .consume_byte()
                    .map_err(|_| ParseError::InvalidStringEscape)?;
                scratch.push(EscapeProcessor::process_simple_escape(escape_char)?)?;
            }
            b if EscapeProcessor::is_unescaped_control(b) => {
                return Err(ParseError::InvalidStringChar);
            }
            b => scratch.push(b)?,
        }
    }
}
