// SPDX-License-Identifier: Apache-2.0

use crate::cursor::Cursor;
use crate::parse_error::ParseError;
use crate::shared::is_whitespace;
use crate::Value;

/// Advance past any JSON whitespace. Never fails.
pub fn skip_whitespace(cursor: &mut Cursor<'_>) {
    let count = cursor
        .remaining()
        .iter()
        .take_while(|&&b| is_whitespace(b))
        .count();
    // The count is bounded by the remaining input
    let _ = cursor.advance(count);
}

/// Match `literal` at the cursor and produce `value` on success.
///
/// The caller has already dispatched on the literal's first byte. On mismatch
/// the cursor is left unmoved and `InvalidValue` is returned.
pub fn parse_literal(
    cursor: &mut Cursor<'_>,
    literal: &'static [u8],
    value: Value,
) -> Result<Value, ParseError> {
    debug_assert_eq!(cursor.peek(), literal.first().copied());
    if !cursor.remaining().starts_with(literal) {
        return Err(ParseError::InvalidValue);
    }
    cursor.advance(literal.len())?;
    Ok(value)
}
