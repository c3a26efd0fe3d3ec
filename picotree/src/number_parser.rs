// SPDX-License-Identifier: Apache-2.0

use core::str::FromStr;

use crate::cursor::Cursor;
use crate::parse_error::ParseError;
use crate::Value;

/// Scans the JSON number grammar ahead of the cursor without consuming anything.
///
/// Returns the length of the longest valid number prefix, or `InvalidValue`
/// when the grammar cannot be satisfied. Leading zeros are not rejected here:
/// `0123` scans as `0`, and the trailing `123` is left for the caller.
fn scan_number(cursor: &Cursor<'_>) -> Result<usize, ParseError> {
    let at = |i: usize| cursor.peek_at(i);
    let is_digit = |b: Option<u8>| b.is_some_and(|b| b.is_ascii_digit());
    let skip_digits = |mut i: usize| {
        while is_digit(at(i)) {
            i = i.wrapping_add(1);
        }
        i
    };

    let mut i = 0usize;
    if at(i) == Some(b'-') {
        i = 1;
    }

    // Integer part: a lone zero, or 1-9 followed by digits
    match at(i) {
        Some(b'0') => i = i.wrapping_add(1),
        Some(b'1'..=b'9') => i = skip_digits(i.wrapping_add(1)),
        _ => return Err(ParseError::InvalidValue),
    }

    if at(i) == Some(b'.') {
        i = i.wrapping_add(1);
        if !is_digit(at(i)) {
            return Err(ParseError::InvalidValue);
        }
        i = skip_digits(i);
    }

    if matches!(at(i), Some(b'e' | b'E')) {
        i = i.wrapping_add(1);
        if matches!(at(i), Some(b'+' | b'-')) {
            i = i.wrapping_add(1);
        }
        if !is_digit(at(i)) {
            return Err(ParseError::InvalidValue);
        }
        i = skip_digits(i);
    }

    Ok(i)
}

/// Converts validated number text to an `f64`.
///
/// Underflow rounds to zero and is accepted. Overflow to infinity is
/// `NumberTooBig`.
fn convert_number(bytes: &[u8]) -> Result<f64, ParseError> {
    // Validated number text is pure ASCII
    let s = core::str::from_utf8(bytes)?;
    let n = f64::from_str(s).map_err(|_| ParseError::InvalidValue)?;
    if n.is_infinite() {
        log::debug!("Number {} overflows f64", s);
        return Err(ParseError::NumberTooBig);
    }
    Ok(n)
}

/// Parse a number at the cursor.
///
/// On success the cursor moves past the number. On `NumberTooBig` it stays put.
pub fn parse_number(cursor: &mut Cursor<'_>) -> Result<Value, ParseError> {
    let len = scan_number(cursor)?;
    let start = cursor.current_pos();
    let end = start.checked_add(len).ok_or(ParseError::InvalidValue)?;
    let n = convert_number(cursor.slice(start, end)?)?;
    cursor.advance(len)?;
    Ok(Value::Number(n))
}
