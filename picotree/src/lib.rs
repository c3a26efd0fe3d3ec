// SPDX-License-Identifier: Apache-2.0

//! A minimal JSON value parser.
//!
//! Parses a single JSON literal, number or string into an owned [`Value`].
//! Strings are decoded through a growable scratch buffer; arrays and objects
//! are not parsed.
//!
//! ```
//! use picotree::{parse, ValueType};
//!
//! let value = parse(r#" "Hello\nWorld" "#).unwrap();
//! assert_eq!(value.value_type(), ValueType::String);
//! assert_eq!(value.get_string(), b"Hello\nWorld");
//! ```

#![cfg_attr(not(test), no_std)]

extern crate alloc;

mod cursor;

mod escape_processor;

mod number_parser;

mod parse_error;
pub use parse_error::ParseError;

mod parser;
pub use parser::{parse, parse_into, parse_slice, Parser};

mod scanner;

mod scratch_buffer;
pub use scratch_buffer::{DefaultConfig, ScratchConfig};

mod shared;
pub use shared::UnexpectedState;

mod string_decoder;

mod value;
pub use value::{Value, ValueType};
