//! Scanner module.
//!
//! The scanner is split into focused components:
//! - `core` - Scanner struct, dispatch and diagnostics
//! - `operator` - Punctuation and one-or-two-character operators
//! - `number` - Numeric literals (radix prefixes, fractions, exponents, `n` suffix)
//! - `string` - String literals
//! - `comment` - Whitespace, line comments and block comments

mod comment;
mod core;
mod number;
mod operator;
mod string;

pub use self::core::Scanner;
pub use self::number::MAX_BIGINT_EXPONENT;
