//! quill-lex - Scanner for the Quill scripting language
//!
//! This crate turns Quill source text into a flat sequence of tokens for a
//! downstream parser. Scanning never fails: lexical errors are reported to a
//! [`quill_util::Handler`] and the scan carries on with the next character.
//!
//! # Example Usage
//!
//! ```
//! use quill_lex::{scan, NumberFormat, NumberValue, TokenKind};
//! use quill_util::Handler;
//!
//! let mut handler = Handler::new();
//! let tokens = scan("0x1A + 2", &mut handler);
//!
//! assert!(!handler.has_errors());
//! assert_eq!(
//!     tokens[0].kind,
//!     TokenKind::Number {
//!         value: NumberValue::Float(26.0),
//!         format: NumberFormat::Hexadecimal,
//!     }
//! );
//! assert_eq!(tokens[1].kind, TokenKind::Plus);
//! assert_eq!(tokens.last().map(|t| &t.kind), Some(&TokenKind::Eof));
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions
//! - [`scanner`] - The scanner itself
//! - [`cursor`] - Character cursor for source traversal
//!
//! # Token Categories
//!
//! - **Punctuation**: `(`, `)`, `{`, `}`, `,`, `.`, `;`
//! - **Comparison and assignment**: `!`, `!=`, `=`, `==`, `<`, `<=`, `>`, `>=`
//! - **Arithmetic**: `+`, `-`, `*`, `/`
//! - **Numbers**: `42`, `3.5`, `1.5e-3`, `0b1010`, `0o17`, `0x1A`, `123n`
//! - **Strings**: `"text"`, which may span lines
//! - **Comments**: `-- to end of line` and `{- block -}`, skipped
//! - **EOF**: End of input marker, always last

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod scanner;
pub mod token;

mod edge_cases;

pub use cursor::Cursor;
pub use scanner::{Scanner, MAX_BIGINT_EXPONENT};
pub use token::{NumberFormat, NumberValue, Token, TokenKind};

use quill_util::Handler;

/// Scans `source` into tokens, reporting lexical errors to `handler`.
///
/// The result always ends with exactly one [`TokenKind::Eof`].
pub fn scan<'src>(source: &'src str, handler: &mut Handler) -> Vec<Token<'src>> {
    Scanner::new(source, handler).scan_tokens()
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    /// Source made of the characters the scanner cares about, plus some it rejects.
    const SOURCE_PATTERN: &str = "[(){},.;!=<>+*/\\- \t\r\n\"\\\\0-9a-fxXbBoOeEn{}#@λ]{0,80}";

    fn scan_with_errors(source: &str) -> (Vec<Token<'_>>, Handler) {
        let mut handler = Handler::new();
        let tokens = scan(source, &mut handler);
        (tokens, handler)
    }

    /// True if `gap` is nothing but whitespace and complete comments.
    fn is_trivia(mut gap: &str) -> bool {
        while let Some(c) = gap.chars().next() {
            if matches!(c, ' ' | '\t' | '\r' | '\n') {
                gap = &gap[1..];
            } else if let Some(rest) = gap.strip_prefix("--") {
                gap = rest.find('\n').map_or("", |i| &rest[i..]);
            } else if let Some(rest) = gap.strip_prefix("{-") {
                match rest.find("-}") {
                    Some(i) => gap = &rest[i + 2..],
                    None => return false,
                }
            } else {
                return false;
            }
        }
        true
    }

    #[test]
    fn test_is_trivia() {
        assert!(is_trivia(" \t\r\n-- note\n{- a\nb -}"));
        assert!(is_trivia("-- to the end"));
        assert!(!is_trivia("{- open"));
        assert!(!is_trivia(" 1"));
    }

    proptest! {
        #[test]
        fn prop_ends_with_single_eof(source in SOURCE_PATTERN) {
            let (tokens, _) = scan_with_errors(&source);
            prop_assert!(tokens.last().map_or(false, Token::is_eof));
            prop_assert_eq!(tokens.iter().filter(|t| t.is_eof()).count(), 1);
        }

        #[test]
        fn prop_spans_are_ordered_and_match_source(source in SOURCE_PATTERN) {
            let (tokens, _) = scan_with_errors(&source);
            let mut previous_end = 0;
            for token in &tokens {
                prop_assert!(token.span.start >= previous_end);
                prop_assert!(token.span.end >= token.span.start);
                prop_assert!(source.is_char_boundary(token.span.start));
                prop_assert!(source.is_char_boundary(token.span.end));

                let text = &source[token.span.start..token.span.end];
                match token.kind {
                    TokenKind::String(_) => {
                        prop_assert_eq!(format!("\"{}\"", token.lexeme), text);
                    },
                    _ => prop_assert_eq!(token.lexeme, text),
                }

                let line = source[..token.span.start].matches('\n').count() as u32 + 1;
                prop_assert_eq!(token.line(), line);
                previous_end = token.span.end;
            }
        }

        #[test]
        fn prop_text_between_tokens_is_trivia(source in SOURCE_PATTERN) {
            let (tokens, handler) = scan_with_errors(&source);
            let mut covered: Vec<(usize, usize)> = tokens
                .iter()
                .map(|t| (t.span.start, t.span.end))
                .chain(handler.diagnostics().iter().map(|d| (d.span.start, d.span.end)))
                .collect();
            covered.sort_unstable();

            let mut position = 0;
            for (start, end) in covered {
                if start > position {
                    let gap = &source[position..start];
                    prop_assert!(is_trivia(gap), "unaccounted text {:?} in {:?}", gap, source);
                }
                position = position.max(end);
            }
            let tail = &source[position..];
            prop_assert!(is_trivia(tail), "unaccounted text {:?} in {:?}", tail, source);
        }

        #[test]
        fn prop_scan_is_idempotent(source in SOURCE_PATTERN) {
            let (first, first_handler) = scan_with_errors(&source);
            let (second, second_handler) = scan_with_errors(&source);
            prop_assert_eq!(first, second);
            prop_assert_eq!(first_handler.diagnostics(), second_handler.diagnostics());
        }

        #[test]
        fn prop_decimal_digits_scan_to_one_number(digits in "[1-9][0-9]{0,20}") {
            let (tokens, handler) = scan_with_errors(&digits);
            prop_assert!(!handler.has_errors());
            prop_assert_eq!(tokens.len(), 2);
            prop_assert_eq!(tokens[0].lexeme, digits.as_str());
        }

        #[test]
        fn prop_hex_literal_value(value in any::<u32>()) {
            let source = format!("0x{:x}", value);
            let (tokens, handler) = scan_with_errors(&source);
            prop_assert!(!handler.has_errors());
            prop_assert_eq!(
                &tokens[0].kind,
                &TokenKind::Number {
                    value: NumberValue::Float(f64::from(value)),
                    format: NumberFormat::Hexadecimal,
                }
            );
        }

        #[test]
        fn prop_string_literals(content in "[^\"\\\\]{0,60}") {
            let source = format!("\"{}\"", content);
            let (tokens, handler) = scan_with_errors(&source);
            prop_assert!(!handler.has_errors());
            prop_assert_eq!(tokens.len(), 2);
            prop_assert_eq!(&tokens[0].kind, &TokenKind::String(content.clone()));
        }
    }
}
