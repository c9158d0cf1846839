//! Numeric literal scanning.
//!
//! # Number Formats
//!
//! - Decimal: `42`, `3.5`
//! - Exponential: `1e10`, `2.5e-3` (only `-` may sign an exponent)
//! - Binary: `0b1010`, Octal: `0o777`, Hexadecimal: `0x1A` (markers are case-insensitive)
//! - Any of the above followed by `n` is decoded with arbitrary precision,
//!   as long as its value is an integer.

use num_bigint::BigInt;
use quill_util::DiagnosticCode;

use crate::token::{NumberFormat, NumberValue, Token, TokenKind};
use crate::Scanner;

/// Largest exponent accepted on an arbitrary-precision literal such as `1e100n`
pub const MAX_BIGINT_EXPONENT: u32 = 10_000;

/// The exponent part of a decimal literal
struct Exponent<'src> {
    negative: bool,
    digits: &'src str,
}

impl<'src, 'h> Scanner<'src, 'h> {
    /// Scans a numeric literal starting at a decimal digit.
    ///
    /// Returns `None` after reporting an error when the literal is malformed
    /// or its value cannot be represented.
    pub(crate) fn scan_number(&mut self) -> Option<Token<'src>> {
        if self.cursor.current_char() == '0' {
            if let Some(format) = NumberFormat::from_marker(self.cursor.peek_char()) {
                return self.scan_radix_number(format);
            }
        }
        self.scan_decimal_number()
    }

    /// Scans `0b`, `0o` or `0x` followed by digits of that radix.
    fn scan_radix_number(&mut self, format: NumberFormat) -> Option<Token<'src>> {
        let radix = format.radix();
        self.cursor.advance();
        self.cursor.advance();

        let digits_start = self.cursor.position();
        if self.cursor.eat_while(|c| c.is_digit(radix)) == 0 {
            let prefix = self.cursor.slice(self.token_start, digits_start);
            self.cursor.eat_while(|c| c.is_ascii_alphanumeric());
            let diagnostic = self
                .error(
                    DiagnosticCode::E_LEXER_EXPECTED_DIGIT,
                    format!("expected {} digit after `{}`", format.name(), prefix),
                )
                .note(format!("{} literals use digits of base {}", format.name(), radix));
            self.report(diagnostic);
            return None;
        }

        let digits = self.cursor.slice_from(digits_start);
        let value = if self.cursor.match_char('n') {
            match BigInt::parse_bytes(digits.as_bytes(), radix) {
                Some(value) => NumberValue::BigInt(value),
                None => {
                    self.report_error(
                        DiagnosticCode::E_LEXER_INVALID_NUMBER,
                        format!("invalid {} literal", format.name()),
                    );
                    return None;
                },
            }
        } else {
            let value = digits
                .chars()
                .filter_map(|c| c.to_digit(radix))
                .fold(0.0_f64, |acc, digit| acc * f64::from(radix) + f64::from(digit));
            self.finite(value)?
        };

        Some(self.make_token(TokenKind::Number { value, format }))
    }

    /// Scans digits with an optional fraction, exponent and `n` suffix.
    fn scan_decimal_number(&mut self) -> Option<Token<'src>> {
        self.cursor.eat_while(|c| c.is_ascii_digit());

        let mut has_fraction = false;
        if self.cursor.current_char() == '.' && self.cursor.peek_char().is_ascii_digit() {
            self.cursor.advance();
            self.cursor.eat_while(|c| c.is_ascii_digit());
            has_fraction = true;
        }
        let mantissa_end = self.cursor.position();

        let exponent = self.scan_exponent();
        let number_end = self.cursor.position();
        let format = if exponent.is_some() {
            NumberFormat::Exponential
        } else {
            NumberFormat::Decimal
        };

        let value = if self.cursor.match_char('n') {
            let mantissa = self.cursor.slice(self.token_start, mantissa_end);
            self.decode_bigint(mantissa, has_fraction, exponent)?
        } else {
            let text = self.cursor.slice(self.token_start, number_end);
            match text.parse::<f64>() {
                Ok(value) => self.finite(value)?,
                Err(e) => {
                    self.report_error(
                        DiagnosticCode::E_LEXER_INVALID_NUMBER,
                        format!("invalid number literal `{}`: {}", text, e),
                    );
                    return None;
                },
            }
        };

        Some(self.make_token(TokenKind::Number { value, format }))
    }

    /// Consumes `e`/`E` and its digits, but only when digits (optionally
    /// after a `-`) actually follow the marker.
    fn scan_exponent(&mut self) -> Option<Exponent<'src>> {
        if !matches!(self.cursor.current_char(), 'e' | 'E') {
            return None;
        }

        let after_marker = &self.cursor.remaining()[1..];
        let negative = after_marker.starts_with('-');
        let digits_offset = if negative { 1 } else { 0 };
        if !after_marker[digits_offset..].starts_with(|c: char| c.is_ascii_digit()) {
            return None;
        }

        self.cursor.advance();
        if negative {
            self.cursor.advance();
        }
        let digits_start = self.cursor.position();
        self.cursor.eat_while(|c| c.is_ascii_digit());

        Some(Exponent {
            negative,
            digits: self.cursor.slice_from(digits_start),
        })
    }

    /// Decodes a suffixed decimal literal, which must denote an integer.
    fn decode_bigint(
        &mut self,
        mantissa: &str,
        has_fraction: bool,
        exponent: Option<Exponent<'src>>,
    ) -> Option<NumberValue> {
        if has_fraction {
            self.report_not_integer();
            return None;
        }

        let power = match exponent {
            None => 0,
            Some(exponent) => {
                let power = exponent
                    .digits
                    .parse::<u32>()
                    .ok()
                    .filter(|&power| power <= MAX_BIGINT_EXPONENT);
                match power {
                    Some(0) => 0,
                    Some(_) if exponent.negative => {
                        self.report_not_integer();
                        return None;
                    },
                    Some(power) => power,
                    None => {
                        let diagnostic = self
                            .error(
                                DiagnosticCode::E_LEXER_INVALID_NUMBER,
                                "exponent too large for an arbitrary-precision literal",
                            )
                            .note(format!("the largest supported exponent is {}", MAX_BIGINT_EXPONENT));
                        self.report(diagnostic);
                        return None;
                    },
                }
            },
        };

        let Some(mantissa) = BigInt::parse_bytes(mantissa.as_bytes(), 10) else {
            self.report_error(
                DiagnosticCode::E_LEXER_INVALID_NUMBER,
                format!("invalid number literal `{}`", mantissa),
            );
            return None;
        };

        Some(NumberValue::BigInt(mantissa * BigInt::from(10u32).pow(power)))
    }

    fn report_not_integer(&mut self) {
        let diagnostic = self
            .error(
                DiagnosticCode::E_LEXER_INVALID_NUMBER,
                "arbitrary-precision literal must be an integer",
            )
            .help("remove the `n` suffix to get a floating-point number");
        self.report(diagnostic);
    }

    /// Wraps `value`, reporting an error instead if it is infinite.
    fn finite(&mut self, value: f64) -> Option<NumberValue> {
        if value.is_finite() {
            return Some(NumberValue::Float(value));
        }
        let diagnostic = self
            .error(
                DiagnosticCode::E_LEXER_INVALID_NUMBER,
                "number literal is out of range",
            )
            .help("add an `n` suffix for an arbitrary-precision integer");
        self.report(diagnostic);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_util::Handler;

    fn scan_one(source: &str) -> (Vec<Token<'_>>, Handler) {
        let mut handler = Handler::new();
        let tokens = crate::scan(source, &mut handler);
        (tokens, handler)
    }

    fn number(source: &str) -> (NumberValue, NumberFormat) {
        let (tokens, handler) = scan_one(source);
        assert!(!handler.has_errors(), "unexpected errors for {:?}", source);
        assert_eq!(tokens.len(), 2, "expected a single number in {:?}", source);
        match &tokens[0].kind {
            TokenKind::Number { value, format } => (value.clone(), *format),
            other => panic!("expected number, got {:?}", other),
        }
    }

    fn float(value: f64) -> NumberValue {
        NumberValue::Float(value)
    }

    fn big(text: &str) -> NumberValue {
        NumberValue::BigInt(text.parse().unwrap())
    }

    #[test]
    fn test_decimal_integer() {
        assert_eq!(number("42"), (float(42.0), NumberFormat::Decimal));
        assert_eq!(number("0"), (float(0.0), NumberFormat::Decimal));
        assert_eq!(number("007"), (float(7.0), NumberFormat::Decimal));
    }

    #[test]
    fn test_decimal_fraction() {
        assert_eq!(number("3.25"), (float(3.25), NumberFormat::Decimal));
    }

    #[test]
    fn test_dot_without_digit_is_not_fraction() {
        let (tokens, _) = scan_one("1.");
        assert_eq!(tokens[0].lexeme, "1");
        assert_eq!(tokens[1].kind, TokenKind::Dot);
    }

    #[test]
    fn test_exponent() {
        assert_eq!(number("1e10"), (float(1e10), NumberFormat::Exponential));
        assert_eq!(number("2E3"), (float(2000.0), NumberFormat::Exponential));
        assert_eq!(number("1.5e-3"), (float(0.0015), NumberFormat::Exponential));
    }

    #[test]
    fn test_exponent_marker_without_digits() {
        let mut handler = Handler::new();
        let tokens = crate::scan("1e-", &mut handler);

        assert_eq!(tokens[0].lexeme, "1");
        assert_eq!(tokens[0].kind, TokenKind::Number { value: float(1.0), format: NumberFormat::Decimal });
        assert_eq!(tokens[1].kind, TokenKind::Minus);
        assert_eq!(handler.error_count(), 1);
    }

    #[test]
    fn test_plus_does_not_sign_exponent() {
        let (tokens, handler) = scan_one("1e+5");
        assert_eq!(tokens[0].lexeme, "1");
        assert_eq!(handler.error_count(), 1);
        assert_eq!(tokens[1].kind, TokenKind::Plus);
    }

    #[test]
    fn test_radix_literals() {
        assert_eq!(number("0x1A"), (float(26.0), NumberFormat::Hexadecimal));
        assert_eq!(number("0XfF"), (float(255.0), NumberFormat::Hexadecimal));
        assert_eq!(number("0b1010"), (float(10.0), NumberFormat::Binary));
        assert_eq!(number("0B1"), (float(1.0), NumberFormat::Binary));
        assert_eq!(number("0o777"), (float(511.0), NumberFormat::Octal));
        assert_eq!(number("0O10"), (float(8.0), NumberFormat::Octal));
    }

    #[test]
    fn test_radix_lexeme_includes_prefix() {
        let (tokens, _) = scan_one("0x1A");
        assert_eq!(tokens[0].lexeme, "0x1A");
    }

    #[test]
    fn test_radix_stops_at_invalid_digit() {
        let (tokens, handler) = scan_one("0b12");
        assert!(!handler.has_errors());
        assert_eq!(tokens[0].lexeme, "0b1");
        assert_eq!(tokens[1].lexeme, "2");
    }

    #[test]
    fn test_radix_without_digit() {
        let (tokens, handler) = scan_one("0b2");

        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].is_eof());
        assert_eq!(handler.error_count(), 1);
        let diagnostic = &handler.diagnostics()[0];
        assert_eq!(diagnostic.code, Some(DiagnosticCode::E_LEXER_EXPECTED_DIGIT));
        assert_eq!(diagnostic.message, "expected binary digit after `0b`");
        assert_eq!(diagnostic.span.len(), 3);
    }

    #[test]
    fn test_radix_without_digit_at_end() {
        let (tokens, handler) = scan_one("0x");
        assert_eq!(tokens.len(), 1);
        assert_eq!(handler.error_count(), 1);
    }

    #[test]
    fn test_bigint_suffix() {
        assert_eq!(number("123n"), (big("123"), NumberFormat::Decimal));
        assert_eq!(number("0xFFn"), (big("255"), NumberFormat::Hexadecimal));
        assert_eq!(number("2e3n"), (big("2000"), NumberFormat::Exponential));
        assert_eq!(number("5e-0n"), (big("5"), NumberFormat::Exponential));

        let (tokens, _) = scan_one("123n");
        assert_eq!(tokens[0].lexeme, "123n");
    }

    #[test]
    fn test_bigint_beyond_u64() {
        let (value, _) = number("0xFFFFFFFFFFFFFFFFFFFFn");
        assert_eq!(value, big("1208925819614629174706175"));

        let (value, _) = number("1e30n");
        assert_eq!(value, big("1000000000000000000000000000000"));
    }

    #[test]
    fn test_bigint_rejects_fraction() {
        let (tokens, handler) = scan_one("1.5n");
        assert_eq!(tokens.len(), 1);
        assert_eq!(
            handler.diagnostics()[0].code,
            Some(DiagnosticCode::E_LEXER_INVALID_NUMBER)
        );
        assert_eq!(handler.diagnostics()[0].span.len(), 4);
    }

    #[test]
    fn test_bigint_rejects_negative_exponent() {
        let (tokens, handler) = scan_one("1e-2n");
        assert_eq!(tokens.len(), 1);
        assert_eq!(handler.error_count(), 1);
    }

    #[test]
    fn test_bigint_rejects_huge_exponent() {
        let (tokens, handler) = scan_one("1e10001n");
        assert_eq!(tokens.len(), 1);
        assert_eq!(handler.error_count(), 1);
    }

    #[test]
    fn test_float_out_of_range() {
        let (tokens, handler) = scan_one("1e999");
        assert_eq!(tokens.len(), 1);
        assert_eq!(
            handler.diagnostics()[0].code,
            Some(DiagnosticCode::E_LEXER_INVALID_NUMBER)
        );
    }

    #[test]
    fn test_number_followed_by_operator() {
        let (tokens, handler) = scan_one("1+2");
        assert!(!handler.has_errors());
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[1].kind, TokenKind::Plus);
    }
}
