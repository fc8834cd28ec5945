use super::token::{Operator, TokenKind};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // ASCII digits only; other scripts' digits are tags
    static ref DECIMAL: Regex = Regex::new(r"^-?[0-9]*\.?[0-9]+$").unwrap();
    static ref FRACTION: Regex = Regex::new(r"^-?[0-9]+/[0-9]+$").unwrap();
}

/// Classifies raw input text as an operand, a number literal, or a tag.
///
/// Total over all strings: anything that is neither an operand symbol nor a
/// decimal/fraction literal is a tag, including the empty string and
/// malformed numbers such as `12a`.
pub fn classify(text: &str) -> TokenKind {
    let trimmed = text.trim();

    if Operator::from_symbol(trimmed).is_some() {
        return TokenKind::Operand;
    }

    if is_number_literal(trimmed) {
        return TokenKind::Number;
    }

    TokenKind::Tag
}

pub fn is_number_literal(text: &str) -> bool {
    DECIMAL.is_match(text) || FRACTION.is_match(text)
}

pub fn is_fraction_literal(text: &str) -> bool {
    FRACTION.is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operand_symbols() {
        for symbol in ["+", "-", "*", "/", "^", "(", ")"] {
            assert_eq!(classify(symbol), TokenKind::Operand, "{symbol}");
        }
        assert_eq!(classify("  *  "), TokenKind::Operand);
    }

    #[test]
    fn test_numbers() {
        for literal in ["3.14", "-5", "1/2", "-3/4", "0", ".5", "42"] {
            assert_eq!(classify(literal), TokenKind::Number, "{literal}");
        }
    }

    #[test]
    fn test_tags() {
        for text in ["foo", "", "12a", "5.", "1/", "/2", "1.2/3", "--5", "**"] {
            assert_eq!(classify(text), TokenKind::Tag, "{text:?}");
        }
    }

    #[test]
    fn test_non_ascii_digits_are_tags() {
        for text in ["３", "١٢", "٣/٤", "-৫", "0.５"] {
            assert_eq!(classify(text), TokenKind::Tag, "{text:?}");
        }
    }

    #[test]
    fn test_whitespace_only_is_tag() {
        assert_eq!(classify("   "), TokenKind::Tag);
    }

    #[test]
    fn test_fraction_detection() {
        assert!(is_fraction_literal("-3/4"));
        assert!(!is_fraction_literal("3.4"));
    }
}
