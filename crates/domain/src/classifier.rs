//! Line classification grammar.
//!
//! A line is an integer when it matches `[+-]?[0-9]+` and parses as a
//! [`BigInt`], a float when it matches
//! `[+-]?([0-9]+\.[0-9]*|\.[0-9]+)([eE][+-]?[0-9]+)?` and parses as a
//! [`BigDecimal`], and a string otherwise. Both the pattern and the parse must
//! succeed; a line that matches a pattern but fails to parse falls through to
//! the next rule. A float whose scale does not fit in an `i32` counts as a
//! failed parse.

use std::{str::FromStr, sync::LazyLock};

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use regex::Regex;

use crate::category::Category;

// ASCII digits only: `\d` in `regex` also matches other Unicode decimal digits.
static INTEGER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?[0-9]+$").expect("integer pattern compiles"));

static FLOAT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?([0-9]+\.[0-9]*|\.[0-9]+)([eE][+-]?[0-9]+)?$").expect("float pattern compiles")
});

/// A classified line together with its parsed numeric value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    Integer(BigInt),
    Float(BigDecimal),
    Text,
}

impl ParsedLine {
    pub const fn category(&self) -> Category {
        match self {
            Self::Integer(_) => Category::Integer,
            Self::Float(_) => Category::Float,
            Self::Text => Category::String,
        }
    }
}

/// Classify a non-empty, already trimmed line and keep the parsed value.
pub fn parse(line: &str) -> ParsedLine {
    if INTEGER_PATTERN.is_match(line)
        && let Ok(value) = BigInt::from_str(line)
    {
        return ParsedLine::Integer(value);
    }

    if FLOAT_PATTERN.is_match(line)
        && let Ok(value) = BigDecimal::from_str(line)
        && i32::try_from(value.as_bigint_and_exponent().1).is_ok()
    {
        return ParsedLine::Float(value);
    }

    ParsedLine::Text
}

/// Classify a non-empty, already trimmed line.
pub fn classify(line: &str) -> Category {
    parse(line).category()
}
