//! Per-category accumulators.
//!
//! A [`Statistics`] owns the lines that fell into one category and the
//! category-specific [`Measure`]. The line count is the length of the line
//! list, so the two can never disagree.

pub mod average;
pub mod numeric;
mod scale;
pub mod set;
pub mod text;

pub use average::{AVERAGE_SCALE, Average};
pub use numeric::NumericSummary;
pub use set::StatisticsSet;
pub use text::LengthSummary;

use bigdecimal::BigDecimal;
use classify_lines_shared_kernel::{DomainError, DomainResult};
use num_bigint::BigInt;

use self::scale::check_scale_gap;
use crate::{category::Category, classifier::ParsedLine};

/// Category-specific part of the statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Measure {
    Integer(NumericSummary<BigInt>),
    Float(NumericSummary<BigDecimal>),
    Text(LengthSummary),
}

impl Measure {
    pub fn empty(category: Category) -> Self {
        match category {
            Category::Integer => Self::Integer(NumericSummary::new()),
            Category::Float => Self::Float(NumericSummary::new()),
            Category::String => Self::Text(LengthSummary::new()),
        }
    }

    pub const fn category(&self) -> Category {
        match self {
            Self::Integer(_) => Category::Integer,
            Self::Float(_) => Category::Float,
            Self::Text(_) => Category::String,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statistics {
    lines: Vec<String>,
    measure: Measure,
}

impl Statistics {
    pub fn empty(category: Category) -> Self {
        Self { lines: Vec::new(), measure: Measure::empty(category) }
    }

    #[inline]
    pub const fn category(&self) -> Category {
        self.measure.category()
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.lines.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines in the order they were recorded or merged.
    #[inline]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    #[inline]
    pub fn measure(&self) -> &Measure {
        &self.measure
    }

    /// Record one line and its parsed value.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::CategoryMismatch`] when `value` belongs to a
    /// different category, or [`DomainError::ScaleGapTooLarge`] when a float
    /// is too far in scale from the running sum. The statistics are left
    /// unchanged in both cases.
    pub fn record(&mut self, line: String, value: ParsedLine) -> DomainResult<()> {
        let expected = self.category();
        let actual = value.category();

        match (&mut self.measure, value) {
            (Measure::Integer(summary), ParsedLine::Integer(v)) => summary.observe(v),
            (Measure::Float(summary), ParsedLine::Float(v)) => {
                check_scale_gap(summary.sum(), &v)?;
                summary.observe(v);
            }
            (Measure::Text(summary), ParsedLine::Text) => summary.observe(&line),
            _ => return Err(mismatch(expected, actual)),
        }

        self.lines.push(line);
        Ok(())
    }

    /// Merge `other` into `self`: counts and sums add, extremes combine, and
    /// `other`'s lines are appended after the existing ones.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::CategoryMismatch`] when the categories differ,
    /// or [`DomainError::ScaleGapTooLarge`] when the float sums are too far
    /// apart in scale.
    pub fn merge(&mut self, other: Self) -> DomainResult<()> {
        let expected = self.category();
        let actual = other.category();

        match (&mut self.measure, other.measure) {
            (Measure::Integer(mine), Measure::Integer(theirs)) => mine.absorb(theirs),
            (Measure::Float(mine), Measure::Float(theirs)) => {
                check_scale_gap(mine.sum(), theirs.sum())?;
                mine.absorb(theirs);
            }
            (Measure::Text(mine), Measure::Text(theirs)) => mine.absorb(theirs),
            _ => return Err(mismatch(expected, actual)),
        }

        self.lines.extend(other.lines);
        Ok(())
    }

    /// Arithmetic mean for numeric categories, `None` for strings or when empty.
    pub fn average(&self) -> Option<Average> {
        match &self.measure {
            Measure::Integer(summary) => Average::of_integers(summary.sum(), self.count()),
            Measure::Float(summary) => Average::of_decimals(summary.sum(), self.count()),
            Measure::Text(_) => None,
        }
    }
}

fn mismatch(expected: Category, actual: Category) -> DomainError {
    DomainError::CategoryMismatch { expected: expected.to_string(), actual: actual.to_string() }
}
