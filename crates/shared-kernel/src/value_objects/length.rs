// crates/shared-kernel/src/value_objects/length.rs
use std::fmt;

/// Length of a classified line measured in Unicode scalar values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct LineLength(usize);

impl LineLength {
    #[inline]
    pub const fn new(value: usize) -> Self {
        Self(value)
    }

    /// Measure `line` as the number of `char`s it contains.
    #[inline]
    pub fn of(line: &str) -> Self {
        Self(line.chars().count())
    }

    #[inline]
    pub const fn value(self) -> usize {
        self.0
    }
}

impl From<usize> for LineLength {
    fn from(value: usize) -> Self {
        Self::new(value)
    }
}

impl From<LineLength> for usize {
    fn from(value: LineLength) -> Self {
        value.0
    }
}

impl fmt::Display for LineLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
