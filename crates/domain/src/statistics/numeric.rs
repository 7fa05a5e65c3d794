use std::ops::AddAssign;

use num_traits::Zero;

/// Running min/max/sum over arbitrary-precision numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericSummary<T> {
    min: Option<T>,
    max: Option<T>,
    sum: T,
}

impl<T> NumericSummary<T>
where
    T: Clone + Ord + Zero + AddAssign,
{
    pub fn new() -> Self {
        Self { min: None, max: None, sum: T::zero() }
    }

    pub fn observe(&mut self, value: T) {
        if self.min.as_ref().is_none_or(|min| value < *min) {
            self.min = Some(value.clone());
        }
        if self.max.as_ref().is_none_or(|max| value > *max) {
            self.max = Some(value.clone());
        }
        self.sum += value;
    }

    /// Fold another summary into this one. An empty side does not constrain the extremes.
    pub fn absorb(&mut self, other: Self) {
        if let Some(min) = other.min
            && self.min.as_ref().is_none_or(|current| min < *current)
        {
            self.min = Some(min);
        }
        if let Some(max) = other.max
            && self.max.as_ref().is_none_or(|current| max > *current)
        {
            self.max = Some(max);
        }
        self.sum += other.sum;
    }

    #[inline]
    pub fn min(&self) -> Option<&T> {
        self.min.as_ref()
    }

    #[inline]
    pub fn max(&self) -> Option<&T> {
        self.max.as_ref()
    }

    #[inline]
    pub fn sum(&self) -> &T {
        &self.sum
    }
}

impl<T> Default for NumericSummary<T>
where
    T: Clone + Ord + Zero + AddAssign,
{
    fn default() -> Self {
        Self::new()
    }
}
