//! Guard against decimal additions that would rescale an operand by an
//! unbounded power of ten.

use bigdecimal::BigDecimal;
use classify_lines_shared_kernel::{DomainError, DomainResult};

/// Largest scale difference, in decimal digits, accepted between a running
/// sum and the value added to it.
pub const MAX_SCALE_GAP: u64 = 100_000;

/// Check that `sum + value` stays within [`MAX_SCALE_GAP`].
///
/// A zero sum starts at scale 0, so the first value's own scale is bounded
/// too. That keeps every recorded value and every average computation within
/// a bounded number of digits.
///
/// # Errors
///
/// Returns [`DomainError::ScaleGapTooLarge`] when the gap exceeds the limit.
pub fn check_scale_gap(sum: &BigDecimal, value: &BigDecimal) -> DomainResult<()> {
    let gap = (i128::from(scale_of(sum)) - i128::from(scale_of(value))).unsigned_abs();
    if gap > u128::from(MAX_SCALE_GAP) {
        return Err(DomainError::ScaleGapTooLarge {
            gap: u64::try_from(gap).unwrap_or(u64::MAX),
            limit: MAX_SCALE_GAP,
        });
    }
    Ok(())
}

fn scale_of(value: &BigDecimal) -> i64 {
    value.as_bigint_and_exponent().1
}
