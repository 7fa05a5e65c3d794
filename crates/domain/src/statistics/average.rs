use std::fmt;

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::{Signed, Zero};

/// Number of fractional digits in a reported average.
pub const AVERAGE_SCALE: u32 = 10;

/// Arithmetic mean rounded half-up to [`AVERAGE_SCALE`] fractional digits.
///
/// Stored as the mean multiplied by `10^AVERAGE_SCALE`, so the value is exact
/// and `Display` always renders plain decimal notation with every fractional
/// digit, e.g. `1.5000000000`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Average {
    scaled: BigInt,
}

impl Average {
    pub fn of_integers(sum: &BigInt, count: usize) -> Option<Self> {
        if count == 0 {
            return None;
        }
        let numerator = sum * pow10(u64::from(AVERAGE_SCALE));
        Some(Self { scaled: round_half_up(&numerator, &BigInt::from(count)) })
    }

    pub fn of_decimals(sum: &BigDecimal, count: usize) -> Option<Self> {
        if count == 0 {
            return None;
        }
        // sum == digits * 10^-scale
        let (digits, scale) = sum.as_bigint_and_exponent();
        let shift = i128::from(AVERAGE_SCALE) - i128::from(scale);
        let count = BigInt::from(count);

        let (numerator, denominator) = if shift >= 0 {
            (digits * pow10(shift.unsigned_abs() as u64), count)
        } else {
            (digits, count * pow10(shift.unsigned_abs() as u64))
        };
        Some(Self { scaled: round_half_up(&numerator, &denominator) })
    }
}

impl fmt::Display for Average {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scale = AVERAGE_SCALE as usize;
        let digits = self.scaled.abs().to_string();
        let padded = format!("{digits:0>width$}", width = scale + 1);
        let (int_part, frac_part) = padded.split_at(padded.len() - scale);
        let sign = if self.scaled.is_negative() { "-" } else { "" };
        write!(f, "{sign}{int_part}.{frac_part}")
    }
}

fn pow10(exponent: u64) -> BigInt {
    num_traits::pow(BigInt::from(10u8), exponent as usize)
}

/// Divide, rounding to nearest with ties away from zero. `denominator` is positive.
fn round_half_up(numerator: &BigInt, denominator: &BigInt) -> BigInt {
    let magnitude = numerator.abs();
    let quotient = &magnitude / denominator;
    let remainder = &magnitude % denominator;

    let rounded = if !remainder.is_zero() && remainder * 2u8 >= *denominator { quotient + 1u8 } else { quotient };

    if numerator.is_negative() { -rounded } else { rounded }
}
