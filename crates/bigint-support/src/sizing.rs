//! Digit count calculations.

use crate::digit::BigIntDigit;
use crate::error::BigIntError;

/// Largest big integer the runtime accepts, in bits.
pub const BIGINT_MAX_SIZE_IN_BITS: usize = 1 << 24;

/// Returns how many `D` digits are needed to hold `size_in_bytes` bytes.
///
/// A size of 0 needs no digits at all.
///
/// # Example
///
/// ```
/// use bigint_support::num_digits_for_size_in_bytes;
///
/// assert_eq!(num_digits_for_size_in_bytes::<u64>(0), 0);
/// assert_eq!(num_digits_for_size_in_bytes::<u64>(1), 1);
/// assert_eq!(num_digits_for_size_in_bytes::<u64>(9), 2);
/// assert_eq!(num_digits_for_size_in_bytes::<u32>(9), 3);
/// ```
#[inline]
pub fn num_digits_for_size_in_bytes<D: BigIntDigit>(size_in_bytes: usize) -> usize {
    size_in_bytes.div_ceil(D::SIZE_IN_BYTES)
}

/// Returns how many `D` digits are needed to hold `size_in_bits` bits.
///
/// # Example
///
/// ```
/// use bigint_support::num_digits_for_size_in_bits;
///
/// assert_eq!(num_digits_for_size_in_bits::<u64>(0), 0);
/// assert_eq!(num_digits_for_size_in_bits::<u64>(64), 1);
/// assert_eq!(num_digits_for_size_in_bits::<u64>(65), 2);
/// ```
#[inline]
pub fn num_digits_for_size_in_bits<D: BigIntDigit>(size_in_bits: usize) -> usize {
    size_in_bits.div_ceil(D::SIZE_IN_BITS)
}

/// Maximum number of `D` digits in a big integer.
#[inline]
pub fn max_size_in_digits<D: BigIntDigit>() -> usize {
    num_digits_for_size_in_bits::<D>(BIGINT_MAX_SIZE_IN_BITS)
}

/// Rejects digit counts above [`max_size_in_digits`].
///
/// Callers run this before allocating a buffer; the initializers in this
/// crate never enforce the limit themselves.
pub fn check_max_size_in_digits<D: BigIntDigit>(num_digits: usize) -> Result<(), BigIntError> {
    let max = max_size_in_digits::<D>();
    if num_digits > max {
        return Err(BigIntError::TooManyDigits {
            requested: num_digits,
            max,
        });
    }
    Ok(())
}
