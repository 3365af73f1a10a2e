//! Digit types used as the storage unit of a big integer.

use std::fmt;
use std::mem::size_of;

use num_traits::{PrimInt, Unsigned};

/// An unsigned machine word usable as a big integer digit.
///
/// Every operation in this crate is generic over the digit type, so the same
/// code serves 32-bit and 64-bit builds of the runtime. The crate-wide default
/// is [`DigitType`].
pub trait BigIntDigit: PrimInt + Unsigned + Default + fmt::Debug {
    /// Width of one digit in bytes.
    const SIZE_IN_BYTES: usize;
    /// Width of one digit in bits.
    const SIZE_IN_BITS: usize = Self::SIZE_IN_BYTES * 8;

    /// Builds a digit from up to `SIZE_IN_BYTES` little-endian bytes.
    ///
    /// Missing high-order bytes are set to `fill`; extra bytes are ignored.
    fn from_le_bytes_with_fill(bytes: &[u8], fill: u8) -> Self;

    /// Appends the digit's little-endian bytes to `out`.
    fn extend_le_bytes(self, out: &mut Vec<u8>);
}

macro_rules! impl_bigint_digit {
    ($($t:ty),* $(,)?) => {
        $(
            impl BigIntDigit for $t {
                const SIZE_IN_BYTES: usize = size_of::<$t>();

                #[inline]
                fn from_le_bytes_with_fill(bytes: &[u8], fill: u8) -> Self {
                    let mut buf = [fill; size_of::<$t>()];
                    let n = bytes.len().min(buf.len());
                    buf[..n].copy_from_slice(&bytes[..n]);
                    <$t>::from_le_bytes(buf)
                }

                #[inline]
                fn extend_le_bytes(self, out: &mut Vec<u8>) {
                    out.extend_from_slice(&self.to_le_bytes());
                }
            }
        )*
    };
}

impl_bigint_digit!(u8, u16, u32, u64);

/// The digit type the runtime is built with.
#[cfg(not(feature = "digit32"))]
pub type DigitType = u64;

/// The digit type the runtime is built with.
#[cfg(feature = "digit32")]
pub type DigitType = u32;

/// Size of [`DigitType`] in bytes.
pub const DIGIT_SIZE_IN_BYTES: usize = <DigitType as BigIntDigit>::SIZE_IN_BYTES;

/// Size of [`DigitType`] in bits.
pub const DIGIT_SIZE_IN_BITS: usize = <DigitType as BigIntDigit>::SIZE_IN_BITS;
