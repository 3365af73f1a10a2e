//! Byte vectors written most-significant byte first.
//!
//! Digit buffers are least-significant first, which is awkward to read in
//! tests. [`LeftToRightVector`] lets expected values be written the way
//! numbers are normally written and compared against digit buffers directly.

use std::fmt;
use std::ops::Add;

use bigint_support::BigIntDigit;

use crate::copy::digits_to_le_bytes;
use crate::print_octets::print_octets;

/// A two's-complement byte sequence built from most-significant-first input.
///
/// `data` holds the bytes least-significant first, same as a digit buffer's
/// byte image. Concatenation with `+` puts the left operand in the more
/// significant position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeftToRightVector {
    pub data: Vec<u8>,
}

impl LeftToRightVector {
    /// Creates a vector from bytes given most-significant first.
    pub fn new(msb_first: &[u8]) -> Self {
        Self {
            data: msb_first.iter().rev().copied().collect(),
        }
    }

    /// Wraps bytes that are already least-significant first.
    pub fn from_le_bytes(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// The byte image of a digit sequence.
    pub fn from_digits<D: BigIntDigit>(digits: &[D]) -> Self {
        Self::from_le_bytes(digits_to_le_bytes(digits))
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl Add for LeftToRightVector {
    type Output = LeftToRightVector;

    fn add(self, rhs: LeftToRightVector) -> LeftToRightVector {
        let mut data = rhs.data;
        data.extend_from_slice(&self.data);
        LeftToRightVector { data }
    }
}

impl fmt::Display for LeftToRightVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msb_first: Vec<u8> = self.data.iter().rev().copied().collect();
        write!(f, "[{}]", print_octets(&msb_first, msb_first.len()))
    }
}

/// One digit's worth of bytes (or fewer), most-significant first.
///
/// # Example
///
/// ```
/// use bigint_buffers::digit;
///
/// let v = digit(&[0x01, 0x02]) + digit(&[0x03]);
/// assert_eq!(v.data, vec![0x03, 0x02, 0x01]);
/// ```
pub fn digit(msb_first: &[u8]) -> LeftToRightVector {
    LeftToRightVector::new(msb_first)
}

/// The byte image of a zero-digit buffer.
pub fn no_digits() -> LeftToRightVector {
    LeftToRightVector::default()
}
