//! Borrowed views over big integer digit storage.

use crate::canonical::{drop_extra_sign_bits, is_canonical};
use crate::digit::BigIntDigit;
use crate::sign_ext::sign_ext_of_element;

/// A read-only view of a digit sequence, least-significant digit first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImmutableBigIntRef<'a, D> {
    digits: &'a [D],
}

impl<'a, D: BigIntDigit> ImmutableBigIntRef<'a, D> {
    pub fn new(digits: &'a [D]) -> Self {
        Self { digits }
    }

    pub fn digits(&self) -> &'a [D] {
        self.digits
    }

    pub fn num_digits(&self) -> usize {
        self.digits.len()
    }

    /// Returns true if the view has no digits.
    ///
    /// A non-canonical zero such as `[0]` is not empty; use
    /// [`canonical`](Self::canonical) first to test for zero.
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    pub fn is_negative(&self) -> bool {
        self.digits
            .last()
            .is_some_and(|&top| sign_ext_of_element(top) != D::zero())
    }

    pub fn is_canonical(&self) -> bool {
        is_canonical(self.digits)
    }

    /// The digit that extends this value to any wider width.
    pub fn sign_ext_digit(&self) -> D {
        self.digits
            .last()
            .map_or(D::zero(), |&top| sign_ext_of_element(top))
    }

    /// Returns the same value with redundant high digits removed.
    pub fn canonical(&self) -> ImmutableBigIntRef<'a, D> {
        Self::new(drop_extra_sign_bits(self.digits))
    }
}

/// A writable view of caller-owned digit storage.
///
/// The view starts with `num_digits` equal to the storage length (its
/// capacity). Initialization may shrink `num_digits`; it never grows past the
/// capacity. Digits between `num_digits` and the capacity hold unspecified
/// values and are not exposed.
#[derive(Debug)]
pub struct MutableBigIntRef<'a, D> {
    digits: &'a mut [D],
    num_digits: usize,
}

impl<'a, D: BigIntDigit> MutableBigIntRef<'a, D> {
    /// Creates a view whose capacity and digit count are `digits.len()`.
    pub fn new(digits: &'a mut [D]) -> Self {
        let num_digits = digits.len();
        Self { digits, num_digits }
    }

    /// Creates a view over the first `num_digits` digits of `digits`.
    ///
    /// `num_digits` is clamped to the storage length.
    pub fn with_num_digits(digits: &'a mut [D], num_digits: usize) -> Self {
        let num_digits = num_digits.min(digits.len());
        Self { digits, num_digits }
    }

    pub fn num_digits(&self) -> usize {
        self.num_digits
    }

    pub fn capacity(&self) -> usize {
        self.digits.len()
    }

    /// The live digits, `num_digits` long.
    pub fn digits(&self) -> &[D] {
        &self.digits[..self.num_digits]
    }

    pub fn digits_mut(&mut self) -> &mut [D] {
        &mut self.digits[..self.num_digits]
    }

    pub fn as_immutable(&self) -> ImmutableBigIntRef<'_, D> {
        ImmutableBigIntRef::new(self.digits())
    }

    /// Lowers the digit count. Requests above the current count are ignored.
    pub fn shrink_to(&mut self, num_digits: usize) {
        self.num_digits = self.num_digits.min(num_digits);
    }
}
