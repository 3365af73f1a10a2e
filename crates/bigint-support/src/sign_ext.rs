//! Sign-extension fill values.

use num_traits::PrimInt;

/// Returns the value of `T` obtained by sign-extending `byte`.
///
/// That is zero when the byte's top bit is clear, and all-ones (`-1` for
/// signed types, `MAX` for unsigned ones) when it is set.
///
/// # Example
///
/// ```
/// use bigint_support::get_sign_ext_value;
///
/// assert_eq!(get_sign_ext_value::<u8>(0x00), 0);
/// assert_eq!(get_sign_ext_value::<u8>(0x80), 0xff);
/// assert_eq!(get_sign_ext_value::<i64>(0x80), -1);
/// assert_eq!(get_sign_ext_value::<u32>(0x7f), 0);
/// ```
#[inline]
pub fn get_sign_ext_value<T: PrimInt>(byte: u8) -> T {
    if byte & 0x80 == 0 {
        T::zero()
    } else {
        !T::zero()
    }
}

/// Returns the fill word implied by the top bit of `value` itself.
///
/// For `u8` this agrees with [`get_sign_ext_value`]; for wider types it is
/// the fill to use above the most significant digit of a sequence.
#[inline]
pub fn sign_ext_of_element<T: PrimInt>(value: T) -> T {
    if value.leading_zeros() == 0 {
        !T::zero()
    } else {
        T::zero()
    }
}
