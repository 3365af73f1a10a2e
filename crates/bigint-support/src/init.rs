//! Initialization of digit buffers from bytes or digits.

use crate::canonical::drop_extra_sign_bits;
use crate::digit::BigIntDigit;
use crate::digit_ref::{ImmutableBigIntRef, MutableBigIntRef};
use crate::error::BigIntError;
use crate::sign_ext::get_sign_ext_value;

/// Fills `dst` with the two's-complement value of `data` and canonicalizes it.
///
/// `data` is least-significant byte first. The value is interpreted within
/// the `dst.num_digits()` digits the caller provided: shorter inputs are
/// sign-extended, longer inputs are truncated to the low-order digits. The
/// digit count of `dst` is then lowered to the canonical count.
///
/// Truncation is silent and never fails; the status is always `Ok(())`.
/// Limits on the overall size of a big integer are the caller's concern (see
/// [`check_max_size_in_digits`](crate::check_max_size_in_digits)).
///
/// # Example
///
/// ```
/// use bigint_support::{init_with_bytes, MutableBigIntRef};
///
/// let mut storage = [0u64; 2];
/// let mut dst = MutableBigIntRef::new(&mut storage);
/// init_with_bytes(&mut dst, &[0x80]).unwrap();
/// assert_eq!(dst.digits(), &[0xffff_ffff_ffff_ff80]);
/// ```
pub fn init_with_bytes<D: BigIntDigit>(
    dst: &mut MutableBigIntRef<'_, D>,
    data: &[u8],
) -> Result<(), BigIntError> {
    let fill = data.last().map_or(0, |&top| get_sign_ext_value::<u8>(top));
    let fill_digit = get_sign_ext_value::<D>(fill);

    let mut chunks = data.chunks(D::SIZE_IN_BYTES);
    for digit in dst.digits_mut() {
        *digit = match chunks.next() {
            Some(chunk) => D::from_le_bytes_with_fill(chunk, fill),
            None => fill_digit,
        };
    }

    ensure_canonical_result(dst);
    Ok(())
}

/// Fills `dst` with the value of the digit sequence `src` and canonicalizes it.
///
/// Same widening and truncation rules as [`init_with_bytes`].
pub fn init_with_digits<D: BigIntDigit>(
    dst: &mut MutableBigIntRef<'_, D>,
    src: ImmutableBigIntRef<'_, D>,
) -> Result<(), BigIntError> {
    let fill_digit = src.sign_ext_digit();

    let mut src_digits = src.digits().iter();
    for digit in dst.digits_mut() {
        *digit = src_digits.next().copied().unwrap_or(fill_digit);
    }

    ensure_canonical_result(dst);
    Ok(())
}

/// Lowers the digit count of `dst` to its canonical count.
///
/// Retained digits are not modified.
pub fn ensure_canonical_result<D: BigIntDigit>(dst: &mut MutableBigIntRef<'_, D>) {
    let canonical_len = drop_extra_sign_bits(dst.digits()).len();
    dst.shrink_to(canonical_len);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill<D: BigIntDigit>(capacity: usize, data: &[u8]) -> Vec<D> {
        let mut storage = vec![D::max_value() - D::one(); capacity];
        let mut dst = MutableBigIntRef::new(&mut storage);
        assert_eq!(init_with_bytes(&mut dst, data), Ok(()));
        let n = dst.num_digits();
        storage.truncate(n);
        storage
    }

    #[test]
    fn test_zero() {
        for capacity in 0..4 {
            assert!(fill::<u64>(capacity, &[]).is_empty());
            assert!(fill::<u64>(capacity, &[0, 0, 0]).is_empty());
            assert!(fill::<u32>(capacity, &[0; 17]).is_empty());
        }
    }

    #[test]
    fn test_fits() {
        assert_eq!(fill::<u64>(1, &[0x01, 0x02]), vec![0x0201]);
        assert_eq!(fill::<u64>(3, &[0x01, 0x02]), vec![0x0201]);
        assert_eq!(fill::<u64>(2, &[0x80]), vec![0xffff_ffff_ffff_ff80]);
        assert_eq!(fill::<u32>(2, &[0x00, 0x00, 0x00, 0x80]), vec![0x8000_0000]);
        assert_eq!(
            fill::<u32>(2, &[0x00, 0x00, 0x00, 0x80, 0x00]),
            vec![0x8000_0000, 0]
        );
    }

    #[test]
    fn test_truncates() {
        // 0x0201 in one byte-wide digit keeps only 0x01.
        assert_eq!(fill::<u8>(1, &[0x01, 0x02]), vec![0x01]);
        // 0x7f80 narrowed to 8 bits is -128.
        assert_eq!(fill::<u8>(1, &[0x80, 0x7f]), vec![0x80]);
        // 0x01_00000000 narrowed to 32 bits is zero.
        assert!(fill::<u32>(1, &[0, 0, 0, 0, 1]).is_empty());
        // Truncated value is canonicalized further.
        assert_eq!(fill::<u16>(2, &[0xff, 0xff, 0xff, 0xff, 0x01]), vec![0xffff]);
    }

    #[test]
    fn test_zero_capacity() {
        let mut storage: [u64; 0] = [];
        let mut dst = MutableBigIntRef::new(&mut storage);
        assert_eq!(init_with_bytes(&mut dst, &[1, 2, 3]), Ok(()));
        assert_eq!(dst.num_digits(), 0);
    }

    #[test]
    fn test_init_with_digits() {
        let src = [0x8000_0000u32];
        let mut storage = [0u32; 3];
        let mut dst = MutableBigIntRef::new(&mut storage);
        init_with_digits(&mut dst, ImmutableBigIntRef::new(&src)).unwrap();
        assert_eq!(dst.digits(), &[0x8000_0000]);
        assert_eq!(storage, [0x8000_0000, u32::MAX, u32::MAX]);

        let src = [5u32, 0, 0, 7];
        let mut storage = [0u32; 2];
        let mut dst = MutableBigIntRef::new(&mut storage);
        init_with_digits(&mut dst, ImmutableBigIntRef::new(&src)).unwrap();
        assert_eq!(dst.digits(), &[5]);
    }

    #[test]
    fn test_ensure_canonical_result() {
        let mut storage = [3u64, 0, 0];
        let mut dst = MutableBigIntRef::new(&mut storage);
        ensure_canonical_result(&mut dst);
        assert_eq!(dst.digits(), &[3]);
        ensure_canonical_result(&mut dst);
        assert_eq!(dst.digits(), &[3]);
    }
}
