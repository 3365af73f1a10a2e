//! Removal of redundant sign-extension elements.

use num_traits::PrimInt;

use crate::sign_ext::sign_ext_of_element;

/// Returns the shortest low-end prefix of `src` with the same
/// two's-complement value.
///
/// `src` is least-significant element first. Works on bytes as well as on
/// digit sequences. Zero (including the empty sequence) becomes empty.
///
/// # Example
///
/// ```
/// use bigint_support::drop_extra_sign_bits;
///
/// assert_eq!(drop_extra_sign_bits::<u8>(&[0, 0, 0]), &[] as &[u8]);
/// assert_eq!(drop_extra_sign_bits::<u8>(&[0x7f, 0, 0, 0, 0]), &[0x7f]);
/// assert_eq!(drop_extra_sign_bits::<u8>(&[0xff, 0xff, 0xff, 0xff]), &[0xff]);
/// assert_eq!(drop_extra_sign_bits::<u8>(&[0x80, 0x00]), &[0x80, 0x00]);
/// ```
pub fn drop_extra_sign_bits<T: PrimInt>(src: &[T]) -> &[T] {
    let Some(&top) = src.last() else {
        return src;
    };
    let fill = sign_ext_of_element(top);

    let mut len = src.len();
    while len > 0 && src[len - 1] == fill {
        len -= 1;
    }

    // One fill element stays when the new top element would flip the sign.
    let needs_sign_element = match len.checked_sub(1) {
        Some(i) => sign_ext_of_element(src[i]) != fill,
        None => fill != T::zero(),
    };
    if needs_sign_element {
        len += 1;
    }

    &src[..len]
}

/// Returns true if `src` has no redundant sign-extension elements.
#[inline]
pub fn is_canonical<T: PrimInt>(src: &[T]) -> bool {
    drop_extra_sign_bits(src).len() == src.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_zero() {
        assert!(drop_extra_sign_bits::<u8>(&[]).is_empty());
        for n in 1..6 {
            assert!(drop_extra_sign_bits(&vec![0u8; n]).is_empty(), "{n}");
        }
    }

    #[test]
    fn test_single_elements_are_kept() {
        for b in 1..=u8::MAX {
            assert_eq!(drop_extra_sign_bits(&[b]), &[b]);
        }
    }

    #[test]
    fn test_positive() {
        assert_eq!(drop_extra_sign_bits::<u8>(&[0x7f, 0, 0, 0, 0]), &[0x7f]);
        assert_eq!(
            drop_extra_sign_bits::<u8>(&[
                0x00, 0x01, 0x02, 0x03, 0x03, 0x00, 0x00, 0x00, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00
            ]),
            &[0x00, 0x01, 0x02, 0x03, 0x03, 0x00, 0x00, 0x00, 0x02]
        );
        assert_eq!(
            drop_extra_sign_bits::<u8>(&[0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x7f]),
            &[0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x7f]
        );
        assert_eq!(drop_extra_sign_bits::<u8>(&[0x80, 0x00, 0x00]), &[0x80, 0x00]);
    }

    #[test]
    fn test_negative() {
        assert_eq!(
            drop_extra_sign_bits::<u8>(&[0xff, 0xff, 0xff, 0xff, 0xff]),
            &[0xff]
        );
        assert_eq!(
            drop_extra_sign_bits::<u8>(&[
                0x80, 0x81, 0x82, 0x83, 0x89, 0x00, 0x00, 0x00, 0x8a, 0xff, 0xff, 0xff, 0xff, 0xff
            ]),
            &[0x80, 0x81, 0x82, 0x83, 0x89, 0x00, 0x00, 0x00, 0x8a]
        );
        assert_eq!(drop_extra_sign_bits::<u8>(&[0x7f, 0xff, 0xff]), &[0x7f, 0xff]);

        let mut src = vec![0x00u8; 12];
        src.push(0x80);
        assert_eq!(drop_extra_sign_bits(&src), src.as_slice());
    }

    #[test]
    fn test_digits() {
        assert!(drop_extra_sign_bits::<u64>(&[0, 0]).is_empty());
        assert_eq!(drop_extra_sign_bits::<u64>(&[u64::MAX, u64::MAX]), &[u64::MAX]);
        assert_eq!(drop_extra_sign_bits::<u64>(&[1 << 63, u64::MAX]), &[1 << 63]);
        assert_eq!(drop_extra_sign_bits::<u64>(&[1 << 63, 0]), &[1 << 63, 0]);
        assert_eq!(drop_extra_sign_bits::<u32>(&[5, 0, 0, 0]), &[5]);
    }

    #[test]
    fn test_idempotent() {
        let cases: [&[u8]; 5] = [
            &[],
            &[0x80, 0x00, 0x00],
            &[0x7f, 0xff, 0xff, 0xff],
            &[0x01, 0x00],
            &[0xff, 0x80, 0xff],
        ];
        for case in cases {
            let once = drop_extra_sign_bits(case);
            assert_eq!(drop_extra_sign_bits(once), once);
            assert!(is_canonical(once));
        }
    }

    #[test]
    fn test_is_canonical() {
        assert!(is_canonical::<u8>(&[]));
        assert!(!is_canonical::<u8>(&[0]));
        assert!(is_canonical::<u8>(&[0x80, 0x00]));
        assert!(!is_canonical::<u8>(&[0x80, 0xff]));
    }
}
