//! Copies between digit sequences and two's-complement byte sequences.

use bigint_support::{get_sign_ext_value, BigIntDigit};

/// Returns the little-endian byte image of a digit sequence.
///
/// # Example
///
/// ```
/// use bigint_buffers::digits_to_le_bytes;
///
/// assert_eq!(digits_to_le_bytes(&[0x0201u16, 0xff80]), vec![0x01, 0x02, 0x80, 0xff]);
/// ```
pub fn digits_to_le_bytes<D: BigIntDigit>(digits: &[D]) -> Vec<u8> {
    let mut out = Vec::with_capacity(digits.len() * D::SIZE_IN_BYTES);
    for &digit in digits {
        digit.extend_le_bytes(&mut out);
    }
    out
}

/// Copies `bytes` into a sequence of exactly `len` bytes.
///
/// Shorter inputs are sign-extended with the fill of their top byte, longer
/// inputs keep their `len` low-order bytes.
///
/// # Example
///
/// ```
/// use bigint_buffers::resize_twos_complement;
///
/// assert_eq!(resize_twos_complement(&[0x80], 3), vec![0x80, 0xff, 0xff]);
/// assert_eq!(resize_twos_complement(&[0x01, 0x02, 0x03], 2), vec![0x01, 0x02]);
/// assert_eq!(resize_twos_complement(&[], 2), vec![0x00, 0x00]);
/// ```
pub fn resize_twos_complement(bytes: &[u8], len: usize) -> Vec<u8> {
    let fill = bytes.last().map_or(0, |&top| get_sign_ext_value::<u8>(top));
    let mut out = Vec::with_capacity(len);
    out.extend_from_slice(&bytes[..bytes.len().min(len)]);
    out.resize(len, fill);
    out
}
