//! Value comparison of two's-complement byte sequences.

use bigint_support::get_sign_ext_value;

/// Returns true if `a` and `b` encode the same two's-complement value.
///
/// The sequences may differ in length; the shorter one is compared as if
/// sign-extended.
///
/// # Example
///
/// ```
/// use bigint_buffers::eq_twos_complement;
///
/// assert!(eq_twos_complement(&[0x7f], &[0x7f, 0x00, 0x00]));
/// assert!(eq_twos_complement(&[0xff], &[0xff, 0xff]));
/// assert!(eq_twos_complement(&[], &[0x00]));
/// assert!(!eq_twos_complement(&[0x80], &[0x80, 0x00]));
/// ```
pub fn eq_twos_complement(a: &[u8], b: &[u8]) -> bool {
    let fill_a = a.last().map_or(0, |&top| get_sign_ext_value::<u8>(top));
    let fill_b = b.last().map_or(0, |&top| get_sign_ext_value::<u8>(top));
    let len = a.len().max(b.len());
    (0..len).all(|i| {
        let x = a.get(i).copied().unwrap_or(fill_a);
        let y = b.get(i).copied().unwrap_or(fill_b);
        x == y
    })
}
