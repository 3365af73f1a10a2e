//! Debug utilities for printing bytes and digits as hex strings.

use bigint_support::BigIntDigit;

/// Formats a byte slice as a hex string for debugging.
///
/// At most `max` bytes are shown, in the order given.
///
/// # Example
///
/// ```
/// use bigint_buffers::print_octets;
///
/// assert_eq!(print_octets(&[0x01, 0x02, 0x0a, 0xff], 16), "01 02 0a ff");
/// assert_eq!(print_octets(&[], 16), "");
/// ```
pub fn print_octets(octets: &[u8], max: usize) -> String {
    let mut result = String::new();
    for (i, byte) in octets.iter().take(max).enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push_str(&format!("{:02x}", byte));
    }

    if octets.len() > max {
        result.push_str(&format!("... ({} more)", octets.len() - max));
    }

    result
}

/// Formats a digit sequence most-significant digit first, each digit as
/// zero-padded hex.
///
/// # Example
///
/// ```
/// use bigint_buffers::print_digits;
///
/// assert_eq!(print_digits(&[0x0201u32, 0xffff_ffff]), "ffffffff 00000201");
/// assert_eq!(print_digits::<u64>(&[]), "");
/// ```
pub fn print_digits<D: BigIntDigit>(digits: &[D]) -> String {
    let mut bytes = Vec::with_capacity(D::SIZE_IN_BYTES);
    digits
        .iter()
        .rev()
        .map(|&d| {
            bytes.clear();
            d.extend_le_bytes(&mut bytes);
            bytes.iter().rev().map(|b| format!("{:02x}", b)).collect::<String>()
        })
        .collect::<Vec<_>>()
        .join(" ")
}
