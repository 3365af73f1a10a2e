//! Digit encoding primitives for arbitrary-precision integers.
//!
//! A big integer is stored as a sequence of fixed-width unsigned digits,
//! least-significant digit first, read as one two's-complement number. This
//! crate provides the pieces every higher-level operation builds on:
//!
//! - [`num_digits_for_size_in_bytes`] / [`num_digits_for_size_in_bits`] - how
//!   many digits a buffer needs
//! - [`get_sign_ext_value`] - the fill word for growing a value
//! - [`drop_extra_sign_bits`] - the canonical (shortest) form of a sequence
//! - [`init_with_bytes`] - fill a caller-provided digit buffer from bytes
//!
//! Canonical sequences are unique per value, and zero is the empty sequence,
//! so equality of canonical values is plain slice equality.
//!
//! # Example
//!
//! ```
//! use bigint_support::{init_with_bytes, num_digits_for_size_in_bytes, MutableBigIntRef};
//!
//! let bytes = [0x01, 0x02, 0x00, 0x00];
//! let mut storage = vec![0u64; num_digits_for_size_in_bytes::<u64>(bytes.len())];
//! let mut dst = MutableBigIntRef::new(&mut storage);
//! init_with_bytes(&mut dst, &bytes).unwrap();
//! assert_eq!(dst.digits(), &[0x0201]);
//! ```

mod canonical;
mod digit;
mod digit_ref;
mod error;
mod init;
mod sign_ext;
mod sizing;

pub use canonical::{drop_extra_sign_bits, is_canonical};
pub use digit::{BigIntDigit, DigitType, DIGIT_SIZE_IN_BITS, DIGIT_SIZE_IN_BYTES};
pub use digit_ref::{ImmutableBigIntRef, MutableBigIntRef};
pub use error::BigIntError;
pub use init::{ensure_canonical_result, init_with_bytes, init_with_digits};
pub use sign_ext::{get_sign_ext_value, sign_ext_of_element};
pub use sizing::{
    check_max_size_in_digits, max_size_in_digits, num_digits_for_size_in_bits,
    num_digits_for_size_in_bytes, BIGINT_MAX_SIZE_IN_BITS,
};
