//! Byte-level helpers for big integer digit buffers.
//!
//! The digit encoding core in `bigint-support` works on digit slices. This
//! crate covers the byte side of that boundary:
//!
//! - [`digits_to_le_bytes`] - byte image of a digit sequence
//! - [`resize_twos_complement`] - sign-extend or truncate a byte sequence
//! - [`eq_twos_complement`] - value equality across lengths
//! - [`LeftToRightVector`], [`digit`], [`no_digits`] - most-significant-first
//!   vectors for writing expected values
//! - [`print_octets`], [`print_digits`] - hex formatting for debugging
//!
//! # Example
//!
//! ```
//! use bigint_buffers::{digit, LeftToRightVector};
//!
//! let digits = [0xffff_ffff_ffff_ff80u64];
//! assert_eq!(
//!     LeftToRightVector::from_digits(&digits),
//!     digit(&[0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x80])
//! );
//! ```

mod cmp;
mod copy;
mod left_to_right;
mod print_octets;

pub use cmp::eq_twos_complement;
pub use copy::{digits_to_le_bytes, resize_twos_complement};
pub use left_to_right::{digit, no_digits, LeftToRightVector};
pub use print_octets::{print_digits, print_octets};
