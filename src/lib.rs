//! Base-85 binary-to-text codec.
//!
//! Every 4-byte group is read as a big-endian `u32` and written as five
//! digits from a fixed 85-character alphabet, most significant first.
//! Input lengths must be a whole number of groups; there is no padding.
//!
//! ```
//! assert_eq!(base85::encode(&[0, 0, 0, 1]).unwrap(), "!!!!#");
//! assert_eq!(base85::decode("!!!!#").unwrap(), [0, 0, 0, 1]);
//! ```

mod dec;
mod digit;
mod enc;
mod error;

pub use crate::digit::Digit;
pub use crate::error::{Error, Result};

pub use crate::enc::{b85enc, digit_to_char, encode, encode_chunk, encoded_len};
pub use crate::dec::{b85dec, char_to_digit, decode, decode_chunk, decoded_len};

pub const BYTES_PER_CHUNK: usize = 4;
pub const CHARS_PER_CHUNK: usize = 5;

/// The alphabet, indexed by digit value. Printable ASCII from `!` to `z`
/// without `"`, `&`, `,`, `;` and `\`.
pub const B85_CHARS: &[u8; 85] =
    b"!#$%'()*+-./0123456789:<=>?@ABCDEFGHIJKLMNOPQRSTUVWXYZ[]^_`abcdefghijklmnopqrstuvwxyz";
