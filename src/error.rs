use thiserror::Error;

/// An error encountered while encoding or decoding base-85 data.
///
/// Every error is local to the call that produced it; no output from a
/// failed call is valid.
#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input length was not a multiple of the chunk size (4 bytes for
    /// encoding, 5 characters for decoding).
    #[error("input length {len} is not a multiple of {chunk}")]
    InvalidLength { len: usize, chunk: usize },

    /// A byte outside the base-85 alphabet was found while decoding.
    #[error("invalid character {:?} (0x{byte:02x}) at offset {position}", as_char(.byte))]
    InvalidCharacter { position: usize, byte: u8 },

    /// A 5-character group starting at `position` decodes to a value that
    /// does not fit in 32 bits.
    #[error("group at offset {position} overflows 32 bits")]
    Overflow { position: usize },

    /// The destination buffer cannot hold the output.
    #[error("destination buffer too small: need {needed} bytes, have {available}")]
    BufferTooSmall { needed: usize, available: usize },
}

fn as_char(byte: &u8) -> char {
    char::from(*byte)
}

pub type Result<T> = std::result::Result<T, Error>;
