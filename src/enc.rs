use tracing::debug;

use crate::digit::Digit;
use crate::error::{Error, Result};
use crate::{B85_CHARS, BYTES_PER_CHUNK, CHARS_PER_CHUNK};

const P1: u32 = 85;
const P2: u32 = 85 * 85;
const P3: u32 = 85 * 85 * 85;
const P4: u32 = 85 * 85 * 85 * 85;

#[inline(always)]
pub fn digit_to_char(digit: Digit) -> u8 {
    B85_CHARS[u8::from(digit) as usize]
}

/// Returns the encoded length of `byte_len` input bytes.
pub fn encoded_len(byte_len: usize) -> Result<usize> {
    if byte_len % BYTES_PER_CHUNK != 0 {
        debug!(len = byte_len, "rejecting unaligned encode input");
        return Err(Error::InvalidLength { len: byte_len, chunk: BYTES_PER_CHUNK });
    }
    Ok(byte_len / BYTES_PER_CHUNK * CHARS_PER_CHUNK)
}

/// Encodes one group, reading it as a big-endian `u32`.
#[inline(always)]
pub fn encode_chunk(chunk: [u8; 4]) -> [u8; 5] {
    let value = u32::from_be_bytes(chunk);
    [
        digit_to_char(Digit::from_mod(value / P4)),
        digit_to_char(Digit::from_mod(value / P3)),
        digit_to_char(Digit::from_mod(value / P2)),
        digit_to_char(Digit::from_mod(value / P1)),
        digit_to_char(Digit::from_mod(value)),
    ]
}

/// Encodes `src` into `dst`, returning the number of bytes written.
pub fn b85enc(src: &[u8], dst: &mut [u8]) -> Result<usize> {
    let needed = encoded_len(src.len())?;
    if dst.len() < needed {
        return Err(Error::BufferTooSmall { needed, available: dst.len() });
    }

    for (src_chunk, dst_chunk) in src
        .chunks_exact(BYTES_PER_CHUNK)
        .zip(dst.chunks_exact_mut(CHARS_PER_CHUNK))
    {
        let mut group = [0u8; 4];
        group.copy_from_slice(src_chunk);
        dst_chunk.copy_from_slice(&encode_chunk(group));
    }
    Ok(needed)
}

/// Encodes `src` into a new string.
pub fn encode(src: &[u8]) -> Result<String> {
    let mut out = String::with_capacity(encoded_len(src.len())?);
    for src_chunk in src.chunks_exact(BYTES_PER_CHUNK) {
        let mut group = [0u8; 4];
        group.copy_from_slice(src_chunk);
        out.extend(encode_chunk(group).into_iter().map(char::from));
    }
    Ok(out)
}
