use tracing::debug;

use crate::digit::Digit;
use crate::error::{Error, Result};
use crate::{B85_CHARS, BYTES_PER_CHUNK, CHARS_PER_CHUNK};

const fn generate_decode_lut(alphabet: &[u8; 85]) -> [Option<Digit>; 256] {
    let mut lut: [Option<Digit>; 256] = [None; 256];
    let mut i = 0u8;
    while i < 85 {
        let char_code = alphabet[i as usize] as usize;
        assert!(lut[char_code].is_none(), "duplicate character in alphabet");
        lut[char_code] = Digit::new(i);
        i += 1;
    }
    lut
}

const B85_LUT: [Option<Digit>; 256] = generate_decode_lut(B85_CHARS);

#[inline(always)]
pub fn char_to_digit(value: u8) -> Option<Digit> {
    B85_LUT[value as usize]
}

/// Returns the decoded length of `char_len` input characters.
pub fn decoded_len(char_len: usize) -> Result<usize> {
    if char_len % CHARS_PER_CHUNK != 0 {
        debug!(len = char_len, "rejecting unaligned decode input");
        return Err(Error::InvalidLength { len: char_len, chunk: CHARS_PER_CHUNK });
    }
    Ok(char_len / CHARS_PER_CHUNK * BYTES_PER_CHUNK)
}

/// Decodes one group into its big-endian bytes. `offset` is the position of
/// the group in the whole input and is only used for error reporting.
pub fn decode_chunk(chunk: &[u8; 5], offset: usize) -> Result<[u8; 4]> {
    let mut acc = 0u32;
    for (i, &c) in chunk.iter().enumerate() {
        let digit = char_to_digit(c).ok_or_else(|| {
            debug!(position = offset + i, byte = c, "invalid base85 character");
            Error::InvalidCharacter { position: offset + i, byte: c }
        })?;
        acc = acc
            .checked_mul(85)
            .and_then(|a| a.checked_add(u32::from(digit)))
            .ok_or_else(|| {
                debug!(position = offset, "base85 group overflows u32");
                Error::Overflow { position: offset }
            })?;
    }
    Ok(acc.to_be_bytes())
}

fn group(src_chunk: &[u8]) -> [u8; 5] {
    let mut group = [0u8; 5];
    group.copy_from_slice(src_chunk);
    group
}

/// Decodes `src` into `dst`, returning the number of bytes written.
///
/// On error the contents of `dst` are unspecified.
pub fn b85dec(src: &[u8], dst: &mut [u8]) -> Result<usize> {
    let needed = decoded_len(src.len())?;
    if dst.len() < needed {
        return Err(Error::BufferTooSmall { needed, available: dst.len() });
    }

    for (i, (src_chunk, dst_chunk)) in src
        .chunks_exact(CHARS_PER_CHUNK)
        .zip(dst.chunks_exact_mut(BYTES_PER_CHUNK))
        .enumerate()
    {
        dst_chunk.copy_from_slice(&decode_chunk(&group(src_chunk), i * CHARS_PER_CHUNK)?);
    }
    Ok(needed)
}

/// Decodes `src` into a new buffer.
pub fn decode<T: AsRef<[u8]>>(src: T) -> Result<Vec<u8>> {
    let src = src.as_ref();
    let mut out = Vec::with_capacity(decoded_len(src.len())?);
    for (i, src_chunk) in src.chunks_exact(CHARS_PER_CHUNK).enumerate() {
        out.extend_from_slice(&decode_chunk(&group(src_chunk), i * CHARS_PER_CHUNK)?);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expected_from_char(src: u8) -> Option<u8> {
        B85_CHARS.iter().position(|&c| c == src).map(|i| i as u8)
    }

    #[test]
    fn test_char_to_digit_scalar() {
        for value in 0..=255u8 {
            let expected = expected_from_char(value);
            let actual = char_to_digit(value).map(u8::from);
            assert_eq!(actual, expected, "char_to_digit mismatch for value {} ({})", value, value as char);
        }
    }

    #[test]
    fn test_b85dec_empty() {
        let mut dst = [0u8; 0];
        assert_eq!(b85dec(b"", &mut dst), Ok(0));
        assert_eq!(decode("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_b85dec_known() {
        let mut dst = [0u8; 4];
        assert_eq!(b85dec(b"!!!!#", &mut dst), Ok(4));
        assert_eq!(dst, [0x00, 0x00, 0x00, 0x01]);
        assert_eq!(decode("x<[0!").unwrap(), [0xFF; 4]);
    }

    #[test]
    fn test_b85dec_dst_too_small() {
        let mut dst = [0u8; 7];
        assert_eq!(
            b85dec(b"!!!!!!!!!!", &mut dst),
            Err(Error::BufferTooSmall { needed: 8, available: 7 })
        );
    }

    #[test]
    fn test_b85dec_non_multiple_of_5() {
        assert_eq!(decode("abcd"), Err(Error::InvalidLength { len: 4, chunk: 5 }));
        assert_eq!(decode("abcdef"), Err(Error::InvalidLength { len: 6, chunk: 5 }));
        let mut dst = [0u8; 8];
        assert_eq!(
            b85dec(b"!!!!!!", &mut dst),
            Err(Error::InvalidLength { len: 6, chunk: 5 })
        );
    }

    #[test]
    fn test_b85dec_length_checked_before_characters() {
        assert_eq!(decode("&&&&&&"), Err(Error::InvalidLength { len: 6, chunk: 5 }));
        assert_eq!(decode("&&&&"), Err(Error::InvalidLength { len: 4, chunk: 5 }));
        let mut dst = [0u8; 8];
        assert_eq!(
            b85dec(b"&&&&&&", &mut dst),
            Err(Error::InvalidLength { len: 6, chunk: 5 })
        );
        // the length check also precedes the destination size check
        let mut dst = [0u8; 0];
        assert_eq!(
            b85dec(b"      ", &mut dst),
            Err(Error::InvalidLength { len: 6, chunk: 5 })
        );
    }

    #[test]
    fn test_b85dec_non_ascii_and_trailing_bad_char() {
        // 'é' is two UTF-8 bytes; the first one is reported
        assert_eq!(
            decode("!!!é"),
            Err(Error::InvalidCharacter { position: 3, byte: 0xC3 })
        );
        assert_eq!(
            decode("zzzz&"),
            Err(Error::InvalidCharacter { position: 4, byte: b'&' })
        );
    }

    #[test]
    fn test_b85dec_invalid_character() {
        assert_eq!(
            decode("!!!!! !!!!"),
            Err(Error::InvalidCharacter { position: 5, byte: b' ' })
        );
        assert_eq!(
            decode("!!\"!!"),
            Err(Error::InvalidCharacter { position: 2, byte: b'"' })
        );
        assert_eq!(
            decode("!!!!,"),
            Err(Error::InvalidCharacter { position: 4, byte: b',' })
        );
        assert_eq!(
            decode([b'!', b'!', b'!', b'!', 0xFF]),
            Err(Error::InvalidCharacter { position: 4, byte: 0xFF })
        );
    }

    #[test]
    fn test_b85dec_first_error_wins() {
        // the bad character precedes the group that would overflow
        assert_eq!(
            decode("!!&!!zzzzz"),
            Err(Error::InvalidCharacter { position: 2, byte: b'&' })
        );
    }

    #[test]
    fn test_b85dec_overflow() {
        // "x<[0!" is u32::MAX; one more overflows
        assert_eq!(decode("x<[0#"), Err(Error::Overflow { position: 0 }));
        assert_eq!(decode("!!!!!zzzzz"), Err(Error::Overflow { position: 5 }));
        assert_eq!(decode("y!!!!"), Err(Error::Overflow { position: 0 }));
    }

    #[test]
    fn test_b85dec_max_group() {
        assert_eq!(decode_chunk(b"x<[0!", 0), Ok([0xFF; 4]));
    }
}
