//! # lz-string Base64 Decompression
//!
//! Expands strings produced by lz-string's `compressToBase64`. The stream is a
//! sequence of variable-width codes packed 6 bits per Base64 character. Codes
//! 0 and 1 introduce a literal 8-bit or 16-bit code unit, code 2 ends the
//! stream, and anything else indexes the dictionary built so far.
//!
//! Output is kept as UTF-16 code units so that unpaired surrogates in the
//! source survive decompression untouched.

use crate::errors::DecompressError;

const LITERAL_8: usize = 0;
const LITERAL_16: usize = 1;
const END_OF_STREAM: usize = 2;

/// Width of the window used when draining one Base64 character.
const RESET_VALUE: u32 = 32;

/// Maps a Base64 character to its 6-bit value. Padding reads as zero bits.
fn base64_value(ch: char) -> Option<u32> {
    match ch {
        'A'..='Z' => Some(ch as u32 - 'A' as u32),
        'a'..='z' => Some(ch as u32 - 'a' as u32 + 26),
        '0'..='9' => Some(ch as u32 - '0' as u32 + 52),
        '+' => Some(62),
        '/' => Some(63),
        '=' => Some(0),
        _ => None,
    }
}

/// Reads little-endian bit groups out of a Base64 string.
struct BitReader {
    symbols: Vec<char>,
    index: usize,
    value: u32,
    position: u32,
}

impl BitReader {
    fn new(input: &str) -> Self {
        Self {
            symbols: input.chars().collect(),
            index: 0,
            value: 0,
            position: 0,
        }
    }

    /// Loads the next character lazily so trailing characters are only
    /// validated when their bits are actually needed.
    fn refill(&mut self) -> Result<(), DecompressError> {
        let ch = *self
            .symbols
            .get(self.index)
            .ok_or(DecompressError::UnexpectedEnd)?;
        self.value = base64_value(ch).ok_or(DecompressError::InvalidCharacter {
            ch,
            position: self.index,
        })?;
        self.index += 1;
        self.position = RESET_VALUE;
        Ok(())
    }

    fn read_bits(&mut self, count: u32) -> Result<usize, DecompressError> {
        let mut bits = 0usize;
        for power in 0..count {
            if self.position == 0 {
                self.refill()?;
            }
            if self.value & self.position != 0 {
                bits |= 1 << power;
            }
            self.position >>= 1;
        }
        Ok(bits)
    }
}

/// Decompresses an lz-string `compressToBase64` payload into UTF-16 code units.
pub fn decompress_from_base64(input: &str) -> Result<Vec<u16>, DecompressError> {
    if input.is_empty() {
        return Err(DecompressError::Empty);
    }
    let mut reader = BitReader::new(input);

    // Codes 0..=2 are reserved; their slots are never read.
    let mut dictionary: Vec<Vec<u16>> = vec![Vec::new(); 3];
    let mut enlarge_in: usize = 4;
    let mut num_bits: u32 = 3;

    let first = match reader.read_bits(2)? {
        LITERAL_8 => reader.read_bits(8)? as u16,
        LITERAL_16 => reader.read_bits(16)? as u16,
        END_OF_STREAM => return Ok(Vec::new()),
        other => return Err(DecompressError::BadReference(other)),
    };
    dictionary.push(vec![first]);
    let mut previous = vec![first];
    let mut result = vec![first];

    loop {
        let mut code = reader.read_bits(num_bits)?;
        match code {
            LITERAL_8 | LITERAL_16 => {
                let width = if code == LITERAL_8 { 8 } else { 16 };
                let unit = reader.read_bits(width)? as u16;
                dictionary.push(vec![unit]);
                code = dictionary.len() - 1;
                enlarge_in -= 1;
            }
            END_OF_STREAM => return Ok(result),
            _ => {}
        }

        if enlarge_in == 0 {
            enlarge_in = 1 << num_bits;
            num_bits += 1;
        }

        let entry = if code < dictionary.len() {
            dictionary[code].clone()
        } else if code == dictionary.len() {
            // The code being defined right now: previous + previous[0].
            let mut entry = previous.clone();
            entry.push(previous[0]);
            entry
        } else {
            return Err(DecompressError::BadReference(code));
        };
        result.extend_from_slice(&entry);

        let mut next = previous;
        next.push(entry[0]);
        dictionary.push(next);
        enlarge_in -= 1;
        previous = entry;

        if enlarge_in == 0 {
            enlarge_in = 1 << num_bits;
            num_bits += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decompress_to_string(input: &str) -> String {
        String::from_utf16(&decompress_from_base64(input).unwrap()).unwrap()
    }

    #[test]
    fn test_decompresses_hello() {
        assert_eq!(decompress_to_string("BYUwNmD2Q==="), "hello");
    }

    #[test]
    fn test_decompresses_reference_vectors() {
        let vectors = [
            ("BYUwNmD2BQQ=", "hello\n"),
            ("IZA=", "a"),
            ("IY18ZJA=", "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaa"),
            (
                "MQAgKglgLgNgpgKAQZQPYFs4gFQBNUDGAztiABZwBOcAdAkA",
                "# Title\n\nSome *docs* here.\n",
            ),
            ("BYS4NmD2AEDuBvAnMATahkciA===", "héllo wörld ✓"),
            (
                "IYI17SIAgFwexAU3gJwHb1g5acoyyA==",
                "abababababababab tobeornottobeortobeornot",
            ),
            ("N4Igxg9gdgLgprEAuEAPEBfIA===", r#"{"content":"x"}"#),
        ];
        for (compressed, expected) in vectors {
            assert_eq!(
                decompress_to_string(compressed),
                expected,
                "vector {compressed:?}"
            );
        }
    }

    #[test]
    fn test_empty_string_marker_decompresses_to_nothing() {
        assert_eq!(decompress_from_base64("Q===").unwrap(), Vec::<u16>::new());
    }

    #[test]
    fn test_lone_surrogate_survives() {
        assert_eq!(decompress_from_base64("gAbA8g==").unwrap(), vec![0xD800, 0x78]);
    }

    #[test]
    fn test_decompression_is_deterministic() {
        let input = "MQAgKglgLgNgpgKAQZQPYFs4gFQBNUDGAztiABZwBOcAdAkA";
        assert_eq!(
            decompress_from_base64(input).unwrap(),
            decompress_from_base64(input).unwrap()
        );
    }

    #[test]
    fn test_empty_input_is_rejected() {
        assert_eq!(decompress_from_base64(""), Err(DecompressError::Empty));
    }

    #[test]
    fn test_invalid_character_is_reported_with_position() {
        assert_eq!(
            decompress_from_base64("BY!wNmD2Q==="),
            Err(DecompressError::InvalidCharacter {
                ch: '!',
                position: 2
            })
        );
    }

    #[test]
    fn test_truncated_input_is_rejected() {
        assert_eq!(
            decompress_from_base64("BYUw"),
            Err(DecompressError::UnexpectedEnd)
        );
    }
}
