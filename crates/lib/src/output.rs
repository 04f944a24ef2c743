//! # Output Encoding
//!
//! Turns decompressed UTF-16 code units into the bytes written to stdout.
//! Unpaired surrogates are not rejected: they are encoded with the same
//! 3-byte pattern UTF-8 uses for other BMP code points (WTF-8).

use std::io::Write;

/// Encodes UTF-16 code units as UTF-8, passing lone surrogates through.
pub fn encode_wtf8(units: &[u16]) -> Vec<u8> {
    let mut out = Vec::with_capacity(units.len());
    for decoded in char::decode_utf16(units.iter().copied()) {
        match decoded {
            Ok(ch) => {
                let mut buf = [0u8; 4];
                out.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
            }
            Err(e) => {
                let unit = e.unpaired_surrogate();
                out.extend_from_slice(&[
                    0xE0 | (unit >> 12) as u8,
                    0x80 | ((unit >> 6) & 0x3F) as u8,
                    0x80 | (unit & 0x3F) as u8,
                ]);
            }
        }
    }
    out
}

/// Renders decoded text for emission: encoded bytes with exactly one
/// trailing newline guaranteed.
pub fn render(units: &[u16]) -> Vec<u8> {
    let mut bytes = encode_wtf8(units);
    if bytes.last() != Some(&b'\n') {
        bytes.push(b'\n');
    }
    bytes
}

/// Writes rendered output in a single call and flushes.
pub fn emit<W: Write>(writer: &mut W, bytes: &[u8]) -> std::io::Result<()> {
    writer.write_all(bytes)?;
    writer.flush()
}
