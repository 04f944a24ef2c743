//! # docfetch
//!
//! Recovers documentation text that a web application ships inside its
//! JavaScript bundle as `JSON.parse('{"content":"<lz-string base64>"}')`.
//!
//! The pipeline is strictly linear: fetch the bundle, extract the payload
//! literal, parse it, decompress its `content` field and emit the text.
//! Nothing reaches the output writer until every step has succeeded.

pub mod config;
pub mod errors;
pub mod extract;
pub mod fetch;
pub mod lzstring;
pub mod output;

pub use config::FetchConfig;
pub use errors::{DecompressError, DocFetchError, ErrorKind};
pub use extract::{extract_payload, EmbeddedPayload};
pub use fetch::{DocumentFetcher, RemoteDocument};
pub use lzstring::decompress_from_base64;

use std::io::Write;
use tracing::info;

/// Decodes an already-fetched document into the bytes that should be
/// emitted, including the trailing newline.
pub fn decode_document(document: &str) -> Result<Vec<u8>, DocFetchError> {
    let raw = extract_payload(document)?;
    let payload = EmbeddedPayload::from_json(raw)?;
    let units = decompress_from_base64(&payload.content)?;
    info!(
        compressed_len = payload.content.len(),
        decoded_units = units.len(),
        "Decompressed embedded content"
    );
    Ok(output::render(&units))
}

/// Fetches `url`, decodes its embedded documentation and writes it to `out`.
///
/// `out` is untouched unless the whole pipeline succeeds.
pub async fn fetch_and_decode<W: Write>(
    url: &str,
    config: &FetchConfig,
    out: &mut W,
) -> Result<(), DocFetchError> {
    let fetcher = DocumentFetcher::new(config)?;
    let document = fetcher.fetch(url).await?;
    let bytes = decode_document(&document.body)?;
    output::emit(out, &bytes)?;
    Ok(())
}
