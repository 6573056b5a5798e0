//! Base64 conversion between text and its encoded form

use std::sync::LazyLock;

use data_encoding::{BASE64, BASE64_NOPAD, BASE64URL, BASE64URL_NOPAD, Encoding};

use crate::error::TransformError;

// Decoders ignore non-zero bits after the last full byte ("QR==" is "A"), as browsers do.
static STANDARD: LazyLock<Encoding> = LazyLock::new(|| relaxed(&BASE64));
static STANDARD_NOPAD: LazyLock<Encoding> = LazyLock::new(|| relaxed(&BASE64_NOPAD));
static URL_SAFE: LazyLock<Encoding> = LazyLock::new(|| relaxed(&BASE64URL));
static URL_SAFE_NOPAD: LazyLock<Encoding> = LazyLock::new(|| relaxed(&BASE64URL_NOPAD));

fn relaxed(encoding: &Encoding) -> Encoding {
    let mut spec = encoding.specification();
    spec.check_trailing_bits = false;
    spec.encoding()
        .expect("built-in Base64 specification stays valid without the trailing-bit check")
}

/// Decode standard-alphabet Base64 (padding optional) and interpret the bytes as UTF-8 text.
///
/// Leading and trailing ASCII whitespace is ignored. Anything else outside the alphabet, or
/// decoded bytes that are not UTF-8, yields [`TransformError::InvalidBase64`].
pub fn decode_base64(input: &str) -> Result<String, TransformError> {
    let encoded = input.trim_ascii().as_bytes();

    let bytes = STANDARD
        .decode(encoded)
        .or_else(|_| STANDARD_NOPAD.decode(encoded))
        .map_err(|_| TransformError::InvalidBase64)?;

    String::from_utf8(bytes).map_err(|_| TransformError::InvalidBase64)
}

/// Encode text as padded standard Base64.
///
/// The UTF-8 bytes are encoded directly, so every code point (emoji and other astral-plane
/// characters included) survives `decode_base64`. Input that is not UTF-8 text yields
/// [`TransformError::EncodingFailed`].
pub fn encode_base64(input: impl AsRef<[u8]>) -> Result<String, TransformError> {
    let text = std::str::from_utf8(input.as_ref()).map_err(|_| TransformError::EncodingFailed)?;
    Ok(BASE64.encode(text.as_bytes()))
}

/// Attempt to decode `input` into bytes using the standard and URL-safe alphabets, with and
/// without padding, until one succeeds.
pub fn decode_base64_lenient(input: &str) -> Result<Vec<u8>, TransformError> {
    let encoded = input.trim_ascii().as_bytes();

    URL_SAFE_NOPAD
        .decode(encoded)
        .or_else(|_| URL_SAFE.decode(encoded))
        .or_else(|_| STANDARD.decode(encoded))
        .or_else(|_| STANDARD_NOPAD.decode(encoded))
        .map_err(|_| TransformError::InvalidBase64)
}
