//! Splitting and joining three-segment tokens (`header.payload.signature`), as used by JWTs

use data_encoding::{BASE64, BASE64URL_NOPAD};
use serde_json::Value;

use crate::base64::decode_base64_lenient;
use crate::error::{Segment, TokenError, TransformError};

/// Segment delimiter.
pub const DELIMITER: char = '.';

/// A token split into display form: pretty-printed header and payload JSON plus the
/// untouched signature segment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodedToken {
    pub header: String,
    pub payload: String,
    pub signature: String,
}

impl DecodedToken {
    /// True when every field is empty, which is how a malformed token is reported.
    pub fn is_empty(&self) -> bool {
        self.header.is_empty() && self.payload.is_empty() && self.signature.is_empty()
    }
}

/// Alphabet used to encode the header and payload segments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SegmentAlphabet {
    /// Standard alphabet with `=` padding
    #[default]
    Standard,
    /// URL-safe alphabet without padding (RFC 7519)
    UrlSafe,
}

impl SegmentAlphabet {
    fn encode(&self, data: &[u8]) -> String {
        match self {
            SegmentAlphabet::Standard => BASE64.encode(data),
            SegmentAlphabet::UrlSafe => BASE64URL_NOPAD.encode(data),
        }
    }
}

/// Decode `token` into its display form.
///
/// Anything other than exactly three segments, or a header or payload that is not Base64
/// encoded JSON, produces an all-empty [`DecodedToken`]. Partial results are never returned.
pub fn decode_token(token: &str) -> DecodedToken {
    try_decode_token(token).unwrap_or_default()
}

/// Like [`decode_token`], but reports which step failed.
pub fn try_decode_token(token: &str) -> Result<DecodedToken, TokenError> {
    let segments: Vec<&str> = token.split(DELIMITER).collect();

    let [header, payload, signature] = segments.as_slice() else {
        return Err(TokenError::WrongSegmentCount(segments.len()));
    };

    Ok(DecodedToken {
        header: prettify_segment(header, Segment::Header)?,
        payload: prettify_segment(payload, Segment::Payload)?,
        signature: signature.to_string(),
    })
}

/// Join `header`, `payload` and `signature` into a token, Base64 encoding the first two with
/// the standard alphabet.
///
/// Header and payload are not validated as JSON. Segments that are not UTF-8 text yield
/// [`TransformError::InvalidJson`].
pub fn encode_token(
    header: impl AsRef<[u8]>,
    payload: impl AsRef<[u8]>,
    signature: impl AsRef<[u8]>,
) -> Result<String, TransformError> {
    encode_token_with(header, payload, signature, SegmentAlphabet::Standard)
}

/// [`encode_token`] with a selectable segment alphabet.
pub fn encode_token_with(
    header: impl AsRef<[u8]>,
    payload: impl AsRef<[u8]>,
    signature: impl AsRef<[u8]>,
    alphabet: SegmentAlphabet,
) -> Result<String, TransformError> {
    let header = as_text(header.as_ref())?;
    let payload = as_text(payload.as_ref())?;
    let signature = as_text(signature.as_ref())?;

    Ok(format!(
        "{}{DELIMITER}{}{DELIMITER}{}",
        alphabet.encode(header.as_bytes()),
        alphabet.encode(payload.as_bytes()),
        signature
    ))
}

fn as_text(segment: &[u8]) -> Result<&str, TransformError> {
    std::str::from_utf8(segment).map_err(|_| TransformError::InvalidJson)
}

// Output keeps the key order of the input and uses two-space indentation.
fn prettify_segment(segment: &str, which: Segment) -> Result<String, TokenError> {
    let bytes = decode_base64_lenient(segment).map_err(|_| TokenError::SegmentNotBase64(which))?;
    let text = String::from_utf8(bytes).map_err(|_| TokenError::SegmentNotText(which))?;

    let value: Value = serde_json::from_str(&text)
        .map_err(|e| TokenError::SegmentNotJson(which, e.to_string()))?;

    serde_json::to_string_pretty(&value)
        .map_err(|e| TokenError::SegmentNotJson(which, e.to_string()))
}
