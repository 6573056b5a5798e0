//! Percent-encoding of text for use in URL components

use crate::error::TransformError;

/// Percent-encode every byte of `input` except ASCII alphanumerics and `-_.~`.
pub fn encode_url(input: &str) -> String {
    urlencoding::encode(input).into_owned()
}

/// Reverse [`encode_url`]. A `%` not followed by two hex digits, or escapes that decode to
/// bytes which are not UTF-8, yield [`TransformError::InvalidUrlEncoding`]. `+` is kept as-is.
pub fn decode_url(input: &str) -> Result<String, TransformError> {
    if !escapes_well_formed(input.as_bytes()) {
        return Err(TransformError::InvalidUrlEncoding);
    }

    urlencoding::decode(input)
        .map(|decoded| decoded.into_owned())
        .map_err(|_| TransformError::InvalidUrlEncoding)
}

fn escapes_well_formed(bytes: &[u8]) -> bool {
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            match bytes.get(i + 1..i + 3) {
                Some([hi, lo]) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit() => i += 3,
                _ => return false,
            }
        } else {
            i += 1;
        }
    }
    true
}
