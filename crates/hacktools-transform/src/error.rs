use thiserror::Error;

/// Failures a transform can report. The `Display` text of each variant is the fixed marker
/// shown to the user in place of output.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformError {
    #[error("Invalid Base64")]
    InvalidBase64,

    #[error("Encoding failed")]
    EncodingFailed,

    #[error("Invalid JSON")]
    InvalidJson,

    #[error("Invalid URL encoding")]
    InvalidUrlEncoding,

    #[error("Invalid timestamp")]
    InvalidTimestamp,
}

/// The two broad classes of recoverable failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Decode,
    Encode,
}

impl TransformError {
    pub fn kind(&self) -> FailureKind {
        match self {
            TransformError::InvalidBase64
            | TransformError::InvalidUrlEncoding
            | TransformError::InvalidTimestamp => FailureKind::Decode,
            TransformError::EncodingFailed | TransformError::InvalidJson => FailureKind::Encode,
        }
    }

    /// The human-readable marker displayed instead of output.
    pub fn marker(&self) -> String {
        self.to_string()
    }
}

/// Flattens a transform result into the text a display should show: the output on success,
/// the failure marker otherwise.
pub fn display_text(result: Result<String, TransformError>) -> String {
    result.unwrap_or_else(|e| e.marker())
}

/// Why a token could not be decoded. `decode_token` discards this detail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("token must have exactly 3 segments, found {0}")]
    WrongSegmentCount(usize),

    #[error("{0} segment is not valid Base64")]
    SegmentNotBase64(Segment),

    #[error("{0} segment is not UTF-8 text")]
    SegmentNotText(Segment),

    #[error("{0} segment is not valid JSON: {1}")]
    SegmentNotJson(Segment, String),
}

/// The JSON-bearing segments of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Header,
    Payload,
}

impl std::fmt::Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Segment::Header => write!(f, "header"),
            Segment::Payload => write!(f, "payload"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markers_are_fixed_strings() {
        assert_eq!(TransformError::InvalidBase64.marker(), "Invalid Base64");
        assert_eq!(TransformError::EncodingFailed.marker(), "Encoding failed");
        assert_eq!(TransformError::InvalidJson.marker(), "Invalid JSON");
    }

    #[test]
    fn kinds() {
        assert_eq!(TransformError::InvalidBase64.kind(), FailureKind::Decode);
        assert_eq!(TransformError::EncodingFailed.kind(), FailureKind::Encode);
        assert_eq!(TransformError::InvalidJson.kind(), FailureKind::Encode);
    }

    #[test]
    fn display_text_prefers_output() {
        assert_eq!(display_text(Ok("abc".to_string())), "abc");
        assert_eq!(
            display_text(Err(TransformError::InvalidBase64)),
            "Invalid Base64"
        );
    }

    #[test]
    fn token_error_names_segment() {
        let e = TokenError::SegmentNotBase64(Segment::Payload);
        assert_eq!(e.to_string(), "payload segment is not valid Base64");
    }
}
