//! Pure text transforms behind the HackTools panel: Base64, three-segment (JWT) tokens,
//! URL percent-encoding, random identifiers and timestamp conversion.
//!
//! Every transform is a synchronous function of its input. Failures come back as a
//! [`TransformError`] whose `Display` text is the fixed marker a UI shows in place of output;
//! nothing here panics on malformed input.

#![forbid(unsafe_code)]

pub mod base64;
pub mod error;
pub mod generate;
pub mod timestamp;
pub mod token;
pub mod url;

// Re-export commonly used items
pub use base64::{decode_base64, encode_base64};
pub use error::{FailureKind, TokenError, TransformError, display_text};
pub use token::{DecodedToken, SegmentAlphabet, decode_token, encode_token, try_decode_token};
pub use url::{decode_url, encode_url};
