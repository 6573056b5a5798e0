#![no_main]

use arbitrary::{Arbitrary, Unstructured};
use hacktools_transform::{decode_token, encode_token, try_decode_token};
use libfuzzer_sys::fuzz_target;

// Three segments that join into a plausible token
#[derive(Arbitrary)]
struct FuzzTokenParts {
    header: String,
    payload: String,
    signature: String,
}

fuzz_target!(|data: &[u8]| {
    let mut u = Unstructured::new(data);
    if let Ok(parts) = FuzzTokenParts::arbitrary(&mut u)
        && let Ok(token) = encode_token(&parts.header, &parts.payload, &parts.signature)
    {
        // Only a token whose signature has no delimiter can split back into three segments
        let decoded = decode_token(&token);
        if !decoded.is_empty() {
            assert_eq!(decoded.signature, parts.signature);
        }
    }

    // Raw input must never panic, and a failure is always all-empty
    if let Ok(text) = std::str::from_utf8(data) {
        let lenient = decode_token(text);
        match try_decode_token(text) {
            Ok(decoded) => assert_eq!(decoded, lenient),
            Err(_) => assert!(lenient.is_empty()),
        }
    }
});
