#![no_main]

use hacktools_transform::{decode_base64, decode_url, encode_base64, encode_url};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    match std::str::from_utf8(data) {
        Ok(text) => {
            let encoded = encode_base64(text).expect("text always encodes");
            assert_eq!(decode_base64(&encoded).as_deref(), Ok(text));
            assert_eq!(decode_url(&encode_url(text)).as_deref(), Ok(text));

            let _ = decode_base64(text);
            let _ = decode_url(text);
        }
        Err(_) => assert!(encode_base64(data).is_err()),
    }
});
