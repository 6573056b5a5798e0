#[cfg(test)]
mod tests {
    // End-to-end checks of the transform contract as a UI sees it: every input, however
    // malformed, produces some text (output or marker) and nothing panics.

    use hacktools_transform::generate::{Charset, random_string};
    use hacktools_transform::{
        DecodedToken, TransformError, decode_base64, decode_token, decode_url, display_text,
        encode_base64, encode_token, encode_url,
    };
    use serde_json::{Value, json};

    const SAMPLES: &[&str] = &[
        "",
        "a",
        "hello world",
        "line one\nline two\r\n\ttabbed",
        "{\"alg\":\"none\"}",
        "ünïcödé",
        "😍",
        "👩‍👩‍👧‍👦 family",
        "𝄞 music",
        "日本語のテキスト",
        "\u{0}nul byte",
        "\u{FFFD} replacement",
    ];

    #[test]
    fn base64_roundtrips_all_samples() {
        for sample in SAMPLES {
            let encoded = encode_base64(sample).unwrap();
            assert_eq!(&decode_base64(&encoded).unwrap(), sample);
        }
    }

    #[test]
    fn base64_roundtrips_random_text() {
        for len in [1, 2, 3, 4, 5, 63, 64, 65, 1000] {
            let text = random_string(len, Charset::Alphanumeric);
            let encoded = encode_base64(&text).unwrap();
            assert_eq!(decode_base64(&encoded).unwrap(), text);
        }
    }

    #[test]
    fn empty_base64_is_empty_text() {
        assert_eq!(decode_base64(""), Ok(String::new()));
    }

    #[test]
    fn invalid_base64_shows_marker() {
        let shown = display_text(decode_base64("not-valid-base64!!"));
        assert_eq!(shown, "Invalid Base64");
    }

    #[test]
    fn emoji_roundtrips_exactly() {
        let encoded = encode_base64("😍").unwrap();
        assert_eq!(decode_base64(&encoded).unwrap(), "😍");
    }

    #[test]
    fn two_segment_token_is_all_empty() {
        assert_eq!(
            decode_token("a.b"),
            DecodedToken {
                header: String::new(),
                payload: String::new(),
                signature: String::new(),
            }
        );
    }

    #[test]
    fn token_roundtrip_is_json_deep_equal() {
        let token = encode_token(r#"{"alg":"HS256"}"#, r#"{"sub":"1"}"#, "signature-segment")
            .unwrap();
        let decoded = decode_token(&token);

        let header: Value = serde_json::from_str(&decoded.header).unwrap();
        let payload: Value = serde_json::from_str(&decoded.payload).unwrap();

        assert_eq!(header, json!({"alg": "HS256"}));
        assert_eq!(payload, json!({"sub": "1"}));
        assert_eq!(decoded.signature, "signature-segment");
    }

    #[test]
    fn non_json_header_is_all_empty() {
        let header = encode_base64("notjson").unwrap();
        let payload = encode_base64("{}").unwrap();
        let token = format!("{header}.{payload}.sig");

        assert!(decode_token(&token).is_empty());
    }

    #[test]
    fn token_with_unicode_claims_roundtrips() {
        let payload = r#"{"name":"Zoë 😍","roles":["admin","ops"],"n":42}"#;
        let token = encode_token(r#"{"alg":"none"}"#, payload, "").unwrap();
        let decoded = decode_token(&token);

        let parsed: Value = serde_json::from_str(&decoded.payload).unwrap();
        assert_eq!(
            parsed,
            json!({"name": "Zoë 😍", "roles": ["admin", "ops"], "n": 42})
        );
    }

    #[test]
    fn pretty_printing_keeps_key_order() {
        let token = encode_token(r#"{"z":1,"a":2}"#, r#"{}"#, "s").unwrap();
        assert_eq!(decode_token(&token).header, "{\n  \"z\": 1,\n  \"a\": 2\n}");
    }

    #[test]
    fn transforms_are_idempotent() {
        let token = encode_token("{}", "{}", "s").unwrap();
        assert_eq!(decode_token(&token), decode_token(&token));
        assert_eq!(encode_base64("x"), encode_base64("x"));
    }

    #[test]
    fn url_roundtrips_all_samples() {
        for sample in SAMPLES {
            assert_eq!(&decode_url(&encode_url(sample)).unwrap(), sample);
        }
    }

    #[test]
    fn url_failure_marker() {
        assert_eq!(
            decode_url("%G1").unwrap_err(),
            TransformError::InvalidUrlEncoding
        );
    }
}
