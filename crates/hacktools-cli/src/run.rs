//! Executes a parsed command and produces the text to print

use std::io::Read;

use hacktools_panel::PanelError;
use hacktools_panel::clipboard::MemoryClipboard;
use hacktools_panel::panel::Panel;
use hacktools_panel::store::JsonFileStore;
use hacktools_transform::generate::{random_string, uuid_v4};
use hacktools_transform::timestamp::{
    ClockSource, TimestampUnit, datetime_to_timestamp, now, timestamp_to_datetime,
};
use hacktools_transform::token::encode_token_with;
use hacktools_transform::{
    DecodedToken, SegmentAlphabet, TokenError, TransformError, decode_base64, decode_url,
    encode_base64, encode_url, try_decode_token,
};
use tracing::debug;

use crate::args::{Codec, Commands, JwtAction, SnippetAction, TimestampAction};

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    /// Printed to stdout as the marker, exactly as the panel would show it
    #[error("{0}")]
    Transform(#[from] TransformError),

    #[error("{0}")]
    Token(#[from] TokenError),

    #[error("{0}")]
    Panel(#[from] PanelError),

    #[error("{0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// What the panel would display for this failure, if anything: the marker for a failed
    /// transform, the all-empty triple for an undecodable token.
    pub fn displayed_output(&self) -> Option<String> {
        match self {
            CliError::Transform(e) => Some(e.to_string()),
            CliError::Token(_) => Some(show_token(&DecodedToken::default())),
            CliError::Panel(_) | CliError::Io(_) => None,
        }
    }
}

pub fn execute(command: Commands, stdin: &mut dyn Read) -> Result<String, CliError> {
    match command {
        Commands::Base64 { action } => match action {
            Codec::Encode { input } => Ok(encode_base64(read_input(input, stdin)?)?),
            Codec::Decode { input } => {
                let input = read_text(input, stdin).map_err(|_| TransformError::InvalidBase64)?;
                Ok(decode_base64(&input)?)
            }
        },

        Commands::Jwt { action } => match action {
            JwtAction::Decode { token } => {
                let token = read_text(token, stdin)?;
                let decoded = try_decode_token(token.trim())?;
                Ok(show_token(&decoded))
            }
            JwtAction::Encode {
                header,
                payload,
                signature,
                url_safe,
            } => {
                let alphabet = if url_safe {
                    SegmentAlphabet::UrlSafe
                } else {
                    SegmentAlphabet::Standard
                };
                debug!("Encoding token with {:?} alphabet", alphabet);
                Ok(encode_token_with(header, payload, signature, alphabet)?)
            }
        },

        Commands::Url { action } => match action {
            Codec::Encode { input } => Ok(encode_url(&read_text(input, stdin)?)),
            Codec::Decode { input } => {
                let input =
                    read_text(input, stdin).map_err(|_| TransformError::InvalidUrlEncoding)?;
                Ok(decode_url(&input)?)
            }
        },

        Commands::Uuid { count } => {
            let ids: Vec<String> = (0..count).map(|_| uuid_v4()).collect();
            Ok(ids.join("\n"))
        }

        Commands::Random { length, charset } => {
            debug!("Generating {length} {charset} characters");
            Ok(random_string(length, charset))
        }

        Commands::Timestamp { action } => match action {
            TimestampAction::ToDate { epoch, millis } => {
                Ok(timestamp_to_datetime(epoch, unit(millis))?)
            }
            TimestampAction::FromDate { date, millis } => {
                Ok(datetime_to_timestamp(&date, unit(millis))?.to_string())
            }
            TimestampAction::Now { millis } => {
                Ok(now(&ClockSource::System, unit(millis)).to_string())
            }
        },

        Commands::Snippet { storage, action } => {
            debug!("Plugin storage: {storage}");
            let panel = Panel::new(JsonFileStore::new(&storage), MemoryClipboard::new())?;

            match action {
                SnippetAction::Add { name, value } => {
                    let value = read_text(value, stdin)?;
                    panel.save_snippet(&name, &value)?;
                    Ok(format!("Saved '{name}'"))
                }
                SnippetAction::Get { name } => {
                    panel
                        .snippets()
                        .into_iter()
                        .find(|s| s.name == name)
                        .map(|s| s.value)
                        .ok_or_else(|| CliError::Panel(PanelError::UnknownSnippet(name)))
                }
                SnippetAction::List => Ok(panel
                    .snippets()
                    .into_iter()
                    .map(|s| s.name)
                    .collect::<Vec<_>>()
                    .join("\n")),
                SnippetAction::Remove { name } => {
                    panel.remove_snippet(&name)?;
                    Ok(format!("Removed '{name}'"))
                }
            }
        }
    }
}

fn show_token(decoded: &DecodedToken) -> String {
    format!(
        "Header:\n{}\n\nPayload:\n{}\n\nSignature:\n{}",
        decoded.header, decoded.payload, decoded.signature
    )
}

fn unit(millis: bool) -> TimestampUnit {
    if millis {
        TimestampUnit::Milliseconds
    } else {
        TimestampUnit::Seconds
    }
}

/// The argument's bytes, or all of stdin minus one trailing line ending.
fn read_input(arg: Option<String>, stdin: &mut dyn Read) -> std::io::Result<Vec<u8>> {
    if let Some(value) = arg {
        return Ok(value.into_bytes());
    }

    let mut buf = Vec::new();
    stdin.read_to_end(&mut buf)?;
    debug!("Read {} bytes from stdin", buf.len());

    if buf.ends_with(b"\n") {
        buf.pop();
        if buf.ends_with(b"\r") {
            buf.pop();
        }
    }
    Ok(buf)
}

fn read_text(arg: Option<String>, stdin: &mut dyn Read) -> std::io::Result<String> {
    let bytes = read_input(arg, stdin)?;
    String::from_utf8(bytes)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::args::Args;

    fn run(argv: &[&str], stdin: &[u8]) -> Result<String, CliError> {
        let mut full = vec!["hacktools"];
        full.extend_from_slice(argv);
        let args = Args::try_parse_from(full).unwrap();
        execute(args.command, &mut &stdin[..])
    }

    #[test]
    fn base64_from_argument_and_stdin() {
        assert_eq!(run(&["base64", "encode", "😍"], b"").unwrap(), "8J+YjQ==");
        assert_eq!(run(&["base64", "decode"], b"8J+YjQ==\n").unwrap(), "😍");
    }

    #[test]
    fn base64_failures_are_markers() {
        let err = run(&["base64", "decode", "not-valid-base64!!"], b"").unwrap_err();
        assert_eq!(err.to_string(), "Invalid Base64");

        let err = run(&["base64", "encode"], &[0xff, 0xfe]).unwrap_err();
        assert_eq!(err.to_string(), "Encoding failed");
    }

    #[test]
    fn jwt_roundtrip() {
        let token = run(
            &[
                "jwt",
                "encode",
                "--header",
                r#"{"alg":"HS256"}"#,
                "--payload",
                r#"{"sub":"1"}"#,
                "--signature",
                "sig",
            ],
            b"",
        )
        .unwrap();
        assert_eq!(token, "eyJhbGciOiJIUzI1NiJ9.eyJzdWIiOiIxIn0=.sig");

        let shown = run(&["jwt", "decode"], format!("{token}\n").as_bytes()).unwrap();
        assert_eq!(
            shown,
            "Header:\n{\n  \"alg\": \"HS256\"\n}\n\nPayload:\n{\n  \"sub\": \"1\"\n}\n\nSignature:\nsig"
        );
    }

    #[test]
    fn jwt_decode_reports_reason() {
        let err = run(&["jwt", "decode", "a.b"], b"").unwrap_err();
        assert!(matches!(err, CliError::Token(TokenError::WrongSegmentCount(2))));
    }

    #[test]
    fn failures_display_what_the_panel_shows() {
        let err = run(&["jwt", "decode", "e30=.!!!.sig"], b"").unwrap_err();
        assert_eq!(
            err.displayed_output().as_deref(),
            Some("Header:\n\n\nPayload:\n\n\nSignature:\n")
        );

        let err = run(&["base64", "decode", "***"], b"").unwrap_err();
        assert_eq!(err.displayed_output().as_deref(), Some("Invalid Base64"));

        let dir = tempfile::tempdir().unwrap();
        let storage = dir.path().join("storage.json");
        let err = run(&["snippet", "-s", storage.to_str().unwrap(), "get", "x"], b"");
        assert_eq!(err.unwrap_err().displayed_output(), None);
    }

    #[test]
    fn url_roundtrip() {
        let encoded = run(&["url", "encode", "a b/c"], b"").unwrap();
        assert_eq!(encoded, "a%20b%2Fc");
        assert_eq!(run(&["url", "decode", encoded.as_str()], b"").unwrap(), "a b/c");
    }

    #[test]
    fn uuid_count() {
        let out = run(&["uuid", "-n", "3"], b"").unwrap();
        assert_eq!(out.lines().count(), 3);
    }

    #[test]
    fn random_length() {
        let out = run(&["random", "--length", "12", "--charset", "digits"], b"").unwrap();
        assert_eq!(out.len(), 12);
        assert!(out.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn timestamp_conversions() {
        assert_eq!(
            run(&["timestamp", "to-date", "1516239022"], b"").unwrap(),
            "2018-01-18T01:30:22Z"
        );
        assert_eq!(
            run(
                &["timestamp", "from-date", "2018-01-18T01:30:22Z", "--millis"],
                b""
            )
            .unwrap(),
            "1516239022000"
        );
        assert_eq!(
            run(&["timestamp", "from-date", "soon"], b"")
                .unwrap_err()
                .to_string(),
            "Invalid timestamp"
        );
    }

    #[test]
    fn snippets_persist_in_storage_file() {
        let dir = tempfile::tempdir().unwrap();
        let storage = dir.path().join("storage.json");
        let storage = storage.to_str().unwrap();

        run(&["snippet", "-s", storage, "add", "lfi", "../../etc/passwd"], b"").unwrap();
        run(&["snippet", "-s", storage, "add", "ssti"], b"{{7*7}}\n").unwrap();

        assert_eq!(run(&["snippet", "-s", storage, "list"], b"").unwrap(), "lfi\nssti");
        assert_eq!(
            run(&["snippet", "-s", storage, "get", "ssti"], b"").unwrap(),
            "{{7*7}}"
        );

        run(&["snippet", "-s", storage, "remove", "lfi"], b"").unwrap();
        assert!(run(&["snippet", "-s", storage, "get", "lfi"], b"").is_err());
    }
}
