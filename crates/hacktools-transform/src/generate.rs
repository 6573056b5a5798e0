//! Random identifiers and strings

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use fastrand::Rng;
use uuid::Uuid;

/// A new random (version 4) UUID in lowercase hyphenated form.
pub fn uuid_v4() -> String {
    Uuid::new_v4().hyphenated().to_string()
}

/// Characters a random string may be drawn from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Charset {
    /// `A-Z`, `a-z` and `0-9`
    #[default]
    Alphanumeric,
    /// Lowercase hex digits
    Hex,
    /// `A-Z` and `a-z`
    Letters,
    /// `0-9`
    Digits,
}

impl Charset {
    fn pick(&self, rng: &mut Rng) -> char {
        match self {
            Charset::Alphanumeric => rng.alphanumeric(),
            Charset::Hex => rng.digit(16),
            Charset::Letters => rng.alphabetic(),
            Charset::Digits => rng.digit(10),
        }
    }

    /// True if `c` could have been produced from this charset.
    pub fn contains(&self, c: char) -> bool {
        match self {
            Charset::Alphanumeric => c.is_ascii_alphanumeric(),
            Charset::Hex => c.is_ascii_digit() || ('a'..='f').contains(&c),
            Charset::Letters => c.is_ascii_alphabetic(),
            Charset::Digits => c.is_ascii_digit(),
        }
    }
}

impl Display for Charset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Charset::Alphanumeric => "alphanumeric",
            Charset::Hex => "hex",
            Charset::Letters => "letters",
            Charset::Digits => "digits",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Charset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "alphanumeric" | "alnum" => Ok(Charset::Alphanumeric),
            "hex" => Ok(Charset::Hex),
            "letters" | "alpha" => Ok(Charset::Letters),
            "digits" | "numeric" => Ok(Charset::Digits),
            other => Err(format!("unknown charset '{other}'")),
        }
    }
}

/// `len` characters drawn uniformly from `charset`.
pub fn random_string(len: usize, charset: Charset) -> String {
    random_string_with(&mut Rng::new(), len, charset)
}

/// [`random_string`] using the caller's generator, e.g. a seeded one.
pub fn random_string_with(rng: &mut Rng, len: usize, charset: Charset) -> String {
    (0..len).map(|_| charset.pick(rng)).collect()
}
