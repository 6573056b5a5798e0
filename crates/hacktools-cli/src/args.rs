use clap::{Parser, Subcommand};
use hacktools_transform::generate::Charset;

/// Arguments for the hacktools CLI
#[derive(Parser, Debug)]
#[command(version, about = "HackTools encoders, decoders and generators")]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    #[clap(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Don't print any messages except for errors",
        default_value_t = false
    )]
    pub quiet: bool,

    #[clap(
        short = 'v',
        long,
        global = true,
        conflicts_with = "quiet",
        action = clap::ArgAction::Count,
        help = "Output details about what is being done; specify multiple times for more detail"
    )]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert text to and from Base64
    Base64 {
        #[command(subcommand)]
        action: Codec,
    },
    /// Split a JWT into its parts, or join parts into a JWT
    Jwt {
        #[command(subcommand)]
        action: JwtAction,
    },
    /// Percent-encode text for a URL, or decode it
    Url {
        #[command(subcommand)]
        action: Codec,
    },
    /// Generate random (version 4) UUIDs
    Uuid {
        #[clap(
            short = 'n',
            long,
            value_name = "N",
            help = "Number of UUIDs to generate",
            default_value_t = 1
        )]
        count: usize,
    },
    /// Generate a random string
    Random {
        #[clap(
            short = 'l',
            long,
            value_name = "N",
            env = "HACKTOOLS_RANDOM_LENGTH",
            help = "Number of characters",
            default_value_t = 32
        )]
        length: usize,

        #[clap(
            short = 'c',
            long,
            value_name = "CHARSET",
            help = "alphanumeric, hex, letters or digits",
            default_value_t = Charset::Alphanumeric
        )]
        charset: Charset,
    },
    /// Convert between Unix timestamps and RFC 3339 dates
    Timestamp {
        #[command(subcommand)]
        action: TimestampAction,
    },
    /// Manage saved clipboard snippets
    Snippet {
        #[clap(
            short = 's',
            long,
            value_name = "FILE",
            env = "HACKTOOLS_STORAGE",
            help = "JSON file holding the plugin storage",
            default_value = "hacktools-storage.json"
        )]
        storage: String,

        #[command(subcommand)]
        action: SnippetAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum Codec {
    /// Encode the input
    Encode {
        #[clap(help = "Text to encode [default: read from stdin]")]
        input: Option<String>,
    },
    /// Decode the input
    Decode {
        #[clap(help = "Text to decode [default: read from stdin]")]
        input: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum JwtAction {
    /// Show the header and payload of a token as indented JSON
    Decode {
        #[clap(help = "Token to decode [default: read from stdin]")]
        token: Option<String>,
    },
    /// Join a header, payload and signature into a token
    Encode {
        #[clap(long, value_name = "JSON", help = "Header JSON text")]
        header: String,

        #[clap(long, value_name = "JSON", help = "Payload JSON text")]
        payload: String,

        #[clap(
            long,
            value_name = "SIGNATURE",
            help = "Signature segment, copied verbatim",
            default_value = ""
        )]
        signature: String,

        #[clap(
            long,
            env = "HACKTOOLS_URL_SAFE",
            help = "Use the URL-safe alphabet without padding",
            default_value_t = false
        )]
        url_safe: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum TimestampAction {
    /// Render a Unix timestamp as an RFC 3339 date
    ToDate {
        #[clap(allow_negative_numbers = true, help = "Unix timestamp")]
        epoch: i64,

        #[clap(long, help = "Timestamp is in milliseconds", default_value_t = false)]
        millis: bool,
    },
    /// Parse an RFC 3339 date into a Unix timestamp
    FromDate {
        #[clap(help = "Date such as 2018-01-18T01:30:22Z")]
        date: String,

        #[clap(long, help = "Output milliseconds", default_value_t = false)]
        millis: bool,
    },
    /// Print the current Unix timestamp
    Now {
        #[clap(long, help = "Output milliseconds", default_value_t = false)]
        millis: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum SnippetAction {
    /// Save a snippet, replacing any with the same name
    Add {
        name: String,
        #[clap(help = "Snippet text [default: read from stdin]")]
        value: Option<String>,
    },
    /// Print a saved snippet
    Get { name: String },
    /// List saved snippet names
    List,
    /// Delete a saved snippet
    Remove { name: String },
}
