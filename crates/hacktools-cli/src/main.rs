//! The hacktools CLI

use clap::Parser;
use tracing::{debug, error};

use crate::args::Args;
use crate::run::{CliError, execute};

mod args;
mod run;

fn main() {
    let args = Args::parse();

    enable_logging(&args);
    debug!("command line: {:?}", args);

    match execute(args.command, &mut std::io::stdin().lock()) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            match e.displayed_output() {
                Some(output) => println!("{output}"),
                None => error!("{e}"),
            }
            if let CliError::Token(reason) = &e {
                error!("{reason}");
            }
            std::process::exit(1);
        }
    }
}

fn enable_logging(args: &Args) {
    let mut builder = tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr);

    if args.quiet {
        builder = builder.with_max_level(tracing::Level::ERROR);
    } else {
        match args.verbose {
            2.. => builder = builder.with_max_level(tracing::Level::TRACE),
            1 => builder = builder.with_max_level(tracing::Level::DEBUG),
            _ => builder = builder.with_max_level(tracing::Level::INFO),
        }
    }

    builder.init();
}
