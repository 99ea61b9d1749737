//! `b64-encode` — encode a file or stdin as base64 text (stdout).
//!
//! Usage:
//!   b64-encode [FILE] [--wrap N] [--char62 C] [--char63 C] [--pad C] [--ruleset FILE] [-v]

use b64_ruleset::cli::{run, Args, CliError};
use clap::Parser;
use std::io::{self, Read, Write};

fn main() {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(e) = encode(&args) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn encode(args: &Args) -> Result<(), CliError> {
    let input = match &args.input {
        Some(path) => std::fs::read(path)?,
        None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            buf
        }
    };

    let text = run(args, &input)?;
    let mut stdout = io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.write_all(b"\n")?;
    Ok(())
}
