//! Ethereum wallet key tool
//!
//! Usage:
//!   ewallet new                     # Generate a new private key
//!   ewallet address <private_key>   # Derive the address
//!   ewallet public <private_key>    # Derive the uncompressed public key
//!   ewallet checksum <address>      # EIP-55 checksum casing

use std::env;
use std::io;
use std::process::ExitCode;

use tracing::Level;

use ewallet::cli;

fn main() -> ExitCode {
    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();

    let config = match cli::parse(env::args_os(), &mut out, &mut err) {
        Ok(config) => config,
        Err(status) => return status.into(),
    };

    init_tracing(config.verbose);

    cli::execute(&config, &mut out, &mut err).into()
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}
