//! Command dispatcher.
//!
//! Each invocation parses its arguments once, runs exactly one command and
//! ends in a [`Status`]. Output goes through the writer pair handed in by the
//! caller: results on `out`, usage and errors on `err`.

use std::ffi::OsString;
use std::io::Write;
use std::process::ExitCode;

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{CommandFactory, Parser};
use tracing::{debug, info};

use crate::config::{Command, Config};
use crate::crypto::{derive_address, derive_public_key, generate_keypair, to_checksum_case};
use crate::error::{Error, Result};

/// Terminal state of an invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Failure,
}

impl Status {
    pub fn code(self) -> u8 {
        match self {
            Status::Success => 0,
            Status::Failure => 1,
        }
    }
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        ExitCode::from(status.code())
    }
}

/// Parses then executes. `args` includes the program name.
pub fn run<I, T, O, E>(args: I, out: &mut O, err: &mut E) -> Status
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
    O: Write + ?Sized,
    E: Write + ?Sized,
{
    match parse(args, out, err) {
        Ok(config) => execute(&config, out, err),
        Err(status) => status,
    }
}

/// Parses the command line.
///
/// Help, version and usage errors are fully handled here; the returned
/// `Err` carries the status the process should end with.
pub fn parse<I, T, O, E>(
    args: I,
    out: &mut O,
    err: &mut E,
) -> std::result::Result<Config, Status>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
    O: Write + ?Sized,
    E: Write + ?Sized,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();

    let parse_error = match Config::try_parse_from(&args) {
        Ok(config) => return Ok(config),
        Err(e) => e,
    };

    let subcommand = invoked_subcommand(&args);
    debug!(kind = ?parse_error.kind(), subcommand, "argument parsing stopped");

    let status = match parse_error.kind() {
        ErrorKind::DisplayHelp if subcommand.is_some() => {
            let _ = write!(out, "{}", parse_error.render());
            Status::Success
        }
        ErrorKind::DisplayVersion => {
            let _ = write!(out, "{}", parse_error.render());
            Status::Success
        }
        ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            let _ = write!(err, "{}", usage(None));
            Status::Failure
        }
        ErrorKind::MissingRequiredArgument => {
            let argument = context(&parse_error, ContextKind::InvalidArg)
                .map(|arg| display_argument_name(&arg))
                .unwrap_or_else(|| "argument".to_owned());
            let error = Error::MissingArgument {
                command: subcommand.unwrap_or("ewallet").to_owned(),
                argument,
            };
            report_usage_error(err, &error, subcommand)
        }
        ErrorKind::InvalidSubcommand => {
            let name = context(&parse_error, ContextKind::InvalidSubcommand)
                .or_else(|| subcommand.map(str::to_owned))
                .unwrap_or_default();
            report_usage_error(err, &Error::UnknownCommand(name), None)
        }
        _ => {
            let argument = context(&parse_error, ContextKind::InvalidArg)
                .unwrap_or_else(|| parse_error.kind().to_string());
            report_usage_error(err, &Error::UnexpectedArgument(argument), subcommand)
        }
    };

    Err(status)
}

/// Runs the parsed command, writing its single result line to `out`.
pub fn execute<O, E>(config: &Config, out: &mut O, err: &mut E) -> Status
where
    O: Write + ?Sized,
    E: Write + ?Sized,
{
    let command = config.command.name();
    info!(command, "dispatching");

    match dispatch(&config.command, out) {
        Ok(()) => Status::Success,
        Err(e) => {
            debug!(command, error = %e, "command failed");
            let _ = writeln!(err, "Error: {e}");
            Status::Failure
        }
    }
}

fn dispatch<O: Write + ?Sized>(command: &Command, out: &mut O) -> Result<()> {
    match command {
        Command::New => {
            let keypair = generate_keypair()?;
            info!(address = %keypair.address(), "generated private key");
            writeln!(out, "{}", keypair.private_key_hex())?;
        }
        Command::Address {
            private_key,
            checksum,
        } => {
            let address = derive_address(private_key)?;
            let rendered = if *checksum {
                address.to_checksum()
            } else {
                address.to_hex_prefixed()
            };
            writeln!(out, "{rendered}")?;
        }
        Command::Public { private_key } => {
            let public_key = derive_public_key(private_key)?;
            writeln!(out, "{}", public_key.to_hex())?;
        }
        Command::Checksum { address } => {
            writeln!(out, "{}", to_checksum_case(address)?)?;
        }
    }

    out.flush()?;
    Ok(())
}

fn report_usage_error<E>(err: &mut E, error: &Error, subcommand: Option<&str>) -> Status
where
    E: Write + ?Sized,
{
    let _ = write!(err, "Error: {error}\n\n{}", usage(subcommand));
    Status::Failure
}

/// Usage line for a known subcommand, full command listing otherwise.
fn usage(subcommand: Option<&str>) -> String {
    let mut cmd = Config::command().bin_name("ewallet");
    cmd.build();

    if let Some(sub) = subcommand.and_then(|name| cmd.find_subcommand_mut(name)) {
        return format!("{}\n", sub.render_usage());
    }
    cmd.render_help().to_string()
}

/// The first positional token, if it comes before any help flag.
fn invoked_subcommand(args: &[OsString]) -> Option<&str> {
    for arg in args.iter().skip(1) {
        let arg = arg.to_str()?;
        if arg == "-h" || arg == "--help" {
            return None;
        }
        if !arg.starts_with('-') {
            return Some(arg);
        }
    }
    None
}

fn context(error: &clap::Error, kind: ContextKind) -> Option<String> {
    match error.get(kind)? {
        ContextValue::String(value) => Some(value.clone()),
        ContextValue::Strings(values) => Some(values.join(", ")),
        _ => None,
    }
}

/// `<PRIVATE_KEY>` -> `private key`
fn display_argument_name(raw: &str) -> String {
    raw.trim_matches(|c| c == '<' || c == '>')
        .replace('_', " ")
        .to_lowercase()
}
