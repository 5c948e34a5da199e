//! Command-line definition for `ewallet`.

use clap::{ArgAction, Parser, Subcommand};

/// Ethereum key management: generate keys, derive public keys and addresses,
/// and normalize addresses to EIP-55 checksum case.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "ewallet", version, about, long_about = None)]
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Config {
    /// Increase diagnostic logging on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Generate new private key
    New,

    /// Convert given private key to address
    Address {
        /// Private key in hex format (with or without 0x prefix)
        private_key: String,

        /// Print the EIP-55 checksum form instead of lowercase
        #[arg(short, long)]
        checksum: bool,
    },

    /// Convert given private key to public key
    Public {
        /// Private key in hex format (with or without 0x prefix)
        private_key: String,
    },

    /// Convert given address to checksum case
    Checksum {
        /// 40 hex character address (with or without 0x prefix)
        address: String,
    },
}

impl Command {
    /// Subcommand name as typed on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Command::New => "new",
            Command::Address { .. } => "address",
            Command::Public { .. } => "public",
            Command::Checksum { .. } => "checksum",
        }
    }
}
