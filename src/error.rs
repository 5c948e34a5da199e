//! Error types shared by key derivation, address formatting and the CLI.

/// Errors produced by `ewallet` operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Private key is not 64 hex characters (after an optional `0x`).
    #[error("invalid private key format: {0}")]
    InvalidKeyFormat(#[from] hex::FromHexError),

    /// Private key scalar is zero or not below the secp256k1 group order.
    #[error("private key is out of range for secp256k1")]
    InvalidKeyRange,

    #[error("invalid address {input:?}: {reason}")]
    InvalidAddress { input: String, reason: &'static str },

    #[error("{argument} is a required argument for {command}")]
    MissingArgument { command: String, argument: String },

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("unexpected argument: {0}")]
    UnexpectedArgument(String),

    /// The operating system entropy source failed.
    #[error("failed to gather entropy: {0}")]
    Entropy(#[from] rand::Error),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn invalid_address(input: &str, reason: &'static str) -> Self {
        Error::InvalidAddress {
            input: input.to_owned(),
            reason,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
