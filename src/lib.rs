//! # ewallet
//!
//! Ethereum key management from the command line.
//!
//! ## Architecture
//!
//! - `crypto`: Key generation, public key and address derivation, EIP-55
//! - `config`: Command-line definition
//! - `cli`: Command dispatcher over an output/error writer pair
//! - `error`: Shared error type

pub mod cli;
pub mod config;
pub mod crypto;
pub mod error;

pub use cli::Status;
pub use config::{Command, Config};
pub use crypto::{
    derive_address, derive_public_key, generate_keypair, to_checksum_case, Address, Keypair,
    PrivateKey, PublicKey,
};
pub use error::{Error, Result};
