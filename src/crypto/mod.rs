//! Cryptographic operations for Ethereum keys and addresses.
//!
//! This module provides:
//! - Secure random key generation using secp256k1
//! - Public key and address derivation using Keccak-256
//! - EIP-55 checksum casing

mod address;
pub mod codec;
mod keypair;

pub use address::{to_checksum_case, Address};
pub use keypair::{
    derive_address, derive_public_key, generate_keypair, Keypair, PrivateKey, PublicKey,
};
