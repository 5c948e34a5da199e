//! Ethereum keypair generation and key-to-address derivation.

use std::fmt;

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use secp256k1::{Secp256k1, SecretKey};
use tracing::{debug, trace};

use crate::error::{Error, Result};

use super::codec::{decode_private_key, encode_public_key};
use super::Address;

/// Upper bound on redraws before the entropy source is considered broken.
/// A uniform draw lands outside `[1, n)` with probability below 2^-127.
const MAX_DRAWS: u32 = 64;

/// A secp256k1 private key, guaranteed to satisfy `1 <= k < n`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct PrivateKey(SecretKey);

impl PrivateKey {
    /// Parses a hex private key, with or without `0x` prefix.
    pub fn from_hex(key: &str) -> Result<Self> {
        let bytes = decode_private_key(key)?;
        Self::from_bytes(&bytes)
    }

    /// Validates 32 big-endian bytes as a scalar in curve range.
    pub fn from_bytes(bytes: &[u8; 32]) -> Result<Self> {
        SecretKey::from_slice(bytes)
            .map(Self)
            .map_err(|_| Error::InvalidKeyRange)
    }

    pub fn to_bytes(&self) -> [u8; 32] {
        self.0.secret_bytes()
    }

    /// Returns the private key as a hex string (without 0x prefix).
    pub fn to_hex(&self) -> String {
        hex::encode(self.0.secret_bytes())
    }

    /// Computes `k * G`.
    pub fn public_key(&self) -> PublicKey {
        let secp = Secp256k1::new();
        PublicKey(secp256k1::PublicKey::from_secret_key(&secp, &self.0))
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey(<redacted>)")
    }
}

/// A secp256k1 public key point `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublicKey(secp256k1::PublicKey);

impl PublicKey {
    /// Uncompressed SEC1 encoding: `0x04 || x || y`.
    #[inline]
    pub fn serialize_uncompressed(&self) -> [u8; 65] {
        self.0.serialize_uncompressed()
    }

    /// The 64 coordinate bytes `x || y`, without the format marker.
    pub fn to_raw_bytes(&self) -> [u8; 64] {
        let mut raw = [0u8; 64];
        raw.copy_from_slice(&self.serialize_uncompressed()[1..]);
        raw
    }

    pub fn x(&self) -> [u8; 32] {
        let mut x = [0u8; 32];
        x.copy_from_slice(&self.serialize_uncompressed()[1..33]);
        x
    }

    pub fn y(&self) -> [u8; 32] {
        let mut y = [0u8; 32];
        y.copy_from_slice(&self.serialize_uncompressed()[33..]);
        y
    }

    /// 128 hex characters, no `0x` and no leading `04`.
    pub fn to_hex(&self) -> String {
        encode_public_key(&self.serialize_uncompressed())
    }

    /// Derives the Ethereum address.
    ///
    /// Process:
    /// 1. Serialize the public key in uncompressed form (65 bytes)
    /// 2. Remove the first byte (0x04 prefix)
    /// 3. Hash the remaining 64 bytes with Keccak-256
    /// 4. Take the last 20 bytes of the hash
    #[inline]
    pub fn address(&self) -> Address {
        Address::from_raw_public_key(&self.to_raw_bytes())
    }
}

/// Represents an Ethereum keypair (private key, public key and address).
#[derive(Debug, Clone)]
pub struct Keypair {
    private_key: PrivateKey,
    public_key: PublicKey,
    address: Address,
}

impl Keypair {
    /// Generates a new random keypair from the operating system CSPRNG.
    pub fn generate() -> Result<Self> {
        Self::generate_with(&mut OsRng)
    }

    /// Generates a keypair from 32 bytes drawn from `rng`.
    ///
    /// Draws that fall outside `[1, n)` are discarded and redrawn.
    pub fn generate_with<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self> {
        let mut bytes = [0u8; 32];

        for draw in 1..=MAX_DRAWS {
            rng.try_fill_bytes(&mut bytes)?;

            match PrivateKey::from_bytes(&bytes) {
                Ok(private_key) => {
                    trace!(draw, "drew private key");
                    return Ok(Self::from_private_key(private_key));
                }
                Err(_) => debug!(draw, "scalar outside curve range, redrawing"),
            }
        }

        Err(Error::Entropy(rand::Error::new(
            "entropy source keeps producing out-of-range scalars",
        )))
    }

    /// Builds the keypair for an existing private key.
    pub fn from_private_key(private_key: PrivateKey) -> Self {
        let public_key = private_key.public_key();
        let address = public_key.address();

        Self {
            private_key,
            public_key,
            address,
        }
    }

    /// Builds the keypair for a hex private key.
    pub fn from_hex(key: &str) -> Result<Self> {
        PrivateKey::from_hex(key).map(Self::from_private_key)
    }

    pub fn private_key(&self) -> &PrivateKey {
        &self.private_key
    }

    /// Returns the private key as a hex string (without 0x prefix).
    pub fn private_key_hex(&self) -> String {
        self.private_key.to_hex()
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// Returns a reference to the derived address.
    #[inline]
    pub fn address(&self) -> &Address {
        &self.address
    }
}

/// Derives the public key for a hex private key (optional `0x` prefix).
pub fn derive_public_key(private_key_hex: &str) -> Result<PublicKey> {
    PrivateKey::from_hex(private_key_hex).map(|key| key.public_key())
}

/// Derives the address for a hex private key (optional `0x` prefix).
pub fn derive_address(private_key_hex: &str) -> Result<Address> {
    let address = derive_public_key(private_key_hex)?.address();
    if address.is_zero() {
        return Err(Error::invalid_address(&address.to_hex_prefixed(), "zero address"));
    }
    Ok(address)
}

/// Generates a fresh, uniformly distributed keypair.
pub fn generate_keypair() -> Result<Keypair> {
    Keypair::generate()
}
