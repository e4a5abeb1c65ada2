use alloy::{
    primitives::{Address, B256},
    signers::local::PrivateKeySigner,
};
use serde::{Deserialize, Serialize};

/// A per-order witness and the secret that controls it.
///
/// The secret is a fresh private key; the witness is its address. The
/// witness is public from the moment the order is placed, the secret is
/// revealed only when the order is executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WitnessAndSecret {
    /// Address derived from the secret.
    pub witness: Address,
    /// Private key of the witness.
    pub secret: B256,
}

impl WitnessAndSecret {
    /// Generate a random witness and secret.
    pub fn random() -> Self {
        let signer = PrivateKeySigner::random();
        Self { witness: signer.address(), secret: signer.to_bytes() }
    }

    /// Derive the witness for a known secret. Returns `None` if the secret
    /// is not a valid secp256k1 private key.
    pub fn from_secret(secret: B256) -> Option<Self> {
        let signer = PrivateKeySigner::from_bytes(&secret).ok()?;
        Some(Self { witness: signer.address(), secret })
    }
}
