use secp256k1::XOnlyPublicKey;
use serde::{Deserialize, Serialize};

/// Public identity material of one trading peer. Two key rings are the same
/// peer iff their identity keys are equal.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Serialize, Deserialize)]
pub struct PubKeyRing {
    pub identity_pubkey: XOnlyPublicKey,
}

impl PubKeyRing {
    pub fn new(identity_pubkey: XOnlyPublicKey) -> Self {
        PubKeyRing { identity_pubkey }
    }
}

/// Key material of the local identity.
#[derive(Clone, Copy, Debug)]
pub struct KeyRing {
    pub_key_ring: PubKeyRing,
}

impl KeyRing {
    pub fn new(pub_key_ring: PubKeyRing) -> Self {
        KeyRing { pub_key_ring }
    }

    pub fn pub_key_ring(&self) -> &PubKeyRing {
        &self.pub_key_ring
    }
}
