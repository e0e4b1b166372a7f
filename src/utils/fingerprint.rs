//! Content fingerprints for model values.
//!
//! A [`Fingerprint`] is a blake3 digest over the bincode encoding of a value.
//! Unlike `Hash`, it is stable across processes and builds, so hosts that
//! persist their incremental cache can key it on a fingerprint.

use std::fmt;

use derive_more::{From, Into};

#[derive(Clone, Copy, PartialEq, Eq, Hash, From, Into)]
pub struct Fingerprint(blake3::Hash);

impl Fingerprint {
    pub fn as_bytes(&self) -> &[u8; 32] {
        self.0.as_bytes()
    }

    pub fn to_hex(&self) -> String {
        self.0.to_hex().to_string()
    }
}

impl From<[u8; 32]> for Fingerprint {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes.into())
    }
}

impl AsRef<[u8]> for Fingerprint {
    fn as_ref(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Fingerprint").field(&self.to_hex()).finish()
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
