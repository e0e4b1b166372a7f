//! The structural equality contract of the model.
//!
//! Incremental hosts decide whether to regenerate by comparing a freshly
//! transformed value with the one from the previous pass. Every composite
//! model type therefore implements [`StructuralValue`]: equality and hashing
//! cover every field, nested sequences compare element by element in order,
//! and member hashes are combined in field declaration order.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use bincode::Encode;
use bincode::error::EncodeError;

use crate::utils::Fingerprint;

pub trait StructuralValue: Clone + Eq + Hash + Send + Sync + Encode {
    /// In-process hash with fixed keys.
    fn structural_hash(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }

    /// Process-independent digest of the encoded value.
    fn fingerprint(&self) -> Result<Fingerprint, EncodeError> {
        let mut hasher = blake3::Hasher::new();
        bincode::encode_into_std_write(self, &mut hasher, bincode::config::standard())?;
        Ok(Fingerprint::from(hasher.finalize()))
    }

    /// Whether two values are interchangeable for caching purposes.
    fn structurally_equals(&self, other: &Self) -> bool {
        self == other
    }
}
