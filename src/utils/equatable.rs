//! Immutable ordered list with value equality.
//!
//! Every composite model type stores its sequences in an [`EquatableList`].
//! Two lists are equal when they have the same length and pairwise equal
//! elements in the same order; the hash writes the length followed by each
//! element in index order, so any reordering changes it.
//!
//! Zero-length lists all share one canonical representation that owns no
//! allocation, whichever constructor produced them.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::sync::Arc;

use bincode::de::{BorrowDecoder, Decoder};
use bincode::enc::Encoder;
use bincode::error::{DecodeError, EncodeError};
use bincode::{BorrowDecode, Decode, Encode};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub struct EquatableList<T> {
    // `None` is the shared empty list.
    items: Option<Arc<[T]>>,
}

impl<T> EquatableList<T> {
    /// The canonical empty list.
    pub const fn empty() -> Self {
        Self { items: None }
    }

    pub fn as_slice(&self) -> &[T] {
        match &self.items {
            Some(items) => items,
            None => &[],
        }
    }

    /// Whether this list is the shared empty representation.
    pub fn is_shared_empty(&self) -> bool {
        self.items.is_none()
    }
}

impl<T> Default for EquatableList<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Clone for EquatableList<T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
        }
    }
}

impl<T> From<Vec<T>> for EquatableList<T> {
    fn from(items: Vec<T>) -> Self {
        if items.is_empty() {
            return Self::empty();
        }
        Self {
            items: Some(Arc::from(items)),
        }
    }
}

impl<T: Clone> From<&[T]> for EquatableList<T> {
    fn from(items: &[T]) -> Self {
        Self::from(items.to_vec())
    }
}

impl<T> FromIterator<T> for EquatableList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T> Deref for EquatableList<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsRef<[T]> for EquatableList<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<'a, T> IntoIterator for &'a EquatableList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<T: PartialEq> PartialEq for EquatableList<T> {
    fn eq(&self, other: &Self) -> bool {
        if let (Some(a), Some(b)) = (&self.items, &other.items) {
            if Arc::ptr_eq(a, b) {
                return true;
            }
        }
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for EquatableList<T> {}

impl<T: Hash> Hash for EquatableList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let items = self.as_slice();
        state.write_usize(items.len());
        for item in items {
            item.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for EquatableList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T: Encode> Encode for EquatableList<T> {
    fn encode<E: Encoder>(&self, encoder: &mut E) -> Result<(), EncodeError> {
        self.as_slice().encode(encoder)
    }
}

impl<Context, T: Decode<Context>> Decode<Context> for EquatableList<T> {
    fn decode<D: Decoder<Context = Context>>(decoder: &mut D) -> Result<Self, DecodeError> {
        Vec::<T>::decode(decoder).map(Self::from)
    }
}

impl<'de, Context, T: BorrowDecode<'de, Context>> BorrowDecode<'de, Context> for EquatableList<T> {
    fn borrow_decode<D: BorrowDecoder<'de, Context = Context>>(
        decoder: &mut D,
    ) -> Result<Self, DecodeError> {
        Vec::<T>::borrow_decode(decoder).map(Self::from)
    }
}

impl<T: Serialize> Serialize for EquatableList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.as_slice())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for EquatableList<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(Self::from)
    }
}
