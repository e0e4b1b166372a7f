//! Artifact registration for one pass.

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use log::trace;

use crate::errors::EmitCollisionError;
use crate::model::{EmittedSource, Symbol};

/// What produced a batch of sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmitOrigin {
    /// The marker attribute definition.
    Seed,
    Symbol(Symbol),
}

impl EmitOrigin {
    pub fn describe(&self) -> String {
        match self {
            EmitOrigin::Seed => "marker attribute source".to_string(),
            EmitOrigin::Symbol(symbol) => symbol.fully_qualified_name(),
        }
    }
}

#[derive(Debug)]
struct Registration {
    origin: Arc<EmitOrigin>,
    text: String,
}

/// Hint-name keyed sources of one pass.
///
/// Registration is all-or-nothing per batch and the first registration of a
/// hint name wins. A batch from a structurally equal origin that repeats an
/// already registered text is accepted without change.
#[derive(Debug, Default)]
pub struct EmitRegistry {
    sources: BTreeMap<String, Registration>,
}

impl EmitRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers every source of one origin, or none of them.
    ///
    /// Returns how many sources were newly added.
    pub fn register_all(
        &mut self,
        origin: EmitOrigin,
        batch: Vec<EmittedSource>,
    ) -> Result<usize, EmitCollisionError> {
        let mut seen = HashSet::with_capacity(batch.len());
        let mut fresh = Vec::with_capacity(batch.len());

        for source in batch {
            if !seen.insert(source.hint_name.clone()) {
                let name = origin.describe();
                return Err(EmitCollisionError {
                    hint_name: source.hint_name,
                    existing: name.clone(),
                    incoming: name,
                });
            }
            match self.sources.get(&source.hint_name) {
                Some(existing) if *existing.origin == origin && existing.text == source.text => {
                    trace!("'{}' already registered", source.hint_name);
                }
                Some(existing) => {
                    return Err(EmitCollisionError {
                        hint_name: source.hint_name,
                        existing: existing.origin.describe(),
                        incoming: origin.describe(),
                    });
                }
                None => fresh.push(source),
            }
        }

        let added = fresh.len();
        let origin = Arc::new(origin);
        for source in fresh {
            self.sources.insert(
                source.hint_name,
                Registration {
                    origin: Arc::clone(&origin),
                    text: source.text,
                },
            );
        }
        Ok(added)
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Registered sources ordered by hint name.
    pub fn into_sources(self) -> Vec<EmittedSource> {
        self.sources
            .into_iter()
            .map(|(hint_name, registration)| EmittedSource::new(hint_name, registration.text))
            .collect()
    }
}
