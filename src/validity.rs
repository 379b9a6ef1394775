//! Pluggable staleness predicates for cached singletons.
//!
//! Some embedders hand the container instances whose lifetime is managed
//! outside it (a pooled connection, a handle into a host runtime). A validity
//! predicate lets the provider notice that a cached singleton has been torn
//! down externally and rebuild it instead of handing out a dead instance.
//! Types without a predicate are always considered valid.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

use crate::dependency::AnyArc;

type Predicate = Arc<dyn Fn(&(dyn Any + Send + Sync)) -> bool + Send + Sync>;

#[derive(Clone, Default)]
pub(crate) struct ValidityRegistry {
    predicates: HashMap<TypeId, Predicate>,
}

impl ValidityRegistry {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn register<T, F>(&mut self, predicate: F)
    where
        T: 'static,
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        let erased: Predicate = Arc::new(move |any| {
            any.downcast_ref::<T>().map(|t| predicate(t)).unwrap_or(true)
        });
        self.predicates.insert(TypeId::of::<T>(), erased);
    }

    /// Checks a cached payload against its type's predicate, if any.
    pub(crate) fn is_valid(&self, payload: &AnyArc) -> bool {
        match self.predicates.get(&(**payload).type_id()) {
            Some(predicate) => predicate(&**payload),
            None => true,
        }
    }
}
