//! The dependency record: one registration binding keys to a factory and a lifetime.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::error::{DiError, DiResult};
use crate::key::Key;
use crate::lifetime::Lifetime;
use crate::provider::ResolverContext;

/// Type-erased Arc for storage in the provider's caches.
pub type AnyArc = Arc<dyn Any + Send + Sync>;

/// A factory function taking a resolver and producing a type-erased instance.
///
/// This is the shape every registration source (auto-wiring, user factories,
/// external templates) is reduced to; the collection and provider treat it as
/// opaque.
pub type Delegate = Arc<dyn for<'a> Fn(&ResolverContext<'a>) -> DiResult<AnyArc> + Send + Sync>;

/// Per-key adapter converting the factory's canonical payload into the shape
/// expected at that key. Identity for concrete keys; capability keys re-erase
/// the instance as `Arc<Arc<dyn Cap>>` so it can be downcast back out.
pub(crate) type Reshape = Arc<dyn Fn(AnyArc) -> DiResult<AnyArc> + Send + Sync>;

pub(crate) fn identity_reshape() -> Reshape {
    Arc::new(|any| Ok(any))
}

pub(crate) fn trait_reshape<Cap, T>(cast: fn(Arc<T>) -> Arc<Cap>) -> Reshape
where
    Cap: ?Sized + Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    Arc::new(move |any: AnyArc| {
        let concrete = any
            .downcast::<T>()
            .map_err(|_| DiError::TypeMismatch(std::any::type_name::<T>()))?;
        Ok(Arc::new(cast(concrete)) as AnyArc)
    })
}

/// One registration: the set of keys it satisfies, a factory, and a lifetime.
///
/// Immutable after construction. Equality is structural over the key set,
/// factory identity (`Arc::ptr_eq`), and lifetime; the collection uses it to
/// suppress exact duplicate insertions, never to merge registrations.
#[derive(Clone)]
pub struct Dependency {
    pub(crate) bindings: Vec<(Key, Reshape)>,
    pub(crate) factory: Delegate,
    pub(crate) lifetime: Lifetime,
}

impl Dependency {
    /// A dependency registered under a single key.
    pub fn new(key: Key, factory: Delegate, lifetime: Lifetime) -> Self {
        Self::with_bindings(vec![(key, identity_reshape())], factory, lifetime)
    }

    pub(crate) fn with_bindings(
        bindings: Vec<(Key, Reshape)>,
        factory: Delegate,
        lifetime: Lifetime,
    ) -> Self {
        debug_assert!(!bindings.is_empty(), "a dependency must satisfy at least one key");
        Self {
            bindings,
            factory,
            lifetime,
        }
    }

    /// The keys this registration satisfies, in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.bindings.iter().map(|(key, _)| key)
    }

    /// The factory shared by every key of this registration.
    pub fn factory(&self) -> &Delegate {
        &self.factory
    }

    /// The registration's lifetime.
    pub fn lifetime(&self) -> Lifetime {
        self.lifetime
    }
}

impl PartialEq for Dependency {
    fn eq(&self, other: &Self) -> bool {
        self.lifetime == other.lifetime
            && Arc::ptr_eq(&self.factory, &other.factory)
            && self.bindings.len() == other.bindings.len()
            && self
                .keys()
                .zip(other.keys())
                .all(|(a, b)| a == b)
    }
}

impl fmt::Debug for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dependency")
            .field("keys", &self.keys().collect::<Vec<_>>())
            .field("lifetime", &self.lifetime)
            .finish_non_exhaustive()
    }
}
