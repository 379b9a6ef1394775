//! The dependency provider: indexes the frozen collection and resolves on demand.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tracing::{debug, warn};

use crate::dependency::{AnyArc, Delegate, Dependency, Reshape};
use crate::error::{DiError, DiResult};
use crate::injection::InjectorRegistry;
use crate::internal::StackGuard;
use crate::key::Key;
use crate::lifetime::Lifetime;
use crate::traits::ResolverCore;
use crate::validity::ValidityRegistry;

mod context;
pub use context::ResolverContext;

/// Resolves registered dependencies, owning the singleton cache.
///
/// Built once from a frozen [`DependencyCollection`](crate::DependencyCollection)
/// snapshot; after that, [`get`](crate::Resolver::get) and
/// [`inject`](crate::Resolver::inject) may be called any number of times and
/// mutate only the singleton cache. Cloning is cheap (`Arc`-shared state);
/// dropping the last clone releases every cached singleton.
///
/// Resolution is reentrant by recursion: factories resolve their own
/// dependencies through the same provider on the same call stack. A cycle in
/// the registered graph is detected and reported as
/// [`DiError::Circular`] rather than recursing until the stack is exhausted.
pub struct DependencyProvider {
    inner: Arc<ProviderInner>,
}

struct ProviderInner {
    /// Registration-order list of entries per key; multi-bindings are the
    /// entries past the first.
    by_key: HashMap<Key, Vec<Entry>>,
    /// Lazy singleton cache. Slots are (key, index) pairs so each member of a
    /// multi-binding caches independently.
    singletons: Mutex<HashMap<(Key, usize), AnyArc>>,
    injectors: InjectorRegistry,
    validity: ValidityRegistry,
}

struct Entry {
    lifetime: Lifetime,
    factory: Delegate,
    reshape: Reshape,
}

impl DependencyProvider {
    pub(crate) fn from_parts(
        dependencies: impl IntoIterator<Item = Dependency>,
        injectors: InjectorRegistry,
        validity: ValidityRegistry,
    ) -> Self {
        let mut by_key: HashMap<Key, Vec<Entry>> = HashMap::new();
        for dependency in dependencies {
            for (key, reshape) in &dependency.bindings {
                by_key.entry(key.clone()).or_default().push(Entry {
                    lifetime: dependency.lifetime,
                    factory: dependency.factory.clone(),
                    reshape: reshape.clone(),
                });
            }
        }
        debug!(keys = by_key.len(), "dependency provider built");
        Self {
            inner: Arc::new(ProviderInner {
                by_key,
                singletons: Mutex::new(HashMap::new()),
                injectors,
                validity,
            }),
        }
    }

    fn resolve_entry(&self, key: &Key, index: usize, entry: &Entry) -> DiResult<AnyArc> {
        match entry.lifetime {
            Lifetime::Transient => {
                let ctx = ResolverContext::new(self);
                let value = (entry.factory)(&ctx)?;
                (entry.reshape)(value)
            }
            Lifetime::Singleton => {
                let slot = (key.clone(), index);
                {
                    let mut cache = self.inner.singletons.lock().unwrap();
                    if let Some(cached) = cache.get(&slot) {
                        if self.inner.validity.is_valid(cached) {
                            return Ok(cached.clone());
                        }
                        warn!(
                            dependency = key.display_name(),
                            "cached singleton is no longer valid, rebuilding"
                        );
                        cache.remove(&slot);
                    }
                }
                // The lock is never held while the factory runs; it may
                // resolve recursively through this provider.
                let ctx = ResolverContext::new(self);
                let value = (entry.factory)(&ctx)?;
                let value = (entry.reshape)(value)?;
                let mut cache = self.inner.singletons.lock().unwrap();
                Ok(cache.entry(slot).or_insert(value).clone())
            }
        }
    }
}

impl ResolverCore for DependencyProvider {
    fn resolve_any(&self, key: &Key) -> DiResult<AnyArc> {
        let name = key.display_name();
        let _guard = StackGuard::enter(name)?;
        let entries = self.inner.by_key.get(key).ok_or(DiError::NotFound(name))?;
        // First registration wins when several share a key; multi-value
        // requests are the only way to see the rest.
        let entry = entries.first().ok_or(DiError::NotFound(name))?;
        debug!(dependency = name, "resolving");
        self.resolve_entry(key, 0, entry)
    }

    fn resolve_all(&self, key: &Key) -> DiResult<Vec<AnyArc>> {
        let name = key.display_name();
        let _guard = StackGuard::enter(name)?;
        let Some(entries) = self.inner.by_key.get(key) else {
            return Ok(Vec::new());
        };
        debug!(dependency = name, count = entries.len(), "resolving all");
        let mut results = Vec::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            results.push(self.resolve_entry(key, index, entry)?);
        }
        Ok(results)
    }

    fn inject_any(&self, type_id: TypeId, target: &mut dyn Any) -> DiResult<()> {
        let ctx = ResolverContext::new(self);
        self.inner.injectors.run(type_id, target, &ctx)
    }
}

impl Clone for DependencyProvider {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}
