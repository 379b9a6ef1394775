//! Insertion-ordered, duplicate-suppressing set of dependency records.

use crate::dependency::Dependency;
use crate::injection::InjectorRegistry;
use crate::provider::DependencyProvider;
use crate::validity::ValidityRegistry;

/// The unit of input to the provider: an ordered sequence of unique
/// [`Dependency`] records.
///
/// Populated during a registration phase, then consumed exactly once to build
/// a [`DependencyProvider`]; the provider builds its own indices and does not
/// retain the collection.
#[derive(Default, Clone)]
pub struct DependencyCollection {
    items: Vec<Dependency>,
}

impl DependencyCollection {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `dependency` unless an equal record is already present.
    ///
    /// Equality is structural over (keys, factory identity, lifetime), so
    /// only exact duplicate insertions are suppressed; two registrations for
    /// the same key with different factories both stay, in insertion order.
    pub fn add(&mut self, dependency: Dependency) {
        if self.items.iter().any(|existing| existing == &dependency) {
            return;
        }
        self.items.push(dependency);
    }

    /// Number of unique records.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates the records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Dependency> {
        self.items.iter()
    }

    /// Consumes the collection and builds a provider over its snapshot.
    ///
    /// Providers built this way have no field injectors or validity
    /// predicates; go through
    /// [`DependencyContainer`](crate::DependencyContainer) to supply those.
    pub fn build(self) -> DependencyProvider {
        DependencyProvider::from_parts(self.items, InjectorRegistry::new(), ValidityRegistry::new())
    }
}

impl IntoIterator for DependencyCollection {
    type Item = Dependency;
    type IntoIter = std::vec::IntoIter<Dependency>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a DependencyCollection {
    type Item = &'a Dependency;
    type IntoIter = std::slice::Iter<'a, Dependency>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
