//! Dependency lifetime definitions.

/// Instance lifetime controlling how the provider caches resolutions.
///
/// # Examples
///
/// ```rust
/// use cobalt_di::{DependencyContainer, Lifetime, Resolver};
/// use std::sync::Arc;
///
/// let mut container = DependencyContainer::new();
/// container.register_factory::<u64, _>(|_| Ok(42), Lifetime::Singleton);
///
/// let provider = container.make();
/// let a = provider.get::<u64>().unwrap();
/// let b = provider.get::<u64>().unwrap();
/// assert!(Arc::ptr_eq(&a, &b));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lifetime {
    /// One instance per provider, constructed lazily on first request and
    /// cached per registration key. Shared by the provider and every caller
    /// that received it.
    Singleton,
    /// A fresh instance on every request. The provider retains no reference;
    /// ownership belongs solely to the caller.
    Transient,
}

impl Lifetime {
    /// True for [`Lifetime::Singleton`].
    pub fn is_singleton(&self) -> bool {
        matches!(self, Lifetime::Singleton)
    }
}
