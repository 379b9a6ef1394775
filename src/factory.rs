//! Factory helpers: build a [`Delegate`] from each registration source.
//!
//! Each helper is pure with respect to its inputs; invoking the produced
//! delegate is where allocation and recursive resolution happen.

use std::sync::Arc;

use crate::dependency::{AnyArc, Delegate};
use crate::error::DiResult;
use crate::provider::ResolverContext;
use crate::traits::{Construct, Resolver};

/// Auto-wiring: builds a delegate that constructs `T` through its
/// [`Construct`] impl, resolving constructor arguments recursively. Nested
/// resolution failures propagate unchanged, so the originally-missing type is
/// what the caller sees.
pub fn from_type<T>() -> Delegate
where
    T: Construct + Send + Sync + 'static,
{
    Arc::new(move |resolver: &ResolverContext<'_>| Ok(Arc::new(T::construct(resolver)?) as AnyArc))
}

/// Default-construction fallback for types with no constructor dependencies.
pub fn from_default<T>() -> Delegate
where
    T: Default + Send + Sync + 'static,
{
    Arc::new(move |_: &ResolverContext<'_>| Ok(Arc::new(T::default()) as AnyArc))
}

/// Wraps a user-supplied factory verbatim.
pub fn create<T, F>(factory: F) -> Delegate
where
    T: Send + Sync + 'static,
    F: for<'a> Fn(&ResolverContext<'a>) -> DiResult<T> + Send + Sync + 'static,
{
    Arc::new(move |resolver: &ResolverContext<'_>| Ok(Arc::new(factory(resolver)?) as AnyArc))
}

/// Like [`create`], but runs field injection on the produced value before
/// returning it, so registered injectors for `T` populate it at construction
/// time.
pub fn create_injected<T, F>(factory: F) -> Delegate
where
    T: Send + Sync + 'static,
    F: for<'a> Fn(&ResolverContext<'a>) -> DiResult<T> + Send + Sync + 'static,
{
    Arc::new(move |resolver: &ResolverContext<'_>| {
        let value = factory(resolver)?;
        let value = resolver.inject(value)?;
        Ok(Arc::new(value) as AnyArc)
    })
}

/// Delegates physical instantiation to a collaborator-supplied `instancer`
/// that receives the template and the resolver. Whatever the instancer
/// returns is handed to the caller unmodified; the container never learns how
/// the instance was physically created.
pub fn from_template<T, U, F>(template: Arc<T>, instancer: F) -> Delegate
where
    T: Send + Sync + 'static,
    U: Send + Sync + 'static,
    F: for<'a> Fn(&Arc<T>, &ResolverContext<'a>) -> DiResult<U> + Send + Sync + 'static,
{
    Arc::new(move |resolver: &ResolverContext<'_>| {
        Ok(Arc::new(instancer(&template, resolver)?) as AnyArc)
    })
}

/// A factory producing one implementation of capability `Cap`; the unit of
/// input to [`DependencyContainer::register_all`](crate::DependencyContainer::register_all).
pub type ImplementationFactory<Cap> =
    Arc<dyn for<'a> Fn(&ResolverContext<'a>) -> DiResult<Arc<Cap>> + Send + Sync>;

/// Builds an [`ImplementationFactory`] for an auto-wired implementation of
/// `Cap`. The `cast` function performs the unsized coercion; write it as
/// `|c| c`.
pub fn implementation<Cap, T>(cast: fn(Arc<T>) -> Arc<Cap>) -> ImplementationFactory<Cap>
where
    Cap: ?Sized + Send + Sync + 'static,
    T: Construct + Send + Sync + 'static,
{
    Arc::new(move |resolver: &ResolverContext<'_>| Ok(cast(Arc::new(T::construct(resolver)?))))
}
