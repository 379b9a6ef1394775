//! Registration surface consumed by application startup code.

use std::sync::Arc;

use crate::collection::DependencyCollection;
use crate::dependency::{identity_reshape, trait_reshape, AnyArc, Dependency};
use crate::error::DiResult;
use crate::factory::{self, ImplementationFactory};
use crate::injection::InjectorRegistry;
use crate::key::Key;
use crate::lifetime::Lifetime;
use crate::provider::{DependencyProvider, ResolverContext};
use crate::traits::Construct;
use crate::validity::ValidityRegistry;

/// Accumulates registrations, then builds providers.
///
/// All `register_*` calls belong to the registration phase; [`make`](Self::make)
/// snapshots the collection into an independent [`DependencyProvider`] with
/// its own singleton cache. Calling `make` again yields another independent
/// provider over the registrations present at that point.
///
/// # Examples
///
/// ```rust
/// use cobalt_di::{Construct, DependencyContainer, DiResult, Lifetime, Resolver, ResolverContext};
/// use std::sync::Arc;
///
/// struct Config { retries: u32 }
/// impl Construct for Config {
///     fn construct(_r: &ResolverContext<'_>) -> DiResult<Self> {
///         Ok(Config { retries: 3 })
///     }
/// }
///
/// struct Client { config: Arc<Config> }
/// impl Construct for Client {
///     fn construct(r: &ResolverContext<'_>) -> DiResult<Self> {
///         Ok(Client { config: r.get::<Config>()? })
///     }
/// }
///
/// let mut container = DependencyContainer::new();
/// container.register::<Config>(Lifetime::Singleton);
/// container.register::<Client>(Lifetime::Transient);
///
/// let provider = container.make();
/// let client = provider.get::<Client>().unwrap();
/// assert_eq!(client.config.retries, 3);
/// ```
#[derive(Default)]
pub struct DependencyContainer {
    collection: DependencyCollection,
    injectors: InjectorRegistry,
    validity: ValidityRegistry,
}

impl DependencyContainer {
    /// Creates an empty container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an auto-wired type under its own concrete key.
    pub fn register<T>(&mut self, lifetime: Lifetime) -> &mut Self
    where
        T: Construct + Send + Sync + 'static,
    {
        self.collection
            .add(Dependency::new(Key::of_type::<T>(), factory::from_type::<T>(), lifetime));
        self
    }

    /// Registers an auto-wired implementation under both its concrete key and
    /// a capability key.
    ///
    /// `cast` performs the unsized coercion from `Arc<T>` to `Arc<Cap>`;
    /// write it as `|c| c`. An implementation that does not satisfy the
    /// capability is rejected at compile time.
    pub fn register_as<Cap, T>(
        &mut self,
        cast: fn(Arc<T>) -> Arc<Cap>,
        lifetime: Lifetime,
    ) -> &mut Self
    where
        Cap: ?Sized + Send + Sync + 'static,
        T: Construct + Send + Sync + 'static,
    {
        let bindings = vec![
            (Key::of_type::<T>(), identity_reshape()),
            (Key::of_trait::<Cap>(), trait_reshape::<Cap, T>(cast)),
        ];
        self.collection
            .add(Dependency::with_bindings(bindings, factory::from_type::<T>(), lifetime));
        self
    }

    /// Multi-binding entry point: registers every candidate implementation
    /// under the capability key only, in iteration order.
    ///
    /// Candidates registered this way are retrievable as members of the
    /// capability collection
    /// ([`get_all_trait`](crate::Resolver::get_all_trait)), not individually
    /// by their concrete type. Build candidates with
    /// [`factory::implementation`](crate::factory::implementation) or from
    /// hand-written factories.
    pub fn register_all<Cap>(
        &mut self,
        candidates: impl IntoIterator<Item = ImplementationFactory<Cap>>,
        lifetime: Lifetime,
    ) -> &mut Self
    where
        Cap: ?Sized + Send + Sync + 'static,
    {
        for candidate in candidates {
            self.register_implementation(candidate, lifetime);
        }
        self
    }

    /// Registers a single implementation under the capability key only.
    pub fn register_implementation<Cap>(
        &mut self,
        candidate: ImplementationFactory<Cap>,
        lifetime: Lifetime,
    ) -> &mut Self
    where
        Cap: ?Sized + Send + Sync + 'static,
    {
        let delegate = Arc::new(move |resolver: &ResolverContext<'_>| {
            Ok(Arc::new(candidate(resolver)?) as AnyArc)
        });
        self.collection
            .add(Dependency::new(Key::of_trait::<Cap>(), delegate, lifetime));
        self
    }

    /// Registers a user factory under the concrete type key.
    pub fn register_factory<T, F>(&mut self, f: F, lifetime: Lifetime) -> &mut Self
    where
        T: Send + Sync + 'static,
        F: for<'a> Fn(&ResolverContext<'a>) -> DiResult<T> + Send + Sync + 'static,
    {
        self.collection
            .add(Dependency::new(Key::of_type::<T>(), factory::create(f), lifetime));
        self
    }

    /// Registers a user factory under two explicit keys: the concrete type
    /// and a capability.
    pub fn register_factory_as<Cap, T, F>(
        &mut self,
        f: F,
        cast: fn(Arc<T>) -> Arc<Cap>,
        lifetime: Lifetime,
    ) -> &mut Self
    where
        Cap: ?Sized + Send + Sync + 'static,
        T: Send + Sync + 'static,
        F: for<'a> Fn(&ResolverContext<'a>) -> DiResult<T> + Send + Sync + 'static,
    {
        let bindings = vec![
            (Key::of_type::<T>(), identity_reshape()),
            (Key::of_trait::<Cap>(), trait_reshape::<Cap, T>(cast)),
        ];
        self.collection
            .add(Dependency::with_bindings(bindings, factory::create(f), lifetime));
        self
    }

    /// Registers a user factory whose product is field-injected before being
    /// returned, so injectors registered for `T` populate it at construction
    /// time.
    pub fn register_injected_factory<T, F>(&mut self, f: F, lifetime: Lifetime) -> &mut Self
    where
        T: Send + Sync + 'static,
        F: for<'a> Fn(&ResolverContext<'a>) -> DiResult<T> + Send + Sync + 'static,
    {
        self.collection
            .add(Dependency::new(Key::of_type::<T>(), factory::create_injected(f), lifetime));
        self
    }

    /// Registers a pre-built instance as a singleton under its concrete key.
    pub fn register_instance<T>(&mut self, value: T) -> &mut Self
    where
        T: Send + Sync + 'static,
    {
        let instance = Arc::new(value);
        let delegate = Arc::new(move |_: &ResolverContext<'_>| Ok(instance.clone() as AnyArc));
        self.collection
            .add(Dependency::new(Key::of_type::<T>(), delegate, Lifetime::Singleton));
        self
    }

    /// Registers an externally-sourced template: physical instantiation is
    /// delegated to `instancer`, which receives the template and the
    /// resolver. The container hands whatever the instancer returns to the
    /// caller unmodified.
    pub fn register_template<T, U, F>(
        &mut self,
        template: Arc<T>,
        instancer: F,
        lifetime: Lifetime,
    ) -> &mut Self
    where
        T: Send + Sync + 'static,
        U: Send + Sync + 'static,
        F: for<'a> Fn(&Arc<T>, &ResolverContext<'a>) -> DiResult<U> + Send + Sync + 'static,
    {
        self.collection.add(Dependency::new(
            Key::of_type::<U>(),
            factory::from_template(template, instancer),
            lifetime,
        ));
        self
    }

    /// Adds a collaborator-built dependency record directly.
    pub fn add(&mut self, dependency: Dependency) -> &mut Self {
        self.collection.add(dependency);
        self
    }

    /// Appends a field injector for `T`. Injectors run in registration order
    /// when `T` is injected, so composed types can layer their injections.
    pub fn register_injector<T, F>(&mut self, injector: F) -> &mut Self
    where
        T: 'static,
        F: for<'a> Fn(&mut T, &ResolverContext<'a>) -> DiResult<()> + Send + Sync + 'static,
    {
        self.injectors.register::<T, F>(injector);
        self
    }

    /// Installs a validity predicate for cached singletons of concrete type
    /// `T`. A cached instance failing the predicate is discarded and rebuilt
    /// on the next request (logged as a warning, never an error). Types
    /// without a predicate are always valid.
    pub fn register_validity<T, F>(&mut self, predicate: F) -> &mut Self
    where
        T: 'static,
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.validity.register::<T, F>(predicate);
        self
    }

    /// Validity predicate for singletons cached under a capability key.
    pub fn register_trait_validity<Cap, F>(&mut self, predicate: F) -> &mut Self
    where
        Cap: ?Sized + Send + Sync + 'static,
        F: Fn(&Arc<Cap>) -> bool + Send + Sync + 'static,
    {
        self.validity
            .register::<Arc<Cap>, _>(move |instance| predicate(instance));
        self
    }

    /// The accumulated registrations, in insertion order.
    pub fn collection(&self) -> &DependencyCollection {
        &self.collection
    }

    /// Snapshots the current registrations into an independent provider with
    /// its own singleton cache.
    pub fn make(&self) -> DependencyProvider {
        DependencyProvider::from_parts(
            self.collection.iter().cloned(),
            self.injectors.clone(),
            self.validity.clone(),
        )
    }
}
