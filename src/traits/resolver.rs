//! Resolver traits for dependency resolution.

use std::any::{Any, TypeId};
use std::sync::Arc;

use crate::dependency::AnyArc;
use crate::error::{DiError, DiResult};
use crate::key::Key;

/// Object-safe resolution core.
///
/// Handles the low-level mechanics: key-based lookup, cycle detection, and
/// running registered field injectors. Most code should use the [`Resolver`]
/// extension trait, which layers type-safe generic methods on top.
pub trait ResolverCore: Send + Sync {
    /// Resolves the first-registered dependency for `key`.
    fn resolve_any(&self, key: &Key) -> DiResult<AnyArc>;

    /// Resolves every dependency registered for `key`, in registration order.
    ///
    /// Returns an empty vector (not an error) when nothing is registered.
    fn resolve_all(&self, key: &Key) -> DiResult<Vec<AnyArc>>;

    /// Runs every injector registered for `type_id` against `target`.
    fn inject_any(&self, type_id: TypeId, target: &mut dyn Any) -> DiResult<()>;
}

/// Type-safe resolution interface implemented by the provider and by the
/// resolver context handed to factories.
///
/// # Examples
///
/// ```rust
/// use cobalt_di::{DependencyContainer, Lifetime, Resolver};
/// use std::sync::Arc;
///
/// trait Logger: Send + Sync {
///     fn log(&self, msg: &str);
/// }
///
/// struct ConsoleLogger;
/// impl Logger for ConsoleLogger {
///     fn log(&self, msg: &str) {
///         println!("LOG: {}", msg);
///     }
/// }
///
/// let mut container = DependencyContainer::new();
/// container.register_instance(7usize);
/// container.register_factory_as::<dyn Logger, ConsoleLogger, _>(
///     |_| Ok(ConsoleLogger),
///     |c| c,
///     Lifetime::Singleton,
/// );
///
/// let provider = container.make();
/// assert_eq!(*provider.get::<usize>().unwrap(), 7);
/// provider.get_trait::<dyn Logger>().unwrap().log("resolved");
/// ```
pub trait Resolver: ResolverCore {
    /// Resolves a concrete type.
    fn get<T: 'static + Send + Sync>(&self) -> DiResult<Arc<T>> {
        let any = self.resolve_any(&Key::of_type::<T>())?;
        any.downcast::<T>()
            .map_err(|_| DiError::TypeMismatch(std::any::type_name::<T>()))
    }

    /// Resolves a single capability binding.
    ///
    /// When multiple dependencies are registered for the capability, the
    /// first-registered one wins, deterministically. Use
    /// [`get_all_trait`](Self::get_all_trait) to see every registration.
    fn get_trait<Cap: ?Sized + 'static + Send + Sync>(&self) -> DiResult<Arc<Cap>> {
        let any = self.resolve_any(&Key::of_trait::<Cap>())?;
        any.downcast::<Arc<Cap>>()
            .map(|boxed| (*boxed).clone())
            .map_err(|_| DiError::TypeMismatch(std::any::type_name::<Cap>()))
    }

    /// Resolves every registered implementation of a capability, in
    /// registration order. An empty vector is a valid result.
    ///
    /// Each registration applies its own lifetime independently: singletons
    /// come from the cache, transients are constructed fresh.
    fn get_all_trait<Cap: ?Sized + 'static + Send + Sync>(&self) -> DiResult<Vec<Arc<Cap>>> {
        let anys = self.resolve_all(&Key::of_trait::<Cap>())?;
        let mut results = Vec::with_capacity(anys.len());
        for any in anys {
            let arc = any
                .downcast::<Arc<Cap>>()
                .map(|boxed| (*boxed).clone())
                .map_err(|_| DiError::TypeMismatch(std::any::type_name::<Cap>()))?;
            results.push(arc);
        }
        Ok(results)
    }

    /// Resolves a concrete type, panicking on failure.
    fn get_required<T: 'static + Send + Sync>(&self) -> Arc<T> {
        self.get::<T>().unwrap_or_else(|e| {
            panic!("Failed to resolve {}: {}", std::any::type_name::<T>(), e)
        })
    }

    /// Resolves a capability binding, panicking on failure.
    fn get_required_trait<Cap: ?Sized + 'static + Send + Sync>(&self) -> Arc<Cap> {
        self.get_trait::<Cap>().unwrap_or_else(|e| {
            panic!("Failed to resolve trait {}: {}", std::any::type_name::<Cap>(), e)
        })
    }

    /// Runs every injector registered for `T` against `target`, in
    /// registration order, and returns the same object.
    ///
    /// Types with no registered injectors come back untouched. A failure
    /// part-way through aborts the remaining injectors; use
    /// [`inject_into`](Self::inject_into) to keep the target on failure.
    fn inject<T: 'static>(&self, mut target: T) -> DiResult<T> {
        self.inject_into(&mut target)?;
        Ok(target)
    }

    /// In-place variant of [`inject`](Self::inject). Fields assigned before a
    /// failure stay assigned; there is no rollback.
    fn inject_into<T: 'static>(&self, target: &mut T) -> DiResult<()> {
        self.inject_any(TypeId::of::<T>(), target)
    }
}

impl<T: ResolverCore + ?Sized> Resolver for T {}
