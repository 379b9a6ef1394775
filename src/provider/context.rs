//! Resolver context handed to factory and injector functions.

use std::any::{Any, TypeId};

use crate::dependency::AnyArc;
use crate::error::DiResult;
use crate::key::Key;
use crate::traits::ResolverCore;

/// The resolver view passed to factories and injectors.
///
/// Wraps whichever resolver invoked the factory, keeping factory signatures
/// independent of the concrete resolver type. All [`Resolver`](crate::Resolver)
/// methods are available on it.
///
/// # Examples
///
/// ```rust
/// use cobalt_di::{DependencyContainer, Lifetime, Resolver};
/// use std::sync::Arc;
///
/// struct Database { url: String }
/// struct UserService { db: Arc<Database> }
///
/// let mut container = DependencyContainer::new();
/// container.register_instance(Database { url: "postgres://localhost".to_string() });
/// container.register_factory::<UserService, _>(
///     |resolver| Ok(UserService { db: resolver.get::<Database>()? }),
///     Lifetime::Transient,
/// );
///
/// let provider = container.make();
/// let service = provider.get::<UserService>().unwrap();
/// assert_eq!(service.db.url, "postgres://localhost");
/// ```
pub struct ResolverContext<'a> {
    resolver: &'a dyn ResolverCore,
}

impl<'a> ResolverContext<'a> {
    pub(crate) fn new<T: ResolverCore>(resolver: &'a T) -> Self {
        Self { resolver }
    }
}

impl<'a> ResolverCore for ResolverContext<'a> {
    fn resolve_any(&self, key: &Key) -> DiResult<AnyArc> {
        self.resolver.resolve_any(key)
    }

    fn resolve_all(&self, key: &Key) -> DiResult<Vec<AnyArc>> {
        self.resolver.resolve_all(key)
    }

    fn inject_any(&self, type_id: TypeId, target: &mut dyn Any) -> DiResult<()> {
        self.resolver.inject_any(type_id, target)
    }
}
