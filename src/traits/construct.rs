//! Constructor injection for auto-wired types.

use crate::error::DiResult;
use crate::provider::ResolverContext;

/// Explicit constructor injection: the auto-wiring entry point.
///
/// Rust has no runtime constructor reflection, so a type opts into
/// auto-wiring by implementing `Construct` and resolving its own dependencies
/// through the resolver. Registering the type with
/// [`DependencyContainer::register`](crate::DependencyContainer::register)
/// then needs no hand-written factory.
///
/// Failures from nested `get` calls should be propagated with `?` so the
/// original missing type surfaces to the caller. Use
/// [`DiError::construction`](crate::DiError::construction) for failures
/// intrinsic to the type itself.
///
/// # Examples
///
/// ```rust
/// use cobalt_di::{Construct, DiResult, ResolverContext, Resolver};
/// use std::sync::Arc;
///
/// struct Database { url: String }
/// impl Construct for Database {
///     fn construct(_resolver: &ResolverContext<'_>) -> DiResult<Self> {
///         Ok(Database { url: "postgres://localhost".to_string() })
///     }
/// }
///
/// struct UserService { db: Arc<Database> }
/// impl Construct for UserService {
///     fn construct(resolver: &ResolverContext<'_>) -> DiResult<Self> {
///         Ok(UserService { db: resolver.get::<Database>()? })
///     }
/// }
/// ```
pub trait Construct: Sized {
    /// Builds an instance, resolving constructor arguments through `resolver`.
    fn construct(resolver: &ResolverContext<'_>) -> DiResult<Self>;
}
