//! # cobalt-di
//!
//! Lightweight dependency injection: a registry mapping requested types and
//! capabilities to factories, with singleton lifetime management,
//! multi-binding, and field injection into already-constructed objects.
//!
//! ## Features
//!
//! - **Auto-wiring**: types implement [`Construct`] and resolve their own
//!   constructor arguments recursively — no hand-written factories needed
//! - **Multi-binding**: every registered implementation of a capability,
//!   resolvable as an ordered collection
//! - **Deterministic ambiguity policy**: single-value lookups always return
//!   the first-registered dependency
//! - **Cycle detection**: circular graphs are reported with their full path
//!   instead of exhausting the call stack
//! - **Self-healing singletons**: pluggable validity predicates let the
//!   provider rebuild singletons torn down outside its control
//!
//! ## Quick Start
//!
//! ```rust
//! use cobalt_di::{Construct, DependencyContainer, DiResult, Lifetime, Resolver, ResolverContext};
//! use std::sync::Arc;
//!
//! struct Database {
//!     connection_string: String,
//! }
//!
//! impl Construct for Database {
//!     fn construct(_resolver: &ResolverContext<'_>) -> DiResult<Self> {
//!         Ok(Database { connection_string: "postgres://localhost".to_string() })
//!     }
//! }
//!
//! struct UserService {
//!     db: Arc<Database>,
//! }
//!
//! impl Construct for UserService {
//!     fn construct(resolver: &ResolverContext<'_>) -> DiResult<Self> {
//!         Ok(UserService { db: resolver.get::<Database>()? })
//!     }
//! }
//!
//! let mut container = DependencyContainer::new();
//! container.register::<Database>(Lifetime::Singleton);
//! container.register::<UserService>(Lifetime::Transient);
//!
//! let provider = container.make();
//! let service = provider.get::<UserService>().unwrap();
//! assert_eq!(service.db.connection_string, "postgres://localhost");
//! ```
//!
//! ## Capability bindings
//!
//! ```rust
//! use cobalt_di::{DependencyContainer, Lifetime, Resolver, ResolverContext};
//! use std::sync::Arc;
//!
//! trait Handler: Send + Sync {
//!     fn name(&self) -> &str;
//! }
//!
//! struct AuthHandler;
//! impl Handler for AuthHandler {
//!     fn name(&self) -> &str { "auth" }
//! }
//!
//! struct AuditHandler;
//! impl Handler for AuditHandler {
//!     fn name(&self) -> &str { "audit" }
//! }
//!
//! let mut container = DependencyContainer::new();
//! container.register_implementation::<dyn Handler>(
//!     Arc::new(|_: &ResolverContext<'_>| Ok(Arc::new(AuthHandler) as Arc<dyn Handler>)),
//!     Lifetime::Singleton,
//! );
//! container.register_implementation::<dyn Handler>(
//!     Arc::new(|_: &ResolverContext<'_>| Ok(Arc::new(AuditHandler) as Arc<dyn Handler>)),
//!     Lifetime::Singleton,
//! );
//!
//! let provider = container.make();
//! let handlers = provider.get_all_trait::<dyn Handler>().unwrap();
//! assert_eq!(handlers.len(), 2);
//! assert_eq!(handlers[0].name(), "auth");
//! ```

pub mod collection;
pub mod container;
pub mod dependency;
pub mod error;
pub mod factory;
pub mod key;
pub mod lifetime;
pub mod provider;
pub mod traits;

mod injection;
mod internal;
mod validity;

pub use collection::DependencyCollection;
pub use container::DependencyContainer;
pub use dependency::{AnyArc, Delegate, Dependency};
pub use error::{DiError, DiResult};
pub use factory::ImplementationFactory;
pub use key::Key;
pub use lifetime::Lifetime;
pub use provider::{DependencyProvider, ResolverContext};
pub use traits::{Construct, Resolver, ResolverCore};
